use super::*;
use crate::{
    ComponentKind, CoolerSpecs, CpuSpecs, GpuSpecs, M2StorageSpecs, MotherboardSpecs, PsuSpecs,
    RamSpecs, SataStorageSpecs, Specs,
};
use proptest::prelude::*;

fn part(id: u64, specs: Specs) -> Component {
    Component {
        id: ComponentId::new(id),
        brand: "Test".into(),
        name: format!("Part {}", id),
        price: 100,
        specs,
    }
}

fn cpu(id: u64, socket: &str, tdp: u32) -> Component {
    part(
        id,
        Specs::Cpu(CpuSpecs {
            socket: socket.into(),
            tdp_watts: tdp,
            ..Default::default()
        }),
    )
}

fn board(id: u64, socket: &str) -> Component {
    part(
        id,
        Specs::Motherboard(MotherboardSpecs {
            socket: socket.into(),
            ram_type: "DDR5".into(),
            ram_slots: 4,
            max_ram_gb: 128,
            m2_slots: 2,
            sata_ports: 4,
            pcie5_x16: 1,
            ..Default::default()
        }),
    )
}

fn ram(id: u64, ram_type: &str, modules: u32, capacity_gb: u32) -> Component {
    part(
        id,
        Specs::Ram(RamSpecs {
            ram_type: ram_type.into(),
            modules,
            capacity_gb,
            ..Default::default()
        }),
    )
}

fn gpu(id: u64, tdp: u32) -> Component {
    part(
        id,
        Specs::Gpu(GpuSpecs {
            tdp_watts: tdp,
            ..Default::default()
        }),
    )
}

fn psu(id: u64, wattage: u32) -> Component {
    part(
        id,
        Specs::Psu(PsuSpecs {
            wattage,
            ..Default::default()
        }),
    )
}

fn m2(id: u64) -> Component {
    part(id, Specs::M2Storage(M2StorageSpecs::default()))
}

fn sata(id: u64) -> Component {
    part(id, Specs::SataStorage(SataStorageSpecs::default()))
}

fn cooler(id: u64, sockets: &[&str], rating: u32) -> Component {
    part(
        id,
        Specs::Cooler(CoolerSpecs {
            sockets: sockets.iter().map(|s| s.to_string()).collect(),
            tdp_rating_watts: rating,
            ..Default::default()
        }),
    )
}

#[test]
fn test_no_build_context_is_unknown() {
    let evaluator = Evaluator::default();
    assert_eq!(evaluator.verdict(&board(1, "AM5"), None), Verdict::Unknown);
}

#[test]
fn test_empty_build_is_unknown() {
    let evaluator = Evaluator::default();
    let build = BuildSnapshot::new();
    assert_eq!(evaluator.verdict(&gpu(1, 200), Some(&build)), Verdict::Unknown);
}

#[test]
fn test_no_counterpart_is_unknown() {
    // a GPU has no rule against RAM
    let evaluator = Evaluator::default();
    let build = BuildSnapshot::new().with(ram(1, "DDR5", 2, 32));
    assert_eq!(evaluator.verdict(&gpu(2, 200), Some(&build)), Verdict::Unknown);
}

#[test]
fn test_socket_scenario() {
    let evaluator = Evaluator::default();
    let build = BuildSnapshot::new().with(cpu(1, "AM5", 120));

    let am4 = evaluator.evaluate(&board(2, "AM4"), Some(&build));
    assert_eq!(am4.verdict, Verdict::Incompatible);
    let failure = am4.failures().next().unwrap();
    assert_eq!(failure.rule, Rule::CpuSocket);
    assert_eq!(failure.counterpart, ComponentId::new(1));

    assert_eq!(
        evaluator.verdict(&board(3, "AM5"), Some(&build)),
        Verdict::Compatible
    );
}

#[test]
fn test_rules_are_symmetric() {
    let evaluator = Evaluator::default();
    let build = BuildSnapshot::new().with(board(1, "AM5"));
    assert_eq!(
        evaluator.verdict(&cpu(2, "LGA1700", 125), Some(&build)),
        Verdict::Incompatible
    );
    assert_eq!(
        evaluator.verdict(&cpu(3, "am5", 125), Some(&build)),
        Verdict::Compatible
    );
}

#[test]
fn test_ram_type_and_slots() {
    let evaluator = Evaluator::default();
    let build = BuildSnapshot::new().with(board(1, "AM5"));
    assert_eq!(
        evaluator.verdict(&ram(2, "DDR4", 2, 32), Some(&build)),
        Verdict::Incompatible
    );

    let build = build.with(ram(3, "DDR5", 2, 32));
    assert_eq!(
        evaluator.verdict(&ram(4, "DDR5", 2, 32), Some(&build)),
        Verdict::Compatible
    );
    let build = build.with(ram(4, "DDR5", 2, 32));
    let fifth = evaluator.evaluate(&ram(5, "DDR5", 1, 16), Some(&build));
    assert_eq!(fifth.verdict, Verdict::Incompatible);
    assert_eq!(fifth.failures().next().unwrap().rule, Rule::RamSlots);
}

#[test]
fn test_ram_capacity_limit() {
    let evaluator = Evaluator::default();
    let build = BuildSnapshot::new()
        .with(board(1, "AM5"))
        .with(ram(2, "DDR5", 2, 96));
    let evaluation = evaluator.evaluate(&ram(3, "DDR5", 2, 64), Some(&build));
    assert_eq!(evaluation.verdict, Verdict::Incompatible);
    assert!(evaluation.failures().any(|f| f.rule == Rule::RamCapacity));
}

#[test]
fn test_board_candidate_checks_assigned_storage() {
    let evaluator = Evaluator::default();
    let build = BuildSnapshot::new().with(m2(1)).with(m2(2)).with(m2(3));
    let evaluation = evaluator.evaluate(&board(4, "AM5"), Some(&build));
    assert_eq!(evaluation.verdict, Verdict::Incompatible);
    assert!(evaluation.failures().any(|f| f.rule == Rule::M2Slots));
}

#[test]
fn test_sata_and_gpu_slots() {
    let evaluator = Evaluator::default();
    let mut build = BuildSnapshot::new().with(board(1, "AM5"));
    for id in 10..14 {
        build.assign(sata(id));
    }
    assert_eq!(evaluator.verdict(&sata(20), Some(&build)), Verdict::Incompatible);

    build.assign(gpu(30, 200));
    assert_eq!(evaluator.verdict(&gpu(31, 200), Some(&build)), Verdict::Incompatible);
}

#[test]
fn test_cooler_rules() {
    let evaluator = Evaluator::default();
    let build = BuildSnapshot::new()
        .with(cpu(1, "AM5", 170))
        .with(board(2, "AM5"));

    assert_eq!(
        evaluator.verdict(&cooler(3, &["AM4", "AM5"], 250), Some(&build)),
        Verdict::Compatible
    );
    assert_eq!(
        evaluator.verdict(&cooler(4, &["LGA1700"], 250), Some(&build)),
        Verdict::Incompatible
    );
    let weak = evaluator.evaluate(&cooler(5, &["AM5"], 95), Some(&build));
    assert_eq!(weak.verdict, Verdict::Incompatible);
    assert!(weak.failures().all(|f| f.rule == Rule::CoolerTdp));

    // no mounting data at all
    assert_eq!(
        evaluator.verdict(&cooler(6, &[], 0), Some(&build)),
        Verdict::Unknown
    );
}

#[test]
fn test_psu_headroom() {
    let evaluator = Evaluator::default();
    // (120 + 300 + 75) * 1.2 = 594
    let build = BuildSnapshot::new().with(cpu(1, "AM5", 120)).with(gpu(2, 300));
    assert_eq!(evaluator.verdict(&psu(3, 550), Some(&build)), Verdict::Incompatible);
    assert_eq!(evaluator.verdict(&psu(4, 650), Some(&build)), Verdict::Compatible);

    // a consumer candidate is counted against the assigned PSU
    let build = BuildSnapshot::new().with(cpu(1, "AM5", 120)).with(psu(5, 650));
    assert_eq!(evaluator.verdict(&gpu(6, 300), Some(&build)), Verdict::Compatible);
    assert_eq!(evaluator.verdict(&gpu(7, 450), Some(&build)), Verdict::Incompatible);
}

#[test]
fn test_single_slot_candidate_replaces_assigned() {
    let evaluator = Evaluator::default();
    let build = BuildSnapshot::new()
        .with(board(1, "AM5"))
        .with(cpu(2, "AM5", 120))
        .with(psu(3, 400));

    // (170 + 75) * 1.2 = 294 once the 120 W part is swapped out
    let upgrade = evaluator.evaluate(&cpu(4, "AM5", 170), Some(&build));
    assert_eq!(upgrade.verdict, Verdict::Compatible);
    assert!(upgrade.findings.iter().all(|f| f.counterpart != ComponentId::new(2)));

    let heavy = evaluator.evaluate(&cpu(5, "AM5", 300), Some(&build));
    assert_eq!(heavy.verdict, Verdict::Incompatible);
    assert!(heavy.failures().all(|f| f.rule == Rule::PsuWattage));

    // a replacement PSU only has to cover the assigned CPU
    assert_eq!(evaluator.verdict(&psu(6, 300), Some(&build)), Verdict::Compatible);
}

#[test]
fn test_multi_slot_candidate_is_added() {
    let evaluator = Evaluator::default();
    // (120 + 200 + 200 + 75) * 1.2 = 714
    let build = BuildSnapshot::new()
        .with(cpu(1, "AM5", 120))
        .with(gpu(2, 200))
        .with(psu(3, 650));
    assert_eq!(evaluator.verdict(&gpu(4, 200), Some(&build)), Verdict::Incompatible);
}

#[test]
fn test_power_rule_covers_every_consumer() {
    let rule = RULES.iter().find(|r| r.rule == Rule::PsuWattage).unwrap();
    for kind in ComponentKind::ALL {
        assert_eq!(rule.partners.contains(&kind), kind.is_power_consumer());
    }
}

#[test]
fn test_psu_without_consumers_is_unknown() {
    let evaluator = Evaluator::new(EvaluatorConfig {
        psu_headroom_percent: 0,
        peripheral_watts: 0,
    });
    let build = BuildSnapshot::new().with(board(1, "AM5"));
    assert_eq!(evaluator.verdict(&psu(2, 850), Some(&build)), Verdict::Unknown);
}

#[test]
fn test_unknown_does_not_mask_failure() {
    let evaluator = Evaluator::default();
    let build = BuildSnapshot::new()
        .with(cpu(1, "AM5", 120))
        .with(ram(2, "", 2, 32));
    // socket fails, memory type cannot be checked
    assert_eq!(
        evaluator.verdict(&board(3, "AM4"), Some(&build)),
        Verdict::Incompatible
    );
    assert_eq!(
        evaluator.verdict(&board(4, "AM5"), Some(&build)),
        Verdict::Unknown
    );
}

#[test]
fn test_removing_counterpart_yields_unknown() {
    let evaluator = Evaluator::default();
    let with_cpu = BuildSnapshot::new().with(cpu(1, "AM5", 120));
    let candidate = board(2, "AM5");
    assert_eq!(evaluator.verdict(&candidate, Some(&with_cpu)), Verdict::Compatible);
    assert_eq!(
        evaluator.verdict(&candidate, Some(&BuildSnapshot::new())),
        Verdict::Unknown
    );
}

#[test]
fn test_verdict_conjunction() {
    use Verdict::*;
    assert_eq!(Verdict::all(Vec::new()), Unknown);
    assert_eq!(Verdict::all([Compatible, Compatible]), Compatible);
    assert_eq!(Verdict::all([Compatible, Unknown]), Unknown);
    assert_eq!(Verdict::all([Unknown, Incompatible, Compatible]), Incompatible);
}

fn any_component() -> impl Strategy<Value = Component> {
    let sockets = prop::sample::select(vec!["AM4", "AM5", "LGA1700"]);
    let ram_types = prop::sample::select(vec!["DDR4", "DDR5"]);
    (0usize..8, sockets, ram_types, 0u32..6, 0u32..600, any::<u64>()).prop_map(
        |(which, socket, ram_type, count, watts, id)| {
            let specs = match ComponentKind::ALL[which] {
                ComponentKind::Cpu => Specs::Cpu(CpuSpecs {
                    socket: socket.into(),
                    tdp_watts: watts / 3,
                    ..Default::default()
                }),
                ComponentKind::Motherboard => Specs::Motherboard(MotherboardSpecs {
                    socket: socket.into(),
                    ram_type: ram_type.into(),
                    ram_slots: count,
                    max_ram_gb: count * 32,
                    m2_slots: count,
                    sata_ports: count,
                    pcie4_x16: count / 2,
                    ..Default::default()
                }),
                ComponentKind::Cooler => Specs::Cooler(CoolerSpecs {
                    sockets: vec![socket.into()],
                    tdp_rating_watts: watts / 2,
                    ..Default::default()
                }),
                ComponentKind::Ram => Specs::Ram(RamSpecs {
                    ram_type: ram_type.into(),
                    modules: count,
                    capacity_gb: count * 16,
                    ..Default::default()
                }),
                ComponentKind::Gpu => Specs::Gpu(GpuSpecs {
                    tdp_watts: watts,
                    ..Default::default()
                }),
                ComponentKind::M2Storage => Specs::M2Storage(M2StorageSpecs::default()),
                ComponentKind::SataStorage => Specs::SataStorage(SataStorageSpecs::default()),
                ComponentKind::Psu => Specs::Psu(PsuSpecs {
                    wattage: watts * 2,
                    ..Default::default()
                }),
            };
            part(id, specs)
        },
    )
}

proptest! {
    #[test]
    fn prop_incompatible_stays_incompatible(
        candidate in any_component(),
        base in prop::collection::vec(any_component(), 0..6),
        extra in prop::collection::vec(any_component(), 0..6),
    ) {
        let evaluator = Evaluator::default();
        let build = BuildSnapshot::from_components(base.clone());
        if evaluator.verdict(&candidate, Some(&build)) == Verdict::Incompatible {
            let mut grown = base;
            grown.extend(extra);
            let grown = BuildSnapshot::from_components(grown);
            prop_assert_eq!(evaluator.verdict(&candidate, Some(&grown)), Verdict::Incompatible);
        }
    }

    #[test]
    fn prop_empty_build_is_unknown(candidate in any_component()) {
        let evaluator = Evaluator::default();
        prop_assert_eq!(
            evaluator.verdict(&candidate, Some(&BuildSnapshot::new())),
            Verdict::Unknown
        );
    }
}
