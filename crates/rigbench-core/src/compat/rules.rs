//! The compatibility rule table
//!
//! Every rule is anchored on one kind (the component that provides a
//! resource: motherboard, cooler, PSU) and lists the partner kinds that
//! consume it. A rule applies whenever the candidate is the anchor and a
//! partner is assigned, or the candidate is a partner and an anchor is
//! assigned.
//!
//! Pair rules compare the anchor with one partner at a time. Aggregate
//! rules look at the anchor and the projected set of partners, which is
//! everything assigned plus the candidate itself.

use super::{Finding, Rule, Verdict};
use crate::{BuildSnapshot, Component, ComponentKind, EvaluatorConfig};

pub(crate) struct RuleContext<'a> {
    pub candidate: &'a Component,
    pub build: &'a BuildSnapshot,
    pub config: &'a EvaluatorConfig,
}

impl<'a> RuleContext<'a> {
    /// Assigned components of a kind plus the candidate if it is one
    fn projected(&self, kind: ComponentKind) -> Vec<&'a Component> {
        let mut out: Vec<&'a Component> = self.build.of_kind(kind).collect();
        if self.candidate.kind() == kind {
            out.push(self.candidate);
        }
        out
    }

    /// Assigned power consumers plus the candidate if it is one
    fn consumers(&self) -> Vec<&'a Component> {
        let mut out: Vec<&'a Component> = self
            .build
            .components()
            .iter()
            .filter(|c| c.kind().is_power_consumer())
            .collect();
        if self.candidate.kind().is_power_consumer() {
            out.push(self.candidate);
        }
        out
    }
}

pub(crate) struct Outcome {
    verdict: Verdict,
    reason: String,
}

fn pass(reason: impl Into<String>) -> Option<Outcome> {
    Some(Outcome {
        verdict: Verdict::Compatible,
        reason: reason.into(),
    })
}

fn fail(reason: impl Into<String>) -> Option<Outcome> {
    Some(Outcome {
        verdict: Verdict::Incompatible,
        reason: reason.into(),
    })
}

fn unknown(reason: impl Into<String>) -> Option<Outcome> {
    Some(Outcome {
        verdict: Verdict::Unknown,
        reason: reason.into(),
    })
}

fn check_limit(used: u64, available: u64, what: &str) -> Option<Outcome> {
    if used <= available {
        pass(format!("{} of {} {} used", used, available, what))
    } else {
        fail(format!("needs {} {} but only {} available", used, what, available))
    }
}

fn same_token(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

type PairCheck = fn(&Component, &Component, &RuleContext<'_>) -> Option<Outcome>;
type AggregateCheck = fn(&Component, &RuleContext<'_>) -> Option<Outcome>;

#[derive(Clone, Copy)]
enum Check {
    /// Anchor against each partner
    Pair(PairCheck),
    /// Anchor against the projected partner set
    Aggregate(AggregateCheck),
}

/// One entry of the rule table
pub struct RuleDef {
    pub rule: Rule,
    pub anchor: ComponentKind,
    pub partners: &'static [ComponentKind],
    check: Check,
}

impl RuleDef {
    pub(crate) fn apply(&self, cx: &RuleContext<'_>) -> Vec<Finding> {
        let kind = cx.candidate.kind();
        let finding = |counterpart: &Component, outcome: Outcome| Finding {
            rule: self.rule,
            counterpart: counterpart.id,
            verdict: outcome.verdict,
            reason: outcome.reason,
        };

        if kind == self.anchor {
            let partners: Vec<&Component> = self
                .partners
                .iter()
                .flat_map(|k| cx.build.of_kind(*k))
                .collect();
            match self.check {
                Check::Pair(check) => partners
                    .into_iter()
                    .filter_map(|p| check(cx.candidate, p, cx).map(|o| finding(p, o)))
                    .collect(),
                Check::Aggregate(check) => match partners.first().copied() {
                    Some(first) => check(cx.candidate, cx)
                        .map(|o| finding(first, o))
                        .into_iter()
                        .collect(),
                    None => Vec::new(),
                },
            }
        } else if self.partners.contains(&kind) {
            cx.build
                .of_kind(self.anchor)
                .filter_map(|anchor| {
                    let outcome = match self.check {
                        Check::Pair(check) => check(anchor, cx.candidate, cx),
                        Check::Aggregate(check) => check(anchor, cx),
                    };
                    outcome.map(|o| finding(anchor, o))
                })
                .collect()
        } else {
            Vec::new()
        }
    }
}

fn cpu_socket(board: &Component, cpu: &Component, _: &RuleContext<'_>) -> Option<Outcome> {
    let (Some(board), Some(cpu)) = (board.as_motherboard(), cpu.as_cpu()) else {
        return unknown("attributes unavailable");
    };
    if board.socket.trim().is_empty() || cpu.socket.trim().is_empty() {
        return unknown("socket not specified");
    }
    if same_token(&board.socket, &cpu.socket) {
        pass(format!("socket {} matches", cpu.socket))
    } else {
        fail(format!(
            "CPU socket {} does not fit motherboard socket {}",
            cpu.socket, board.socket
        ))
    }
}

fn ram_type(board: &Component, ram: &Component, _: &RuleContext<'_>) -> Option<Outcome> {
    let (Some(board), Some(ram)) = (board.as_motherboard(), ram.as_ram()) else {
        return unknown("attributes unavailable");
    };
    if board.ram_type.trim().is_empty() || ram.ram_type.trim().is_empty() {
        return unknown("memory type not specified");
    }
    if same_token(&board.ram_type, &ram.ram_type) {
        pass(format!("{} supported", ram.ram_type))
    } else {
        fail(format!(
            "{} memory in a {} motherboard",
            ram.ram_type, board.ram_type
        ))
    }
}

fn ram_slots(board: &Component, cx: &RuleContext<'_>) -> Option<Outcome> {
    let board = board.as_motherboard()?;
    let modules: u64 = cx
        .projected(ComponentKind::Ram)
        .iter()
        .filter_map(|c| c.as_ram())
        .map(|r| r.modules.max(1) as u64)
        .sum();
    if board.ram_slots == 0 {
        return unknown("memory slot count not specified");
    }
    check_limit(modules, board.ram_slots as u64, "memory slots")
}

fn ram_capacity(board: &Component, cx: &RuleContext<'_>) -> Option<Outcome> {
    let board = board.as_motherboard()?;
    // zero: no published limit
    if board.max_ram_gb == 0 {
        return None;
    }
    let total: u64 = cx
        .projected(ComponentKind::Ram)
        .iter()
        .filter_map(|c| c.as_ram())
        .map(|r| r.capacity_gb as u64)
        .sum();
    check_limit(total, board.max_ram_gb as u64, "GB of memory")
}

fn m2_slots(board: &Component, cx: &RuleContext<'_>) -> Option<Outcome> {
    let board = board.as_motherboard()?;
    let used = cx.projected(ComponentKind::M2Storage).len() as u64;
    check_limit(used, board.m2_slots as u64, "M.2 slots")
}

fn sata_ports(board: &Component, cx: &RuleContext<'_>) -> Option<Outcome> {
    let board = board.as_motherboard()?;
    let used = cx.projected(ComponentKind::SataStorage).len() as u64;
    check_limit(used, board.sata_ports as u64, "SATA ports")
}

fn gpu_slots(board: &Component, cx: &RuleContext<'_>) -> Option<Outcome> {
    let board = board.as_motherboard()?;
    let used = cx.projected(ComponentKind::Gpu).len() as u64;
    check_limit(used, board.x16_slots() as u64, "x16 slots")
}

fn cooler_cpu_socket(cooler: &Component, cpu: &Component, _: &RuleContext<'_>) -> Option<Outcome> {
    let (Some(cooler), Some(cpu)) = (cooler.as_cooler(), cpu.as_cpu()) else {
        return unknown("attributes unavailable");
    };
    if cooler.sockets.is_empty() || cpu.socket.trim().is_empty() {
        return unknown("socket not specified");
    }
    if cooler.supports_socket(&cpu.socket) {
        pass(format!("mounts on {}", cpu.socket))
    } else {
        fail(format!("no mounting kit for {}", cpu.socket))
    }
}

fn cooler_tdp(cooler: &Component, cpu: &Component, _: &RuleContext<'_>) -> Option<Outcome> {
    let (cooler, cpu) = (cooler.as_cooler()?, cpu.as_cpu()?);
    // zero: rating or TDP not published
    if cooler.tdp_rating_watts == 0 || cpu.tdp_watts == 0 {
        return None;
    }
    if cooler.tdp_rating_watts >= cpu.tdp_watts {
        pass(format!(
            "rated {} W for a {} W CPU",
            cooler.tdp_rating_watts, cpu.tdp_watts
        ))
    } else {
        fail(format!(
            "rated {} W but the CPU draws {} W",
            cooler.tdp_rating_watts, cpu.tdp_watts
        ))
    }
}

fn cooler_board_socket(
    cooler: &Component,
    board: &Component,
    _: &RuleContext<'_>,
) -> Option<Outcome> {
    let (Some(cooler), Some(board)) = (cooler.as_cooler(), board.as_motherboard()) else {
        return unknown("attributes unavailable");
    };
    if cooler.sockets.is_empty() || board.socket.trim().is_empty() {
        return unknown("socket not specified");
    }
    if cooler.supports_socket(&board.socket) {
        pass(format!("mounts on {}", board.socket))
    } else {
        fail(format!("no mounting kit for {}", board.socket))
    }
}

fn psu_wattage(psu: &Component, cx: &RuleContext<'_>) -> Option<Outcome> {
    let psu = psu.as_psu()?;
    let consumers = cx.consumers();
    if consumers.is_empty() {
        return None;
    }
    if psu.wattage == 0 {
        return unknown("wattage not specified");
    }
    let load: u64 = consumers
        .iter()
        .map(|c| c.power_draw_watts() as u64)
        .sum::<u64>()
        + cx.config.peripheral_watts as u64;
    let required = load * (100 + cx.config.psu_headroom_percent as u64);
    if psu.wattage as u64 * 100 >= required {
        pass(format!("{} W for an estimated {} W load", psu.wattage, load))
    } else {
        fail(format!(
            "{} W is short of {} W load plus {}% headroom",
            psu.wattage, load, cx.config.psu_headroom_percent
        ))
    }
}

/// Every compatibility rule
pub static RULES: &[RuleDef] = &[
    RuleDef {
        rule: Rule::CpuSocket,
        anchor: ComponentKind::Motherboard,
        partners: &[ComponentKind::Cpu],
        check: Check::Pair(cpu_socket),
    },
    RuleDef {
        rule: Rule::RamType,
        anchor: ComponentKind::Motherboard,
        partners: &[ComponentKind::Ram],
        check: Check::Pair(ram_type),
    },
    RuleDef {
        rule: Rule::RamSlots,
        anchor: ComponentKind::Motherboard,
        partners: &[ComponentKind::Ram],
        check: Check::Aggregate(ram_slots),
    },
    RuleDef {
        rule: Rule::RamCapacity,
        anchor: ComponentKind::Motherboard,
        partners: &[ComponentKind::Ram],
        check: Check::Aggregate(ram_capacity),
    },
    RuleDef {
        rule: Rule::M2Slots,
        anchor: ComponentKind::Motherboard,
        partners: &[ComponentKind::M2Storage],
        check: Check::Aggregate(m2_slots),
    },
    RuleDef {
        rule: Rule::SataPorts,
        anchor: ComponentKind::Motherboard,
        partners: &[ComponentKind::SataStorage],
        check: Check::Aggregate(sata_ports),
    },
    RuleDef {
        rule: Rule::GpuSlots,
        anchor: ComponentKind::Motherboard,
        partners: &[ComponentKind::Gpu],
        check: Check::Aggregate(gpu_slots),
    },
    RuleDef {
        rule: Rule::CoolerCpuSocket,
        anchor: ComponentKind::Cooler,
        partners: &[ComponentKind::Cpu],
        check: Check::Pair(cooler_cpu_socket),
    },
    RuleDef {
        rule: Rule::CoolerTdp,
        anchor: ComponentKind::Cooler,
        partners: &[ComponentKind::Cpu],
        check: Check::Pair(cooler_tdp),
    },
    RuleDef {
        rule: Rule::CoolerBoardSocket,
        anchor: ComponentKind::Cooler,
        partners: &[ComponentKind::Motherboard],
        check: Check::Pair(cooler_board_socket),
    },
    RuleDef {
        rule: Rule::PsuWattage,
        anchor: ComponentKind::Psu,
        partners: &[ComponentKind::Cpu, ComponentKind::Gpu],
        check: Check::Aggregate(psu_wattage),
    },
];
