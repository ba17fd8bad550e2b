//! Database store wrapper and mutations.

use crate::error::{Error, Result};
use crate::models::*;
use chrono::{Local, NaiveDate};
use native_db::transaction::RwTransaction;
use native_db::*;
use rigbench_core::{
    Build, BuildChanges, BuildGroup, BuildId, BuildPrice, Component, ComponentChanges,
    ComponentId, ComponentKind, EdgeId, Evaluator, EvaluatorConfig, GroupId, LinkId,
    NewComponent, PriceHistory, Relation, RetailerLink, RetailerTable, BUILD_TAG, GROUP_TAG,
};
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info};

// Static models for the database
static MODELS: LazyLock<Models> = LazyLock::new(|| {
    let mut models = Models::new();
    models
        .define::<StoredComponentV1>()
        .expect("component v1 model");
    models.define::<StoredComponent>().expect("component model");
    models.define::<StoredBuild>().expect("build model");
    models.define::<StoredBuildGroup>().expect("build group model");
    models.define::<StoredEdge>().expect("edge model");
    models
        .define::<StoredRetailerLink>()
        .expect("retailer link model");
    models.define::<StoredSequence>().expect("sequence model");
    models
});

/// Name given to a build created from scratch
pub const NEW_BUILD_NAME: &str = "New build";

/// Catalog store.
///
/// All calls are synchronous: each one runs in its own transaction and
/// returns after the commit.
pub struct Store {
    pub(crate) db: Database<'static>,
    pub(crate) evaluator: Evaluator,
    pub(crate) retailers: RetailerTable,
}

impl Store {
    /// Open or create a database at the given path, migrating it.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Builder::new().create(&MODELS, path.as_ref())?;
        Self::from_db(db)
    }

    /// Create an in-memory database.
    pub fn in_memory() -> Result<Self> {
        let db = Builder::new().create_in_memory(&MODELS)?;
        Self::from_db(db)
    }

    fn from_db(db: Database<'static>) -> Result<Self> {
        let store = Self {
            db,
            evaluator: Evaluator::default(),
            retailers: RetailerTable::default(),
        };
        store.migrate()?;
        Ok(store)
    }

    /// Use different compatibility tunables.
    pub fn with_evaluator(mut self, config: EvaluatorConfig) -> Self {
        self.evaluator = Evaluator::new(config);
        self
    }

    /// Use a different retailer table.
    pub fn with_retailers(mut self, retailers: RetailerTable) -> Self {
        self.retailers = retailers;
        self
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    pub fn retailers(&self) -> &RetailerTable {
        &self.retailers
    }

    /// Upgrade old rows and make sure the id sequence is ahead of every
    /// stored id.
    fn migrate(&self) -> Result<()> {
        let rw = self.db.rw_transaction()?;
        rw.migrate::<StoredComponent>()?;

        let sequence: Option<StoredSequence> = rw.get().primary(SEQUENCE_KEY.to_string())?;
        if sequence.is_none() {
            let next = max_stored_id(&rw)? + 1;
            rw.insert(StoredSequence::starting_at(next))?;
            info!(next, "initialized id sequence");
        }

        rw.commit()?;
        info!("database migrated");
        Ok(())
    }

    /// Add a component to the catalog.
    pub fn create_component(&self, new: NewComponent) -> Result<Component> {
        let rw = self.db.rw_transaction()?;
        let id = next_id(&rw)?;
        let component = new.into_component(ComponentId::new(id))?;
        rw.insert(StoredComponent::from_component(&component)?)?;
        rw.commit()?;
        info!(id = %component.id, kind = %component.kind(), "created component");
        Ok(component)
    }

    /// Edit a component. A price change refreshes every build using it.
    pub fn update_component(&self, id: ComponentId, changes: ComponentChanges) -> Result<Component> {
        let rw = self.db.rw_transaction()?;
        let stored: StoredComponent = rw
            .get()
            .primary(id.raw())?
            .ok_or_else(|| Error::not_found(id))?;
        let mut component = stored.to_component()?;
        let old_price = component.price;
        changes.apply(&mut component)?;
        rw.upsert(StoredComponent::from_component(&component)?)?;
        if component.price != old_price {
            refresh_builds_using(&rw, id.raw())?;
        }
        rw.commit()?;
        info!(%id, "updated component");
        Ok(component)
    }

    /// Delete a component. Edges pointing at it are left in place and
    /// filtered on read.
    pub fn delete_component(&self, id: ComponentId) -> Result<()> {
        let rw = self.db.rw_transaction()?;
        let stored: Option<StoredComponent> = rw.get().primary(id.raw())?;
        if let Some(s) = stored {
            rw.remove(s)?;
            refresh_builds_using(&rw, id.raw())?;
        }
        rw.commit()?;
        info!(%id, "deleted component");
        Ok(())
    }

    /// Create a build in a group, or copy an existing one into it.
    ///
    /// A copy gets the source's name with " (copy)" appended and the same
    /// component assignments.
    pub fn create_or_copy_build(&self, group: GroupId, copy_from: Option<BuildId>) -> Result<Build> {
        let rw = self.db.rw_transaction()?;
        let stored_group: Option<StoredBuildGroup> = rw.get().primary(group.raw())?;
        if stored_group.is_none() {
            return Err(Error::not_found(group));
        }

        let source = match copy_from {
            Some(source) => {
                let stored: StoredBuild = rw
                    .get()
                    .primary(source.raw())?
                    .ok_or_else(|| Error::not_found(source))?;
                Some(stored)
            }
            None => None,
        };

        let id = BuildId::new(next_id(&rw)?);
        let name = match &source {
            Some(source) => format!("{} (copy)", source.name),
            None => NEW_BUILD_NAME.to_string(),
        };
        let build = Build { id, name, price: 0 };
        rw.insert(StoredBuild::from_build(&build))?;

        let membership = Relation::GroupContainsBuild {
            edge: EdgeId::new(next_id(&rw)?),
            group,
            build: id,
        };
        rw.insert(StoredEdge::from_edge(&membership.to_edge()))?;

        if let Some(source) = &source {
            for edge in edges_from(&rw, source.id)? {
                if let Some(Relation::BuildHasComponent { component, kind, .. }) =
                    edge.to_edge().relation()
                {
                    let copied = Relation::BuildHasComponent {
                        edge: EdgeId::new(next_id(&rw)?),
                        build: id,
                        component,
                        kind,
                    };
                    rw.insert(StoredEdge::from_edge(&copied.to_edge()))?;
                }
            }
        }

        let price = refresh_build_price(&rw, id.raw())?;
        rw.commit()?;

        let build = Build { price, ..build };
        info!(id = %build.id, %group, copied = copy_from.is_some(), "created build");
        Ok(build)
    }

    /// Rename a build.
    pub fn update_build(&self, id: BuildId, changes: BuildChanges) -> Result<Build> {
        let rw = self.db.rw_transaction()?;
        let stored: StoredBuild = rw
            .get()
            .primary(id.raw())?
            .ok_or_else(|| Error::not_found(id))?;
        let mut build = stored.to_build();
        changes.apply(&mut build)?;
        rw.upsert(StoredBuild::from_build(&build))?;
        rw.commit()?;
        info!(%id, "updated build");
        Ok(build)
    }

    /// Delete a build and its group membership. Its component edges dangle.
    pub fn delete_build(&self, id: BuildId) -> Result<()> {
        let rw = self.db.rw_transaction()?;
        let stored: Option<StoredBuild> = rw.get().primary(id.raw())?;
        if let Some(s) = stored {
            rw.remove(s)?;
        }
        for edge in edges_to(&rw, id.raw())? {
            if edge.source_type == GROUP_TAG && edge.target_type == BUILD_TAG {
                rw.remove(edge)?;
            }
        }
        rw.commit()?;
        info!(%id, "deleted build");
        Ok(())
    }

    /// Put a component into a build slot.
    ///
    /// With an edge the existing assignment is retargeted in place,
    /// otherwise a new assignment is added. Returns the assignment's edge.
    pub fn assign_component_to_build(
        &self,
        build: BuildId,
        edge: Option<EdgeId>,
        component: ComponentId,
        kind: ComponentKind,
    ) -> Result<EdgeId> {
        let rw = self.db.rw_transaction()?;
        let stored_build: Option<StoredBuild> = rw.get().primary(build.raw())?;
        if stored_build.is_none() {
            return Err(Error::not_found(build));
        }
        let stored: StoredComponent = rw
            .get()
            .primary(component.raw())?
            .ok_or_else(|| Error::not_found(component))?;
        let actual = stored.to_component()?.kind();
        if actual != kind {
            return Err(rigbench_core::Error::KindMismatch {
                expected: kind,
                got: actual,
            }
            .into());
        }

        let edge_id = match edge {
            Some(edge_id) => {
                let mut existing = slot_edge(&rw, build, edge_id, kind)?;
                existing.target_id = component.raw();
                rw.upsert(existing)?;
                edge_id
            }
            None => {
                let relation = Relation::BuildHasComponent {
                    edge: EdgeId::new(next_id(&rw)?),
                    build,
                    component,
                    kind,
                };
                rw.insert(StoredEdge::from_edge(&relation.to_edge()))?;
                relation.edge()
            }
        };

        let price = refresh_build_price(&rw, build.raw())?;
        rw.commit()?;
        info!(%build, %component, edge = %edge_id, price, "assigned component");
        Ok(edge_id)
    }

    /// Take an assignment out of a build.
    pub fn remove_component_from_build(
        &self,
        build: BuildId,
        edge: EdgeId,
        kind: ComponentKind,
    ) -> Result<()> {
        let rw = self.db.rw_transaction()?;
        let existing = slot_edge(&rw, build, edge, kind)?;
        rw.remove(existing)?;
        let price = refresh_build_price(&rw, build.raw())?;
        rw.commit()?;
        info!(%build, %edge, price, "removed component");
        Ok(())
    }

    /// Create an empty build group.
    pub fn add_build_group(&self, name: &str) -> Result<GroupId> {
        if name.trim().is_empty() {
            return Err(rigbench_core::Error::validation("name", "must not be empty").into());
        }
        let rw = self.db.rw_transaction()?;
        let id = GroupId::new(next_id(&rw)?);
        rw.insert(StoredBuildGroup::from_group(&BuildGroup {
            id,
            name: name.to_string(),
        }))?;
        rw.commit()?;
        info!(%id, name, "created build group");
        Ok(id)
    }

    /// Attach a retailer product page to a component.
    ///
    /// An empty retailer name is filled in from the URL's hostname.
    pub fn add_retailer_link_to_component(
        &self,
        kind: ComponentKind,
        component: ComponentId,
        retailer: &str,
        url: &str,
    ) -> Result<RetailerLink> {
        let rw = self.db.rw_transaction()?;
        let stored: StoredComponent = rw
            .get()
            .primary(component.raw())?
            .ok_or_else(|| Error::not_found(component))?;
        let actual = stored.to_component()?.kind();
        if actual != kind {
            return Err(rigbench_core::Error::KindMismatch {
                expected: kind,
                got: actual,
            }
            .into());
        }

        let retailer = match retailer.trim() {
            "" => self.retailers.recognize_url(url).display_label().to_string(),
            name => name.to_string(),
        };
        let link = RetailerLink {
            id: LinkId::new(next_id(&rw)?),
            component,
            kind,
            retailer,
            url: url.trim().to_string(),
            history: PriceHistory::new(),
        };
        rw.insert(StoredRetailerLink::from_link(&link)?)?;
        rw.commit()?;
        info!(id = %link.id, %component, retailer = %link.retailer, "added retailer link");
        Ok(link)
    }

    /// Record today's price for a retailer link.
    pub fn record_price(&self, link: LinkId, price: u64) -> Result<RetailerLink> {
        self.record_price_on(link, price, Local::now().date_naive())
    }

    /// Record a price for a given calendar day.
    pub fn record_price_on(&self, link: LinkId, price: u64, today: NaiveDate) -> Result<RetailerLink> {
        let rw = self.db.rw_transaction()?;
        let stored: StoredRetailerLink = rw
            .get()
            .primary(link.raw())?
            .ok_or_else(|| Error::not_found(link))?;
        let mut retailer_link = stored.to_link()?;
        retailer_link.history.record(price, today);
        rw.upsert(StoredRetailerLink::from_link(&retailer_link)?)?;
        rw.commit()?;
        info!(%link, price, %today, "recorded price");
        Ok(retailer_link)
    }
}

/// Hand out the next id.
pub(crate) fn next_id(rw: &RwTransaction) -> Result<u64> {
    let current: Option<StoredSequence> = rw.get().primary(SEQUENCE_KEY.to_string())?;
    let mut sequence = match current {
        Some(sequence) => sequence,
        None => StoredSequence::starting_at(max_stored_id(rw)? + 1),
    };
    let id = sequence.next;
    sequence.next += 1;
    rw.upsert(sequence)?;
    Ok(id)
}

fn max_stored_id(rw: &RwTransaction) -> Result<u64> {
    let mut max = 0;
    for row in rw.scan().primary::<StoredComponent>()?.all()? {
        max = max.max(row?.id);
    }
    for row in rw.scan().primary::<StoredBuild>()?.all()? {
        max = max.max(row?.id);
    }
    for row in rw.scan().primary::<StoredBuildGroup>()?.all()? {
        max = max.max(row?.id);
    }
    for row in rw.scan().primary::<StoredEdge>()?.all()? {
        max = max.max(row?.id);
    }
    for row in rw.scan().primary::<StoredRetailerLink>()?.all()? {
        max = max.max(row?.id);
    }
    Ok(max)
}

fn edges_from(rw: &RwTransaction, source_id: u64) -> Result<Vec<StoredEdge>> {
    let scan = rw
        .scan()
        .secondary::<StoredEdge>(StoredEdgeKey::source_id)?;
    let edges: std::result::Result<Vec<StoredEdge>, _> = scan.start_with(source_id)?.collect();
    Ok(edges?)
}

fn edges_to(rw: &RwTransaction, target_id: u64) -> Result<Vec<StoredEdge>> {
    let scan = rw
        .scan()
        .secondary::<StoredEdge>(StoredEdgeKey::target_id)?;
    let edges: std::result::Result<Vec<StoredEdge>, _> = scan.start_with(target_id)?.collect();
    Ok(edges?)
}

/// The edge of one slot of a build, checked against the build and kind
fn slot_edge(rw: &RwTransaction, build: BuildId, edge: EdgeId, kind: ComponentKind) -> Result<StoredEdge> {
    let stored: StoredEdge = rw
        .get()
        .primary(edge.raw())?
        .ok_or_else(|| Error::not_found(edge))?;
    match stored.to_edge().relation() {
        Some(Relation::BuildHasComponent {
            build: owner,
            kind: slot,
            ..
        }) if owner == build && slot == kind => Ok(stored),
        _ => Err(Error::Request(format!(
            "{} is not a {} slot of {}",
            edge, kind, build
        ))),
    }
}

/// Recompute a build's total from its live assignments and persist it.
fn refresh_build_price(rw: &RwTransaction, build: u64) -> Result<u64> {
    let stored: Option<StoredBuild> = rw.get().primary(build)?;
    let Some(mut stored) = stored else {
        return Ok(0);
    };

    let mut components = Vec::new();
    for edge in edges_from(rw, build)? {
        let Some(Relation::BuildHasComponent { component, .. }) = edge.to_edge().relation() else {
            continue;
        };
        let row: Option<StoredComponent> = rw.get().primary(component.raw())?;
        match row {
            Some(row) => components.push(row.to_component()?),
            None => debug!(edge = edge.id, %component, "skipping dangling edge"),
        }
    }

    let price = BuildPrice::of(&components).total;
    if stored.price != price {
        stored.price = price;
        rw.upsert(stored)?;
    }
    Ok(price)
}

/// Refresh every build that has `component` assigned
fn refresh_builds_using(rw: &RwTransaction, component: u64) -> Result<()> {
    for edge in edges_to(rw, component)? {
        if edge.source_type == BUILD_TAG {
            refresh_build_price(rw, edge.source_id)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rigbench_core::{CpuSpecs, GpuSpecs, Specs};

    fn gpu(name: &str, price: u64) -> NewComponent {
        NewComponent::new(
            "NVIDIA",
            name,
            price,
            Specs::Gpu(GpuSpecs {
                chipset: name.into(),
                tdp_watts: 200,
                ..Default::default()
            }),
        )
    }

    fn cpu(socket: &str, price: u64) -> NewComponent {
        NewComponent::new(
            "AMD",
            format!("CPU {}", socket),
            price,
            Specs::Cpu(CpuSpecs {
                socket: socket.into(),
                tdp_watts: 105,
                ..Default::default()
            }),
        )
    }

    fn stored_price(store: &Store, build: BuildId) -> u64 {
        store.build(build).unwrap().unwrap().price
    }

    #[test]
    fn test_create_component_assigns_ids() {
        let store = Store::in_memory().unwrap();
        let a = store.create_component(gpu("RTX 4070", 59900)).unwrap();
        let b = store.create_component(gpu("RTX 4080", 99900)).unwrap();
        assert!(b.id > a.id);
        assert_eq!(store.component(a.id).unwrap().unwrap(), a);
    }

    #[test]
    fn test_create_component_validates() {
        let store = Store::in_memory().unwrap();
        let result = store.create_component(gpu("", 100));
        assert!(matches!(
            result,
            Err(Error::Core(rigbench_core::Error::Validation { .. }))
        ));
    }

    #[test]
    fn test_update_component_rejects_kind_change() {
        let store = Store::in_memory().unwrap();
        let part = store.create_component(gpu("RTX 4070", 59900)).unwrap();
        let changes = ComponentChanges {
            specs: Some(Specs::Cpu(CpuSpecs::default())),
            ..Default::default()
        };
        assert!(store.update_component(part.id, changes).is_err());
        assert_eq!(store.component(part.id).unwrap().unwrap(), part);
    }

    #[test]
    fn test_assignment_keeps_stored_price_current() {
        let store = Store::in_memory().unwrap();
        let group = store.add_build_group("Workstation").unwrap();
        let build = store.create_or_copy_build(group, None).unwrap();
        assert_eq!(build.name, NEW_BUILD_NAME);

        let card = store.create_component(gpu("RTX 4070", 59900)).unwrap();
        let proc = store.create_component(cpu("AM5", 29900)).unwrap();
        let slot = store
            .assign_component_to_build(build.id, None, card.id, ComponentKind::Gpu)
            .unwrap();
        store
            .assign_component_to_build(build.id, None, proc.id, ComponentKind::Cpu)
            .unwrap();
        assert_eq!(stored_price(&store, build.id), 59900 + 29900);

        let bigger = store.create_component(gpu("RTX 4080", 99900)).unwrap();
        let same = store
            .assign_component_to_build(build.id, Some(slot), bigger.id, ComponentKind::Gpu)
            .unwrap();
        assert_eq!(same, slot);
        assert_eq!(stored_price(&store, build.id), 99900 + 29900);

        store
            .remove_component_from_build(build.id, slot, ComponentKind::Gpu)
            .unwrap();
        assert_eq!(stored_price(&store, build.id), 29900);

        store
            .update_component(
                proc.id,
                ComponentChanges {
                    price: Some(25900),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(stored_price(&store, build.id), 25900);
    }

    #[test]
    fn test_assign_checks_kind_and_slot() {
        let store = Store::in_memory().unwrap();
        let group = store.add_build_group("Desk").unwrap();
        let build = store.create_or_copy_build(group, None).unwrap();
        let card = store.create_component(gpu("RTX 4070", 59900)).unwrap();

        let wrong_kind =
            store.assign_component_to_build(build.id, None, card.id, ComponentKind::Cpu);
        assert!(matches!(
            wrong_kind,
            Err(Error::Core(rigbench_core::Error::KindMismatch { .. }))
        ));

        let slot = store
            .assign_component_to_build(build.id, None, card.id, ComponentKind::Gpu)
            .unwrap();
        let wrong_slot = store.remove_component_from_build(build.id, slot, ComponentKind::Ram);
        assert!(matches!(wrong_slot, Err(Error::Request(_))));
        assert!(matches!(
            store.assign_component_to_build(BuildId::new(9999), None, card.id, ComponentKind::Gpu),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_copy_build() {
        let store = Store::in_memory().unwrap();
        let group = store.add_build_group("Gaming").unwrap();
        let original = store.create_or_copy_build(group, None).unwrap();
        store
            .update_build(original.id, BuildChanges::rename("Budget"))
            .unwrap();
        let card = store.create_component(gpu("RTX 4060", 29900)).unwrap();
        store
            .assign_component_to_build(original.id, None, card.id, ComponentKind::Gpu)
            .unwrap();

        let copy = store.create_or_copy_build(group, Some(original.id)).unwrap();
        assert_eq!(copy.name, "Budget (copy)");
        assert_eq!(copy.price, 29900);
        assert_eq!(store.build_components(copy.id).unwrap(), vec![card]);
        assert_eq!(store.builds_in_group(group).unwrap().len(), 2);
    }

    #[test]
    fn test_delete_component_leaves_dangling_edge() {
        let store = Store::in_memory().unwrap();
        let group = store.add_build_group("Gaming").unwrap();
        let build = store.create_or_copy_build(group, None).unwrap();
        let card = store.create_component(gpu("RTX 4060", 29900)).unwrap();
        store
            .assign_component_to_build(build.id, None, card.id, ComponentKind::Gpu)
            .unwrap();

        store.delete_component(card.id).unwrap();
        assert_eq!(store.edges_from(build.id.raw()).unwrap().len(), 1);
        assert!(store.build_components(build.id).unwrap().is_empty());
        assert_eq!(stored_price(&store, build.id), 0);
    }

    #[test]
    fn test_delete_build_removes_membership() {
        let store = Store::in_memory().unwrap();
        let group = store.add_build_group("Gaming").unwrap();
        let build = store.create_or_copy_build(group, None).unwrap();
        store.delete_build(build.id).unwrap();
        assert!(store.build(build.id).unwrap().is_none());
        assert!(store.builds_in_group(group).unwrap().is_empty());
        assert!(store.edges_from(group.raw()).unwrap().is_empty());
    }

    #[test]
    fn test_empty_group_name_rejected() {
        let store = Store::in_memory().unwrap();
        assert!(store.add_build_group("  ").is_err());
        assert!(matches!(
            store.create_or_copy_build(GroupId::new(42), None),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_retailer_link_and_price_history() {
        let store = Store::in_memory().unwrap();
        let card = store.create_component(gpu("RTX 4070", 59900)).unwrap();
        let link = store
            .add_retailer_link_to_component(
                ComponentKind::Gpu,
                card.id,
                "",
                "https://www.newegg.ca/p/N82E16814126675",
            )
            .unwrap();
        assert_eq!(link.retailer, "Newegg");

        let day = |d| NaiveDate::from_ymd_opt(2024, 5, d).unwrap();
        store.record_price_on(link.id, 61999, day(1)).unwrap();
        store.record_price_on(link.id, 59999, day(1)).unwrap();
        let updated = store.record_price_on(link.id, 57999, day(3)).unwrap();
        assert_eq!(updated.history.len(), 2);
        assert_eq!(updated.current_price(), Some(57999));

        let links = store.retailer_links(card.id).unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].history.on(day(1)).unwrap().price, 59999);
    }

    #[test]
    fn test_link_requires_matching_kind() {
        let store = Store::in_memory().unwrap();
        let card = store.create_component(gpu("RTX 4070", 59900)).unwrap();
        assert!(store
            .add_retailer_link_to_component(ComponentKind::Cpu, card.id, "Amazon", "amazon.com")
            .is_err());
    }

    #[test]
    fn test_open_upgrades_brandless_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.db");
        {
            let mut models = Models::new();
            models.define::<StoredComponentV1>().unwrap();
            let db = Builder::new().create(&models, &path).unwrap();
            let rw = db.rw_transaction().unwrap();
            let specs = Specs::Cpu(CpuSpecs {
                socket: "AM4".into(),
                ..Default::default()
            });
            rw.insert(StoredComponentV1 {
                id: 7,
                kind: ComponentKind::Cpu.tag().to_string(),
                name: "Ryzen 5 5600".into(),
                price: 12900,
                specs: bincode::serialize(&specs).unwrap(),
            })
            .unwrap();
            rw.commit().unwrap();
        }

        let store = Store::open(&path).unwrap();
        let cpus = store.components_where(ComponentKind::Cpu, &[], None).unwrap();
        assert_eq!(cpus.len(), 1);
        assert_eq!(cpus[0].id, ComponentId::new(7));
        assert_eq!(cpus[0].brand, "");
        assert_eq!(cpus[0].name, "Ryzen 5 5600");

        // a price edit works before a brand is supplied
        let edited = store
            .update_component(
                ComponentId::new(7),
                ComponentChanges {
                    price: Some(11900),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(edited.price, 11900);

        let next = store.create_component(cpu("AM5", 19900)).unwrap();
        assert_eq!(next.id, ComponentId::new(8));
        drop(store);

        // the sequence survives a second open
        let store = Store::open(&path).unwrap();
        let group = store.add_build_group("Garage").unwrap();
        assert_eq!(group, GroupId::new(9));
    }
}
