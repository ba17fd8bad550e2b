//! Query contract and derived reads.

use crate::error::{Error, Result};
use crate::models::*;
use crate::store::Store;
use rigbench_core::partition::{self, CatalogView, Partition};
use rigbench_core::query::{matches_all, Condition, OrderBy};
use rigbench_core::{
    compare_components, AttributeComparison, Build, BuildGroup, BuildId, BuildPrice,
    BuildSnapshot, Component, ComponentId, ComponentKind, Edge, Evaluation, GroupId, LinkId,
    Recognition, Relation, RetailerLink,
};
use tracing::{debug, warn};

impl Store {
    /// Components of one kind matching every condition.
    pub fn components_where(
        &self,
        kind: ComponentKind,
        conditions: &[Condition],
        order_by: Option<&OrderBy>,
    ) -> Result<Vec<Component>> {
        let r = self.db.r_transaction()?;
        let scan = r
            .scan()
            .secondary::<StoredComponent>(StoredComponentKey::kind)?;
        let iter = scan.start_with(kind.tag())?;
        let rows: std::result::Result<Vec<StoredComponent>, _> = iter.collect();
        let rows = rows.map_err(|e| Error::Database(e.to_string()))?;

        let mut components = Vec::with_capacity(rows.len());
        for row in rows.iter().filter(|row| row.kind == kind.tag()) {
            let component = row.to_component()?;
            if matches_all(conditions, |field| component.field(field)) {
                components.push(component);
            }
        }
        if let Some(order) = order_by {
            order.sort(&mut components, |c, field| c.field(field));
        }
        Ok(components)
    }

    /// Ids of the components `components_where` would return.
    pub fn component_ids_where(
        &self,
        kind: ComponentKind,
        conditions: &[Condition],
        order_by: Option<&OrderBy>,
    ) -> Result<Vec<ComponentId>> {
        Ok(self
            .components_where(kind, conditions, order_by)?
            .into_iter()
            .map(|c| c.id)
            .collect())
    }

    /// Get a component by ID.
    pub fn component(&self, id: ComponentId) -> Result<Option<Component>> {
        let r = self.db.r_transaction()?;
        let stored: Option<StoredComponent> = r.get().primary(id.raw())?;
        stored.map(|s| s.to_component()).transpose()
    }

    /// Edges matching every condition, raw as stored.
    pub fn edges_where(&self, conditions: &[Condition]) -> Result<Vec<Edge>> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<StoredEdge>()?;
        let iter = scan.all()?;
        let rows: std::result::Result<Vec<StoredEdge>, _> = iter.collect();
        let rows = rows.map_err(|e| Error::Database(e.to_string()))?;
        Ok(rows
            .iter()
            .map(|row| row.to_edge())
            .filter(|edge| matches_all(conditions, |field| edge.field(field)))
            .collect())
    }

    /// Edges leaving a row.
    pub fn edges_from(&self, source_id: u64) -> Result<Vec<Edge>> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().secondary::<StoredEdge>(StoredEdgeKey::source_id)?;
        let iter = scan.start_with(source_id)?;
        let rows: std::result::Result<Vec<StoredEdge>, _> = iter.collect();
        let rows = rows.map_err(|e| Error::Database(e.to_string()))?;
        Ok(rows.iter().map(|row| row.to_edge()).collect())
    }

    /// Builds matching every condition.
    pub fn builds_where(&self, conditions: &[Condition]) -> Result<Vec<Build>> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<StoredBuild>()?;
        let iter = scan.all()?;
        let rows: std::result::Result<Vec<StoredBuild>, _> = iter.collect();
        let rows = rows.map_err(|e| Error::Database(e.to_string()))?;
        Ok(rows
            .iter()
            .map(|row| row.to_build())
            .filter(|build| matches_all(conditions, |field| build.field(field)))
            .collect())
    }

    /// Get a build by ID.
    pub fn build(&self, id: BuildId) -> Result<Option<Build>> {
        let r = self.db.r_transaction()?;
        let stored: Option<StoredBuild> = r.get().primary(id.raw())?;
        Ok(stored.map(|s| s.to_build()))
    }

    /// Build groups matching every condition.
    pub fn build_groups_where(&self, conditions: &[Condition]) -> Result<Vec<BuildGroup>> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<StoredBuildGroup>()?;
        let iter = scan.all()?;
        let rows: std::result::Result<Vec<StoredBuildGroup>, _> = iter.collect();
        let rows = rows.map_err(|e| Error::Database(e.to_string()))?;
        Ok(rows
            .iter()
            .map(|row| row.to_group())
            .filter(|group| matches_all(conditions, |field| group.field(field)))
            .collect())
    }

    /// Known relations leaving a row. Rows with an unknown type pair are
    /// skipped.
    fn relations_from(&self, source_id: u64) -> Result<Vec<Relation>> {
        let mut relations = Vec::new();
        for edge in self.edges_from(source_id)? {
            match edge.relation() {
                Some(relation) => relations.push(relation),
                None => warn!(
                    edge = %edge.id,
                    source_type = %edge.source_type,
                    target_type = %edge.target_type,
                    "skipping edge with unknown type pair"
                ),
            }
        }
        Ok(relations)
    }

    /// Components assigned to a build, in assignment order. Edges to deleted
    /// components are dropped.
    pub fn build_components(&self, build: BuildId) -> Result<Vec<Component>> {
        let mut components = Vec::new();
        for relation in self.relations_from(build.raw())? {
            let Relation::BuildHasComponent {
                edge, component, kind, ..
            } = relation
            else {
                continue;
            };
            match self.component(component)? {
                Some(found) if found.kind() == kind => components.push(found),
                Some(found) => warn!(
                    %edge,
                    %component,
                    expected = %kind,
                    got = %found.kind(),
                    "skipping edge whose slot does not match the component"
                ),
                None => debug!(%edge, %component, "skipping dangling edge"),
            }
        }
        Ok(components)
    }

    /// Snapshot of a build's assignments for the evaluators.
    pub fn build_snapshot(&self, build: BuildId) -> Result<BuildSnapshot> {
        Ok(BuildSnapshot::from_components(self.build_components(build)?))
    }

    /// Price of a build, recomputed from its live assignments.
    pub fn build_price(&self, build: BuildId) -> Result<BuildPrice> {
        if self.build(build)?.is_none() {
            return Err(Error::not_found(build));
        }
        Ok(BuildPrice::of(&self.build_components(build)?))
    }

    /// Evaluate a catalog component against a build.
    pub fn evaluate_for_build(&self, build: BuildId, candidate: ComponentId) -> Result<Evaluation> {
        if self.build(build)?.is_none() {
            return Err(Error::not_found(build));
        }
        let component = self
            .component(candidate)?
            .ok_or_else(|| Error::not_found(candidate))?;
        let snapshot = self.build_snapshot(build)?;
        Ok(self.evaluator.evaluate(&component, Some(&snapshot)))
    }

    /// A kind's catalog table split against a build. Without a build every
    /// entry is unknown.
    pub fn partition_for_build(
        &self,
        build: Option<BuildId>,
        kind: ComponentKind,
        view: &CatalogView,
    ) -> Result<Partition> {
        let snapshot = match build {
            Some(build) => {
                if self.build(build)?.is_none() {
                    return Err(Error::not_found(build));
                }
                Some(self.build_snapshot(build)?)
            }
            None => None,
        };
        let catalog = self.components_where(kind, &[], None)?;
        Ok(partition::partition(
            &self.evaluator,
            snapshot.as_ref(),
            catalog,
            view,
        ))
    }

    /// Builds in a group. Memberships of deleted builds are dropped.
    pub fn builds_in_group(&self, group: GroupId) -> Result<Vec<Build>> {
        let mut builds = Vec::new();
        for relation in self.relations_from(group.raw())? {
            let Relation::GroupContainsBuild { edge, build, .. } = relation else {
                continue;
            };
            match self.build(build)? {
                Some(found) => builds.push(found),
                None => debug!(%edge, %build, "skipping dangling edge"),
            }
        }
        Ok(builds)
    }

    /// Compare two catalog components attribute by attribute.
    pub fn compare(
        &self,
        candidate: ComponentId,
        reference: ComponentId,
    ) -> Result<Vec<AttributeComparison>> {
        let candidate = self
            .component(candidate)?
            .ok_or_else(|| Error::not_found(candidate))?;
        let reference = self
            .component(reference)?
            .ok_or_else(|| Error::not_found(reference))?;
        Ok(compare_components(&candidate, &reference))
    }

    /// Retailer links of a component.
    pub fn retailer_links(&self, component: ComponentId) -> Result<Vec<RetailerLink>> {
        let r = self.db.r_transaction()?;
        let scan = r
            .scan()
            .secondary::<StoredRetailerLink>(StoredRetailerLinkKey::component_id)?;
        let iter = scan.start_with(component.raw())?;
        let rows: std::result::Result<Vec<StoredRetailerLink>, _> = iter.collect();
        let rows = rows.map_err(|e| Error::Database(e.to_string()))?;
        rows.iter().map(|row| row.to_link()).collect()
    }

    /// Get a retailer link by ID.
    pub fn retailer_link(&self, id: LinkId) -> Result<Option<RetailerLink>> {
        let r = self.db.r_transaction()?;
        let stored: Option<StoredRetailerLink> = r.get().primary(id.raw())?;
        stored.map(|s| s.to_link()).transpose()
    }

    /// Recognize the retailer behind a URL.
    pub fn recognize(&self, url: &str) -> Recognition {
        self.retailers.recognize_url(url)
    }
}
