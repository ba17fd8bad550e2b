//! Build price aggregation
//!
//! Prices are always derived from the components actually assigned. An
//! empty slot contributes zero; there is no "unknown" price state.

use crate::{Component, ComponentKind};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Total and per-slot price of a build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildPrice {
    pub total: u64,
    /// One entry per kind, in slot order, zero when empty
    pub by_kind: IndexMap<ComponentKind, u64>,
}

impl BuildPrice {
    /// Price of a build with nothing assigned
    pub fn zero() -> Self {
        Self {
            total: 0,
            by_kind: ComponentKind::ALL.iter().map(|k| (*k, 0)).collect(),
        }
    }

    /// Sum the prices of the assigned components.
    ///
    /// Repeated components (two identical drives) are counted each time.
    pub fn of<'a>(components: impl IntoIterator<Item = &'a Component>) -> Self {
        let mut price = Self::zero();
        for component in components {
            price.add(component);
        }
        price
    }

    /// Account for one more assignment
    pub fn add(&mut self, component: &Component) {
        self.total += component.price;
        *self.by_kind.entry(component.kind()).or_insert(0) += component.price;
    }

    /// Account for a removed assignment
    pub fn remove(&mut self, component: &Component) {
        self.total = self.total.saturating_sub(component.price);
        if let Some(subtotal) = self.by_kind.get_mut(&component.kind()) {
            *subtotal = subtotal.saturating_sub(component.price);
        }
    }

    /// Subtotal of one slot
    pub fn subtotal(&self, kind: ComponentKind) -> u64 {
        self.by_kind.get(&kind).copied().unwrap_or(0)
    }
}

impl Default for BuildPrice {
    fn default() -> Self {
        Self::zero()
    }
}

/// Change in build price if `candidate` replaced `current`, saturating at
/// the bounds of `i64`
pub fn swap_delta(current: Option<&Component>, candidate: &Component) -> i64 {
    let delta = i128::from(candidate.price) - i128::from(current.map_or(0, |c| c.price));
    i64::try_from(delta).unwrap_or(if delta < 0 { i64::MIN } else { i64::MAX })
}
