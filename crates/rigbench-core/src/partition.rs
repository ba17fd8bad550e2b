//! Catalog partitioning
//!
//! Splits a catalog table into the components already in a build and the
//! remaining candidates grouped by verdict, each with the price change of
//! picking it.

use crate::price::swap_delta;
use crate::query::OrderBy;
use crate::{BuildSnapshot, Component, Evaluation, Evaluator, Verdict};
use serde::{Deserialize, Serialize};

/// A catalog entry as shown against a build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub component: Component,
    pub evaluation: Evaluation,
    /// Price change against the selected component of the same kind, or the
    /// full price when nothing of that kind is selected
    pub price_delta: i64,
}

/// Catalog entries split by their relation to a build
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    pub selected: Vec<Candidate>,
    pub compatible: Vec<Candidate>,
    pub incompatible: Vec<Candidate>,
    pub unknown: Vec<Candidate>,
}

impl Partition {
    /// Entries not in the build with the given verdict
    pub fn bucket(&self, verdict: Verdict) -> &[Candidate] {
        match verdict {
            Verdict::Compatible => &self.compatible,
            Verdict::Incompatible => &self.incompatible,
            Verdict::Unknown => &self.unknown,
        }
    }

    pub fn len(&self) -> usize {
        self.selected.len() + self.compatible.len() + self.incompatible.len() + self.unknown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, verdict: Verdict, candidate: Candidate) {
        match verdict {
            Verdict::Compatible => self.compatible.push(candidate),
            Verdict::Incompatible => self.incompatible.push(candidate),
            Verdict::Unknown => self.unknown.push(candidate),
        }
    }

    fn sort(&mut self, order: &OrderBy) {
        for bucket in [
            &mut self.selected,
            &mut self.compatible,
            &mut self.incompatible,
            &mut self.unknown,
        ] {
            order.sort(bucket, |c, field| c.component.field(field));
        }
    }
}

/// User controls of a catalog table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogView {
    pub sort: Option<OrderBy>,
    /// Case-insensitive substring of "brand name"
    pub search: Option<String>,
}

impl CatalogView {
    /// Whether the search lets a component through
    pub fn shows(&self, component: &Component) -> bool {
        match self.search.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => component
                .display_name()
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            _ => true,
        }
    }
}

/// Classify catalog entries against a build.
///
/// Selected components are evaluated against the rest of the build, so a
/// selected part that conflicts with its neighbours still reports why.
/// Without a build everything is unknown.
pub fn partition(
    evaluator: &Evaluator,
    build: Option<&BuildSnapshot>,
    candidates: impl IntoIterator<Item = Component>,
    view: &CatalogView,
) -> Partition {
    let mut result = Partition::default();

    for component in candidates.into_iter().filter(|c| view.shows(c)) {
        let current = build.and_then(|b| b.of_kind(component.kind()).next());
        let price_delta = swap_delta(current, &component);

        match build {
            Some(build) if build.contains(component.id) => {
                let rest = build.without(component.id);
                let evaluation = evaluator.evaluate(&component, Some(&rest));
                result.selected.push(Candidate {
                    component,
                    evaluation,
                    price_delta,
                });
            }
            _ => {
                let evaluation = evaluator.evaluate(&component, build);
                let verdict = evaluation.verdict;
                result.push(
                    verdict,
                    Candidate {
                        component,
                        evaluation,
                        price_delta,
                    },
                );
            }
        }
    }

    if let Some(order) = &view.sort {
        result.sort(order);
    }
    result
}
