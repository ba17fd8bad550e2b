//! Field conditions and ordering for catalog queries
//!
//! Conditions are matched against a record's named fields (see
//! `Component::field`). All conditions of a query must hold.

use crate::Value;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// How a field value is tested
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Matcher {
    /// Field equals the value
    Eq(Value),
    /// Field equals any of the values
    In(Vec<Value>),
}

impl Matcher {
    pub fn test(&self, value: &Value) -> bool {
        match self {
            Matcher::Eq(expected) => value.matches(expected),
            Matcher::In(candidates) => candidates.iter().any(|c| value.matches(c)),
        }
    }
}

/// One field condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub field: String,
    pub matcher: Matcher,
}

impl Condition {
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            matcher: Matcher::Eq(value.into()),
        }
    }

    pub fn any_of<V: Into<Value>>(field: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self {
        Self {
            field: field.into(),
            matcher: Matcher::In(values.into_iter().map(Into::into).collect()),
        }
    }

    /// Test a record through its field lookup. A missing field never matches.
    pub fn matches<F>(&self, lookup: F) -> bool
    where
        F: Fn(&str) -> Option<Value>,
    {
        lookup(&self.field)
            .map(|value| self.matcher.test(&value))
            .unwrap_or(false)
    }
}

/// True when every condition holds
pub fn matches_all<F>(conditions: &[Condition], lookup: F) -> bool
where
    F: Fn(&str) -> Option<Value>,
{
    conditions.iter().all(|c| c.matches(&lookup))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Sort key for query results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    pub field: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl OrderBy {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Stable sort by the field. Records without the field, or with a value
    /// that does not compare, keep their relative order after the others.
    pub fn sort<T, F>(&self, items: &mut [T], lookup: F)
    where
        F: Fn(&T, &str) -> Option<Value>,
    {
        items.sort_by(|a, b| {
            let a = lookup(a, &self.field).filter(|v| !v.is_null());
            let b = lookup(b, &self.field).filter(|v| !v.is_null());
            match (a, b) {
                (Some(a), Some(b)) => {
                    let ordering = a.compare(&b).unwrap_or(Ordering::Equal);
                    match self.direction {
                        SortDirection::Ascending => ordering,
                        SortDirection::Descending => ordering.reverse(),
                    }
                }
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        });
    }
}
