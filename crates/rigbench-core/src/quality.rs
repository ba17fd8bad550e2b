//! Comparative quality indicators
//!
//! A quality indicator says whether a candidate value is better, worse or
//! the same as a reference value under a unit's ordering policy. The
//! indicator is antisymmetric: swapping the two values negates it.

use crate::attribute::{self, OrderingPolicy, Unit};
use crate::{Component, Value};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::Neg;
use tracing::warn;

/// Signed comparison outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    Worse,
    Neutral,
    Better,
}

impl Quality {
    /// -1, 0 or 1
    pub fn signum(self) -> i8 {
        match self {
            Quality::Worse => -1,
            Quality::Neutral => 0,
            Quality::Better => 1,
        }
    }

    fn from_ordering(ordering: Ordering, policy: OrderingPolicy) -> Self {
        match (ordering, policy) {
            (Ordering::Equal, _) => Quality::Neutral,
            (Ordering::Less, OrderingPolicy::LessIsBetter)
            | (Ordering::Greater, OrderingPolicy::MoreIsBetter) => Quality::Better,
            (Ordering::Less, OrderingPolicy::MoreIsBetter)
            | (Ordering::Greater, OrderingPolicy::LessIsBetter) => Quality::Worse,
        }
    }
}

impl Neg for Quality {
    type Output = Quality;

    fn neg(self) -> Quality {
        match self {
            Quality::Worse => Quality::Better,
            Quality::Neutral => Quality::Neutral,
            Quality::Better => Quality::Worse,
        }
    }
}

/// Compare two numbers of the same unit.
///
/// Incomparable inputs (NaN) are neutral.
pub fn quality(candidate: f64, reference: f64, policy: OrderingPolicy) -> Quality {
    candidate
        .partial_cmp(&reference)
        .map(|ordering| Quality::from_ordering(ordering, policy))
        .unwrap_or(Quality::Neutral)
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        other => other.as_float(),
    }
}

/// Compare two attribute values.
///
/// Text attributes (no policy) are never scored. A non-numeric value where
/// a numeric comparison was requested is logged and scored neutral.
pub fn quality_of(
    candidate: &Value,
    reference: &Value,
    unit: Unit,
    policy: Option<OrderingPolicy>,
) -> Quality {
    let Some(policy) = policy else {
        return Quality::Neutral;
    };
    match (numeric(candidate), numeric(reference)) {
        (Some(a), Some(b)) => quality(a, b, policy),
        _ => {
            warn!(
                ?unit,
                candidate = candidate.type_name(),
                reference = reference.type_name(),
                "non-numeric value in numeric comparison"
            );
            Quality::Neutral
        }
    }
}

/// Quality of one attribute of a candidate against a reference component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeComparison {
    pub field: String,
    pub label: String,
    pub candidate: Value,
    pub reference: Value,
    pub quality: Quality,
}

/// Compare every described attribute of two components of the same kind.
///
/// Components of different kinds have nothing in common and yield an empty
/// list.
pub fn compare_components(candidate: &Component, reference: &Component) -> Vec<AttributeComparison> {
    if candidate.kind() != reference.kind() {
        return Vec::new();
    }
    attribute::attributes(candidate.kind())
        .iter()
        .map(|attr| {
            let a = candidate.field(attr.field).unwrap_or_default();
            let b = reference.field(attr.field).unwrap_or_default();
            AttributeComparison {
                field: attr.field.to_string(),
                label: attr.label.to_string(),
                quality: quality_of(&a, &b, attr.unit, attr.policy),
                candidate: a,
                reference: b,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ComponentId, GpuSpecs, Specs};
    use proptest::prelude::*;

    fn gpu(id: u64, price: u64, vram_gb: u32) -> Component {
        Component {
            id: ComponentId::new(id),
            brand: "Sapphire".into(),
            name: format!("Card {}", id),
            price,
            specs: Specs::Gpu(GpuSpecs {
                chipset: "RX 7800 XT".into(),
                vram_gb,
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_dollars_less_is_better() {
        // $500 candidate against a $400 selection is worse
        assert_eq!(
            quality(50000.0, 40000.0, OrderingPolicy::LessIsBetter),
            Quality::Worse
        );
        assert_eq!(
            quality(40000.0, 50000.0, OrderingPolicy::LessIsBetter),
            Quality::Better
        );
    }

    #[test]
    fn test_equal_is_neutral() {
        assert_eq!(quality(3.0, 3.0, OrderingPolicy::MoreIsBetter), Quality::Neutral);
        assert_eq!(
            quality(f64::NAN, 3.0, OrderingPolicy::MoreIsBetter),
            Quality::Neutral
        );
    }

    #[test]
    fn test_text_is_never_scored() {
        let q = quality_of(&Value::from("AM5"), &Value::from("AM4"), Unit::Text, None);
        assert_eq!(q, Quality::Neutral);
    }

    #[test]
    fn test_type_mismatch_degrades_to_neutral() {
        let q = quality_of(
            &Value::from("fast"),
            &Value::Int(3000),
            Unit::Megahertz,
            Some(OrderingPolicy::MoreIsBetter),
        );
        assert_eq!(q, Quality::Neutral);
    }

    #[test]
    fn test_compare_components() {
        let candidate = gpu(1, 50000, 16);
        let reference = gpu(2, 40000, 12);
        let rows = compare_components(&candidate, &reference);

        let price = rows.iter().find(|r| r.field == "price").unwrap();
        assert_eq!(price.quality, Quality::Worse);
        let vram = rows.iter().find(|r| r.field == "vram_gb").unwrap();
        assert_eq!(vram.quality, Quality::Better);
        let chipset = rows.iter().find(|r| r.field == "chipset").unwrap();
        assert_eq!(chipset.quality, Quality::Neutral);
    }

    #[test]
    fn test_compare_different_kinds() {
        let cpu = Component {
            specs: Specs::empty(crate::ComponentKind::Cpu),
            ..gpu(3, 1, 1)
        };
        assert!(compare_components(&cpu, &gpu(4, 1, 1)).is_empty());
    }

    proptest! {
        #[test]
        fn prop_quality_is_antisymmetric(a in -1.0e9f64..1.0e9, b in -1.0e9f64..1.0e9, more in any::<bool>()) {
            let policy = if more { OrderingPolicy::MoreIsBetter } else { OrderingPolicy::LessIsBetter };
            prop_assert_eq!(quality(a, b, policy), -quality(b, a, policy));
            prop_assert_eq!(quality(a, a, policy), Quality::Neutral);
        }
    }
}
