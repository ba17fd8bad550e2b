//! Component rows.
//!
//! Specs are stored as a bincode blob next to the kind tag, which is the
//! secondary key catalog tables are read by.

use crate::error::Result;
use native_db::*;
use native_model::{native_model, Model};
use rigbench_core::{Component, ComponentId, Specs};
use serde::{Deserialize, Serialize};

/// Component row before brands were tracked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 1, version = 1)]
#[native_db]
pub struct StoredComponentV1 {
    #[primary_key]
    pub id: u64,
    #[secondary_key]
    pub kind: String,
    pub name: String,
    pub price: u64,
    pub specs: Vec<u8>,
}

/// Stored component.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 1, version = 2, from = StoredComponentV1)]
#[native_db]
pub struct StoredComponent {
    /// Primary key - component ID.
    #[primary_key]
    pub id: u64,
    /// Kind tag (`cpu`, `mobo`, ...).
    #[secondary_key]
    pub kind: String,
    pub brand: String,
    pub name: String,
    /// Price in minor currency units.
    pub price: u64,
    /// Serialized specs.
    pub specs: Vec<u8>,
}

impl From<StoredComponentV1> for StoredComponent {
    fn from(v1: StoredComponentV1) -> Self {
        Self {
            id: v1.id,
            kind: v1.kind,
            brand: String::new(),
            name: v1.name,
            price: v1.price,
            specs: v1.specs,
        }
    }
}

impl From<StoredComponent> for StoredComponentV1 {
    fn from(v2: StoredComponent) -> Self {
        Self {
            id: v2.id,
            kind: v2.kind,
            name: v2.name,
            price: v2.price,
            specs: v2.specs,
        }
    }
}

impl StoredComponent {
    /// Create from a catalog component.
    pub fn from_component(component: &Component) -> Result<Self> {
        Ok(Self {
            id: component.id.raw(),
            kind: component.kind().tag().to_string(),
            brand: component.brand.clone(),
            name: component.name.clone(),
            price: component.price,
            specs: bincode::serialize(&component.specs)?,
        })
    }

    /// Convert to a catalog component.
    pub fn to_component(&self) -> Result<Component> {
        let specs: Specs = bincode::deserialize(&self.specs)?;
        Ok(Component {
            id: ComponentId::new(self.id),
            brand: self.brand.clone(),
            name: self.name.clone(),
            price: self.price,
            specs,
        })
    }
}
