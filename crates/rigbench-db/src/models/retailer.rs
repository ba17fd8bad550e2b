//! Retailer link rows.

use crate::error::Result;
use native_db::*;
use native_model::{native_model, Model};
use rigbench_core::{ComponentId, ComponentKind, LinkId, PriceHistory, PricePoint, RetailerLink};
use serde::{Deserialize, Serialize};

/// Stored retailer link with its price history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 5, version = 1)]
#[native_db]
pub struct StoredRetailerLink {
    #[primary_key]
    pub id: u64,
    #[secondary_key]
    pub component_id: u64,
    /// Kind tag of the component.
    pub kind: String,
    pub retailer: String,
    pub url: String,
    /// Serialized price points, newest first.
    pub history: Vec<u8>,
}

impl StoredRetailerLink {
    pub fn from_link(link: &RetailerLink) -> Result<Self> {
        Ok(Self {
            id: link.id.raw(),
            component_id: link.component.raw(),
            kind: link.kind.tag().to_string(),
            retailer: link.retailer.clone(),
            url: link.url.clone(),
            history: bincode::serialize(link.history.entries())?,
        })
    }

    pub fn to_link(&self) -> Result<RetailerLink> {
        let points: Vec<PricePoint> = bincode::deserialize(&self.history)?;
        let kind: ComponentKind = self.kind.parse()?;
        Ok(RetailerLink {
            id: LinkId::new(self.id),
            component: ComponentId::new(self.component_id),
            kind,
            retailer: self.retailer.clone(),
            url: self.url.clone(),
            history: PriceHistory::from_points(points),
        })
    }
}
