//! Build, build group and edge rows.

use native_db::*;
use native_model::{native_model, Model};
use rigbench_core::{Build, BuildGroup, BuildId, Edge, EdgeId, GroupId};
use serde::{Deserialize, Serialize};

/// Stored build.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 2, version = 1)]
#[native_db]
pub struct StoredBuild {
    #[primary_key]
    pub id: u64,
    pub name: String,
    /// Last computed total, refreshed on every assignment change.
    pub price: u64,
}

impl StoredBuild {
    pub fn from_build(build: &Build) -> Self {
        Self {
            id: build.id.raw(),
            name: build.name.clone(),
            price: build.price,
        }
    }

    pub fn to_build(&self) -> Build {
        Build {
            id: BuildId::new(self.id),
            name: self.name.clone(),
            price: self.price,
        }
    }
}

/// Stored build group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 3, version = 1)]
#[native_db]
pub struct StoredBuildGroup {
    #[primary_key]
    pub id: u64,
    pub name: String,
}

impl StoredBuildGroup {
    pub fn from_group(group: &BuildGroup) -> Self {
        Self {
            id: group.id.raw(),
            name: group.name.clone(),
        }
    }

    pub fn to_group(&self) -> BuildGroup {
        BuildGroup {
            id: GroupId::new(self.id),
            name: self.name.clone(),
        }
    }
}

/// Stored edge.
///
/// Ids come from one shared sequence, so a source or target id alone
/// identifies the row it points at.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 4, version = 1)]
#[native_db]
pub struct StoredEdge {
    #[primary_key]
    pub id: u64,
    #[secondary_key]
    pub source_id: u64,
    pub source_type: String,
    #[secondary_key]
    pub target_id: u64,
    pub target_type: String,
}

impl StoredEdge {
    pub fn from_edge(edge: &Edge) -> Self {
        Self {
            id: edge.id.raw(),
            source_id: edge.source_id,
            source_type: edge.source_type.clone(),
            target_id: edge.target_id,
            target_type: edge.target_type.clone(),
        }
    }

    pub fn to_edge(&self) -> Edge {
        Edge {
            id: EdgeId::new(self.id),
            source_id: self.source_id,
            source_type: self.source_type.clone(),
            target_id: self.target_id,
            target_type: self.target_type.clone(),
        }
    }
}
