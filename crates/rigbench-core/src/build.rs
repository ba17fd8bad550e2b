//! Builds, build groups and the relations between catalog rows

use crate::error::{Error, Result};
use crate::{BuildId, Component, ComponentId, ComponentKind, EdgeId, GroupId, Value};
use serde::{Deserialize, Serialize};

/// Relation tag of a build group endpoint
pub const GROUP_TAG: &str = "buildGroup";
/// Relation tag of a build endpoint
pub const BUILD_TAG: &str = "build";

/// A named assembly of components
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    pub id: BuildId,
    pub name: String,
    /// Persisted total. Kept in step by the store, but derived reads always
    /// recompute from the live assignments.
    pub price: u64,
}

impl Build {
    /// Look up a column by name
    pub fn field(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(self.id.raw().into()),
            "name" => Some((&self.name).into()),
            "price" => Some(self.price.into()),
            _ => None,
        }
    }
}

/// Editable columns of a build. The price is not editable; it follows the
/// assignments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildChanges {
    pub name: Option<String>,
}

impl BuildChanges {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Apply to a build, leaving it untouched on error
    pub fn apply(self, build: &mut Build) -> Result<()> {
        if let Some(name) = self.name {
            if name.trim().is_empty() {
                return Err(Error::validation("name", "must not be empty"));
            }
            build.name = name;
        }
        Ok(())
    }
}

/// A named collection of build variants ("machine")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildGroup {
    pub id: GroupId,
    pub name: String,
}

impl BuildGroup {
    /// Look up a column by name
    pub fn field(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(self.id.raw().into()),
            "name" => Some((&self.name).into()),
            _ => None,
        }
    }
}

/// A raw relation row as the store keeps it.
///
/// The store does not restrict which `(source_type, target_type)` pairs
/// may appear; [`Edge::relation`] is where unknown pairs are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub source_id: u64,
    pub source_type: String,
    pub target_id: u64,
    pub target_type: String,
}

impl Edge {
    /// Look up a column by name
    pub fn field(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(self.id.raw().into()),
            "source_id" => Some(self.source_id.into()),
            "source_type" => Some((&self.source_type).into()),
            "target_id" => Some(self.target_id.into()),
            "target_type" => Some((&self.target_type).into()),
            _ => None,
        }
    }

    /// Typed view of this row, or `None` for a pair outside the known set
    pub fn relation(&self) -> Option<Relation> {
        match (self.source_type.as_str(), self.target_type.as_str()) {
            (GROUP_TAG, BUILD_TAG) => Some(Relation::GroupContainsBuild {
                edge: self.id,
                group: GroupId::new(self.source_id),
                build: BuildId::new(self.target_id),
            }),
            (BUILD_TAG, target) => {
                let kind = target.parse::<ComponentKind>().ok()?;
                if kind.tag() != target {
                    return None;
                }
                Some(Relation::BuildHasComponent {
                    edge: self.id,
                    build: BuildId::new(self.source_id),
                    component: ComponentId::new(self.target_id),
                    kind,
                })
            }
            _ => None,
        }
    }
}

/// The relations the application knows how to create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    GroupContainsBuild {
        edge: EdgeId,
        group: GroupId,
        build: BuildId,
    },
    BuildHasComponent {
        edge: EdgeId,
        build: BuildId,
        component: ComponentId,
        kind: ComponentKind,
    },
}

impl Relation {
    pub fn edge(&self) -> EdgeId {
        match self {
            Relation::GroupContainsBuild { edge, .. } | Relation::BuildHasComponent { edge, .. } => {
                *edge
            }
        }
    }

    /// Flatten into the stored row shape
    pub fn to_edge(&self) -> Edge {
        match *self {
            Relation::GroupContainsBuild { edge, group, build } => Edge {
                id: edge,
                source_id: group.raw(),
                source_type: GROUP_TAG.to_string(),
                target_id: build.raw(),
                target_type: BUILD_TAG.to_string(),
            },
            Relation::BuildHasComponent {
                edge,
                build,
                component,
                kind,
            } => Edge {
                id: edge,
                source_id: build.raw(),
                source_type: BUILD_TAG.to_string(),
                target_id: component.raw(),
                target_type: kind.tag().to_string(),
            },
        }
    }
}

/// The components currently assigned to a build, as read at one moment.
///
/// Evaluators take a snapshot rather than a store handle; callers re-read
/// after every mutation instead of assuming the snapshot stays current.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildSnapshot {
    components: Vec<Component>,
}

impl BuildSnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a snapshot from assigned components
    pub fn from_components(components: Vec<Component>) -> Self {
        Self { components }
    }

    /// Builder-style assignment, mostly for tests and previews
    pub fn with(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    /// Add an assignment
    pub fn assign(&mut self, component: Component) {
        self.components.push(component);
    }

    /// All assigned components
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Assigned components of one kind
    pub fn of_kind(&self, kind: ComponentKind) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(move |c| c.kind() == kind)
    }


    /// Whether a component is assigned
    pub fn contains(&self, id: ComponentId) -> bool {
        self.components.iter().any(|c| c.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The snapshot with one assignment of `id` taken out
    pub fn without(&self, id: ComponentId) -> Self {
        let mut components = self.components.clone();
        if let Some(pos) = components.iter().position(|c| c.id == id) {
            components.remove(pos);
        }
        Self { components }
    }

    /// The snapshot with every assignment of one kind taken out
    pub fn without_kind(&self, kind: ComponentKind) -> Self {
        Self {
            components: self
                .components
                .iter()
                .filter(|c| c.kind() != kind)
                .cloned()
                .collect(),
        }
    }
}
