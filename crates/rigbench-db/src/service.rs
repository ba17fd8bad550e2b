//! Request dispatcher.
//!
//! Every store operation as a serializable request, so a caller on the far
//! side of a process boundary can drive the store with RON text.

use crate::error::{Error, Result};
use crate::store::Store;
use rigbench_core::partition::{CatalogView, Partition};
use rigbench_core::query::{Condition, OrderBy};
use rigbench_core::{
    Build, BuildChanges, BuildGroup, BuildId, BuildPrice, Component, ComponentChanges,
    ComponentId, ComponentKind, Edge, EdgeId, Evaluation, GroupId, LinkId, NewComponent,
    RetailerLink,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A store operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Request {
    ComponentsWhere {
        kind: ComponentKind,
        #[serde(default)]
        conditions: Vec<Condition>,
        #[serde(default)]
        order_by: Option<OrderBy>,
    },
    ComponentIdsWhere {
        kind: ComponentKind,
        #[serde(default)]
        conditions: Vec<Condition>,
        #[serde(default)]
        order_by: Option<OrderBy>,
    },
    EdgesWhere {
        #[serde(default)]
        conditions: Vec<Condition>,
    },
    BuildsWhere {
        #[serde(default)]
        conditions: Vec<Condition>,
    },
    BuildGroupsWhere {
        #[serde(default)]
        conditions: Vec<Condition>,
    },
    CreateComponent(NewComponent),
    UpdateComponent {
        id: ComponentId,
        changes: ComponentChanges,
    },
    DeleteComponent(ComponentId),
    CreateOrCopyBuild {
        group: GroupId,
        #[serde(default)]
        copy_from: Option<BuildId>,
    },
    UpdateBuild {
        id: BuildId,
        changes: BuildChanges,
    },
    DeleteBuild(BuildId),
    AssignComponentToBuild {
        build: BuildId,
        #[serde(default)]
        edge: Option<EdgeId>,
        component: ComponentId,
        kind: ComponentKind,
    },
    RemoveComponentFromBuild {
        build: BuildId,
        edge: EdgeId,
        kind: ComponentKind,
    },
    AddBuildGroup {
        name: String,
    },
    AddRetailerLinkToComponent {
        kind: ComponentKind,
        component: ComponentId,
        #[serde(default)]
        retailer: String,
        url: String,
    },
    RecordPrice {
        link: LinkId,
        price: u64,
    },
    BuildComponents(BuildId),
    BuildPrice(BuildId),
    EvaluateForBuild {
        build: BuildId,
        candidate: ComponentId,
    },
    PartitionForBuild {
        #[serde(default)]
        build: Option<BuildId>,
        kind: ComponentKind,
        #[serde(default)]
        view: CatalogView,
    },
    BuildsInGroup(GroupId),
    RetailerLinks(ComponentId),
}

/// Result of a store operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Response {
    Components(Vec<Component>),
    ComponentIds(Vec<ComponentId>),
    Edges(Vec<Edge>),
    Builds(Vec<Build>),
    BuildGroups(Vec<BuildGroup>),
    Component(Component),
    Build(Build),
    Group(GroupId),
    Edge(EdgeId),
    Link(RetailerLink),
    Links(Vec<RetailerLink>),
    Price(BuildPrice),
    Evaluation(Evaluation),
    Partition(Partition),
    Done,
}

impl Store {
    /// Run one request.
    pub fn dispatch(&self, request: Request) -> Result<Response> {
        debug!(?request, "dispatch");
        let response = match request {
            Request::ComponentsWhere {
                kind,
                conditions,
                order_by,
            } => Response::Components(self.components_where(kind, &conditions, order_by.as_ref())?),
            Request::ComponentIdsWhere {
                kind,
                conditions,
                order_by,
            } => Response::ComponentIds(self.component_ids_where(
                kind,
                &conditions,
                order_by.as_ref(),
            )?),
            Request::EdgesWhere { conditions } => Response::Edges(self.edges_where(&conditions)?),
            Request::BuildsWhere { conditions } => Response::Builds(self.builds_where(&conditions)?),
            Request::BuildGroupsWhere { conditions } => {
                Response::BuildGroups(self.build_groups_where(&conditions)?)
            }
            Request::CreateComponent(new) => Response::Component(self.create_component(new)?),
            Request::UpdateComponent { id, changes } => {
                Response::Component(self.update_component(id, changes)?)
            }
            Request::DeleteComponent(id) => {
                self.delete_component(id)?;
                Response::Done
            }
            Request::CreateOrCopyBuild { group, copy_from } => {
                Response::Build(self.create_or_copy_build(group, copy_from)?)
            }
            Request::UpdateBuild { id, changes } => Response::Build(self.update_build(id, changes)?),
            Request::DeleteBuild(id) => {
                self.delete_build(id)?;
                Response::Done
            }
            Request::AssignComponentToBuild {
                build,
                edge,
                component,
                kind,
            } => Response::Edge(self.assign_component_to_build(build, edge, component, kind)?),
            Request::RemoveComponentFromBuild { build, edge, kind } => {
                self.remove_component_from_build(build, edge, kind)?;
                Response::Done
            }
            Request::AddBuildGroup { name } => Response::Group(self.add_build_group(&name)?),
            Request::AddRetailerLinkToComponent {
                kind,
                component,
                retailer,
                url,
            } => Response::Link(self.add_retailer_link_to_component(kind, component, &retailer, &url)?),
            Request::RecordPrice { link, price } => Response::Link(self.record_price(link, price)?),
            Request::BuildComponents(build) => Response::Components(self.build_components(build)?),
            Request::BuildPrice(build) => Response::Price(self.build_price(build)?),
            Request::EvaluateForBuild { build, candidate } => {
                Response::Evaluation(self.evaluate_for_build(build, candidate)?)
            }
            Request::PartitionForBuild { build, kind, view } => {
                Response::Partition(self.partition_for_build(build, kind, &view)?)
            }
            Request::BuildsInGroup(group) => Response::Builds(self.builds_in_group(group)?),
            Request::RetailerLinks(component) => Response::Links(self.retailer_links(component)?),
        };
        Ok(response)
    }

    /// Parse and run a RON-encoded request.
    pub fn dispatch_str(&self, text: &str) -> Result<Response> {
        self.dispatch(parse_request(text)?)
    }
}

/// Parse a RON request. An operation name the dispatcher does not know is
/// an `UnknownOperation`; anything else malformed, including a bad variant
/// inside a known operation, is a `Request` error.
pub fn parse_request(text: &str) -> Result<Request> {
    ron::from_str(text).map_err(|err| match err.code {
        ron::Error::NoSuchEnumVariant { found, outer, .. }
            if outer.as_deref() == Some("Request") =>
        {
            Error::UnknownOperation(found)
        }
        _ => Error::Request(err.to_string()),
    })
}
