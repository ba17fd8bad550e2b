//! Rigbench Core - Catalog model and build evaluation
//!
//! This crate provides the pure, synchronous part of rigbench:
//! - Component catalog types (`Component`, `Specs`, `ComponentKind`)
//! - Builds, build groups and typed relations between them
//! - Pairwise compatibility rules (`Evaluator`, `Verdict`)
//! - Quality comparison between attribute values (`Quality`)
//! - Build price aggregation (`BuildPrice`)
//! - Retailer hostname recognition (`RetailerTable`)
//! - Per-day retailer price history (`PriceHistory`)
//!
//! Nothing in here touches storage. Every evaluator works on snapshots
//! handed in by the caller and always produces an answer: rules that cannot
//! be checked yield `Verdict::Unknown`, comparisons that cannot be made
//! yield `Quality::Neutral`.

pub mod attribute;
mod build;
pub mod compat;
mod component;
mod error;
mod history;
mod identity;
mod kind;
pub mod partition;
mod price;
pub mod quality;
pub mod query;
pub mod retailer;
mod value;

pub use attribute::{AttributeDef, OrderingPolicy, Unit};
pub use build::{Build, BuildChanges, BuildGroup, BuildSnapshot, Edge, Relation, BUILD_TAG, GROUP_TAG};
pub use compat::{Evaluation, Evaluator, EvaluatorConfig, Finding, Rule, Verdict};
pub use component::{
    Component, ComponentChanges, CoolerSpecs, CpuSpecs, GpuSpecs, M2StorageSpecs,
    MotherboardSpecs, NewComponent, PsuSpecs, RamSpecs, SataStorageSpecs, Specs,
};
pub use error::{Error, Result};
pub use history::{PriceHistory, PricePoint};
pub use identity::{BuildId, ComponentId, EdgeId, GroupId, LinkId};
pub use kind::ComponentKind;
pub use partition::{Candidate, CatalogView, Partition};
pub use price::{swap_delta, BuildPrice};
pub use quality::{compare_components, AttributeComparison, Quality};
pub use query::{Condition, Matcher, OrderBy, SortDirection};
pub use retailer::{Recognition, RetailerDef, RetailerLink, RetailerTable};
pub use value::Value;
