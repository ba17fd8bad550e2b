//! Database models for persistent storage.

mod build;
mod component;
mod retailer;
mod sequence;

pub use build::*;
pub use component::*;
pub use retailer::*;
pub use sequence::*;
