//! Rigbench DB - Catalog store using native_db
//!
//! Provides persistent storage for:
//! - Catalog components of every kind
//! - Builds, build groups and the edges connecting them
//! - Retailer links and their price history
//!
//! Opening a store runs the schema migrations. Reads tolerate dangling
//! edges by filtering them out; every mutation commits before returning.

mod error;
mod models;
mod queries;
mod service;
mod store;

pub use error::{Error, Result};
pub use service::{Request, Response};
pub use store::Store;
