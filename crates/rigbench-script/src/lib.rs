//! Rigbench Script - RON catalog files and configuration
//!
//! Loads rigbench content from RON files:
//! - Catalog seeds (components, retailer links, build groups and builds)
//! - Application configuration (retailer table, evaluator tunables)

mod config;
mod error;
mod loader;
mod schema;
mod seeder;

pub use config::{load_config, load_config_str};
pub use error::{Error, Result};
pub use loader::{Catalog, Loader};
pub use schema::catalog::{BuildDef, CatalogFile, ComponentDef, GroupDef, LinkDef};
pub use schema::config::AppConfig;
pub use seeder::{SeedReport, Seeder};
