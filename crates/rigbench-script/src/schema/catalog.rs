//! Catalog seed schema

use rigbench_core::{NewComponent, Specs};
use serde::{Deserialize, Serialize};

/// A catalog component. The name is also how builds in the same catalog
/// refer to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentDef {
    #[serde(default)]
    pub brand: String,
    pub name: String,
    /// Price in minor currency units
    #[serde(default)]
    pub price: u64,
    pub specs: Specs,
    /// Retailer product pages
    #[serde(default)]
    pub links: Vec<LinkDef>,
}

impl ComponentDef {
    /// The component draft this definition describes
    pub fn to_new_component(&self) -> NewComponent {
        NewComponent::new(self.brand.clone(), self.name.clone(), self.price, self.specs.clone())
    }
}

/// A retailer product page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkDef {
    /// Retailer name; recognized from the URL when empty
    #[serde(default)]
    pub retailer: String,
    pub url: String,
    /// Price observed today, if any
    #[serde(default)]
    pub price: Option<u64>,
}

/// A build and the names of its components
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildDef {
    pub name: String,
    #[serde(default)]
    pub components: Vec<String>,
}

/// A build group ("machine") and its builds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupDef {
    pub name: String,
    #[serde(default)]
    pub builds: Vec<BuildDef>,
}

/// Layout of a catalog seed file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogFile {
    #[serde(default)]
    pub components: Vec<ComponentDef>,
    #[serde(default)]
    pub groups: Vec<GroupDef>,
}
