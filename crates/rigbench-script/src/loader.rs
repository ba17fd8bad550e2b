//! RON catalog loader

use crate::error::{Error, Result};
use crate::schema::catalog::{CatalogFile, ComponentDef, GroupDef};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Loaded catalog content
#[derive(Debug, Default)]
pub struct Catalog {
    /// Component definitions by name, in file order
    pub components: IndexMap<String, ComponentDef>,
    /// Build groups, in file order
    pub groups: Vec<GroupDef>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a component definition
    pub fn get_component(&self, name: &str) -> Option<&ComponentDef> {
        self.components.get(name)
    }

    /// Get a build group definition
    pub fn get_group(&self, name: &str) -> Option<&GroupDef> {
        self.groups.iter().find(|g| g.name == name)
    }
}

/// Loader for RON catalog files
pub struct Loader {
    catalog: Catalog,
}

impl Loader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(),
        }
    }

    /// Load a single RON file
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        debug!(?path, "loading catalog file");
        self.load_catalog_str(&content)
    }

    /// Load a catalog from a RON string.
    ///
    /// Component and group names must be unique across everything loaded,
    /// and every build may only name components that are already known.
    pub fn load_catalog_str(&mut self, content: &str) -> Result<()> {
        let file: CatalogFile = ron::from_str(content)?;

        for component in file.components {
            let name = component.name.trim().to_string();
            if name.is_empty() {
                return Err(Error::MissingField("component name".to_string()));
            }
            if self.catalog.components.contains_key(&name) {
                return Err(Error::DuplicateDefinition(name));
            }
            self.catalog.components.insert(name, component);
        }

        for group in file.groups {
            if group.name.trim().is_empty() {
                return Err(Error::MissingField("group name".to_string()));
            }
            if self.catalog.get_group(&group.name).is_some() {
                return Err(Error::DuplicateDefinition(group.name));
            }
            for build in &group.builds {
                if build.name.trim().is_empty() {
                    return Err(Error::MissingField(format!("build name in {}", group.name)));
                }
                if let Some(unknown) = build
                    .components
                    .iter()
                    .find(|c| !self.catalog.components.contains_key(c.trim()))
                {
                    return Err(Error::InvalidSchema(format!(
                        "build {} refers to unknown component {}",
                        build.name, unknown
                    )));
                }
            }
            self.catalog.groups.push(group);
        }
        Ok(())
    }

    /// Load all RON files from a directory, in name order
    pub fn load_directory(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if !path.is_dir() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Not a directory: {:?}", path),
            )));
        }

        let mut entries = fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<_>>>()?;
        entries.sort();

        for file_path in entries {
            if file_path.extension().map(|e| e == "ron").unwrap_or(false) {
                self.load_file(&file_path)?;
            } else if file_path.is_dir() {
                self.load_directory(&file_path)?;
            }
        }

        Ok(())
    }

    /// Finish loading and return the catalog
    pub fn finish(self) -> Catalog {
        self.catalog
    }

    /// Get the current catalog (for inspection during loading)
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
