//! Configuration loading

use crate::error::{Error, Result};
use crate::schema::config::AppConfig;
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

/// Load the configuration file. A missing file yields the defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => load_config_str(&content),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(?path, "no configuration file, using defaults");
            Ok(AppConfig::default())
        }
        Err(err) => Err(err.into()),
    }
}

/// Parse and check a configuration
pub fn load_config_str(content: &str) -> Result<AppConfig> {
    let config: AppConfig = ron::from_str(content)?;

    let mut ids = HashSet::new();
    for retailer in &config.retailers {
        if retailer.id.trim().is_empty() {
            return Err(Error::MissingField("retailer id".to_string()));
        }
        if retailer.hosts.is_empty() {
            return Err(Error::MissingField(format!("hosts of retailer {}", retailer.id)));
        }
        if !ids.insert(retailer.id.as_str()) {
            return Err(Error::DuplicateDefinition(retailer.id.clone()));
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_retailers() {
        let config = load_config_str(
            r#"(retailers: [(id: "shop", name: "Example Shop", hosts: ["shop.example.com"])])"#,
        )
        .unwrap();
        let table = config.retailer_table();
        assert_eq!(
            table.recognize_url("https://shop.example.com/item/1").display_label(),
            "Example Shop"
        );
        assert!(!table.recognize_url("www.amazon.com").is_recognized());
    }

    #[test]
    fn test_duplicate_retailer() {
        let result = load_config_str(
            r#"(retailers: [
                (id: "shop", name: "A", hosts: ["a.example"]),
                (id: "shop", name: "B", hosts: ["b.example"]),
            ])"#,
        );
        assert!(matches!(result, Err(Error::DuplicateDefinition(_))));
    }

    #[test]
    fn test_retailer_without_hosts() {
        let result = load_config_str(r#"(retailers: [(id: "shop", name: "A", hosts: [])])"#);
        assert!(matches!(result, Err(Error::MissingField(_))));
    }

    #[test]
    fn test_demo_config() {
        let config = load_config_str(include_str!("../../../demos/rigbench.ron")).unwrap();
        assert_eq!(config.database.as_deref(), Some("rigbench.db"));
        assert_eq!(config.retailers, AppConfig::default().retailers);
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = load_config("/nonexistent/rigbench/config.ron").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
