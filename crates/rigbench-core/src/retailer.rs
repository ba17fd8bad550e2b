//! Retailer recognition
//!
//! Maps a product URL's hostname to a known retailer. Lookup is an exact
//! match on the hostname: regional storefronts and `www.` variants are
//! enumerated explicitly, and anything not listed is unrecognized.

use crate::{ComponentId, ComponentKind, LinkId, PriceHistory};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A retailer and every hostname it trades under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetailerDef {
    pub id: String,
    pub name: String,
    pub hosts: Vec<String>,
}

impl RetailerDef {
    /// Create a retailer; each host is also registered with a `www.` prefix
    pub fn new(id: &str, name: &str, hosts: &[&str]) -> Self {
        let hosts = hosts
            .iter()
            .flat_map(|h| [h.to_string(), format!("www.{}", h)])
            .collect();
        Self {
            id: id.to_string(),
            name: name.to_string(),
            hosts,
        }
    }
}

/// Result of recognizing a URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recognition {
    Recognized { id: String, name: String },
    /// Unknown retailer; `label` is the raw hostname, or the input when no
    /// hostname could be extracted
    Unrecognized { label: String },
}

impl Recognition {
    /// Retailer name, or the fallback label
    pub fn display_label(&self) -> &str {
        match self {
            Recognition::Recognized { name, .. } => name,
            Recognition::Unrecognized { label } => label,
        }
    }

    pub fn retailer_id(&self) -> Option<&str> {
        match self {
            Recognition::Recognized { id, .. } => Some(id),
            Recognition::Unrecognized { .. } => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        matches!(self, Recognition::Recognized { .. })
    }
}

/// A retailer's product page for a catalog component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetailerLink {
    pub id: LinkId,
    pub component: ComponentId,
    pub kind: ComponentKind,
    /// Display name of the retailer
    pub retailer: String,
    pub url: String,
    pub history: PriceHistory,
}

impl RetailerLink {
    /// Latest recorded price, if any
    pub fn current_price(&self) -> Option<u64> {
        self.history.latest().map(|p| p.price)
    }
}

/// Exact-hostname lookup table
#[derive(Debug, Clone)]
pub struct RetailerTable {
    retailers: Vec<RetailerDef>,
    by_host: HashMap<String, usize>,
}

impl RetailerTable {
    /// Build a table. A host listed twice belongs to the first retailer.
    pub fn new(retailers: Vec<RetailerDef>) -> Self {
        let mut by_host = HashMap::new();
        for (index, retailer) in retailers.iter().enumerate() {
            for host in &retailer.hosts {
                by_host.entry(host.to_ascii_lowercase()).or_insert(index);
            }
        }
        Self { retailers, by_host }
    }

    /// The built-in storefront list
    pub fn builtin() -> Vec<RetailerDef> {
        vec![
            RetailerDef::new(
                "amazon",
                "Amazon",
                &[
                    "amazon.com",
                    "amazon.ca",
                    "amazon.co.uk",
                    "amazon.de",
                    "amazon.fr",
                    "amazon.com.au",
                ],
            ),
            RetailerDef::new("newegg", "Newegg", &["newegg.com", "newegg.ca"]),
            RetailerDef::new("bestbuy", "Best Buy", &["bestbuy.com", "bestbuy.ca"]),
            RetailerDef::new("memoryexpress", "Memory Express", &["memoryexpress.com"]),
            RetailerDef::new("canadacomputers", "Canada Computers", &["canadacomputers.com"]),
            RetailerDef::new("microcenter", "Micro Center", &["microcenter.com"]),
            RetailerDef::new("bhphoto", "B&H Photo", &["bhphotovideo.com"]),
        ]
    }

    pub fn retailers(&self) -> &[RetailerDef] {
        &self.retailers
    }

    /// Recognize a bare hostname
    pub fn recognize_host(&self, host: &str) -> Recognition {
        let key = host.trim().trim_end_matches('.').to_ascii_lowercase();
        match self.by_host.get(&key) {
            Some(&index) => {
                let retailer = &self.retailers[index];
                Recognition::Recognized {
                    id: retailer.id.clone(),
                    name: retailer.name.clone(),
                }
            }
            None => Recognition::Unrecognized { label: key },
        }
    }

    /// Recognize a URL, or a hostname without a scheme.
    ///
    /// Never fails: input with no extractable hostname is unrecognized and
    /// labelled with the trimmed input.
    pub fn recognize_url(&self, url: &str) -> Recognition {
        match host_of(url) {
            Some(host) => self.recognize_host(&host),
            None => Recognition::Unrecognized {
                label: url.trim().to_string(),
            },
        }
    }
}

impl Default for RetailerTable {
    fn default() -> Self {
        Self::new(Self::builtin())
    }
}

/// Extract the lowercased hostname of a URL
pub fn host_of(url: &str) -> Option<String> {
    let mut rest = url.trim();
    if let Some(pos) = rest.find("://") {
        let scheme = &rest[..pos];
        let valid_scheme = !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if !valid_scheme {
            return None;
        }
        rest = &rest[pos + 3..];
    } else if let Some(stripped) = rest.strip_prefix("//") {
        rest = stripped;
    }

    let authority = rest.split(['/', '?', '#']).next().unwrap_or("");
    let host_port = authority.rsplit('@').next().unwrap_or("");
    let host = match host_port.rfind(':') {
        Some(pos) if host_port[pos + 1..].chars().all(|c| c.is_ascii_digit()) => &host_port[..pos],
        _ => host_port,
    };
    let host = host.trim_end_matches('.');

    let valid = !host.is_empty()
        && !host.starts_with('.')
        && !host.contains("..")
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.');
    valid.then(|| host.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storefront_variants() {
        let table = RetailerTable::default();
        assert_eq!(table.recognize_url("www.amazon.com").retailer_id(), Some("amazon"));
        assert_eq!(table.recognize_url("www.amazon.ca").retailer_id(), Some("amazon"));
        assert_eq!(
            table
                .recognize_url("https://www.newegg.ca/p/N82E16819113793?item=1")
                .display_label(),
            "Newegg"
        );
    }

    #[test]
    fn test_unlisted_host_falls_back_to_hostname() {
        let table = RetailerTable::default();
        let result = table.recognize_url("shop.example.com");
        assert!(!result.is_recognized());
        assert_eq!(result.display_label(), "shop.example.com");
    }

    #[test]
    fn test_no_suffix_matching() {
        let table = RetailerTable::default();
        assert!(!table.recognize_url("https://smile.amazon.com/dp/1").is_recognized());
    }

    #[test]
    fn test_malformed_input_is_unrecognized() {
        let table = RetailerTable::default();
        let result = table.recognize_url("not a url");
        assert_eq!(
            result,
            Recognition::Unrecognized {
                label: "not a url".into()
            }
        );
        assert!(!table.recognize_url("").is_recognized());
        assert!(!table.recognize_url("http://").is_recognized());
        assert!(!table.recognize_url("ht tp://amazon.com").is_recognized());
    }

    #[test]
    fn test_host_extraction() {
        assert_eq!(
            host_of("HTTPS://user:pw@WWW.BestBuy.com:443/site/x"),
            Some("www.bestbuy.com".into())
        );
        assert_eq!(host_of("amazon.com/dp/B0"), Some("amazon.com".into()));
        assert_eq!(host_of("//newegg.com"), Some("newegg.com".into()));
        assert_eq!(host_of("a..b"), None);
    }

    #[test]
    fn test_custom_table() {
        let table = RetailerTable::new(vec![RetailerDef {
            id: "shop".into(),
            name: "Example Shop".into(),
            hosts: vec!["Shop.Example.com".into()],
        }]);
        assert_eq!(table.recognize_url("shop.example.com").retailer_id(), Some("shop"));
        assert!(!table.recognize_url("www.amazon.com").is_recognized());
    }
}
