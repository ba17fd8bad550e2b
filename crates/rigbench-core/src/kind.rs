//! Component kinds (build slots)

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of a catalog component, which is also the build slot it fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComponentKind {
    Cpu,
    Gpu,
    Ram,
    M2Storage,
    SataStorage,
    Psu,
    Motherboard,
    Cooler,
}

impl ComponentKind {
    /// Every kind, in slot display order
    pub const ALL: [ComponentKind; 8] = [
        ComponentKind::Cpu,
        ComponentKind::Motherboard,
        ComponentKind::Cooler,
        ComponentKind::Ram,
        ComponentKind::Gpu,
        ComponentKind::M2Storage,
        ComponentKind::SataStorage,
        ComponentKind::Psu,
    ];

    /// Stable tag used in stored relation rows
    pub fn tag(&self) -> &'static str {
        match self {
            ComponentKind::Cpu => "cpu",
            ComponentKind::Gpu => "gpu",
            ComponentKind::Ram => "ram",
            ComponentKind::M2Storage => "m2Storage",
            ComponentKind::SataStorage => "sataStorage",
            ComponentKind::Psu => "psu",
            ComponentKind::Motherboard => "mobo",
            ComponentKind::Cooler => "cooler",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            ComponentKind::Cpu => "CPU",
            ComponentKind::Gpu => "GPU",
            ComponentKind::Ram => "RAM",
            ComponentKind::M2Storage => "M.2 Storage",
            ComponentKind::SataStorage => "SATA Storage",
            ComponentKind::Psu => "PSU",
            ComponentKind::Motherboard => "Motherboard",
            ComponentKind::Cooler => "Cooler",
        }
    }

    /// Whether a build holds more than one of this kind.
    ///
    /// A candidate of a single-slot kind is evaluated as a replacement for
    /// the assigned one. The store itself accepts any number of
    /// assignments per kind.
    pub fn allows_multiple(&self) -> bool {
        matches!(
            self,
            ComponentKind::Gpu
                | ComponentKind::Ram
                | ComponentKind::M2Storage
                | ComponentKind::SataStorage
        )
    }

    /// Whether this kind draws power that the PSU must cover
    pub fn is_power_consumer(&self) -> bool {
        matches!(self, ComponentKind::Cpu | ComponentKind::Gpu)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for ComponentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpu" => Ok(ComponentKind::Cpu),
            "gpu" => Ok(ComponentKind::Gpu),
            "ram" | "memory" => Ok(ComponentKind::Ram),
            "m2storage" | "m2" | "m.2" => Ok(ComponentKind::M2Storage),
            "satastorage" | "sata" => Ok(ComponentKind::SataStorage),
            "psu" => Ok(ComponentKind::Psu),
            "mobo" | "motherboard" => Ok(ComponentKind::Motherboard),
            "cooler" => Ok(ComponentKind::Cooler),
            _ => Err(Error::UnknownKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for kind in ComponentKind::ALL {
            assert_eq!(kind.tag().parse::<ComponentKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!(
            "motherboard".parse::<ComponentKind>().unwrap(),
            ComponentKind::Motherboard
        );
        assert_eq!("M2".parse::<ComponentKind>().unwrap(), ComponentKind::M2Storage);
        assert!("case".parse::<ComponentKind>().is_err());
    }

    #[test]
    fn test_multiplicity_convention() {
        assert!(!ComponentKind::Cpu.allows_multiple());
        assert!(!ComponentKind::Motherboard.allows_multiple());
        assert!(ComponentKind::M2Storage.allows_multiple());
    }
}
