//! Attribute descriptors
//!
//! Each component kind has an ordered table of the attributes shown in its
//! catalog view. A descriptor names the field, the unit it is measured in,
//! and which direction counts as better. Text attributes have no ordering
//! policy and are never scored.

use crate::ComponentKind;
use serde::{Deserialize, Serialize};

/// Whether smaller or larger values are preferable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderingPolicy {
    LessIsBetter,
    MoreIsBetter,
}

/// Unit of an attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Minor currency units
    Dollars,
    Watts,
    Megahertz,
    Gigabytes,
    Megabytes,
    MegabytesPerSecond,
    Millimeters,
    Count,
    /// Clock cycles (memory latency)
    Cycles,
    /// PCIe generation
    Generation,
    Boolean,
    Text,
}

impl Unit {
    /// The ordering policy attributes of this unit use unless overridden
    pub const fn default_policy(self) -> Option<OrderingPolicy> {
        match self {
            Unit::Dollars | Unit::Watts | Unit::Millimeters | Unit::Cycles => {
                Some(OrderingPolicy::LessIsBetter)
            }
            Unit::Megahertz
            | Unit::Gigabytes
            | Unit::Megabytes
            | Unit::MegabytesPerSecond
            | Unit::Count
            | Unit::Generation
            | Unit::Boolean => Some(OrderingPolicy::MoreIsBetter),
            Unit::Text => None,
        }
    }

    /// Suffix for rendering values of this unit
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Dollars => "",
            Unit::Watts => " W",
            Unit::Megahertz => " MHz",
            Unit::Gigabytes => " GB",
            Unit::Megabytes => " MB",
            Unit::MegabytesPerSecond => " MB/s",
            Unit::Millimeters => " mm",
            Unit::Cycles => " CL",
            Unit::Count | Unit::Generation | Unit::Boolean | Unit::Text => "",
        }
    }
}

/// Descriptor of one named attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeDef {
    pub field: &'static str,
    pub label: &'static str,
    pub unit: Unit,
    pub policy: Option<OrderingPolicy>,
}

impl AttributeDef {
    const fn new(field: &'static str, label: &'static str, unit: Unit) -> Self {
        Self {
            field,
            label,
            unit,
            policy: unit.default_policy(),
        }
    }

    const fn prefer(mut self, policy: OrderingPolicy) -> Self {
        self.policy = Some(policy);
        self
    }
}

const BRAND: AttributeDef = AttributeDef::new("brand", "Brand", Unit::Text);
const NAME: AttributeDef = AttributeDef::new("name", "Name", Unit::Text);
const PRICE: AttributeDef = AttributeDef::new("price", "Price", Unit::Dollars);

static CPU: &[AttributeDef] = &[
    BRAND,
    NAME,
    PRICE,
    AttributeDef::new("socket", "Socket", Unit::Text),
    AttributeDef::new("cores", "Cores", Unit::Count),
    AttributeDef::new("threads", "Threads", Unit::Count),
    AttributeDef::new("l3_cache_mb", "L3 Cache", Unit::Megabytes),
    AttributeDef::new("base_clock_mhz", "Base Clock", Unit::Megahertz),
    AttributeDef::new("boost_clock_mhz", "Boost Clock", Unit::Megahertz),
    AttributeDef::new("tdp_watts", "TDP", Unit::Watts),
    AttributeDef::new("integrated_graphics", "iGPU", Unit::Boolean),
];

static GPU: &[AttributeDef] = &[
    BRAND,
    NAME,
    PRICE,
    AttributeDef::new("chipset", "Chipset", Unit::Text),
    AttributeDef::new("vram_gb", "VRAM", Unit::Gigabytes),
    AttributeDef::new("base_clock_mhz", "Base Clock", Unit::Megahertz),
    AttributeDef::new("boost_clock_mhz", "Boost Clock", Unit::Megahertz),
    AttributeDef::new("tdp_watts", "TDP", Unit::Watts),
    AttributeDef::new("pcie_generation", "PCIe", Unit::Generation),
    AttributeDef::new("length_mm", "Length", Unit::Millimeters),
];

static RAM: &[AttributeDef] = &[
    BRAND,
    NAME,
    PRICE,
    AttributeDef::new("ram_type", "Type", Unit::Text),
    AttributeDef::new("speed_mhz", "Speed", Unit::Megahertz),
    AttributeDef::new("capacity_gb", "Capacity", Unit::Gigabytes),
    AttributeDef::new("modules", "Modules", Unit::Count).prefer(OrderingPolicy::LessIsBetter),
    AttributeDef::new("cas_latency", "CAS Latency", Unit::Cycles),
];

static M2_STORAGE: &[AttributeDef] = &[
    BRAND,
    NAME,
    PRICE,
    AttributeDef::new("capacity_gb", "Capacity", Unit::Gigabytes),
    AttributeDef::new("pcie_generation", "PCIe", Unit::Generation),
    AttributeDef::new("read_mbps", "Read", Unit::MegabytesPerSecond),
    AttributeDef::new("write_mbps", "Write", Unit::MegabytesPerSecond),
];

static SATA_STORAGE: &[AttributeDef] = &[
    BRAND,
    NAME,
    PRICE,
    AttributeDef::new("capacity_gb", "Capacity", Unit::Gigabytes),
    AttributeDef::new("form_factor", "Form Factor", Unit::Text),
    AttributeDef::new("read_mbps", "Read", Unit::MegabytesPerSecond),
    AttributeDef::new("write_mbps", "Write", Unit::MegabytesPerSecond),
];

static PSU: &[AttributeDef] = &[
    BRAND,
    NAME,
    PRICE,
    AttributeDef::new("wattage", "Wattage", Unit::Watts).prefer(OrderingPolicy::MoreIsBetter),
    AttributeDef::new("efficiency", "Efficiency", Unit::Text),
    AttributeDef::new("modular", "Modular", Unit::Text),
];

static MOTHERBOARD: &[AttributeDef] = &[
    BRAND,
    NAME,
    PRICE,
    AttributeDef::new("socket", "Socket", Unit::Text),
    AttributeDef::new("chipset", "Chipset", Unit::Text),
    AttributeDef::new("form_factor", "Form Factor", Unit::Text),
    AttributeDef::new("ram_type", "RAM Type", Unit::Text),
    AttributeDef::new("ram_slots", "RAM Slots", Unit::Count),
    AttributeDef::new("max_ram_gb", "Max RAM", Unit::Gigabytes),
    AttributeDef::new("m2_slots", "M.2 Slots", Unit::Count),
    AttributeDef::new("sata_ports", "SATA Ports", Unit::Count),
    AttributeDef::new("pcie5_x16", "PCIe 5.0 x16", Unit::Count),
    AttributeDef::new("pcie4_x16", "PCIe 4.0 x16", Unit::Count),
    AttributeDef::new("pcie3_x16", "PCIe 3.0 x16", Unit::Count),
    AttributeDef::new("pcie4_x4", "PCIe 4.0 x4", Unit::Count),
    AttributeDef::new("pcie3_x4", "PCIe 3.0 x4", Unit::Count),
    AttributeDef::new("pcie3_x1", "PCIe 3.0 x1", Unit::Count),
    AttributeDef::new("usb2_ports", "USB 2.0", Unit::Count),
    AttributeDef::new("usb3_gen1_ports", "USB 3.2 Gen 1", Unit::Count),
    AttributeDef::new("usb3_gen2_ports", "USB 3.2 Gen 2", Unit::Count),
    AttributeDef::new("usb4_ports", "USB4", Unit::Count),
];

static COOLER: &[AttributeDef] = &[
    BRAND,
    NAME,
    PRICE,
    AttributeDef::new("cooler_type", "Type", Unit::Text),
    AttributeDef::new("sockets", "Sockets", Unit::Text),
    AttributeDef::new("tdp_rating_watts", "TDP Rating", Unit::Watts)
        .prefer(OrderingPolicy::MoreIsBetter),
    AttributeDef::new("height_mm", "Height", Unit::Millimeters),
];

/// The ordered attribute table of a kind
pub fn attributes(kind: ComponentKind) -> &'static [AttributeDef] {
    match kind {
        ComponentKind::Cpu => CPU,
        ComponentKind::Gpu => GPU,
        ComponentKind::Ram => RAM,
        ComponentKind::M2Storage => M2_STORAGE,
        ComponentKind::SataStorage => SATA_STORAGE,
        ComponentKind::Psu => PSU,
        ComponentKind::Motherboard => MOTHERBOARD,
        ComponentKind::Cooler => COOLER,
    }
}

/// Find one attribute of a kind by field name
pub fn attribute(kind: ComponentKind, field: &str) -> Option<&'static AttributeDef> {
    attributes(kind).iter().find(|a| a.field == field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Component, ComponentId, Specs};

    #[test]
    fn test_every_descriptor_resolves() {
        for kind in ComponentKind::ALL {
            let component = Component {
                id: ComponentId::new(1),
                brand: "b".into(),
                name: "n".into(),
                price: 1,
                specs: Specs::empty(kind),
            };
            for attr in attributes(kind) {
                assert!(
                    component.field(attr.field).is_some(),
                    "{} has no field {}",
                    kind,
                    attr.field
                );
            }
        }
    }

    #[test]
    fn test_policies() {
        assert_eq!(
            attribute(ComponentKind::Gpu, "price").unwrap().policy,
            Some(OrderingPolicy::LessIsBetter)
        );
        assert_eq!(
            attribute(ComponentKind::Psu, "wattage").unwrap().policy,
            Some(OrderingPolicy::MoreIsBetter)
        );
        assert_eq!(
            attribute(ComponentKind::Cpu, "tdp_watts").unwrap().policy,
            Some(OrderingPolicy::LessIsBetter)
        );
        assert_eq!(attribute(ComponentKind::Cpu, "socket").unwrap().policy, None);
    }
}
