//! Catalog components
//!
//! A component is an immutable-by-identity catalog row: id, brand, name,
//! price in minor currency units, and one variant of technical specs. All
//! numeric attributes are unsigned, so the non-negativity invariant holds
//! by construction.

use crate::error::{Error, Result};
use crate::{ComponentId, ComponentKind, Value};
use serde::{Deserialize, Serialize};

/// CPU attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CpuSpecs {
    pub socket: String,
    pub cores: u32,
    pub threads: u32,
    pub l3_cache_mb: u32,
    pub base_clock_mhz: u32,
    pub boost_clock_mhz: u32,
    pub tdp_watts: u32,
    pub integrated_graphics: bool,
}

/// Graphics card attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GpuSpecs {
    pub chipset: String,
    pub vram_gb: u32,
    pub base_clock_mhz: u32,
    pub boost_clock_mhz: u32,
    pub tdp_watts: u32,
    pub pcie_generation: u32,
    pub length_mm: u32,
}

/// Memory kit attributes. Capacity is for the whole kit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RamSpecs {
    pub ram_type: String,
    pub speed_mhz: u32,
    pub capacity_gb: u32,
    pub modules: u32,
    pub cas_latency: u32,
}

/// M.2 drive attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct M2StorageSpecs {
    pub capacity_gb: u32,
    pub pcie_generation: u32,
    pub read_mbps: u32,
    pub write_mbps: u32,
}

/// SATA drive attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SataStorageSpecs {
    pub capacity_gb: u32,
    pub form_factor: String,
    pub read_mbps: u32,
    pub write_mbps: u32,
}

/// Power supply attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PsuSpecs {
    pub wattage: u32,
    pub efficiency: String,
    pub modular: String,
}

/// Motherboard attributes: slot counts per PCIe generation/width, memory
/// slots and USB port counts by speed class
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotherboardSpecs {
    pub socket: String,
    pub chipset: String,
    pub form_factor: String,
    pub ram_type: String,
    pub ram_slots: u32,
    /// Maximum supported memory; 0 means not published
    pub max_ram_gb: u32,
    pub m2_slots: u32,
    pub sata_ports: u32,
    pub pcie5_x16: u32,
    pub pcie4_x16: u32,
    pub pcie3_x16: u32,
    pub pcie4_x4: u32,
    pub pcie3_x4: u32,
    pub pcie3_x1: u32,
    pub usb2_ports: u32,
    pub usb3_gen1_ports: u32,
    pub usb3_gen2_ports: u32,
    pub usb4_ports: u32,
}

impl MotherboardSpecs {
    /// Full-length slots of any generation
    pub fn x16_slots(&self) -> u32 {
        self.pcie5_x16 + self.pcie4_x16 + self.pcie3_x16
    }
}

/// CPU cooler attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoolerSpecs {
    pub cooler_type: String,
    pub sockets: Vec<String>,
    pub tdp_rating_watts: u32,
    pub height_mm: u32,
}

impl CoolerSpecs {
    /// Whether the mounting kit covers the given socket
    pub fn supports_socket(&self, socket: &str) -> bool {
        let socket = socket.trim();
        self.sockets
            .iter()
            .any(|s| s.trim().eq_ignore_ascii_case(socket))
    }
}

/// Variant-specific technical attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Specs {
    Cpu(CpuSpecs),
    Gpu(GpuSpecs),
    Ram(RamSpecs),
    M2Storage(M2StorageSpecs),
    SataStorage(SataStorageSpecs),
    Psu(PsuSpecs),
    Motherboard(MotherboardSpecs),
    Cooler(CoolerSpecs),
}

impl Specs {
    /// Empty specs for a kind
    pub fn empty(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Cpu => Specs::Cpu(CpuSpecs::default()),
            ComponentKind::Gpu => Specs::Gpu(GpuSpecs::default()),
            ComponentKind::Ram => Specs::Ram(RamSpecs::default()),
            ComponentKind::M2Storage => Specs::M2Storage(M2StorageSpecs::default()),
            ComponentKind::SataStorage => Specs::SataStorage(SataStorageSpecs::default()),
            ComponentKind::Psu => Specs::Psu(PsuSpecs::default()),
            ComponentKind::Motherboard => Specs::Motherboard(MotherboardSpecs::default()),
            ComponentKind::Cooler => Specs::Cooler(CoolerSpecs::default()),
        }
    }

    /// The kind these specs describe
    pub fn kind(&self) -> ComponentKind {
        match self {
            Specs::Cpu(_) => ComponentKind::Cpu,
            Specs::Gpu(_) => ComponentKind::Gpu,
            Specs::Ram(_) => ComponentKind::Ram,
            Specs::M2Storage(_) => ComponentKind::M2Storage,
            Specs::SataStorage(_) => ComponentKind::SataStorage,
            Specs::Psu(_) => ComponentKind::Psu,
            Specs::Motherboard(_) => ComponentKind::Motherboard,
            Specs::Cooler(_) => ComponentKind::Cooler,
        }
    }

    /// Look up a technical attribute by field name
    pub fn field(&self, name: &str) -> Option<Value> {
        let value: Value = match self {
            Specs::Cpu(s) => match name {
                "socket" => (&s.socket).into(),
                "cores" => s.cores.into(),
                "threads" => s.threads.into(),
                "l3_cache_mb" => s.l3_cache_mb.into(),
                "base_clock_mhz" => s.base_clock_mhz.into(),
                "boost_clock_mhz" => s.boost_clock_mhz.into(),
                "tdp_watts" => s.tdp_watts.into(),
                "integrated_graphics" => s.integrated_graphics.into(),
                _ => return None,
            },
            Specs::Gpu(s) => match name {
                "chipset" => (&s.chipset).into(),
                "vram_gb" => s.vram_gb.into(),
                "base_clock_mhz" => s.base_clock_mhz.into(),
                "boost_clock_mhz" => s.boost_clock_mhz.into(),
                "tdp_watts" => s.tdp_watts.into(),
                "pcie_generation" => s.pcie_generation.into(),
                "length_mm" => s.length_mm.into(),
                _ => return None,
            },
            Specs::Ram(s) => match name {
                "ram_type" => (&s.ram_type).into(),
                "speed_mhz" => s.speed_mhz.into(),
                "capacity_gb" => s.capacity_gb.into(),
                "modules" => s.modules.into(),
                "cas_latency" => s.cas_latency.into(),
                _ => return None,
            },
            Specs::M2Storage(s) => match name {
                "capacity_gb" => s.capacity_gb.into(),
                "pcie_generation" => s.pcie_generation.into(),
                "read_mbps" => s.read_mbps.into(),
                "write_mbps" => s.write_mbps.into(),
                _ => return None,
            },
            Specs::SataStorage(s) => match name {
                "capacity_gb" => s.capacity_gb.into(),
                "form_factor" => (&s.form_factor).into(),
                "read_mbps" => s.read_mbps.into(),
                "write_mbps" => s.write_mbps.into(),
                _ => return None,
            },
            Specs::Psu(s) => match name {
                "wattage" => s.wattage.into(),
                "efficiency" => (&s.efficiency).into(),
                "modular" => (&s.modular).into(),
                _ => return None,
            },
            Specs::Motherboard(s) => match name {
                "socket" => (&s.socket).into(),
                "chipset" => (&s.chipset).into(),
                "form_factor" => (&s.form_factor).into(),
                "ram_type" => (&s.ram_type).into(),
                "ram_slots" => s.ram_slots.into(),
                "max_ram_gb" => s.max_ram_gb.into(),
                "m2_slots" => s.m2_slots.into(),
                "sata_ports" => s.sata_ports.into(),
                "pcie5_x16" => s.pcie5_x16.into(),
                "pcie4_x16" => s.pcie4_x16.into(),
                "pcie3_x16" => s.pcie3_x16.into(),
                "pcie4_x4" => s.pcie4_x4.into(),
                "pcie3_x4" => s.pcie3_x4.into(),
                "pcie3_x1" => s.pcie3_x1.into(),
                "usb2_ports" => s.usb2_ports.into(),
                "usb3_gen1_ports" => s.usb3_gen1_ports.into(),
                "usb3_gen2_ports" => s.usb3_gen2_ports.into(),
                "usb4_ports" => s.usb4_ports.into(),
                _ => return None,
            },
            Specs::Cooler(s) => match name {
                "cooler_type" => (&s.cooler_type).into(),
                "sockets" => s.sockets.clone().into(),
                "tdp_rating_watts" => s.tdp_rating_watts.into(),
                "height_mm" => s.height_mm.into(),
                _ => return None,
            },
        };
        Some(value)
    }

    fn validate(&self) -> Result<()> {
        fn required(field: &str, value: &str) -> Result<()> {
            if value.trim().is_empty() {
                return Err(Error::validation(field, "must not be empty"));
            }
            Ok(())
        }

        match self {
            Specs::Cpu(s) => required("socket", &s.socket),
            Specs::Ram(s) => required("ram_type", &s.ram_type),
            Specs::Motherboard(s) => {
                required("socket", &s.socket)?;
                required("ram_type", &s.ram_type)
            }
            _ => Ok(()),
        }
    }
}

/// A catalog component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: ComponentId,
    pub brand: String,
    pub name: String,
    /// Price in minor currency units
    pub price: u64,
    pub specs: Specs,
}

impl Component {
    /// The slot this component fills
    pub fn kind(&self) -> ComponentKind {
        self.specs.kind()
    }

    /// "Brand Name" for display
    pub fn display_name(&self) -> String {
        if self.brand.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.brand, self.name)
        }
    }

    /// Look up any attribute by field name, including the common columns
    pub fn field(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(self.id.raw().into()),
            "brand" => Some((&self.brand).into()),
            "name" => Some((&self.name).into()),
            "price" => Some(self.price.into()),
            _ => self.specs.field(name),
        }
    }

    /// Check the fields the catalog forms require
    pub fn validate(&self) -> Result<()> {
        self.validate_with_brand(true)
    }

    fn validate_with_brand(&self, brand_required: bool) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::validation("name", "must not be empty"));
        }
        if brand_required && self.brand.trim().is_empty() {
            return Err(Error::validation("brand", "must not be empty"));
        }
        self.specs.validate()
    }

    pub fn as_cpu(&self) -> Option<&CpuSpecs> {
        match &self.specs {
            Specs::Cpu(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_gpu(&self) -> Option<&GpuSpecs> {
        match &self.specs {
            Specs::Gpu(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_ram(&self) -> Option<&RamSpecs> {
        match &self.specs {
            Specs::Ram(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_psu(&self) -> Option<&PsuSpecs> {
        match &self.specs {
            Specs::Psu(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_motherboard(&self) -> Option<&MotherboardSpecs> {
        match &self.specs {
            Specs::Motherboard(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_cooler(&self) -> Option<&CoolerSpecs> {
        match &self.specs {
            Specs::Cooler(s) => Some(s),
            _ => None,
        }
    }

    /// Rated power draw for the PSU budget; zero for non-consumers
    pub fn power_draw_watts(&self) -> u32 {
        match &self.specs {
            Specs::Cpu(s) => s.tdp_watts,
            Specs::Gpu(s) => s.tdp_watts,
            _ => 0,
        }
    }
}

/// A component that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewComponent {
    pub brand: String,
    pub name: String,
    #[serde(default)]
    pub price: u64,
    pub specs: Specs,
}

impl NewComponent {
    /// Create a new component draft
    pub fn new(brand: impl Into<String>, name: impl Into<String>, price: u64, specs: Specs) -> Self {
        Self {
            brand: brand.into(),
            name: name.into(),
            price,
            specs,
        }
    }

    /// Validate and attach an id
    pub fn into_component(self, id: ComponentId) -> Result<Component> {
        let component = Component {
            id,
            brand: self.brand,
            name: self.name,
            price: self.price,
            specs: self.specs,
        };
        component.validate()?;
        Ok(component)
    }
}

/// A partial edit from a catalog form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentChanges {
    pub brand: Option<String>,
    pub name: Option<String>,
    pub price: Option<u64>,
    pub specs: Option<Specs>,
}

impl ComponentChanges {
    /// Apply the edit, rejecting a change of kind or an invalid result.
    ///
    /// Rows stored before brands were tracked have an empty brand; they
    /// stay editable until a brand is supplied. The component is left
    /// untouched when the edit is rejected.
    pub fn apply(self, component: &mut Component) -> Result<()> {
        let brand_required = self.brand.is_some() || !component.brand.trim().is_empty();
        let mut edited = component.clone();
        if let Some(brand) = self.brand {
            edited.brand = brand;
        }
        if let Some(name) = self.name {
            edited.name = name;
        }
        if let Some(price) = self.price {
            edited.price = price;
        }
        if let Some(specs) = self.specs {
            if specs.kind() != component.kind() {
                return Err(Error::KindMismatch {
                    expected: component.kind(),
                    got: specs.kind(),
                });
            }
            edited.specs = specs;
        }
        edited.validate_with_brand(brand_required)?;
        *component = edited;
        Ok(())
    }
}
