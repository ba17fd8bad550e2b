//! Applies a loaded catalog to a store

use crate::error::Result;
use crate::loader::Catalog;
use rigbench_core::{BuildChanges, Component};
use rigbench_db::Store;
use std::collections::HashMap;
use tracing::info;

/// What a seed run created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub components: usize,
    pub links: usize,
    pub groups: usize,
    pub builds: usize,
}

/// Writes catalog definitions into a store
pub struct Seeder<'a> {
    store: &'a Store,
}

impl<'a> Seeder<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Create every component, link, group and build of the catalog.
    ///
    /// Rows are committed one operation at a time; a failure part way
    /// leaves what was created before it.
    pub fn seed(&self, catalog: &Catalog) -> Result<SeedReport> {
        let mut report = SeedReport::default();
        let mut created: HashMap<&str, Component> = HashMap::new();

        for (name, def) in &catalog.components {
            let component = self.store.create_component(def.to_new_component())?;
            report.components += 1;

            for link in &def.links {
                let stored = self.store.add_retailer_link_to_component(
                    component.kind(),
                    component.id,
                    &link.retailer,
                    &link.url,
                )?;
                if let Some(price) = link.price {
                    self.store.record_price(stored.id, price)?;
                }
                report.links += 1;
            }
            created.insert(name.as_str(), component);
        }

        for group in &catalog.groups {
            let group_id = self.store.add_build_group(&group.name)?;
            report.groups += 1;

            for build in &group.builds {
                let created_build = self.store.create_or_copy_build(group_id, None)?;
                self.store
                    .update_build(created_build.id, BuildChanges::rename(build.name.clone()))?;
                for name in &build.components {
                    if let Some(component) = created.get(name.trim()) {
                        self.store.assign_component_to_build(
                            created_build.id,
                            None,
                            component.id,
                            component.kind(),
                        )?;
                    }
                }
                report.builds += 1;
            }
        }

        info!(
            components = report.components,
            links = report.links,
            groups = report.groups,
            builds = report.builds,
            "seeded catalog"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::Loader;
    use rigbench_core::{ComponentKind, Verdict};

    const CATALOG: &str = r#"
    (
        components: [
            (
                brand: "AMD",
                name: "Ryzen 5 7600",
                price: 19900,
                specs: Cpu((socket: "AM5", cores: 6, threads: 12, tdp_watts: 65)),
                links: [(url: "https://www.memoryexpress.com/Products/MX00123", price: Some(19499))],
            ),
            (
                brand: "MSI",
                name: "B550 Tomahawk",
                price: 15999,
                specs: Motherboard((socket: "AM4", ram_type: "DDR4", ram_slots: 4)),
            ),
            (
                brand: "Gigabyte",
                name: "B650 Aorus Elite",
                price: 22999,
                specs: Motherboard((socket: "AM5", ram_type: "DDR5", ram_slots: 4)),
            ),
        ],
        groups: [
            (name: "Den PC", builds: [(name: "Starter", components: ["Ryzen 5 7600"])]),
        ],
    )
    "#;

    #[test]
    fn test_seed_catalog() {
        let mut loader = Loader::new();
        loader.load_catalog_str(CATALOG).unwrap();
        let catalog = loader.finish();

        let store = Store::in_memory().unwrap();
        let report = Seeder::new(&store).seed(&catalog).unwrap();
        assert_eq!(
            report,
            SeedReport {
                components: 3,
                links: 1,
                groups: 1,
                builds: 1
            }
        );

        let build = store.builds_where(&[]).unwrap().remove(0);
        assert_eq!(build.name, "Starter");
        assert_eq!(build.price, 19900);

        let cpu = store
            .components_where(ComponentKind::Cpu, &[], None)
            .unwrap()
            .remove(0);
        let links = store.retailer_links(cpu.id).unwrap();
        assert_eq!(links[0].retailer, "Memory Express");
        assert_eq!(links[0].current_price(), Some(19499));

        let table = store
            .partition_for_build(Some(build.id), ComponentKind::Motherboard, &Default::default())
            .unwrap();
        assert_eq!(table.bucket(Verdict::Compatible).len(), 1);
        assert_eq!(table.bucket(Verdict::Incompatible).len(), 1);
    }
}
