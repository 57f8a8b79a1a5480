use crate::catalog::Catalog;
use crate::data_config::DataConfig;
use crate::datasets::{LandRegistry, RENT_VALUE_COLUMN, RentDataset, RentKind};
use crate::error::LoadError;
use crate::harmonization::DistrictRules;
use rustc_hash::FxHashMap;
use std::time::Instant;
use tracing::info;

/// Every table the lookups read, built once and never mutated.
#[derive(Debug)]
pub struct DataContext {
    catalog: Catalog,
    rents: FxHashMap<RentKind, RentDataset>,
    registry: LandRegistry,
}

impl DataContext {
    pub fn new(catalog: Catalog, registry: LandRegistry) -> Self {
        Self {
            catalog,
            rents: FxHashMap::default(),
            registry,
        }
    }

    /// Registers a rent survey under its own kind, replacing any previous one.
    pub fn with_rent_table(mut self, dataset: RentDataset) -> Self {
        self.rents.insert(dataset.kind(), dataset);
        self
    }

    /// Loads all six files. Any structural problem aborts the whole load.
    pub fn load(config: &DataConfig) -> Result<Self, LoadError> {
        let started = Instant::now();
        let rules = DistrictRules::new(&config.district_cities)?;

        let catalog = Catalog::load(&config.catalog_path(), config.catalog_format)?;
        let registry = LandRegistry::load(&config.registry_path(), config.registry_format, &rules)?;

        let mut context = Self::new(catalog, registry);
        for kind in RentKind::ALL {
            let dataset = RentDataset::load(
                &config.rent_path(kind),
                config.rent_format,
                kind,
                RENT_VALUE_COLUMN,
            )?;
            context = context.with_rent_table(dataset);
        }

        info!(
            communes = context.catalog.len(),
            sales = context.registry.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "data context ready"
        );

        Ok(context)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rent_table(&self, kind: RentKind) -> Option<&RentDataset> {
        self.rents.get(&kind)
    }

    pub fn registry(&self) -> &LandRegistry {
        &self.registry
    }
}
