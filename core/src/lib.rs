pub mod aggregation;
pub mod catalog;
pub mod context;
pub mod data_config;
pub mod datasets;
pub mod engine;
pub mod error;
pub mod harmonization;
pub mod parsing;
pub mod string_normalization;

// Re-export commonly used items
pub use catalog::{AltitudeBand, Catalog, Commune, Coordinates};
pub use context::DataContext;
pub use data_config::{DataConfig, TableFormat};
pub use datasets::{LandRegistry, PropertyKind, RentDataset, RentKind, RentRow, SaleRow};
pub use engine::{Comparison, Estimate, HousingProfile, LookupEngine};
pub use error::LoadError;
pub use harmonization::{DistrictRules, harmonize};
pub use string_normalization::{CityKey, normalize_name};
