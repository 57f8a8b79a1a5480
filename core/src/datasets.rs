//! Rent survey tables and the land-value registry, keyed by normalized
//! commune name at load time.

use crate::data_config::TableFormat;
use crate::error::LoadError;
use crate::harmonization::DistrictRules;
use crate::parsing::{LoadReport, Table, field, parse_positive_number};
use crate::string_normalization::CityKey;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const RENT_LABEL_COLUMN: &str = "LIBGEO";
pub const RENT_VALUE_COLUMN: &str = "loypredm2";

const REGISTRY_COMMUNE_COLUMN: &str = "Commune";
const REGISTRY_TYPE_COLUMN: &str = "Type local";
const REGISTRY_SURFACE_COLUMN: &str = "Surface reelle bati";
const REGISTRY_VALUE_COLUMN: &str = "Valeur fonciere";

/// The four rent surveys, one per dwelling category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentKind {
    Houses,
    Apartments,
    SmallApartments,
    LargeApartments,
}

impl RentKind {
    pub const ALL: [RentKind; 4] = [
        RentKind::Houses,
        RentKind::Apartments,
        RentKind::SmallApartments,
        RentKind::LargeApartments,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RentKind::Houses => "houses",
            RentKind::Apartments => "apartments",
            RentKind::SmallApartments => "small_apartments",
            RentKind::LargeApartments => "large_apartments",
        }
    }

    /// Panel caption.
    pub fn label(&self) -> &'static str {
        match self {
            RentKind::Houses => "Maisons",
            RentKind::Apartments => "Appartements",
            RentKind::SmallApartments => "Appartements (1-2 pièces)",
            RentKind::LargeApartments => "Appartements (3+ pièces)",
        }
    }
}

impl From<&str> for RentKind {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "houses" | "maisons" => RentKind::Houses,
            "small_apartments" => RentKind::SmallApartments,
            "large_apartments" => RentKind::LargeApartments,
            _ => RentKind::Apartments,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentRow {
    pub label: String,
    pub key: CityKey,
    /// Predicted rent, euros per m² per month
    pub value: f64,
}

/// One rent survey.
#[derive(Debug)]
pub struct RentDataset {
    kind: RentKind,
    rows: FxHashMap<CityKey, Vec<RentRow>>,
    rejected: FxHashMap<CityKey, usize>,
    report: LoadReport,
}

impl RentDataset {
    pub fn load(
        path: &Path,
        format: TableFormat,
        kind: RentKind,
        value_column: &str,
    ) -> Result<Self, LoadError> {
        let table = Table::load(path, format)?;
        Self::from_table(&table, kind, value_column)
    }

    pub fn from_table(table: &Table, kind: RentKind, value_column: &str) -> Result<Self, LoadError> {
        let label_index = table.column(RENT_LABEL_COLUMN)?;
        let value_index = table.column(value_column)?;

        let mut rows: FxHashMap<CityKey, Vec<RentRow>> = FxHashMap::default();
        let mut rejected: FxHashMap<CityKey, usize> = FxHashMap::default();
        let mut report = LoadReport::default();

        for (line, record) in table.records() {
            let Some(label) = field(&record, label_index) else {
                report.reject(line, "empty locality label");
                continue;
            };
            let key = CityKey::new(label);
            if key.is_empty() {
                report.reject(line, "locality label without letters or digits");
                continue;
            }

            match field(&record, value_index).and_then(parse_positive_number) {
                Some(value) => {
                    rows.entry(key.clone()).or_default().push(RentRow {
                        label: label.to_string(),
                        key,
                        value,
                    });
                    report.accept();
                }
                None => {
                    *rejected.entry(key).or_default() += 1;
                    report.reject(line, "non-numeric rent");
                }
            }
        }

        report.log_summary(table.path());

        Ok(Self {
            kind,
            rows,
            rejected,
            report,
        })
    }

    pub fn kind(&self) -> RentKind {
        self.kind
    }

    pub fn rows_for_key(&self, key: &CityKey) -> &[RentRow] {
        self.rows.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Rows carrying this key that were dropped for an unusable value.
    pub fn rejected_for_key(&self, key: &CityKey) -> usize {
        self.rejected.get(key).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.report.accepted
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }
}

/// Residential categories kept from the registry's `Type local` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    Apartment,
    House,
}

impl PropertyKind {
    pub fn from_registry(label: &str) -> Option<Self> {
        match label {
            "Appartement" => Some(PropertyKind::Apartment),
            "Maison" => Some(PropertyKind::House),
            _ => None,
        }
    }

    pub fn registry_label(&self) -> &'static str {
        match self {
            PropertyKind::Apartment => "Appartement",
            PropertyKind::House => "Maison",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleRow {
    /// Harmonized commune label
    pub commune: String,
    pub key: CityKey,
    pub kind: PropertyKind,
    pub surface: f64,
    pub value: f64,
    pub price_per_area: f64,
}

/// Residential sales from the land-value registry.
#[derive(Debug)]
pub struct LandRegistry {
    rows: FxHashMap<CityKey, Vec<SaleRow>>,
    rejected: FxHashMap<(CityKey, PropertyKind), usize>,
    report: LoadReport,
}

impl LandRegistry {
    pub fn load(path: &Path, format: TableFormat, rules: &DistrictRules) -> Result<Self, LoadError> {
        let table = Table::load(path, format)?;
        Self::from_table(&table, rules)
    }

    pub fn from_table(table: &Table, rules: &DistrictRules) -> Result<Self, LoadError> {
        let commune_index = table.column(REGISTRY_COMMUNE_COLUMN)?;
        let type_index = table.column(REGISTRY_TYPE_COLUMN)?;
        let surface_index = table.column(REGISTRY_SURFACE_COLUMN)?;
        let value_index = table.column(REGISTRY_VALUE_COLUMN)?;

        let mut rows: FxHashMap<CityKey, Vec<SaleRow>> = FxHashMap::default();
        let mut rejected: FxHashMap<(CityKey, PropertyKind), usize> = FxHashMap::default();
        let mut report = LoadReport::default();

        for (line, record) in table.records() {
            let Some(kind) = field(&record, type_index).and_then(PropertyKind::from_registry) else {
                report.reject(line, "not a house or apartment");
                continue;
            };
            let (Some(raw_surface), Some(raw_value)) =
                (field(&record, surface_index), field(&record, value_index))
            else {
                report.reject(line, "missing surface or value");
                continue;
            };
            let Some(raw_commune) = field(&record, commune_index) else {
                report.reject(line, "empty commune label");
                continue;
            };

            let commune = rules.harmonize(raw_commune);
            let key = CityKey::new(&commune);
            if key.is_empty() {
                report.reject(line, "commune label without letters or digits");
                continue;
            }

            match (parse_positive_number(raw_surface), parse_positive_number(raw_value)) {
                (Some(surface), Some(value)) => {
                    rows.entry(key.clone()).or_default().push(SaleRow {
                        commune,
                        key,
                        kind,
                        surface,
                        value,
                        price_per_area: value / surface,
                    });
                    report.accept();
                }
                _ => {
                    *rejected.entry((key, kind)).or_default() += 1;
                    report.reject(line, "non-numeric or zero surface or value");
                }
            }
        }

        report.log_summary(table.path());

        Ok(Self {
            rows,
            rejected,
            report,
        })
    }

    pub fn rows_for_key(&self, key: &CityKey) -> &[SaleRow] {
        self.rows.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn rows_of_kind<'a>(
        &'a self,
        key: &CityKey,
        kind: PropertyKind,
    ) -> impl Iterator<Item = &'a SaleRow> + 'a {
        self.rows_for_key(key)
            .iter()
            .filter(move |row| row.kind == kind)
    }

    pub fn rejected_for(&self, key: &CityKey, kind: PropertyKind) -> usize {
        self.rejected
            .get(&(key.clone(), kind))
            .copied()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.report.accepted
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }
}
