use crate::data_config::TableFormat;
use crate::error::LoadError;
use crate::parsing::{LoadReport, Table, field, parse_locale_number};
use crate::string_normalization::{CityKey, normalize_name};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use std::path::Path;
use tracing::warn;

const NAME_COLUMN: &str = "nom_standard";
const REGION_COLUMN: &str = "reg_nom";
const DEPARTMENT_COLUMN: &str = "dep_nom";
const LATITUDE_COLUMN: &str = "latitude_centre";
const LONGITUDE_COLUMN: &str = "longitude_centre";

const URBAN_CLASSIFICATION_COLUMNS: [&str; 2] = ["unite_urbaine", "grille_densite_texte"];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AltitudeBand {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// One row of the reference commune table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Commune {
    /// Authoritative spelling shown to the user
    pub name: String,
    pub key: CityKey,
    pub code_insee: Option<String>,
    pub region: String,
    pub department: String,
    pub department_code: Option<String>,
    pub centroid: Option<Coordinates>,
    pub wikipedia_url: Option<String>,
    pub population: Option<u64>,
    pub area_km2: Option<f64>,
    pub density: Option<f64>,
    pub altitude: Option<AltitudeBand>,
    pub urban_classification: Option<String>,
}

struct Columns {
    name: usize,
    region: usize,
    department: usize,
    latitude: usize,
    longitude: usize,
    code_insee: Option<usize>,
    department_code: Option<usize>,
    wikipedia_url: Option<usize>,
    population: Option<usize>,
    area_km2: Option<usize>,
    density: Option<usize>,
    altitude_min: Option<usize>,
    altitude_max: Option<usize>,
    urban_classification: Option<usize>,
}

impl Columns {
    fn resolve(table: &Table) -> Result<Self, LoadError> {
        Ok(Self {
            name: table.column(NAME_COLUMN)?,
            region: table.column(REGION_COLUMN)?,
            department: table.column(DEPARTMENT_COLUMN)?,
            latitude: table.column(LATITUDE_COLUMN)?,
            longitude: table.column(LONGITUDE_COLUMN)?,
            code_insee: table.optional_column("code_insee"),
            department_code: table.optional_column("dep_code"),
            wikipedia_url: table.optional_column("url_wikipedia"),
            population: table.optional_column("population"),
            area_km2: table.optional_column("superficie_km2"),
            density: table.optional_column("densite"),
            altitude_min: table.optional_column("altitude_minimale"),
            altitude_max: table.optional_column("altitude_maximale"),
            urban_classification: URBAN_CLASSIFICATION_COLUMNS
                .iter()
                .find_map(|column| table.optional_column(column)),
        })
    }
}

/// The reference commune table, indexed by normalized name.
#[derive(Debug)]
pub struct Catalog {
    communes: Vec<Commune>,
    index: FxHashMap<CityKey, usize>,
    report: LoadReport,
}

impl Catalog {
    pub fn load(path: &Path, format: TableFormat) -> Result<Self, LoadError> {
        let table = Table::load(path, format)?;
        Self::from_table(&table)
    }

    pub fn from_table(table: &Table) -> Result<Self, LoadError> {
        let columns = Columns::resolve(table)?;
        let mut communes = Vec::new();
        let mut index = FxHashMap::default();
        let mut report = LoadReport::default();
        let mut duplicates = 0usize;

        for (line, record) in table.records() {
            let Some(name) = field(&record, columns.name) else {
                report.reject(line, "empty commune name");
                continue;
            };
            let key = CityKey::new(name);
            if key.is_empty() {
                report.reject(line, "commune name without letters or digits");
                continue;
            }
            let (Some(region), Some(department)) = (
                field(&record, columns.region),
                field(&record, columns.department),
            ) else {
                report.reject(line, "missing region or department");
                continue;
            };

            let optional_text =
                |column: Option<usize>| column.and_then(|i| field(&record, i)).map(str::to_string);
            let optional_number =
                |column: Option<usize>| column.and_then(|i| field(&record, i)).and_then(parse_locale_number);

            let centroid = match (
                field(&record, columns.latitude).and_then(parse_locale_number),
                field(&record, columns.longitude).and_then(parse_locale_number),
            ) {
                (Some(latitude), Some(longitude)) => Some(Coordinates { latitude, longitude }),
                _ => None,
            };

            let altitude = match (
                optional_number(columns.altitude_min),
                optional_number(columns.altitude_max),
            ) {
                (None, None) => None,
                (min, max) => Some(AltitudeBand { min, max }),
            };

            let commune = Commune {
                name: name.to_string(),
                key: key.clone(),
                code_insee: optional_text(columns.code_insee),
                region: region.to_string(),
                department: department.to_string(),
                department_code: optional_text(columns.department_code),
                centroid,
                wikipedia_url: optional_text(columns.wikipedia_url),
                population: optional_number(columns.population)
                    .filter(|value| *value >= 0.0)
                    .map(|value| value.round() as u64),
                area_km2: optional_number(columns.area_km2),
                density: optional_number(columns.density),
                altitude,
                urban_classification: optional_text(columns.urban_classification),
            };

            if index.contains_key(&key) {
                duplicates += 1;
            } else {
                index.insert(key, communes.len());
            }
            communes.push(commune);
            report.accept();
        }

        report.log_summary(table.path());
        if duplicates > 0 {
            warn!(
                path = %table.path().display(),
                duplicates,
                "communes share a normalized name; the first occurrence answers lookups"
            );
        }

        Ok(Self {
            communes,
            index,
            report,
        })
    }

    pub fn find_by_key(&self, key: &CityKey) -> Option<&Commune> {
        self.index.get(key).map(|&position| &self.communes[position])
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Commune> {
        self.find_by_key(&CityKey::new(name))
    }

    /// Region names in order of first appearance.
    pub fn regions(&self) -> Vec<&str> {
        unique_in_order(self.communes.iter().map(|commune| commune.region.as_str()))
    }

    pub fn departments_of(&self, region: &str) -> Vec<&str> {
        unique_in_order(
            self.communes
                .iter()
                .filter(|commune| commune.region == region)
                .map(|commune| commune.department.as_str()),
        )
    }

    pub fn cities_of(&self, department: &str) -> Vec<&str> {
        unique_in_order(
            self.communes
                .iter()
                .filter(|commune| commune.department == department)
                .map(|commune| commune.name.as_str()),
        )
    }

    /// Communes whose normalized name contains the query, prefix matches
    /// first, then shorter names.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Commune> {
        let normalized_query = normalize_name(query);
        if normalized_query.is_empty() {
            return vec![];
        }

        let mut results: Vec<&Commune> = self
            .communes
            .iter()
            .filter(|commune| commune.key.as_str().contains(&normalized_query))
            .collect();

        results.sort_by(|a, b| {
            let a_starts = a.key.as_str().starts_with(&normalized_query);
            let b_starts = b.key.as_str().starts_with(&normalized_query);
            b_starts
                .cmp(&a_starts)
                .then_with(|| a.name.len().cmp(&b.name.len()))
                .then_with(|| a.name.cmp(&b.name))
        });

        results.truncate(limit);
        results
    }

    pub fn communes(&self) -> &[Commune] {
        &self.communes
    }

    pub fn keys(&self) -> impl Iterator<Item = &CityKey> {
        self.index.keys()
    }

    /// Number of distinct normalized names.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }
}

fn unique_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = FxHashSet::default();
    values.filter(|value| seen.insert(*value)).collect()
}
