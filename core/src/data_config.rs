use crate::datasets::RentKind;
use crate::harmonization::DEFAULT_DISTRICT_CITIES;
use encoding_rs::Encoding;
use std::path::PathBuf;

/// How a delimited file is framed and encoded.
#[derive(Debug, Clone, Copy)]
pub struct TableFormat {
    pub delimiter: u8,
    pub encoding: &'static Encoding,
}

impl TableFormat {
    pub fn utf8(delimiter: u8) -> Self {
        Self {
            delimiter,
            encoding: encoding_rs::UTF_8,
        }
    }

    /// ISO-8859-1 text, decoded as its windows-1252 superset.
    pub fn latin1(delimiter: u8) -> Self {
        Self {
            delimiter,
            encoding: encoding_rs::WINDOWS_1252,
        }
    }
}

/// Locations and formats of the six source files
#[derive(Debug, Clone)]
pub struct DataConfig {
    pub data_dir: PathBuf,
    pub catalog_file: String,
    pub houses_rent_file: String,
    pub apartments_rent_file: String,
    pub small_apartments_rent_file: String,
    pub large_apartments_rent_file: String,
    pub registry_file: String,
    pub catalog_format: TableFormat,
    pub rent_format: TableFormat,
    pub registry_format: TableFormat,
    /// Cities whose numbered registry entries are rewritten to `City Ne`
    pub district_cities: Vec<String>,
}

impl DataConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join(&self.catalog_file)
    }

    pub fn rent_path(&self, kind: RentKind) -> PathBuf {
        let file = match kind {
            RentKind::Houses => &self.houses_rent_file,
            RentKind::Apartments => &self.apartments_rent_file,
            RentKind::SmallApartments => &self.small_apartments_rent_file,
            RentKind::LargeApartments => &self.large_apartments_rent_file,
        };
        self.data_dir.join(file)
    }

    pub fn registry_path(&self) -> PathBuf {
        self.data_dir.join(&self.registry_file)
    }

    /// Every configured file, catalog first.
    pub fn all_paths(&self) -> Vec<PathBuf> {
        let mut paths = vec![self.catalog_path()];
        paths.extend(RentKind::ALL.iter().map(|kind| self.rent_path(*kind)));
        paths.push(self.registry_path());
        paths
    }

    pub fn missing_files(&self) -> Vec<PathBuf> {
        self.all_paths()
            .into_iter()
            .filter(|path| !path.is_file())
            .collect()
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            catalog_file: "communes-france-2025.csv".to_string(),
            houses_rent_file: "m2 pour les maisons.csv".to_string(),
            apartments_rent_file: "m2 pour appart.csv".to_string(),
            small_apartments_rent_file: "m2 pour appart 1 a 2 pieces.csv".to_string(),
            large_apartments_rent_file: "m2 pour appart 3 piece et plus.csv".to_string(),
            registry_file: "ValeursFoncieres-2024.txt".to_string(),
            catalog_format: TableFormat::utf8(b','),
            rent_format: TableFormat::latin1(b';'),
            registry_format: TableFormat::utf8(b'|'),
            district_cities: DEFAULT_DISTRICT_CITIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}
