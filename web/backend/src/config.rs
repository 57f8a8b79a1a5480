use citycompare_core::DataConfig;
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Builds the data configuration from environment variables, falling back
/// to the published file names under `../../data`.
pub fn data_config_from_env() -> DataConfig {
    data_config_from(|name| std::env::var(name).ok())
}

/// Same as [`data_config_from_env`] with an explicit variable source.
pub fn data_config_from(var: impl Fn(&str) -> Option<String>) -> DataConfig {
    let mut config = DataConfig::new(var("DATA_DIR").unwrap_or_else(|| "../../data".to_string()));

    let files = [
        ("CATALOG_FILE", &mut config.catalog_file),
        ("HOUSES_RENT_FILE", &mut config.houses_rent_file),
        ("APARTMENTS_RENT_FILE", &mut config.apartments_rent_file),
        ("SMALL_APARTMENTS_RENT_FILE", &mut config.small_apartments_rent_file),
        ("LARGE_APARTMENTS_RENT_FILE", &mut config.large_apartments_rent_file),
        ("REGISTRY_FILE", &mut config.registry_file),
    ];
    for (name, file) in files {
        if let Some(value) = var(name).filter(|value| !value.trim().is_empty()) {
            *file = value;
        }
    }

    // Comma separated, e.g. "PARIS,MARSEILLE,LYON"
    if let Some(cities) = var("DISTRICT_CITIES") {
        config.district_cities = cities
            .split(',')
            .map(str::trim)
            .filter(|city| !city.is_empty())
            .map(str::to_string)
            .collect();
    }

    config
}

pub fn bind_addr_from_env() -> Result<SocketAddr, String> {
    let raw = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    raw.parse()
        .map_err(|e| format!("Invalid BIND_ADDR '{}': {}", raw, e))
}
