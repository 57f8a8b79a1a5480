use anyhow::{Context, Result, bail};
use citycompare_core::{DataConfig, DataContext, LookupEngine};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct CityCompareApp {
    pub config: DataConfig,
}

impl CityCompareApp {
    pub fn new(data_path: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_path {
            // User specified a custom data path
            Some(path) => {
                if !path.is_dir() {
                    bail!("Data path does not exist: {}", path.display());
                }
                path
            }
            None => default_data_dir()?,
        };

        let config = DataConfig::new(data_dir);

        // Verify data files exist
        let missing = config.missing_files();
        if !missing.is_empty() {
            let names = missing
                .iter()
                .map(|path| format!("  {}", path.display()))
                .collect::<Vec<_>>()
                .join("\n");
            bail!(
                "Data files not found in {}:\n{}",
                config.data_dir.display(),
                names
            );
        }

        Ok(Self { config })
    }

    pub fn load_engine(&self) -> Result<LookupEngine> {
        debug!(data_dir = %self.config.data_dir.display(), "loading data files");
        let context = DataContext::load(&self.config).with_context(|| {
            format!("Failed to load data from {}", self.config.data_dir.display())
        })?;
        Ok(LookupEngine::new(context))
    }
}

/// `./data` when present, otherwise `~/.citycompare/data`.
fn default_data_dir() -> Result<PathBuf> {
    let local = Path::new("data");
    if local.is_dir() {
        return Ok(local.to_path_buf());
    }

    let home_dir = dirs::home_dir().context("Could not find home directory")?;
    Ok(home_dir.join(".citycompare").join("data"))
}
