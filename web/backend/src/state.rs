use citycompare_core::{DataConfig, DataContext, LoadError, LookupEngine};

pub struct AppState {
    pub engine: LookupEngine,
}

impl AppState {
    pub fn new(config: &DataConfig) -> Result<Self, LoadError> {
        let context = DataContext::load(config)?;
        Ok(Self::from_context(context))
    }

    pub fn from_context(context: DataContext) -> Self {
        Self {
            engine: LookupEngine::new(context),
        }
    }
}
