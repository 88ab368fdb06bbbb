use std::sync::Arc;
use std::time::Instant;

use tera::Tera;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::profile::ProfileStore;

pub struct AppState {
    pub config: Config,
    pub start_time: Instant,
    pub profile: ProfileStore,
    pub templates: Tera,
}

impl AppState {
    pub fn new(config: Config) -> Result<Arc<Self>> {
        let profile = ProfileStore::new(&config.portfolio_file);
        let templates = Tera::new(&format!("{}/**/*.html", config.templates_dir))
            .map_err(|e| AppError::Internal(format!("Failed to load templates: {e}")))?;

        Ok(Arc::new(Self {
            config,
            start_time: Instant::now(),
            profile,
            templates,
        }))
    }

    pub fn uptime_secs(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }
}
