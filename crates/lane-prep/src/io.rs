//! JSON persistence for the pipeline configuration.

use crate::config::PipelineConfig;
use std::{fs, path::Path};

#[derive(thiserror::Error, Debug)]
pub enum ConfigIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl PipelineConfig {
    /// Load a JSON config from disk. Missing sections fall back to their
    /// documented defaults.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ConfigIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ConfigIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
