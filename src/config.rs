//! Startup configuration, optionally read from a TOML file.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::grid::GridConfig;

/// Upper limit for `max_dimension`; keeps a full grid at 256k cells.
pub const DIMENSION_LIMIT: usize = 512;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SketchpadConfig {
    pub rows: usize,
    pub columns: usize,
    pub container_size: f32,
    pub border_width: f32,
    /// Smallest value the rows/columns inputs accept.
    pub min_dimension: usize,
    /// Largest value the rows/columns inputs accept.
    pub max_dimension: usize,
    pub dark_mode: bool,
}

impl Default for SketchpadConfig {
    fn default() -> Self {
        Self {
            rows: 16,
            columns: 16,
            container_size: 400.0,
            border_width: 2.0,
            min_dimension: 1,
            max_dimension: 100,
            dark_mode: false,
        }
    }
}

impl SketchpadConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(text)?;
        config.validate()?;
        config.rows = config.clamp_dimension(config.rows);
        config.columns = config.clamp_dimension(config.columns);
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_dimension == 0
            || self.min_dimension > self.max_dimension
            || self.max_dimension > DIMENSION_LIMIT
        {
            return Err(Error::InvalidBounds {
                min: self.min_dimension,
                max: self.max_dimension,
            });
        }
        // Geometry only; rows/columns get clamped into bounds.
        GridConfig {
            rows: 1,
            columns: 1,
            container_size: self.container_size,
            border_width: self.border_width,
        }
        .validate()
    }

    pub fn clamp_dimension(&self, value: usize) -> usize {
        value.clamp(self.min_dimension, self.max_dimension)
    }

    pub fn grid_config(&self) -> Result<GridConfig> {
        GridConfig::new(
            self.rows,
            self.columns,
            self.container_size,
            self.border_width,
        )
    }
}
