mod builder;

pub use builder::*;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoadMapError};
use crate::units::{DEFAULT_GRID_SIZE, DEFAULT_WORLD_SPAN};

/// Configuration for mapping world space onto the character grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Grid dimension (cells per side of the square display grid)
    pub grid_size: usize,
    /// World span covered by the grid, in world units
    pub world_span: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            world_span: DEFAULT_WORLD_SPAN,
        }
    }
}

impl MapConfig {
    /// Set the grid dimension
    pub fn with_grid_size(mut self, size: usize) -> Self {
        self.grid_size = size;
        self
    }

    /// Set the world span in world units
    pub fn with_world_span(mut self, span: f64) -> Self {
        self.world_span = span;
        self
    }

    /// Ratio converting world lengths to grid lengths (grid_size / world_span).
    ///
    /// Fixed for the lifetime of the config.
    pub fn scale(&self) -> f64 {
        self.grid_size as f64 / self.world_span
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(RoadMapError::Config(
                "grid_size must be greater than zero".to_string(),
            ));
        }
        if !self.world_span.is_finite() || self.world_span <= 0.0 {
            return Err(RoadMapError::Config(format!(
                "world_span must be a positive finite number, got {}",
                self.world_span
            )));
        }
        Ok(())
    }

    /// Create a builder for more complex configuration
    pub fn builder() -> MapConfigBuilder {
        MapConfigBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MapConfig::default();
        assert_eq!(config.grid_size, 40);
        assert_eq!(config.world_span, 200.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_scale() {
        let config = MapConfig::default();
        assert_eq!(config.scale(), 0.2);

        let config = MapConfig::default().with_grid_size(100).with_world_span(50.0);
        assert_eq!(config.scale(), 2.0);
    }

    #[test]
    fn test_validation_rejects_degenerate_configs() {
        let config = MapConfig::default().with_grid_size(0);
        assert!(matches!(config.validate(), Err(RoadMapError::Config(_))));

        let config = MapConfig::default().with_world_span(0.0);
        assert!(matches!(config.validate(), Err(RoadMapError::Config(_))));

        let config = MapConfig::default().with_world_span(-200.0);
        assert!(matches!(config.validate(), Err(RoadMapError::Config(_))));

        let config = MapConfig::default().with_world_span(f64::NAN);
        assert!(matches!(config.validate(), Err(RoadMapError::Config(_))));
    }
}
