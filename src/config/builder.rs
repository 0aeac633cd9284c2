use super::MapConfig;
use crate::error::Result;

/// Builder for creating map configurations with a fluent API
#[derive(Debug, Clone)]
pub struct MapConfigBuilder {
    grid_size: Option<usize>,
    world_span: Option<f64>,
}

impl MapConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            grid_size: None,
            world_span: None,
        }
    }

    /// Set the grid dimension (cells per side)
    pub fn grid_size(mut self, size: usize) -> Self {
        self.grid_size = Some(size);
        self
    }

    /// Set the world span in world units
    pub fn world_span(mut self, span: f64) -> Self {
        self.world_span = Some(span);
        self
    }

    /// Build and validate the final configuration
    pub fn build(self) -> Result<MapConfig> {
        let defaults = MapConfig::default();
        let config = MapConfig {
            grid_size: self.grid_size.unwrap_or(defaults.grid_size),
            world_span: self.world_span.unwrap_or(defaults.world_span),
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for MapConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
