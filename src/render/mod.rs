mod char_grid;
mod mapper;
mod rasterizer;
mod renderer;


pub use char_grid::*;
pub use mapper::*;
pub use rasterizer::*;
pub use renderer::*;

use crate::config::MapConfig;
use crate::error::Result;
use crate::road::RoadMap;

/// Trait for rendering a road map into displayable text
pub trait MapRenderer {
    /// Render every road in the map onto a fresh grid
    fn render(&self, map: &RoadMap, config: &MapConfig) -> Result<RenderedMap>;
}
