use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{CharGrid, GridMapper, MapRenderer, rasterize_road};
use crate::config::MapConfig;
use crate::error::Result;
use crate::road::RoadMap;

/// Metadata about a render pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderMetadata {
    /// Timestamp when the grid was rendered
    pub rendered_at: String,
    /// Number of roads processed
    pub roads_drawn: usize,
    /// Number of grid cells written (clipped writes excluded)
    pub cells_marked: u32,
    /// Render time in milliseconds
    pub render_time_ms: u64,
}

/// A rendered road map: the populated grid plus render metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedMap {
    pub grid: CharGrid,
    pub metadata: RenderMetadata,
}

impl RenderedMap {
    /// The display text, one line per grid row, top row first
    pub fn lines(&self) -> Vec<String> {
        self.grid.to_lines()
    }
}

/// Default renderer: dashed three-lane ASCII roads on a blank grid
#[derive(Debug, Clone, Default)]
pub struct AsciiRenderer;

impl AsciiRenderer {
    /// Create a new ASCII renderer
    pub fn new() -> Self {
        Self
    }
}

impl MapRenderer for AsciiRenderer {
    fn render(&self, map: &RoadMap, config: &MapConfig) -> Result<RenderedMap> {
        config.validate()?;
        let start_time = Instant::now();

        info!(
            "Rendering {} roads onto a {}x{} grid",
            map.len(),
            config.grid_size,
            config.grid_size
        );

        let mapper = GridMapper::new(config);
        let mut grid = CharGrid::new(config.grid_size);

        let mut cells_marked = 0;
        for road in map.iter() {
            let marked = rasterize_road(road, &mapper, &mut grid);
            debug!(
                "Drew road '{}' heading {}: {} cells",
                road.name(),
                road.heading().name(),
                marked
            );
            cells_marked += marked;
        }

        let render_time_ms = start_time.elapsed().as_millis() as u64;
        info!(
            "Render complete: {} cells marked across {} roads in {}ms",
            cells_marked,
            map.len(),
            render_time_ms
        );

        Ok(RenderedMap {
            grid,
            metadata: RenderMetadata {
                rendered_at: chrono::Utc::now().to_rfc3339(),
                roads_drawn: map.len(),
                cells_marked,
                render_time_ms,
            },
        })
    }
}
