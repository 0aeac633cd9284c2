use crate::config::MapConfig;

/// Converts world-space coordinates and lengths into grid-space cells
///
/// Pure and stateless beyond the two constants captured at construction.
/// Conversions truncate toward zero, matching character-cell display; they
/// never round. Results may fall outside the grid; clipping is the
/// rasterizer's and grid's responsibility, not the mapper's.
#[derive(Debug, Clone, Copy)]
pub struct GridMapper {
    scale: f64,
    half_grid: f64,
}

impl GridMapper {
    /// Create a mapper for the given configuration
    pub fn new(config: &MapConfig) -> Self {
        Self {
            scale: config.scale(),
            // Integer half first, so odd grid sizes center on the lower
            // middle cell
            half_grid: (config.grid_size / 2) as f64,
        }
    }

    /// Convert a world-space coordinate to a grid-space cell index.
    ///
    /// The half-grid offset centers world origin on the grid's middle cell.
    /// Callers mapping the vertical axis must negate first
    /// (`to_grid_point(-y)`): north is up, but row indices grow downward.
    pub fn to_grid_point(&self, world: f64) -> i32 {
        (world * self.scale + self.half_grid) as i32
    }

    /// Convert a world-space length to a grid-space extent.
    ///
    /// No centering offset; lengths are extents, not positions.
    pub fn to_grid_length(&self, world: f64) -> i32 {
        (world * self.scale) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_mapper() -> GridMapper {
        GridMapper::new(&MapConfig::default())
    }

    #[test]
    fn test_origin_maps_to_grid_center() {
        let mapper = default_mapper();
        assert_eq!(mapper.to_grid_point(0.0), 20);
    }

    #[test]
    fn test_points_within_world_stay_on_grid() {
        let mapper = default_mapper();
        for p in [-100.0, -50.0, -0.5, 0.0, 37.5, 50.0, 99.9] {
            let cell = mapper.to_grid_point(p);
            assert!((0..40).contains(&cell), "point {} mapped to {}", p, cell);
        }
    }

    #[test]
    fn test_point_conversion_truncates_toward_zero() {
        let mapper = default_mapper();
        // 17.4 * 0.2 + 20 = 23.48 -> 23, not 23.5 rounded
        assert_eq!(mapper.to_grid_point(17.4), 23);
        // -102.6 * 0.2 + 20 = -0.52 -> 0 under toward-zero truncation
        assert_eq!(mapper.to_grid_point(-102.6), 0);
    }

    #[test]
    fn test_length_conversion_has_no_offset() {
        let mapper = default_mapper();
        assert_eq!(mapper.to_grid_length(0.0), 0);
        assert_eq!(mapper.to_grid_length(200.0), 40);
        assert_eq!(mapper.to_grid_length(9.9), 1);
    }

    #[test]
    fn test_length_conversion_is_monotonic() {
        let mapper = default_mapper();
        let mut prev = mapper.to_grid_length(0.0);
        let mut len = 0.0;
        while len <= 250.0 {
            let cur = mapper.to_grid_length(len);
            assert!(cur >= prev, "length {} broke monotonicity", len);
            prev = cur;
            len += 0.7;
        }
    }

    #[test]
    fn test_odd_grid_size_centers_on_lower_middle_cell() {
        let config = MapConfig::default().with_grid_size(41);
        let mapper = GridMapper::new(&config);
        assert_eq!(mapper.to_grid_point(0.0), 20);
    }
}
