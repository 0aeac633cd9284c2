use tracing::trace;

use super::{CharGrid, GridMapper};
use crate::road::Road;

/// Mark used for roads running along the vertical axis
const VERTICAL_MARK: char = '|';
/// Mark used for roads running along the horizontal axis
const HORIZONTAL_MARK: char = '-';

/// Rasterize one road onto the grid, returning the number of cells written.
///
/// The road becomes three parallel lanes (center plus one cell either side)
/// spaced along its grid-space extent. Only even offsets along the extent
/// are marked, giving the dashed look. The extent runs over the half-open
/// range `[-half_len, half_len)`, so a road with an odd grid length draws
/// one cell short on the high side; that asymmetry is part of the expected
/// output and is kept.
///
/// Never fails: the primary axis is range-checked before each slice of
/// lanes, and the orthogonal lane offsets rely on the grid's per-cell
/// clipping, so off-grid geometry is silently dropped.
pub fn rasterize_road(road: &Road, mapper: &GridMapper, grid: &mut CharGrid) -> u32 {
    let cx = mapper.to_grid_point(road.x());
    // North is up on screen, row indices grow downward
    let cy = mapper.to_grid_point(-road.y());
    let half_len = mapper.to_grid_length(road.length()) / 2;
    let size = grid.size() as i32;

    trace!(
        road = road.name(),
        cx, cy, half_len, "rasterizing road"
    );

    let mut cells_marked = 0;
    if road.heading().is_vertical() {
        for i in -half_len..half_len {
            if i % 2 != 0 {
                continue;
            }
            let y = cy + i;
            if y < 0 || y >= size {
                continue;
            }
            for offset in [-1, 0, 1] {
                if grid.set(y, cx + offset, VERTICAL_MARK) {
                    cells_marked += 1;
                }
            }
        }
    } else {
        for i in -half_len..half_len {
            if i % 2 != 0 {
                continue;
            }
            let x = cx + i;
            if x < 0 || x >= size {
                continue;
            }
            for offset in [-1, 0, 1] {
                if grid.set(cy + offset, x, HORIZONTAL_MARK) {
                    cells_marked += 1;
                }
            }
        }
    }

    cells_marked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapConfig;
    use crate::road::{Heading, RoadFactory};

    fn world_road(name: &str, x: f64, y: f64, length: f64, heading: Heading) -> Road {
        RoadFactory::with_unit_scale(1.0)
            .build_road(name, x, y, length, heading)
            .unwrap()
    }

    fn render_one(road: &Road) -> CharGrid {
        let config = MapConfig::default();
        let mapper = GridMapper::new(&config);
        let mut grid = CharGrid::new(config.grid_size);
        rasterize_road(road, &mapper, &mut grid);
        grid
    }

    #[test]
    fn test_zero_length_road_draws_nothing() {
        let road = world_road("Stub", 0.0, 0.0, 0.0, Heading::North);
        let config = MapConfig::default();
        let mapper = GridMapper::new(&config);
        let mut grid = CharGrid::new(config.grid_size);

        assert_eq!(rasterize_road(&road, &mapper, &mut grid), 0);
        for line in grid.to_lines() {
            assert_eq!(line.trim(), "");
        }
    }

    #[test]
    fn test_north_road_draws_dashed_vertical_lanes() {
        let road = world_road("Uptown", 0.0, 0.0, 200.0, Heading::North);
        let grid = render_one(&road);

        // Center column is 20; extent covers i in [-20, 20) around row 20
        for i in -20i32..20 {
            let row = 20 + i;
            for col in [19, 20, 21] {
                let expected = if i % 2 == 0 { '|' } else { ' ' };
                assert_eq!(
                    grid.get(row, col),
                    Some(expected),
                    "row {} col {}",
                    row,
                    col
                );
            }
        }

        // Nothing outside the three lanes
        for row in 0..40 {
            for col in (0..19).chain(22..40) {
                assert_eq!(grid.get(row, col), Some(' '), "row {} col {}", row, col);
            }
        }
    }

    #[test]
    fn test_east_road_draws_dashed_horizontal_lanes() {
        let road = world_road("Crosstown", 0.0, 0.0, 200.0, Heading::East);
        let grid = render_one(&road);

        for i in -20i32..20 {
            let col = 20 + i;
            for row in [19, 20, 21] {
                let expected = if i % 2 == 0 { '-' } else { ' ' };
                assert_eq!(
                    grid.get(row, col),
                    Some(expected),
                    "row {} col {}",
                    row,
                    col
                );
            }
        }
    }

    #[test]
    fn test_south_matches_north_and_west_matches_east() {
        let north = render_one(&world_road("N", 10.0, 5.0, 60.0, Heading::North));
        let south = render_one(&world_road("S", 10.0, 5.0, 60.0, Heading::South));
        assert_eq!(north.to_lines(), south.to_lines());

        let east = render_one(&world_road("E", 10.0, 5.0, 60.0, Heading::East));
        let west = render_one(&world_road("W", 10.0, 5.0, 60.0, Heading::West));
        assert_eq!(east.to_lines(), west.to_lines());
    }

    #[test]
    fn test_vertical_axis_is_flipped() {
        // Positive world Y is north, which is a smaller row index
        let high = render_one(&world_road("High", 0.0, 50.0, 20.0, Heading::East));
        let low = render_one(&world_road("Low", 0.0, -50.0, 20.0, Heading::East));

        // y=50 -> row 10, y=-50 -> row 30 (center lane)
        assert_eq!(high.get(10, 20), Some('-'));
        assert_eq!(low.get(30, 20), Some('-'));
    }

    #[test]
    fn test_half_open_extent_is_asymmetric() {
        // Length 40 -> grid length 8, half 4: extent i in [-4, 4) marks even
        // offsets -4, -2, 0, 2. The segment reaches 4 cells above center but
        // only 2 below; the high end of the half-open range is never drawn.
        let road = world_road("Short", 0.0, 0.0, 40.0, Heading::North);
        let grid = render_one(&road);

        assert_eq!(grid.get(16, 20), Some('|')); // i = -4
        assert_eq!(grid.get(18, 20), Some('|')); // i = -2
        assert_eq!(grid.get(22, 20), Some('|')); // i = 2
        assert_eq!(grid.get(24, 20), Some(' ')); // i = 4 is outside [-4, 4)
        assert_eq!(grid.get(15, 20), Some(' ')); // below the extent
    }

    #[test]
    fn test_offgrid_road_clips_silently() {
        // Centered far east of the world: cx maps past the right edge
        let road = world_road("Remote", 500.0, 0.0, 200.0, Heading::North);
        let config = MapConfig::default();
        let mapper = GridMapper::new(&config);
        let mut grid = CharGrid::new(config.grid_size);

        let marked = rasterize_road(&road, &mapper, &mut grid);
        assert_eq!(marked, 0);
        for line in grid.to_lines() {
            assert_eq!(line.trim(), "");
        }
    }

    #[test]
    fn test_edge_road_keeps_partial_lanes() {
        // Vertical road hugging the left edge: cx = 0, so the west lane
        // (col -1) clips while the center and east lanes survive
        let road = world_road("Westside", -100.0, 0.0, 40.0, Heading::North);
        let grid = render_one(&road);

        assert_eq!(grid.get(20, 0), Some('|'));
        assert_eq!(grid.get(20, 1), Some('|'));
        // i = -4 even -> row 16 marked, i = -3 odd -> row 17 blank
        assert_eq!(grid.get(16, 0), Some('|'));
        assert_eq!(grid.get(17, 0), Some(' '));
    }
}
