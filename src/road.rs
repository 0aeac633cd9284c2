use serde::{Deserialize, Serialize};

use crate::error::{Result, RoadMapError};
use crate::units::UnitSystem;

/// Cardinal heading of a road
///
/// The four values collapse to two axis-aligned draw behaviors: North/South
/// roads run along the vertical grid axis, East/West along the horizontal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    North,
    South,
    East,
    West,
}

impl Heading {
    /// Get a human-readable name for this heading
    pub fn name(&self) -> &str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }

    /// Whether this heading runs along the vertical grid axis
    pub fn is_vertical(&self) -> bool {
        matches!(self, Self::North | Self::South)
    }
}

/// A straight road segment in world space
///
/// Immutable once constructed: position and length are in world units,
/// the heading selects the axis the segment is drawn along. The position
/// is the segment's center point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Road {
    name: String,
    x: f64,
    y: f64,
    length: f64,
    heading: Heading,
}

impl Road {
    /// The road's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// World-space X coordinate of the road's center
    pub fn x(&self) -> f64 {
        self.x
    }

    /// World-space Y coordinate of the road's center
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Length in world units
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Cardinal heading
    pub fn heading(&self) -> Heading {
        self.heading
    }
}

/// Factory for building validated roads from caller-unit geometry
///
/// Caller positions and lengths are multiplied by a linear factor to obtain
/// world units; the factor comes from a [`UnitSystem`] or is given directly.
/// The factory also keeps a running count of the roads it has built.
#[derive(Debug, Clone)]
pub struct RoadFactory {
    unit_scale: f64,
    roads_built: usize,
}

impl RoadFactory {
    /// Create a factory for the given unit system
    pub fn new(units: UnitSystem) -> Self {
        Self::with_unit_scale(units.world_units_per_input())
    }

    /// Create a factory for metric (kilometer) input
    pub fn metric() -> Self {
        Self::new(UnitSystem::Metric)
    }

    /// Create a factory for imperial (mile) input
    pub fn imperial() -> Self {
        Self::new(UnitSystem::Imperial)
    }

    /// Create a factory with an explicit caller-unit to world-unit factor
    pub fn with_unit_scale(unit_scale: f64) -> Self {
        Self {
            unit_scale,
            roads_built: 0,
        }
    }

    /// Number of roads this factory has built
    pub fn roads_built(&self) -> usize {
        self.roads_built
    }

    /// Build a road from caller-unit geometry
    pub fn build_road(
        &mut self,
        name: impl Into<String>,
        x: f64,
        y: f64,
        length: f64,
        heading: Heading,
    ) -> Result<Road> {
        let name = name.into();
        if name.is_empty() {
            return Err(RoadMapError::Geometry(
                "road name must not be empty".to_string(),
            ));
        }
        if !x.is_finite() || !y.is_finite() {
            return Err(RoadMapError::Geometry(format!(
                "road '{}' has non-finite position ({}, {})",
                name, x, y
            )));
        }
        if !length.is_finite() || length < 0.0 {
            return Err(RoadMapError::Geometry(format!(
                "road '{}' has invalid length {}",
                name, length
            )));
        }

        self.roads_built += 1;
        Ok(Road {
            name,
            x: x * self.unit_scale,
            y: y * self.unit_scale,
            length: length * self.unit_scale,
            heading,
        })
    }
}

/// An ordered collection of roads
///
/// Insertion order is draw order; later roads overwrite earlier marks at
/// overlapping cells, so the order determines visual precedence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoadMap {
    roads: Vec<Road>,
}

impl RoadMap {
    /// Create an empty road map
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a road; it will draw over everything added before it
    pub fn add_road(&mut self, road: Road) {
        self.roads.push(road);
    }

    /// The roads in draw order
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Number of roads in the map
    pub fn len(&self) -> usize {
        self.roads.len()
    }

    /// Whether the map contains no roads
    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }

    /// Iterate over roads in draw order
    pub fn iter(&self) -> impl Iterator<Item = &Road> {
        self.roads.iter()
    }
}
