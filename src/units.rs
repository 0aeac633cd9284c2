use serde::{Deserialize, Serialize};

/// Meters to kilometers conversion factor
pub const METERS_TO_KM: f64 = 0.001;
/// Meters to miles conversion factor
pub const METERS_TO_MILES: f64 = 0.000621371;
/// Meters-per-second to kilometers-per-hour conversion factor
pub const MPS_TO_KPH: f64 = 3.6;
/// Meters-per-second to miles-per-hour conversion factor
pub const MPS_TO_MPH: f64 = 2.237;

/// Default character-grid dimension (cells per side)
pub const DEFAULT_GRID_SIZE: usize = 40;
/// Default world span covered by the grid, in world units (meters)
pub const DEFAULT_WORLD_SPAN: f64 = 200.0;

/// Unit system for caller-supplied road geometry
///
/// World space is measured in meters; each unit system is just a linear
/// factor converting caller input into world units. Only the factor varies,
/// so there is one road factory parameterized by it rather than one factory
/// type per unit system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// Positions and lengths given in kilometers
    Metric,
    /// Positions and lengths given in miles
    Imperial,
}

impl Default for UnitSystem {
    fn default() -> Self {
        Self::Metric
    }
}

impl UnitSystem {
    /// Get a human-readable name for this unit system
    pub fn name(&self) -> &str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    /// Factor converting one caller unit into world units (meters)
    pub fn world_units_per_input(&self) -> f64 {
        match self {
            Self::Metric => 1.0 / METERS_TO_KM,
            Self::Imperial => 1.0 / METERS_TO_MILES,
        }
    }
}
