//! A Rust library for rasterizing road networks onto fixed-size ASCII grids.
//!
//! Roads are described in a continuous 2-D world-coordinate space (position,
//! length, cardinal heading); the library maps them into a square character
//! grid and draws each one as a dashed three-lane segment, producing a
//! text-based approximation of the network suitable for console display.

pub mod config;
pub mod error;
pub mod render;
pub mod road;
pub mod units;

pub use config::*;
pub use error::*;
pub use render::*;
pub use road::*;
pub use units::*;
