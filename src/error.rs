use thiserror::Error;

/// Errors that can occur while building or rendering a road map
#[derive(Error, Debug)]
pub enum RoadMapError {
    /// Configuration validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Road geometry validation errors
    #[error("Geometry error: {0}")]
    Geometry(String),
}

pub type Result<T> = std::result::Result<T, RoadMapError>;
