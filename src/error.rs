//! Error types.
//!
//! Geometry degeneracies (parallel rays, zero directions) are not errors: they
//! resolve to "no intersection" where they happen. Only arithmetic with an
//! undefined result and invalid configuration surface here.

use thiserror::Error;

/// Arithmetic on vectors whose result is undefined.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Component-wise division by a zero scalar.
    #[error("division of vector by zero")]
    DivisionByZero,
}

/// Invalid configuration, detected before the first frame is rendered.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file does not exist
    #[error("config file not found: {0}")]
    NotFound(String),

    /// Config file could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML or has the wrong shape
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Screen dimensions must be positive
    #[error("invalid screen size {width}x{height}")]
    InvalidScreen {
        /// Requested width in characters
        width: usize,
        /// Requested height in characters
        height: usize,
    },

    /// View window parameters must be positive and finite
    #[error("invalid view setting: {0}")]
    InvalidView(String),

    /// Map grid is empty or not rectangular
    #[error("invalid map: {0}")]
    InvalidMap(String),

    /// World scale parameters must be positive and finite
    #[error("invalid world setting: {0}")]
    InvalidWorld(String),
}
