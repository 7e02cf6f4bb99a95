//! Workspace error type.
//!
//! "No path" is deliberately absent: an unreachable goal is a normal search
//! outcome and is reported as an empty path, not as an error.

use std::fmt;

use thiserror::Error;

/// Which designated endpoint a configuration error refers to.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::End => f.write_str("end"),
        }
    }
}

/// The error type shared by all `pf-*` crates.
#[derive(Debug, Error)]
pub enum PfError {
    /// A search was requested before the endpoint was bound.
    #[error("configuration error: {0} node not set")]
    EndpointUnset(Endpoint),

    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    /// An endpoint would sit on (or be turned into) an impassable cell.
    #[error("cell ({x}, {y}) is blocked")]
    Blocked { x: u32, y: u32 },

    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `pf-*` crates.
pub type PfResult<T> = Result<T, PfError>;
