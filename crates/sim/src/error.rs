//! Error type shared by the grid, materials and configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// A write or explicit lookup landed outside the grid.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    /// A raw material tag that does not name a material.
    #[error("unknown material tag {0}")]
    UnknownMaterial(u8),

    /// A character in a text grid that does not name a material.
    #[error("unknown grid glyph {glyph:?} at line {line}, column {column}")]
    UnknownGlyph {
        glyph: char,
        line: usize,
        column: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("config file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("config JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
}
