//! Unified error types for braille_engine

use thiserror::Error;

/// Main error type for braille_engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === Model Errors ===
    #[error("Invalid grid size {width}x{height}, both dimensions must be positive")]
    InvalidGridSize { width: i32, height: i32 },

    #[error("Invalid cell key '{key}', expected \"x,y\"")]
    InvalidCellKey { key: String },

    #[error("Invalid dot number {dot}, braille cells have dots 1 to 6")]
    InvalidDot { dot: u8 },

    // === Image Import Errors ===
    #[error("Bitmap data has {actual} bytes, expected {expected} for {width}x{height}")]
    BitmapSizeMismatch { width: usize, height: usize, expected: usize, actual: usize },

    #[error("Bitmap dimensions must be positive, got {width}x{height}")]
    EmptyBitmap { width: usize, height: usize },
}

/// Result type alias for braille_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
