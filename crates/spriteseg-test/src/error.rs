//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Value comparison failed
    #[error(
        "value comparison failed at index {index}: expected {expected}, got {actual}, delta {delta}"
    )]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    /// Label maps differ in size
    #[error("label map comparison failed at index {index}: size {expected:?} vs {actual:?}")]
    LabelMapSize {
        index: usize,
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Label maps differ at a pixel
    #[error("label map comparison failed at index {index}: ({x}, {y}) is {actual}, expected {expected}")]
    LabelMapMismatch {
        index: usize,
        x: u32,
        y: u32,
        expected: u32,
        actual: u32,
    },

    /// Byte strings differ
    #[error("string comparison failed at index {index}: sizes {expected_len} vs {actual_len}")]
    StringMismatch {
        index: usize,
        expected_len: usize,
        actual_len: usize,
    },

    /// A test fixture could not be built
    #[error("bad fixture: {0}")]
    Fixture(String),

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] spriteseg_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
