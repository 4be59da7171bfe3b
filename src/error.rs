//! Error types for equivalent strain post-processing

use thiserror::Error;

use crate::fields::ComponentLabel;

/// Main error type for equivalent strain operations
#[derive(Error, Debug)]
pub enum EstrnError {
    #[error("Strain component {label} is missing from the snapshot")]
    MissingComponent { label: ComponentLabel },

    #[error("Component {label} has {found} values, expected {expected}")]
    ShapeMismatch {
        label: ComponentLabel,
        expected: usize,
        found: usize,
    },

    #[error("Component {label} is not aligned with EPSX at index {index}")]
    EntityOrderMismatch { label: ComponentLabel, index: usize },

    #[error("Step '{0}' not found in results database")]
    StepNotFound(String),

    #[error("Duplicate name '{0}' already exists")]
    DuplicateName(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for equivalent strain operations
pub type EstrnResult<T> = Result<T, EstrnError>;
