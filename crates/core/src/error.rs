//! Conversion error taxonomy.
//!
//! All variants are local shape-validation failures: deterministic functions
//! of the input, surfaced immediately, never retried. Unknown control kinds
//! and missing tag parameters are deliberately *not* errors — business
//! structs evolve independently of the engine's handler set, so those cases
//! follow the engine's documented skip policies instead.

/// Errors returned by the conversion engines.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The input value does not have the required structural shape.
    #[error("input must be {expected}")]
    InvalidShape { expected: &'static str },

    /// The input row list was empty.
    #[error("input rows must not be empty")]
    EmptyInput,

    /// A row element was not a structural record.
    #[error("row {index} is not a record")]
    ElementType { index: usize },
}

pub type ConvertResult<T> = std::result::Result<T, ConvertError>;
