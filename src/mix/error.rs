//! Error types for diagram assembly.
//!
//! The pipeline itself is total: given well-typed input no stage can fail,
//! and missing information degrades to documented defaults. Errors exist
//! only at the boundary validation layer, which rejects structurally
//! invalid requests before the pipeline runs.

use thiserror::Error;

/// Errors raised by boundary validation.
#[derive(Debug, Error)]
pub enum Error {
    /// The request has no usable recipe name.
    #[error("recipe name is missing or not a string")]
    InvalidName,

    /// The ingredients field is neither an array nor a string.
    #[error("ingredients must be an array of strings or a JSON-encoded array string, got {0}")]
    InvalidIngredients(String),
}
