//! Error taxonomy for registry and generation operations.
//!
//! The surface is deliberately small: registry mutations can fault on a bad
//! index, model construction rejects an empty name, and template rendering
//! can fail inside Tera. Malformed user-supplied text (validation logic,
//! error messages, example values) is never an error here; it is passed
//! through to the generated source uninspected.

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// Positional update targeted an index outside the live field sequence.
    #[error("field index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Model names become class identifiers verbatim, so empty is rejected.
    #[error("model name must not be empty")]
    EmptyModelName,

    /// The embedded model template failed to render.
    #[error("template rendering failed: {0}")]
    Template(#[from] tera::Error),
}
