//! Stateless operations over a caller-owned field sequence.
//!
//! The session (a UI, out of scope here) owns the `Vec<FieldSpec>` and passes
//! it in by mutable borrow; this module never holds state of its own. One
//! mutation per call, single writer by construction of the surrounding
//! single-session model.
//!
//! The asymmetry between `remove` (silent no-op out of range) and `update`
//! (fault out of range) is preserved as observed behavior, not unified.

use crate::error::{Error, Result};
use crate::model::FieldSpec;

/// Appends a field to the end of the sequence.
///
/// Never fails. Name uniqueness is the caller's concern and is not enforced;
/// duplicates generate duplicate declarations downstream.
pub fn add(fields: &mut Vec<FieldSpec>, spec: FieldSpec) {
    tracing::debug!(field = %spec.name, total = fields.len() + 1, "field added");
    fields.push(spec);
}

/// Replaces the field at `index`, preserving position.
///
/// # Errors
/// Returns [`Error::IndexOutOfBounds`] and leaves the sequence unchanged when
/// `index` is outside `[0, len)`.
pub fn update(fields: &mut Vec<FieldSpec>, index: usize, spec: FieldSpec) -> Result<()> {
    let len = fields.len();
    let slot = fields
        .get_mut(index)
        .ok_or(Error::IndexOutOfBounds { index, len })?;
    tracing::debug!(field = %spec.name, index, "field updated");
    *slot = spec;
    Ok(())
}

/// Removes the field at `index`, shifting subsequent fields left.
///
/// Out-of-range indices are a deliberate soft-fail: the sequence is left
/// unchanged and the call is a no-op.
pub fn remove(fields: &mut Vec<FieldSpec>, index: usize) {
    if index < fields.len() {
        let removed = fields.remove(index);
        tracing::debug!(field = %removed.name, index, total = fields.len(), "field removed");
    } else {
        tracing::debug!(index, len = fields.len(), "remove ignored, index out of range");
    }
}
