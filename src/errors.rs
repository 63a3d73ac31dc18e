//! Errors for reportpdf
//!
//! Building a report does no I/O, so almost nothing can fail: missing
//! optional sections are simply not drawn and odd row values are
//! sanitized away. What remains are violations of the object numbering
//! or the byte offsets in the cross-reference table. There is no partial
//! document to salvage in that case, so the error is returned to the caller.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// Objects must be numbered 1, 2, 3, ... in the order they are written
    #[error("object at position {position} has id {found}, expected {expected}")]
    NonSequentialObjectId {
        position: usize,
        expected: u32,
        found: u32,
    },
    /// The trailer /Root does not name any object of the document
    #[error("root object {root} is not part of the document ({count} objects)")]
    MissingRoot { root: u32, count: usize },
    /// The offset recorded for an object does not point at its `<id> 0 obj` marker
    #[error("xref entry for object {id} points at byte {offset}, which is not the start of that object")]
    XrefMismatch { id: u32, offset: usize },
    /// The cross-reference section could not be read back
    #[error("malformed cross-reference section: {0}")]
    MalformedXref(&'static str),
    /// External: serde_json::Error
    #[error("invalid report request: {0}")]
    Json(#[from] serde_json::Error),
}
