//! Crate-wide scalar type aliases.

/// Edge weight type. Non-negative and finite; infinity represents
/// "no path" and is never stored, only returned from queries.
pub type Weight = f64;
