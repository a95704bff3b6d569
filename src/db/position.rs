//! Position assignment for lists and cards.
//!
//! A position is a sort key scoped to one parent (a board for lists, a list
//! for cards). New or moved items without an explicit position go after the
//! current last sibling. Nothing here renumbers siblings, so positions may
//! repeat or leave gaps.

use crate::db::{DbError, DbResult};

/// Position for an item appended after siblings whose highest position is
/// `max`. An empty parent starts at 0.
///
/// Fails when the highest sibling already sits at `i64::MAX`.
pub fn next_position(max: Option<i64>) -> DbResult<i64> {
    match max {
        None => Ok(0),
        Some(m) => m.checked_add(1).ok_or_else(|| DbError::Validation {
            message: format!(
                "Cannot append after position {}; pass an explicit position",
                m
            ),
        }),
    }
}

/// Explicit position wins verbatim; otherwise append.
pub fn resolve_position(requested: Option<i64>, max: Option<i64>) -> DbResult<i64> {
    match requested {
        Some(position) => Ok(position),
        None => next_position(max),
    }
}
