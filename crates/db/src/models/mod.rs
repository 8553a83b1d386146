//! Row and wire types for the dataset tables.
//!
//! Each entity has a raw `*Row` read straight from SQL (nullable columns as
//! text) and an exposed type built from it through
//! [`swapi_core::normalize`].

pub mod person;
pub mod starship;
pub mod vehicle;

use swapi_core::normalize::InvalidNumber;
use swapi_core::types::DbId;

/// Collapse a numeric parse failure to `None`, logging the offending value.
///
/// The dataset holds free-form text in some numeric columns (ranges such as
/// `"30-165"`, separators such as `"1,500"`); these are exposed as absent.
pub(crate) fn lenient<T>(
    entity: &'static str,
    id: DbId,
    parsed: Result<Option<T>, InvalidNumber>,
) -> Option<T> {
    parsed.unwrap_or_else(|err| {
        tracing::warn!(
            entity,
            id,
            column = err.column,
            value = %err.value,
            "Non-numeric value exposed as null"
        );
        None
    })
}
