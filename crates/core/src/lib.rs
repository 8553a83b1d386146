//! Storage-agnostic domain logic for the SWAPI people service.
//!
//! Holds the error taxonomy, shared scalar types, the sentinel
//! normalization table applied on every read, and the field checks run
//! before every write.

pub mod error;
pub mod normalize;
pub mod types;
pub mod validation;
