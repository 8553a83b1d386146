//! Request handlers.
//!
//! Handlers delegate to the repositories in `swapi_db` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod people;
