//! Data access for the dataset tables.
//!
//! Repositories are zero-sized types with associated async functions taking
//! the shared [`Database`](crate::Database). Reads go straight to the pool;
//! writes hold [`Database::write_lock`](crate::Database::write_lock) first.

pub mod person_repo;
pub mod starship_repo;
pub mod vehicle_repo;

pub use person_repo::PersonRepo;
pub use starship_repo::StarshipRepo;
pub use vehicle_repo::VehicleRepo;
