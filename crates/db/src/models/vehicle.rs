//! Vehicle entity model. Read-only: vehicles are only listed by owner.

use serde::Serialize;
use sqlx::FromRow;
use swapi_core::normalize::{normalize_float, normalize_int, normalize_text, Field};
use swapi_core::types::DbId;

use super::lenient;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    pub id: DbId,
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub cost_in_credits: Option<i64>,
    pub length: Option<f64>,
    pub max_atmosphering_speed: Option<i64>,
    pub crew: Option<i64>,
    pub passengers: Option<i64>,
    pub cargo_capacity: Option<i64>,
    pub consumables: Option<String>,
    pub vehicle_class: String,
    pub created: String,
    pub edited: String,
}

/// A `vehicles` row as stored, before sentinel normalization.
#[derive(Debug, Clone, FromRow)]
pub struct VehicleRow {
    pub id: DbId,
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub cost_in_credits: Option<String>,
    pub length: Option<String>,
    pub max_atmosphering_speed: Option<String>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
    pub cargo_capacity: Option<String>,
    pub consumables: Option<String>,
    pub vehicle_class: String,
    pub created: String,
    pub edited: String,
}

impl From<VehicleRow> for Vehicle {
    fn from(row: VehicleRow) -> Self {
        let id = row.id;
        let int = |field, raw| lenient("vehicles", id, normalize_int(field, raw));
        Vehicle {
            id,
            name: row.name,
            model: row.model,
            manufacturer: row.manufacturer,
            cost_in_credits: int(Field::CostInCredits, row.cost_in_credits),
            length: lenient("vehicles", id, normalize_float(Field::Length, row.length)),
            max_atmosphering_speed: int(Field::MaxAtmospheringSpeed, row.max_atmosphering_speed),
            crew: int(Field::Crew, row.crew),
            passengers: int(Field::Passengers, row.passengers),
            cargo_capacity: int(Field::CargoCapacity, row.cargo_capacity),
            consumables: normalize_text(Field::Consumables, row.consumables),
            vehicle_class: row.vehicle_class,
            created: row.created,
            edited: row.edited,
        }
    }
}
