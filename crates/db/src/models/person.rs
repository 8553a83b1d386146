//! Person entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use swapi_core::error::CoreError;
use swapi_core::normalize::{normalize_float, normalize_int, normalize_text, Field};
use swapi_core::types::DbId;
use swapi_core::validation::validate_person;

use super::lenient;

/// A person as exposed to clients. Absent values serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    pub id: DbId,
    pub name: String,
    pub height: Option<i64>,
    pub mass: Option<f64>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub created: String,
    pub edited: String,
}

/// A `people` row as stored, before sentinel normalization.
#[derive(Debug, Clone, FromRow)]
pub struct PersonRow {
    pub id: DbId,
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub created: String,
    pub edited: String,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        let id = row.id;
        Person {
            id,
            name: row.name,
            height: lenient("people", id, normalize_int(Field::Height, row.height)),
            mass: lenient("people", id, normalize_float(Field::Mass, row.mass)),
            hair_color: normalize_text(Field::HairColor, row.hair_color),
            skin_color: normalize_text(Field::SkinColor, row.skin_color),
            eye_color: normalize_text(Field::EyeColor, row.eye_color),
            birth_year: normalize_text(Field::BirthYear, row.birth_year),
            gender: normalize_text(Field::Gender, row.gender),
            created: row.created,
            edited: row.edited,
        }
    }
}

/// DTO for creating or fully replacing a person.
///
/// Server-assigned fields (`id`, `created`, `edited`) are ignored if sent.
/// A missing `name` becomes the empty string and fails [`validate`](Self::validate).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonInput {
    #[serde(default)]
    pub name: String,
    pub height: Option<i64>,
    pub mass: Option<f64>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}

impl PersonInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_person(&self.name, self.height, self.mass)
    }

    /// Materialize the stored record for a freshly assigned identity.
    pub fn into_person(self, id: DbId, created: String, edited: String) -> Person {
        Person {
            id,
            name: self.name,
            height: self.height,
            mass: self.mass,
            hair_color: self.hair_color,
            skin_color: self.skin_color,
            eye_color: self.eye_color,
            birth_year: self.birth_year,
            gender: self.gender,
            created,
            edited,
        }
    }
}
