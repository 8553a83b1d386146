//! Sentinel-to-null normalization for values read from the dataset.
//!
//! The source data stores placeholder strings (`"unknown"`, `"na"`,
//! `"none"`) where a value is absent. Each nullable column has its own set
//! of placeholders; [`Field::sentinels`] is the single table of them. The
//! functions here are pure so every read path can share them and they can
//! be tested without a database.

use std::str::FromStr;

const UNKNOWN: &[&str] = &["unknown"];
const UNKNOWN_OR_NA: &[&str] = &["unknown", "na"];
const NA_NONE_UNKNOWN: &[&str] = &["na", "none", "unknown"];
const NA_NONE: &[&str] = &["na", "none"];

/// A nullable column subject to sentinel normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    // people
    Height,
    Mass,
    HairColor,
    SkinColor,
    EyeColor,
    BirthYear,
    Gender,
    // starships and vehicles
    CostInCredits,
    Length,
    MaxAtmospheringSpeed,
    Crew,
    Passengers,
    CargoCapacity,
    Consumables,
    HyperdriveRating,
    Mglt,
}

impl Field {
    /// Raw values that mean "absent" for this column. Matching is exact.
    pub const fn sentinels(self) -> &'static [&'static str] {
        match self {
            Field::Height | Field::Mass | Field::BirthYear => UNKNOWN,
            Field::HairColor | Field::SkinColor | Field::EyeColor => NA_NONE_UNKNOWN,
            Field::Gender => NA_NONE,
            Field::MaxAtmospheringSpeed => UNKNOWN_OR_NA,
            Field::CostInCredits
            | Field::Length
            | Field::Crew
            | Field::Passengers
            | Field::CargoCapacity
            | Field::Consumables
            | Field::HyperdriveRating
            | Field::Mglt => UNKNOWN,
        }
    }

    /// Column name in the backing tables.
    pub const fn column(self) -> &'static str {
        match self {
            Field::Height => "height",
            Field::Mass => "mass",
            Field::HairColor => "hair_color",
            Field::SkinColor => "skin_color",
            Field::EyeColor => "eye_color",
            Field::BirthYear => "birth_year",
            Field::Gender => "gender",
            Field::CostInCredits => "cost_in_credits",
            Field::Length => "length",
            Field::MaxAtmospheringSpeed => "max_atmosphering_speed",
            Field::Crew => "crew",
            Field::Passengers => "passengers",
            Field::CargoCapacity => "cargo_capacity",
            Field::Consumables => "consumables",
            Field::HyperdriveRating => "hyperdrive_rating",
            Field::Mglt => "MGLT",
        }
    }

    pub fn is_sentinel(self, raw: &str) -> bool {
        self.sentinels().contains(&raw)
    }
}

/// A stored value that is neither a sentinel nor a number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("column {column} holds non-numeric value {value:?}")]
pub struct InvalidNumber {
    pub column: &'static str,
    pub value: String,
}

/// Map a raw stored value to its exposed form.
///
/// Sentinels become `None`; anything else passes through unchanged, except
/// `mass`, which also loses its thousands separators (`"1,358"` -> `"1358"`).
pub fn normalize_text(field: Field, raw: Option<String>) -> Option<String> {
    let raw = raw?;
    if field.is_sentinel(&raw) {
        return None;
    }
    if field == Field::Mass && raw.contains(',') {
        return Some(raw.replace(',', ""));
    }
    Some(raw)
}

/// Normalize, then parse as an integer.
///
/// Whole floats (`"172.0"`) are accepted since SQLite may hand back REAL
/// storage for an integer column.
pub fn normalize_int(field: Field, raw: Option<String>) -> Result<Option<i64>, InvalidNumber> {
    let Some(text) = normalize_text(field, raw) else {
        return Ok(None);
    };
    if let Ok(value) = text.trim().parse::<i64>() {
        return Ok(Some(value));
    }
    match text.trim().parse::<f64>() {
        Ok(value) if value.fract() == 0.0 && value.abs() < i64::MAX as f64 => {
            Ok(Some(value as i64))
        }
        _ => Err(invalid(field, text)),
    }
}

/// Normalize, then parse as a floating point number.
pub fn normalize_float(field: Field, raw: Option<String>) -> Result<Option<f64>, InvalidNumber> {
    parse_with(field, raw)
}

fn parse_with<T: FromStr>(field: Field, raw: Option<String>) -> Result<Option<T>, InvalidNumber> {
    match normalize_text(field, raw) {
        None => Ok(None),
        Some(text) => text
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| invalid(field, text)),
    }
}

fn invalid(field: Field, value: String) -> InvalidNumber {
    InvalidNumber {
        column: field.column(),
        value,
    }
}
