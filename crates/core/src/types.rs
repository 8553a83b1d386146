use chrono::{DateTime, Utc};

/// Person, starship and vehicle identities are plain integers.
pub type DbId = i64;

/// Timestamps are stored and exposed as strings in this exact layout,
/// e.g. `2014-12-09T13:50:51.644000Z`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// Format a UTC instant in the stored timestamp layout.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// The current time in the stored timestamp layout.
pub fn now_timestamp() -> String {
    format_timestamp(Utc::now())
}
