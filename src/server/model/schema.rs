//! Field-level schema rules shared by the create, replace and update paths.
//!
//! Each rule returns the `ValidationError` for its own field, so callers can
//! chain them with `?` in field order and report the first failure.

use chrono::{DateTime, TimeZone, Utc};
use std::str::FromStr;

use crate::server::error::validation::ValidationError;

pub const NAME_MAX_LEN: usize = 60;
pub const DESCRIPTION_MIN_LEN: usize = 10;
pub const DESCRIPTION_MAX_LEN: usize = 500;
pub const DEFAULT_PREP_TIME: f64 = 12.0;
pub const MIN_STARS: i32 = 1;
pub const MAX_STARS: i32 = 5;

/// Latest accepted `dateExample` (midnight UTC, 2100-12-31).
pub fn latest_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2100, 12, 31, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Allowed values of `enumExample`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Beverage {
    Coffee,
    Tea,
}

impl Beverage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Beverage::Coffee => "Coffee",
            Beverage::Tea => "Tea",
        }
    }
}

impl FromStr for Beverage {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Coffee" => Ok(Beverage::Coffee),
            "Tea" => Ok(Beverage::Tea),
            other => Err(ValidationError::NotSupported(other.to_string())),
        }
    }
}

/// Unwraps a required value.
pub fn required<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Required { field })
}

/// Unwraps a required string; an empty string counts as missing.
pub fn required_str(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ValidationError::Required { field }),
    }
}

pub fn name(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() > NAME_MAX_LEN {
        return Err(ValidationError::TooLong {
            field: "name",
            max: NAME_MAX_LEN,
        });
    }
    Ok(())
}

pub fn description(value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < DESCRIPTION_MIN_LEN {
        return Err(ValidationError::TooShort {
            field: "description",
            min: DESCRIPTION_MIN_LEN,
        });
    }
    if len > DESCRIPTION_MAX_LEN {
        return Err(ValidationError::TooLong {
            field: "description",
            max: DESCRIPTION_MAX_LEN,
        });
    }
    Ok(())
}

pub fn stars(value: i32) -> Result<(), ValidationError> {
    if value < MIN_STARS {
        return Err(ValidationError::TooFewStars(value));
    }
    if value > MAX_STARS {
        return Err(ValidationError::TooManyStars(value));
    }
    Ok(())
}

pub fn even(value: i32) -> Result<(), ValidationError> {
    if value % 2 != 0 {
        return Err(ValidationError::NotEven(value));
    }
    Ok(())
}

/// A supplied date must not be in the past relative to `now` nor after 2100.
pub fn date(value: DateTime<Utc>, now: DateTime<Utc>) -> Result<(), ValidationError> {
    if value > latest_date() {
        return Err(ValidationError::DateTooLate);
    }
    if value < now {
        return Err(ValidationError::DateInPast);
    }
    Ok(())
}
