//! Coordinate value object
//!
//! Coordinates arrive as loosely typed JSON fields. Whether a field counts as
//! present is decided here, so every entry point applies the same rule.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::Hemisphere;
use crate::errors::DomainError;

/// How a coordinate equal to zero is treated during validation
///
/// The lookup endpoint historically rejected `0` as if the field were absent,
/// which excludes the equator and the prime meridian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroCoordinatePolicy {
    /// A numeric `0` is reported as a missing coordinate
    #[default]
    TreatAsMissing,
    /// Any finite number, including `0`, is a valid coordinate
    Accept,
}

impl fmt::Display for ZeroCoordinatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TreatAsMissing => write!(f, "treat_as_missing"),
            Self::Accept => write!(f, "accept"),
        }
    }
}

impl std::str::FromStr for ZeroCoordinatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "treat_as_missing" | "missing" => Ok(Self::TreatAsMissing),
            "accept" => Ok(Self::Accept),
            _ => Err(format!(
                "Invalid zero coordinate policy: {s}. Use 'treat_as_missing' or 'accept'"
            )),
        }
    }
}

/// A latitude/longitude pair that passed presence validation
///
/// No range check is applied; the upstream service decides what it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Create coordinates from already-validated numbers
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Validate raw JSON fields and build coordinates from them
    ///
    /// A field is accepted when it is a JSON number or a numeric string with a
    /// finite value. Under [`ZeroCoordinatePolicy::TreatAsMissing`] the number
    /// `0` is rejected as well, while a non-empty string such as `"0"` is not.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingCoordinates`] if either field fails the check.
    pub fn from_fields(
        latitude: Option<&Value>,
        longitude: Option<&Value>,
        policy: ZeroCoordinatePolicy,
    ) -> Result<Self, DomainError> {
        match (
            present_number(latitude, policy),
            present_number(longitude, policy),
        ) {
            (Some(latitude), Some(longitude)) => Ok(Self::new(latitude, longitude)),
            _ => Err(DomainError::MissingCoordinates),
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Hemisphere derived from the sign of the latitude
    #[must_use]
    pub fn hemisphere(&self) -> Hemisphere {
        Hemisphere::from_latitude(self.latitude)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

#[allow(clippy::float_cmp)] // exact zero only; tiny non-zero values are present
fn present_number(value: Option<&Value>, policy: ZeroCoordinatePolicy) -> Option<f64> {
    let number = match value? {
        Value::Number(n) => {
            let number = n.as_f64()?;
            if policy == ZeroCoordinatePolicy::TreatAsMissing && number == 0.0 {
                return None;
            }
            number
        },
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    number.is_finite().then_some(number)
}
