//! Hemisphere value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hemisphere of a location, decided only by the sign of its latitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hemisphere {
    /// Latitude strictly greater than zero
    Northern,
    /// Latitude of zero or below
    Southern,
}

impl Hemisphere {
    /// Classify a latitude; the equator belongs to the southern side
    #[must_use]
    pub fn from_latitude(latitude: f64) -> Self {
        if latitude > 0.0 {
            Self::Northern
        } else {
            Self::Southern
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Northern => "northern",
            Self::Southern => "southern",
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
