use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const KMPH_PER_MPS: f64 = 18.0 / 5.0;
const MPS_PER_KMPH: f64 = 5.0 / 18.0;

/// Unit a speed is displayed and entered in. The sampler always works in m/s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedUnit {
    #[default]
    #[serde(rename = "mps")]
    MetersPerSecond,
    #[serde(rename = "kmph")]
    KilometersPerHour,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown speed unit '{0}', expected 'mps' or 'kmph'")]
pub struct UnitParseError(pub String);

impl SpeedUnit {
    pub fn to_mps(self, value: f64) -> f64 {
        match self {
            Self::MetersPerSecond => value,
            Self::KilometersPerHour => value * MPS_PER_KMPH,
        }
    }

    pub fn from_mps(self, speed_mps: f64) -> f64 {
        match self {
            Self::MetersPerSecond => speed_mps,
            Self::KilometersPerHour => speed_mps * KMPH_PER_MPS,
        }
    }

    /// Upper end of the speed slider for this unit.
    pub fn slider_max(self) -> f64 {
        match self {
            Self::MetersPerSecond => 50.0,
            Self::KilometersPerHour => 180.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::MetersPerSecond => "m/s",
            Self::KilometersPerHour => "km/h",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::MetersPerSecond => Self::KilometersPerHour,
            Self::KilometersPerHour => Self::MetersPerSecond,
        }
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SpeedUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mps" | "m/s" => Ok(Self::MetersPerSecond),
            "kmph" | "kmh" | "km/h" => Ok(Self::KilometersPerHour),
            other => Err(UnitParseError(other.to_string())),
        }
    }
}
