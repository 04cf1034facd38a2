//! # Unit Types
//!
//! Weight units for the calculator. A [`WeightUnit`] tag travels with every
//! calculation as an explicit parameter; there is no "current unit" global.
//!
//! The [`Pounds`] and [`Kilograms`] newtypes give compile-time safety where a
//! value's unit is known statically, and serialize as plain numbers.
//!
//! ## Example
//!
//! ```rust
//! use onerep_core::units::{convert_unit, Kilograms, Pounds, WeightUnit};
//!
//! let kg: Kilograms = Pounds(100.0).into();
//! assert!((kg.0 - 45.3592).abs() < 1e-9);
//!
//! let lbs = convert_unit(kg.0, WeightUnit::Kilograms, WeightUnit::Pounds);
//! assert!((lbs - 100.0).abs() < 1e-9);
//! ```

use std::fmt;
use std::ops::{Div, Mul};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Kilograms per pound
pub const LBS_TO_KG: f64 = 0.453592;

// ============================================================================
// Unit Tag
// ============================================================================

/// Unit a weight is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeightUnit {
    /// Pounds (lbs)
    #[default]
    #[serde(rename = "lbs")]
    Pounds,
    /// Kilograms (kg)
    #[serde(rename = "kg")]
    Kilograms,
}

impl WeightUnit {
    /// All units for UI selection
    pub const ALL: [WeightUnit; 2] = [WeightUnit::Pounds, WeightUnit::Kilograms];

    /// Short code, as used in JSON and on the command line
    pub fn code(&self) -> &'static str {
        match self {
            WeightUnit::Pounds => "lbs",
            WeightUnit::Kilograms => "kg",
        }
    }

    /// Upper-case label shown next to input and result fields
    pub fn label(&self) -> &'static str {
        match self {
            WeightUnit::Pounds => "LBS",
            WeightUnit::Kilograms => "KG",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "lbs" | "lb" | "pounds" | "pound" => Ok(WeightUnit::Pounds),
            "kg" | "kgs" | "kilograms" | "kilogram" => Ok(WeightUnit::Kilograms),
            _ => Err(CalcError::unknown_unit(s)),
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for WeightUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}

// ============================================================================
// Typed Weights
// ============================================================================

/// Weight in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

/// Weight in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

impl From<Pounds> for Kilograms {
    fn from(lbs: Pounds) -> Self {
        Kilograms(lbs.0 * LBS_TO_KG)
    }
}

impl From<Kilograms> for Pounds {
    fn from(kg: Kilograms) -> Self {
        Pounds(kg.0 / LBS_TO_KG)
    }
}

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Pounds);
impl_arithmetic!(Kilograms);

/// Convert a raw value between units.
///
/// Identity when the units match. Both directions go through the typed
/// newtypes so the conversion factor lives in one place.
pub fn convert_unit(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    match (from, to) {
        (WeightUnit::Pounds, WeightUnit::Kilograms) => Kilograms::from(Pounds(value)).value(),
        (WeightUnit::Kilograms, WeightUnit::Pounds) => Pounds::from(Kilograms(value)).value(),
        _ => value,
    }
}

// ============================================================================
// Measurement
// ============================================================================

/// A weight paired with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub value: f64,
    pub unit: WeightUnit,
}

impl Measurement {
    pub fn new(value: f64, unit: WeightUnit) -> Self {
        Measurement { value, unit }
    }

    /// Express this measurement in another unit
    pub fn convert_to(self, unit: WeightUnit) -> Self {
        Measurement {
            value: convert_unit(self.value, self.unit, unit),
            unit,
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", crate::format::format_result(self.value), self.unit.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pounds_to_kilograms() {
        let kg: Kilograms = Pounds(100.0).into();
        assert!((kg.0 - 45.3592).abs() < 1e-9);
    }

    #[test]
    fn test_convert_identity() {
        assert_eq!(convert_unit(123.4, WeightUnit::Pounds, WeightUnit::Pounds), 123.4);
        assert_eq!(convert_unit(123.4, WeightUnit::Kilograms, WeightUnit::Kilograms), 123.4);
    }

    #[test]
    fn test_convert_roundtrip() {
        for v in [0.5, 1.0, 45.0, 100.0, 225.0, 315.5, 1000.0] {
            let kg = convert_unit(v, WeightUnit::Pounds, WeightUnit::Kilograms);
            let back = convert_unit(kg, WeightUnit::Kilograms, WeightUnit::Pounds);
            assert!((back - v).abs() < 1e-6, "{} came back as {}", v, back);
        }
    }

    #[test]
    fn test_convert_100_lbs() {
        let kg = convert_unit(100.0, WeightUnit::Pounds, WeightUnit::Kilograms);
        assert!((kg - 45.3592).abs() < 1e-9);
        assert_eq!(crate::format::format_result(kg), "45.4");
    }

    #[test]
    fn test_arithmetic() {
        let a = Pounds(100.0);
        assert_eq!((a * 2.0).value(), 200.0);
        assert_eq!((a / 4.0).value(), 25.0);
        assert_eq!(Kilograms::new(20.0).0, 20.0);
    }

    #[test]
    fn test_parse_unit() {
        assert_eq!("lbs".parse::<WeightUnit>().unwrap(), WeightUnit::Pounds);
        assert_eq!(" KG ".parse::<WeightUnit>().unwrap(), WeightUnit::Kilograms);
        assert_eq!(WeightUnit::from_str_flexible("Pounds").unwrap(), WeightUnit::Pounds);
        assert_eq!(
            "stone".parse::<WeightUnit>().unwrap_err(),
            CalcError::unknown_unit("stone")
        );
    }

    #[test]
    fn test_measurement_convert() {
        let m = Measurement::new(100.0, WeightUnit::Pounds).convert_to(WeightUnit::Kilograms);
        assert_eq!(m.unit, WeightUnit::Kilograms);
        assert_eq!(m.to_string(), "45.4 kg");
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&WeightUnit::Kilograms).unwrap(), "\"kg\"");
        assert_eq!(serde_json::to_string(&Pounds(12.5)).unwrap(), "12.5");

        let roundtrip: WeightUnit = serde_json::from_str("\"lbs\"").unwrap();
        assert_eq!(roundtrip, WeightUnit::Pounds);
    }
}
