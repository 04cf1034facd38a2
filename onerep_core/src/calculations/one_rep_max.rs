//! # One-Rep-Max Calculation
//!
//! Estimates a one-repetition maximum from a submaximal set with the Epley
//! formula, `1RM = weight × (1 + reps / 30)`, and derives a training table
//! from the estimate.
//!
//! ## Assumptions
//!
//! - Weight is positive and finite
//! - Reps are between 1 and 50 inclusive
//! - The result is expressed in the same unit as the input weight
//!
//! ## Example
//!
//! ```rust
//! use onerep_core::calculations::one_rep_max::{calculate, OneRepMaxInput};
//! use onerep_core::calculations::TableMode;
//! use onerep_core::units::WeightUnit;
//!
//! let input = OneRepMaxInput {
//!     weight: 225.0,
//!     reps: 5,
//!     unit: WeightUnit::Pounds,
//!     mode: TableMode::PercentageTable,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.formatted_one_rep_max(), "262.5");
//! assert_eq!(result.table.get("90%").map(onerep_core::format::format_result), Some("236.3".to_string()));
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::format::format_result;
use crate::units::{convert_unit, WeightUnit};

use super::table::{DerivedTable, TableMode};

/// Fewest reps the formula accepts
pub const MIN_REPS: u32 = 1;

/// Most reps the formula accepts
pub const MAX_REPS: u32 = 50;

/// Epley denominator: each rep adds 1/30 of the lifted weight
const EPLEY_REPS_PER_UNIT: f64 = 30.0;

fn epley_factor(reps: u32) -> f64 {
    1.0 + f64::from(reps) / EPLEY_REPS_PER_UNIT
}

/// Check the formula's domain: weight > 0 (and finite), reps in [1, 50].
pub fn validate_lift(weight: f64, reps: u32) -> CalcResult<()> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(CalcError::invalid_input(
            "weight",
            weight.to_string(),
            "Weight must be greater than 0",
        ));
    }
    if !(MIN_REPS..=MAX_REPS).contains(&reps) {
        return Err(CalcError::invalid_input(
            "reps",
            reps.to_string(),
            "Reps must be between 1 and 50",
        ));
    }
    Ok(())
}

/// Estimate the one-rep max for `weight` lifted `reps` times (Epley).
///
/// # Returns
///
/// * `Ok(f64)` - `weight × (1 + reps / 30)`, in the unit of `weight`
/// * `Err(CalcError::InvalidInput)` - weight ≤ 0, reps = 0 or reps > 50,
///   or an estimate too large to represent
pub fn estimate_one_rep_max(weight: f64, reps: u32) -> CalcResult<f64> {
    validate_lift(weight, reps)?;
    let one_rep_max = weight * epley_factor(reps);
    if !one_rep_max.is_finite() {
        return Err(CalcError::invalid_input(
            "weight",
            weight.to_string(),
            "Weight is too large to estimate",
        ));
    }
    Ok(one_rep_max)
}

/// Weight at a percentage of the one-rep max. No validation.
pub fn weight_at_percentage(one_rep_max: f64, percentage: f64) -> f64 {
    one_rep_max * percentage / 100.0
}

/// Weight liftable for `reps` repetitions given a one-rep max (inverse Epley).
///
/// No bounds validation; the rep-max ladder only feeds it 2 through 10.
pub fn weight_at_reps(one_rep_max: f64, reps: u32) -> f64 {
    one_rep_max / epley_factor(reps)
}

/// Input parameters for a one-rep-max calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "weight": 225.0,
///   "reps": 5,
///   "unit": "lbs",
///   "mode": "rep_max_ladder"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OneRepMaxInput {
    /// Weight lifted for the set
    pub weight: f64,

    /// Repetitions completed
    pub reps: u32,

    /// Unit of `weight`; results come back in the same unit
    #[serde(default)]
    pub unit: WeightUnit,

    /// Which derived table to build
    #[serde(default)]
    pub mode: TableMode,
}

impl OneRepMaxInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        validate_lift(self.weight, self.reps)
    }
}

/// Results from a one-rep-max calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "one_rep_max": 262.5,
///   "unit": "lbs",
///   "table": {
///     "mode": "percentage_table",
///     "rows": [
///       { "label": "70%", "value": 183.75 },
///       { "label": "80%", "value": 210.0 },
///       { "label": "90%", "value": 236.25 }
///     ]
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneRepMaxResult {
    /// Estimated one-rep max
    pub one_rep_max: f64,

    /// Unit of every value in this result
    pub unit: WeightUnit,

    /// Rep-max ladder or percentage table
    pub table: DerivedTable,
}

impl OneRepMaxResult {
    /// One-rep max rendered to one decimal
    pub fn formatted_one_rep_max(&self) -> String {
        format_result(self.one_rep_max)
    }

    /// `(label, value)` pairs rendered to one decimal
    pub fn formatted_rows(&self) -> Vec<(String, String)> {
        self.table
            .rows
            .iter()
            .map(|row| (row.label.clone(), format_result(row.value)))
            .collect()
    }

    /// Express every value of this result in another unit
    pub fn convert_to(&self, unit: WeightUnit) -> Self {
        let from = self.unit;
        let mut table = self.table.clone();
        for row in &mut table.rows {
            row.value = convert_unit(row.value, from, unit);
        }
        OneRepMaxResult {
            one_rep_max: convert_unit(self.one_rep_max, from, unit),
            unit,
            table,
        }
    }
}

/// Calculate the one-rep max and the requested derived table.
///
/// # Returns
///
/// * `Ok(OneRepMaxResult)` - Estimate and table, in the input's unit
/// * `Err(CalcError)` - If inputs are invalid
pub fn calculate(input: &OneRepMaxInput) -> CalcResult<OneRepMaxResult> {
    let one_rep_max = estimate_one_rep_max(input.weight, input.reps)?;
    let table = DerivedTable::build(one_rep_max, input.mode);

    debug!(
        weight = input.weight,
        reps = input.reps,
        unit = input.unit.code(),
        mode = ?input.mode,
        one_rep_max,
        "calculated one-rep max"
    );

    Ok(OneRepMaxResult {
        one_rep_max,
        unit: input.unit,
        table,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    fn test_input() -> OneRepMaxInput {
        OneRepMaxInput {
            weight: 225.0,
            reps: 5,
            unit: WeightUnit::Pounds,
            mode: TableMode::RepMaxLadder,
        }
    }

    #[test]
    fn test_epley_formula() {
        for w in [1.0, 45.0, 100.0, 225.0, 317.5] {
            for r in MIN_REPS..=MAX_REPS {
                let expected = w * (1.0 + f64::from(r) / 30.0);
                assert_eq!(estimate_one_rep_max(w, r).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_single_rep() {
        // 1 rep still goes through Epley: 100 × (1 + 1/30)
        let e1rm = estimate_one_rep_max(100.0, 1).unwrap();
        assert!(approx_eq(e1rm, 103.333, 0.001));
    }

    #[test]
    fn test_225_for_5() {
        let e1rm = estimate_one_rep_max(225.0, 5).unwrap();
        assert!(approx_eq(e1rm, 262.5, 1e-9));

        let at_90 = weight_at_percentage(e1rm, 90.0);
        assert!(approx_eq(at_90, 236.25, 1e-9));
        assert_eq!(format_result(at_90), "236.3");
    }

    #[test]
    fn test_zero_reps() {
        let err = estimate_one_rep_max(100.0, 0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_too_many_reps() {
        assert!(estimate_one_rep_max(100.0, 51).is_err());
        assert!(estimate_one_rep_max(100.0, 50).is_ok());
    }

    #[test]
    fn test_invalid_weight() {
        assert!(estimate_one_rep_max(0.0, 5).is_err());
        assert!(estimate_one_rep_max(-100.0, 5).is_err());
        assert!(estimate_one_rep_max(f64::NAN, 5).is_err());
        assert!(estimate_one_rep_max(f64::INFINITY, 5).is_err());
    }

    #[test]
    fn test_overflowing_estimate() {
        let err = estimate_one_rep_max(1.7e308, 50).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.user_message(), "Weight is too large to estimate");

        // Large but representable estimates still format with one decimal
        let e1rm = estimate_one_rep_max(1.0e308, 5).unwrap();
        assert!(format_result(e1rm).ends_with(".0"));
    }

    #[test]
    fn test_inverse_roundtrip() {
        for w in [2.5, 60.0, 100.0, 225.0, 405.0] {
            for r in MIN_REPS..=MAX_REPS {
                let e1rm = estimate_one_rep_max(w, r).unwrap();
                assert!(approx_eq(weight_at_reps(e1rm, r), w, 1e-9), "w={} r={}", w, r);
            }
        }
    }

    #[test]
    fn test_calculate_keeps_unit() {
        let mut input = test_input();
        input.unit = WeightUnit::Kilograms;
        let result = calculate(&input).unwrap();
        assert_eq!(result.unit, WeightUnit::Kilograms);
        assert_eq!(result.formatted_one_rep_max(), "262.5");
    }

    #[test]
    fn test_calculate_ladder_rows() {
        let result = calculate(&test_input()).unwrap();
        let rows = result.formatted_rows();
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0].0, "2RM");
        assert_eq!(rows[8].0, "10RM");
        // 5RM of a 5-rep set is the lifted weight
        assert_eq!(result.table.get("5RM").map(format_result), Some("225.0".to_string()));
    }

    #[test]
    fn test_calculate_invalid() {
        let mut input = test_input();
        input.reps = 51;
        assert!(input.validate().is_err());
        assert!(calculate(&input).is_err());

        input.reps = 5;
        input.weight = 0.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_convert_result() {
        let result = calculate(&test_input()).unwrap();
        let kg = result.convert_to(WeightUnit::Kilograms);
        assert_eq!(kg.unit, WeightUnit::Kilograms);
        assert!(approx_eq(kg.one_rep_max, 262.5 * 0.453592, 1e-9));
        assert_eq!(kg.table.rows.len(), result.table.rows.len());

        let back = kg.convert_to(WeightUnit::Pounds);
        assert!(approx_eq(back.one_rep_max, 262.5, 1e-6));
    }

    #[test]
    fn test_serialization() {
        let input = test_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: OneRepMaxInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);

        let defaults: OneRepMaxInput = serde_json::from_str(r#"{"weight": 100.0, "reps": 3}"#).unwrap();
        assert_eq!(defaults.unit, WeightUnit::Pounds);
        assert_eq!(defaults.mode, TableMode::RepMaxLadder);
    }
}
