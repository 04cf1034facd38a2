//! # Calculator Form
//!
//! The state a front end keeps between user actions: the two text fields,
//! the selected unit and table mode, and the last successful result.
//!
//! The unit is a field of the form and is passed explicitly into every
//! calculation. Nothing here is global.
//!
//! ## Example
//!
//! ```rust
//! use onerep_core::form::CalculatorForm;
//! use onerep_core::units::WeightUnit;
//!
//! let mut form = CalculatorForm::default();
//! form.weight = "100".to_string();
//! form.reps = "5".to_string();
//! form.submit().unwrap();
//!
//! form.change_unit(WeightUnit::Kilograms).unwrap();
//! assert_eq!(form.weight, "45.4");
//! assert_eq!(form.result.as_ref().unwrap().unit, WeightUnit::Kilograms);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::one_rep_max::{calculate, OneRepMaxInput, OneRepMaxResult};
use crate::calculations::table::TableMode;
use crate::errors::CalcResult;
use crate::format::format_result;
use crate::input::{parse_reps, parse_weight};
use crate::units::{convert_unit, WeightUnit};

/// Calculator form state owned by a front end
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorForm {
    /// Raw weight field text
    pub weight: String,

    /// Raw reps field text
    pub reps: String,

    /// Unit the weight field is expressed in
    pub unit: WeightUnit,

    /// Derived table to show
    pub mode: TableMode,

    /// Last successful calculation, if any
    pub result: Option<OneRepMaxResult>,
}

impl CalculatorForm {
    /// Create an empty form with the given unit and mode
    pub fn new(unit: WeightUnit, mode: TableMode) -> Self {
        CalculatorForm {
            unit,
            mode,
            ..Default::default()
        }
    }

    /// Pre-check the text fields and build an engine input.
    pub fn input(&self) -> CalcResult<OneRepMaxInput> {
        let weight = parse_weight(&self.weight)?;
        let reps = parse_reps(&self.reps)?;
        Ok(OneRepMaxInput {
            weight,
            reps,
            unit: self.unit,
            mode: self.mode,
        })
    }

    /// Run the calculation for the current fields.
    ///
    /// On failure the previous result is left untouched.
    pub fn submit(&mut self) -> CalcResult<&OneRepMaxResult> {
        let input = self.input()?;
        let result = calculate(&input)?;
        Ok(&*self.result.insert(result))
    }

    /// Switch the display unit.
    ///
    /// A numeric weight field is converted and rewritten to one decimal. If a
    /// result is showing, it is recalculated from the rewritten field, so an
    /// error here means the fields were edited into an invalid state since
    /// the last submit. The unit switch itself always happens.
    pub fn change_unit(&mut self, unit: WeightUnit) -> CalcResult<()> {
        if unit == self.unit {
            return Ok(());
        }

        if let Ok(weight) = parse_weight(&self.weight) {
            self.weight = format_result(convert_unit(weight, self.unit, unit));
        }

        debug!(from = self.unit.code(), to = unit.code(), weight = %self.weight, "changed unit");
        self.unit = unit;

        self.recalculate()
    }

    /// Switch the table mode, recalculating if a result is showing.
    pub fn set_mode(&mut self, mode: TableMode) -> CalcResult<()> {
        self.mode = mode;
        self.recalculate()
    }

    /// Whether a result is currently showing
    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    fn recalculate(&mut self) -> CalcResult<()> {
        if self.has_result() {
            self.submit()?;
        }
        Ok(())
    }
}
