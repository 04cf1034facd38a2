//! # Strength Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`one_rep_max`] - Epley one-rep-max estimate and its inverse
//! - [`table`] - Rep-max ladder and percentage table derived from an estimate

pub mod one_rep_max;
pub mod table;

// Re-export commonly used types
pub use one_rep_max::{
    calculate, estimate_one_rep_max, weight_at_percentage, weight_at_reps, OneRepMaxInput,
    OneRepMaxResult,
};
pub use table::{DerivedRow, DerivedTable, TableMode};
