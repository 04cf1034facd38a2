//! # onerep_core - One-Rep-Max Calculation Engine
//!
//! `onerep_core` is the computational heart of OneRep. It estimates a
//! one-repetition maximum from a submaximal set with the Epley formula and
//! derives training tables from the estimate. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Explicit units**: The weight unit is a parameter, never global state
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use onerep_core::calculations::{calculate, OneRepMaxInput, TableMode};
//! use onerep_core::units::WeightUnit;
//!
//! let input = OneRepMaxInput {
//!     weight: 225.0,
//!     reps: 5,
//!     unit: WeightUnit::Pounds,
//!     mode: TableMode::RepMaxLadder,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.formatted_one_rep_max(), "262.5");
//!
//! // Serialize to JSON for display or transmission
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Epley estimate, inverse, and derived tables
//! - [`form`] - Front-end form state (fields, unit, mode, last result)
//! - [`input`] - Pre-check of raw text fields
//! - [`format`] - One-decimal result formatting
//! - [`units`] - Weight units and conversion
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod form;
pub mod format;
pub mod input;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{OneRepMaxInput, OneRepMaxResult, TableMode};
pub use errors::{CalcError, CalcResult};
pub use form::CalculatorForm;
pub use format::format_result;
pub use units::{convert_unit, WeightUnit};
