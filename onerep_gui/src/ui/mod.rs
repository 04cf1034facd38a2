//! UI module for OneRep GUI
//!
//! # Panel Structure
//! - `toolbar` - Title header with the active unit
//! - `input_panel` - Left panel: weight, reps, unit toggle, table mode, Calculate
//! - `results_panel` - Right panel: error message, 1RM, derived table
//! - `status_bar` - Bottom status messages

pub mod toolbar;
pub mod input_panel;
pub mod results_panel;
pub mod status_bar;
