//! # Derived Tables
//!
//! The two training tables that can be derived from a one-rep max:
//!
//! - **Rep-max ladder**: 2RM through 10RM, by inverting the Epley formula
//! - **Percentage table**: 70%, 80% and 90% of the one-rep max
//!
//! Tables are rebuilt in full from the estimate every time.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

use super::one_rep_max::{weight_at_percentage, weight_at_reps};

/// Rep counts shown on the rep-max ladder
pub const LADDER_REPS: RangeInclusive<u32> = 2..=10;

/// Percentage tiers shown on the percentage table
pub const PERCENTAGE_TIERS: [u32; 3] = [70, 80, 90];

/// Which derived table a calculation produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableMode {
    /// Estimated weight for 2 through 10 reps
    #[default]
    RepMaxLadder,
    /// Weight at 70/80/90 percent of the one-rep max
    PercentageTable,
}

impl TableMode {
    /// All table modes for UI selection
    pub const ALL: [TableMode; 2] = [TableMode::RepMaxLadder, TableMode::PercentageTable];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            TableMode::RepMaxLadder => "Rep-max ladder",
            TableMode::PercentageTable => "Percentage table",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "ladder" | "rep_max_ladder" | "rep_max" | "reps" => Ok(TableMode::RepMaxLadder),
            "percentages" | "percentage" | "percentage_table" | "percent" | "pct" => {
                Ok(TableMode::PercentageTable)
            }
            _ => Err(CalcError::unknown_mode(s)),
        }
    }
}

impl fmt::Display for TableMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for TableMode {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}

/// One `(label, value)` entry of a derived table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedRow {
    /// "2RM".."10RM" or "70%".."90%"
    pub label: String,
    /// Weight, in the unit of the one-rep max it came from
    pub value: f64,
}

/// Ordered rows derived from a one-rep max
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedTable {
    pub mode: TableMode,
    pub rows: Vec<DerivedRow>,
}

impl DerivedTable {
    /// Build the table for `mode` from a one-rep max.
    pub fn build(one_rep_max: f64, mode: TableMode) -> Self {
        let rows = match mode {
            TableMode::RepMaxLadder => LADDER_REPS
                .map(|reps| DerivedRow {
                    label: format!("{}RM", reps),
                    value: weight_at_reps(one_rep_max, reps),
                })
                .collect(),
            TableMode::PercentageTable => PERCENTAGE_TIERS
                .iter()
                .map(|&pct| DerivedRow {
                    label: format!("{}%", pct),
                    value: weight_at_percentage(one_rep_max, f64::from(pct)),
                })
                .collect(),
        };
        DerivedTable { mode, rows }
    }

    /// Look up a row value by label
    pub fn get(&self, label: &str) -> Option<f64> {
        self.rows.iter().find(|row| row.label == label).map(|row| row.value)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format_result;

    #[test]
    fn test_ladder_order() {
        let table = DerivedTable::build(262.5, TableMode::RepMaxLadder);
        let labels: Vec<&str> = table.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            ["2RM", "3RM", "4RM", "5RM", "6RM", "7RM", "8RM", "9RM", "10RM"]
        );
    }

    #[test]
    fn test_ladder_descends() {
        let table = DerivedTable::build(200.0, TableMode::RepMaxLadder);
        for pair in table.rows.windows(2) {
            assert!(pair[0].value > pair[1].value);
        }
        // 10RM: 200 / (1 + 10/30) = 150
        assert!((table.get("10RM").unwrap() - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_percentage_table() {
        let table = DerivedTable::build(262.5, TableMode::PercentageTable);
        assert_eq!(table.len(), 3);
        assert_eq!(format_result(table.get("70%").unwrap()), "183.8");
        assert_eq!(format_result(table.get("80%").unwrap()), "210.0");
        assert_eq!(format_result(table.get("90%").unwrap()), "236.3");
        assert!(table.get("100%").is_none());
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("ladder".parse::<TableMode>().unwrap(), TableMode::RepMaxLadder);
        assert_eq!("rep-max-ladder".parse::<TableMode>().unwrap(), TableMode::RepMaxLadder);
        assert_eq!("Percentages".parse::<TableMode>().unwrap(), TableMode::PercentageTable);
        assert!("pyramid".parse::<TableMode>().is_err());
    }

    #[test]
    fn test_mode_serialization() {
        let json = serde_json::to_string(&TableMode::PercentageTable).unwrap();
        assert_eq!(json, "\"percentage_table\"");
    }
}
