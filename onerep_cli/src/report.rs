//! Rendering of calculation results for the terminal.

use serde::Serialize;

use onerep_core::calculations::{OneRepMaxInput, OneRepMaxResult};
use onerep_core::format::format_result;
use onerep_core::units::WeightUnit;

const RULE: &str = "═══════════════════════════════════════";

/// Everything printed for one calculation; serialized as-is for `--json`
#[derive(Debug, Serialize)]
pub struct Report {
    pub input: OneRepMaxInput,
    pub result: OneRepMaxResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted: Option<OneRepMaxResult>,
}

impl Report {
    pub fn new(input: OneRepMaxInput, result: OneRepMaxResult, convert_to: Option<WeightUnit>) -> Self {
        let converted = convert_to
            .filter(|unit| *unit != result.unit)
            .map(|unit| result.convert_to(unit));
        Report {
            input,
            result,
            converted,
        }
    }

    /// Human-readable table
    pub fn render(&self) -> String {
        let unit = self.result.unit.label();
        let mut lines = vec![
            RULE.to_string(),
            "  ONE-REP MAX".to_string(),
            RULE.to_string(),
            String::new(),
            format!(
                "  Set:  {} {} x {} reps",
                format_result(self.input.weight),
                unit,
                self.input.reps
            ),
            format!("  1RM:  {} {}", self.result.formatted_one_rep_max(), unit),
        ];

        if let Some(ref converted) = self.converted {
            lines.push(format!(
                "        = {} {}",
                converted.formatted_one_rep_max(),
                converted.unit.label()
            ));
        }

        lines.push(String::new());
        lines.push(format!("  {}:", self.result.table.mode.display_name()));
        for (label, value) in self.result.formatted_rows() {
            lines.push(format!("    {:<6}{:>8} {}", label, value, unit));
        }
        lines.push(String::new());
        lines.push(RULE.to_string());

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onerep_core::calculations::{calculate, TableMode};

    fn report(mode: TableMode, convert_to: Option<WeightUnit>) -> Report {
        let input = OneRepMaxInput {
            weight: 225.0,
            reps: 5,
            unit: WeightUnit::Pounds,
            mode,
        };
        let result = calculate(&input).unwrap();
        Report::new(input, result, convert_to)
    }

    #[test]
    fn test_render_percentages() {
        let text = report(TableMode::PercentageTable, None).render();
        assert!(text.contains("1RM:  262.5 LBS"));
        assert!(text.contains("Percentage table:"));
        assert!(text.contains("90%      236.3 LBS"));
    }

    #[test]
    fn test_render_ladder() {
        let text = report(TableMode::RepMaxLadder, None).render();
        assert!(text.contains("2RM"));
        assert!(text.contains("10RM"));
        assert!(!text.contains("= "));
    }

    #[test]
    fn test_converted() {
        let r = report(TableMode::RepMaxLadder, Some(WeightUnit::Kilograms));
        // 262.5 × 0.453592 = 119.0679
        assert!(r.render().contains("= 119.1 KG"));

        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["converted"]["unit"], "kg");
    }

    #[test]
    fn test_convert_to_same_unit_skipped() {
        let r = report(TableMode::RepMaxLadder, Some(WeightUnit::Pounds));
        assert!(r.converted.is_none());
        let json = serde_json::to_value(&r).unwrap();
        assert!(json.get("converted").is_none());
    }
}
