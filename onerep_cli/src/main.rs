//! # OneRep CLI Application
//!
//! Terminal interface for the one-rep-max calculator.
//!
//! ```bash
//! # Rep-max ladder for 225 lbs x 5
//! onerep_cli --weight 225 --reps 5
//!
//! # Percentage table in kilograms, as JSON
//! onerep_cli -w 100 -r 3 --unit kg --mode percentages --json
//!
//! # Prompt for anything not given on the command line
//! onerep_cli
//! ```

mod report;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use onerep_core::calculations::{calculate, TableMode};
use onerep_core::form::CalculatorForm;
use onerep_core::units::WeightUnit;
use onerep_core::CalcResult;

use crate::report::Report;

/// One-rep-max calculator (Epley formula).
#[derive(Parser, Debug)]
#[command(name = "onerep_cli")]
#[command(about = "Estimate a one-rep max and derive a rep-max ladder or percentage table")]
#[command(version)]
struct Args {
    /// Weight lifted for the set. Prompted for when omitted.
    #[arg(short, long, allow_hyphen_values = true)]
    weight: Option<String>,

    /// Repetitions completed (1-50). Prompted for when omitted.
    #[arg(short, long, allow_hyphen_values = true)]
    reps: Option<String>,

    /// Unit of the weight: lbs or kg.
    /// Can also be set via ONEREP_UNIT environment variable.
    #[arg(short, long, env = "ONEREP_UNIT", default_value = "lbs")]
    unit: WeightUnit,

    /// Derived table: ladder (2RM-10RM) or percentages (70/80/90%).
    /// Can also be set via ONEREP_MODE environment variable.
    #[arg(short, long, env = "ONEREP_MODE", default_value = "ladder")]
    mode: TableMode,

    /// Also show the results converted to this unit
    #[arg(long, value_name = "UNIT")]
    convert_to: Option<WeightUnit>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn prompt_field(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }

    input.trim().to_string()
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Pre-check the fields once and calculate from that input.
fn build_report(form: &CalculatorForm, convert_to: Option<WeightUnit>) -> CalcResult<Report> {
    let input = form.input()?;
    let result = calculate(&input)?;
    Ok(Report::new(input, result, convert_to))
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);
    debug!(?args, "parsed arguments");

    let mut form = CalculatorForm::new(args.unit, args.mode);
    let unit_label = args.unit.label();
    form.weight = args
        .weight
        .unwrap_or_else(|| prompt_field(&format!("Enter weight ({}): ", unit_label)));
    form.reps = args
        .reps
        .unwrap_or_else(|| prompt_field("Enter reps (1-50): "));

    let outcome = build_report(&form, args.convert_to);

    match outcome {
        Ok(report) => {
            info!(one_rep_max = report.result.one_rep_max, "calculation complete");
            if args.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                println!();
                println!("{}", report.render());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_units_and_mode() {
        let args = Args::try_parse_from([
            "onerep_cli", "-w", "100", "-r", "3", "--unit", "kg", "--mode", "percentages",
            "--convert-to", "lbs",
        ])
        .unwrap();
        assert_eq!(args.unit, WeightUnit::Kilograms);
        assert_eq!(args.mode, TableMode::PercentageTable);
        assert_eq!(args.convert_to, Some(WeightUnit::Pounds));
        assert_eq!(args.weight.as_deref(), Some("100"));
    }

    #[test]
    fn test_unknown_unit_rejected() {
        assert!(Args::try_parse_from(["onerep_cli", "--unit", "stone"]).is_err());
    }

    #[test]
    fn test_build_report() {
        let mut form = CalculatorForm::new(WeightUnit::Pounds, TableMode::PercentageTable);
        form.weight = "225".to_string();
        form.reps = "5".to_string();

        let report = build_report(&form, Some(WeightUnit::Kilograms)).unwrap();
        assert_eq!(report.input.weight, 225.0);
        assert_eq!(report.input.reps, 5);
        assert_eq!(report.result.formatted_one_rep_max(), "262.5");
        assert_eq!(report.converted.unwrap().unit, WeightUnit::Kilograms);
    }

    #[test]
    fn test_build_report_rejects_missing_reps() {
        let mut form = CalculatorForm::default();
        form.weight = "225".to_string();
        let err = build_report(&form, None).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_negative_reps_reach_precheck() {
        let args = Args::try_parse_from(["onerep_cli", "-w", "100", "-r", "-3"]).unwrap();
        assert_eq!(args.reps.as_deref(), Some("-3"));
    }
}
