//! Command implementations. Each renders its output to a `String` so the
//! binary only decides where it goes.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use config_engine::{ConfigEngine, EngineConfig};
use estimate_service::{
    AgeInput, CostEstimator, EstimateError, EstimateRequest, EstimateResult, MatrixRow,
};
use rust_decimal::Decimal;

use crate::cli::{EstimateArgs, MatrixArgs};

pub const DEFAULT_CONFIG_FILE: &str = "medicost.yaml";

/// Load configuration from an explicit file, or the optional default file
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let engine = match path {
        Some(path) => ConfigEngine::new().with_file(path, true),
        None => ConfigEngine::new().with_file(DEFAULT_CONFIG_FILE, false),
    };
    engine.load().context("Failed to load configuration")
}

pub fn build_estimator(config: &EngineConfig) -> Result<CostEstimator> {
    config
        .build_estimator()
        .context("Failed to build estimator from pricing tables")
}

/// `medicost estimate`
pub fn estimate(estimator: &CostEstimator, args: &EstimateArgs) -> Result<String> {
    let request = EstimateRequest {
        age: args.age.clone().map(AgeInput::Text),
        insurance_type: args.insurance.clone(),
        department: args.department.clone(),
        procedure: args.procedure.clone(),
    };

    match estimator.try_estimate(&request) {
        Ok(result) if args.output.json => Ok(serde_json::to_string_pretty(&result)?),
        Ok(result) => render_estimate(&result),
        Err(EstimateError::MissingField(field)) if args.output.json => {
            tracing::debug!(%field, "Estimate request incomplete");
            Ok("null".to_string())
        }
        Err(EstimateError::MissingField(field)) => Ok(format!(
            "{} Provide --age, --insurance, --department and --procedure to see an estimate (missing {field}).",
            "ℹ".bright_blue()
        )),
        Err(err) => Err(err).context("Estimate rejected"),
    }
}

/// `medicost catalog`
pub fn catalog(estimator: &CostEstimator, json: bool) -> Result<String> {
    let tables = estimator.tables();
    if json {
        return Ok(serde_json::to_string_pretty(tables)?);
    }

    let mut out = String::new();
    writeln!(out, "{}", "Insurance types".bright_cyan().bold())?;
    for insurance in &tables.insurance {
        writeln!(
            out,
            "  {:<12} {:<24} covers {}%",
            insurance.code,
            insurance.label.as_deref().unwrap_or(""),
            (insurance.coverage_rate * Decimal::ONE_HUNDRED).normalize()
        )?;
    }

    writeln!(out, "\n{}", "Departments".bright_cyan().bold())?;
    for department in &tables.departments {
        writeln!(out, "  {:<12} x{}", department.name, department.multiplier.normalize())?;
    }

    writeln!(out, "\n{}", "Procedures".bright_cyan().bold())?;
    for procedure in &tables.procedures {
        writeln!(
            out,
            "  {:<15} {:>10}  {}",
            procedure.code,
            money(procedure.base_cost),
            procedure.length_of_stay
        )?;
    }

    if estimator.is_strict() {
        writeln!(out, "\n{}", "Strict catalog: unlisted values are rejected".yellow())?;
    }
    Ok(out)
}

/// `medicost matrix`
pub fn matrix(estimator: &CostEstimator, args: &MatrixArgs) -> Result<String> {
    let rows = estimator
        .estimate_matrix(args.age, &args.insurance)
        .context("Failed to estimate cost matrix")?;
    if args.output.json {
        return Ok(serde_json::to_string_pretty(&rows)?);
    }
    render_matrix(&rows)
}

/// `medicost config check`
pub fn config_check(config: &EngineConfig) -> Result<String> {
    let estimator = build_estimator(config)?;
    let tables = estimator.tables();

    let mut out = String::new();
    writeln!(out, "{} {}", "✓".bright_green(), "Configuration is valid".bright_green())?;
    writeln!(out, "  server:        {}:{}", config.server.host, config.server.port)?;
    writeln!(out, "  log level:     {}", config.logging.log_level)?;
    writeln!(out, "  procedures:    {}", tables.procedures.len())?;
    writeln!(out, "  departments:   {}", tables.departments.len())?;
    writeln!(out, "  insurance:     {}", tables.insurance.len())?;
    writeln!(out, "  strict catalog: {}", estimator.is_strict())?;
    Ok(out)
}

fn render_estimate(result: &EstimateResult) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{}", "Estimated visit cost".bright_cyan().bold())?;
    writeln!(out, "  Estimated cost:     {}", money(result.estimated_cost).bold())?;
    writeln!(out, "  Insurance coverage: {}", money(result.insurance_coverage).green())?;
    writeln!(out, "  Out of pocket:      {}", money(result.out_of_pocket).yellow())?;
    writeln!(out, "  Length of stay:     {}", result.length_of_stay)?;
    if !result.factors.is_empty() {
        writeln!(out, "  Factors:")?;
        for factor in &result.factors {
            writeln!(out, "    - {factor}")?;
        }
    }
    Ok(out)
}

fn render_matrix(rows: &[MatrixRow]) -> Result<String> {
    let mut out = String::new();
    writeln!(
        out,
        "{}",
        format!(
            "{:<12} {:<15} {:>12} {:>12} {:>12}",
            "Department", "Procedure", "Estimated", "Covered", "Patient"
        )
        .bright_cyan()
        .bold()
    )?;
    for row in rows {
        writeln!(
            out,
            "{:<12} {:<15} {:>12} {:>12} {:>12}",
            row.department,
            row.procedure,
            money(row.estimate.estimated_cost),
            money(row.estimate.insurance_coverage),
            money(row.estimate.out_of_pocket)
        )?;
    }
    Ok(out)
}

/// Dollars with thousands separators, e.g. `$25,000.00`
fn money(amount: Decimal) -> String {
    let cents = format!("{:.2}", amount.abs());
    let (whole, fraction) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
    format!("{sign}${grouped}.{fraction}")
}
