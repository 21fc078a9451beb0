//! Command-line argument definitions for the `medicost` tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "medicost",
    version,
    about = "MediCost operations CLI - price patient visits and check configuration"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file; medicost.yaml is used if present
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Estimate the cost of a single visit
    Estimate(EstimateArgs),

    /// List supported insurance types, departments and procedures
    Catalog(OutputArgs),

    /// Estimate every department and procedure for one patient
    Matrix(MatrixArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Patient age in years (0-120)
    #[arg(long)]
    pub age: Option<String>,

    /// Insurance type, e.g. private, medicare, self-pay
    #[arg(long)]
    pub insurance: Option<String>,

    /// Hospital department, e.g. Cardiology
    #[arg(long)]
    pub department: Option<String>,

    /// Procedure code, e.g. consultation
    #[arg(long)]
    pub procedure: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct MatrixArgs {
    /// Patient age in years (0-120)
    #[arg(long)]
    pub age: i64,

    /// Insurance type applied to every row
    #[arg(long)]
    pub insurance: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OutputArgs {
    /// Print machine-readable JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Load and validate the configuration
    Check,
}
