use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use logger_redacted::LoggerConfig;

use ops_cli::{commands, Cli, Command, ConfigCommand};

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let logging = LoggerConfig {
        log_level: if cli.verbose { "debug" } else { "warn" }.to_string(),
        ..LoggerConfig::default()
    };
    if let Err(error) = logger_redacted::init(&logging) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    match run(&cli) {
        Ok(output) => println!("{output}"),
        Err(error) => {
            eprintln!("{} {error:#}", "error:".bright_red().bold());
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let config = commands::load_config(cli.config.as_deref())?;

    match &cli.command {
        Command::Config(ConfigCommand::Check) => commands::config_check(&config),
        Command::Estimate(args) => {
            commands::estimate(&commands::build_estimator(&config)?, args)
        }
        Command::Catalog(output) => {
            commands::catalog(&commands::build_estimator(&config)?, output.json)
        }
        Command::Matrix(args) => commands::matrix(&commands::build_estimator(&config)?, args),
    }
}
