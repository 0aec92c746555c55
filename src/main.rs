// Datalex - Banking Data Dictionary Description Generator
// Copyright (c) 2026 Datalex Contributors
// Licensed under the MIT License

use clap::Parser;
use datalex::cli::{Cli, Commands};
use datalex::config::{load_or_default, LoggingConfig};
use datalex::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            1
        }
    };

    process::exit(exit_code);
}

async fn run(cli: Cli) -> anyhow::Result<i32> {
    match cli.command {
        // init and validate-config manage their own configuration handling
        Commands::Init(args) => {
            init_basic_logging(cli.log_level.as_deref())?;
            args.execute().await
        }
        Commands::ValidateConfig(args) => {
            init_basic_logging(cli.log_level.as_deref())?;
            args.execute(&cli.config).await
        }
        command => {
            let config = load_or_default(&cli.config)?;
            let log_level = cli
                .log_level
                .as_deref()
                .unwrap_or(&config.application.log_level);
            let _guard = init_logging(log_level, &config.logging)?;

            tracing::info!(
                version = env!("CARGO_PKG_VERSION"),
                config = %cli.config,
                "Datalex - Banking Data Dictionary Description Generator"
            );

            match command {
                Commands::Generate(args) => args.execute(&config).await,
                Commands::Batch(args) => args.execute(&config).await,
                Commands::Validate(args) => args.execute(&config).await,
                Commands::Review(args) => args.execute(&config).await,
                Commands::Export(args) => args.execute(&config).await,
                Commands::Samples(args) => args.execute(&config).await,
                Commands::Init(_) | Commands::ValidateConfig(_) => {
                    unreachable!("handled above")
                }
            }
        }
    }
}

fn init_basic_logging(level: Option<&str>) -> anyhow::Result<()> {
    let config = LoggingConfig::default();
    init_logging(level.unwrap_or("info"), &config)?;
    Ok(())
}
