//! fabgen CLI - network artifact compiler
//!
//! Usage: fabgen <COMMAND>
//!
//! Commands:
//!   init      Write a default fabgen.yaml
//!   render    Write the artifacts without running the toolchain
//!   crypto    Write crypto-config.yaml and run cryptogen
//!   channel   Write configtx.yaml and generateConfigTx.sh, then run the script
//!   generate  crypto, then channel

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::Level;

use fabgen::presentation::output::print_error;
use fabgen::presentation::{Cli, Commands, OutputFormat};

mod commands;

use commands::{cmd_init, cmd_pipeline, PipelineCommand};

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Init {
            dir,
            project_path,
            force,
        } => cmd_init(dir, project_path.as_deref(), *force, cli.json),
        Commands::Render { settings } => {
            cmd_pipeline(PipelineCommand::Render, settings, cli.json, cli.verbose)
        }
        Commands::Crypto { settings } => {
            cmd_pipeline(PipelineCommand::Crypto, settings, cli.json, cli.verbose)
        }
        Commands::Channel { settings } => {
            cmd_pipeline(PipelineCommand::Channel, settings, cli.json, cli.verbose)
        }
        Commands::Generate { settings } => {
            cmd_pipeline(PipelineCommand::Generate, settings, cli.json, cli.verbose)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            print_error(OutputFormat::from_json_flag(cli.json), &e);
            ExitCode::FAILURE
        }
    }
}
