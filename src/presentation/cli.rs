//! CLI Argument Parsing
//!
//! Global flags (`--json`, `--verbose`) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// fabgen - network artifact compiler for Fabric-style networks
#[derive(Parser, Debug)]
#[command(name = "fabgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Settings file selection shared by the pipeline commands
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Settings file (default: nearest fabgen.yaml in this or a parent directory)
    #[arg(short, long, value_name = "FILE")]
    pub settings: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default fabgen.yaml
    Init {
        /// Directory to write fabgen.yaml into
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Project path recorded in the settings (default: --dir)
        #[arg(long)]
        project_path: Option<PathBuf>,

        /// Overwrite an existing fabgen.yaml
        #[arg(short, long)]
        force: bool,
    },

    /// Write crypto-config.yaml, configtx.yaml and generateConfigTx.sh without running anything
    Render {
        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Write crypto-config.yaml and run cryptogen
    Crypto {
        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Write configtx.yaml and generateConfigTx.sh, then run the script
    Channel {
        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Run crypto, then channel
    Generate {
        #[command(flatten)]
        settings: SettingsArgs,
    },
}
