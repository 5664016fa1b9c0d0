//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "netconfig")]
#[command(about = "Load a network configuration and look up network icons", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Path to a YAML configuration file (defaults to .netconfig/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Location of the network configuration document (overrides config)
    #[arg(short, long, global = true)]
    pub source: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Look up the icon of a network by name (case-insensitive)
    Icon {
        /// Network name
        name: String,
    },

    /// List all configured networks
    List,

    /// Show the settled provider state
    Status,
}
