use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::helpers::DEFAULT_MAX_EDIT_DISTANCE;

#[derive(Parser)]
#[command(name = "swz")]
#[command(about = "Resolve and inspect swizzlable theme components", long_about = None)]
pub struct Cli {
    /// Path to a theme manifest (swizzle.toml or swizzle.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Suggest the closest candidate for a name
    Suggest {
        /// The name to look up
        query: String,

        /// Known valid names, in priority order
        candidates: Vec<String>,

        /// Largest edit distance still accepted as a suggestion
        #[arg(long, default_value_t = DEFAULT_MAX_EDIT_DISTANCE)]
        max_distance: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate the theme's swizzle config
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Inspect swizzlable components
    #[command(subcommand)]
    Component(ComponentCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Validate and print the normalized swizzle config
    Check {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum ComponentCommands {
    /// List components and their action statuses
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single component
    Show {
        /// Component name (case-insensitive)
        name: String,

        /// Only show this action (wrap or eject)
        #[arg(long)]
        action: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
