#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod helpers;
pub mod models;
pub mod output;

use anyhow::{Context, Result, anyhow};
use std::path::{Path, PathBuf};

use cli::{Cli, Commands, ComponentCommands, ConfigCommands};
use config::Theme;
use output::Output;

pub use helpers::{
    DEFAULT_MAX_EDIT_DISTANCE, find_closest_value, find_closest_value_within,
    find_string_ignoring_case,
};

pub const MANIFEST_TOML: &str = "swizzle.toml";
pub const MANIFEST_JSON: &str = "swizzle.json";

/// Finds a theme manifest by walking up from `start`.
/// `swizzle.toml` wins over `swizzle.json` in the same directory.
pub fn find_manifest_from(start: &Path) -> Option<PathBuf> {
    let mut dir = start;

    loop {
        for file_name in [MANIFEST_TOML, MANIFEST_JSON] {
            let candidate = dir.join(file_name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        dir = dir.parent()?;
    }
}

/// Finds a theme manifest by walking up from the current directory.
pub fn find_manifest() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_manifest_from(&current_dir)
}

fn load_theme(explicit: Option<&Path>) -> Result<Theme> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => find_manifest().ok_or_else(|| {
            anyhow!(
                "No theme manifest found. Create {MANIFEST_TOML} or {MANIFEST_JSON}, or pass --config."
            )
        })?,
    };

    tracing::debug!(path = %path.display(), "Using theme manifest");
    Theme::load(&path).with_context(|| format!("Failed to load theme from {}", path.display()))
}

fn run_config(config_cmd: ConfigCommands, theme: &Theme) -> Result<()> {
    match config_cmd {
        ConfigCommands::Check { json } => Output::new(json).config_checked(theme),
    }
}

fn run_component(component_cmd: ComponentCommands, theme: &Theme) -> Result<()> {
    match component_cmd {
        ComponentCommands::List { json } => {
            let components = commands::component::list(&theme.config);
            Output::new(json).component_list(theme, &components)
        }
        ComponentCommands::Show { name, action, json } => {
            let details = commands::component::show(&name, action.as_deref(), &theme.config)?;
            Output::new(json).component_details(&details)
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Suggest {
            query,
            candidates,
            max_distance,
            json,
        } => {
            let suggestion = commands::suggest::run(&query, &candidates, max_distance);
            Output::new(json).suggestion(&suggestion)
        }
        Commands::Config(config_cmd) => {
            let theme = load_theme(cli.config.as_deref())?;
            run_config(config_cmd, &theme)
        }
        Commands::Component(component_cmd) => {
            let theme = load_theme(cli.config.as_deref())?;
            run_component(component_cmd, &theme)
        }
    }
}
