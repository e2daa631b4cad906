//! Configuration management for the vocabulary checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - Profile selection and profile directories

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Dataset checked when no path is given
pub const DEFAULT_DATA_PATH: &str = "data/grade9_words.json";

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Command-line arguments for the vocabulary checker
#[derive(Debug, Parser)]
#[command(name = "vocab-check")]
#[command(about = "Check a vocabulary word list for size, completeness and level")]
#[command(version)]
pub struct Args {
    /// Vocabulary JSON file to check
    #[arg(default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Profile to use, by name
    #[arg(long, help = "Profile name (e.g., 'grade9')")]
    pub profile: Option<String>,

    /// Load the profile from this TOML file instead
    #[arg(long, conflicts_with = "profile")]
    pub profile_file: Option<PathBuf>,

    /// Extra directory searched for profile files
    #[arg(long, help = "Directory containing *.vocab-profile.toml files")]
    pub profile_dir: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Where the active profile comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    /// Embedded default
    Default,
    Named(String),
    File(PathBuf),
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub profile: ProfileSource,
    /// Directories scanned for profile files, in load order
    pub profile_dirs: Vec<PathBuf>,
    pub format: OutputFormat,
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let profile = match (args.profile, args.profile_file) {
            (Some(_), Some(_)) => bail!("--profile and --profile-file are mutually exclusive"),
            (Some(name), None) => ProfileSource::Named(name),
            (None, Some(path)) => ProfileSource::File(path),
            (None, None) => ProfileSource::Default,
        };

        let mut profile_dirs = Vec::new();

        // User config directory first so an explicit directory can override it
        if let Some(config_dir) = dirs::config_dir() {
            profile_dirs.push(config_dir.join("vocab-check").join("profiles"));
        }

        if let Some(custom_dir) = args.profile_dir {
            profile_dirs.push(custom_dir);
        }

        Ok(Config {
            data_path: args.data,
            profile,
            profile_dirs,
            format: args.format,
            log_level: args.log_level,
        })
    }
}
