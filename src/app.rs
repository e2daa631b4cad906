use anyhow::{anyhow, Context, Result};
use std::io::Write;

use crate::config::{Config, OutputFormat, ProfileSource};
use crate::profile::{defaults, Profile, ProfileRegistry};
use crate::report;
use crate::validation::{validate_vocabulary, ValidationReport};
use crate::vocabulary::load_entries;

/// Parse arguments, check the dataset and print the report to stdout
pub fn run() -> Result<bool> {
    let config = Config::from_args_and_env()?;
    init_logging(&config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let report = run_with_config(&config, &mut out)?;
    Ok(report.completed())
}

/// `RUST_LOG` wins over `--log-level`
fn init_logging(config: &Config) {
    let env = env_logger::Env::default().default_filter_or(config.log_level.as_str());
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Check the dataset named by `config`, writing the report to `out`
pub fn run_with_config<W: Write>(config: &Config, out: &mut W) -> Result<ValidationReport> {
    let profile = resolve_profile(config)?;
    log::info!(
        "Using profile '{}' ({})",
        profile.name,
        profile.version.as_deref().unwrap_or("unversioned")
    );
    if let Some(description) = &profile.description {
        log::debug!("Profile description: {}", description);
    }

    let entries = load_entries(&config.data_path)
        .with_context(|| format!("Could not load vocabulary from {:?}", config.data_path))?;

    let report = validate_vocabulary(&entries, &profile);
    if !report.is_valid() {
        log::info!("{} finding(s) reported", report.findings().len());
    }

    match config.format {
        OutputFormat::Text => report::write_text(out, &report, &profile)?,
        OutputFormat::Json => writeln!(out, "{}", report::render_json(&report)?)?,
    }

    Ok(report)
}

/// Pick the profile the config asks for
pub fn resolve_profile(config: &Config) -> Result<Profile> {
    if let ProfileSource::File(path) = &config.profile {
        return Profile::from_file(path).context("Could not load profile file");
    }

    let mut registry = ProfileRegistry::with_embedded();
    for dir in &config.profile_dirs {
        registry.load_dir(dir);
    }

    let name = match &config.profile {
        ProfileSource::Named(name) => name.as_str(),
        _ => defaults::PROFILE_NAME,
    };
    registry.get_profile(name).cloned().map_err(|e| {
        anyhow!(
            "{} (available: {})",
            e,
            registry.list_profiles().join(", ")
        )
    })
}
