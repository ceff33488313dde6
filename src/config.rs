/// Configuration resolution module
///
/// This module handles:
/// - Resolving the response locale (flag, environment, default)
/// - Loading the resource table (built-in plus optional overrides)
/// - Fixing the reference instant for record ages
use crate::cli::{CliArgs, ReportCommand};
use crate::locale::{FALLBACK_LOCALE, ResourceTable};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use std::env;
use std::path::PathBuf;

/// Environment variable consulted when `--locale` is not given
pub const LOCALE_ENV: &str = "STOCKBOARD_LOCALE";

/// Fully resolved, immutable settings for one run
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub data: PathBuf,
    pub locale: String,
    pub resources: ResourceTable,
    pub now: DateTime<Utc>,
    pub max_len: usize,
    pub command: ReportCommand,
}

/// Build a complete ReportConfig from CLI arguments
///
/// Everything is resolved up front so rendering never touches the
/// environment or the filesystem for settings.
pub fn build_report_config(args: &CliArgs) -> Result<ReportConfig, String> {
    debug!("Building report config from CLI args");

    let locale = resolve_locale(args.locale.as_deref(), env::var(LOCALE_ENV).ok().as_deref());
    let resources = resolve_resources(args.strings.as_ref())?;
    if !resources.has_locale(&locale) {
        warn!("No strings for locale '{}', falling back to '{}'", locale, FALLBACK_LOCALE);
    }
    let now = resolve_now(args.now.as_deref())?;

    debug!("Locale {}, reference time {}, budget {} chars", locale, now, args.max_len);

    Ok(ReportConfig {
        data: args.data.clone(),
        locale,
        resources,
        now,
        max_len: args.max_len,
        command: args.command.clone(),
    })
}

/// Pick the locale: explicit flag, then environment, then the fallback
pub fn resolve_locale(flag: Option<&str>, env_value: Option<&str>) -> String {
    flag.or(env_value)
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(FALLBACK_LOCALE)
        .to_string()
}

/// Built-in strings, overlaid with an explicit file or the user's config file
fn resolve_resources(explicit: Option<&PathBuf>) -> Result<ResourceTable, String> {
    let builtin = ResourceTable::builtin();

    if let Some(path) = explicit {
        return Ok(builtin.with_overrides(ResourceTable::load(path)?));
    }

    if let Some(path) = default_strings_path()
        && path.exists()
    {
        debug!("Using resource overrides from {:?}", path);
        return Ok(builtin.with_overrides(ResourceTable::load(&path)?));
    }

    Ok(builtin)
}

/// Per-user resource overrides:
/// - Linux: ~/.config/stockboard/strings.toml
/// - macOS: ~/Library/Application Support/stockboard/strings.toml
/// - Windows: %APPDATA%/stockboard/strings.toml
pub fn default_strings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("stockboard").join("strings.toml"))
}

/// Parse `--now`, or take the current time
pub fn resolve_now(value: Option<&str>) -> Result<DateTime<Utc>, String> {
    match value {
        Some(text) => DateTime::parse_from_rfc3339(text)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|e| format!("Invalid --now timestamp '{}': {}", text, e)),
        None => Ok(Utc::now()),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
