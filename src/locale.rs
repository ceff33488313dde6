/// Localized resource strings
///
/// This module handles:
/// - Loading the resource table (built-in or from a TOML file)
/// - Resolving UI strings and item display names per locale
/// - Grouping integers with the locale's thousands separator
///
/// The table is built once at startup and only read afterwards, so it is
/// passed by shared reference to everything that renders text.
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Locale used when the requested one has no entry for a key
pub const FALLBACK_LOCALE: &str = "en";

const BUILTIN_STRINGS: &str = include_str!("../resources/strings.toml");

/// Strings for a single locale
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocaleStrings {
    #[serde(default)]
    pub thousands_separator: Option<String>,
    #[serde(default)]
    pub strings: HashMap<String, String>,
    #[serde(default)]
    pub items: HashMap<String, String>,
}

/// Immutable lookup table keyed by locale, then by resource key
#[derive(Debug, Clone, Default)]
pub struct ResourceTable {
    locales: HashMap<String, LocaleStrings>,
}

impl ResourceTable {
    /// The table compiled into the binary (English and German)
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN_STRINGS).unwrap_or_else(|e| {
            log::error!("Built-in resource table is invalid: {}", e);
            Self::default()
        })
    }

    /// Parse a resource table from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, String> {
        let raw: HashMap<String, LocaleStrings> =
            toml::from_str(text).map_err(|e| format!("Invalid resource table: {}", e))?;
        let locales = raw.into_iter().map(|(tag, strings)| (normalize_tag(&tag), strings)).collect();
        Ok(Self { locales })
    }

    /// Load a resource table from a TOML file
    pub fn load(path: &Path) -> Result<Self, String> {
        debug!("Loading resource table from {:?}", path);
        let text = fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        Self::from_toml_str(&text)
    }

    /// Layer `overrides` on top of this table; keys it defines win.
    pub fn with_overrides(mut self, overrides: ResourceTable) -> Self {
        for (tag, over) in overrides.locales {
            let entry = self.locales.entry(tag).or_default();
            if over.thousands_separator.is_some() {
                entry.thousands_separator = over.thousands_separator;
            }
            entry.strings.extend(over.strings);
            entry.items.extend(over.items);
        }
        self
    }

    /// Whether the table has any entry for this locale (or its language)
    pub fn has_locale(&self, locale: &str) -> bool {
        let full = normalize_tag(locale);
        let language = full.split('-').next().unwrap_or_default();
        self.locales.contains_key(&full) || self.locales.contains_key(language)
    }

    /// Resolve a UI string. Unknown keys come back unchanged.
    pub fn get_string(&self, key: &str, locale: &str) -> String {
        self.lookup(locale, |l| l.strings.get(key)).unwrap_or_else(|| key.to_string())
    }

    /// Resolve an item display name. Unknown keys come back unchanged.
    pub fn get_item(&self, key: &str, locale: &str) -> String {
        self.lookup(locale, |l| l.items.get(key)).unwrap_or_else(|| key.to_string())
    }

    /// Format an integer with the locale's thousands separator ("1,500")
    pub fn format_amount(&self, value: u128, locale: &str) -> String {
        let separator = self.lookup(locale, |l| l.thousands_separator.as_ref()).unwrap_or_else(|| ",".to_string());
        group_thousands(value, &separator)
    }

    fn lookup<'a, F>(&'a self, locale: &str, get: F) -> Option<String>
    where
        F: Fn(&'a LocaleStrings) -> Option<&'a String>,
    {
        candidates(locale).iter().filter_map(|tag| self.locales.get(tag)).find_map(|l| get(l)).cloned()
    }
}

/// Insert `separator` between every group of three digits
pub fn group_thousands(value: u128, separator: &str) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push_str(separator);
        }
        result.push(c);
    }
    result
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().replace('_', "-").to_lowercase()
}

/// Lookup order: full tag, bare language, fallback locale
fn candidates(locale: &str) -> Vec<String> {
    let full = normalize_tag(locale);
    let language = full.split('-').next().unwrap_or_default().to_string();
    let mut tags = vec![full, language, FALLBACK_LOCALE.to_string()];
    tags.dedup();
    tags
}

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;
