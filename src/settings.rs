use serde::Deserialize;

use crate::format::{format_with_decimals, DEFAULT_DECIMALS};

/// Display settings, read from a TOML file by the command-line driver
///
/// ```toml
/// decimals = 3
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Decimal places for results that are not whole numbers
    pub decimals: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl Settings {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Builds the settings from an optional config file text, then applies
    /// the command-line override for `decimals`
    pub fn resolve(config: Option<&str>, decimals: Option<usize>) -> Result<Self, toml::de::Error> {
        let mut settings = match config {
            Some(text) => Settings::from_toml(text)?,
            None => Settings::default(),
        };
        if let Some(d) = decimals {
            settings.decimals = d;
        }
        Ok(settings)
    }

    pub fn format(&self, result: f64) -> String {
        format_with_decimals(result, self.decimals)
    }
}
