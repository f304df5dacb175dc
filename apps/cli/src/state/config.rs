//! # Configuration State
//!
//! Shell configuration loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOCKROOM_*`)
//! 2. Defaults (this file)
//!
//! A variable that is set but unreadable keeps the default and logs a
//! warning. Configuration is read-only after startup.

use serde::{Deserialize, Serialize};
use tracing::warn;

use stockroom_core::Money;

/// Shell configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shown in the startup banner
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Table for people, JSON for scripts
    pub output_format: OutputFormat,

    /// Load the demo parts and products at startup
    pub seed_demo_data: bool,

    /// Ask before `delete-part` / `delete-product`
    pub confirm_deletes: bool,

    /// Line editor prompt
    pub prompt: String,
}

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text columns
    #[default]
    Table,

    /// One pretty-printed JSON document per command
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Stockroom"
    /// - Currency: $
    /// - Output: table
    /// - Seed: off
    /// - Confirm deletes: on
    fn default() -> Self {
        ConfigState {
            store_name: "Stockroom".to_string(),
            currency_symbol: "$".to_string(),
            output_format: OutputFormat::Table,
            seed_demo_data: false,
            confirm_deletes: true,
            prompt: "stockroom> ".to_string(),
        }
    }
}

/// Reads `1/true/yes/on` and `0/false/no/off`.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOCKROOM_STORE_NAME`: Override store name
    /// - `STOCKROOM_CURRENCY_SYMBOL`: Override currency symbol
    /// - `STOCKROOM_OUTPUT`: `table` or `json`
    /// - `STOCKROOM_SEED`: Load demo data (`1/true/yes`)
    /// - `STOCKROOM_CONFIRM`: Disable delete confirmation with `0/false/no`
    /// - `STOCKROOM_PROMPT`: Override prompt text
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with a caller-supplied lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("STOCKROOM_STORE_NAME") {
            if store_name.trim().is_empty() {
                warn!("STOCKROOM_STORE_NAME is empty, keeping default");
            } else {
                config.store_name = store_name;
            }
        }

        if let Some(symbol) = lookup("STOCKROOM_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = lookup("STOCKROOM_OUTPUT") {
            match raw.parse() {
                Ok(format) => config.output_format = format,
                Err(e) => warn!(value = %raw, "STOCKROOM_OUTPUT ignored: {}", e),
            }
        }

        if let Some(raw) = lookup("STOCKROOM_SEED") {
            match parse_flag(&raw) {
                Some(flag) => config.seed_demo_data = flag,
                None => warn!(value = %raw, "STOCKROOM_SEED is not a yes/no value"),
            }
        }

        if let Some(raw) = lookup("STOCKROOM_CONFIRM") {
            match parse_flag(&raw) {
                Some(flag) => config.confirm_deletes = flag,
                None => warn!(value = %raw, "STOCKROOM_CONFIRM is not a yes/no value"),
            }
        }

        if let Some(prompt) = lookup("STOCKROOM_PROMPT") {
            config.prompt = prompt;
        }

        config
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        Money::from_cents(cents).format_with_symbol(&self.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ConfigState {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConfigState::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_env() {
        assert_eq!(config_from(&[]), ConfigState::default());
    }

    #[test]
    fn test_env_overrides() {
        let config = config_from(&[
            ("STOCKROOM_STORE_NAME", "Back Room"),
            ("STOCKROOM_CURRENCY_SYMBOL", "€"),
            ("STOCKROOM_OUTPUT", "JSON"),
            ("STOCKROOM_SEED", "yes"),
            ("STOCKROOM_CONFIRM", "0"),
            ("STOCKROOM_PROMPT", "> "),
        ]);
        assert_eq!(config.store_name, "Back Room");
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(config.seed_demo_data);
        assert!(!config.confirm_deletes);
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = config_from(&[
            ("STOCKROOM_STORE_NAME", "   "),
            ("STOCKROOM_OUTPUT", "xml"),
            ("STOCKROOM_SEED", "maybe"),
            ("STOCKROOM_CONFIRM", "sometimes"),
        ]);
        assert_eq!(config, ConfigState::default());
    }

    #[test]
    fn test_format_currency() {
        let mut config = ConfigState::default();
        assert_eq!(config.format_currency(1234), "$12.34");
        assert_eq!(config.format_currency(5), "$0.05");
        assert_eq!(config.format_currency(-1234), "-$12.34");

        config.currency_symbol = "£".to_string();
        assert_eq!(config.format_currency(100), "£1.00");
    }
}
