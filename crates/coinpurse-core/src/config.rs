//! Currency table configuration.
//!
//! A currency table is a TOML document listing extra currencies on top of
//! (or instead of) the built-in ones:
//!
//! ```toml
//! include_defaults = true
//!
//! [[currency]]
//! name = "Bitcoin"
//! code = "BTC"
//! symbol = "₿"
//! digits = 8
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MoneyError, MoneyResult};
use crate::registry::CurrencyRegistry;
use crate::types::{Currency, DEFAULT_DIGITS};

/// Largest `digits` accepted for a configured currency.
///
/// This matches the largest scale a decimal amount can store. It is only
/// enforced when loading a currency table; `Currency::with_digits` accepts
/// any value and pads the display with zeros.
pub const MAX_DIGITS: u32 = 28;

/// Currency table configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Seed the registry with the built-in currencies
    #[serde(default = "default_true")]
    pub include_defaults: bool,

    /// Additional currency definitions
    #[serde(default, rename = "currency")]
    pub currencies: Vec<CurrencyEntry>,
}

/// One `[[currency]]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyEntry {
    /// Display name
    pub name: String,

    /// Three-letter code
    pub code: String,

    /// Display symbol
    #[serde(default)]
    pub symbol: Option<String>,

    /// Fractional digits rendered
    #[serde(default = "default_digits")]
    pub digits: u32,
}

fn default_true() -> bool {
    true
}

fn default_digits() -> u32 {
    DEFAULT_DIGITS
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            include_defaults: true,
            currencies: Vec::new(),
        }
    }
}

impl CurrencyEntry {
    /// Checks the entry and converts it into a [`Currency`] with an
    /// upper-cased code.
    pub fn to_currency(&self) -> MoneyResult<Currency> {
        let code = self.code.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(MoneyError::invalid_currency(
                &self.code,
                "code must be three ASCII letters",
            ));
        }
        if self.name.trim().is_empty() {
            return Err(MoneyError::invalid_currency(code, "name is empty"));
        }
        if self.digits > MAX_DIGITS {
            return Err(MoneyError::invalid_currency(
                code,
                format!("digits {} exceeds maximum of {}", self.digits, MAX_DIGITS),
            ));
        }

        let mut currency =
            Currency::new(self.name.trim(), code.to_ascii_uppercase()).with_digits(self.digits);
        if let Some(symbol) = &self.symbol {
            currency = currency.with_symbol(symbol.as_str());
        }
        Ok(currency)
    }
}

impl CurrencyConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> MoneyResult<Self> {
        toml::from_str(content).map_err(|e| MoneyError::config_error(e.to_string()))
    }

    /// Loads a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> MoneyResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            MoneyError::config_error(format!("cannot read {}: {}", path.display(), e))
        })?;
        log::debug!("loading currency table from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Builds a registry from the configuration.
    ///
    /// Entries override built-ins with the same code. A code listed twice is
    /// accepted with a warning and the later entry wins.
    pub fn into_registry(self) -> MoneyResult<CurrencyRegistry> {
        let mut registry = if self.include_defaults {
            CurrencyRegistry::with_defaults()
        } else {
            CurrencyRegistry::new()
        };

        let mut seen = HashSet::new();
        for entry in &self.currencies {
            let currency = entry.to_currency()?;
            let code = currency.code().to_string();
            if registry.register(currency).is_some() {
                if seen.contains(&code) {
                    log::warn!("currency {} defined more than once, keeping last", code);
                } else {
                    log::debug!("currency {} overrides built-in definition", code);
                }
            }
            seen.insert(code);
        }

        log::debug!("currency registry ready with {} entries", registry.len());
        Ok(registry)
    }
}
