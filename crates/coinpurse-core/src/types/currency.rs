//! Currency descriptor with ISO 4217 presets.

use std::fmt;

/// Default number of fractional digits rendered for a currency.
pub const DEFAULT_DIGITS: u32 = 2;

/// A monetary unit: name, code, optional symbol and display precision.
///
/// Currencies compare structurally, so two independently built descriptors
/// with the same fields are the same currency. The code is conventionally an
/// ISO 4217 three-letter code but is not validated here.
///
/// # Example
///
/// ```rust
/// use coinpurse_core::types::Currency;
///
/// let usd = Currency::new("US Dollar", "USD").with_symbol("$");
/// assert_eq!(usd.to_string(), "USD ($)");
/// assert_eq!(usd, Currency::usd());
///
/// let yen = Currency::new("Japanese Yen", "JPY").with_digits(0);
/// assert_eq!(yen.to_string(), "JPY");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Currency {
    name: String,
    code: String,
    symbol: Option<String>,
    digits: u32,
}

impl Currency {
    /// Creates a currency with no symbol and two fractional digits.
    #[must_use]
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            symbol: None,
            digits: DEFAULT_DIGITS,
        }
    }

    /// Sets the display symbol.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Sets the number of fractional digits rendered.
    #[must_use]
    pub fn with_digits(mut self, digits: u32) -> Self {
        self.digits = digits;
        self
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the currency code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the symbol, treating an empty symbol as absent.
    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref().filter(|s| !s.is_empty())
    }

    /// Returns the number of fractional digits rendered.
    #[must_use]
    pub fn digits(&self) -> u32 {
        self.digits
    }

    /// Returns the currency with its code upper-cased.
    pub(crate) fn into_canonical(mut self) -> Self {
        self.code.make_ascii_uppercase();
        self
    }

    /// United States Dollar.
    #[must_use]
    pub fn usd() -> Self {
        Self::new("US Dollar", "USD").with_symbol("$")
    }

    /// Euro.
    #[must_use]
    pub fn eur() -> Self {
        Self::new("Euro", "EUR").with_symbol("€")
    }

    /// British Pound Sterling.
    #[must_use]
    pub fn gbp() -> Self {
        Self::new("British Pound Sterling", "GBP").with_symbol("£")
    }

    /// Japanese Yen. No minor unit.
    #[must_use]
    pub fn jpy() -> Self {
        Self::new("Japanese Yen", "JPY").with_symbol("¥").with_digits(0)
    }

    /// Swiss Franc. Conventionally written by code.
    #[must_use]
    pub fn chf() -> Self {
        Self::new("Swiss Franc", "CHF")
    }

    /// Canadian Dollar.
    #[must_use]
    pub fn cad() -> Self {
        Self::new("Canadian Dollar", "CAD").with_symbol("C$")
    }

    /// Australian Dollar.
    #[must_use]
    pub fn aud() -> Self {
        Self::new("Australian Dollar", "AUD").with_symbol("A$")
    }

    /// Indian Rupee.
    #[must_use]
    pub fn inr() -> Self {
        Self::new("Indian Rupee", "INR").with_symbol("₹")
    }

    /// All built-in currencies.
    #[must_use]
    pub fn builtins() -> Vec<Self> {
        vec![
            Self::usd(),
            Self::eur(),
            Self::gbp(),
            Self::jpy(),
            Self::chf(),
            Self::cad(),
            Self::aud(),
            Self::inr(),
        ]
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(symbol) => write!(f, "{} ({})", self.code, symbol),
            None => write!(f, "{}", self.code),
        }
    }
}
