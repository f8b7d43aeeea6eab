//! Loading currency tables from TOML files.

use coinpurse_core::prelude::*;
use rust_decimal_macros::dec;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/currencies.toml");

#[test]
fn load_fixture_file() {
    let config = CurrencyConfig::from_file(FIXTURE).unwrap();
    assert!(config.include_defaults);
    assert_eq!(config.currencies.len(), 3);
}

#[test]
fn fixture_registry_contents() {
    let registry = CurrencyConfig::from_file(FIXTURE)
        .unwrap()
        .into_registry()
        .unwrap();

    let btc = registry.require("btc").unwrap();
    assert_eq!(btc.name(), "Bitcoin");
    assert_eq!(btc.to_string(), "BTC (₿)");

    let bhd = registry.require("BHD").unwrap();
    assert_eq!(bhd.code(), "BHD");
    assert_eq!(bhd.digits(), 3);

    // The table replaces the built-in yen, dropping its symbol.
    let jpy = registry.require("JPY").unwrap();
    assert_eq!(jpy.symbol(), None);
    assert_ne!(jpy, &Currency::jpy());

    assert!(registry.contains("USD"));
    assert_eq!(registry.len(), Currency::builtins().len() + 2);
}

#[test]
fn fixture_amounts_render_with_configured_digits() {
    let registry = CurrencyConfig::from_file(FIXTURE)
        .unwrap()
        .into_registry()
        .unwrap();

    assert_eq!(
        registry.money(dec!(0.5), "BTC").unwrap().to_string(),
        "₿0.50000000"
    );
    assert_eq!(
        registry.money(dec!(1.2345), "BHD").unwrap().to_string(),
        "BHD 1.235"
    );
    assert_eq!(
        registry.money(dec!(1234.5), "JPY").unwrap().to_string(),
        "JPY 1235"
    );
}

#[test]
fn unknown_code_after_loading() {
    let registry = CurrencyConfig::default().into_registry().unwrap();
    let err = registry.money(1, "BTC").unwrap_err();
    assert_eq!(err, MoneyError::unknown_currency("BTC"));
}

#[test]
fn invalid_entry_reports_code() {
    let err = CurrencyConfig::from_toml_str(
        r#"
        [[currency]]
        name = "Broken"
        code = "BR0"
        "#,
    )
    .unwrap()
    .into_registry()
    .unwrap_err();

    assert!(err.to_string().contains("BR0"));
}
