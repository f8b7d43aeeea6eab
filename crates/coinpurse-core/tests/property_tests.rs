//! Property-based tests for currency and money invariants.
//!
//! These tests verify key properties that should always hold:
//! - Currency equality is structural
//! - Construction round-trips into equality
//! - Add and sub are inverses for matching currencies
//! - Mismatched currencies always fail and never touch the operands
//! - Mul and div by the same nonzero scalar are inverses
//! - Display always shows exactly `digits` fractional digits

use coinpurse_core::prelude::*;
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// STRATEGIES
// =============================================================================

fn amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000i64, 0u32..=6)
        .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

type CurrencyParts = (&'static str, &'static str, Option<&'static str>, u32);

fn currency_parts() -> impl Strategy<Value = CurrencyParts> {
    (
        prop::sample::select(vec!["Dollar", "Euro", "Yen"]),
        prop::sample::select(vec!["USD", "EUR", "JPY"]),
        prop::option::of(prop::sample::select(vec!["$", "€", ""])),
        0u32..=4,
    )
}

fn build_currency((name, code, symbol, digits): CurrencyParts) -> Currency {
    let currency = Currency::new(name, code).with_digits(digits);
    match symbol {
        Some(symbol) => currency.with_symbol(symbol),
        None => currency,
    }
}

fn currency() -> impl Strategy<Value = Currency> {
    currency_parts().prop_map(build_currency)
}

fn money() -> impl Strategy<Value = Money> {
    (amount(), currency()).prop_map(|(amount, currency)| Money::new(amount, currency))
}

fn nonzero_scalar() -> impl Strategy<Value = i64> {
    prop_oneof![-1000i64..=-1, 1i64..=1000]
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn currency_equality_is_fieldwise(a in currency_parts(), b in currency_parts()) {
        let (ca, cb) = (build_currency(a), build_currency(b));
        prop_assert_eq!(ca == cb, a == b);
        prop_assert_eq!(ca == cb, cb == ca);
        prop_assert_eq!(&ca, &build_currency(a));
    }

    #[test]
    fn currency_equality_is_transitive(
        a in currency_parts(),
        b in currency_parts(),
        c in currency_parts(),
    ) {
        let (ca, cb, cc) = (build_currency(a), build_currency(b), build_currency(c));
        if ca == cb && cb == cc {
            prop_assert_eq!(ca, cc);
        }
    }

    #[test]
    fn construction_round_trips(m in money()) {
        prop_assert_eq!(Money::new(m.amount(), m.currency().clone()), m);
    }

    #[test]
    fn add_then_sub_is_identity(a in amount(), b in amount(), c in currency()) {
        let m1 = Money::new(a, c.clone());
        let m2 = Money::new(b, c);
        let back = m1.add(&m2).unwrap().sub(&m2).unwrap();
        prop_assert_eq!(back, m1);
    }

    #[test]
    fn mismatched_currencies_fail(m1 in money(), m2 in money()) {
        prop_assume!(m1.currency() != m2.currency());
        let (before1, before2) = (m1.clone(), m2.clone());

        prop_assert!(m1.add(&m2).unwrap_err().is_currency_mismatch());
        prop_assert!(m1.sub(&m2).unwrap_err().is_currency_mismatch());
        prop_assert_eq!(m1, before1);
        prop_assert_eq!(m2, before2);
    }

    #[test]
    fn mul_then_div_is_identity(m in money(), k in nonzero_scalar()) {
        let back = m.mul(k).unwrap().div(k).unwrap();
        prop_assert_eq!(back, m);
    }

    #[test]
    fn display_has_currency_digits(m in money()) {
        let text = m.to_string();
        let digits = m.currency().digits() as usize;
        match text.split_once('.') {
            Some((_, fraction)) => prop_assert_eq!(fraction.len(), digits),
            None => prop_assert_eq!(digits, 0),
        }
        prop_assert_eq!(format!("{:?}", m), format!("<Money {}>", text));
    }
}
