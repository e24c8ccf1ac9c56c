//! # Amount in Words
//!
//! Spells a rupee amount in English using the Indian numbering scale.
//!
//! ## Indian vs International Grouping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  12,34,56,789                                                           │
//! │   │   │  │  └── hundreds  : "Seven Hundred Eighty Nine"                 │
//! │   │   │  └───── thousand  : "Fifty Six Thousand"                        │
//! │   │   └──────── lakh      : "Thirty Four Lakh"        (10^5)            │
//! │   └──────────── crore     : "Twelve Crore"            (10^7)            │
//! │                                                                         │
//! │  International would say "One Hundred Twenty Three Million ..."        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Crore is the largest named unit; a crore count of 100 or more is itself
//! spelled recursively ("One Lakh Crore").
//!
//! The result always ends in "Rupees Only", including for one rupee
//! ("One Rupees Only"). Printed invoices already carry that wording, so it
//! is kept as is.

use crate::money::Money;

const ONES: [&str; 20] = [
    "",
    "One",
    "Two",
    "Three",
    "Four",
    "Five",
    "Six",
    "Seven",
    "Eight",
    "Nine",
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const CRORE: u128 = 10_000_000;
const LAKH: u128 = 100_000;
const THOUSAND: u128 = 1_000;

const SUFFIX: &str = "Rupees Only";

/// Converts a whole rupee amount to words.
///
/// Negative amounts are spelled by magnitude: `-5` reads "Five Rupees Only".
///
/// ```rust
/// use gst_core::words::amount_in_words;
///
/// assert_eq!(amount_in_words(0), "Zero Rupees Only");
/// assert_eq!(amount_in_words(236), "Two Hundred Thirty Six Rupees Only");
/// assert_eq!(amount_in_words(100_000), "One Lakh Rupees Only");
/// ```
pub fn amount_in_words(amount: i64) -> String {
    words_for(u128::from(amount.unsigned_abs()))
}

/// Converts a money amount to words after rounding it to whole rupees.
///
/// Used as the display fallback when a preview has no precomputed words.
pub fn money_in_words(amount: Money) -> String {
    // Rounded, so `whole_rupees` only fails past u128::MAX, which Decimal
    // cannot reach.
    let rupees = amount.round_to_rupee().whole_rupees().unwrap_or(0);
    words_for(rupees)
}

fn words_for(n: u128) -> String {
    if n == 0 {
        return format!("Zero {}", SUFFIX);
    }
    format!("{} {}", spell(n), SUFFIX)
}

/// Spells `n > 0` without the currency suffix.
fn spell(n: u128) -> String {
    let mut parts: Vec<String> = Vec::new();

    let crores = n / CRORE;
    let mut rest = n % CRORE;
    if crores > 0 {
        parts.push(format!("{} Crore", spell(crores)));
    }

    let lakhs = rest / LAKH;
    rest %= LAKH;
    if lakhs > 0 {
        parts.push(format!("{} Lakh", below_hundred(lakhs)));
    }

    let thousands = rest / THOUSAND;
    rest %= THOUSAND;
    if thousands > 0 {
        parts.push(format!("{} Thousand", below_hundred(thousands)));
    }

    let hundreds = rest / 100;
    rest %= 100;
    if hundreds > 0 {
        parts.push(format!("{} Hundred", ONES[hundreds as usize]));
    }

    if rest > 0 {
        parts.push(below_hundred(rest));
    }

    parts.join(" ")
}

/// Spells `1..=99`.
fn below_hundred(n: u128) -> String {
    let n = n as usize;
    if n < 20 {
        return ONES[n].to_string();
    }
    let (tens, ones) = (n / 10, n % 10);
    if ones == 0 {
        TENS[tens].to_string()
    } else {
        format!("{} {}", TENS[tens], ONES[ones])
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_zero() {
        assert_eq!(amount_in_words(0), "Zero Rupees Only");
    }

    #[test]
    fn test_irregular_ones() {
        assert_eq!(amount_in_words(1), "One Rupees Only");
        assert_eq!(amount_in_words(13), "Thirteen Rupees Only");
        assert_eq!(amount_in_words(19), "Nineteen Rupees Only");
    }

    #[test]
    fn test_tens() {
        assert_eq!(amount_in_words(20), "Twenty Rupees Only");
        assert_eq!(amount_in_words(21), "Twenty One Rupees Only");
        assert_eq!(amount_in_words(99), "Ninety Nine Rupees Only");
    }

    #[test]
    fn test_scale_words() {
        assert_eq!(amount_in_words(100), "One Hundred Rupees Only");
        assert_eq!(amount_in_words(1_000), "One Thousand Rupees Only");
        assert_eq!(amount_in_words(100_000), "One Lakh Rupees Only");
        assert_eq!(amount_in_words(10_000_000), "One Crore Rupees Only");
    }

    #[test]
    fn test_composite_amounts() {
        assert_eq!(amount_in_words(236), "Two Hundred Thirty Six Rupees Only");
        assert_eq!(amount_in_words(118), "One Hundred Eighteen Rupees Only");
        assert_eq!(
            amount_in_words(1_01_010),
            "One Lakh One Thousand Ten Rupees Only"
        );
        assert_eq!(
            amount_in_words(12_34_56_789),
            "Twelve Crore Thirty Four Lakh Fifty Six Thousand Seven Hundred Eighty Nine Rupees Only"
        );
        assert_eq!(
            amount_in_words(99_99_999),
            "Ninety Nine Lakh Ninety Nine Thousand Nine Hundred Ninety Nine Rupees Only"
        );
    }

    #[test]
    fn test_crore_count_spelled_recursively() {
        // 1,00,000 crore
        assert_eq!(
            amount_in_words(1_000_000_000_000),
            "One Lakh Crore Rupees Only"
        );
        assert_eq!(
            amount_in_words(1_05_00_00_000),
            "One Hundred Five Crore Rupees Only"
        );
    }

    #[test]
    fn test_negative_uses_magnitude() {
        assert_eq!(amount_in_words(-21), "Twenty One Rupees Only");
        // i64::MIN has no positive i64 counterpart
        assert!(amount_in_words(i64::MIN).starts_with("Ninety Two Thousand Two Hundred Thirty Three Crore"));
    }

    #[test]
    fn test_money_in_words_rounds_first() {
        let raw = Money::from_decimal(Decimal::from_str("117.9882").unwrap());
        assert_eq!(money_in_words(raw), "One Hundred Eighteen Rupees Only");
        let half = Money::from_decimal(Decimal::from_str("0.5").unwrap());
        assert_eq!(money_in_words(half), "One Rupees Only");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: every non-zero amount reads as words joined by single
        /// spaces and ends with the currency suffix.
        #[test]
        fn words_are_single_spaced(n in 1i64..1_000_000_000_000i64) {
            let words = amount_in_words(n);
            prop_assert!(words.ends_with(" Rupees Only"));
            prop_assert!(!words.contains("  "));
            prop_assert!(!words.starts_with(' '));
            prop_assert!(!words.contains("Zero"));
        }

        /// Property: sign does not change the spelling.
        #[test]
        fn sign_is_ignored(n in 0i64..i64::MAX) {
            prop_assert_eq!(amount_in_words(n), amount_in_words(-n));
        }
    }
}
