//! # Amount-to-Words Converter
//!
//! English long-form rendering of a monetary total: integer units as
//! "Rs.", fractional hundredths as "Paisa", joined with " and " when
//! both are present.
//!
//! ## Grouping
//! The integer part is grouped short-scale (thousand / million / billion),
//! NOT in the Indian lakh/crore convention the "Rs."/"Paisa" labels would
//! suggest. Product behavior is to keep the short-scale grouping as-is;
//! `test_grouping_is_short_scale_not_lakh_crore` pins it down so a future
//! change is a conscious one.
//!
//! ## Edge Cases
//! - Zero amount renders as "zero" with no currency suffix
//! - Zero units with non-zero hundredths omits the "Rs." clause
//! - Negative amounts prepend "negative "
//! - Hundredths round half-up to the nearest integer; 0.999 therefore
//!   renders "one hundred Paisa" (no carry into the units)
//! - Non-numeric text at the raw boundary yields the fixed sentinel
//!   [`INVALID_INPUT`] instead of failing

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Sentinel returned for non-numeric input at the raw-text boundary.
pub const INVALID_INPUT: &str = "Invalid input";

const ONES: [&str; 10] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];
const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Renders 1..=999 ("three hundred forty two"); empty string for 0.
fn under_one_thousand(mut num: u64) -> String {
    if num == 0 {
        return String::new();
    }
    let mut words = String::new();
    if num >= 100 {
        words.push_str(ONES[(num / 100) as usize]);
        words.push_str(" hundred ");
        num %= 100;
    }
    if num >= 20 {
        words.push_str(TENS[(num / 10) as usize]);
        words.push(' ');
        num %= 10;
    }
    if num > 0 {
        if num < 10 {
            words.push_str(ONES[num as usize]);
        } else {
            words.push_str(TEENS[(num - 10) as usize]);
        }
        words.push(' ');
    }
    words.trim_end().to_string()
}

/// Renders a non-negative integer with short-scale base-1000 grouping.
fn number_to_words(num: u128) -> String {
    if num == 0 {
        return "zero".to_string();
    }

    let billions = num / 1_000_000_000;
    let millions = (num % 1_000_000_000) / 1_000_000;
    let thousands = (num % 1_000_000) / 1_000;
    let remainder = (num % 1_000) as u64;

    let mut words = String::new();
    if billions > 0 {
        // Recurse so billions-of-billions stay renderable.
        words.push_str(&number_to_words(billions));
        words.push_str(" billion ");
    }
    if millions > 0 {
        words.push_str(&under_one_thousand(millions as u64));
        words.push_str(" million ");
    }
    if thousands > 0 {
        words.push_str(&under_one_thousand(thousands as u64));
        words.push_str(" thousand ");
    }
    if remainder > 0 {
        words.push_str(&under_one_thousand(remainder));
    }

    words.trim_end().to_string()
}

/// Renders a monetary amount as English words.
///
/// ## Example
/// ```rust
/// use billform_core::words::amount_to_words;
/// use rust_decimal::Decimal;
///
/// let total: Decimal = "1234.50".parse().unwrap();
/// assert_eq!(
///     amount_to_words(total),
///     "one thousand two hundred thirty four Rs. and fifty Paisa"
/// );
/// ```
pub fn amount_to_words(amount: Decimal) -> String {
    let negative = amount.is_sign_negative() && !amount.is_zero();
    let abs = amount.abs();

    let units = abs.trunc();
    // Decimal's magnitude ceiling (< 8e28) always fits u128.
    let units_int = units.to_u128().unwrap_or_default();
    let hundredths = ((abs - units) * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u128()
        .unwrap_or_default();

    if units_int == 0 && hundredths == 0 {
        return "zero".to_string();
    }

    let mut words = String::new();
    if units_int > 0 {
        words.push_str(&number_to_words(units_int));
        words.push_str(" Rs.");
    }
    if hundredths > 0 {
        if units_int > 0 {
            words.push_str(" and ");
        }
        words.push_str(&number_to_words(hundredths));
        words.push_str(" Paisa");
    }
    if negative {
        words.insert_str(0, "negative ");
    }

    words
}

/// Raw-text boundary: parses and renders, or returns [`INVALID_INPUT`]
/// for anything that is not a number. Locally recoverable by design -
/// the caller presents the sentinel, nothing fails.
pub fn amount_text_to_words(raw: &str) -> String {
    match raw.trim().parse::<Decimal>() {
        Ok(amount) => amount_to_words(amount),
        Err(_) => INVALID_INPUT.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
