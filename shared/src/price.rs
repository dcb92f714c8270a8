//! Price normalization using rust_decimal
//!
//! Prices arrive as JSON numbers or as free text typed into a spreadsheet
//! ("12,50", "12.5", "€ 9"). Parsing never fails loudly: an unparseable
//! price renders as an empty string.

use crate::models::Scalar;
use rust_decimal::prelude::*;

/// Monetary values are displayed with 2 decimal places (half away from zero)
const DECIMAL_PLACES: u32 = 2;

/// Parse a raw price into a decimal, rounded to cents
pub fn parse_price(raw: &Scalar) -> Option<Decimal> {
    let value = match raw {
        Scalar::Number(n) => match n.as_i64() {
            Some(i) => Decimal::from(i),
            None => Decimal::from_f64(n.as_f64()?)?,
        },
        Scalar::Text(text) => parse_price_text(text)?,
    };
    Some(value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero))
}

fn parse_price_text(text: &str) -> Option<Decimal> {
    let cleaned: String = text
        .trim()
        .trim_matches(|c: char| c == '€' || c == '$' || c.is_whitespace())
        .to_string();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&normalize_separators(&cleaned)).ok()
}

/// Rewrite grouping and decimal marks into plain `1234.50` form.
///
/// With both marks present the last one is the decimal mark ("1.234,50",
/// "1,234.50"). A single mark that repeats groups thousands ("1.234.567");
/// otherwise it is the decimal mark ("12,50").
fn normalize_separators(text: &str) -> String {
    let decimal_mark = match (text.rfind('.'), text.rfind(',')) {
        (Some(dot), Some(comma)) => Some(if dot > comma { '.' } else { ',' }),
        (Some(_), None) if text.matches('.').count() == 1 => Some('.'),
        (None, Some(_)) if text.matches(',').count() == 1 => Some(','),
        _ => None,
    };
    text.chars()
        .filter_map(|c| match c {
            '.' | ',' if Some(c) == decimal_mark => Some('.'),
            '.' | ',' => None,
            other => Some(other),
        })
        .collect()
}

/// Format a decimal amount with exactly two decimals ("12.50")
pub fn format_amount(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    // `rescale` cannot add cents at the 28-digit limit; `{:.2}` pads instead
    format!("{:.2}", rounded)
}

/// Format a raw price for display; empty when absent or unparseable
pub fn format_price(raw: Option<&Scalar>) -> String {
    raw.and_then(parse_price).map(format_amount).unwrap_or_default()
}
