//! Locale amount normalization.
//!
//! Exports write amounts with a decimal comma ("12,50", "-3,14 €").

/// Parse a decimal-comma amount. Commas become periods and surrounding
/// whitespace is dropped; no thousands separators are understood.
pub fn parse_decimal_comma(raw: &str) -> Option<f64> {
    let normalized = raw.replace(',', ".");
    let amount: f64 = normalized.trim().parse().ok()?;
    amount.is_finite().then_some(amount)
}

/// Like [`parse_decimal_comma`], additionally stripping a trailing `€`
/// suffix such as in "3,14 €".
pub fn parse_euro_amount(raw: &str) -> Option<f64> {
    let stripped = raw.trim_end().trim_end_matches('€');
    parse_decimal_comma(stripped)
}
