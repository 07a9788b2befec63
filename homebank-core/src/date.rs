//! Date utilities for the source export formats.

use chrono::{NaiveDate, NaiveDateTime, ParseResult};

/// German short date, e.g. "05.01.2021"
pub const GERMAN_DATE: &str = "%d.%m.%Y";

/// Timestamp as written by MoneyWallet, e.g. "2021-01-05 12:30:00"
pub const WALLET_DATETIME: &str = "%Y-%m-%d %H:%M:%S";

/// HomeBank date column
pub const ISO_DATE: &str = "%Y-%m-%d";

/// Parse a "DD.MM.YYYY" date.
pub fn parse_german_date(s: &str) -> ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(s, GERMAN_DATE)
}

/// Parse a "YYYY-MM-DD HH:MM:SS" timestamp, keeping only the calendar date.
pub fn parse_wallet_datetime(s: &str) -> ParseResult<NaiveDate> {
    NaiveDateTime::parse_from_str(s, WALLET_DATETIME).map(|dt| dt.date())
}

/// Helper: format a date for the HomeBank date column.
pub fn to_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE).to_string()
}
