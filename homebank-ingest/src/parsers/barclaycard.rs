//! Barclaycard statement parser (XLSX export)
//!
//! The export has a few preamble rows, then:
//!   Referenznummer | Buchungsdatum | Buchungsdatum | Betrag | Beschreibung | ...
//!   BC-0001        | 05.01.2021    | 06.01.2021    | 3,14 € | Coffee       | ...
//!
//! The first "Buchungsdatum" column is really the transaction date.

use homebank_core::amount::parse_euro_amount;
use homebank_core::date::parse_german_date;
use homebank_core::{ConvertError, HomebankRecord, PaymentMethod};

use crate::types::SourceRow;

pub const BARCLAYCARD_HEADER: [&str; 14] = [
    "Referenznummer",
    "Buchungsdatum",
    "Buchungsdatum",
    "Betrag",
    "Beschreibung",
    "Typ",
    "Status",
    "Kartennummer",
    "Originalbetrag",
    "Mögliche Zahlpläne",
    "Land",
    "Name des Karteninhabers",
    "Kartennetzwerk",
    "Kontaktlose Bezahlung",
];

/// A single statement line. Everything is text in the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarclaycardRecord {
    pub transaction_date: String,
    pub booking_date: String,
    /// e.g. "3,14 €"
    pub value: String,
    pub description: String,
}

impl BarclaycardRecord {
    /// Pick the used columns out of a data row (needs at least 5 fields).
    pub fn from_row(row: &SourceRow) -> Result<Self, ConvertError> {
        match row.fields.as_slice() {
            [_reference, transaction_date, booking_date, value, description, ..] => Ok(Self {
                transaction_date: transaction_date.clone(),
                booking_date: booking_date.clone(),
                value: value.clone(),
                description: description.clone(),
            }),
            fields => Err(ConvertError::MalformedRow {
                line: row.line,
                expected: "at least 5",
                found: fields.len(),
            }),
        }
    }

    pub fn to_homebank(&self, line: usize) -> Result<HomebankRecord, ConvertError> {
        let date = parse_german_date(&self.transaction_date).map_err(|source| {
            ConvertError::DateParse {
                line,
                value: self.transaction_date.clone(),
                source,
            }
        })?;

        let amount = parse_euro_amount(&self.value).ok_or_else(|| ConvertError::AmountParse {
            line,
            value: self.value.clone(),
        })?;

        Ok(HomebankRecord::new(
            date,
            PaymentMethod::CreditCard,
            &self.description,
            amount,
        ))
    }
}

/// Convert one data row into a HomeBank record.
pub fn convert_row(row: &SourceRow) -> Result<HomebankRecord, ConvertError> {
    BarclaycardRecord::from_row(row)?.to_homebank(row.line)
}
