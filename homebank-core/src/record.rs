//! HomeBank transaction records, the common output of every converter.
//!
//! Column layout follows the HomeBank CSV import format:
//! `date;payment;info;payee;memo;amount;category;tags`

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::date::ISO_DATE;

/// Payment column of a HomeBank transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    /// Anything that is not a card payment (code 0)
    Other,
    /// Credit card (code 1)
    CreditCard,
}

impl PaymentMethod {
    /// Numeric code written to the payment column
    pub fn code(&self) -> u8 {
        match self {
            PaymentMethod::Other => 0,
            PaymentMethod::CreditCard => 1,
        }
    }
}

impl Serialize for PaymentMethod {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_u8(self.code())
    }
}

fn serialize_date<S: Serializer>(date: &NaiveDate, ser: S) -> Result<S::Ok, S::Error> {
    ser.collect_str(&date.format(ISO_DATE))
}

/// Fixed-point, six fractional digits
fn serialize_amount<S: Serializer>(amount: &f64, ser: S) -> Result<S::Ok, S::Error> {
    ser.collect_str(&format_args!("{amount:.6}"))
}

/// A single HomeBank transaction line.
///
/// Field order is the column order on disk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomebankRecord {
    #[serde(serialize_with = "serialize_date")]
    pub date: NaiveDate,
    pub payment: PaymentMethod,
    pub info: String,
    pub payee: String,
    pub memo: String,
    /// Signed; negative = expense
    #[serde(serialize_with = "serialize_amount")]
    pub amount: f64,
    pub category: String,
    pub tags: String,
}

impl HomebankRecord {
    /// Create a record with empty payee, memo, category and tags.
    pub fn new(
        date: NaiveDate,
        payment: PaymentMethod,
        info: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            date,
            payment,
            info: info.into(),
            payee: String::new(),
            memo: String::new(),
            amount,
            category: String::new(),
            tags: String::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Returns true if this is an expense (negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }
}
