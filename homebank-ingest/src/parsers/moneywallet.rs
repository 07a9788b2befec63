//! MoneyWallet CSV export parser
//!
//! Expected layout:
//!   wallet,currency,category,datetime,money,description
//!   Cash,EUR,Food,2021-01-05 12:30:00,"12,50",Lunch

use homebank_core::amount::parse_decimal_comma;
use homebank_core::date::parse_wallet_datetime;
use homebank_core::{ConvertError, HomebankRecord, PaymentMethod};

use crate::types::SourceRow;

pub const MONEYWALLET_HEADER: [&str; 6] = [
    "wallet",
    "currency",
    "category",
    "datetime",
    "money",
    "description",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneywalletRecord {
    pub wallet: String,
    pub currency: String,
    pub category: String,
    /// "YYYY-MM-DD HH:MM:SS"
    pub datetime: String,
    /// Decimal comma, e.g. "12,50"
    pub money: String,
    pub description: String,
}

impl MoneywalletRecord {
    pub fn from_row(row: &SourceRow) -> Result<Self, ConvertError> {
        match row.fields.as_slice() {
            [wallet, currency, category, datetime, money, description] => Ok(Self {
                wallet: wallet.clone(),
                currency: currency.clone(),
                category: category.clone(),
                datetime: datetime.clone(),
                money: money.clone(),
                description: description.clone(),
            }),
            fields => Err(ConvertError::MalformedRow {
                line: row.line,
                expected: "exactly 6",
                found: fields.len(),
            }),
        }
    }

    pub fn to_homebank(&self, line: usize) -> Result<HomebankRecord, ConvertError> {
        let date = parse_wallet_datetime(&self.datetime).map_err(|source| {
            ConvertError::DateParse {
                line,
                value: self.datetime.clone(),
                source,
            }
        })?;

        let amount = parse_decimal_comma(&self.money).ok_or_else(|| ConvertError::AmountParse {
            line,
            value: self.money.clone(),
        })?;

        Ok(
            HomebankRecord::new(date, PaymentMethod::Other, &self.description, amount)
                .with_category(&self.category),
        )
    }
}

pub fn convert_row(row: &SourceRow) -> Result<HomebankRecord, ConvertError> {
    MoneywalletRecord::from_row(row)?.to_homebank(row.line)
}
