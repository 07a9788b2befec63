use crate::parsers::{barclaycard, moneywallet};

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Barclaycard card statement (XLSX)
    Barclaycard,
    /// MoneyWallet app export (CSV)
    Moneywallet,
}

impl SourceFormat {
    pub fn name(&self) -> &'static str {
        match self {
            SourceFormat::Barclaycard => "barclaycard",
            SourceFormat::Moneywallet => "moneywallet",
        }
    }

    /// Exact field sequence that precedes the data rows
    pub fn header(&self) -> &'static [&'static str] {
        match self {
            SourceFormat::Barclaycard => &barclaycard::BARCLAYCARD_HEADER,
            SourceFormat::Moneywallet => &moneywallet::MONEYWALLET_HEADER,
        }
    }
}

/// Raw row of string fields as read from the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    /// 1-based line (CSV) or sheet row (XLSX) the row starts on
    pub line: usize,
    pub fields: Vec<String>,
}

impl SourceRow {
    pub fn new<I, S>(line: usize, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            line,
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

impl AsRef<[String]> for SourceRow {
    fn as_ref(&self) -> &[String] {
        &self.fields
    }
}

/// Per-run knobs that are not part of the input file itself
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Worksheet to read; the first one when unset (XLSX only)
    pub sheet: Option<String>,
}
