//! homebank-ingest: statement readers (XLSX/CSV), source-specific parsers and
//! the end-to-end conversion into HomeBank CSV.

pub mod convert;
pub mod parsers;
pub mod readers;
pub mod types;

pub use convert::{convert_file, convert_rows};
pub use types::{ConvertOptions, SourceFormat, SourceRow};
