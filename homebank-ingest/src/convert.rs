//! End-to-end conversion: read the export, locate the header, map every data
//! row and write the HomeBank CSV.
//!
//! A single bad row fails the whole run. The output file is only created
//! once every row has converted.

use std::path::Path;

use homebank_core::{ConvertError, HomebankRecord, find_header, write_file};
use tracing::{debug, info};

use crate::parsers::{barclaycard, moneywallet};
use crate::readers::{read_csv_rows, read_workbook_rows};
use crate::types::{ConvertOptions, SourceFormat, SourceRow};

/// Map the rows following the header, in input order.
pub fn convert_rows(
    rows: &[SourceRow],
    format: SourceFormat,
) -> Result<Vec<HomebankRecord>, ConvertError> {
    let header = find_header(rows, format.header()).ok_or(ConvertError::MissingHeader {
        format: format.name(),
    })?;
    info!(format = format.name(), line = rows[header].line, "header found");

    rows[header + 1..]
        .iter()
        .map(|row| {
            debug!(line = row.line, "processing row");
            match format {
                SourceFormat::Barclaycard => barclaycard::convert_row(row),
                SourceFormat::Moneywallet => moneywallet::convert_row(row),
            }
        })
        .collect()
}

/// Convert `infile` to `outfile`, returning the number of records written.
pub fn convert_file(
    format: SourceFormat,
    infile: &Path,
    outfile: &Path,
    options: &ConvertOptions,
) -> Result<usize, ConvertError> {
    info!(
        format = format.name(),
        infile = %infile.display(),
        outfile = %outfile.display(),
        "converting"
    );

    let rows = match format {
        SourceFormat::Barclaycard => read_workbook_rows(infile, options.sheet.as_deref())?,
        SourceFormat::Moneywallet => read_csv_rows(infile)?,
    };
    let records = convert_rows(&rows, format)?;
    write_file(outfile, &records)?;

    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use homebank_core::PaymentMethod;
    use std::fs;
    use std::io::Write;
    use std::path::PathBuf;

    fn fixture(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .unwrap()
            .join("testdata")
            .join(name)
    }

    fn wallet_rows() -> Vec<SourceRow> {
        vec![
            SourceRow::new(1, ["Export"]),
            SourceRow::new(2, ["Cash", "EUR", "Food", "not a date", "nope", "ignored"]),
            SourceRow::new(3, moneywallet::MONEYWALLET_HEADER),
            SourceRow::new(4, ["Cash", "EUR", "Food", "2021-01-05 12:30:00", "12,50", "Lunch"]),
            SourceRow::new(5, ["Giro", "EUR", "Rent", "2021-02-01 00:00:00", "-800", ""]),
        ]
    }

    #[test]
    fn test_rows_before_header_are_skipped() {
        let records = convert_rows(&wallet_rows(), SourceFormat::Moneywallet).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].info, "Lunch");
        assert_eq!(records[1].category, "Rent");
        assert_eq!(records[1].amount, -800.0);
    }

    #[test]
    fn test_missing_header_fails_for_both_formats() {
        let rows = vec![SourceRow::new(1, ["a", "b"])];
        for format in [SourceFormat::Barclaycard, SourceFormat::Moneywallet] {
            let err = convert_rows(&rows, format).unwrap_err();
            assert!(matches!(err, ConvertError::MissingHeader { .. }), "{format:?}");
        }
        let err = convert_rows(&[], SourceFormat::Moneywallet).unwrap_err();
        assert!(matches!(err, ConvertError::MissingHeader { format: "moneywallet" }));
    }

    #[test]
    fn test_header_only_gives_no_records() {
        let rows = vec![SourceRow::new(1, barclaycard::BARCLAYCARD_HEADER)];
        assert!(convert_rows(&rows, SourceFormat::Barclaycard).unwrap().is_empty());
    }

    #[test]
    fn test_first_bad_row_aborts() {
        let mut rows = wallet_rows();
        rows.push(SourceRow::new(6, ["Cash", "EUR", "Food", "2021-01-07 12:00:00", "abc", "x"]));
        rows.push(SourceRow::new(7, ["short"]));
        let err = convert_rows(&rows, SourceFormat::Moneywallet).unwrap_err();
        assert_eq!(err.line(), Some(6));
        assert!(matches!(err, ConvertError::AmountParse { .. }));
    }

    #[test]
    fn test_convert_moneywallet_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("homebank.csv");

        let n = convert_file(
            SourceFormat::Moneywallet,
            &fixture("moneywallet_export.csv"),
            &out,
            &ConvertOptions::default(),
        )
        .unwrap();

        assert_eq!(n, 4);
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            fs::read_to_string(fixture("moneywallet_expected.csv")).unwrap()
        );
    }

    #[test]
    fn test_convert_barclaycard_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("homebank.csv");

        let n = convert_file(
            SourceFormat::Barclaycard,
            &fixture("barclaycard_export.xlsx"),
            &out,
            &ConvertOptions::default(),
        )
        .unwrap();

        assert_eq!(n, 3);
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            fs::read_to_string(fixture("barclaycard_expected.csv")).unwrap()
        );
    }

    #[test]
    fn test_barclaycard_named_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("homebank.csv");
        let options = ConvertOptions {
            sheet: Some("Sheet1".to_string()),
        };

        let n = convert_file(
            SourceFormat::Barclaycard,
            &fixture("barclaycard_export.xlsx"),
            &out,
            &options,
        )
        .unwrap();
        assert_eq!(n, 3);
    }

    #[test]
    fn test_barclaycard_rows_are_card_payments() {
        let rows = read_workbook_rows(&fixture("barclaycard_export.xlsx"), None).unwrap();
        let records = convert_rows(&rows, SourceFormat::Barclaycard).unwrap();
        assert!(records.iter().all(|r| r.payment == PaymentMethod::CreditCard));
        assert!(records.iter().all(|r| r.category.is_empty()));
    }

    #[test]
    fn test_single_lunch_row_end_to_end() {
        let mut input = tempfile::NamedTempFile::new().unwrap();
        write!(
            input,
            "wallet,currency,category,datetime,money,description\n\
             Cash,EUR,Food,2021-01-05 12:30:00,\"12,50\",Lunch\n"
        )
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.csv");

        convert_file(SourceFormat::Moneywallet, input.path(), &out, &ConvertOptions::default())
            .unwrap();
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "2021-01-05;0;Lunch;;;12.500000;Food;\n"
        );
    }

    #[test]
    fn test_failure_leaves_output_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("homebank.csv");
        fs::write(&out, "previous run\n").unwrap();

        let err = convert_file(
            SourceFormat::Moneywallet,
            &fixture("moneywallet_bad_amount.csv"),
            &out,
            &ConvertOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::AmountParse { line: 3, .. }));
        assert_eq!(fs::read_to_string(&out).unwrap(), "previous run\n");

        let fresh = dir.path().join("never.csv");
        let err = convert_file(
            SourceFormat::Barclaycard,
            &fixture("barclaycard_bad_amount.xlsx"),
            &fresh,
            &ConvertOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::AmountParse { line: 5, .. }));
        assert!(!fresh.exists());
    }

    #[test]
    fn test_renamed_header_column_is_missing_header() {
        let dir = tempfile::tempdir().unwrap();
        let err = convert_file(
            SourceFormat::Barclaycard,
            &fixture("barclaycard_no_header.xlsx"),
            &dir.path().join("out.csv"),
            &ConvertOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::MissingHeader { format: "barclaycard" }));
    }

    #[test]
    fn test_conversion_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.csv");
        let second = dir.path().join("second.csv");
        let input = fixture("moneywallet_export.csv");

        convert_file(SourceFormat::Moneywallet, &input, &first, &ConvertOptions::default()).unwrap();
        convert_file(SourceFormat::Moneywallet, &input, &second, &ConvertOptions::default()).unwrap();
        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }
}
