//! Input readers: turn a workbook sheet or a CSV file into raw string rows.
//!
//! Both read the whole file into memory; nothing is streamed.

use std::fs::File;
use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};
use homebank_core::ConvertError;
use tracing::info;

use crate::types::SourceRow;

fn open_error(path: &Path, source: std::io::Error) -> ConvertError {
    ConvertError::FileOpen {
        path: path.to_path_buf(),
        source,
    }
}

fn parse_error(path: &Path, message: impl ToString) -> ConvertError {
    ConvertError::FileParse {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}

/// Read all rows of a `,`-separated file with standard quoting.
///
/// Rows may differ in width; field counts are checked by the mappers so the
/// offending line can be reported.
pub fn read_csv_rows(path: &Path) -> Result<Vec<SourceRow>, ConvertError> {
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| parse_error(path, e))?;
        let line = record.position().map_or(rows.len() + 1, |p| p.line() as usize);
        rows.push(SourceRow::new(line, record.iter()));
    }

    info!(path = %path.display(), rows = rows.len(), "read csv");
    Ok(rows)
}

/// Read all rows of one worksheet as display strings.
///
/// Picks `sheet` by name, or the first worksheet when `None`. Cells keep
/// their sheet column (leading empty columns are padded back in) and
/// trailing empty cells are dropped.
pub fn read_workbook_rows(path: &Path, sheet: Option<&str>) -> Result<Vec<SourceRow>, ConvertError> {
    // Probe separately so a missing/unreadable file is an open error, not a parse error
    File::open(path).map_err(|e| open_error(path, e))?;

    let mut workbook = open_workbook_auto(path).map_err(|e| parse_error(path, e))?;
    let range = match sheet {
        Some(name) => workbook
            .worksheet_range(name)
            .map_err(|e| parse_error(path, format!("sheet '{name}': {e}")))?,
        None => workbook
            .worksheet_range_at(0)
            .ok_or_else(|| parse_error(path, "workbook has no worksheets"))?
            .map_err(|e| parse_error(path, e))?,
    };

    let rows = sheet_rows(&range);
    info!(path = %path.display(), sheet = sheet.unwrap_or("<first>"), rows = rows.len(), "read workbook");
    Ok(rows)
}

fn sheet_rows(range: &Range<Data>) -> Vec<SourceRow> {
    let Some((first_row, first_col)) = range.start() else {
        return Vec::new();
    };

    range
        .rows()
        .enumerate()
        .map(|(i, cells)| {
            let mut fields: Vec<String> = std::iter::repeat_n(String::new(), first_col as usize)
                .chain(cells.iter().map(|cell| cell.to_string()))
                .collect();
            while fields.last().is_some_and(|f| f.is_empty()) {
                fields.pop();
            }
            SourceRow {
                line: first_row as usize + i + 1,
                fields,
            }
        })
        .collect()
}
