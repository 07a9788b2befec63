//! Header row detection.
//!
//! A row is the header only if it matches the expected template field for
//! field: same count, same order, byte-equal values.

/// True if `row` is exactly `expected`.
pub fn is_header<S: AsRef<str>>(row: &[S], expected: &[&str]) -> bool {
    row.len() == expected.len()
        && row
            .iter()
            .zip(expected)
            .all(|(field, want)| field.as_ref() == *want)
}

/// Index of the first header row, if any.
pub fn find_header<R, S>(rows: &[R], expected: &[&str]) -> Option<usize>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    rows.iter().position(|row| is_header(row.as_ref(), expected))
}
