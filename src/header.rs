//! Header normalization and column addressing.
//!
//! Headers are compared canonically everywhere: the same normalization is
//! applied to the fetched header row and to caller-declared column spec
//! keys, so incidental capitalization or whitespace in either source never
//! causes a mismatch.

use regex::Regex;

use crate::error::{Result, SheetError};

/// Columns addressable with a single letter (`A`..=`Z`).
const MAX_SINGLE_LETTER_COLUMNS: usize = 26;

/// Canonicalize raw header text: trim, lowercase, collapse each internal
/// whitespace run to a single underscore.
///
/// Total over any input and idempotent.
pub fn normalize_header(raw: &str) -> String {
    let re = Regex::new(r"\s+").unwrap();
    re.replace_all(raw.trim(), "_").to_lowercase()
}

/// Resolve a canonical header to its column letter within `headers`.
///
/// Addressing is capped at single-letter columns; `Z` (index 25) is the
/// last resolvable column and anything past it fails with
/// [`SheetError::ColumnRangeExceeded`] rather than silently extending to
/// multi-letter addresses.
pub fn column_letter(header: &str, headers: &[String]) -> Result<char> {
    let index = headers
        .iter()
        .position(|h| h == header)
        .ok_or_else(|| SheetError::UnknownHeader(header.to_string()))?;
    if index >= MAX_SINGLE_LETTER_COLUMNS {
        return Err(SheetError::ColumnRangeExceeded(index));
    }
    Ok((b'A' + index as u8) as char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_header("  Name  "), "name");
        assert_eq!(normalize_header("ACTIVE"), "active");
    }

    #[test]
    fn test_normalize_collapses_whitespace_runs() {
        assert_eq!(normalize_header("First  Name"), "first_name");
        assert_eq!(normalize_header(" Tag \t List "), "tag_list");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["  Foo  Bar ", "already_clean", "MIXED Case"] {
            let once = normalize_header(raw);
            assert_eq!(normalize_header(&once), once);
        }
    }

    #[test]
    fn test_normalize_total_over_empty_input() {
        assert_eq!(normalize_header(""), "");
        assert_eq!(normalize_header("   "), "");
    }

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_column_letter_by_position() {
        let hs = headers(&["name", "active", "tags"]);
        assert_eq!(column_letter("name", &hs).unwrap(), 'A');
        assert_eq!(column_letter("active", &hs).unwrap(), 'B');
        assert_eq!(column_letter("tags", &hs).unwrap(), 'C');
    }

    #[test]
    fn test_column_letter_unknown_header() {
        let hs = headers(&["name"]);
        let err = column_letter("missing", &hs).unwrap_err();
        assert!(matches!(err, SheetError::UnknownHeader(h) if h == "missing"));
    }

    #[test]
    fn test_column_letter_last_valid_is_z() {
        let names: Vec<String> = (0..27).map(|i| format!("c{i}")).collect();
        assert_eq!(column_letter("c25", &names).unwrap(), 'Z');
        let err = column_letter("c26", &names).unwrap_err();
        assert!(matches!(err, SheetError::ColumnRangeExceeded(26)));
    }
}
