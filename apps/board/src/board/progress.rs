//! Raid progress notation: `Kara=Cleared; SSC=3/6; TK=1/4`.
//!
//! Records are split on `;`, key and value on the first `=`. Anything that
//! does not yield a non-empty key and value is dropped. Parsing never fails.

use std::collections::BTreeMap;

/// Instance label → status label.
pub type ProgressMap = BTreeMap<String, String>;

const RECORD_SEPARATOR: char = ';';
const KEY_VALUE_SEPARATOR: char = '=';

pub fn parse_progress(text: &str) -> ProgressMap {
    let mut out = ProgressMap::new();

    for record in text.split(RECORD_SEPARATOR).map(str::trim) {
        let Some((key, value)) = record.split_once(KEY_VALUE_SEPARATOR) else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            continue;
        }
        out.insert(key.to_string(), value.to_string());
    }

    out
}

/// Writes a map back into the notation, e.g. to prefill an edit form.
pub fn format_progress(progress: &ProgressMap) -> String {
    progress
        .iter()
        .map(|(instance, status)| format!("{instance}{KEY_VALUE_SEPARATOR}{status}"))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> ProgressMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_trailing_separator() {
        assert_eq!(
            parse_progress("Kara=Cleared;SSC=3/6;"),
            map(&[("Kara", "Cleared"), ("SSC", "3/6")])
        );
    }

    #[test]
    fn test_record_without_equals_is_dropped() {
        assert_eq!(parse_progress("BadEntryNoEquals;A=1"), map(&[("A", "1")]));
    }

    #[test]
    fn test_first_equals_splits() {
        assert_eq!(parse_progress("A=1=2"), map(&[("A", "1=2")]));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(
            parse_progress("  A = 1 ; B =2"),
            map(&[("A", "1"), ("B", "2")])
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_progress("").is_empty());
        assert!(parse_progress("   \n ").is_empty());
    }

    #[test]
    fn test_last_duplicate_wins() {
        assert_eq!(parse_progress("A=1;A=2"), map(&[("A", "2")]));
    }

    #[test]
    fn test_empty_key_or_value_is_dropped() {
        assert!(parse_progress("=Cleared").is_empty());
        assert!(parse_progress(" = x ;Kara=").is_empty());
        assert!(parse_progress("Kara=   ").is_empty());
    }

    #[test]
    fn test_consecutive_separators() {
        assert_eq!(parse_progress(";;TK=2/4;;;"), map(&[("TK", "2/4")]));
    }

    #[test]
    fn test_format_reads_back() {
        let progress = map(&[("BT", "0/9"), ("Kara", "Cleared")]);
        assert_eq!(format_progress(&progress), "BT=0/9; Kara=Cleared");
        assert_eq!(parse_progress(&format_progress(&progress)), progress);
    }
}
