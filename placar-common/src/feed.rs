//! Media feed extraction
//!
//! The feed sheet is a flat list of media references in a `url` column;
//! no role inference is applied.

use crate::sheet::Record;

/// Cells this short are blank filler, not URLs.
const MIN_URL_LEN: usize = 6;

/// Collect usable media URLs from feed records, in row order.
pub fn media_urls(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .filter_map(|record| record.get("url"))
        .filter(|url| url.len() >= MIN_URL_LEN)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::{build_records, tokenize};

    #[test]
    fn keeps_usable_urls_in_row_order() {
        let (records, _) = build_records(&tokenize(
            "url,legenda\nhttps://a.example/1.jpg,um\n-,dois\nhttps://a.example/2.mp4,tres",
        ));
        assert_eq!(
            media_urls(&records),
            vec!["https://a.example/1.jpg", "https://a.example/2.mp4"]
        );
    }

    #[test]
    fn missing_url_column_yields_nothing() {
        let (records, _) = build_records(&tokenize("link\nhttps://a.example/1.jpg"));
        assert!(media_urls(&records).is_empty());
    }
}
