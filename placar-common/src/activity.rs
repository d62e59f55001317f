//! Activity statistics
//!
//! A simpler consumer of the tokenizer/record-builder pair: frequency
//! counting over the activity sheet's first column, no ranking.

use std::collections::HashMap;

use serde::Serialize;

use crate::sheet::Record;

/// Occurrence count for one distinct value of the tallied column.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityCount {
    pub label: String,
    pub count: u64,
}

/// Tally non-empty values of the first header's column.
///
/// Output is ordered by count descending, first-seen order breaking ties.
pub fn tally(records: &[Record], headers: &[String]) -> Vec<ActivityCount> {
    let Some(column) = headers.first() else {
        return Vec::new();
    };

    let mut counts: Vec<ActivityCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let value = record.get(column).map(String::as_str).unwrap_or("");
        if value.is_empty() {
            continue;
        }
        match index.get(value) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                index.insert(value.to_string(), counts.len());
                counts.push(ActivityCount {
                    label: value.to_string(),
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count)); // stable: ties keep first-seen order
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::{build_records, tokenize};

    #[test]
    fn counts_first_column_values() {
        let (records, headers) =
            build_records(&tokenize("atividade,data\ncorrida,seg\nmusculacao,ter\ncorrida,qua"));
        let counts = tally(&records, &headers);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].label, "corrida");
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].label, "musculacao");
        assert_eq!(counts[1].count, 1);
    }

    #[test]
    fn empty_values_are_not_counted() {
        let (records, headers) = build_records(&tokenize("atividade\ncorrida\n\n"));
        let counts = tally(&records, &headers);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].count, 1);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let (records, headers) = build_records(&tokenize("a\ny\nx\ny\nx"));
        let counts = tally(&records, &headers);
        assert_eq!(counts[0].label, "y");
        assert_eq!(counts[1].label, "x");
    }

    #[test]
    fn no_headers_no_counts() {
        assert!(tally(&[], &[]).is_empty());
    }
}
