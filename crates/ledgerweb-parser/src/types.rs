//! Transaction and posting records recovered from ledger text.

use serde::{Deserialize, Serialize};

/// A single account line under a transaction.
///
/// Amounts are carried as raw text, `$` sign and all; nothing in the engine
/// interprets them numerically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    /// Full account name (e.g., "Expenses:Food")
    pub account: String,
    /// Raw amount text; empty means elided/inferred
    #[serde(default)]
    pub amount: String,
    /// Trailing comment, emitted after the amount when formatting
    #[serde(default)]
    pub comment: String,
}

/// One dated ledger entry with its postings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// Zero-based index of the header line in the source text
    #[serde(skip)]
    pub start_line: usize,
    /// Raw `YYYY/MM/DD` date text, not validated further
    pub date: String,
    /// Header carried a `*` marker
    pub cleared: bool,
    /// Header carried a `!` marker; mutually exclusive with `cleared`
    pub pending: bool,
    pub payee: String,
    /// Postings in file order
    pub postings: Vec<Posting>,
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_serializes_without_start_line() {
        let transaction = Transaction {
            start_line: 7,
            date: "2024/01/01".to_string(),
            cleared: true,
            pending: false,
            payee: "Grocery".to_string(),
            postings: vec![Posting {
                account: "Expenses:Food".to_string(),
                amount: "$50".to_string(),
                comment: String::new(),
            }],
        };

        let value = serde_json::to_value(&transaction).unwrap();
        assert!(value.get("startLine").is_none());
        assert!(value.get("start_line").is_none());
        assert_eq!(value["date"], "2024/01/01");
        assert_eq!(value["cleared"], true);
        assert_eq!(value["postings"][0]["account"], "Expenses:Food");
        assert_eq!(value["postings"][0]["comment"], "");
    }

    #[test]
    fn test_posting_deserializes_with_defaults() {
        let posting: Posting = serde_json::from_str(r#"{"account": "Assets:Checking"}"#).unwrap();
        assert_eq!(posting.account, "Assets:Checking");
        assert_eq!(posting.amount, "");
        assert_eq!(posting.comment, "");
    }
}
