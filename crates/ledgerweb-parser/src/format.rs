//! Canonical transaction rendering
//!
//! The formatter is the write-side counterpart of the parser: edits never
//! copy original text, they regenerate it from the record.

use crate::types::Transaction;

/// Column the amount is padded out to, counted from the start of the account.
const AMOUNT_COLUMN: usize = 50;

/// Render a transaction in canonical layout.
///
/// Header is `date marker payee`; each posting is indented two spaces, with
/// a non-empty amount padded to [`AMOUNT_COLUMN`] (accounts wider than that
/// keep a two-space gap) and a non-empty comment appended as `; text`.
/// Every line ends with a newline.
pub fn format_transaction(transaction: &Transaction) -> String {
    let marker = if transaction.cleared {
        "* "
    } else if transaction.pending {
        "! "
    } else {
        ""
    };
    let mut out = format!("{} {}{}\n", transaction.date, marker, transaction.payee);

    for posting in &transaction.postings {
        out.push_str("  ");
        out.push_str(&posting.account);
        if !posting.amount.is_empty() {
            let padding = AMOUNT_COLUMN.saturating_sub(posting.account.len()).max(2);
            out.extend(std::iter::repeat(' ').take(padding));
            out.push_str(&posting.amount);
        }
        if !posting.comment.is_empty() {
            out.push_str("  ; ");
            out.push_str(&posting.comment);
        }
        out.push('\n');
    }

    out
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_transactions;
    use crate::types::Posting;

    fn posting(account: &str, amount: &str) -> Posting {
        Posting {
            account: account.to_string(),
            amount: amount.to_string(),
            comment: String::new(),
        }
    }

    #[test]
    fn test_header_markers() {
        let mut tx = Transaction {
            date: "2024/03/05".to_string(),
            payee: "Shop".to_string(),
            cleared: true,
            ..Default::default()
        };
        assert_eq!(format_transaction(&tx), "2024/03/05 * Shop\n");

        tx.cleared = false;
        tx.pending = true;
        assert_eq!(format_transaction(&tx), "2024/03/05 ! Shop\n");

        tx.pending = false;
        assert_eq!(format_transaction(&tx), "2024/03/05 Shop\n");
    }

    #[test]
    fn test_amount_column_alignment() {
        let tx = Transaction {
            date: "2024/03/05".to_string(),
            payee: "Shop".to_string(),
            postings: vec![posting("Expenses:Food", "$50")],
            ..Default::default()
        };
        let expected = format!("2024/03/05 Shop\n  Expenses:Food{}$50\n", " ".repeat(37));
        assert_eq!(format_transaction(&tx), expected);
    }

    #[test]
    fn test_wide_account_keeps_two_space_gap() {
        let account = "Expenses:Some:Very:Deeply:Nested:Category:Name:Extra";
        let tx = Transaction {
            date: "2024/03/05".to_string(),
            payee: "Shop".to_string(),
            postings: vec![posting(account, "$1")],
            ..Default::default()
        };
        let rendered = format_transaction(&tx);
        assert!(rendered.contains(&format!("  {}  $1\n", account)));
    }

    #[test]
    fn test_comment_rendered_after_amount() {
        let tx = Transaction {
            date: "2024/03/05".to_string(),
            payee: "Shop".to_string(),
            postings: vec![Posting {
                account: "Expenses:Food".to_string(),
                amount: "$50".to_string(),
                comment: "lunch".to_string(),
            }],
            ..Default::default()
        };
        assert!(format_transaction(&tx).ends_with("$50  ; lunch\n"));
    }

    #[test]
    fn test_posting_without_amount_has_no_padding() {
        let tx = Transaction {
            date: "2024/03/05".to_string(),
            payee: "Shop".to_string(),
            postings: vec![posting("Assets:Checking", "")],
            ..Default::default()
        };
        assert_eq!(format_transaction(&tx), "2024/03/05 Shop\n  Assets:Checking\n");
    }

    #[test]
    fn test_format_parse_round_trip() {
        let tx = Transaction {
            start_line: 0,
            date: "2024/05/06".to_string(),
            cleared: true,
            pending: false,
            payee: "Hardware Store".to_string(),
            postings: vec![
                posting("Expenses:Home", "$132.50"),
                posting("Assets:Checking", ""),
            ],
        };

        let reparsed = parse_transactions(&format_transaction(&tx));
        assert_eq!(reparsed.len(), 1);
        let got = &reparsed[0];
        assert_eq!(got.date, tx.date);
        assert_eq!(got.cleared, tx.cleared);
        assert_eq!(got.pending, tx.pending);
        assert_eq!(got.payee, tx.payee);
        assert_eq!(got.postings, tx.postings);
    }

    #[test]
    fn test_round_trip_drops_posting_comments() {
        // format emits the comment, but the parser truncates the amount at
        // the `;` and never fills `comment` back in.
        let tx = Transaction {
            date: "2024/05/06".to_string(),
            payee: "Shop".to_string(),
            postings: vec![Posting {
                account: "Expenses:Misc".to_string(),
                amount: "$5".to_string(),
                comment: "receipt #12".to_string(),
            }],
            ..Default::default()
        };

        let got = &parse_transactions(&format_transaction(&tx))[0];
        assert_eq!(got.postings[0].amount, "$5");
        assert_eq!(got.postings[0].comment, "");
    }
}
