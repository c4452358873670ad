//! Line-oriented transaction parser
//!
//! A single-pass scanner over ledger text. It keeps a zero-based line
//! counter and an accumulator for the transaction currently being collected;
//! a header line closes the open accumulator and starts a new one, indented
//! lines feed postings into it, and anything else is passed over.

use once_cell::sync::OnceCell;
use regex::Regex;

use crate::types::{Posting, Transaction};

/// Header line: date, optional status marker, payee.
fn header_regex() -> &'static Regex {
    static HEADER_PATTERN: OnceCell<Regex> = OnceCell::new();
    HEADER_PATTERN
        .get_or_init(|| Regex::new(r"^(\d{4}/\d{2}/\d{2})\s+(\*|\!)?\s*(.*)$").unwrap())
}

/// Parse ledger text into transactions, in file order.
///
/// Lines that fit no rule (stray text, postings before the first header)
/// are skipped rather than rejected; parsing never fails.
pub fn parse_transactions(content: &str) -> Vec<Transaction> {
    let mut transactions = Vec::new();
    let mut current: Option<Transaction> = None;

    for (line_no, raw) in content.lines().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(caps) = header_regex().captures(trimmed) {
            if let Some(done) = current.take() {
                transactions.push(done);
            }
            let marker = caps.get(2).map(|m| m.as_str());
            current = Some(Transaction {
                start_line: line_no,
                date: caps[1].to_string(),
                cleared: marker == Some("*"),
                pending: marker == Some("!"),
                payee: caps[3].to_string(),
                postings: Vec::new(),
            });
        } else if raw.starts_with(|c: char| c.is_whitespace()) {
            // Indented line: a posting or comment belonging to the open
            // transaction. Without one it is an orphan and is skipped.
            let Some(transaction) = current.as_mut() else {
                continue;
            };
            if trimmed.starts_with(';') {
                continue;
            }
            transaction.postings.push(split_posting(trimmed));
        }
    }

    if let Some(done) = current {
        transactions.push(done);
    }

    transactions
}

/// Split a trimmed posting line into account and amount.
///
/// The split point is the first `$` when it comes before the first run of
/// two or more consecutive whitespace characters (or when no such run
/// exists), otherwise the run itself. Anything from a `;` onward in the
/// amount part is dropped. With no split point the whole line is the
/// account and the amount is elided.
fn split_posting(line: &str) -> Posting {
    let dollar = line.find('$');

    let mut gap = None;
    let mut chars = line.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c.is_whitespace() {
            if let Some(&(_, next)) = chars.peek() {
                if next.is_whitespace() {
                    gap = Some(i);
                    break;
                }
            }
        }
    }

    let split = match (dollar, gap) {
        (Some(d), Some(g)) if d < g => Some(d),
        (Some(d), None) => Some(d),
        (_, Some(g)) => Some(g),
        (None, None) => None,
    };

    match split {
        Some(at) => {
            let rest = &line[at..];
            let amount = match rest.find(';') {
                Some(comment) => &rest[..comment],
                None => rest,
            };
            Posting {
                account: line[..at].trim().to_string(),
                amount: amount.trim().to_string(),
                comment: String::new(),
            }
        }
        None => Posting {
            account: line.to_string(),
            amount: String::new(),
            comment: String::new(),
        },
    }
}

// ==================== Tests ====================
