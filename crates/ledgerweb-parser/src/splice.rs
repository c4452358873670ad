//! Line-range splicing of single transactions
//!
//! Rewrites ledger text by replacing or removing exactly one transaction's
//! line range while keeping every other line byte-identical. A target's
//! range runs from its header line to the line before the next header (or
//! through end of file for the last transaction), so blank and comment
//! lines trailing the target are part of the range and do not survive a
//! splice.

use crate::error::SpliceError;
use crate::format::format_transaction;
use crate::parser::parse_transactions;
use crate::types::Transaction;

/// Replace the transaction at `index` (as-parsed file order) with `replacement`.
pub fn replace_transaction(
    content: &str,
    index: usize,
    replacement: &Transaction,
) -> Result<String, SpliceError> {
    splice(content, index, Some(replacement))
}

/// Remove the transaction at `index` (as-parsed file order).
pub fn remove_transaction(content: &str, index: usize) -> Result<String, SpliceError> {
    splice(content, index, None)
}

/// Append a transaction to the end of the ledger, preceded by a blank line.
pub fn append_transaction(content: &str, transaction: &Transaction) -> String {
    format!("{}\n{}", content, format_transaction(transaction))
}

fn splice(
    content: &str,
    index: usize,
    replacement: Option<&Transaction>,
) -> Result<String, SpliceError> {
    let transactions = parse_transactions(content);
    let count = transactions.len();
    let target = transactions
        .get(index)
        .ok_or(SpliceError::IndexOutOfRange { index, count })?;

    let start_line = target.start_line;
    // One line before the next header, or through end of file for the last.
    let end_line = transactions.get(index + 1).map(|next| next.start_line - 1);

    let lines: Vec<&str> = content.lines().collect();
    let mut out = String::new();
    for line in &lines[..start_line] {
        out.push_str(line);
        out.push('\n');
    }
    if let Some(transaction) = replacement {
        out.push_str(&format_transaction(transaction));
    }
    if let Some(end_line) = end_line {
        for line in &lines[end_line + 1..] {
            out.push_str(line);
            out.push('\n');
        }
    }

    Ok(out)
}

// ==================== Tests ====================
