//! Line-oriented ledger text engine
//!
//! The parser recovers transaction records (date, status, payee, postings)
//! from free-form ledger text, the formatter renders them back in canonical
//! layout, and the splice engine edits one transaction in place by line
//! range. Everything here is pure text transformation; file handling and
//! report delegation live in `ledgerweb-core`.

pub mod error;
pub mod format;
pub mod parser;
pub mod splice;
pub mod types;

pub use error::SpliceError;
pub use format::format_transaction;
pub use parser::parse_transactions;
pub use splice::{append_transaction, remove_transaction, replace_transaction};
pub use types::{Posting, Transaction};
