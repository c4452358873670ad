//! Error types for ledgerweb-parser

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpliceError {
    #[error("transaction index {index} out of range (ledger holds {count})")]
    IndexOutOfRange { index: usize, count: usize },
}
