//! Core ledger operations
//!
//! The [`Ledger`] manager fronts a single plain-text ledger file: every read
//! re-parses the file, every write re-reads it, splices the change in, and
//! rewrites it behind a backup copy. There is no in-memory transaction
//! store; the file is the only source of truth. Aggregate reports are
//! delegated to the external accounting tool (see [`reports`]).

pub mod error;
pub mod reports;

use ledgerweb_config::Config;
use ledgerweb_parser::{
    append_transaction, parse_transactions, remove_transaction, replace_transaction,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use error::{CoreError, CoreResult, ErrorCode, ErrorSeverity};
pub use ledgerweb_parser::{Posting, Transaction};
pub use reports::{AccountRow, BudgetRow, ClearedRow, RegisterRow};

// ==================== Write Payloads ====================

/// Incoming payload for create and update operations.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRequest {
    pub date: String,
    pub payee: String,
    #[serde(default, rename = "isCleared")]
    pub is_cleared: bool,
    #[serde(default)]
    pub postings: Vec<PostingRequest>,
}

/// One posting in a write payload.
#[derive(Debug, Clone, Deserialize)]
pub struct PostingRequest {
    pub account: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub comment: String,
}

impl TransactionRequest {
    /// Check required fields before any file mutation.
    pub fn validate(&self) -> CoreResult<()> {
        if self.date.trim().is_empty() {
            return Err(CoreError::Validation {
                message: "missing required field: date".to_string(),
            });
        }
        if self.payee.trim().is_empty() {
            return Err(CoreError::Validation {
                message: "missing required field: payee".to_string(),
            });
        }
        if self.postings.is_empty() {
            return Err(CoreError::Validation {
                message: "transaction must have at least one posting".to_string(),
            });
        }
        for posting in &self.postings {
            if posting.account.trim().is_empty() {
                return Err(CoreError::Validation {
                    message: "posting is missing an account".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Build the record the formatter will render.
    fn to_transaction(&self) -> Transaction {
        Transaction {
            start_line: 0,
            date: self.date.clone(),
            cleared: self.is_cleared,
            pending: false,
            payee: self.payee.clone(),
            postings: self
                .postings
                .iter()
                .map(|posting| Posting {
                    account: posting.account.clone(),
                    amount: posting.amount.clone(),
                    comment: posting.comment.clone(),
                })
                .collect(),
        }
    }
}

// ==================== Ledger Manager ====================

/// File-backed transaction store.
///
/// Holds configuration only; transactions are re-derived from the ledger
/// file on every call, so a `Ledger` carries no cross-request state.
pub struct Ledger {
    config: Config,
}

impl Ledger {
    /// Create a new manager over the configured ledger file.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn ledger_file(&self) -> &Path {
        &self.config.ledger.file
    }

    /// Read the full ledger file.
    pub async fn read_content(&self) -> CoreResult<String> {
        Ok(tokio::fs::read_to_string(self.ledger_file()).await?)
    }

    /// Rewrite the ledger file, keeping the previous version as `.bak`.
    ///
    /// The new content lands in a staging file that is renamed over the
    /// original, so the file is either fully rewritten or untouched.
    async fn write_content(&self, content: &str) -> CoreResult<()> {
        let path = self.ledger_file();
        tokio::fs::copy(path, suffixed(path, ".bak")).await?;

        let staging = suffixed(path, ".tmp");
        tokio::fs::write(&staging, content).await?;
        tokio::fs::rename(&staging, path).await?;
        Ok(())
    }

    /// All transactions in as-parsed (file) order.
    pub async fn transactions(&self) -> CoreResult<Vec<Transaction>> {
        Ok(parse_transactions(&self.read_content().await?))
    }

    /// Transactions most recent (last in file) first, truncated to `limit`
    /// when it is non-zero.
    pub async fn recent_transactions(&self, limit: usize) -> CoreResult<Vec<Transaction>> {
        let mut transactions = self.transactions().await?;
        transactions.reverse();
        if limit > 0 && limit < transactions.len() {
            transactions.truncate(limit);
        }
        Ok(transactions)
    }

    /// Single transaction by as-parsed index.
    pub async fn transaction(&self, index: i64) -> CoreResult<Transaction> {
        let transactions = self.transactions().await?;
        usize::try_from(index)
            .ok()
            .and_then(|i| transactions.into_iter().nth(i))
            .ok_or(CoreError::NotFound { index })
    }

    /// Validate, format, and append a new transaction to the end of the file.
    pub async fn add_transaction(&self, request: &TransactionRequest) -> CoreResult<()> {
        request.validate()?;
        let content = self.read_content().await?;
        let updated = append_transaction(&content, &request.to_transaction());
        self.write_content(&updated).await?;
        self.refresh_reports();
        Ok(())
    }

    /// Replace the transaction at `index` in place.
    pub async fn update_transaction(
        &self,
        index: i64,
        request: &TransactionRequest,
    ) -> CoreResult<()> {
        request.validate()?;
        let target = usize::try_from(index).map_err(|_| CoreError::NotFound { index })?;
        let content = self.read_content().await?;
        let updated = replace_transaction(&content, target, &request.to_transaction())
            .map_err(|_| CoreError::NotFound { index })?;
        self.write_content(&updated).await?;
        self.refresh_reports();
        Ok(())
    }

    /// Remove the transaction at `index`.
    pub async fn delete_transaction(&self, index: i64) -> CoreResult<()> {
        let target = usize::try_from(index).map_err(|_| CoreError::NotFound { index })?;
        let content = self.read_content().await?;
        let updated =
            remove_transaction(&content, target).map_err(|_| CoreError::NotFound { index })?;
        self.write_content(&updated).await?;
        self.refresh_reports();
        Ok(())
    }

    /// Kick off the report regeneration script without waiting for it.
    ///
    /// Failures are logged; they never fail the write that triggered them.
    fn refresh_reports(&self) {
        let script = self.config.ledger.update_reports_script.clone();
        tokio::spawn(async move {
            match tokio::process::Command::new("bash")
                .arg(&script)
                .output()
                .await
            {
                Ok(output) if output.status.success() => {
                    log::debug!("report refresh completed: {}", script.display());
                }
                Ok(output) => {
                    log::warn!(
                        "report refresh {} exited with {}: {}",
                        script.display(),
                        output.status,
                        String::from_utf8_lossy(&output.stderr).trim()
                    );
                }
                Err(err) => {
                    log::warn!(
                        "failed to launch report refresh {}: {}",
                        script.display(),
                        err
                    );
                }
            }
        });
    }
}

/// `path` with `suffix` appended to the file name, in the same directory.
fn suffixed(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

// ==================== Tests ====================
