//! Delegation to the external accounting engine
//!
//! Aggregate reports (balances, registers, budgets) are not computed here:
//! the configured command-line tool is invoked against the ledger file and
//! its plain-text output is split into tabular rows. The tool is a
//! best-effort collaborator; when it cannot be run, the failure is logged
//! and the report comes back empty.

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::Ledger;

/// One row of a balance-style report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountRow {
    pub amount: String,
    pub account: String,
    pub level: usize,
}

/// One row of the register report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRow {
    pub date: String,
    pub payee: String,
    pub account: String,
    pub amount: String,
    pub balance: String,
}

/// One row of the expense budget report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetRow {
    pub actual: String,
    pub budget: String,
    pub remaining: String,
    pub percent: String,
    pub account: String,
    pub level: usize,
}

/// One row of the cleared/pending report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClearedRow {
    pub cleared: String,
    pub pending: String,
    #[serde(rename = "lastCleared")]
    pub last_cleared: String,
    pub account: String,
    pub level: usize,
}

/// Indentation depth of a report line, two spaces per level.
fn indent_level(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ').count() / 2
}

/// Rows of a `balance`-style report: amount, account, indentation level.
pub fn account_rows(output: &str) -> Vec<AccountRow> {
    output
        .lines()
        .filter_map(|line| {
            let level = indent_level(line);
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 2 {
                return None;
            }
            Some(AccountRow {
                amount: parts[0].to_string(),
                account: parts[1].to_string(),
                level,
            })
        })
        .collect()
}

/// Rows of the `register` report.
pub fn register_rows(output: &str) -> Vec<RegisterRow> {
    output
        .lines()
        .filter_map(|line| {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 5 {
                return None;
            }
            Some(RegisterRow {
                date: parts[0].to_string(),
                payee: parts[1].to_string(),
                account: parts[2].to_string(),
                amount: parts[3].to_string(),
                balance: parts[4].to_string(),
            })
        })
        .collect()
}

/// Rows of the `balance --budget` report.
pub fn budget_rows(output: &str) -> Vec<BudgetRow> {
    output
        .lines()
        .filter_map(|line| {
            let level = indent_level(line);
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 4 {
                return None;
            }
            Some(BudgetRow {
                actual: parts[0].to_string(),
                budget: parts[1].to_string(),
                remaining: parts[2].to_string(),
                percent: parts[3].to_string(),
                account: parts.get(4).copied().unwrap_or_default().to_string(),
                level,
            })
        })
        .collect()
}

/// Rows of the `balance --cleared --pending` report.
pub fn cleared_rows(output: &str) -> Vec<ClearedRow> {
    output
        .lines()
        .filter_map(|line| {
            let level = indent_level(line);
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 3 {
                return None;
            }
            Some(ClearedRow {
                cleared: parts[0].to_string(),
                pending: parts[1].to_string(),
                last_cleared: parts[2].to_string(),
                account: parts.get(3).copied().unwrap_or_default().to_string(),
                level,
            })
        })
        .collect()
}

/// Account names, one per non-blank line.
pub fn account_names(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

// ==================== Report Operations ====================

impl Ledger {
    /// Run the accounting tool against the ledger file and capture stdout.
    async fn run_ledger_command(&self, args: &[&str]) -> CoreResult<String> {
        let config = &self.config().ledger;
        let output = tokio::process::Command::new(&config.command)
            .arg("-f")
            .arg(&config.file)
            .args(args)
            .output()
            .await
            .map_err(|err| CoreError::External {
                message: format!("failed to run {}: {}", config.command, err),
            })?;

        if !output.status.success() {
            return Err(CoreError::External {
                message: format!(
                    "{} exited with {}: {}",
                    config.command,
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Report output, or empty when the tool fails (logged, never surfaced).
    async fn report_output(&self, args: &[&str]) -> String {
        match self.run_ledger_command(args).await {
            Ok(output) => output,
            Err(err) => {
                log::warn!("report unavailable ({}): {}", args.join(" "), err);
                String::new()
            }
        }
    }

    /// Assets and liabilities overview, two levels deep.
    pub async fn account_summary(&self) -> Vec<AccountRow> {
        let output = self
            .report_output(&["balance", "^Assets", "^Liabilities", "--depth", "2"])
            .await;
        account_rows(&output)
    }

    /// Full balance report.
    pub async fn balance_report(&self) -> Vec<AccountRow> {
        account_rows(&self.report_output(&["balance"]).await)
    }

    /// Register report.
    pub async fn register_report(&self) -> Vec<RegisterRow> {
        register_rows(&self.report_output(&["register"]).await)
    }

    /// Expense budget report.
    pub async fn budget_report(&self) -> Vec<BudgetRow> {
        budget_rows(&self.report_output(&["balance", "^Expenses", "--budget"]).await)
    }

    /// Cleared/pending balance report.
    pub async fn cleared_report(&self) -> Vec<ClearedRow> {
        cleared_rows(&self.report_output(&["balance", "--cleared", "--pending"]).await)
    }

    /// All account names, for autocomplete.
    pub async fn accounts(&self) -> Vec<String> {
        account_names(&self.report_output(&["accounts"]).await)
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_rows() {
        let output = "$1,250.00  Assets:Checking\n  $300.00  Assets:Savings\n\nshort\n";
        let rows = account_rows(output);
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            AccountRow {
                amount: "$1,250.00".to_string(),
                account: "Assets:Checking".to_string(),
                level: 0,
            }
        );
        assert_eq!(rows[1].amount, "$300.00");
        assert_eq!(rows[1].level, 1);
    }

    #[test]
    fn test_register_rows_skip_short_lines() {
        let output = "2024/01/02  Rent  Expenses:Rent  $900.00  $900.00\nincomplete line\n";
        let rows = register_rows(output);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, "2024/01/02");
        assert_eq!(rows[0].payee, "Rent");
        assert_eq!(rows[0].account, "Expenses:Rent");
        assert_eq!(rows[0].amount, "$900.00");
        assert_eq!(rows[0].balance, "$900.00");
    }

    #[test]
    fn test_budget_rows_with_and_without_account() {
        let output = "$90.00  $100.00  $10.00  90%  Expenses:Food\n$90.00  $100.00  $10.00  90%\n";
        let rows = budget_rows(output);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].account, "Expenses:Food");
        assert_eq!(rows[0].percent, "90%");
        assert_eq!(rows[1].account, "");
    }

    #[test]
    fn test_cleared_rows() {
        let output = "  $500.00  $20.00  24-Jan-02  Assets:Checking\n";
        let rows = cleared_rows(output);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cleared, "$500.00");
        assert_eq!(rows[0].pending, "$20.00");
        assert_eq!(rows[0].last_cleared, "24-Jan-02");
        assert_eq!(rows[0].account, "Assets:Checking");
        assert_eq!(rows[0].level, 1);
    }

    #[test]
    fn test_cleared_row_serializes_last_cleared_camel_case() {
        let row = ClearedRow {
            cleared: "$1".to_string(),
            pending: "$0".to_string(),
            last_cleared: "24-Jan-02".to_string(),
            account: "Assets:Checking".to_string(),
            level: 0,
        };
        let value = serde_json::to_value(&row).unwrap();
        assert!(value.get("lastCleared").is_some());
        assert!(value.get("last_cleared").is_none());
    }

    #[test]
    fn test_account_names_skip_blank_lines() {
        let output = "Assets:Checking\n\nExpenses:Food\n";
        assert_eq!(
            account_names(output),
            vec!["Assets:Checking", "Expenses:Food"]
        );
    }

    #[tokio::test]
    async fn test_missing_tool_yields_empty_report() {
        let mut config = ledgerweb_config::Config::default();
        config.ledger.command = "ledgerweb-no-such-tool".to_string();
        let ledger = Ledger::new(config);
        assert!(ledger.balance_report().await.is_empty());
        assert!(ledger.accounts().await.is_empty());
    }
}
