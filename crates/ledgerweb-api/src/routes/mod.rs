//! Route modules for the API server
//!
//! - transactions: list/detail reads plus create, update, delete write paths
//! - reports: balance/register/budget/cleared delegation to the external tool

pub mod reports;
pub mod transactions;
