//! Finance Tracker - terminal ledger for income and expenses
//!
//! This library provides the core of the finance tracker: configuration
//! resolution, the transaction model, the storage contract with a JSON file
//! implementation, and the interactive ledger.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Config directory and the effective configuration
//! - `error`: Custom error types
//! - `logging`: Log file setup
//! - `models`: Transactions and their kinds
//! - `storage`: Transaction store contract and JSON file store
//! - `tui`: Interactive ledger
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::config::{Config, ConfigPaths};
//!
//! let paths = ConfigPaths::new()?;
//! let config = Config::resolve(&paths)?;
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod storage;
pub mod tui;

pub use error::{LedgerError, LedgerResult};
