//! Core data models for the finance tracker
//!
//! Transactions and the kinds that classify them.

pub mod ids;
pub mod kind;
pub mod transaction;

pub use ids::TransactionId;
pub use kind::TransactionKind;
pub use transaction::Transaction;
