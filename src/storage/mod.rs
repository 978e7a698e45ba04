//! Storage layer for the finance tracker
//!
//! The interactive ledger only talks to [`TransactionStore`]; the JSON file
//! store is the implementation used by the binary.

pub mod file_io;
pub mod json;

pub use file_io::{read_json, write_json_atomic};
pub use json::JsonTransactionStore;

use crate::error::LedgerResult;
use crate::models::{Transaction, TransactionId};

/// Persistence contract for transactions
pub trait TransactionStore {
    /// Persist a new transaction
    fn add_transaction(&mut self, transaction: &Transaction) -> LedgerResult<()>;

    /// Fetch a transaction by id
    fn get_transaction(&self, id: TransactionId) -> LedgerResult<Transaction>;

    /// Every stored transaction, in insertion order
    fn get_all_transactions(&self) -> LedgerResult<Vec<Transaction>>;

    /// Remove a transaction
    fn delete_transaction(&mut self, id: TransactionId) -> LedgerResult<()>;

    /// Replace the transaction stored under `id`
    fn update_transaction(
        &mut self,
        id: TransactionId,
        transaction: Transaction,
    ) -> LedgerResult<()>;
}
