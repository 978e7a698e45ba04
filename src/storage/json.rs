//! Transaction store backed by a JSON file
//!
//! The whole ledger is held in memory and rewritten atomically after every
//! change. A failed write rolls the in-memory copy back.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::file_io::{read_json, write_json_atomic};
use super::TransactionStore;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Transaction, TransactionId};

/// On-disk shape of the data file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// JSON-file implementation of [`TransactionStore`]
#[derive(Debug)]
pub struct JsonTransactionStore {
    path: PathBuf,
    transactions: Vec<Transaction>,
}

impl JsonTransactionStore {
    /// Open the store, reading the data file if it exists
    pub fn open(path: impl Into<PathBuf>) -> LedgerResult<Self> {
        let path = path.into();
        let data: TransactionData = read_json(&path)?;
        tracing::info!(
            path = %path.display(),
            count = data.transactions.len(),
            "Loaded transactions"
        );

        Ok(Self {
            path,
            transactions: data.transactions,
        })
    }

    /// Path of the data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of stored transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Check if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    fn position(&self, id: TransactionId) -> LedgerResult<usize> {
        self.transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| LedgerError::transaction_not_found(id.to_string()))
    }

    fn save(&self) -> LedgerResult<()> {
        #[derive(Serialize)]
        struct TransactionDataRef<'a> {
            transactions: &'a [Transaction],
        }

        write_json_atomic(
            &self.path,
            &TransactionDataRef {
                transactions: &self.transactions,
            },
        )
    }
}

impl TransactionStore for JsonTransactionStore {
    fn add_transaction(&mut self, transaction: &Transaction) -> LedgerResult<()> {
        self.transactions.push(transaction.clone());
        if let Err(e) = self.save() {
            self.transactions.pop();
            return Err(e);
        }
        tracing::debug!(id = %transaction.id, "Transaction added");
        Ok(())
    }

    fn get_transaction(&self, id: TransactionId) -> LedgerResult<Transaction> {
        let index = self.position(id)?;
        Ok(self.transactions[index].clone())
    }

    fn get_all_transactions(&self) -> LedgerResult<Vec<Transaction>> {
        Ok(self.transactions.clone())
    }

    fn delete_transaction(&mut self, id: TransactionId) -> LedgerResult<()> {
        let index = self.position(id)?;
        let removed = self.transactions.remove(index);
        if let Err(e) = self.save() {
            self.transactions.insert(index, removed);
            return Err(e);
        }
        tracing::debug!(%id, "Transaction deleted");
        Ok(())
    }

    fn update_transaction(
        &mut self,
        id: TransactionId,
        mut transaction: Transaction,
    ) -> LedgerResult<()> {
        let index = self.position(id)?;
        // Replace-by-identity: the stored id wins
        transaction.id = id;
        let previous = std::mem::replace(&mut self.transactions[index], transaction);
        if let Err(e) = self.save() {
            self.transactions[index] = previous;
            return Err(e);
        }
        tracing::debug!(%id, "Transaction updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, JsonTransactionStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonTransactionStore::open(temp_dir.path().join("transactions.json")).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.is_empty());
        assert!(store.get_all_transactions().unwrap().is_empty());
    }

    #[test]
    fn test_add_and_get() {
        let (_temp_dir, mut store) = create_test_store();
        let txn = Transaction::expense("3.75", "Starbucks", "Coffee").unwrap();

        store.add_transaction(&txn).unwrap();

        assert_eq!(store.get_transaction(txn.id).unwrap(), txn);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_insertion_order_survives_reload() {
        let (temp_dir, mut store) = create_test_store();
        let first = Transaction::income("350.46", "Salary", "Other").unwrap();
        let second = Transaction::expense("3.75", "Cafe Nero", "Coffee").unwrap();
        store.add_transaction(&first).unwrap();
        store.add_transaction(&second).unwrap();

        let reopened = JsonTransactionStore::open(temp_dir.path().join("transactions.json")).unwrap();
        let all = reopened.get_all_transactions().unwrap();

        assert_eq!(all, vec![first, second]);
        assert_eq!(all[0].kind, TransactionKind::Income);
    }

    #[test]
    fn test_update_replaces_by_identity() {
        let (_temp_dir, mut store) = create_test_store();
        let txn = Transaction::expense("3.75", "Costa", "Coffee").unwrap();
        store.add_transaction(&txn).unwrap();

        let replacement = Transaction::expense("4.20", "Costa", "Coffee").unwrap();
        store.update_transaction(txn.id, replacement).unwrap();

        let stored = store.get_transaction(txn.id).unwrap();
        assert_eq!(stored.id, txn.id);
        assert_eq!(stored.amount.to_string(), "4.20");
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, mut store) = create_test_store();
        let txn = Transaction::expense("3.75", "Blank Street", "Coffee").unwrap();
        store.add_transaction(&txn).unwrap();

        store.delete_transaction(txn.id).unwrap();

        assert!(store.is_empty());
        assert!(store.get_transaction(txn.id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let (_temp_dir, mut store) = create_test_store();
        let missing = TransactionId::new();
        let txn = Transaction::expense("1", "x", "Other").unwrap();

        assert!(store.get_transaction(missing).unwrap_err().is_not_found());
        assert!(store.delete_transaction(missing).unwrap_err().is_not_found());
        assert!(store.update_transaction(missing, txn).unwrap_err().is_not_found());
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the data file should be makes the rename fail
        let path = temp_dir.path().join("transactions.json");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("occupied"), "x").unwrap();
        let mut store = JsonTransactionStore {
            path,
            transactions: Vec::new(),
        };

        let txn = Transaction::expense("1", "x", "Other").unwrap();
        assert!(store.add_transaction(&txn).is_err());
        assert!(store.is_empty());
    }
}
