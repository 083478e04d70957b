use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::anyhow;

use super::traits::BankStorage;
use crate::domain::errors::BankError;
use crate::domain::models::bank::Bank;

/// In-memory bank repository guarded by a single lock.
///
/// [`InMemoryBankRepository::new`] seeds the store with sample records;
/// [`InMemoryBankRepository::empty`] starts blank.
pub struct InMemoryBankRepository {
    banks: RwLock<HashMap<String, Bank>>,
}

impl InMemoryBankRepository {
    /// Create a repository seeded with the sample records
    pub fn new() -> Self {
        let seed = [
            Bank {
                account_number: "1234".to_string(),
                trust: 3.14,
                transaction_fee: 17,
            },
            Bank {
                account_number: "1010".to_string(),
                trust: 17.0,
                transaction_fee: 0,
            },
            Bank {
                account_number: "5678".to_string(),
                trust: 0.0,
                transaction_fee: 0,
            },
        ];

        let banks = seed
            .into_iter()
            .map(|bank| (bank.account_number.clone(), bank))
            .collect();

        Self {
            banks: RwLock::new(banks),
        }
    }

    /// Create a repository with no records
    pub fn empty() -> Self {
        Self {
            banks: RwLock::new(HashMap::new()),
        }
    }

    fn read_banks(&self) -> Result<RwLockReadGuard<'_, HashMap<String, Bank>>, BankError> {
        self.banks
            .read()
            .map_err(|_| BankError::Storage(anyhow!("bank store lock poisoned")))
    }

    fn write_banks(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, Bank>>, BankError> {
        self.banks
            .write()
            .map_err(|_| BankError::Storage(anyhow!("bank store lock poisoned")))
    }
}

impl Default for InMemoryBankRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl BankStorage for InMemoryBankRepository {
    fn list_banks(&self) -> Result<Vec<Bank>, BankError> {
        let banks = self.read_banks()?;
        let mut all: Vec<Bank> = banks.values().cloned().collect();
        // Sort by key for consistent ordering across calls
        all.sort_by(|a, b| a.account_number.cmp(&b.account_number));
        Ok(all)
    }

    fn get_bank(&self, account_number: &str) -> Result<Bank, BankError> {
        let banks = self.read_banks()?;
        banks
            .get(account_number)
            .cloned()
            .ok_or_else(|| BankError::not_found(account_number))
    }

    fn create_bank(&self, bank: Bank) -> Result<Bank, BankError> {
        let mut banks = self.write_banks()?;
        if banks.contains_key(&bank.account_number) {
            return Err(BankError::duplicate(bank.account_number.as_str()));
        }
        banks.insert(bank.account_number.clone(), bank.clone());
        Ok(bank)
    }

    fn update_bank(&self, bank: Bank) -> Result<Bank, BankError> {
        let mut banks = self.write_banks()?;
        if !banks.contains_key(&bank.account_number) {
            return Err(BankError::not_found(bank.account_number.as_str()));
        }
        banks.insert(bank.account_number.clone(), bank.clone());
        Ok(bank)
    }

    fn delete_bank(&self, account_number: &str) -> Result<(), BankError> {
        let mut banks = self.write_banks()?;
        banks
            .remove(account_number)
            .map(|_| ())
            .ok_or_else(|| BankError::not_found(account_number))
    }
}
