use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::errors::BankError;
use crate::domain::models::bank::Bank;
use crate::storage::traits::BankStorage;

/// Service for managing bank records.
///
/// Sits between the REST layer and the storage contract: validates
/// incoming records, logs operations and delegates to the configured
/// [`BankStorage`] implementation.
#[derive(Clone)]
pub struct BankService {
    storage: Arc<dyn BankStorage>,
}

impl BankService {
    /// Create a new BankService over the given storage backend
    pub fn new(storage: Arc<dyn BankStorage>) -> Self {
        Self { storage }
    }

    /// List all banks
    pub fn list_banks(&self) -> Result<Vec<Bank>, BankError> {
        let banks = self.storage.list_banks()?;

        info!("Listed {} banks", banks.len());

        Ok(banks)
    }

    /// Get a bank by account number
    pub fn get_bank(&self, account_number: &str) -> Result<Bank, BankError> {
        info!("Retrieving bank: {}", account_number);

        self.storage.get_bank(account_number)
    }

    /// Create a new bank
    pub fn create_bank(&self, bank: Bank) -> Result<Bank, BankError> {
        info!("Creating bank: {}", bank.account_number);

        Self::validate_account_number(&bank)?;

        let created = self.storage.create_bank(bank)?;

        info!("Created bank: {}", created.account_number);

        Ok(created)
    }

    /// Update an existing bank in full
    pub fn update_bank(&self, bank: Bank) -> Result<Bank, BankError> {
        info!("Updating bank: {}", bank.account_number);

        Self::validate_account_number(&bank)?;

        let updated = self.storage.update_bank(bank)?;

        info!("Updated bank: {}", updated.account_number);

        Ok(updated)
    }

    /// Delete a bank by account number
    pub fn delete_bank(&self, account_number: &str) -> Result<(), BankError> {
        info!("Deleting bank: {}", account_number);

        self.storage.delete_bank(account_number)?;

        info!("Deleted bank: {}", account_number);

        Ok(())
    }

    fn validate_account_number(bank: &Bank) -> Result<(), BankError> {
        if bank.account_number.trim().is_empty() {
            warn!("Rejected bank with blank account number");
            return Err(BankError::InvalidAccountNumber);
        }
        Ok(())
    }
}
