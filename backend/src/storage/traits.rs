//! # Storage Traits
//!
//! This module defines the storage abstraction trait that allows
//! different storage backends to be used interchangeably in the domain
//! layer.

use crate::domain::errors::BankError;
use crate::domain::models::bank::Bank;

/// Trait defining the interface for bank storage operations.
///
/// Any backend (in-memory, SQL database, key-value store) implementing
/// these five operations with the same failure conditions is
/// substitutable behind the service layer without modification.
pub trait BankStorage: Send + Sync {
    /// List all stored banks, sorted by account number
    fn list_banks(&self) -> Result<Vec<Bank>, BankError>;

    /// Retrieve a single bank by account number
    ///
    /// Fails with [`BankError::NotFound`] if no bank has that account
    /// number.
    fn get_bank(&self, account_number: &str) -> Result<Bank, BankError>;

    /// Store a new bank
    ///
    /// Fails with [`BankError::DuplicateAccountNumber`] if the account
    /// number is already taken. Returns the stored record unchanged.
    fn create_bank(&self, bank: Bank) -> Result<Bank, BankError>;

    /// Replace the bank with the matching account number in full
    ///
    /// Fails with [`BankError::NotFound`] if the account number does not
    /// exist; records are never created through this operation.
    fn update_bank(&self, bank: Bank) -> Result<Bank, BankError>;

    /// Remove a bank by account number
    ///
    /// Fails with [`BankError::NotFound`] if no bank has that account
    /// number.
    fn delete_bank(&self, account_number: &str) -> Result<(), BankError>;
}
