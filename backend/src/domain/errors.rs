use thiserror::Error;

/// Failure modes of bank operations.
///
/// The REST layer maps each variant to one HTTP status: `NotFound` to
/// 404, `DuplicateAccountNumber` and `InvalidAccountNumber` to 400,
/// `Storage` to 500.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("bank with account number {account_number} not found")]
    NotFound { account_number: String },

    #[error("bank with account number {account_number} already exists")]
    DuplicateAccountNumber { account_number: String },

    #[error("account number must not be blank")]
    InvalidAccountNumber,

    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl BankError {
    pub fn not_found(account_number: impl Into<String>) -> Self {
        Self::NotFound {
            account_number: account_number.into(),
        }
    }

    pub fn duplicate(account_number: impl Into<String>) -> Self {
        Self::DuplicateAccountNumber {
            account_number: account_number.into(),
        }
    }
}
