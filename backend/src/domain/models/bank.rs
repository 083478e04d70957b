use serde::{Deserialize, Serialize};

/// Domain model representing a bank in the registry.
///
/// The account number acts as the primary key: it is unique across the
/// live collection of any storage backend and immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    pub account_number: String,
    pub trust: f64,
    pub transaction_fee: i32,
}
