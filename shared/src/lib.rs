use serde::{Deserialize, Serialize};

/// Wire representation of a bank record.
///
/// Field names follow the JSON contract of the HTTP API
/// (`accountNumber`, `trust`, `transactionFee`), so this type is used
/// verbatim as both request and response body for the bank endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    /// Unique identifier of the bank record, immutable once created
    pub account_number: String,
    /// Trust score of the bank
    pub trust: f64,
    /// Fee charged per transaction
    pub transaction_fee: i32,
}
