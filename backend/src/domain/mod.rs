pub mod bank_service;
pub mod errors;
pub mod models;

pub use bank_service::BankService;
pub use errors::BankError;
