//! # Bank Registry Backend
//!
//! Axum REST service exposing CRUD operations over bank records held in
//! an in-memory data store. The crate follows the usual backend layering:
//! - `domain`: models, error taxonomy and the `BankService`
//! - `storage`: the `BankStorage` contract and its in-memory repository
//! - `rest`: HTTP handlers, DTO mappers and router construction

pub mod domain;
pub mod rest;
pub mod storage;
