//! Application layer containing the core business logic orchestration.
//!
//! `LedgerEngine` is the primary entry point. It composes the `AccountService`
//! and the `TransferService` over one shared `AccountLedger` handle. Transfers
//! serialize on per-account locks taken in a fixed order, so transfers over
//! disjoint accounts proceed concurrently.

pub mod accounts;
pub mod engine;
pub mod locks;
pub mod transfer;
