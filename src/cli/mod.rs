//! Terminal front end over the ledger engine.

pub mod setup;
pub mod summary;
pub mod transactions;
pub mod ui;
