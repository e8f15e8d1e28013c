//! Pure construction helpers that every command composes.

pub mod accounts;
pub mod derivation;
pub mod transactions;

pub use accounts::Account;
