//! NIP13: token commands compiled into signed aggregate transaction steps.
//!
//! # Architecture
//!
//! ```text
//! Standard (Nip13 registry)
//!   │  get_command(name, context, target)
//!   ▼
//! Executable (Box<dyn ..>)
//!   │
//!   ├── validate()          required arguments, typed decoding
//!   ├── synchronize(ledger) on-chain reads through LedgerReader
//!   └── assemble(state)     ordered Vec<InnerTransaction { signer, transaction }>
//!         │
//!         └── helpers::transactions (one unsigned operation per call)
//! ```
//!
//! Signing, broadcast and transport belong to the ledger client the output is
//! handed to.
//!
//! # Features
//!
//! - `native` - tokio runtime, log subscriber and the `nip13` binary

// =============================================================================
// Core modules
// =============================================================================
pub mod command;
pub mod context;
pub mod errors;
pub mod helpers;
pub mod ledger;
pub mod models;
pub mod standard;
pub mod standards;

#[cfg(feature = "native")]
pub mod logging;

// =============================================================================
// Re-exports
// =============================================================================
pub use command::{BaseCommand, Command, Executable};
pub use context::Context;
pub use errors::{CommandError, CommandResult, LedgerError};
pub use helpers::Account;
pub use ledger::{LedgerReader, MultisigInfo, Snapshot};
pub use models::*;
pub use standard::Standard;
pub use standards::Nip13;
