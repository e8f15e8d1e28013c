//! Ledger reader: the on-chain state commands read during synchronization.
//!
//! The live client implements [`LedgerReader`] outside this crate. [`Snapshot`]
//! serves state captured ahead of time (offline compilation, tests).

use crate::errors::LedgerError;
use crate::models::{Address, PublicKey};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Cosignatory set and thresholds of a multisig account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultisigInfo {
    pub account: Address,
    pub cosignatories: Vec<PublicKey>,
    pub min_approval: u8,
    pub min_removal: u8,
}

impl MultisigInfo {
    pub fn is_cosignatory(&self, key: &PublicKey) -> bool { self.cosignatories.contains(key) }
}

#[async_trait]
pub trait LedgerReader: Send + Sync {
    async fn account_exists(&self, address: &Address) -> Result<bool, LedgerError>;
    async fn multisig_info(&self, address: &Address) -> Result<Option<MultisigInfo>, LedgerError>;
}

/// In-memory ledger state, deserializable from JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub accounts: Vec<Address>,
    #[serde(default)]
    pub multisig: BTreeMap<Address, MultisigInfo>,
}

impl Snapshot {
    pub fn new() -> Self { Self::default() }

    pub fn with_account(mut self, address: Address) -> Self {
        if !self.accounts.contains(&address) {
            self.accounts.push(address);
        }
        self
    }

    pub fn with_multisig(mut self, info: MultisigInfo) -> Self {
        let account = info.account;
        self.multisig.insert(account, info);
        self.with_account(account)
    }

    pub fn load(path: &Path) -> Result<Self, LedgerError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| LedgerError::Unavailable(format!("snapshot read {}: {}", path.display(), e)))?;
        serde_json::from_str(&raw).map_err(|e| LedgerError::Malformed(format!("snapshot json: {}", e)))
    }
}

#[async_trait]
impl LedgerReader for Snapshot {
    async fn account_exists(&self, address: &Address) -> Result<bool, LedgerError> {
        Ok(self.accounts.contains(address) || self.multisig.contains_key(address))
    }

    async fn multisig_info(&self, address: &Address) -> Result<Option<MultisigInfo>, LedgerError> {
        Ok(self.multisig.get(address).cloned())
    }
}
