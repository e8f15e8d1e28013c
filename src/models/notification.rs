//! Notifications and the proofs that tie them to on-chain evidence.
//!
//! A [`Notification`] renders the message carried by a command's proof-of-intent
//! transfer. Proofs are built by the caller once that transfer is confirmed.

use crate::errors::{CommandError, CommandResult};
use crate::models::identifiers::TokenId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub revision: u32,
    pub action: String,
    pub subject: TokenId,
}

impl Notification {
    pub fn new(revision: u32, action: impl Into<String>, subject: TokenId) -> Self {
        Self { revision, action: action.into(), subject }
    }

    /// `NIP13(v{revision}):{action}:{subject}`
    pub fn message(&self) -> String {
        format!("NIP13(v{}):{}:{}", self.revision, self.action, self.subject.to_hex())
    }

    pub fn digest(&self) -> String {
        blake3::hash(self.message().as_bytes()).to_hex().to_string()
    }

    pub fn proof(&self) -> NotificationProof {
        NotificationProof { notification: self.clone(), digest: self.digest() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationProof {
    pub notification: Notification,
    pub digest: String,
}

impl NotificationProof {
    /// Whether `message` (e.g. read back from a confirmed transfer) is the one this proof covers.
    pub fn verify(&self, message: &str) -> bool {
        blake3::hash(message.as_bytes()).to_hex().as_str() == self.digest
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationProof {
    pub proof: NotificationProof,
    pub transaction_hash: String,
    pub height: u64,
}

impl PublicationProof {
    pub fn new(proof: NotificationProof, transaction_hash: impl Into<String>, height: u64) -> CommandResult<Self> {
        let transaction_hash = transaction_hash.into().to_ascii_uppercase();
        if transaction_hash.len() != 64 || hex::decode(&transaction_hash).is_err() {
            return Err(CommandError::invalid_argument("transaction_hash", "must be 32 bytes of hex"));
        }
        Ok(Self { proof, transaction_hash, height })
    }
}
