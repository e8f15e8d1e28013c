//! Metadata annotations and token provenance. Read or proposed here, never mutated.

use crate::errors::{CommandError, CommandResult};
use crate::helpers::transactions::restriction_key;
use crate::models::account::Address;
use crate::models::identifiers::TokenId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub token_id: TokenId,
    pub source: Address,
    pub key: u64,
    pub value: String,
}

impl TokenMetadata {
    pub fn new(token_id: TokenId, source: Address, name: &str, value: impl Into<String>) -> Self {
        Self { token_id, source, key: restriction_key(name), value: value.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountMetadata {
    pub address: Address,
    pub source: Address,
    pub key: u64,
    pub value: String,
}

impl AccountMetadata {
    pub fn new(address: Address, source: Address, name: &str, value: impl Into<String>) -> Self {
        Self { address, source, key: restriction_key(name), value: value.into() }
    }
}

/// Where a token originates from, e.g. an issuer name or URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TokenSource(String);

impl TokenSource {
    pub fn new(source: impl Into<String>) -> CommandResult<Self> {
        let source = source.into();
        if source.trim().is_empty() {
            return Err(CommandError::invalid_argument("source", "must not be empty"));
        }
        Ok(Self(source))
    }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl TryFrom<String> for TokenSource {
    type Error = CommandError;
    fn try_from(value: String) -> CommandResult<Self> { Self::new(value) }
}

impl From<TokenSource> for String {
    fn from(source: TokenSource) -> Self { source.0 }
}
