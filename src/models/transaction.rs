//! Unsigned ledger operations and their signer-tagged aggregate entries.

use crate::models::account::{Address, PublicAccount, PublicKey};
use crate::models::identifiers::{NamespaceId, TokenId, TokenNonce};
use crate::models::network::{Deadline, NetworkType};
use crate::models::restrictions::{AccountRestrictionFlags, TokenRestrictionType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAmount {
    pub id: TokenId,
    pub amount: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamespaceRegistrationType {
    Root,
    Child,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplyChangeAction {
    Increase,
    Decrease,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenFlags {
    pub supply_mutable: bool,
    pub transferable: bool,
    pub restrictable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransactionBody {
    Transfer {
        recipient: Address,
        mosaics: Vec<TokenAmount>,
        message: Option<String>,
    },
    MultisigAccountModification {
        min_approval_delta: i8,
        min_removal_delta: i8,
        additions: Vec<PublicKey>,
        deletions: Vec<PublicKey>,
    },
    NamespaceRegistration {
        registration_type: NamespaceRegistrationType,
        name: String,
        id: NamespaceId,
        parent_id: Option<NamespaceId>,
        duration: u64,
    },
    TokenDefinition {
        nonce: TokenNonce,
        id: TokenId,
        flags: TokenFlags,
        divisibility: u8,
        duration: u64,
    },
    TokenSupplyChange {
        token_id: TokenId,
        action: SupplyChangeAction,
        delta: u64,
    },
    AccountTokenRestriction {
        flags: AccountRestrictionFlags,
        additions: Vec<TokenId>,
        deletions: Vec<TokenId>,
    },
    TokenGlobalRestriction {
        token_id: TokenId,
        reference_token_id: TokenId,
        restriction_key: u64,
        previous_value: u64,
        previous_type: TokenRestrictionType,
        new_value: u64,
        new_type: TokenRestrictionType,
    },
    TokenAddressRestriction {
        token_id: TokenId,
        restriction_key: u64,
        target_address: Address,
        previous_value: u64,
        new_value: u64,
    },
}

impl TransactionBody {
    pub fn kind(&self) -> &'static str {
        match self {
            TransactionBody::Transfer { .. } => "transfer",
            TransactionBody::MultisigAccountModification { .. } => "multisig_account_modification",
            TransactionBody::NamespaceRegistration { .. } => "namespace_registration",
            TransactionBody::TokenDefinition { .. } => "token_definition",
            TransactionBody::TokenSupplyChange { .. } => "token_supply_change",
            TransactionBody::AccountTokenRestriction { .. } => "account_token_restriction",
            TransactionBody::TokenGlobalRestriction { .. } => "token_global_restriction",
            TransactionBody::TokenAddressRestriction { .. } => "token_address_restriction",
        }
    }
}

/// One unsigned operation with the parameters every helper threads through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub network_type: NetworkType,
    pub deadline: Deadline,
    pub max_fee: u64,
    pub body: TransactionBody,
}

impl Transaction {
    pub fn kind(&self) -> &'static str { self.body.kind() }

    pub fn to_aggregate(self, signer: &PublicAccount) -> InnerTransaction {
        InnerTransaction { signer: *signer, transaction: self }
    }
}

/// Aggregate entry: an operation and the account that must sign it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InnerTransaction {
    pub signer: PublicAccount,
    pub transaction: Transaction,
}

impl InnerTransaction {
    pub fn kind(&self) -> &'static str { self.transaction.kind() }
    pub fn body(&self) -> &TransactionBody { &self.transaction.body }
}
