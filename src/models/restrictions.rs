//! Token and account restrictions, evaluated by the ledger at transfer time

use crate::models::account::Address;
use crate::models::identifiers::TokenId;
use serde::{Deserialize, Serialize};

/// Comparison applied between an account's flag value and the rule value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenRestrictionType {
    #[default]
    None,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl TokenRestrictionType {
    pub fn code(&self) -> u8 {
        match self {
            TokenRestrictionType::None => 0,
            TokenRestrictionType::Eq => 1,
            TokenRestrictionType::Ne => 2,
            TokenRestrictionType::Lt => 3,
            TokenRestrictionType::Le => 4,
            TokenRestrictionType::Gt => 5,
            TokenRestrictionType::Ge => 6,
        }
    }

    /// `actual <op> required`. `None` never restricts.
    pub fn compare(&self, actual: u64, required: u64) -> bool {
        match self {
            TokenRestrictionType::None => true,
            TokenRestrictionType::Eq => actual == required,
            TokenRestrictionType::Ne => actual != required,
            TokenRestrictionType::Lt => actual < required,
            TokenRestrictionType::Le => actual <= required,
            TokenRestrictionType::Gt => actual > required,
            TokenRestrictionType::Ge => actual >= required,
        }
    }
}

/// Global rule bound to a token under a restriction key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRestriction {
    pub token_id: TokenId,
    pub key: u64,
    pub restriction_type: TokenRestrictionType,
    pub value: u64,
}

impl TokenRestriction {
    /// Whether an account holding `flag` for this key passes the rule. An unset flag fails
    /// everything but `None`.
    pub fn allows(&self, flag: Option<u64>) -> bool {
        match (self.restriction_type, flag) {
            (TokenRestrictionType::None, _) => true,
            (_, None) => false,
            (op, Some(actual)) => op.compare(actual, self.value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountRestrictionFlags {
    AllowMosaic,
    BlockMosaic,
}

impl AccountRestrictionFlags {
    pub fn value(&self) -> u16 {
        match self {
            AccountRestrictionFlags::AllowMosaic => 0x0002,
            AccountRestrictionFlags::BlockMosaic => 0x8002,
        }
    }
}

/// Per-account token allow/block list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRestriction {
    pub address: Address,
    pub flags: AccountRestrictionFlags,
    pub values: Vec<TokenId>,
}

impl AccountRestriction {
    pub fn allows(&self, token_id: &TokenId) -> bool {
        let listed = self.values.contains(token_id);
        match self.flags {
            AccountRestrictionFlags::AllowMosaic => listed,
            AccountRestrictionFlags::BlockMosaic => !listed,
        }
    }
}
