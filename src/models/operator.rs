//! Operators and the role scale

use crate::models::account::{PublicAccount, PublicKey};
use crate::models::network::NetworkType;
use serde::{Deserialize, Serialize};

/// Ordinal role scale stored in the `User_Role` restriction key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Guest,
    Holder,
    #[default]
    Operator,
}

impl Role {
    pub fn value(&self) -> u64 {
        match self {
            Role::Guest => 1,
            Role::Holder => 2,
            Role::Operator => 3,
        }
    }

    pub fn from_value(value: u64) -> Option<Self> {
        match value {
            1 => Some(Role::Guest),
            2 => Some(Role::Holder),
            3 => Some(Role::Operator),
            _ => None,
        }
    }
}

/// Cosignatory of a token account. Accepts a bare public key or `{public_key, role}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "OperatorRepr")]
pub struct Operator {
    pub public_key: PublicKey,
    pub role: Role,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OperatorRepr {
    Key(PublicKey),
    Full {
        public_key: PublicKey,
        #[serde(default)]
        role: Role,
    },
}

impl From<OperatorRepr> for Operator {
    fn from(repr: OperatorRepr) -> Self {
        match repr {
            OperatorRepr::Key(public_key) => Self { public_key, role: Role::Operator },
            OperatorRepr::Full { public_key, role } => Self { public_key, role },
        }
    }
}

impl Operator {
    pub fn new(public_key: PublicKey) -> Self { Self { public_key, role: Role::Operator } }

    pub fn public_account(&self, network: NetworkType) -> PublicAccount {
        PublicAccount::new(self.public_key, network)
    }
}
