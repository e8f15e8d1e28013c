//! Token and namespace identifiers

use crate::errors::{CommandError, CommandResult};
use crate::models::account::Address;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// 4-byte nonce a token identifier is derived from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TokenNonce([u8; 4]);

impl TokenNonce {
    pub fn from_bytes(bytes: [u8; 4]) -> Self { Self(bytes) }

    pub fn from_hex(value: &str) -> CommandResult<Self> {
        let bytes = hex::decode(value)
            .map_err(|e| CommandError::invalid_argument("identifier", format!("invalid nonce hex: {}", e)))?;
        let bytes: [u8; 4] = bytes
            .try_into()
            .map_err(|_| CommandError::invalid_argument("identifier", "nonce must be 4 bytes"))?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 4] { &self.0 }
    pub fn to_hex(&self) -> String { hex::encode_upper(self.0) }
}

impl TryFrom<String> for TokenNonce {
    type Error = CommandError;
    fn try_from(value: String) -> CommandResult<Self> { Self::from_hex(&value) }
}

impl From<TokenNonce> for String {
    fn from(nonce: TokenNonce) -> Self { nonce.to_hex() }
}

impl fmt::Debug for TokenNonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "TokenNonce({})", self.to_hex()) }
}

macro_rules! hex_id {
    ($name:ident, $label:literal) => {
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(u64);

        impl $name {
            pub fn new(value: u64) -> Self { Self(value) }
            pub fn value(&self) -> u64 { self.0 }
            pub fn to_hex(&self) -> String { format!("{:016X}", self.0) }

            pub fn from_hex(value: &str) -> CommandResult<Self> {
                u64::from_str_radix(value.trim(), 16)
                    .map(Self)
                    .map_err(|e| CommandError::invalid_argument($label, e.to_string()))
            }
        }

        impl TryFrom<String> for $name {
            type Error = CommandError;
            fn try_from(value: String) -> CommandResult<Self> { Self::from_hex(&value) }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self { id.to_hex() }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.to_hex()) }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.to_hex())
            }
        }
    };
}

hex_id!(TokenId, "token_id");
hex_id!(NamespaceId, "namespace_id");

impl TokenId {
    /// `sha256(nonce || owner)`, first 8 bytes little-endian, top bit cleared.
    pub fn from_nonce(nonce: &TokenNonce, owner: &Address) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(nonce.as_bytes());
        hasher.update(owner.as_bytes());
        let hash = hasher.finalize();
        let mut id = [0u8; 8];
        id.copy_from_slice(&hash[..8]);
        Self(u64::from_le_bytes(id) & 0x7FFF_FFFF_FFFF_FFFF)
    }
}

impl NamespaceId {
    /// `sha256(parent_le || name)`, first 8 bytes little-endian, top bit set.
    pub fn from_name(name: &str, parent: Option<NamespaceId>) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(parent.map(|p| p.0).unwrap_or(0).to_le_bytes());
        hasher.update(name.as_bytes());
        let hash = hasher.finalize();
        let mut id = [0u8; 8];
        id.copy_from_slice(&hash[..8]);
        Self(u64::from_le_bytes(id) | 1 << 63)
    }

    /// Id of a full dot-separated path, e.g. `"company.token"`.
    pub fn from_path(path: &str) -> Self {
        path.split('.').fold(None, |parent, part| Some(Self::from_name(part, parent)))
            .unwrap_or_else(|| Self::from_name("", None))
    }
}

/// Token identity: the nonce, its owner and the id derived from both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenIdentifier {
    pub nonce: TokenNonce,
    pub id: TokenId,
    pub owner: Address,
}

impl TokenIdentifier {
    pub fn new(nonce: TokenNonce, owner: Address) -> Self {
        Self { nonce, id: TokenId::from_nonce(&nonce, &owner), owner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NetworkType, PublicAccount};

    fn owner() -> Address {
        PublicAccount::from_hex(
            "0000000000000000000000000000000000000000000000000000000000000001",
            NetworkType::TestNet,
        )
        .unwrap()
        .address
    }

    #[test]
    fn token_id_is_deterministic_and_positive() {
        let nonce = TokenNonce::from_hex("0A0B0C0D").unwrap();
        let a = TokenIdentifier::new(nonce, owner());
        let b = TokenIdentifier::new(nonce, owner());
        assert_eq!(a, b);
        assert_eq!(a.id.value() >> 63, 0);
    }

    #[test]
    fn token_id_depends_on_nonce() {
        let a = TokenId::from_nonce(&TokenNonce::from_bytes([0, 0, 0, 1]), &owner());
        let b = TokenId::from_nonce(&TokenNonce::from_bytes([0, 0, 0, 2]), &owner());
        assert_ne!(a, b);
    }

    #[test]
    fn namespace_children_differ_from_roots() {
        let root = NamespaceId::from_name("company", None);
        let child = NamespaceId::from_name("token", Some(root));
        assert_ne!(child, NamespaceId::from_name("token", None));
        assert_eq!(NamespaceId::from_path("company.token"), child);
        assert_eq!(root.value() >> 63, 1);
    }

    #[test]
    fn token_id_hex_round_trip() {
        let id = TokenId::new(0x1234_5678_9ABC_DEF0);
        assert_eq!(id.to_hex(), "123456789ABCDEF0");
        assert_eq!(TokenId::from_hex("123456789abcdef0").unwrap(), id);
    }
}
