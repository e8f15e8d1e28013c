//! Public identities: keys, addresses and the pair of both.

use crate::errors::{CommandError, CommandResult};
use crate::helpers::accounts;
use crate::models::network::NetworkType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 32-byte public key, hex encoded on the wire.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PublicKey([u8; 32]);

impl PublicKey {
    pub fn from_bytes(bytes: [u8; 32]) -> Self { Self(bytes) }

    pub fn from_hex(value: &str) -> CommandResult<Self> {
        let bytes = hex::decode(value.trim())
            .map_err(|e| CommandError::invalid_argument("public_key", format!("invalid hex: {}", e)))?;
        let bytes: [u8; 32] = bytes.try_into().map_err(|b: Vec<u8>| {
            CommandError::invalid_argument("public_key", format!("must be 32 bytes, got {}", b.len()))
        })?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 32] { &self.0 }
    pub fn to_hex(&self) -> String { hex::encode_upper(self.0) }
}

impl TryFrom<String> for PublicKey {
    type Error = CommandError;
    fn try_from(value: String) -> CommandResult<Self> { Self::from_hex(&value) }
}

impl From<PublicKey> for String {
    fn from(key: PublicKey) -> Self { key.to_hex() }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.to_hex()) }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "PublicKey({})", self.to_hex()) }
}

/// Ledger address: network byte, 20-byte key hash and a 3-byte checksum.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address([u8; accounts::ADDRESS_LENGTH]);

impl Address {
    pub(crate) fn from_raw(bytes: [u8; accounts::ADDRESS_LENGTH]) -> Self { Self(bytes) }

    /// Parse an upper- or lower-case hex address and verify its checksum.
    pub fn from_hex(value: &str) -> CommandResult<Self> {
        let bytes = hex::decode(value.trim())
            .map_err(|e| CommandError::invalid_argument("address", format!("invalid hex: {}", e)))?;
        let bytes: [u8; accounts::ADDRESS_LENGTH] = bytes.try_into().map_err(|b: Vec<u8>| {
            CommandError::invalid_argument(
                "address",
                format!("must be {} bytes, got {}", accounts::ADDRESS_LENGTH, b.len()),
            )
        })?;
        if !accounts::is_valid_address(&bytes) {
            return Err(CommandError::invalid_argument("address", "checksum mismatch"));
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; accounts::ADDRESS_LENGTH] { &self.0 }
    pub fn to_hex(&self) -> String { hex::encode_upper(self.0) }

    pub fn network_type(&self) -> Option<NetworkType> { NetworkType::from_byte(self.0[0]) }
}

impl TryFrom<String> for Address {
    type Error = CommandError;
    fn try_from(value: String) -> CommandResult<Self> { Self::from_hex(&value) }
}

impl From<Address> for String {
    fn from(address: Address) -> Self { address.to_hex() }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.to_hex()) }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Address({})", self.to_hex()) }
}

/// A public key together with its address on one network.
/// Deserialization rejects an address that was not derived from `public_key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PublicAccountRepr")]
pub struct PublicAccount {
    pub public_key: PublicKey,
    pub address: Address,
}

#[derive(Deserialize)]
struct PublicAccountRepr {
    public_key: PublicKey,
    address: Address,
}

impl TryFrom<PublicAccountRepr> for PublicAccount {
    type Error = CommandError;

    fn try_from(repr: PublicAccountRepr) -> CommandResult<Self> {
        let network = repr
            .address
            .network_type()
            .ok_or_else(|| CommandError::invalid_argument("address", "unknown network byte"))?;
        let account = Self::new(repr.public_key, network);
        if account.address != repr.address {
            return Err(CommandError::invalid_argument(
                "address",
                format!("{} does not belong to {}", repr.address, repr.public_key),
            ));
        }
        Ok(account)
    }
}

impl PublicAccount {
    pub fn new(public_key: PublicKey, network: NetworkType) -> Self {
        accounts::public_account(public_key, network)
    }

    pub fn from_hex(public_key: &str, network: NetworkType) -> CommandResult<Self> {
        Ok(Self::new(PublicKey::from_hex(public_key)?, network))
    }
}
