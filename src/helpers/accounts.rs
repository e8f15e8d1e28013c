//! Accounts - addresses from public keys, signing material from secret keys.
//!
//! Address layout:
//!
//! | Bytes | Content |
//! |-------|---------|
//! | 0 | network byte |
//! | 1..21 | first 20 bytes of `sha256(public_key)` |
//! | 21..24 | first 3 bytes of `sha256(bytes 0..21)` |

use crate::errors::{CommandError, CommandResult};
use crate::models::{Address, NetworkType, PublicAccount, PublicKey};
use bitcoin::secp256k1::{Secp256k1, SecretKey};
use sha2::{Digest, Sha256};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

pub const ADDRESS_LENGTH: usize = 24;
const KEY_HASH_LENGTH: usize = 20;
const CHECKSUM_LENGTH: usize = 3;

pub fn address_from_public_key(public_key: &PublicKey, network: NetworkType) -> Address {
    let mut raw = [0u8; ADDRESS_LENGTH];
    raw[0] = network.byte();
    let hash = Sha256::digest(public_key.as_bytes());
    raw[1..=KEY_HASH_LENGTH].copy_from_slice(&hash[..KEY_HASH_LENGTH]);
    let checksum = Sha256::digest(&raw[..=KEY_HASH_LENGTH]);
    raw[KEY_HASH_LENGTH + 1..].copy_from_slice(&checksum[..CHECKSUM_LENGTH]);
    Address::from_raw(raw)
}

pub fn public_account(public_key: PublicKey, network: NetworkType) -> PublicAccount {
    PublicAccount { public_key, address: address_from_public_key(&public_key, network) }
}

/// Known network byte and matching checksum.
pub fn is_valid_address(raw: &[u8; ADDRESS_LENGTH]) -> bool {
    if NetworkType::from_byte(raw[0]).is_none() {
        return false;
    }
    let checksum = Sha256::digest(&raw[..=KEY_HASH_LENGTH]);
    raw[KEY_HASH_LENGTH + 1..] == checksum[..CHECKSUM_LENGTH]
}

/// Secret signing material. The secret is wiped on drop and never leaves this struct
/// except through [`Account::secret_bytes`].
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Account {
    secret: [u8; 32],
    #[zeroize(skip)]
    public_account: PublicAccount,
}

impl Account {
    pub fn from_secret_key(secret: [u8; 32], network: NetworkType) -> CommandResult<Self> {
        let secp = Secp256k1::new();
        let sk = SecretKey::from_slice(&secret)
            .map_err(|e| CommandError::invalid_argument("secret_key", e.to_string()))?;
        let public_key = PublicKey::from_bytes(sk.public_key(&secp).x_only_public_key().0.serialize());
        Ok(Self { secret, public_account: public_account(public_key, network) })
    }

    /// First 32 bytes of a 64-byte seed, as produced by a keychain.
    pub fn from_seed(seed: &[u8; 64], network: NetworkType) -> CommandResult<Self> {
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&seed[..32]);
        let account = Self::from_secret_key(secret, network);
        secret.zeroize();
        account
    }

    pub fn public_account(&self) -> &PublicAccount { &self.public_account }
    pub fn public_key(&self) -> &PublicKey { &self.public_account.public_key }
    pub fn address(&self) -> &Address { &self.public_account.address }
    pub fn secret_bytes(&self) -> &[u8; 32] { &self.secret }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account").field("public_account", &self.public_account).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> [u8; 64] {
        let mut seed = [0u8; 64];
        seed[..32].copy_from_slice(&[
            0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08,
            0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, 0x10,
            0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18,
            0x19, 0x1a, 0x1b, 0x1c, 0x1d, 0x1e, 0x1f, 0x20,
        ]);
        seed
    }

    #[test]
    fn address_starts_with_network_byte() {
        let key = PublicKey::from_bytes([7u8; 32]);
        let main = address_from_public_key(&key, NetworkType::MainNet);
        let test = address_from_public_key(&key, NetworkType::TestNet);
        assert_eq!(main.as_bytes()[0], 0x68);
        assert_eq!(test.as_bytes()[0], 0x98);
        assert_eq!(main.as_bytes()[1..21], test.as_bytes()[1..21]);
        assert!(is_valid_address(main.as_bytes()));
    }

    #[test]
    fn unknown_network_byte_is_invalid() {
        let key = PublicKey::from_bytes([7u8; 32]);
        let mut raw = *address_from_public_key(&key, NetworkType::MainNet).as_bytes();
        raw[0] = 0x01;
        assert!(!is_valid_address(&raw));
    }

    #[test]
    fn account_from_seed_is_deterministic() {
        let a = Account::from_seed(&seed(), NetworkType::TestNet).unwrap();
        let b = Account::from_seed(&seed(), NetworkType::TestNet).unwrap();
        assert_eq!(a.public_account(), b.public_account());
        assert_eq!(a.public_key().to_hex().len(), 64);
    }

    #[test]
    fn zero_secret_is_rejected() {
        assert!(Account::from_secret_key([0u8; 32], NetworkType::TestNet).is_err());
    }

    #[test]
    fn debug_hides_secret() {
        let account = Account::from_seed(&seed(), NetworkType::TestNet).unwrap();
        assert!(!format!("{:?}", account).contains("secret"));
    }
}
