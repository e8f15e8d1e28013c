//! Derivation - account keys from a mnemonic, token nonces from seeds.
//!
//! Token accounts live under a fully hardened BIP44 path with the ledger's coin type:
//!
//! ```text
//! m / 44' / 4343' / {account}' / 0' / 0'
//! ```
//!
//! Each issued token gets its own account index, so a compromised token account
//! does not expose the others derived from the same mnemonic.

use crate::errors::{CommandError, CommandResult};
use crate::helpers::accounts::Account;
use crate::models::{Address, NetworkType, TokenIdentifier, TokenNonce};
use bip39::Mnemonic;
use bitcoin::bip32::{ChildNumber, DerivationPath, Xpriv};
use bitcoin::secp256k1::Secp256k1;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::str::FromStr;

pub const PURPOSE: u32 = 44;
pub const COIN_TYPE: u32 = 4343;
pub const PATH_DEPTH: usize = 5;

/// Domain key for nonce derivation
const NONCE_DOMAIN: &[u8] = b"NIP13";

/// `m/44'/4343'/{index}'/0'/0'`
pub fn account_path(index: u32) -> String {
    format!("m/{}'/{}'/{}'/0'/0'", PURPOSE, COIN_TYPE, index)
}

/// Parse a path and check it is a NIP13 account path.
pub fn parse_path(path: &str) -> CommandResult<DerivationPath> {
    let parsed = DerivationPath::from_str(path.trim())
        .map_err(|e| CommandError::InvalidDerivationPath(format!("{}: {}", path, e)))?;
    validate_path(&parsed)?;
    Ok(parsed)
}

pub fn validate_path(path: &DerivationPath) -> CommandResult<()> {
    let children: &[ChildNumber] = path.as_ref();
    if children.len() != PATH_DEPTH {
        return Err(CommandError::InvalidDerivationPath(format!(
            "{}: expected depth {}, got {}",
            path,
            PATH_DEPTH,
            children.len()
        )));
    }

    let mut indexes = Vec::with_capacity(PATH_DEPTH);
    for child in children {
        match child {
            ChildNumber::Hardened { index } => indexes.push(*index),
            ChildNumber::Normal { .. } => {
                return Err(CommandError::InvalidDerivationPath(format!("{}: all levels must be hardened", path)))
            }
        }
    }

    if indexes[0] != PURPOSE || indexes[1] != COIN_TYPE {
        return Err(CommandError::InvalidDerivationPath(format!(
            "{}: expected prefix m/{}'/{}'",
            path, PURPOSE, COIN_TYPE
        )));
    }
    Ok(())
}

/// Derive the account at `path` from a BIP39 mnemonic.
pub fn derive_account(
    mnemonic: &str,
    passphrase: Option<&str>,
    path: &str,
    network: NetworkType,
) -> CommandResult<Account> {
    let path = parse_path(path)?;

    let mnemonic = Mnemonic::parse_normalized(mnemonic)
        .map_err(|e| CommandError::invalid_argument("mnemonic", e.to_string()))?;
    let seed = mnemonic.to_seed(passphrase.unwrap_or(""));

    let secp = Secp256k1::new();
    let master = Xpriv::new_master(bitcoin::Network::Bitcoin, &seed)
        .map_err(|e| CommandError::CommandExecutionFailure(e.to_string()))?;
    let derived = master
        .derive_priv(&secp, &path)
        .map_err(|e| CommandError::InvalidDerivationPath(e.to_string()))?;

    Account::from_secret_key(derived.private_key.secret_bytes(), network)
}

/// Token account at `index`: shorthand for [`derive_account`] with [`account_path`].
pub fn derive_token_account(
    mnemonic: &str,
    passphrase: Option<&str>,
    index: u32,
    network: NetworkType,
) -> CommandResult<Account> {
    derive_account(mnemonic, passphrase, &account_path(index), network)
}

/// An 8-character hex seed is taken as the nonce itself; anything else is hashed.
pub fn derive_nonce(seed: &str) -> CommandResult<TokenNonce> {
    let seed = seed.trim();
    if seed.is_empty() {
        return Err(CommandError::invalid_argument("identifier", "must not be empty"));
    }
    if seed.len() == 8 && seed.chars().all(|c| c.is_ascii_hexdigit()) {
        return TokenNonce::from_hex(seed);
    }

    let mut hmac = Hmac::<Sha256>::new_from_slice(NONCE_DOMAIN)
        .map_err(|e| CommandError::CommandExecutionFailure(e.to_string()))?;
    hmac.update(seed.as_bytes());
    let result = hmac.finalize().into_bytes();

    let mut nonce = [0u8; 4];
    nonce.copy_from_slice(&result[..4]);
    Ok(TokenNonce::from_bytes(nonce))
}

pub fn derive_token_identifier(seed: &str, owner: &Address) -> CommandResult<TokenIdentifier> {
    Ok(TokenIdentifier::new(derive_nonce(seed)?, *owner))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_account_path_format() {
        assert_eq!(account_path(7), "m/44'/4343'/7'/0'/0'");
        assert!(parse_path(&account_path(7)).is_ok());
    }

    #[test]
    fn test_rejects_malformed_paths() {
        for path in [
            "",
            "not/a/path",
            "m/44'/4343'/0'/0'",
            "m/44'/4343'/0'/0'/0",
            "m/44'/60'/0'/0'/0'",
            "m/49'/4343'/0'/0'/0'",
            "m/44'/4343'/0'/0'/0'/0'",
        ] {
            assert!(
                matches!(parse_path(path), Err(CommandError::InvalidDerivationPath(_))),
                "accepted {}",
                path
            );
        }
    }

    #[test]
    fn test_deterministic_derivation() {
        let a = derive_token_account(TEST_MNEMONIC, None, 0, NetworkType::TestNet).unwrap();
        let b = derive_token_account(TEST_MNEMONIC, None, 0, NetworkType::TestNet).unwrap();
        assert_eq!(a.public_account(), b.public_account());
    }

    #[test]
    fn test_different_indices() {
        let a = derive_token_account(TEST_MNEMONIC, None, 0, NetworkType::TestNet).unwrap();
        let b = derive_token_account(TEST_MNEMONIC, None, 1, NetworkType::TestNet).unwrap();
        assert_ne!(a.public_key(), b.public_key());
    }

    #[test]
    fn test_invalid_mnemonic() {
        let result = derive_token_account("abandon abandon", None, 0, NetworkType::TestNet);
        assert!(matches!(result, Err(CommandError::InvalidArgument { .. })));
    }

    #[test]
    fn test_hex_seed_is_literal_nonce() {
        assert_eq!(derive_nonce("0a0b0c0d").unwrap().as_bytes(), &[0x0a, 0x0b, 0x0c, 0x0d]);
    }

    #[test]
    fn test_text_seed_is_hashed_deterministically() {
        let a = derive_nonce("my-first-token").unwrap();
        let b = derive_nonce("my-first-token").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, derive_nonce("my-second-token").unwrap());
        assert!(derive_nonce("  ").is_err());
    }
}
