//! Transactions - one unsigned operation per call. No hidden state, no I/O.
//!
//! Every constructor copies the context's network type, deadline and max fee into
//! the operation it returns.

use crate::context::Context;
use crate::models::{
    AccountRestrictionFlags, Address, NamespaceId, NamespaceRegistrationType, PublicKey, SupplyChangeAction,
    TokenAmount, TokenFlags, TokenId, TokenIdentifier, TokenRestrictionType, Transaction, TransactionBody,
};
use sha2::{Digest, Sha256};

/// Previous value of an address restriction that was never set.
pub const UNSET_RESTRICTION_VALUE: u64 = u64::MAX;

/// `sha256(name)`, first 8 bytes little-endian.
pub fn restriction_key(name: &str) -> u64 {
    let hash = Sha256::digest(name.as_bytes());
    let mut key = [0u8; 8];
    key.copy_from_slice(&hash[..8]);
    u64::from_le_bytes(key)
}

fn build(context: &Context, body: TransactionBody) -> Transaction {
    let parameters = context.parameters();
    Transaction {
        network_type: context.network().network_type,
        deadline: parameters.deadline,
        max_fee: parameters.max_fee,
        body,
    }
}

pub fn create_transfer(
    context: &Context,
    recipient: &Address,
    mosaics: Vec<TokenAmount>,
    message: Option<String>,
) -> Transaction {
    build(context, TransactionBody::Transfer { recipient: *recipient, mosaics, message })
}

pub fn create_multisig_account_modification(
    context: &Context,
    min_approval_delta: i8,
    min_removal_delta: i8,
    additions: &[PublicKey],
    deletions: &[PublicKey],
) -> Transaction {
    build(
        context,
        TransactionBody::MultisigAccountModification {
            min_approval_delta,
            min_removal_delta,
            additions: additions.to_vec(),
            deletions: deletions.to_vec(),
        },
    )
}

/// `parent` is the full dot-separated path of the parent namespace, `None` for a root.
pub fn create_namespace_registration(context: &Context, duration: u64, name: &str, parent: Option<&str>) -> Transaction {
    let parent_id = parent.map(NamespaceId::from_path);
    let registration_type = match parent_id {
        Some(_) => NamespaceRegistrationType::Child,
        None => NamespaceRegistrationType::Root,
    };
    build(
        context,
        TransactionBody::NamespaceRegistration {
            registration_type,
            name: name.to_string(),
            id: NamespaceId::from_name(name, parent_id),
            parent_id,
            duration,
        },
    )
}

pub fn create_token_definition(
    context: &Context,
    identifier: &TokenIdentifier,
    flags: TokenFlags,
    divisibility: u8,
    duration: u64,
) -> Transaction {
    build(
        context,
        TransactionBody::TokenDefinition { nonce: identifier.nonce, id: identifier.id, flags, divisibility, duration },
    )
}

pub fn create_token_supply_change(
    context: &Context,
    token_id: TokenId,
    action: SupplyChangeAction,
    delta: u64,
) -> Transaction {
    build(context, TransactionBody::TokenSupplyChange { token_id, action, delta })
}

pub fn create_account_token_restriction(
    context: &Context,
    flags: AccountRestrictionFlags,
    additions: &[TokenId],
    deletions: &[TokenId],
) -> Transaction {
    build(
        context,
        TransactionBody::AccountTokenRestriction { flags, additions: additions.to_vec(), deletions: deletions.to_vec() },
    )
}

/// New global rule on `token_id`; there is no previous rule and no reference token.
pub fn create_token_global_restriction(
    context: &Context,
    token_id: TokenId,
    key: &str,
    new_type: TokenRestrictionType,
    new_value: u64,
) -> Transaction {
    build(
        context,
        TransactionBody::TokenGlobalRestriction {
            token_id,
            reference_token_id: TokenId::new(0),
            restriction_key: restriction_key(key),
            previous_value: 0,
            previous_type: TokenRestrictionType::None,
            new_value,
            new_type,
        },
    )
}

pub fn create_token_address_restriction(
    context: &Context,
    token_id: TokenId,
    key: &str,
    target: &Address,
    previous_value: Option<u64>,
    new_value: u64,
) -> Transaction {
    build(
        context,
        TransactionBody::TokenAddressRestriction {
            token_id,
            restriction_key: restriction_key(key),
            target_address: *target,
            previous_value: previous_value.unwrap_or(UNSET_RESTRICTION_VALUE),
            new_value,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Deadline, NetworkConfig, NetworkType, PublicAccount, TransactionParameters};

    fn context() -> Context {
        let actor = PublicAccount::new(PublicKey::from_bytes([1u8; 32]), NetworkType::TestNet);
        Context::new(1, NetworkConfig::testnet(), actor)
            .with_parameters(TransactionParameters::default().with_deadline(Deadline::at_millis(1_000)).with_max_fee(50))
    }

    #[test]
    fn parameters_are_threaded_through() {
        let ctx = context();
        let tx = create_transfer(&ctx, &ctx.actor().address, vec![], Some("hi".into()));
        assert_eq!(tx.network_type, NetworkType::TestNet);
        assert_eq!(tx.deadline, Deadline::at_millis(1_000));
        assert_eq!(tx.max_fee, 50);
        assert_eq!(tx.kind(), "transfer");
    }

    #[test]
    fn child_namespace_points_at_parent_path() {
        let ctx = context();
        let tx = create_namespace_registration(&ctx, 10, "c", Some("a.b"));
        match tx.body {
            TransactionBody::NamespaceRegistration { registration_type, parent_id, id, .. } => {
                assert_eq!(registration_type, NamespaceRegistrationType::Child);
                assert_eq!(parent_id, Some(NamespaceId::from_path("a.b")));
                assert_eq!(id, NamespaceId::from_path("a.b.c"));
            }
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[test]
    fn unset_previous_address_restriction_value() {
        let ctx = context();
        let tx = create_token_address_restriction(&ctx, TokenId::new(1), "User_Role", &ctx.actor().address, None, 3);
        match tx.body {
            TransactionBody::TokenAddressRestriction { previous_value, new_value, restriction_key: key, .. } => {
                assert_eq!(previous_value, UNSET_RESTRICTION_VALUE);
                assert_eq!(new_value, 3);
                assert_eq!(key, restriction_key("User_Role"));
            }
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[test]
    fn restriction_key_is_stable() {
        assert_eq!(restriction_key("User_Role"), restriction_key("User_Role"));
        assert_ne!(restriction_key("User_Role"), restriction_key("user_role"));
    }
}
