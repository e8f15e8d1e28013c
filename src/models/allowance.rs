//! Allowance - whether an account may hold a token under the rules a token account publishes.

use crate::models::account::Address;
use crate::models::identifiers::TokenId;
use crate::models::operator::Role;
use crate::models::restrictions::{AccountRestriction, TokenRestriction, TokenRestrictionType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowanceDenial {
    /// The account's own allow/block list excludes the token.
    NotListed,
    /// No role recorded for the account under the rule's key.
    RoleUnset,
    /// A role is recorded but fails the rule's comparison.
    RoleBelowRule,
}

/// Outcome of checking one account against a token's restrictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceResult {
    pub token_id: TokenId,
    pub address: Address,
    pub role: Option<Role>,
    pub allowed: bool,
    pub denial: Option<AllowanceDenial>,
}

impl AllowanceResult {
    /// `flag` is the account's value under `rule.key`. `account` is the address's own
    /// token restriction, if it has one; the list is checked before the role.
    pub fn evaluate(
        rule: &TokenRestriction,
        account: Option<&AccountRestriction>,
        address: Address,
        flag: Option<u64>,
    ) -> Self {
        let denial = if account.is_some_and(|list| !list.allows(&rule.token_id)) {
            Some(AllowanceDenial::NotListed)
        } else if flag.is_none() && rule.restriction_type != TokenRestrictionType::None {
            Some(AllowanceDenial::RoleUnset)
        } else if !rule.allows(flag) {
            Some(AllowanceDenial::RoleBelowRule)
        } else {
            None
        };

        Self {
            token_id: rule.token_id,
            address,
            role: flag.and_then(Role::from_value),
            allowed: denial.is_none(),
            denial,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountRestrictionFlags, NetworkType, PublicAccount, PublicKey};

    fn address() -> Address { PublicAccount::new(PublicKey::from_bytes([5u8; 32]), NetworkType::TestNet).address }

    fn rule() -> TokenRestriction {
        TokenRestriction {
            token_id: TokenId::new(11),
            key: 7,
            restriction_type: TokenRestrictionType::Ge,
            value: Role::Holder.value(),
        }
    }

    #[test]
    fn holders_and_operators_are_allowed() {
        for role in [Role::Holder, Role::Operator] {
            let result = AllowanceResult::evaluate(&rule(), None, address(), Some(role.value()));
            assert!(result.allowed);
            assert_eq!(result.role, Some(role));
            assert_eq!(result.denial, None);
        }
    }

    #[test]
    fn guests_fall_below_the_rule() {
        let result = AllowanceResult::evaluate(&rule(), None, address(), Some(Role::Guest.value()));
        assert!(!result.allowed);
        assert_eq!(result.denial, Some(AllowanceDenial::RoleBelowRule));
    }

    #[test]
    fn unset_role_is_reported_separately() {
        let result = AllowanceResult::evaluate(&rule(), None, address(), None);
        assert_eq!(result.denial, Some(AllowanceDenial::RoleUnset));
        assert_eq!(result.role, None);
    }

    #[test]
    fn account_list_is_checked_first() {
        let list = AccountRestriction {
            address: address(),
            flags: AccountRestrictionFlags::AllowMosaic,
            values: vec![TokenId::new(99)],
        };
        let result = AllowanceResult::evaluate(&rule(), Some(&list), address(), Some(Role::Operator.value()));
        assert!(!result.allowed);
        assert_eq!(result.denial, Some(AllowanceDenial::NotListed));
    }
}
