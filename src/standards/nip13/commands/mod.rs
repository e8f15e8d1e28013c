//! NIP13 token commands and the argument decoding they share.

mod add_operator;
mod create_token;
mod remove_operator;

pub use add_operator::{AddOperator, OperatorChangeArgs};
pub use create_token::{CreateToken, CreateTokenArgs};
pub use remove_operator::RemoveOperator;

use super::constants::{namespaces, MAXIMUM_OPERATORS, MINIMUM_OPERATORS};
use crate::context::Context;
use crate::errors::{CommandError, CommandResult};
use crate::helpers::derivation;
use crate::ledger::{LedgerReader, MultisigInfo};
use crate::models::{Operator, PublicAccount, Role, TokenIdentifier};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

static NAMESPACE_NAME: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

/// Split a dot-separated token name and check every segment.
pub(crate) fn namespace_segments(name: &str) -> CommandResult<Vec<String>> {
    let pattern = NAMESPACE_NAME
        .get_or_init(|| Regex::new(namespaces::NAME_PATTERN))
        .as_ref()
        .map_err(|e| CommandError::CommandExecutionFailure(e.to_string()))?;

    let segments: Vec<String> = name.split('.').map(str::to_string).collect();
    if segments.len() > namespaces::MAXIMUM_DEPTH {
        return Err(CommandError::invalid_argument(
            "name",
            format!("{} levels, at most {} allowed", segments.len(), namespaces::MAXIMUM_DEPTH),
        ));
    }
    for segment in &segments {
        if segment.len() > namespaces::MAXIMUM_NAME_LENGTH || !pattern.is_match(segment) {
            return Err(CommandError::invalid_argument("name", format!("invalid namespace segment '{}'", segment)));
        }
    }
    Ok(segments)
}

/// `identifier` seed (string or number) → token identity owned by `target`.
pub(crate) fn read_identifier(context: &Context, target: &PublicAccount) -> CommandResult<TokenIdentifier> {
    let seed = match context.get_input("identifier", Value::Null)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        other => return Err(CommandError::invalid_argument("identifier", format!("unsupported seed {}", other))),
    };
    derivation::derive_token_identifier(&seed, &target.address)
}

pub(crate) fn read_operators(context: &Context, target: &PublicAccount) -> CommandResult<Vec<Operator>> {
    let operators: Vec<Operator> = context.get_input("operators", Vec::new())?;
    for (i, operator) in operators.iter().enumerate() {
        check_operator(operator, target, "operators")?;
        if operators[..i].iter().any(|o| o.public_key == operator.public_key) {
            return Err(CommandError::invalid_argument("operators", format!("duplicate operator {}", operator.public_key)));
        }
    }
    if operators.len() < MINIMUM_OPERATORS {
        return Err(CommandError::MinimumRequiredOperators { required: MINIMUM_OPERATORS, found: operators.len() });
    }
    if operators.len() > MAXIMUM_OPERATORS {
        return Err(CommandError::invalid_argument(
            "operators",
            format!("{} operators, at most {} allowed", operators.len(), MAXIMUM_OPERATORS),
        ));
    }
    Ok(operators)
}

pub(crate) fn read_operator(context: &Context, target: &PublicAccount) -> CommandResult<Operator> {
    let operator = context
        .get_input::<Option<Operator>>("operator", None)?
        .ok_or_else(|| CommandError::MissingArgument("operator".into()))?;
    check_operator(&operator, target, "operator")?;
    Ok(operator)
}

fn check_operator(operator: &Operator, target: &PublicAccount, argument: &str) -> CommandResult<()> {
    if operator.role != Role::Operator {
        return Err(CommandError::invalid_argument(argument, "cosignatories must carry the operator role"));
    }
    if operator.public_key == target.public_key {
        return Err(CommandError::invalid_argument(argument, "the token account cannot cosign for itself"));
    }
    Ok(())
}

/// Approvals required for `count` cosignatories: all but one.
pub(crate) fn threshold(count: usize) -> CommandResult<u8> {
    if count < MINIMUM_OPERATORS {
        return Err(CommandError::MinimumRequiredOperators { required: MINIMUM_OPERATORS, found: count });
    }
    u8::try_from(count - 1).map_err(|_| CommandError::invalid_argument("operators", "too many operators"))
}

/// Delta moving `current` to the threshold for `count` cosignatories.
pub(crate) fn threshold_delta(current: u8, count: usize) -> CommandResult<i8> {
    let delta = i16::from(threshold(count)?) - i16::from(current);
    i8::try_from(delta).map_err(|_| CommandError::CommandExecutionFailure(format!("threshold delta {} out of range", delta)))
}

/// Multisig state of a token account, readable only by one of its cosignatories.
pub(crate) async fn read_governance(
    ledger: &dyn LedgerReader,
    context: &Context,
    target: &PublicAccount,
) -> CommandResult<MultisigInfo> {
    let Some(info) = ledger.multisig_info(&target.address).await? else {
        let reason = if ledger.account_exists(&target.address).await? {
            format!("{} is not a NIP13 token account", target.address)
        } else {
            format!("{} is unknown to the ledger", target.address)
        };
        return Err(CommandError::CommandExecutionFailure(reason));
    };
    if !info.is_cosignatory(&context.actor().public_key) {
        return Err(CommandError::OperationForbidden(format!(
            "{} is not an operator of {}",
            context.actor().address,
            target.address
        )));
    }
    Ok(info)
}
