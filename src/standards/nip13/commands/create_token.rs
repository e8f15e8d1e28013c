//! CreateToken - issues a NIP13 token governed by a multisig operator set.
//!
//! Prepares one aggregate transaction with the following inner transactions:
//!
//! | # | Operation | Signer |
//! |---|-----------|--------|
//! | 01 | Transfer carrying `NIP13(v{rev}):create:{id}` | target |
//! | 02 | Multisig modification, `n - 1` of `n` operators | target |
//! | 03 | Namespace registration, one per name segment | target |
//! | 04 | Token definition | target |
//! | 05 | Supply increase, only when `supply > 0` | target |
//! | 06 | Account restriction allowing the token | target |
//! | 07 | Global restriction `User_Role >= Holder` | target |
//! | 08 | Address restriction `User_Role = Operator`, one per operator | that operator |

use super::{namespace_segments, read_identifier, read_operators, threshold};
use crate::command::{BaseCommand, Command};
use crate::context::Context;
use crate::errors::CommandResult;
use crate::helpers::transactions::{
    create_account_token_restriction, create_multisig_account_modification, create_namespace_registration,
    create_token_address_restriction, create_token_definition, create_token_global_restriction,
    create_token_supply_change,
};
use crate::ledger::LedgerReader;
use crate::models::{
    AccountRestrictionFlags, CommandOption, InnerTransaction, Operator, PublicKey, Role, SupplyChangeAction,
    TokenFlags, TokenIdentifier, TokenRestrictionType, TokenSource,
};
use crate::standards::nip13::constants::{actions, namespaces, token, ROLE_KEY};
use async_trait::async_trait;

const OPTIONS: &[CommandOption] = &[
    CommandOption::required("name", "Dot-separated token name, one namespace per segment"),
    CommandOption::required("source", "Provenance of the token"),
    CommandOption::required("identifier", "Nonce seed the token identifier is derived from"),
    CommandOption::required("operators", "Cosignatory public keys, at least two"),
    CommandOption::optional("supply", "Initial supply, default 1"),
];

/// Decoded and checked `CreateToken` arguments.
#[derive(Debug, Clone)]
pub struct CreateTokenArgs {
    pub name: String,
    pub segments: Vec<String>,
    pub source: TokenSource,
    pub identifier: TokenIdentifier,
    pub operators: Vec<Operator>,
    pub supply: u64,
}

pub struct CreateToken {
    base: BaseCommand,
}

impl CreateToken {
    pub fn new(base: BaseCommand) -> Self { Self { base } }

    pub fn args(&self) -> CommandResult<CreateTokenArgs> {
        let context = &self.base.context;
        let name: String = context.get_input("name", String::new())?;
        let source = TokenSource::new(context.get_input("source", String::new())?)?;
        let identifier = read_identifier(context, &self.base.target)?;
        let supply: u64 = context.get_input("supply", token::DEFAULT_SUPPLY)?;
        let operators = read_operators(context, &self.base.target)?;
        let segments = namespace_segments(&name)?;
        Ok(CreateTokenArgs { name, segments, source, identifier, operators, supply })
    }
}

#[async_trait]
impl Command for CreateToken {
    type State = ();

    fn name(&self) -> &'static str { "CreateToken" }
    fn options(&self) -> &'static [CommandOption] { OPTIONS }
    fn context(&self) -> &Context { &self.base.context }

    fn validate(&self) -> CommandResult<()> {
        self.require_arguments()?;
        let args = self.args()?;
        tracing::debug!(name = %args.name, source = args.source.as_str(), token = %args.identifier.id, "CreateToken validated");
        Ok(())
    }

    /// Nothing to read: the token account is fresh.
    async fn synchronize(&self, _ledger: &dyn LedgerReader) -> CommandResult<()> { Ok(()) }

    fn assemble(&self, _: ()) -> CommandResult<Vec<InnerTransaction>> {
        let args = self.args()?;
        let context = &self.base.context;
        let target = &self.base.target;
        let network = context.network().network_type;
        let id = args.identifier.id;

        let mut transactions = Vec::new();

        // 01
        transactions.push(self.base.proof_of_intent(actions::CREATE, &args.identifier));

        // 02: n-1 approvals so one lost key does not lock the token
        let min_approval = threshold(args.operators.len())? as i8;
        let keys: Vec<PublicKey> = args.operators.iter().map(|o| o.public_key).collect();
        transactions.push(
            create_multisig_account_modification(context, min_approval, min_approval, &keys, &[]).to_aggregate(target),
        );

        // 03: each segment under the full path of its predecessors
        for (i, segment) in args.segments.iter().enumerate() {
            let parent = (i > 0).then(|| args.segments[..i].join("."));
            transactions.push(
                create_namespace_registration(context, namespaces::DURATION, segment, parent.as_deref())
                    .to_aggregate(target),
            );
        }

        // 04
        let flags = TokenFlags { supply_mutable: true, transferable: true, restrictable: true };
        transactions.push(
            create_token_definition(context, &args.identifier, flags, token::DIVISIBILITY, token::DURATION)
                .to_aggregate(target),
        );

        // 05
        if args.supply > 0 {
            transactions.push(
                create_token_supply_change(context, id, SupplyChangeAction::Increase, args.supply).to_aggregate(target),
            );
        }

        // 06
        transactions.push(
            create_account_token_restriction(context, AccountRestrictionFlags::AllowMosaic, &[id], &[])
                .to_aggregate(target),
        );

        // 07: 1 = Guest, 2 = Holder, 3 = Operator
        transactions.push(
            create_token_global_restriction(context, id, ROLE_KEY, TokenRestrictionType::Ge, Role::Holder.value())
                .to_aggregate(target),
        );

        // 08: signed by each operator, not the target
        for operator in &args.operators {
            let account = operator.public_account(network);
            transactions.push(
                create_token_address_restriction(context, id, ROLE_KEY, &account.address, None, Role::Operator.value())
                    .to_aggregate(&account),
            );
        }

        Ok(transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CommandError;
    use crate::models::{NetworkConfig, NetworkType, PublicAccount, TransactionBody};
    use serde_json::json;

    fn account(byte: u8) -> PublicAccount {
        PublicAccount::new(PublicKey::from_bytes([byte; 32]), NetworkType::TestNet)
    }

    fn command(inputs: serde_json::Value) -> CreateToken {
        let context = Context::new(1, NetworkConfig::testnet(), account(1))
            .with_inputs(inputs.as_object().unwrap().clone())
            .unwrap();
        CreateToken::new(BaseCommand::new(context, account(9)))
    }

    fn operators() -> serde_json::Value {
        json!([account(2).public_key, account(3).public_key, account(4).public_key])
    }

    #[test]
    fn declares_required_arguments_in_order() {
        let cmd = command(json!({}));
        assert_eq!(Command::arguments(&cmd), vec!["name", "source", "identifier", "operators"]);
    }

    #[test]
    fn first_missing_argument_is_reported() {
        let cmd = command(json!({"name": "company", "identifier": "0A0B0C0D"}));
        assert_eq!(cmd.validate(), Err(CommandError::MissingArgument("source".into())));
    }

    #[test]
    fn negative_supply_is_rejected() {
        let cmd = command(json!({
            "name": "company", "source": "test", "identifier": "0A0B0C0D",
            "operators": operators(), "supply": -1
        }));
        assert!(matches!(cmd.validate(), Err(CommandError::InvalidArgument { ref name, .. }) if name == "supply"));
    }

    #[test]
    fn operators_with_non_operator_role_are_rejected() {
        let cmd = command(json!({
            "name": "company", "source": "test", "identifier": "0A0B0C0D",
            "operators": [{"public_key": account(2).public_key, "role": "holder"}, account(3).public_key]
        }));
        assert!(matches!(cmd.validate(), Err(CommandError::InvalidArgument { .. })));
    }

    #[test]
    fn token_definition_uses_derived_identifier() {
        let cmd = command(json!({
            "name": "company", "source": "test", "identifier": "0A0B0C0D", "operators": operators()
        }));
        let txs = cmd.assemble(()).unwrap();
        let expected = TokenIdentifier::new(crate::models::TokenNonce::from_hex("0A0B0C0D").unwrap(), account(9).address);
        let definition = txs.iter().find(|t| t.kind() == "token_definition").unwrap();
        match definition.body() {
            TransactionBody::TokenDefinition { id, nonce, divisibility, .. } => {
                assert_eq!(*id, expected.id);
                assert_eq!(*nonce, expected.nonce);
                assert_eq!(*divisibility, 0);
            }
            other => panic!("unexpected body {:?}", other),
        }
    }
}
