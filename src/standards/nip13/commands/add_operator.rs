//! AddOperator - adds a cosignatory to a token account and grants it the operator role.
//!
//! Only an existing operator may issue it. The threshold follows the new set size so
//! that it stays at `n - 1`.

use super::{read_governance, read_identifier, read_operator, threshold_delta};
use crate::command::{BaseCommand, Command};
use crate::context::Context;
use crate::errors::{CommandError, CommandResult};
use crate::helpers::transactions::{create_multisig_account_modification, create_token_address_restriction};
use crate::ledger::{LedgerReader, MultisigInfo};
use crate::models::{CommandOption, InnerTransaction, Operator, Role, TokenIdentifier};
use crate::standards::nip13::constants::{actions, MAXIMUM_OPERATORS, ROLE_KEY};
use async_trait::async_trait;

const OPTIONS: &[CommandOption] = &[
    CommandOption::required("identifier", "Nonce seed the token was created with"),
    CommandOption::required("operator", "Public key of the operator"),
];

/// Arguments shared by the operator set commands.
#[derive(Debug, Clone)]
pub struct OperatorChangeArgs {
    pub identifier: TokenIdentifier,
    pub operator: Operator,
}

impl OperatorChangeArgs {
    pub(crate) fn read(base: &BaseCommand) -> CommandResult<Self> {
        Ok(Self {
            identifier: read_identifier(&base.context, &base.target)?,
            operator: read_operator(&base.context, &base.target)?,
        })
    }
}

pub struct AddOperator {
    base: BaseCommand,
}

impl AddOperator {
    pub fn new(base: BaseCommand) -> Self { Self { base } }
}

#[async_trait]
impl Command for AddOperator {
    type State = MultisigInfo;

    fn name(&self) -> &'static str { "AddOperator" }
    fn options(&self) -> &'static [CommandOption] { OPTIONS }
    fn context(&self) -> &Context { &self.base.context }

    fn validate(&self) -> CommandResult<()> {
        self.require_arguments()?;
        OperatorChangeArgs::read(&self.base).map(|_| ())
    }

    async fn synchronize(&self, ledger: &dyn LedgerReader) -> CommandResult<MultisigInfo> {
        let info = read_governance(ledger, &self.base.context, &self.base.target).await?;
        let args = OperatorChangeArgs::read(&self.base)?;
        if info.is_cosignatory(&args.operator.public_key) {
            return Err(CommandError::invalid_argument("operator", format!("{} is already an operator", args.operator.public_key)));
        }
        if info.cosignatories.len() + 1 > MAXIMUM_OPERATORS {
            return Err(CommandError::invalid_argument("operator", format!("at most {} operators allowed", MAXIMUM_OPERATORS)));
        }
        Ok(info)
    }

    fn assemble(&self, info: MultisigInfo) -> CommandResult<Vec<InnerTransaction>> {
        let args = OperatorChangeArgs::read(&self.base)?;
        let context = &self.base.context;
        let target = &self.base.target;
        let count = info.cosignatories.len() + 1;
        let approval_delta = threshold_delta(info.min_approval, count)?;
        let removal_delta = threshold_delta(info.min_removal, count)?;
        let operator = args.operator.public_account(context.network().network_type);

        Ok(vec![
            self.base.proof_of_intent(actions::ADD_OPERATOR, &args.identifier),
            create_multisig_account_modification(context, approval_delta, removal_delta, &[operator.public_key], &[])
                .to_aggregate(target),
            // new cosignatories sign their own role
            create_token_address_restriction(
                context,
                args.identifier.id,
                ROLE_KEY,
                &operator.address,
                None,
                Role::Operator.value(),
            )
            .to_aggregate(&operator),
        ])
    }
}
