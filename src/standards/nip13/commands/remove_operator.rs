//! RemoveOperator - removes a cosignatory and demotes it to guest.

use super::{read_governance, threshold_delta, OperatorChangeArgs};
use crate::command::{BaseCommand, Command};
use crate::context::Context;
use crate::errors::{CommandError, CommandResult};
use crate::helpers::transactions::{create_multisig_account_modification, create_token_address_restriction};
use crate::ledger::{LedgerReader, MultisigInfo};
use crate::models::{CommandOption, InnerTransaction, Role};
use crate::standards::nip13::constants::{actions, MINIMUM_OPERATORS, ROLE_KEY};
use async_trait::async_trait;

const OPTIONS: &[CommandOption] = &[
    CommandOption::required("identifier", "Nonce seed the token was created with"),
    CommandOption::required("operator", "Public key of the operator"),
];

pub struct RemoveOperator {
    base: BaseCommand,
}

impl RemoveOperator {
    pub fn new(base: BaseCommand) -> Self { Self { base } }
}

#[async_trait]
impl Command for RemoveOperator {
    type State = MultisigInfo;

    fn name(&self) -> &'static str { "RemoveOperator" }
    fn options(&self) -> &'static [CommandOption] { OPTIONS }
    fn context(&self) -> &Context { &self.base.context }

    fn validate(&self) -> CommandResult<()> {
        self.require_arguments()?;
        OperatorChangeArgs::read(&self.base).map(|_| ())
    }

    async fn synchronize(&self, ledger: &dyn LedgerReader) -> CommandResult<MultisigInfo> {
        let info = read_governance(ledger, &self.base.context, &self.base.target).await?;
        let args = OperatorChangeArgs::read(&self.base)?;
        if !info.is_cosignatory(&args.operator.public_key) {
            return Err(CommandError::invalid_argument("operator", format!("{} is not an operator", args.operator.public_key)));
        }
        let remaining = info.cosignatories.len() - 1;
        if remaining < MINIMUM_OPERATORS {
            return Err(CommandError::MinimumRequiredOperators { required: MINIMUM_OPERATORS, found: remaining });
        }
        Ok(info)
    }

    fn assemble(&self, info: MultisigInfo) -> CommandResult<Vec<InnerTransaction>> {
        let args = OperatorChangeArgs::read(&self.base)?;
        let context = &self.base.context;
        let target = &self.base.target;
        let count = info.cosignatories.len().saturating_sub(1);
        let approval_delta = threshold_delta(info.min_approval, count)?;
        let removal_delta = threshold_delta(info.min_removal, count)?;
        let operator = args.operator.public_account(context.network().network_type);

        Ok(vec![
            self.base.proof_of_intent(actions::REMOVE_OPERATOR, &args.identifier),
            create_multisig_account_modification(context, approval_delta, removal_delta, &[], &[operator.public_key])
                .to_aggregate(target),
            create_token_address_restriction(
                context,
                args.identifier.id,
                ROLE_KEY,
                &operator.address,
                Some(Role::Operator.value()),
                Role::Guest.value(),
            )
            .to_aggregate(target),
        ])
    }
}
