//! Command contract: validate → synchronize → assemble.
//!
//! # Phases
//!
//! | Phase | Method | Fails with |
//! |-------|--------|------------|
//! | validate | `validate()` | `MissingArgument`, `InvalidArgument`, command specific |
//! | synchronize | `synchronize(ledger)` | `CommandExecutionFailure`, `OperationForbidden` |
//! | assemble | `assemble(state)` | never emits a partial list |
//!
//! Concrete commands implement [`Command`]. The registry hands them out as
//! `Box<dyn Executable>`, which runs the three phases in order.

use crate::context::Context;
use crate::errors::{CommandError, CommandResult};
use crate::helpers::transactions;
use crate::ledger::LedgerReader;
use crate::models::{CommandOption, InnerTransaction, Notification, PublicAccount, TokenIdentifier};
use async_trait::async_trait;

#[async_trait]
pub trait Command: Send + Sync {
    /// On-chain state read by `synchronize` and consumed by `assemble`.
    type State: Send;

    fn name(&self) -> &'static str;

    fn options(&self) -> &'static [CommandOption];

    /// Required argument names, in declaration order.
    fn arguments(&self) -> Vec<&'static str> {
        self.options().iter().filter(|o| o.required).map(|o| o.name).collect()
    }

    fn context(&self) -> &Context;

    /// Reports the first required argument missing from the register.
    fn require_arguments(&self) -> CommandResult<()> {
        let context = self.context();
        match self.arguments().into_iter().find(|name| !context.has_input(name)) {
            Some(missing) => Err(CommandError::MissingArgument(missing.to_string())),
            None => Ok(()),
        }
    }

    /// Commands that extend validation must call `require_arguments` first.
    fn validate(&self) -> CommandResult<()> { self.require_arguments() }

    async fn synchronize(&self, ledger: &dyn LedgerReader) -> CommandResult<Self::State>;

    fn assemble(&self, state: Self::State) -> CommandResult<Vec<InnerTransaction>>;
}

/// Object-safe face of a [`Command`].
#[async_trait]
pub trait Executable: Send + Sync {
    fn name(&self) -> &'static str;
    fn arguments(&self) -> Vec<&'static str>;
    fn options(&self) -> &'static [CommandOption];
    async fn execute(&self, ledger: &dyn LedgerReader) -> CommandResult<Vec<InnerTransaction>>;
}

#[async_trait]
impl<C: Command> Executable for C {
    fn name(&self) -> &'static str { Command::name(self) }
    fn arguments(&self) -> Vec<&'static str> { Command::arguments(self) }
    fn options(&self) -> &'static [CommandOption] { Command::options(self) }

    async fn execute(&self, ledger: &dyn LedgerReader) -> CommandResult<Vec<InnerTransaction>> {
        let name = Command::name(self);
        if let Err(e) = self.validate() {
            tracing::warn!(command = name, error = %e, "validation failed");
            return Err(e);
        }
        let state = match self.synchronize(ledger).await {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(command = name, error = %e, "synchronization failed");
                return Err(e);
            }
        };
        let transactions = self.assemble(state)?;
        tracing::info!(command = name, count = transactions.len(), "assembled");
        Ok(transactions)
    }
}

/// State shared by every command: the execution context and the governed account.
#[derive(Debug, Clone)]
pub struct BaseCommand {
    pub context: Context,
    pub target: PublicAccount,
}

impl BaseCommand {
    pub fn new(context: Context, target: PublicAccount) -> Self { Self { context, target } }

    /// Data-only transfer from the target to itself carrying the notification message.
    pub fn proof_of_intent(&self, action: &str, identifier: &TokenIdentifier) -> InnerTransaction {
        let notification = Notification::new(self.context.revision(), action, identifier.id);
        transactions::create_transfer(&self.context, &self.target.address, Vec::new(), Some(notification.message()))
            .to_aggregate(&self.target)
    }
}
