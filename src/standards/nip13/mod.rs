//! NIP13 - governed token standard.
//!
//! # Commands
//!
//! | Command | Required arguments | Reads ledger |
//! |---------|--------------------|--------------|
//! | `CreateToken` | name, source, identifier, operators | no |
//! | `AddOperator` | identifier, operator | multisig state of the target |
//! | `RemoveOperator` | identifier, operator | multisig state of the target |
//!
//! # Usage
//!
//! ```ignore
//! use nip13::{Context, Nip13, Standard, Snapshot};
//!
//! let context = Context::new(Nip13::REVISION, network, actor)
//!     .with_input("name", "company.token")?
//!     .with_input("source", "company")?
//!     .with_input("identifier", "0A0B0C0D")?
//!     .with_input("operators", json!([op1, op2, op3]))?;
//!
//! let command = Nip13.get_command("CreateToken", context, target)?;
//! let transactions = command.execute(&Snapshot::new()).await?;
//! ```

pub mod commands;
pub mod constants;

use crate::command::{BaseCommand, Executable};
use crate::context::Context;
use crate::errors::{CommandError, CommandResult};
use crate::models::PublicAccount;
use crate::standard::Standard;
use commands::{AddOperator, CreateToken, RemoveOperator};

type Constructor = fn(BaseCommand) -> Box<dyn Executable>;

/// Every command this revision offers.
const REGISTRY: &[(&str, Constructor)] = &[
    ("CreateToken", create_token),
    ("AddOperator", add_operator),
    ("RemoveOperator", remove_operator),
];

fn create_token(base: BaseCommand) -> Box<dyn Executable> { Box::new(CreateToken::new(base)) }
fn add_operator(base: BaseCommand) -> Box<dyn Executable> { Box::new(AddOperator::new(base)) }
fn remove_operator(base: BaseCommand) -> Box<dyn Executable> { Box::new(RemoveOperator::new(base)) }

#[derive(Debug, Clone, Copy, Default)]
pub struct Nip13;

impl Nip13 {
    pub const REVISION: u32 = constants::REVISION;
}

impl Standard for Nip13 {
    fn name(&self) -> &'static str { "NIP13" }

    fn revision(&self) -> u32 { Self::REVISION }

    fn commands(&self) -> Vec<&'static str> { REGISTRY.iter().map(|(name, _)| *name).collect() }

    fn get_command(&self, command: &str, context: Context, target: PublicAccount) -> CommandResult<Box<dyn Executable>> {
        let (_, constructor) = REGISTRY.iter().find(|(name, _)| *name == command).ok_or_else(|| {
            tracing::warn!(standard = "NIP13", command, "unknown command");
            CommandError::InvalidCommand(command.to_string())
        })?;
        tracing::debug!(standard = "NIP13", command, target = %target.address, "command resolved");
        Ok(constructor(BaseCommand::new(context, target)))
    }
}
