//! Standard - the set of commands a protocol revision offers.

use crate::command::Executable;
use crate::context::Context;
use crate::errors::CommandResult;
use crate::models::PublicAccount;

pub trait Standard: Send + Sync {
    fn name(&self) -> &'static str;

    fn revision(&self) -> u32;

    /// Registered command names.
    fn commands(&self) -> Vec<&'static str>;

    /// Instantiate `command` bound to `context`, governing `target`.
    /// Unregistered names fail with `InvalidCommand`.
    fn get_command(&self, command: &str, context: Context, target: PublicAccount) -> CommandResult<Box<dyn Executable>>;

    fn has_command(&self, command: &str) -> bool { self.commands().contains(&command) }
}
