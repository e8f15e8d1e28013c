//! Execution context: network, protocol revision, actor and the argument register.
//!
//! One context belongs to one command execution. The register is write-once per key
//! so that arguments cannot change between validation and assembly.

use crate::errors::{CommandError, CommandResult};
use crate::models::{NetworkConfig, PublicAccount, TransactionParameters};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Context {
    revision: u32,
    network: NetworkConfig,
    actor: PublicAccount,
    parameters: TransactionParameters,
    inputs: BTreeMap<String, Value>,
}

impl Context {
    pub fn new(revision: u32, network: NetworkConfig, actor: PublicAccount) -> Self {
        Self { revision, network, actor, parameters: TransactionParameters::default(), inputs: BTreeMap::new() }
    }

    pub fn with_parameters(mut self, parameters: TransactionParameters) -> Self { self.parameters = parameters; self }

    pub fn with_input(mut self, name: impl Into<String>, value: impl Into<Value>) -> CommandResult<Self> {
        self.set_input(name, value)?;
        Ok(self)
    }

    pub fn with_inputs<I, K>(mut self, inputs: I) -> CommandResult<Self>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        for (name, value) in inputs {
            self.set_input(name, value)?;
        }
        Ok(self)
    }

    /// Register an argument. A key written once, even as null, cannot be written again.
    pub fn set_input(&mut self, name: impl Into<String>, value: impl Into<Value>) -> CommandResult<()> {
        let name = name.into();
        if self.inputs.contains_key(&name) {
            return Err(CommandError::invalid_argument(name, "already set for this execution"));
        }
        self.inputs.insert(name, value.into());
        Ok(())
    }

    /// Null counts as absent.
    pub fn has_input(&self, name: &str) -> bool {
        self.inputs.get(name).map(|v| !v.is_null()).unwrap_or(false)
    }

    /// The registered value decoded as `T`, or `default` when absent.
    pub fn get_input<T: DeserializeOwned>(&self, name: &str, default: T) -> CommandResult<T> {
        match self.inputs.get(name) {
            None | Some(Value::Null) => Ok(default),
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| CommandError::invalid_argument(name, e.to_string())),
        }
    }

    pub fn revision(&self) -> u32 { self.revision }
    pub fn network(&self) -> &NetworkConfig { &self.network }
    pub fn actor(&self) -> &PublicAccount { &self.actor }
    pub fn parameters(&self) -> &TransactionParameters { &self.parameters }
    pub fn inputs(&self) -> &BTreeMap<String, Value> { &self.inputs }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NetworkType;
    use serde_json::json;

    fn context() -> Context {
        let actor = PublicAccount::from_hex(
            "0000000000000000000000000000000000000000000000000000000000000009",
            NetworkType::TestNet,
        )
        .unwrap();
        Context::new(1, NetworkConfig::testnet(), actor)
    }

    #[test]
    fn absent_input_yields_default() {
        assert_eq!(context().get_input("supply", 1u64).unwrap(), 1);
    }

    #[test]
    fn null_input_counts_as_absent() {
        let ctx = context().with_input("supply", Value::Null).unwrap();
        assert!(!ctx.has_input("supply"));
        assert_eq!(ctx.get_input("supply", 1u64).unwrap(), 1);
    }

    #[test]
    fn register_is_write_once() {
        let mut ctx = context().with_input("name", "company.token").unwrap();
        assert!(matches!(ctx.set_input("name", "other"), Err(CommandError::InvalidArgument { .. })));
        assert_eq!(ctx.get_input("name", String::new()).unwrap(), "company.token");
    }

    #[test]
    fn null_input_still_claims_its_key() {
        let mut ctx = context().with_input("supply", Value::Null).unwrap();
        let second = ctx.set_input("supply", json!(5));
        assert!(matches!(second, Err(CommandError::InvalidArgument { ref name, .. }) if name == "supply"));
        assert_eq!(ctx.get_input("supply", 1u64).unwrap(), 1);
    }

    #[test]
    fn undecodable_input_is_invalid_argument() {
        let ctx = context().with_input("supply", json!(-5)).unwrap();
        let err = ctx.get_input("supply", 1u64).unwrap_err();
        assert!(matches!(err, CommandError::InvalidArgument { ref name, .. } if name == "supply"));
    }
}
