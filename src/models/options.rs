//! Command argument declarations

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandOption {
    pub name: &'static str,
    pub required: bool,
    pub description: &'static str,
}

impl CommandOption {
    pub const fn required(name: &'static str, description: &'static str) -> Self {
        Self { name, required: true, description }
    }

    pub const fn optional(name: &'static str, description: &'static str) -> Self {
        Self { name, required: false, description }
    }
}
