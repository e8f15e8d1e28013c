//! NIP13 protocol constants

/// Protocol revision tagged into every proof-of-intent message.
pub const REVISION: u32 = 1;

/// Operator set bounds for a governed token account.
pub const MINIMUM_OPERATORS: usize = 2;
pub const MAXIMUM_OPERATORS: usize = 25;

/// Namespace limits
pub mod namespaces {
    pub const MAXIMUM_DEPTH: usize = 3;
    pub const MAXIMUM_NAME_LENGTH: usize = 64;
    pub const NAME_PATTERN: &str = r"^[a-z0-9][a-z0-9_-]*$";

    /// Registration length in blocks.
    pub const DURATION: u64 = 2_010_240;
}

/// Token definition properties
pub mod token {
    pub const DURATION: u64 = 2_010_240;
    pub const DIVISIBILITY: u8 = 0;
    pub const DEFAULT_SUPPLY: u64 = 1;
}

/// Role restriction key
pub const ROLE_KEY: &str = "User_Role";

/// Proof-of-intent actions
pub mod actions {
    pub const CREATE: &str = "create";
    pub const ADD_OPERATOR: &str = "add-operator";
    pub const REMOVE_OPERATOR: &str = "remove-operator";
}
