//! Network Configuration - passed in by the caller, read-only for commands

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NetworkType {
    #[serde(rename = "mainnet")]
    MainNet,
    #[default]
    #[serde(rename = "testnet")]
    TestNet,
    #[serde(rename = "private")]
    Private,
    #[serde(rename = "private-test")]
    PrivateTest,
}

impl NetworkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkType::MainNet => "mainnet",
            NetworkType::TestNet => "testnet",
            NetworkType::Private => "private",
            NetworkType::PrivateTest => "private-test",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "main" => Some(NetworkType::MainNet),
            "testnet" | "test" => Some(NetworkType::TestNet),
            "private" => Some(NetworkType::Private),
            "private-test" | "private_test" => Some(NetworkType::PrivateTest),
            _ => None,
        }
    }

    /// Leading byte of every address on this network.
    pub fn byte(&self) -> u8 {
        match self {
            NetworkType::MainNet => 0x68,
            NetworkType::TestNet => 0x98,
            NetworkType::Private => 0x78,
            NetworkType::PrivateTest => 0xA8,
        }
    }

    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x68 => Some(NetworkType::MainNet),
            0x98 => Some(NetworkType::TestNet),
            0x78 => Some(NetworkType::Private),
            0xA8 => Some(NetworkType::PrivateTest),
            _ => None,
        }
    }
}

/// Network configuration. Higher layers construct this.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub network_type: NetworkType,
    #[serde(default)]
    pub generation_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_url: Option<String>,
}

impl NetworkConfig {
    pub fn new(network_type: NetworkType) -> Self {
        Self { network_type, ..Default::default() }
    }
    pub fn mainnet() -> Self { Self::new(NetworkType::MainNet) }
    pub fn testnet() -> Self { Self::new(NetworkType::TestNet) }
    pub fn with_generation_hash(mut self, hash: impl Into<String>) -> Self { self.generation_hash = hash.into(); self }
    pub fn with_node_url(mut self, url: impl Into<String>) -> Self { self.node_url = Some(url.into()); self }
}

/// Absolute deadline in unix milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deadline(i64);

impl Deadline {
    pub const DEFAULT_HOURS: i64 = 2;

    pub fn in_hours(hours: i64) -> Self {
        Self((Utc::now() + Duration::hours(hours)).timestamp_millis())
    }

    pub fn at_millis(timestamp_ms: i64) -> Self { Self(timestamp_ms) }

    pub fn timestamp_millis(&self) -> i64 { self.0 }
}

impl Default for Deadline {
    fn default() -> Self { Self::in_hours(Self::DEFAULT_HOURS) }
}

/// Non-functional parameters copied into every emitted transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionParameters {
    pub deadline: Deadline,
    pub max_fee: u64,
    pub fee_multiplier: u32,
}

impl Default for TransactionParameters {
    fn default() -> Self { Self { deadline: Deadline::default(), max_fee: 0, fee_multiplier: 100 } }
}

impl TransactionParameters {
    pub fn with_deadline(mut self, deadline: Deadline) -> Self { self.deadline = deadline; self }
    pub fn with_max_fee(mut self, max_fee: u64) -> Self { self.max_fee = max_fee; self }
    pub fn with_fee_multiplier(mut self, multiplier: u32) -> Self { self.fee_multiplier = multiplier; self }
}
