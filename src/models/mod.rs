//! Value objects describing ledger-level concepts consumed and produced by commands.

mod account;
mod allowance;
mod identifiers;
mod metadata;
mod network;
mod notification;
mod operator;
mod options;
mod restrictions;
mod transaction;

pub use account::{Address, PublicAccount, PublicKey};
pub use allowance::{AllowanceDenial, AllowanceResult};
pub use identifiers::{NamespaceId, TokenId, TokenIdentifier, TokenNonce};
pub use metadata::{AccountMetadata, TokenMetadata, TokenSource};
pub use network::{Deadline, NetworkConfig, NetworkType, TransactionParameters};
pub use notification::{Notification, NotificationProof, PublicationProof};
pub use operator::{Operator, Role};
pub use options::CommandOption;
pub use restrictions::{AccountRestriction, AccountRestrictionFlags, TokenRestriction, TokenRestrictionType};
pub use transaction::{
    InnerTransaction, NamespaceRegistrationType, SupplyChangeAction, TokenAmount, TokenFlags, Transaction,
    TransactionBody,
};
