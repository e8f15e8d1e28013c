//! Token standards

pub mod nip13;

pub use nip13::Nip13;
