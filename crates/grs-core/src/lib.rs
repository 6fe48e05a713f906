//! Core Groestlcoin address primitives.
//!
//! This crate provides pure Rust implementations of:
//! - Double Groestl-512 hashing with runtime backend selection
//! - Base58check encoding using that digest as the checksum
//! - Versioned address construction, parsing, and network resolution
//! - P2SH script recognition for script-derived addresses
//!
//! All operations are synchronous and allocation-only; constructed values
//! are immutable and safe to share across threads.

pub mod address;
pub mod base58;
pub mod hash;
pub mod network;
pub mod script;

pub use address::{Address, AddressError, HASH_LENGTH};
pub use base58::{decode_check, encode_check, Base58Error};
pub use hash::double_groestl512;
pub use network::NetworkParams;
pub use script::Script;
