//! Versioned, checksummed addresses and their network validation.
//!
//! An address is a 20-byte hash (of a public key, or of a script for P2SH)
//! prefixed with a network version byte and rendered through the checked
//! base58 codec. The version byte carries both the network identity and the
//! kind of hash, so the two address kinds are distinguished by value, not by
//! type.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::base58::{self, Base58Error};
use crate::network::NetworkParams;
use crate::script::Script;

/// An address payload is a RIPEMD160-class hash: always 20 bytes.
pub const HASH_LENGTH: usize = 20;

/// Address construction and parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The text failed to decode or its checksum disagreed.
    #[error(transparent)]
    Base58(#[from] Base58Error),
    /// A hash of the wrong length was supplied on the trusted path.
    #[error("address hashes are 20 bytes, got {0}")]
    InvalidLength(usize),
    /// The version byte is not acceptable on the given network.
    #[error("unrecognized address version {0}")]
    UnrecognizedVersion(u8),
    /// The text decoded cleanly but belongs to a different network than the
    /// caller expected. Carries the expected network's acceptance set so the
    /// caller can name the mismatch.
    #[error("address version {version} is not valid here (acceptable: {acceptable:?})")]
    WrongNetwork { version: u8, acceptable: Vec<u8> },
    /// Script-based construction was attempted on a non-P2SH script.
    #[error("script is not pay-to-script-hash")]
    NotPayToScriptHash,
}

/// A validated, immutable address.
///
/// Equality and hashing are by `(version, hash)`; the network an address
/// belongs to is resolved on demand against a caller-supplied list, never
/// stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    version: u8,
    hash: Vec<u8>,
}

impl Address {
    /// Construct from an explicit version byte and the hash160 form.
    ///
    /// Fails with [`AddressError::InvalidLength`] unless the hash is exactly
    /// 20 bytes, and with [`AddressError::UnrecognizedVersion`] unless the
    /// network accepts the version byte.
    pub fn from_version_and_hash(
        params: &NetworkParams,
        version: u8,
        hash160: &[u8],
    ) -> Result<Self, AddressError> {
        if hash160.len() != HASH_LENGTH {
            return Err(AddressError::InvalidLength(hash160.len()));
        }
        if !params.accepts(version) {
            return Err(AddressError::UnrecognizedVersion(version));
        }
        Ok(Address {
            version,
            hash: hash160.to_vec(),
        })
    }

    /// Construct a standard (public-key-hash) address on the given network.
    pub fn from_hash(params: &NetworkParams, hash160: &[u8]) -> Result<Self, AddressError> {
        Address::from_version_and_hash(params, params.address_header(), hash160)
    }

    /// Parse the textual form, e.g. `FY7vmDL7FZGACwqVNx5p4fVaPHdLjGAmX1`.
    ///
    /// With `expected` supplied, a checksum-valid address for any other
    /// network fails with [`AddressError::WrongNetwork`]. With `None`, any
    /// checksum-valid text is accepted and the network is left undetermined
    /// until [`Address::network`] is consulted.
    pub fn from_text(expected: Option<&NetworkParams>, text: &str) -> Result<Self, AddressError> {
        let (version, hash) = base58::decode_check(text)?;
        if let Some(params) = expected {
            if !params.accepts(version) {
                return Err(AddressError::WrongNetwork {
                    version,
                    acceptable: params.acceptable_address_codes().to_vec(),
                });
            }
        }
        Ok(Address { version, hash })
    }

    /// Construct a P2SH address from the script hash itself.
    pub fn from_script_hash(params: &NetworkParams, hash160: &[u8]) -> Result<Self, AddressError> {
        Address::from_version_and_hash(params, params.p2sh_header(), hash160)
    }

    /// Construct a P2SH address from an output script.
    ///
    /// Fails with [`AddressError::NotPayToScriptHash`] unless the script has
    /// the P2SH shape.
    pub fn from_script(params: &NetworkParams, script: &Script) -> Result<Self, AddressError> {
        let hash = script.pubkey_hash().ok_or(AddressError::NotPayToScriptHash)?;
        Address::from_script_hash(params, hash)
    }

    /// The version byte.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// The 20-byte hash at the core of the address.
    pub fn hash160(&self) -> &[u8] {
        &self.hash
    }

    /// Find the network this address belongs to among `known`, first match
    /// wins. Returns `None` when no listed network accepts the version byte.
    ///
    /// The returned network is not necessarily the one the address was
    /// constructed with; it is whichever listed network claims the version.
    pub fn network<'a>(&self, known: &'a [NetworkParams]) -> Option<&'a NetworkParams> {
        known.iter().find(|params| params.accepts(self.version))
    }

    /// Whether this is a pay-to-script-hash address under whichever of the
    /// `known` networks it resolves to. Returns false when no network
    /// resolves, since the question has no answer there.
    pub fn is_pay_to_script_hash(&self, known: &[NetworkParams]) -> bool {
        self.network(known)
            .is_some_and(|params| params.p2sh_header() == self.version)
    }

    /// Parse text with no expected network, then resolve it against `known`.
    ///
    /// Useful for deciding whether user-supplied text is compatible with the
    /// networks at hand; decode errors still propagate.
    pub fn network_for_text<'a>(
        text: &str,
        known: &'a [NetworkParams],
    ) -> Result<Option<&'a NetworkParams>, AddressError> {
        let address = Address::from_text(None, text)?;
        Ok(address.network(known))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&base58::encode_check(self.version, &self.hash))
    }
}

impl FromStr for Address {
    type Err = AddressError;

    /// Parses with no expected network, like `from_text(None, s)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::from_text(None, s)
    }
}
