//! Per-network version bytes consulted during address validation.

use std::fmt;

/// Address version bytes for one network, plus the set of versions it
/// accepts.
///
/// Instances are plain values: callers hand the networks they care about to
/// [`crate::Address::network`] rather than relying on a global registry, so
/// tests and downstream code can introduce their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkParams {
    name: &'static str,
    address_header: u8,
    p2sh_header: u8,
    acceptable_address_codes: Vec<u8>,
}

impl NetworkParams {
    /// Build parameters for a custom network. The acceptance set starts as
    /// the two headers; extend it with [`NetworkParams::accept`] if the
    /// network recognizes further version bytes.
    pub fn new(name: &'static str, address_header: u8, p2sh_header: u8) -> Self {
        NetworkParams {
            name,
            address_header,
            p2sh_header,
            acceptable_address_codes: vec![address_header, p2sh_header],
        }
    }

    /// The production Groestlcoin network. Standard addresses start with
    /// an `F`.
    pub fn mainnet() -> Self {
        NetworkParams::new("mainnet", 36, 5)
    }

    /// The public test network.
    pub fn testnet() -> Self {
        NetworkParams::new("testnet", 111, 196)
    }

    /// Add a version byte to the acceptance set.
    pub fn accept(mut self, version: u8) -> Self {
        if !self.acceptable_address_codes.contains(&version) {
            self.acceptable_address_codes.push(version);
        }
        self
    }

    /// Network name as string.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Version byte for standard (public-key-hash) addresses.
    pub fn address_header(&self) -> u8 {
        self.address_header
    }

    /// Version byte for pay-to-script-hash addresses.
    pub fn p2sh_header(&self) -> u8 {
        self.p2sh_header
    }

    /// Every version byte this network considers valid in an address.
    pub fn acceptable_address_codes(&self) -> &[u8] {
        &self.acceptable_address_codes
    }

    /// Whether the given version byte is valid on this network.
    pub fn accepts(&self, version: u8) -> bool {
        self.acceptable_address_codes.contains(&version)
    }
}

impl fmt::Display for NetworkParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
