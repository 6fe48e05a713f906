//! Just enough output-script handling to recognize pay-to-script-hash and
//! pull out its 20-byte script hash.

/// OP_HASH160 opcode.
const OP_HASH160: u8 = 0xa9;
/// OP_EQUAL opcode.
const OP_EQUAL: u8 = 0x87;
/// Direct push of 20 bytes.
const PUSH_20: u8 = 0x14;

/// A raw output script (scriptPubKey).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    bytes: Vec<u8>,
}

impl Script {
    /// Wrap raw script bytes. No validation happens here; queries below
    /// inspect the shape on demand.
    pub fn new(bytes: Vec<u8>) -> Self {
        Script { bytes }
    }

    /// Build the canonical P2SH output script for a script hash:
    /// `OP_HASH160 <20-byte-hash> OP_EQUAL`.
    pub fn new_p2sh(script_hash: &[u8; 20]) -> Self {
        let mut bytes = Vec::with_capacity(23);
        bytes.push(OP_HASH160);
        bytes.push(PUSH_20);
        bytes.extend_from_slice(script_hash);
        bytes.push(OP_EQUAL);
        Script { bytes }
    }

    /// The raw script bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Whether this script has the exact P2SH shape (BIP 16).
    pub fn is_pay_to_script_hash(&self) -> bool {
        self.bytes.len() == 23
            && self.bytes[0] == OP_HASH160
            && self.bytes[1] == PUSH_20
            && self.bytes[22] == OP_EQUAL
    }

    /// The 20 hash bytes of a P2SH script, or `None` for any other shape.
    pub fn pubkey_hash(&self) -> Option<&[u8]> {
        if self.is_pay_to_script_hash() {
            Some(&self.bytes[2..22])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_p2sh_shape_round_trip() {
        let hash = [0xabu8; 20];
        let script = Script::new_p2sh(&hash);
        assert!(script.is_pay_to_script_hash());
        assert_eq!(script.pubkey_hash(), Some(&hash[..]));
        assert_eq!(script.as_bytes().len(), 23);
    }

    #[test]
    fn test_non_p2sh_shapes_are_rejected() {
        // P2PKH: OP_DUP OP_HASH160 <20> OP_EQUALVERIFY OP_CHECKSIG
        let mut p2pkh = vec![0x76, 0xa9, 0x14];
        p2pkh.extend_from_slice(&[0u8; 20]);
        p2pkh.extend_from_slice(&[0x88, 0xac]);

        for bytes in [Vec::new(), vec![OP_HASH160], p2pkh] {
            let script = Script::new(bytes);
            assert!(!script.is_pay_to_script_hash());
            assert_eq!(script.pubkey_hash(), None);
        }
    }

    #[test]
    fn test_truncated_p2sh_is_rejected() {
        let script = Script::new_p2sh(&[0x11; 20]);
        let mut bytes = script.as_bytes().to_vec();
        bytes.pop();
        assert!(!Script::new(bytes).is_pay_to_script_hash());
    }
}
