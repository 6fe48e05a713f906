//! Groestl-512 double-hashing with one-time backend selection.

use std::cell::RefCell;
use std::panic;
use std::sync::OnceLock;

use groestl::{Digest, Groestl512};

/// Number of bytes kept from the second hashing pass.
pub const DIGEST_LEN: usize = 32;

/// Groestlcoin's protocol digest: Groestl512(Groestl512(data)), truncated to
/// the first 32 bytes.
///
/// This is used for address checksums and block hashing. Both backends
/// produce identical output; which one runs is decided once per process by a
/// self-check probe on the first call.
#[inline]
pub fn double_groestl512(data: &[u8]) -> [u8; DIGEST_LEN] {
    match backend() {
        Backend::Reused => reused_digest(data),
        Backend::Fresh => fresh_digest(data),
    }
}

/// How a digest call obtains its hashing contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Backend {
    /// Reset a thread-local context in place, avoiding per-call allocation.
    Reused,
    /// Construct fresh contexts on every call.
    Fresh,
}

static BACKEND: OnceLock<Backend> = OnceLock::new();

fn backend() -> Backend {
    *BACKEND.get_or_init(probe_backend)
}

/// Run the reused backend once against the fresh one. Any panic or output
/// mismatch downgrades to fresh contexts; that is a selection, not an error.
fn probe_backend() -> Backend {
    const PROBE_INPUT: &[u8] = b"groestl backend probe";
    let expected = fresh_digest(PROBE_INPUT);
    match panic::catch_unwind(|| reused_digest(PROBE_INPUT)) {
        Ok(digest) if digest == expected => Backend::Reused,
        _ => {
            log::debug!("reusable hashing context failed its probe, using fresh contexts");
            Backend::Fresh
        }
    }
}

fn fresh_digest(data: &[u8]) -> [u8; DIGEST_LEN] {
    let first = Groestl512::digest(data);
    let second = Groestl512::digest(first);
    trim256(&second)
}

thread_local! {
    static HASHER: RefCell<Groestl512> = RefCell::new(Groestl512::new());
}

fn reused_digest(data: &[u8]) -> [u8; DIGEST_LEN] {
    HASHER.with(|cell| {
        let mut hasher = cell.borrow_mut();
        Digest::reset(&mut *hasher);
        hasher.update(data);
        let first = hasher.finalize_reset();
        hasher.update(first);
        let second = hasher.finalize_reset();
        trim256(&second)
    })
}

/// Keep the first 32 of the 64 hash bytes.
fn trim256(hash512: &[u8]) -> [u8; DIGEST_LEN] {
    let mut result = [0u8; DIGEST_LEN];
    result.copy_from_slice(&hash512[..DIGEST_LEN]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic() {
        let a = double_groestl512(b"hello");
        let b = double_groestl512(b"hello");
        assert_eq!(a, b);
        assert_ne!(a, double_groestl512(b"hellp"));
    }

    #[test]
    fn test_backends_agree() {
        // Varying lengths, including empty input and inputs spanning more
        // than one compression-function block.
        let corpus: &[&[u8]] = &[
            b"",
            b"a",
            b"hello",
            &[0u8; 21],
            &[0xffu8; 64],
            &[0x5au8; 129],
            b"The quick brown fox jumps over the lazy dog",
        ];
        for input in corpus {
            assert_eq!(
                fresh_digest(input),
                reused_digest(input),
                "backends disagree on {} byte input",
                input.len()
            );
        }
    }

    #[test]
    fn test_reused_context_is_clean_between_calls() {
        // A call after an unrelated one must not see leftover state.
        let expected = reused_digest(b"second");
        reused_digest(b"first");
        assert_eq!(reused_digest(b"second"), expected);
    }

    #[test]
    fn test_digest_across_threads() {
        let expected = double_groestl512(b"concurrent");
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| double_groestl512(b"concurrent")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
