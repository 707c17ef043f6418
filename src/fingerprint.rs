//! Fingerprinting, hashing, and loose equality.
//!
//! Equality here is defined over canonical form, not structure: `Float(42.0)`
//! and `Int(42)` compare equal because they canonicalize identically (the
//! whole-number collapse), so two values are equal exactly when their
//! fingerprints are byte-equal.
//!
//! The hash contract only requires a fixed-width lowercase hex string with
//! stability and collision resistance "commensurate with the algorithm
//! chosen." The reference implementation's public doc comment names
//! SHA-256 truncated to 16 hex characters while its actual code falls back
//! to a non-cryptographic placeholder; this crate implements the documented
//! contract for real via the `sha2` crate rather than carrying the
//! placeholder forward.

use crate::value::Value;
use sha2::{Digest, Sha256};

impl Value {
    /// The canonical form under default options.
    pub fn fingerprint(&self) -> String {
        self.canonicalize()
    }

    /// SHA-256 of the fingerprint's UTF-8 bytes, truncated to the first 16
    /// lowercase hex characters.
    pub fn hash(&self) -> String {
        let digest = Sha256::digest(self.fingerprint().as_bytes());
        let hex = hex_lower(digest.as_slice());
        hex[..16].to_string()
    }
}

fn hex_lower(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push_str(&format!("{:02x}", b));
    }
    out
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.fingerprint() == other.fingerprint()
    }
}

impl Eq for Value {}
