//! Digest primitive: SHA-512 over a full byte buffer

use std::fmt;

use sha2::{Digest, Sha512};

#[cfg(test)]
mod tests;

/// Length of a digest in bytes
pub const DIGEST_LEN: usize = 64;

/// SHA-512 digest of a file's content
///
/// Renders as 128 lowercase hexadecimal characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigestValue([u8; DIGEST_LEN]);

impl DigestValue {
    /// Raw digest bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex rendering
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DigestValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|b| write!(f, "{b:02x}"))
    }
}

impl fmt::Debug for DigestValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigestValue({self})")
    }
}

/// Compute the SHA-512 digest of `bytes`
#[must_use]
pub fn digest(bytes: &[u8]) -> DigestValue {
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&Sha512::digest(bytes));
    DigestValue(out)
}
