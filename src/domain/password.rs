//! Salted one-way password digests.

use sha2::Sha256;
use std::fmt;
use uuid::Uuid;

/// PBKDF2 iteration count applied to every password.
pub const PBKDF2_ROUNDS: u32 = 100_000;

const DIGEST_LEN: usize = 32;

/// A PBKDF2-HMAC-SHA256 digest of a password under a random 16-byte salt.
///
/// The plaintext is never retained. `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash {
    salt: [u8; 16],
    digest: [u8; DIGEST_LEN],
}

impl PasswordHash {
    /// Hash a plaintext password with a fresh random salt.
    pub fn create(password: &str) -> Self {
        let salt = Uuid::new_v4().into_bytes();
        let digest = derive(&salt, password);
        Self { salt, digest }
    }

    /// Check a plaintext candidate against this digest.
    ///
    /// The comparison touches every byte regardless of where the first
    /// mismatch is.
    pub fn verify(&self, candidate: &str) -> bool {
        let candidate = derive(&self.salt, candidate);
        constant_time_eq(&candidate, &self.digest)
    }
}

fn derive(salt: &[u8], password: &str) -> [u8; DIGEST_LEN] {
    pbkdf2::pbkdf2_hmac_array::<Sha256, DIGEST_LEN>(password.as_bytes(), salt, PBKDF2_ROUNDS)
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}
