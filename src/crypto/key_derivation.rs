//! Key derivation using PBKDF2-HMAC-SHA256
//!
//! Derives the AES-256 key for an envelope from the dashboard password and the
//! envelope's salt. The iteration count is part of the wire contract with the
//! producer and is not configurable.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// PBKDF2 iteration count shared with the producer
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Derived key length in bytes (AES-256)
pub const KEY_LEN: usize = 32;

/// A derived encryption key
///
/// Lives for a single unlock attempt and is zeroed when dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    /// The 32-byte key for AES-256
    key: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.key
    }
}

// Never print key material
impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey").finish_non_exhaustive()
    }
}

/// Derive an encryption key from a password and salt
///
/// Any password/salt combination yields a key. Whether it is the right key is
/// only discovered when an envelope is decoded with it.
pub fn derive_key(password: &str, salt: &[u8]) -> DerivedKey {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key);
    let derived = DerivedKey { key };
    key.zeroize();
    derived
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_SALT: [u8; 8] = [0u8; 8];

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }

    #[test]
    fn test_known_answer() {
        let key = derive_key("test1234", &ZERO_SALT);
        assert_eq!(
            hex(key.as_bytes()),
            "446c31bdbf857cb043405f4ae33546c5b9c98453a6f441f149d5986d2a25e354"
        );
    }

    #[test]
    fn test_same_password_same_key() {
        let key1 = derive_key("test_password", &ZERO_SALT);
        let key2 = derive_key("test_password", &ZERO_SALT);
        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_password_different_key() {
        let key1 = derive_key("password1", &ZERO_SALT);
        let key2 = derive_key("password2", &ZERO_SALT);
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_salt_different_key() {
        let key1 = derive_key("same_password", &ZERO_SALT);
        let key2 = derive_key("same_password", &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_empty_password_still_derives() {
        let key = derive_key("", &ZERO_SALT);
        assert_eq!(key.as_bytes().len(), KEY_LEN);
    }

    #[test]
    fn test_debug_hides_key() {
        let key = derive_key("test1234", &ZERO_SALT);
        let debug = format!("{:?}", key);
        assert!(debug.contains("DerivedKey"));
        assert!(!debug.contains("446c"));
    }
}
