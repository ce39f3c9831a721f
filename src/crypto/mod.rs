//! Cryptographic functions for Finboard
//!
//! PBKDF2-HMAC-SHA256 key derivation and AES-256-CBC envelopes, matching the
//! format written by the dashboard's data export.

pub mod encryption;
pub mod key_derivation;
pub mod secure_memory;

pub use encryption::{decode, decrypt, open, seal, seal_with, IV_LEN, SALT_LEN};
pub use key_derivation::{derive_key, DerivedKey, KEY_LEN, PBKDF2_ITERATIONS};
pub use secure_memory::SecureString;
