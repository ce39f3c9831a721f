//! Encrypted envelope and the plain-or-sealed resource wrapper
//!
//! Every dataset file is either the finished JSON document or an envelope
//! `{ "encrypted": true, "data": <base64>, "salt": <base64> }`.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FinboardError, FinboardResult};

/// An encrypted dataset as written by the producer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Always true for a well-formed envelope
    pub encrypted: bool,
    /// Base64 of `IV ‖ ciphertext`
    pub data: String,
    /// Base64 of the PBKDF2 salt
    pub salt: String,
}

impl Envelope {
    /// Build an envelope from the raw combined payload and salt
    pub fn from_parts(combined: &[u8], salt: &[u8]) -> Self {
        Self {
            encrypted: true,
            data: STANDARD.encode(combined),
            salt: STANDARD.encode(salt),
        }
    }

    /// Decode the salt from base64
    pub fn decode_salt(&self) -> FinboardResult<Vec<u8>> {
        STANDARD
            .decode(self.salt.trim())
            .map_err(|_| FinboardError::Decryption)
    }

    /// Decode the combined IV and ciphertext from base64
    pub fn decode_data(&self) -> FinboardResult<Vec<u8>> {
        STANDARD
            .decode(self.data.trim())
            .map_err(|_| FinboardError::Decryption)
    }
}

/// A dataset that is either ready to use or waiting to be unlocked
#[derive(Debug, Clone, PartialEq)]
pub enum Resource<T> {
    /// Finished data
    Plain(T),
    /// Encrypted data pending an unlock attempt
    Sealed(Envelope),
}

impl<T: DeserializeOwned> Resource<T> {
    /// Classify a parsed JSON document by its `encrypted` flag
    ///
    /// A document `{ "encrypted": false, "data": ... }` is unwrapped to its
    /// `data`; any other non-envelope document must match `T` directly.
    pub fn from_value(value: Value) -> FinboardResult<Self> {
        match value.get("encrypted").and_then(Value::as_bool) {
            Some(true) => {
                let envelope: Envelope = serde_json::from_value(value)
                    .map_err(|e| FinboardError::Json(format!("Malformed envelope: {}", e)))?;
                Ok(Self::Sealed(envelope))
            }
            Some(false) if value.get("data").is_some() => {
                let data = value.get("data").cloned().unwrap_or(Value::Null);
                Ok(Self::Plain(serde_json::from_value(data)?))
            }
            _ => Ok(Self::Plain(serde_json::from_value(value)?)),
        }
    }

    /// Parse raw bytes fetched by a transport
    pub fn from_slice(bytes: &[u8]) -> FinboardResult<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(value)
    }
}

impl<T> Resource<T> {
    /// Check if the resource still needs an unlock
    pub fn is_sealed(&self) -> bool {
        matches!(self, Self::Sealed(_))
    }

    /// Get the envelope if sealed
    pub fn envelope(&self) -> Option<&Envelope> {
        match self {
            Self::Sealed(envelope) => Some(envelope),
            Self::Plain(_) => None,
        }
    }
}
