//! Error types for Merkleseal

use thiserror::Error;

/// Main error type for Merkleseal operations
#[derive(Error, Debug)]
pub enum SealError {
    /// Proof-related errors
    #[error("Leaf index {index} out of range for tree of {len} leaves")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("Invalid proof format: {reason}")]
    InvalidProofFormat { reason: String },

    /// Key and signature errors
    #[error("Invalid private key: {reason}")]
    InvalidPrivateKey { reason: String },

    #[error("Invalid public key: {reason}")]
    InvalidPublicKey { reason: String },

    #[error("Signing failed: {reason}")]
    SigningFailed { reason: String },

    #[error("Key generation failed: {reason}")]
    KeyGenerationFailed { reason: String },

    #[error("Invalid signature encoding: {0}")]
    InvalidSignatureEncoding(#[from] base64::DecodeError),

    /// Configuration errors
    #[error("Configuration error: {reason}")]
    ConfigurationError { reason: String },

    #[error("Home directory not found")]
    HomeDirectoryNotFound,

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

impl SealError {
    /// Create a new index out of range error
    pub fn index_out_of_range(index: i64, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create a new invalid proof format error
    pub fn invalid_proof_format(reason: impl Into<String>) -> Self {
        Self::InvalidProofFormat {
            reason: reason.into(),
        }
    }

    /// Create a new invalid private key error
    pub fn invalid_private_key(reason: impl Into<String>) -> Self {
        Self::InvalidPrivateKey {
            reason: reason.into(),
        }
    }

    /// Create a new invalid public key error
    pub fn invalid_public_key(reason: impl Into<String>) -> Self {
        Self::InvalidPublicKey {
            reason: reason.into(),
        }
    }

    /// Create a new signing failed error
    pub fn signing_failed(reason: impl Into<String>) -> Self {
        Self::SigningFailed {
            reason: reason.into(),
        }
    }

    /// Create a new key generation failed error
    pub fn key_generation_failed(reason: impl Into<String>) -> Self {
        Self::KeyGenerationFailed {
            reason: reason.into(),
        }
    }

    /// Create a new configuration error
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::ConfigurationError {
            reason: reason.into(),
        }
    }
}

/// Result type alias for Merkleseal operations
pub type Result<T> = std::result::Result<T, SealError>;
