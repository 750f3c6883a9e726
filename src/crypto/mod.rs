//! Root signatures
//!
//! This module provides:
//! - a provider seam for RSA key generation, signing and verification
//! - signing and verifying merkle roots

pub mod provider;
pub mod signature;

pub use provider::{validate_key_parameters, RsaProvider, SignatureProvider};
pub use signature::{Signature, SignatureBinder};

use std::fmt;

/// PEM-encoded keypair
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    private_pem: String,
    public_pem: String,
}

impl KeyPair {
    pub fn new(private_pem: String, public_pem: String) -> Self {
        Self {
            private_pem,
            public_pem,
        }
    }

    pub fn private_pem(&self) -> &str {
        &self.private_pem
    }

    pub fn public_pem(&self) -> &str {
        &self.public_pem
    }
}

// Private key material stays out of logs
impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("private_pem", &"<redacted>")
            .field("public_pem", &self.public_pem)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_private_key() {
        let pair = KeyPair::new("SECRET".to_string(), "PUBLIC".to_string());
        let debug = format!("{pair:?}");
        assert!(!debug.contains("SECRET"));
        assert!(debug.contains("PUBLIC"));
    }
}
