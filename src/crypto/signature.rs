//! Binding a root digest to a key holder
//!
//! The signed message is the root's hex text as bytes. Signing fails loudly.
//! Verification returns `false` for every kind of failure, and it checks the
//! root the caller passes in. Comparing that root against a tree is the
//! caller's job.

use crate::core::error::Result;
use crate::crypto::provider::{RsaProvider, SignatureProvider};
use crate::crypto::KeyPair;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fmt;
use tracing::{debug, info};

/// Raw signature bytes as produced by the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(Vec<u8>);

impl Signature {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Signature(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Standard base64 text form
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }

    /// Decode base64 text, ignoring any line breaks or other ASCII whitespace
    pub fn from_base64(text: &str) -> Result<Self> {
        let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        Ok(Signature(STANDARD.decode(compact)?))
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

/// Signs roots and checks root signatures through a [`SignatureProvider`]
#[derive(Debug, Clone, Default)]
pub struct SignatureBinder<P = RsaProvider> {
    provider: P,
}

impl SignatureBinder<RsaProvider> {
    /// Binder backed by the RSA provider
    pub fn rsa() -> Self {
        Self::new(RsaProvider::new())
    }
}

impl<P: SignatureProvider> SignatureBinder<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Generate a signing keypair
    pub fn generate_keypair(&self, bits: usize, public_exponent: u64) -> Result<KeyPair> {
        self.provider.generate_keypair(bits, public_exponent)
    }

    /// Sign the text form of `root`
    pub fn sign_root(&self, private_key_pem: &str, root: &str) -> Result<Signature> {
        let bytes = self.provider.sign(private_key_pem, root.as_bytes())?;
        info!(root, "signed merkle root");
        Ok(Signature(bytes))
    }

    /// Check `signature` over `root_to_verify`
    pub fn verify_signature(
        &self,
        public_key_pem: &str,
        signature: &Signature,
        root_to_verify: &str,
    ) -> bool {
        match self
            .provider
            .verify(public_key_pem, signature.as_bytes(), root_to_verify.as_bytes())
        {
            Ok(valid) => {
                if !valid {
                    debug!(root = root_to_verify, "signature does not match root");
                }
                valid
            }
            Err(e) => {
                debug!(error = %e, "rejecting signature check on unusable input");
                false
            }
        }
    }

    /// Same as [`verify_signature`](Self::verify_signature) with a base64 signature
    pub fn verify_signature_text(
        &self,
        public_key_pem: &str,
        signature_base64: &str,
        root_to_verify: &str,
    ) -> bool {
        match Signature::from_base64(signature_base64) {
            Ok(signature) => self.verify_signature(public_key_pem, &signature, root_to_verify),
            Err(e) => {
                debug!(error = %e, "rejecting undecodable signature");
                false
            }
        }
    }
}
