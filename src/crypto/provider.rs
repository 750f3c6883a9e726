//! Asymmetric-key provider backing root signatures
//!
//! Keys cross this boundary as PEM text only. [`RsaProvider`] signs with
//! RSA PKCS#1 v1.5 over SHA-256, which is deterministic: the same key and
//! message always give the same signature bytes.

use crate::core::error::{Result, SealError};
use crate::crypto::KeyPair;
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey, EncodeRsaPrivateKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePublicKey, LineEnding};
use rsa::{BigUint, Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256};
use tracing::info;

/// Smallest modulus that still fits a PKCS#1 v1.5 SHA-256 signature
pub const MIN_KEY_BITS: usize = 512;

/// Capability supplying key generation, signing and verification
pub trait SignatureProvider {
    /// Generate a keypair, returned as PEM text
    fn generate_keypair(&self, bits: usize, public_exponent: u64) -> Result<KeyPair>;

    /// Sign `message` with a PEM private key
    fn sign(&self, private_key_pem: &str, message: &[u8]) -> Result<Vec<u8>>;

    /// Check `signature` over `message` with a PEM public key
    ///
    /// `Ok(false)` is a cryptographic mismatch; `Err` is unusable input.
    fn verify(&self, public_key_pem: &str, signature: &[u8], message: &[u8]) -> Result<bool>;
}

/// Reject key parameters the provider cannot use
pub fn validate_key_parameters(bits: usize, public_exponent: u64) -> Result<()> {
    if bits < MIN_KEY_BITS || bits % 8 != 0 {
        return Err(SealError::key_generation_failed(format!(
            "key size must be a multiple of 8 and at least {MIN_KEY_BITS} bits, got {bits}"
        )));
    }
    if public_exponent < 3 || public_exponent % 2 == 0 {
        return Err(SealError::key_generation_failed(format!(
            "public exponent must be odd and at least 3, got {public_exponent}"
        )));
    }
    Ok(())
}

/// RSA provider built on the RustCrypto `rsa` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct RsaProvider;

impl RsaProvider {
    pub fn new() -> Self {
        Self
    }

    /// Load a private key in PKCS#1 (`RSA PRIVATE KEY`) or PKCS#8 form
    pub fn load_private_key(pem: &str) -> Result<RsaPrivateKey> {
        let pem = pem.trim();
        RsaPrivateKey::from_pkcs1_pem(pem)
            .map_err(|e| e.to_string())
            .or_else(|pkcs1_err| {
                RsaPrivateKey::from_pkcs8_pem(pem)
                    .map_err(|e| format!("not PKCS#1 ({pkcs1_err}) or PKCS#8 ({e})"))
            })
            .map_err(SealError::invalid_private_key)
    }

    /// Load a public key in SPKI (`PUBLIC KEY`) or PKCS#1 form
    pub fn load_public_key(pem: &str) -> Result<RsaPublicKey> {
        let pem = pem.trim();
        RsaPublicKey::from_public_key_pem(pem)
            .map_err(|e| e.to_string())
            .or_else(|spki_err| {
                RsaPublicKey::from_pkcs1_pem(pem)
                    .map_err(|e| format!("not SPKI ({spki_err}) or PKCS#1 ({e})"))
            })
            .map_err(SealError::invalid_public_key)
    }
}

impl SignatureProvider for RsaProvider {
    fn generate_keypair(&self, bits: usize, public_exponent: u64) -> Result<KeyPair> {
        validate_key_parameters(bits, public_exponent)?;

        let mut rng = rand::thread_rng();
        let exponent = BigUint::from(public_exponent);
        let private_key = RsaPrivateKey::new_with_exp(&mut rng, bits, &exponent)
            .map_err(|e| SealError::key_generation_failed(e.to_string()))?;
        let public_key = RsaPublicKey::from(&private_key);

        let private_pem = private_key
            .to_pkcs1_pem(LineEnding::LF)
            .map_err(|e| SealError::key_generation_failed(e.to_string()))?;
        let public_pem = public_key
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| SealError::key_generation_failed(e.to_string()))?;

        info!(bits, public_exponent, "generated RSA keypair");
        Ok(KeyPair::new(private_pem.as_str().to_owned(), public_pem))
    }

    fn sign(&self, private_key_pem: &str, message: &[u8]) -> Result<Vec<u8>> {
        let private_key = Self::load_private_key(private_key_pem)?;
        let digest = Sha256::digest(message);
        private_key
            .sign(Pkcs1v15Sign::new::<Sha256>(), &digest)
            .map_err(|e| SealError::signing_failed(e.to_string()))
    }

    fn verify(&self, public_key_pem: &str, signature: &[u8], message: &[u8]) -> Result<bool> {
        let public_key = Self::load_public_key(public_key_pem)?;
        let digest = Sha256::digest(message);
        Ok(public_key
            .verify(Pkcs1v15Sign::new::<Sha256>(), &digest, signature)
            .is_ok())
    }
}
