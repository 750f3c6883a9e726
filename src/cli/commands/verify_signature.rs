//! Signature verification command implementation

use crate::crypto::SignatureBinder;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

/// Execute the verify-signature command, returning whether the signature holds
pub fn execute(key: PathBuf, signature: String, root: String) -> Result<bool> {
    let public_pem = std::fs::read_to_string(&key)
        .with_context(|| format!("reading public key {}", key.display()))?;

    let valid = SignatureBinder::rsa().verify_signature_text(&public_pem, &signature, &root);

    if valid {
        println!("{} {}", "✓".green(), "Signature is valid".green());
    } else {
        println!("{} {}", "✗".red(), "Signature is invalid".red());
    }
    Ok(valid)
}
