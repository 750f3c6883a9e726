//! Sign command implementation

use crate::crypto::SignatureBinder;
use crate::proofs::LeafRegister;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Execute the sign command
pub fn execute(key: PathBuf, root: Option<String>, leaves: Vec<String>) -> Result<()> {
    let private_pem = std::fs::read_to_string(&key)
        .with_context(|| format!("reading private key {}", key.display()))?;

    let root = root.unwrap_or_else(|| leaves.iter().collect::<LeafRegister>().root_hex());
    let signature = SignatureBinder::rsa().sign_root(&private_pem, &root)?;

    println!("{}", signature.to_base64());
    Ok(())
}
