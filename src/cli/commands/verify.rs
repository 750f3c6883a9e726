//! Verify command implementation

use crate::proofs::{verify_proof, verify_proof_text, Proof};
use anyhow::Result;
use colored::Colorize;

/// Execute the verify command, returning whether the proof holds
pub fn execute(leaf: String, proof: String, json: bool) -> Result<bool> {
    let valid = if json {
        Proof::from_json(&proof)
            .map(|parsed| verify_proof(leaf.as_bytes(), &parsed))
            .unwrap_or(false)
    } else {
        verify_proof_text(leaf.as_bytes(), &proof)
    };

    if valid {
        println!("{} {}", "✓".green(), "Proof is valid".green());
    } else {
        println!("{} {}", "✗".red(), "Proof is invalid".red());
    }
    Ok(valid)
}
