//! Prove command implementation

use crate::proofs::LeafRegister;
use anyhow::Result;

/// Execute the prove command
pub fn execute(index: i64, leaves: Vec<String>, json: bool) -> Result<()> {
    let register: LeafRegister = leaves.iter().collect();
    let proof = register.create_proof_signed(index)?;

    if json {
        println!("{}", proof.to_json()?);
    } else {
        println!("{proof}");
    }
    Ok(())
}
