//! Root command implementation

use crate::proofs::{tree_levels, LeafRegister};
use anyhow::Result;
use colored::Colorize;

/// Execute the root command
pub fn execute(leaves: Vec<String>, levels: bool) -> Result<()> {
    let register: LeafRegister = leaves.iter().collect();

    if levels {
        for (height, level) in tree_levels(register.leaves()).iter().enumerate() {
            eprintln!("{}", format!("Level {height} ({} nodes)", level.len()).bold());
            for node in level {
                eprintln!("  {}", node.to_hex().dimmed());
            }
        }
    }

    println!("{}", register.root_hex());
    Ok(())
}
