//! Key generation command implementation

use crate::config::GlobalConfig;
use crate::crypto::SignatureBinder;
use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Execute the keygen command
pub fn execute(
    config: &GlobalConfig,
    bits: Option<usize>,
    public_exponent: Option<u64>,
    out_dir: Option<PathBuf>,
) -> Result<()> {
    let bits = bits.unwrap_or(config.keys.bits);
    let public_exponent = public_exponent.unwrap_or(config.keys.public_exponent);

    let pair = SignatureBinder::rsa().generate_keypair(bits, public_exponent)?;

    match out_dir {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            let private_path = dir.join("private.pem");
            let public_path = dir.join("public.pem");
            write_private(&private_path, pair.private_pem())?;
            std::fs::write(&public_path, pair.public_pem())?;

            println!("{}", "Generated RSA keypair".green().bold());
            println!("  {} Bits: {}", "•".cyan(), bits);
            println!("  {} Private key: {}", "✓".green(), private_path.display());
            println!("  {} Public key: {}", "✓".green(), public_path.display());
        }
        None => {
            println!("{}", pair.private_pem());
            println!("{}", pair.public_pem());
        }
    }

    Ok(())
}

#[cfg(unix)]
fn write_private(path: &Path, pem: &str) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(pem.as_bytes())
}

#[cfg(not(unix))]
fn write_private(path: &Path, pem: &str) -> std::io::Result<()> {
    std::fs::write(path, pem)
}
