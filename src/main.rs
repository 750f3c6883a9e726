//! Merkleseal CLI
//!
//! Command-line interface for building merkle roots, inclusion proofs and
//! root signatures.

use anyhow::Result;
use clap::Parser;
use merkleseal::cli::{commands, Cli, Commands};
use merkleseal::config::GlobalConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => GlobalConfig::get_config_path()?,
    };
    let config = GlobalConfig::load_from(&config_path)?;

    // Initialize logging; stdout is reserved for command output
    let default_filter = if cli.verbose {
        "debug"
    } else {
        config.log.filter.as_str()
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Execute the command
    let valid = match cli.command {
        Commands::Session => commands::session::execute(&config).map(|_| true),
        Commands::Root { leaves, levels } => commands::root::execute(leaves, levels).map(|_| true),
        Commands::Prove { index, leaves, json } => {
            commands::prove::execute(index, leaves, json || config.output.json).map(|_| true)
        }
        Commands::Verify { leaf, proof, json } => commands::verify::execute(leaf, proof, json),
        Commands::Keygen {
            bits,
            public_exponent,
            out_dir,
        } => commands::keygen::execute(&config, bits, public_exponent, out_dir).map(|_| true),
        Commands::Sign { key, root, leaves } => {
            commands::sign::execute(key, root, leaves).map(|_| true)
        }
        Commands::VerifySignature {
            key,
            signature,
            root,
        } => commands::verify_signature::execute(key, signature, root),
        Commands::Config {
            key,
            value,
            list,
            show_origin,
        } => commands::config::execute(&config_path, key, value, list, show_origin).map(|_| true),
    }?;

    if !valid {
        std::process::exit(1);
    }
    Ok(())
}
