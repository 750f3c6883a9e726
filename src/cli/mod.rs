//! Command-line interface for Merkleseal

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
pub mod session;

/// Merkleseal - Merkle root commitments with signed roots
#[derive(Parser)]
#[command(
    name = "merkleseal",
    version,
    about = "Build merkle roots, prove leaf inclusion and sign roots",
    long_about = "Merkleseal folds leaf values into a SHA-256 merkle root, produces and checks \
                  inclusion proofs, and binds roots to an RSA key with PKCS#1 v1.5 signatures."
)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the line-oriented command session on stdin/stdout
    Session,

    /// Print the merkle root of the given leaves
    Root {
        /// Leaf values in order
        leaves: Vec<String>,

        /// Print every tree level, leaves first
        #[arg(long)]
        levels: bool,
    },

    /// Create an inclusion proof for one leaf
    Prove {
        /// Index of the leaf to prove
        #[arg(allow_negative_numbers = true)]
        index: i64,

        /// Leaf values in order
        leaves: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Verify an inclusion proof for a leaf value
    Verify {
        /// Leaf value
        leaf: String,

        /// Proof in text form (or JSON with --json)
        proof: String,

        /// Parse the proof as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate an RSA keypair
    Keygen {
        /// Modulus size in bits (default: from configuration)
        #[arg(long)]
        bits: Option<usize>,

        /// Public exponent (default: from configuration)
        #[arg(long)]
        public_exponent: Option<u64>,

        /// Write private.pem and public.pem into this directory
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Sign a merkle root with a private key
    Sign {
        /// PEM private key file
        #[arg(long)]
        key: PathBuf,

        /// Root to sign (default: root of the given leaves)
        #[arg(long, conflicts_with = "leaves")]
        root: Option<String>,

        /// Leaf values in order
        leaves: Vec<String>,
    },

    /// Verify a root signature with a public key
    VerifySignature {
        /// PEM public key file
        #[arg(long)]
        key: PathBuf,

        /// Base64 signature
        #[arg(long)]
        signature: String,

        /// Root the signature should cover
        #[arg(long)]
        root: String,
    },

    /// Get and set configuration values
    Config {
        /// Configuration key to get/set
        key: Option<String>,

        /// Configuration value to set
        value: Option<String>,

        /// List all configuration values
        #[arg(short, long)]
        list: bool,

        /// Show configuration file location
        #[arg(long)]
        show_origin: bool,
    },
}
