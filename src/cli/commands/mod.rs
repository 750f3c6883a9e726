//! CLI command implementations

pub mod config;
pub mod keygen;
pub mod prove;
pub mod root;
pub mod session;
pub mod sign;
pub mod verify;
pub mod verify_signature;
