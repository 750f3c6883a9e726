//! Session command implementation

use crate::cli::session::Session;
use crate::config::GlobalConfig;
use anyhow::Result;

/// Execute the session command on stdin/stdout
pub fn execute(config: &GlobalConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::rsa(stdin.lock(), stdout.lock(), config.keys.clone()).run()
}
