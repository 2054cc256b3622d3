//! Print the effective configuration
//!
//! Usage: coursereg config

use crate::config::AppConfig;

/// Execute config command
pub fn execute(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
