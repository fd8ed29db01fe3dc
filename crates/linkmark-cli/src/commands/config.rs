//! Configuration display

use anyhow::Result;

use linkmark_core::Config;

use crate::output::{Output, OutputFormat};

/// Show the active configuration
///
/// The token secret itself is never printed, only whether one is set.
pub fn show(config: &Config, output: &Output) -> Result<()> {
    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "config_file": Config::config_file_path(),
                    "data_dir": config.data_dir,
                    "database": config.database_path(),
                    "token_secret_configured": config.token_secret.is_some(),
                })
            );
        }
        _ => {
            println!("Config file:  {}", Config::config_file_path().display());
            println!("Data dir:     {}", config.data_dir.display());
            println!("Database:     {}", config.database_path().display());
            println!(
                "Token secret: {}",
                if config.token_secret.is_some() {
                    "configured"
                } else {
                    "not set (insecure default)"
                }
            );
        }
    }
    Ok(())
}
