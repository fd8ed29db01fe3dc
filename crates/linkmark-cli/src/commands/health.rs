//! Liveness probe
//!
//! Healthy iff the storage layer can open the database and ensure its
//! schema. The failure is reported, never retried.

use anyhow::Result;

use linkmark_core::{Config, Database};

use crate::output::Output;

/// Run the probe and report the result
pub fn check(config: &Config, output: &Output) -> Result<()> {
    match Database::probe(config) {
        Ok(()) => {
            output.success("healthy: database connected");
            Ok(())
        }
        Err(err) => {
            output.message(&format!("unhealthy: {}", err));
            Err(err.into())
        }
    }
}
