//! Session token resolution
//!
//! Bookmark commands carry a token (--token flag or LINKMARK_TOKEN); the
//! boundary verifies it here and hands the resulting user id to the
//! repository. Expired, malformed, and forged tokens all produce the
//! same error.

use anyhow::{bail, Result};
use tracing::debug;

use linkmark_core::{Config, TokenSigner};

/// Verify the provided token and return the authenticated user id
pub fn authenticate(config: &Config, token: Option<&str>) -> Result<i64> {
    let Some(token) = token else {
        bail!("No session token; run `linkmark login` and pass --token or set LINKMARK_TOKEN");
    };

    let signer = TokenSigner::new(config);
    match signer.verify(token) {
        Some(user_id) => {
            debug!(user_id, "session token verified");
            Ok(user_id)
        }
        None => bail!("Invalid or expired session token"),
    }
}
