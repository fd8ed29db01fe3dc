//! Account commands: register and login

use anyhow::{bail, Context, Result};
use dialoguer::Password;

use linkmark_core::auth::{self, AuthError};
use linkmark_core::{Config, Database, TokenSigner};

use crate::output::Output;

/// Register a new account
pub fn register(
    config: &Config,
    email: String,
    password: Option<String>,
    output: &Output,
) -> Result<()> {
    let password = resolve_password(password, true)?;

    let mut db = Database::open(config)?;
    let user = match auth::create_user(&mut db, &email, &password) {
        Ok(user) => user,
        Err(AuthError::DuplicateEmail { email }) => {
            bail!("An account with email {} already exists", email)
        }
        Err(err) => return Err(err).context("Failed to register account"),
    };

    output.success(&format!("Registered {}", user.email));
    output.print_user(&user);
    Ok(())
}

/// Verify credentials and print a session token
pub fn login(
    config: &Config,
    email: String,
    password: Option<String>,
    output: &Output,
) -> Result<()> {
    let password = resolve_password(password, false)?;

    let db = Database::open(config)?;

    // One message for unknown email and wrong password alike
    let Some(record) = auth::get_user_by_email(&db, &email)? else {
        bail!("Invalid email or password");
    };
    if !auth::verify_password(&password, &record.password_hash)? {
        bail!("Invalid email or password");
    }

    let token = TokenSigner::new(config).generate(record.id)?;
    output.print_token(&token);
    Ok(())
}

/// Take the password from the flag, or prompt for it
fn resolve_password(password: Option<String>, confirm: bool) -> Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }

    let mut prompt = Password::new().with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Confirm password", "Passwords do not match");
    }
    prompt.interact().context("Failed to read password")
}
