//! `jobboard login --token <TOKEN>` – store a session token.

use anyhow::{bail, Result};
use jobboard_core::credentials::{CredentialStore, SessionToken};

pub fn run_login(store: &dyn CredentialStore, token: &str) -> Result<()> {
    let token = SessionToken::new(token.trim());
    if token.is_blank() {
        bail!("token must not be empty");
    }
    store.set_token(token)?;
    println!("Signed in.");
    Ok(())
}
