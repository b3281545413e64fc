//! `jobboard logout` – forget the session token.

use anyhow::Result;
use jobboard_core::credentials::CredentialStore;

pub fn run_logout(store: &dyn CredentialStore) -> Result<()> {
    store.clear()?;
    println!("Signed out.");
    Ok(())
}
