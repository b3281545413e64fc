//! Session token storage.
//!
//! The executor reads the bearer token through the [`CredentialStore`] trait
//! so the backing storage (a file under the XDG state dir, memory in tests or
//! an embedding app's own keychain) is injected rather than global.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Opaque bearer credential. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for an empty or whitespace-only value, which is never sent.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

/// Storage backend for the session token.
///
/// Reads may touch disk; implementations must be cheap enough to call once
/// per request.
pub trait CredentialStore: Send + Sync {
    /// Returns `Ok(None)` when no token is stored.
    fn get_token(&self) -> Result<Option<SessionToken>>;

    /// Replaces any stored token.
    fn set_token(&self, token: SessionToken) -> Result<()>;

    /// Removes the stored token (logout, or after the service rejected it).
    fn clear(&self) -> Result<()>;
}

/// In-process token holder.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: RwLock<Option<SessionToken>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(SessionToken::new(token))),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get_token(&self) -> Result<Option<SessionToken>> {
        let guard = self
            .token
            .read()
            .map_err(|_| anyhow::anyhow!("credential lock poisoned"))?;
        Ok(guard.clone())
    }

    fn set_token(&self, token: SessionToken) -> Result<()> {
        let mut guard = self
            .token
            .write()
            .map_err(|_| anyhow::anyhow!("credential lock poisoned"))?;
        *guard = Some(token);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self
            .token
            .write()
            .map_err(|_| anyhow::anyhow!("credential lock poisoned"))?;
        *guard = None;
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    token: SessionToken,
}

/// Token persisted as a one-entry TOML file, `~/.local/state/jobboard/session.toml` by default.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Default session file location under the XDG state dir.
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("jobboard")?;
        Ok(xdg_dirs.get_state_home().join("jobboard").join("session.toml"))
    }

    pub fn open_default() -> Result<Self> {
        Ok(Self::at(Self::default_path()?))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn get_token(&self) -> Result<Option<SessionToken>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(d) => d,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("read session: {}", self.path.display()))
            }
        };
        let file: SessionFile = toml::from_str(&data)
            .with_context(|| format!("parse session: {}", self.path.display()))?;
        if file.token.is_blank() {
            return Ok(None);
        }
        Ok(Some(file.token))
    }

    fn set_token(&self, token: SessionToken) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        let body = toml::to_string(&SessionFile { token }).context("serialize session")?;
        fs::write(&self.path, body)
            .with_context(|| format!("write session: {}", self.path.display()))?;
        restrict_permissions(&self.path)?;
        tracing::debug!(path = %self.path.display(), "stored session token");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "cleared session token");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("remove session: {}", self.path.display())),
        }
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
        .with_context(|| format!("chmod 600: {}", path.display()))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
