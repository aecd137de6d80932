//! Access keys for the remote model API.
//!
//! The credential file is plain `key=value` lines:
//!
//! ```text
//! # comment
//! aws_access_key_id=AKIA...
//! aws_secret_access_key=...
//! ```
//!
//! It is read once at startup. Provisioning it is out of scope.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::warn;

pub const ACCESS_KEY_ID: &str = "aws_access_key_id";
pub const SECRET_ACCESS_KEY: &str = "aws_secret_access_key";

/// A static access/secret key pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &redact_access_key(&self.access_key_id))
            .field("secret_access_key", &"****")
            .finish()
    }
}

/// Short hint of an access key, safe for logs: `AKIA...WXYZ`.
pub fn redact_access_key(key: &str) -> String {
    if key.len() <= 8 || !key.is_ascii() {
        return "****".to_string();
    }
    let prefix = &key[..4];
    let suffix = &key[key.len() - 4..];
    format!("{prefix}...{suffix}")
}

/// Read-only view of the credential file.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the key pair. Returns `None` if the file is absent, unreadable,
    /// or lacks either key.
    pub fn load(&self) -> Option<Credentials> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read credentials file");
                return None;
            }
        };
        parse_credentials(&contents)
    }
}

/// Parse `key=value` lines, skipping blanks, `#` comments and lines without
/// an `=`. Only the first `=` splits; values may contain further `=`.
pub fn parse_credentials(contents: &str) -> Option<Credentials> {
    let mut entries: HashMap<&str, &str> = HashMap::new();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            entries.insert(key.trim(), value.trim());
        }
    }

    let access_key_id = entries.get(ACCESS_KEY_ID).filter(|v| !v.is_empty())?;
    let secret_access_key = entries.get(SECRET_ACCESS_KEY).filter(|v| !v.is_empty())?;

    Some(Credentials {
        access_key_id: access_key_id.to_string(),
        secret_access_key: secret_access_key.to_string(),
    })
}
