// Credential loading: a local key=value file supplies the API token and
// the organization id. Loaded once at startup and immutable afterwards.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Default credential file looked up next to the working directory, unless
/// `MIST_CREDENTIALS` points somewhere else.
pub const DEFAULT_CREDENTIALS_FILE: &str = "Token-Org.txt";

/// Static API credentials for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub org_id: String,
}

/// Resolve the credential file path from the environment, falling back to
/// `Token-Org.txt` in the current directory.
pub fn credentials_path() -> PathBuf {
    std::env::var("MIST_CREDENTIALS")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CREDENTIALS_FILE))
}

impl Credentials {
    /// Read `token=` and `org_id=` lines from `path`. Other lines are
    /// ignored; if a key appears more than once the last occurrence wins.
    pub fn load(path: &Path) -> Result<Credentials> {
        let contents = std::fs::read_to_string(path)
            .map_err(|_| Error::CredentialsMissing(path.to_path_buf()))?;

        let mut token = None;
        let mut org_id = None;
        for line in contents.lines() {
            if let Some(value) = line.strip_prefix("token=") {
                token = Some(value.trim().to_string());
            } else if let Some(value) = line.strip_prefix("org_id=") {
                org_id = Some(value.trim().to_string());
            }
        }

        match (token, org_id) {
            (Some(token), Some(org_id)) if !token.is_empty() && !org_id.is_empty() => {
                Ok(Credentials { token, org_id })
            }
            _ => Err(Error::CredentialsIncomplete(path.to_path_buf())),
        }
    }
}
