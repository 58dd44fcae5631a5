use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong below the UI layer. Only the credential
/// variants are fatal; the rest are reported and the menu loop continues.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Credential file not found: {0}. Please ensure it exists with 'token=<your_token>' and 'org_id=<your_org_id>'.")]
    CredentialsMissing(PathBuf),

    #[error("Token or Org ID not found in {0}")]
    CredentialsIncomplete(PathBuf),

    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("Remote API returned status {status}: {body}")]
    Remote { status: u16, body: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Could not decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
