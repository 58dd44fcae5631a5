// API client module: a small blocking HTTP client that talks to the Mist
// cloud controller. Intentionally synchronous: every call completes before
// the menu loop takes another step, so there is nothing to coordinate.

use crate::credentials::Credentials;
use crate::error::{Error, Result};
use crate::sections::Section;
use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://api.mist.com/api/v1";

/// Blocking client holding the base URL and the static credentials used
/// for every request.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: String,
    org_id: String,
}

/// One object as returned by the list endpoints. Everything beyond the id
/// and the optional display name is ignored.
#[derive(Deserialize, Debug, Clone)]
pub struct RemoteItem {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl RemoteItem {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed")
    }
}

/// Result of a single DELETE call. None of these halt a batch; the caller
/// reports each one and moves on.
#[derive(Debug)]
pub enum DeleteOutcome {
    Deleted,
    /// 404: the item is gone, possibly deleted by an earlier pass.
    NotFound,
    Failed {
        status: u16,
        body: String,
    },
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(ApiClient {
            client,
            base_url: base_url.into(),
            token: credentials.token,
            org_id: credentials.org_id,
        })
    }

    /// Create an ApiClient pointed at the URL in `MIST_API_URL`, or the
    /// production Mist API when unset.
    pub fn from_env(credentials: Credentials) -> Result<Self> {
        let base_url = std::env::var("MIST_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Self::new(base_url, credentials)
    }

    fn auth_header(&self) -> String {
        format!("Token {}", self.token)
    }

    /// Fetch every item in a section. An empty array is a valid, empty
    /// result; a non-200 status is an error carrying the status and the raw
    /// body, so callers can tell "nothing there" apart from "request failed".
    pub fn list(&self, section: &Section) -> Result<Vec<RemoteItem>> {
        let url = format!("{}{}", self.base_url, section.list_path(&self.org_id));
        let res = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.auth_header())
            .send()?;

        let status = res.status();
        let body = res.text().unwrap_or_else(|_| "".into());
        if status != StatusCode::OK {
            return Err(Error::Remote {
                status: status.as_u16(),
                body,
            });
        }
        let items = serde_json::from_str(&body)?;
        Ok(items)
    }

    /// Delete a single item by id. 200/204 count as success and 404 as
    /// already gone; anything else is reported as a failure with the raw
    /// body. Only transport-level problems surface as `Err`.
    pub fn delete(&self, section: &Section, item_id: &str) -> Result<DeleteOutcome> {
        let url = format!(
            "{}{}",
            self.base_url,
            section.delete_path(&self.org_id, item_id)
        );
        let res = self
            .client
            .delete(&url)
            .header(AUTHORIZATION, self.auth_header())
            .send()?;

        let status = res.status();
        match status {
            StatusCode::OK | StatusCode::NO_CONTENT => Ok(DeleteOutcome::Deleted),
            StatusCode::NOT_FOUND => Ok(DeleteOutcome::NotFound),
            _ => Ok(DeleteOutcome::Failed {
                status: status.as_u16(),
                body: res.text().unwrap_or_else(|_| "".into()),
            }),
        }
    }
}
