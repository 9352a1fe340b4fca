//! Page fetching against the puzzle site.
//!
//! The site ties inputs to an account through a session cookie, so the
//! credential is an explicit constructor argument here rather than something
//! read from the process environment at request time.

use crate::error::Result;
use reqwest::blocking::Client;
use reqwest::header::COOKIE;

/// Status and body of a fetched page. Used once and dropped.
#[derive(Debug)]
pub struct FetchResult {
    pub status: u16,
    pub body: String,
}

impl FetchResult {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Seam between the writers and the network. Tests substitute stubs.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<FetchResult>;
}

/// Blocking HTTP fetcher authenticated with a session cookie.
///
/// The cookie value comes from the browser's developer tools: find the
/// `session` cookie for the puzzle site and copy its value.
pub struct HttpFetcher {
    client: Client,
    session: String,
}

impl HttpFetcher {
    pub fn new(session: String) -> Self {
        Self {
            client: Client::new(),
            session,
        }
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<FetchResult> {
        let response = self
            .client
            .get(url)
            .header(COOKIE, format!("session={}", self.session))
            .send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(FetchResult { status, body })
    }
}
