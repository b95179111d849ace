//! Blocking HTTP fetcher for network designators.

use std::time::Duration;

use reqwest::blocking::Client;

/// Fetches raw bytes over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// GET `url` and return the full body.
    ///
    /// # Errors
    ///
    /// Returns an error message on transport failures, non-success statuses,
    /// or a body that cannot be read to the end.
    pub fn fetch(&self, url: &reqwest::Url) -> Result<Vec<u8>, String> {
        let response = self.client.get(url.clone()).send().map_err(|e| e.to_string())?;
        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP {}", status.as_u16()));
        }
        response.bytes().map(|b| b.to_vec()).map_err(|e| e.to_string())
    }
}
