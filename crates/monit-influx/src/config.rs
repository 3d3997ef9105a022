//! Connection config parsed from `scheme://[user:pass@]host[:port]/database`.

use reqwest::Url;

use monit_core::error::{MonitError, Result};

/// Reusable connection descriptor. Built once, cloned into every write.
///
/// Credentials stay embedded in the endpoint URL; reqwest lifts them into a
/// basic `Authorization` header on each request.
#[derive(Debug, Clone)]
pub struct InfluxConfig {
    endpoint: Url,
    database: String,
}

impl InfluxConfig {
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(MonitError::InvalidUrl("empty url".into()));
        }

        let url = Url::parse(raw).map_err(|e| MonitError::InvalidUrl(e.to_string()))?;
        if url.cannot_be_a_base() || url.host_str().map_or(true, str::is_empty) {
            return Err(MonitError::InvalidUrl("url must be absolute with a host".into()));
        }
        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(MonitError::InvalidUrl(format!("unsupported scheme: {other}")));
            }
        }

        let database = url.path().trim_start_matches('/').to_string();

        let mut endpoint = url;
        endpoint.set_path("/");
        endpoint.set_query(None);
        endpoint.set_fragment(None);

        Ok(Self { endpoint, database })
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn username(&self) -> Option<&str> {
        Some(self.endpoint.username()).filter(|u| !u.is_empty())
    }

    /// `{base}/ping`
    pub fn ping_url(&self) -> Url {
        let mut u = self.endpoint.clone();
        u.set_path("/ping");
        u
    }

    /// `{base}/write?db=<database>&precision=ns`
    pub fn write_url(&self) -> Url {
        let mut u = self.endpoint.clone();
        u.set_path("/write");
        u.query_pairs_mut()
            .clear()
            .append_pair("db", &self.database)
            .append_pair("precision", "ns");
        u
    }

    /// Endpoint with the password masked, safe for logs.
    pub fn redacted(&self) -> String {
        let mut u = self.endpoint.clone();
        if u.password().is_some() {
            let _ = u.set_password(Some("***"));
        }
        u.to_string()
    }

    /// Fresh client for one request. No timeout is applied.
    pub fn client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .build()
            .map_err(|e| MonitError::Transport(format!("client build failed: {e}")))
    }
}
