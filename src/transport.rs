use reqwest::Url;
use reqwest::header::CONTENT_TYPE;

use crate::error::TransportError;

/// Raw HTTP reply, decoded by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Carries one JSON POST to the text API.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, path: &str, body: &str) -> Result<Reply, TransportError>;
}

/// `reqwest` transport. On wasm32 reqwest goes through `fetch`, so the same
/// type serves the browser build and the headless command.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base: Url,
}

impl HttpTransport {
    pub fn new(base: &str) -> Result<HttpTransport, TransportError> {
        let base = Url::parse(base).map_err(|e| TransportError::Endpoint(format!("{base}: {e}")))?;
        Ok(HttpTransport {
            client: reqwest::Client::new(),
            base,
        })
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, TransportError> {
        self.base
            .join(path)
            .map_err(|e| TransportError::Endpoint(format!("{path}: {e}")))
    }
}

impl Transport for HttpTransport {
    async fn post_json(&self, path: &str, body: &str) -> Result<Reply, TransportError> {
        let url = self.endpoint(path)?;
        log::debug!("POST {url}");
        let res = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .await?;
        let status = res.status().as_u16();
        let body = res.text().await?;
        Ok(Reply { status, body })
    }
}
