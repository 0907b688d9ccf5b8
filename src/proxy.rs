use std::time::Duration;

use crate::config::ServerConfig;
use crate::protocol::ChartRequest;

/// Failure modes of the outbound HTTP translation.
///
/// Every variant is absorbed at the handler boundary into a tool result
/// text; nothing here crosses the JSON-RPC layer as a fault.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("could not connect to the chart service at {base_url}")]
    Connection { base_url: String },
    #[error("{status} - {body}")]
    Remote { status: u16, body: String },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Thin proxy to the remote chart-rendering service.
///
/// Stateless: each operation acquires its own HTTP client, performs exactly
/// one request with a bounded timeout, and releases the connection. No
/// retries, no pooling across calls.
pub struct ChartProxy {
    base_url: String,
    chart_timeout: Duration,
    status_timeout: Duration,
}

impl ChartProxy {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            chart_timeout: config.chart_timeout,
            status_timeout: config.status_timeout,
        }
    }

    /// POST the request to `{base_url}/plot` and return the PNG bytes.
    ///
    /// Only HTTP 200 counts as success; any other status surfaces as
    /// [`ProxyError::Remote`] with the response body verbatim.
    pub async fn generate_chart(&self, request: &ChartRequest) -> Result<Vec<u8>, ProxyError> {
        let client = reqwest::Client::builder().build()?;
        let response = client
            .post(format!("{}/plot", self.base_url))
            .timeout(self.chart_timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if status == reqwest::StatusCode::OK {
            let bytes = response.bytes().await.map_err(|e| self.classify(e))?;
            Ok(bytes.to_vec())
        } else {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "chart service returned an error");
            Err(ProxyError::Remote {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// GET `{base_url}/` as a liveness probe.
    pub async fn check_status(&self) -> Result<(), ProxyError> {
        let client = reqwest::Client::builder().build()?;
        let response = client
            .get(format!("{}/", self.base_url))
            .timeout(self.status_timeout)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if status == reqwest::StatusCode::OK {
            Ok(())
        } else {
            Err(ProxyError::Remote {
                status: status.as_u16(),
                body: String::new(),
            })
        }
    }

    fn classify(&self, err: reqwest::Error) -> ProxyError {
        if err.is_connect() {
            tracing::warn!(base_url = %self.base_url, "chart service unreachable");
            ProxyError::Connection {
                base_url: self.base_url.clone(),
            }
        } else {
            tracing::warn!(error = %err, "chart service request failed");
            ProxyError::Http(err)
        }
    }
}
