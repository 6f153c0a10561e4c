use std::fmt;

use ureq::Agent;

use crate::protocol::types::{
    DiscoverEnvelope, DiscoverRequest, DiscoveredDevice, NetworkInterface, NicsEnvelope,
    PingEnvelope, PingRequest,
};

/// How a backend call failed. Every call resolves into exactly one of
/// these or a success value; callers never branch on raw success flags.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The backend answered with `success: false`. For ping the partial
    /// command output is kept so it can be shown next to the reason.
    Backend {
        reason: String,
        output: Option<String>,
    },
    /// The request never produced a parseable envelope: connection
    /// failure, non-JSON body, or an unexpected transport condition.
    Transport(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Backend { reason, .. } => write!(f, "{reason}"),
            ApiError::Transport(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for ApiError {}

fn transport(err: ureq::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

fn backend_reason(error: Option<String>) -> String {
    error.unwrap_or_else(|| "unspecified backend error".to_string())
}

/// Blocking client for the monitoring backend. Cheap to clone; worker
/// threads each hold a clone and share the underlying agent.
#[derive(Debug, Clone)]
pub struct ApiClient {
    agent: Agent,
    base_url: String,
}

impl ApiClient {
    /// Build a client for the given base URL (e.g. `http://127.0.0.1:5000`).
    ///
    /// Status codes are not mapped to errors by the agent: the original
    /// backend answers some failures as 500 plus a JSON error body, and
    /// that body's reason is what gets surfaced. No timeout is configured;
    /// a call waits as long as the underlying request does.
    pub fn new(base_url: impl Into<String>) -> Self {
        let config = Agent::config_builder()
            .http_status_as_error(false)
            .build();
        Self {
            agent: config.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET /api/nics`: the full interface list, replacing nothing itself.
    pub fn fetch_nics(&self) -> Result<Vec<NetworkInterface>, ApiError> {
        let url = self.url("/api/nics");
        log::info!("GET {url}");
        let mut response = self.agent.get(&url).call().map_err(transport)?;
        let envelope: NicsEnvelope = response.body_mut().read_json().map_err(transport)?;

        if envelope.success {
            Ok(envelope.nics)
        } else {
            Err(ApiError::Backend {
                reason: backend_reason(envelope.error),
                output: None,
            })
        }
    }

    /// `POST /api/ping` with `{host, count}`; success yields the raw
    /// command output verbatim.
    pub fn ping(&self, request: &PingRequest) -> Result<String, ApiError> {
        let url = self.url("/api/ping");
        log::info!("POST {url} host={} count={}", request.host, request.count);
        let mut response = self.agent.post(&url).send_json(request).map_err(transport)?;
        let envelope: PingEnvelope = response.body_mut().read_json().map_err(transport)?;

        if envelope.success {
            Ok(envelope.output)
        } else {
            Err(ApiError::Backend {
                reason: backend_reason(envelope.error),
                output: if envelope.output.is_empty() {
                    None
                } else {
                    Some(envelope.output)
                },
            })
        }
    }

    /// `POST /api/discover` with `{network_prefix}`; success yields the
    /// device list in response order.
    pub fn discover(&self, request: &DiscoverRequest) -> Result<Vec<DiscoveredDevice>, ApiError> {
        let url = self.url("/api/discover");
        log::info!("POST {url} prefix={}", request.network_prefix);
        let mut response = self.agent.post(&url).send_json(request).map_err(transport)?;
        let envelope: DiscoverEnvelope = response.body_mut().read_json().map_err(transport)?;

        if envelope.success {
            Ok(envelope.devices)
        } else {
            Err(ApiError::Backend {
                reason: backend_reason(envelope.error),
                output: None,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://127.0.0.1:5000/");
        assert_eq!(client.url("/api/nics"), "http://127.0.0.1:5000/api/nics");
    }

    #[test]
    fn test_api_error_display() {
        let backend = ApiError::Backend {
            reason: "Host unreachable or ping failed".to_string(),
            output: Some("partial".to_string()),
        };
        assert_eq!(backend.to_string(), "Host unreachable or ping failed");

        let transport = ApiError::Transport("connection refused".to_string());
        assert_eq!(transport.to_string(), "connection refused");
    }
}
