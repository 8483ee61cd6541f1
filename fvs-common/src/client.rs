//! HTTP transport for the submission gateway

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::api::types::{ErrorBody, SubmitAck};
use crate::api::SUBMIT_PATH;
use crate::form::{SubmissionPayload, SubmitTransport, TransportError};
use crate::{Error, Result};

/// Posts submissions to `<base_url>/api/submit`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:5740`
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("fvs-client/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), SUBMIT_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmitTransport for HttpTransport {
    async fn submit(&self, payload: &SubmissionPayload) -> std::result::Result<SubmitAck, TransportError> {
        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<SubmitAck>()
                .await
                .map_err(|e| TransportError::InvalidResponse(e.to_string()));
        }

        // Error bodies are best effort; a missing message falls back on the caller side
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .map(|body| body.error)
            .filter(|msg| !msg.is_empty());

        Err(TransportError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
