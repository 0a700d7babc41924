// src/infrastructure/http.rs
use crate::application::GraphqlTransport;
use crate::domain::{DomainError, GraphqlRequest};
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

/// Posts GraphQL requests to a single endpoint.
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    /// Without a timeout a hung request blocks until the server gives up.
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        debug!(endpoint, ?timeout, "Created HTTP transport");
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl GraphqlTransport for HttpTransport {
    #[instrument(level = "debug", skip(self, request), fields(operation = %request.operation_name))]
    fn execute(&mut self, request: &GraphqlRequest) -> Result<Value, DomainError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|e| DomainError::Transport(format!("POST {} failed: {}", self.endpoint, e)))?;

        // Errors arrive in the body, often with a 200 status.
        let status = response.status();
        debug!(%status, "Received response");

        let text = response
            .text()
            .map_err(|e| DomainError::Transport(format!("Failed to read response body: {}", e)))?;

        serde_json::from_str(&text).map_err(|e| {
            DomainError::MalformedResponse(format!("HTTP {}: {}: {}", status, e, text))
        })
    }
}
