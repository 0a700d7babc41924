// src/util/testing.rs

use anyhow::Result;
use serde_json::Value;
use std::collections::VecDeque;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::GraphqlTransport;
use crate::domain::{DomainError, GraphqlRequest};

enum Reply {
    Body(Value),
    Unreachable(String),
}

/// Scripted transport for exercising `NotesClient` without a server.
///
/// Replies are handed out in the order they were configured and every
/// request is recorded for later inspection.
///
/// # Examples
///
/// ```
/// use quicknotes::application::NotesClient;
/// use quicknotes::util::testing::MockTransport;
/// use serde_json::json;
///
/// let mock = MockTransport::builder()
///     .with_response(json!({"data": {"insert_notes_one": {"note": "hi"}}}))
///     .build();
/// let mut client = NotesClient::new(mock);
/// client.set_note("hi");
/// client.send_notes().unwrap();
/// assert_eq!(client.transport().requests()[0].operation_name, "sendNotes");
/// ```
pub struct MockTransport {
    replies: VecDeque<Reply>,
    requests: Vec<GraphqlRequest>,
}

impl MockTransport {
    pub fn builder() -> MockTransportBuilder {
        MockTransportBuilder::new()
    }

    /// Every request seen so far, oldest first
    pub fn requests(&self) -> &[GraphqlRequest] {
        &self.requests
    }
}

impl GraphqlTransport for MockTransport {
    fn execute(&mut self, request: &GraphqlRequest) -> Result<Value, DomainError> {
        self.requests.push(request.clone());
        match self.replies.pop_front() {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Unreachable(reason)) => Err(DomainError::Transport(reason)),
            None => Err(DomainError::Transport(format!(
                "no reply configured for {}",
                request.operation_name
            ))),
        }
    }
}

/// Builder for MockTransport
pub struct MockTransportBuilder {
    replies: VecDeque<Reply>,
}

impl MockTransportBuilder {
    pub fn new() -> Self {
        Self {
            replies: VecDeque::new(),
        }
    }

    /// Queue a response body
    pub fn with_response(mut self, body: Value) -> Self {
        self.replies.push_back(Reply::Body(body));
        self
    }

    /// Queue a network failure
    pub fn with_transport_failure(mut self, reason: &str) -> Self {
        self.replies.push_back(Reply::Unreachable(reason.to_string()));
        self
    }

    pub fn build(self) -> MockTransport {
        MockTransport {
            replies: self.replies,
            requests: Vec::new(),
        }
    }
}

impl Default for MockTransportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    let noisy_modules = ["reqwest", "hyper", "hyper_util", "rustls", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
