// src/application/notes_client.rs
use crate::application::Operation;
use crate::domain::{DomainError, GraphqlError, GraphqlRequest, GraphqlResponse, Note, NotesState};
use serde_json::{Map, Value};
use tracing::{debug, error, info, instrument};

pub trait GraphqlTransport {
    /// Post one request and return the decoded JSON body, whatever its shape.
    fn execute(&mut self, request: &GraphqlRequest) -> Result<Value, DomainError>;
}

/// Result of one round trip. GraphQL errors live here, not in `Err`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationOutcome {
    pub data: Option<Value>,
    pub errors: Vec<GraphqlError>,
}

impl OperationOutcome {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

pub struct NotesClient<T: GraphqlTransport> {
    transport: T,
    state: NotesState,
}

impl<T: GraphqlTransport> NotesClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: NotesState::default(),
        }
    }

    pub fn state(&self) -> &NotesState {
        &self.state
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn set_note(&mut self, text: impl Into<String>) {
        self.state.note = text.into();
    }

    pub fn set_new_note(&mut self, text: impl Into<String>) {
        self.state.new_note = text.into();
    }

    /// Request the full note list. GraphQL errors are logged and the
    /// payload is returned anyway.
    pub fn fetch_notes(&mut self) -> Result<OperationOutcome, DomainError> {
        self.perform(Operation::Fetch, Map::new())
    }

    /// Create a note from the current input text.
    pub fn send_notes(&mut self) -> Result<OperationOutcome, DomainError> {
        self.mutate(Operation::Send, Map::new())
    }

    /// Overwrite every note whose text equals the current input.
    pub fn change_notes(&mut self) -> Result<OperationOutcome, DomainError> {
        self.mutate(Operation::Change, Map::new())
    }

    /// Delete every note whose text equals the current input.
    pub fn delete_notes(&mut self) -> Result<OperationOutcome, DomainError> {
        self.mutate(Operation::Delete, Map::new())
    }

    /// Replace the text of note `id` with `new_note`.
    pub fn update_note_by_id(&mut self, id: i64) -> Result<OperationOutcome, DomainError> {
        let mut extra = Map::new();
        extra.insert("id".to_string(), Value::from(id));
        extra.insert(
            "new_note".to_string(),
            Value::String(self.state.new_note.clone()),
        );
        self.mutate(Operation::UpdateById, extra)
    }

    pub fn delete_note_by_id(&mut self, id: i64) -> Result<OperationOutcome, DomainError> {
        let mut extra = Map::new();
        extra.insert("id".to_string(), Value::from(id));
        self.mutate(Operation::DeleteById, extra)
    }

    /// One display entry per enumerable key of the last payload.
    pub fn render_items(&self) -> Vec<String> {
        self.state.data_keys()
    }

    /// Notes carried by the last payload, if it was a fetch result.
    pub fn notes(&self) -> Result<Vec<Note>, DomainError> {
        match self.state.data.get("data").and_then(|d| d.get("notes")) {
            Some(notes) => serde_json::from_value(notes.clone()).map_err(|e| {
                DomainError::MalformedResponse(format!("Unexpected notes payload: {}", e))
            }),
            None => Ok(Vec::new()),
        }
    }

    fn mutate(
        &mut self,
        op: Operation,
        extra: Map<String, Value>,
    ) -> Result<OperationOutcome, DomainError> {
        let outcome = self.perform(op, extra)?;
        let data = outcome.data.as_ref().unwrap_or(&Value::Null);
        info!(operation = op.name(), %data, "Mutation completed");
        Ok(outcome)
    }

    fn build_request(&self, op: Operation, extra: Map<String, Value>) -> GraphqlRequest {
        let mut variables = Map::new();
        if op.takes_note() {
            variables.insert("note".to_string(), Value::String(self.state.note.clone()));
        }
        variables.extend(extra);

        GraphqlRequest {
            query: op.document().to_string(),
            variables,
            operation_name: op.name().to_string(),
        }
    }

    #[instrument(level = "debug", skip(self, extra), fields(operation = op.name()))]
    fn perform(
        &mut self,
        op: Operation,
        extra: Map<String, Value>,
    ) -> Result<OperationOutcome, DomainError> {
        let request = self.build_request(op, extra);
        debug!(variables = ?request.variables, "Sending GraphQL request");

        let body = self.transport.execute(&request)?;
        let response = GraphqlResponse::from_value(&body)
            .map_err(|e| DomainError::MalformedResponse(e.to_string()))?;
        self.state.data = body;

        let errors = response.errors.unwrap_or_default();
        if !errors.is_empty() {
            let messages = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            error!(
                operation = op.name(),
                count = errors.len(),
                errors = %messages,
                "GraphQL request returned errors"
            );
        }

        Ok(OperationOutcome {
            data: response.data,
            errors,
        })
    }
}
