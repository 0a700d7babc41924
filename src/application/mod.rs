// src/application/mod.rs
pub mod notes_client;
pub mod operation;

pub use notes_client::{GraphqlTransport, NotesClient, OperationOutcome};
pub use operation::Operation;
