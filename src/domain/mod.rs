// src/domain/mod.rs
pub mod error;
pub mod graphql;
pub mod note;
pub mod state;

pub use error::DomainError;
pub use graphql::{GraphqlError, GraphqlRequest, GraphqlResponse};
pub use note::Note;
pub use state::NotesState;
