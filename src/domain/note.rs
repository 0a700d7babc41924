// src/domain/note.rs
use serde::{Deserialize, Serialize};

/// A note as stored by the server. `id` is assigned server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub note: String,
}
