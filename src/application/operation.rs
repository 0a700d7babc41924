// src/application/operation.rs
//
// Fixed GraphQL documents for the `notes` table exposed by Hasura.

const FETCH_DOC: &str = r#"
query fetchNotes {
  notes {
    id
    note
  }
}
"#;

const SEND_DOC: &str = r#"
mutation sendNotes($note: String!) {
  insert_notes_one(object: {note: $note}) {
    note
  }
}
"#;

// Matching notes are overwritten with the literal "changed".
const CHANGE_DOC: &str = r#"
mutation changeNotes($note: String!) {
  update_notes(where: {note: {_eq: $note}}, _set: {note: "changed"}) {
    returning {
      note
    }
  }
}
"#;

const DELETE_DOC: &str = r#"
mutation deleteNotes($note: String!) {
  delete_notes(where: {note: {_eq: $note}}) {
    returning {
      note
    }
  }
}
"#;

const UPDATE_BY_ID_DOC: &str = r#"
mutation updateNoteById($id: Int!, $new_note: String!) {
  update_notes_by_pk(pk_columns: {id: $id}, _set: {note: $new_note}) {
    id
    note
  }
}
"#;

const DELETE_BY_ID_DOC: &str = r#"
mutation deleteNoteById($id: Int!) {
  delete_notes_by_pk(id: $id) {
    id
    note
  }
}
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Send,
    Change,
    Delete,
    UpdateById,
    DeleteById,
}

impl Operation {
    /// Value of `operationName`; matches the operation declared in the document.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Fetch => "fetchNotes",
            Operation::Send => "sendNotes",
            Operation::Change => "changeNotes",
            Operation::Delete => "deleteNotes",
            Operation::UpdateById => "updateNoteById",
            Operation::DeleteById => "deleteNoteById",
        }
    }

    /// Whether the request carries the current input as `note`. The text-keyed
    /// operations always send it; the id-keyed documents do not declare it.
    pub fn takes_note(&self) -> bool {
        !matches!(self, Operation::UpdateById | Operation::DeleteById)
    }

    pub fn document(&self) -> &'static str {
        match self {
            Operation::Fetch => FETCH_DOC,
            Operation::Send => SEND_DOC,
            Operation::Change => CHANGE_DOC,
            Operation::Delete => DELETE_DOC,
            Operation::UpdateById => UPDATE_BY_ID_DOC,
            Operation::DeleteById => DELETE_BY_ID_DOC,
        }
    }
}
