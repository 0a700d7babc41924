// src/ports/text.rs
use crate::application::OperationOutcome;
use crate::constants::LIST_PREVIEW_CHARS;
use crate::domain::Note;
use crate::util::text::{first_line, truncate};
use anyhow::{Context, Result};
use serde_json::Value;

/// Formats notes and operation results for the terminal.
#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    /// One `id<TAB>preview` line per note
    pub fn render_list(&self, notes: &[Note]) -> String {
        notes
            .iter()
            .map(|n| format!("{}\t{}", n.id, truncate(&first_line(&n.note), LIST_PREVIEW_CHARS)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_json(&self, notes: &[Note]) -> Result<String> {
        serde_json::to_string_pretty(notes).context("Failed to serialize notes to JSON")
    }

    pub fn render_keys(&self, keys: &[String]) -> String {
        keys.join("\n")
    }

    /// Summary of a mutation's `data`, e.g. `insert_notes_one: {"note":"x"}`
    pub fn render_outcome(&self, outcome: &OperationOutcome) -> String {
        match &outcome.data {
            Some(Value::Object(fields)) => fields
                .iter()
                .map(|(field, value)| format!("{}: {}", field, value))
                .collect::<Vec<_>>()
                .join("\n"),
            Some(other) => other.to_string(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn note(id: i64, text: &str) -> Note {
        Note {
            id,
            note: text.to_string(),
        }
    }

    #[test]
    fn given_notes_when_rendering_list_then_shows_id_and_first_line() {
        let presenter = TextPresenter::new();
        let notes = vec![note(1, "groceries\nmilk"), note(2, "call mom")];

        let output = presenter.render_list(&notes);

        assert_eq!(output, "1\tgroceries\n2\tcall mom");
    }

    #[test]
    fn given_long_note_when_rendering_list_then_truncates_preview() {
        let presenter = TextPresenter::new();
        let long = "x".repeat(LIST_PREVIEW_CHARS + 10);

        let output = presenter.render_list(&[note(3, &long)]);

        assert!(output.ends_with('…'));
        assert_eq!(output.chars().count(), "3\t".len() + LIST_PREVIEW_CHARS);
    }

    #[test]
    fn given_no_notes_when_rendering_list_then_returns_empty() {
        assert_eq!(TextPresenter::new().render_list(&[]), "");
    }

    #[test]
    fn given_mutation_data_when_rendering_outcome_then_lists_fields() {
        let outcome = OperationOutcome {
            data: Some(json!({"insert_notes_one": {"note": "x"}})),
            errors: vec![],
        };

        let output = TextPresenter::new().render_outcome(&outcome);

        assert_eq!(output, r#"insert_notes_one: {"note":"x"}"#);
    }

    #[test]
    fn given_missing_data_when_rendering_outcome_then_returns_empty() {
        let output = TextPresenter::new().render_outcome(&OperationOutcome::default());
        assert_eq!(output, "");
    }
}
