// src/domain/state.rs
use serde_json::Value;

/// Client-side state behind the input box and the note list.
#[derive(Debug, Clone, PartialEq)]
pub struct NotesState {
    /// Pending input text; the match key for text-keyed mutations
    pub note: String,
    /// Replacement text for id-keyed updates
    pub new_note: String,
    /// Last raw response payload, opaque
    pub data: Value,
}

impl Default for NotesState {
    fn default() -> Self {
        Self {
            note: String::new(),
            new_note: String::new(),
            data: Value::String(String::new()),
        }
    }
}

impl NotesState {
    /// Enumerable keys of `data`: object keys, array indices or string
    /// indices (one per UTF-16 code unit). Scalars have none.
    ///
    /// Index-like object keys come first in ascending numeric order; the
    /// remaining keys follow in the map's (sorted) order.
    pub fn data_keys(&self) -> Vec<String> {
        match &self.data {
            Value::Object(map) => {
                let (mut indices, names): (Vec<&String>, Vec<&String>) =
                    map.keys().partition(|key| array_index(key).is_some());
                indices.sort_by_key(|key| array_index(key));
                indices.into_iter().chain(names).cloned().collect()
            }
            Value::Array(items) => (0..items.len()).map(|i| i.to_string()).collect(),
            Value::String(s) => (0..s.encode_utf16().count()).map(|i| i.to_string()).collect(),
            Value::Null | Value::Bool(_) | Value::Number(_) => Vec::new(),
        }
    }
}

/// Canonical array index: decimal, no leading zeros, below 2^32 - 1.
fn array_index(key: &str) -> Option<u32> {
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|&i| i != u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!({"0": {"id": 1}, "1": "anything"}), vec!["0", "1"])]
    #[case(json!({"data": {}, "errors": []}), vec!["data", "errors"])]
    #[case(json!([1, 2, 3]), vec!["0", "1", "2"])]
    #[case(json!("ab"), vec!["0", "1"])]
    #[case(json!({"2": 0, "10": 0, "1": 0}), vec!["1", "2", "10"])]
    #[case(json!({"b": 0, "10": 0, "a": 0, "2": 0}), vec!["2", "10", "a", "b"])]
    #[case(json!({"01": 0, "1": 0, "-1": 0}), vec!["1", "-1", "01"])]
    #[case(json!("a😀"), vec!["0", "1", "2"])]
    #[case(json!(""), vec![])]
    #[case(json!(null), vec![])]
    #[case(json!(42), vec![])]
    fn given_data_shape_when_enumerating_keys_then_follows_shape(
        #[case] data: Value,
        #[case] expected: Vec<&str>,
    ) {
        let state = NotesState {
            data,
            ..Default::default()
        };

        assert_eq!(state.data_keys(), expected);
    }

    #[test]
    fn given_fresh_state_when_created_then_data_is_empty_string() {
        let state = NotesState::default();
        assert_eq!(state.data, json!(""));
        assert!(state.note.is_empty());
    }
}
