//! Text codec for the entries field.
//!
//! The form holds entries as JSON text. Authors may type either quote style;
//! every `'` is rewritten to `"` before parsing, so an apostrophe inside a
//! string value cannot be expressed.

use serde_json::Value;

use crate::error::FormError;

pub fn normalize_quotes(text: &str) -> String {
    text.replace('\'', "\"")
}

pub fn parse_entries(text: &str) -> Result<Value, FormError> {
    serde_json::from_str(&normalize_quotes(text))
        .map_err(|err| FormError::MalformedEntries(err.to_string()))
}

/// Compact JSON, as written back into the form and the results table.
pub fn format_entries(entries: &Value) -> String {
    entries.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_quotes_are_accepted() {
        let value = parse_entries("[{'id': 0, 'name': 'book'}]").unwrap();
        assert_eq!(value, json!([{"id": 0, "name": "book"}]));
    }

    #[test]
    fn malformed_text_is_rejected() {
        assert!(matches!(
            parse_entries("[{'id': 0,"),
            Err(FormError::MalformedEntries(_))
        ));
        assert!(matches!(parse_entries(""), Err(FormError::MalformedEntries(_))));
    }

    #[test]
    fn formatted_entries_parse_back() {
        let original = json!({"items": [{"item": "book"}, {"item": "lamp", "qty": 2}], "public": true});
        let text = format_entries(&original);
        assert_eq!(parse_entries(&text).unwrap(), original);
    }
}
