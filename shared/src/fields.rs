//! Field alias resolution
//!
//! Backend rows come from spreadsheets and NocoDB tables whose column names
//! drift between deployments. Every logical field carries an ordered list of
//! accepted column names and a single lookup picks the first one present.

use serde_json::{Map, Value};

/// Ordered list of accepted column names for one logical field
pub type Aliases = &'static [&'static str];

/// First alias whose value is present and not null
pub fn first_present<'a>(record: &'a Map<String, Value>, aliases: &[&str]) -> Option<&'a Value> {
    aliases
        .iter()
        .find_map(|key| record.get(*key).filter(|value| !value.is_null()))
}

/// First alias holding a non-blank string. Numbers are stringified.
pub fn first_text(record: &Map<String, Value>, aliases: &[&str]) -> Option<String> {
    aliases.iter().find_map(|key| match record.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn test_first_present_respects_alias_order() {
        let row = record(json!({ "name": "Paella", "Nombre": "Tortilla" }));
        let found = first_present(&row, &["Nombre", "name"]);
        assert_eq!(found, Some(&json!("Tortilla")));
    }

    #[test]
    fn test_first_present_skips_null() {
        let row = record(json!({ "Nombre": null, "name": "Paella" }));
        assert_eq!(first_present(&row, &["Nombre", "name"]), Some(&json!("Paella")));
        assert!(first_present(&row, &["missing"]).is_none());
    }

    #[test]
    fn test_first_text_skips_blank_and_stringifies_numbers() {
        let row = record(json!({ "Cliente": "  ", "client": 42 }));
        assert_eq!(first_text(&row, &["Cliente", "client"]), Some("42".to_string()));

        let row = record(json!({ "Cliente": false }));
        assert_eq!(first_text(&row, &["Cliente"]), None);
    }
}
