use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Server-assigned wishlist identifier.
///
/// Accepts either a JSON number or a numeric string on the wire; some
/// deployments of the wishlist service marshal ids as strings.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub struct WishlistId(pub i64);

impl fmt::Display for WishlistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for WishlistId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(WishlistId(n)),
            Raw::Text(s) => s
                .trim()
                .parse::<i64>()
                .map(WishlistId)
                .map_err(|_| serde::de::Error::custom(format!("invalid wishlist id: {s}"))),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WishlistRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<WishlistId>,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub entries: Value,
}

/// Body of `POST /wishlists` and `PUT /wishlists/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WishlistPayload {
    pub name: String,
    pub user: String,
    pub entries: Value,
}

/// Query string of `GET /wishlists`. Both keys are always sent, empty when unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchQuery {
    pub wishlist_name: String,
    pub wishlist_user: String,
}

/// Conventional shape of one wishlist item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WishlistEntry {
    pub id: u32,
    pub name: String,
}

impl WishlistEntry {
    /// Expands `"book, pen"` into entries numbered from 0. Blank items are skipped.
    pub fn from_names(list: &str) -> Vec<WishlistEntry> {
        list.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .enumerate()
            .map(|(index, name)| WishlistEntry {
                id: index as u32,
                name: name.to_owned(),
            })
            .collect()
    }
}

/// Error body returned by the wishlist service: `{status, error, message}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_accepts_string_and_numeric_ids() {
        let a: WishlistRecord =
            serde_json::from_value(json!({"id": 7, "user": "alice", "name": "birthday"})).unwrap();
        let b: WishlistRecord =
            serde_json::from_value(json!({"id": "7", "user": "alice", "name": "birthday"})).unwrap();
        assert_eq!(a.id, Some(WishlistId(7)));
        assert_eq!(a, b);
        assert_eq!(a.entries, Value::Null);
    }

    #[test]
    fn record_without_id_omits_it_on_the_wire() {
        let record = WishlistRecord {
            id: None,
            user: "bob".to_owned(),
            name: "xmas".to_owned(),
            entries: json!([]),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["user"], "bob");
    }

    #[test]
    fn entries_from_names_numbers_from_zero() {
        let entries = WishlistEntry::from_names("book, pen,, lamp ");
        assert_eq!(
            entries,
            vec![
                WishlistEntry { id: 0, name: "book".to_owned() },
                WishlistEntry { id: 1, name: "pen".to_owned() },
                WishlistEntry { id: 2, name: "lamp".to_owned() },
            ]
        );
    }

    #[test]
    fn error_body_tolerates_missing_fields() {
        let body: ErrorBody = serde_json::from_str(r#"{"error": "Not Found"}"#).unwrap();
        assert_eq!(body.message, None);
        assert_eq!(body.error.as_deref(), Some("Not Found"));
    }
}
