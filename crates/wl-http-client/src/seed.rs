//! Demo/test data loading.
//!
//! A seed file is a JSON array of `{name, user, entries}`. `entries` may be a
//! comma-separated list of item names, expanded into numbered entries, or any
//! JSON value passed through unchanged.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::info;
use wl_api_types::{WishlistEntry, WishlistPayload, WishlistRecord};
use wl_form_core::WishlistApi;

use crate::HttpWishlistClient;

#[derive(Debug, Deserialize)]
struct SeedRow {
    name: String,
    user: String,
    #[serde(default)]
    entries: Value,
}

impl SeedRow {
    fn into_payload(self) -> Result<WishlistPayload> {
        let entries = match self.entries {
            Value::String(list) => serde_json::to_value(WishlistEntry::from_names(&list))?,
            Value::Null => Value::Array(Vec::new()),
            other => other,
        };
        Ok(WishlistPayload {
            name: self.name,
            user: self.user,
            entries,
        })
    }
}

pub fn load_seed_file(path: &Path) -> Result<Vec<WishlistPayload>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read seed file {}", path.display()))?;
    let rows: Vec<SeedRow> = serde_json::from_str(&raw)
        .with_context(|| format!("parse seed file {}", path.display()))?;
    rows.into_iter().map(SeedRow::into_payload).collect()
}

/// Creates every payload in order, optionally emptying the store first.
pub async fn seed(
    client: &HttpWishlistClient,
    payloads: &[WishlistPayload],
    reset_first: bool,
) -> Result<Vec<WishlistRecord>> {
    if reset_first {
        client.reset().await.context("reset wishlists")?;
        info!("wishlist store reset");
    }

    let mut created = Vec::with_capacity(payloads.len());
    for payload in payloads {
        let record = client
            .create(payload)
            .await
            .with_context(|| format!("create wishlist '{}' for '{}'", payload.name, payload.user))?;
        info!(id = ?record.id, name = %record.name, user = %record.user, "wishlist created");
        created.push(record);
    }
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stub;
    use serde_json::json;
    use std::io::Write;

    fn seed_file(contents: &str) -> anyhow::Result<tempfile::NamedTempFile> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(contents.as_bytes())?;
        Ok(file)
    }

    #[test]
    fn comma_separated_entries_are_expanded() -> anyhow::Result<()> {
        let file = seed_file(
            r#"[
                {"name": "Wishlist demo 1", "user": "demo user1", "entries": "test11,test12"},
                {"name": "Wishlist demo 2", "user": "demo user2", "entries": {"raw": true}},
                {"name": "empty", "user": "demo user3"}
            ]"#,
        )?;

        let payloads = load_seed_file(file.path())?;

        assert_eq!(payloads.len(), 3);
        assert_eq!(
            payloads[0].entries,
            json!([{"id": 0, "name": "test11"}, {"id": 1, "name": "test12"}])
        );
        assert_eq!(payloads[1].entries, json!({"raw": true}));
        assert_eq!(payloads[2].entries, json!([]));
        Ok(())
    }

    #[test]
    fn malformed_file_names_the_path() -> anyhow::Result<()> {
        let file = seed_file("{not an array")?;
        let err = load_seed_file(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parse seed file"));
        Ok(())
    }

    #[tokio::test]
    async fn seeding_resets_then_creates() -> anyhow::Result<()> {
        let store = stub::Store::default();
        let base = stub::spawn(store.clone()).await?;
        let client = HttpWishlistClient::new(Some(base));
        client
            .create(&WishlistPayload {
                name: "stale".to_owned(),
                user: "old".to_owned(),
                entries: json!([]),
            })
            .await?;

        let payloads = vec![WishlistPayload {
            name: "fresh".to_owned(),
            user: "new".to_owned(),
            entries: json!([]),
        }];
        let created = seed(&client, &payloads, true).await?;

        assert_eq!(created.len(), 1);
        let records = store.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "fresh");
        Ok(())
    }
}
