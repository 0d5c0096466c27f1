//! Search results table.

use wl_api_types::WishlistRecord;

use crate::entries::format_entries;

/// Header label and width (percent) of each column.
pub const COLUMNS: [(&str, u8); 4] = [("ID", 10), ("User", 10), ("Name", 40), ("Entries", 40)];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsTable {
    pub rows: Vec<[String; 4]>,
}

pub fn render_table(records: &[WishlistRecord]) -> ResultsTable {
    let rows = records
        .iter()
        .map(|w| {
            [
                w.id.map(|id| id.to_string()).unwrap_or_default(),
                w.user.clone(),
                w.name.clone(),
                format_entries(&w.entries),
            ]
        })
        .collect();
    ResultsTable { rows }
}

impl ResultsTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from(r#"<table class="table-striped"><tr>"#);
        for (label, width) in COLUMNS {
            html.push_str(&format!(r#"<th style="width:{width}%">{label}</th>"#));
        }
        html.push_str("</tr>");

        for row in &self.rows {
            html.push_str("<tr>");
            for cell in row {
                html.push_str(&format!("<td>{}</td>", escape_html(cell)));
            }
            html.push_str("</tr>");
        }

        html.push_str("</table>");
        html
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wl_api_types::WishlistId;

    fn record(id: i64, user: &str, name: &str) -> WishlistRecord {
        WishlistRecord {
            id: Some(WishlistId(id)),
            user: user.to_owned(),
            name: name.to_owned(),
            entries: json!([{"id": 0, "name": "book"}]),
        }
    }

    #[test]
    fn every_column_is_populated() {
        let table = render_table(&[record(1, "alice", "birthday"), record(2, "bob", "xmas")]);
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.rows[0],
            [
                "1".to_owned(),
                "alice".to_owned(),
                "birthday".to_owned(),
                r#"[{"id":0,"name":"book"}]"#.to_owned(),
            ]
        );
    }

    #[test]
    fn html_has_one_row_per_record_and_escapes_cells() {
        let table = render_table(&[record(1, "<b>eve</b>", "a & b")]);
        let html = table.to_html();
        assert_eq!(html.matches("<tr>").count(), 2);
        assert!(html.contains("<td>&lt;b&gt;eve&lt;/b&gt;</td>"));
        assert!(html.contains("<td>a &amp; b</td>"));
        assert!(html.contains(r#"<th style="width:10%">User</th>"#));
    }

    #[test]
    fn empty_results_render_header_only() {
        let table = render_table(&[]);
        assert!(table.is_empty());
        assert_eq!(table.to_html().matches("<tr>").count(), 1);
    }
}
