use crate::content::Block;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an entry within its disclosure group.
///
/// Authored content uses either integers or strings, and the two never
/// compare equal: `1` and `"1"` are different entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryId::Number(n) => write!(f, "{n}"),
            EntryId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntryId {
    fn from(n: i64) -> Self {
        EntryId::Number(n)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        EntryId::Text(s.to_string())
    }
}

impl From<String> for EntryId {
    fn from(s: String) -> Self {
        EntryId::Text(s)
    }
}

/// Always-visible summary of an entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EntryHeader {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl EntryHeader {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// True when any of the optional metadata fields carries a value
    pub fn has_metadata(&self) -> bool {
        self.status.is_some() || self.date.is_some() || !self.tags.is_empty()
    }
}

/// One header + body unit of a disclosure group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisclosureEntry {
    pub id: EntryId,
    #[serde(flatten)]
    pub header: EntryHeader,
    #[serde(default)]
    pub body: Vec<Block>,
}

impl DisclosureEntry {
    pub fn new(id: impl Into<EntryId>, header: EntryHeader, body: Vec<Block>) -> Self {
        Self {
            id: id.into(),
            header,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_and_text_ids_are_distinct() {
        assert_ne!(EntryId::from(1), EntryId::from("1"));
        assert_eq!(EntryId::from(1).to_string(), EntryId::from("1").to_string());
    }

    #[test]
    fn test_entry_deserializes_flattened_header() {
        let toml_src = r#"
id = 3
title = "Circuit breakers"
status = "stable"
tags = ["resilience", "gateway"]

[[body]]
kind = "text"
markdown = "Stop calling a failing dependency."
"#;
        let entry: DisclosureEntry = toml::from_str(toml_src).unwrap();

        assert_eq!(entry.id, EntryId::Number(3));
        assert_eq!(entry.header.title, "Circuit breakers");
        assert_eq!(entry.header.status.as_deref(), Some("stable"));
        assert_eq!(entry.header.tags, vec!["resilience", "gateway"]);
        assert!(entry.header.date.is_none());
        assert_eq!(entry.body.len(), 1);
    }

    #[test]
    fn test_entry_without_body_or_metadata() {
        let entry: DisclosureEntry = toml::from_str("id = \"what\"\ntitle = \"What?\"").unwrap();

        assert_eq!(entry.id, EntryId::Text("what".to_string()));
        assert!(!entry.header.has_metadata());
        assert!(entry.body.is_empty());
    }
}
