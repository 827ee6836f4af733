// src/entity/timeline.rs
use serde::{Deserialize, Serialize};

/// A dated milestone. Entries keep insertion order, they are never sorted by `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub desc: String,
}

impl TimelineEntry {
    /// Build an entry when both `date` and `title` are present.
    pub fn new(date: &str, title: &str, desc: &str) -> Option<Self> {
        if date.is_empty() || title.is_empty() {
            return None;
        }
        Some(Self {
            date: date.to_string(),
            title: title.to_string(),
            desc: desc.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_date_and_title() {
        assert!(TimelineEntry::new("", "First date", "").is_none());
        assert!(TimelineEntry::new("2024-02-14", "", "dinner").is_none());
        let entry = TimelineEntry::new("2024-02-14", "First date", "").unwrap();
        assert_eq!(entry.desc, "");
    }

    #[test]
    fn test_missing_desc_deserializes_empty() {
        let entry: TimelineEntry =
            serde_json::from_str(r#"{"date":"2024-01-01","title":"New year"}"#).unwrap();
        assert_eq!(entry.desc, "");
    }
}
