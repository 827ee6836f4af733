// src/app/bundle.rs
//! Export/import snapshot of the persisted scrapbook state.

use serde::{Deserialize, Serialize};

use crate::entity::{Note, Photo, TimelineEntry};

/// The JSON document written by export.
///
/// Every key is optional, matching what import accepts: a partial file only
/// touches the fields it carries and unknown keys are ignored. `theme` is the
/// plain lowercase name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bundle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<Note>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<Photo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Vec<TimelineEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

/// Which fields an import replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppliedFields {
    pub notes: bool,
    pub photos: bool,
    pub timeline: bool,
    pub theme: bool,
}

impl AppliedFields {
    pub fn is_empty(&self) -> bool {
        !(self.notes || self.photos || self.timeline || self.theme)
    }

    pub fn names(&self) -> Vec<&'static str> {
        [
            (self.notes, "notes"),
            (self.photos, "photos"),
            (self.timeline, "timeline"),
            (self.theme, "theme"),
        ]
        .into_iter()
        .filter_map(|(applied, name)| applied.then_some(name))
        .collect()
    }
}

/// Result of feeding a file to `ScrapbookApp::import_data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The file was not a readable bundle; nothing changed.
    Rejected { reason: String },
    /// The file parsed; the listed fields were replaced.
    Applied(AppliedFields),
}
