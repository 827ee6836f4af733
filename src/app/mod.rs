//! The scrapbook controller.
//!
//! `ScrapbookApp` owns the in-memory state and the store it persists to. Each
//! public method is one user intent; a mutation writes the affected field back
//! to the store before returning.

mod bundle;

pub use bundle::{AppliedFields, Bundle, ImportOutcome};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::entity::{default_photos, Note, Photo, Theme, TimelineEntry};
use crate::error::Result;
use crate::storage::{KeyValueStore, NOTES_KEY, PHOTOS_KEY, THEME_KEY, TIMELINE_KEY};

pub struct ScrapbookApp<S: KeyValueStore> {
    store: S,
    notes: Vec<Note>,
    photos: Vec<Photo>,
    timeline: Vec<TimelineEntry>,
    theme: Theme,
    message_visible: bool,
}

impl<S: KeyValueStore> ScrapbookApp<S> {
    /// Build the app from whatever the store holds.
    ///
    /// Absent keys and values that fail to parse fall back to the defaults;
    /// the latter are logged and otherwise ignored.
    pub fn load(store: S) -> Result<Self> {
        let notes = load_json(&store, NOTES_KEY)?.unwrap_or_default();
        let photos = load_json(&store, PHOTOS_KEY)?.unwrap_or_else(default_photos);
        let timeline = load_json(&store, TIMELINE_KEY)?.unwrap_or_default();

        let theme = match store.load(THEME_KEY)? {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "ignoring unknown stored theme");
                Theme::default()
            }),
            None => Theme::default(),
        };

        Ok(Self {
            store,
            notes,
            photos,
            timeline,
            theme,
            message_visible: false,
        })
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn timeline(&self) -> &[TimelineEntry] {
        &self.timeline
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_message_visible(&self) -> bool {
        self.message_visible
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Prepend a note. Blank input is skipped and returns `false`.
    pub fn add_note(&mut self, text: &str) -> Result<bool> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(false);
        }
        self.notes.insert(0, text.to_string());
        self.persist_notes()?;
        Ok(true)
    }

    /// Remove the note at `index`. Out of range is a no-op returning `false`.
    pub fn delete_note(&mut self, index: usize) -> Result<bool> {
        if index >= self.notes.len() {
            return Ok(false);
        }
        self.notes.remove(index);
        self.persist_notes()?;
        Ok(true)
    }

    /// Prepend a timeline entry. Requires non-empty `date` and `title`.
    pub fn add_entry(&mut self, date: &str, title: &str, desc: &str) -> Result<bool> {
        let Some(entry) = TimelineEntry::new(date, title, desc) else {
            return Ok(false);
        };
        self.timeline.insert(0, entry);
        self.persist_timeline()?;
        Ok(true)
    }

    /// Remove the timeline entry at `index`. Out of range is a no-op returning `false`.
    pub fn delete_entry(&mut self, index: usize) -> Result<bool> {
        if index >= self.timeline.len() {
            return Ok(false);
        }
        self.timeline.remove(index);
        self.persist_timeline()?;
        Ok(true)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        self.persist_theme()
    }

    /// Flip the heart message and return whether it is now shown.
    pub fn toggle_message(&mut self) -> bool {
        self.message_visible = !self.message_visible;
        self.message_visible
    }

    /// Serialize all persisted fields as one compact JSON document.
    pub fn export_data(&self) -> Result<String> {
        let bundle = Bundle {
            notes: Some(self.notes.clone()),
            photos: Some(self.photos.clone()),
            timeline: Some(self.timeline.clone()),
            theme: Some(self.theme.to_string()),
        };
        Ok(serde_json::to_string(&bundle)?)
    }

    /// Replace state from an exported document.
    ///
    /// Input that is not a JSON object changes nothing. Otherwise every field
    /// present in the document replaces the current one wholesale and is
    /// persisted on its own; a field of the wrong shape is skipped without
    /// affecting the others.
    pub fn import_data(&mut self, contents: &str) -> Result<ImportOutcome> {
        let document = match serde_json::from_str::<Value>(contents) {
            Ok(Value::Object(document)) => document,
            Ok(_) => {
                warn!("failed to import data: not a JSON object");
                return Ok(ImportOutcome::Rejected {
                    reason: "expected a JSON object".to_string(),
                });
            }
            Err(e) => {
                warn!(error = %e, "failed to import data");
                return Ok(ImportOutcome::Rejected {
                    reason: e.to_string(),
                });
            }
        };

        let mut applied = AppliedFields::default();

        if let Some(notes) = import_field(&document, NOTES_KEY) {
            self.notes = notes;
            self.persist_notes()?;
            applied.notes = true;
        }
        if let Some(photos) = import_field(&document, PHOTOS_KEY) {
            self.photos = photos;
            self.persist_photos()?;
            applied.photos = true;
        }
        if let Some(timeline) = import_field(&document, TIMELINE_KEY) {
            self.timeline = timeline;
            self.persist_timeline()?;
            applied.timeline = true;
        }
        if let Some(raw) = import_field::<String>(&document, THEME_KEY).filter(|t| !t.is_empty()) {
            match raw.parse() {
                Ok(theme) => {
                    self.set_theme(theme)?;
                    applied.theme = true;
                }
                Err(_) => warn!(value = %raw, "skipping unknown theme in import"),
            }
        }

        Ok(ImportOutcome::Applied(applied))
    }

    fn persist_notes(&mut self) -> Result<()> {
        save_json(&mut self.store, NOTES_KEY, &self.notes)
    }

    fn persist_photos(&mut self) -> Result<()> {
        save_json(&mut self.store, PHOTOS_KEY, &self.photos)
    }

    fn persist_timeline(&mut self) -> Result<()> {
        save_json(&mut self.store, TIMELINE_KEY, &self.timeline)
    }

    // Theme is stored as the bare name, not JSON.
    fn persist_theme(&mut self) -> Result<()> {
        self.store.save(THEME_KEY, self.theme.as_str())
    }
}

fn load_json<S: KeyValueStore, T: DeserializeOwned>(store: &S, key: &str) -> Result<Option<T>> {
    let Some(raw) = store.load(key)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            warn!(key, error = %e, "failed to load stored value, using default");
            Ok(None)
        }
    }
}

// Absent and null fields yield None, as do fields of the wrong shape (logged).
fn import_field<T: DeserializeOwned>(document: &Map<String, Value>, key: &str) -> Option<T> {
    let value = document.get(key).filter(|v| !v.is_null())?;
    match T::deserialize(value) {
        Ok(field) => Some(field),
        Err(e) => {
            warn!(key, error = %e, "skipping malformed field in import");
            None
        }
    }
}

fn save_json<S: KeyValueStore, T: Serialize + ?Sized>(store: &mut S, key: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    store.save(key, &json)
}
