mod photo;
mod theme;
mod timeline;

pub use photo::{default_photos, Photo};
pub use theme::{Theme, ThemePalette};
pub use timeline::TimelineEntry;

/// A short free-text message. Stored trimmed and never empty.
pub type Note = String;
