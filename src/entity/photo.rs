// src/entity/photo.rs
use serde::{Deserialize, Serialize};

const SEED_PHOTO_COUNT: usize = 11;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub src: String,
    pub caption: String,
}

impl Photo {
    pub fn new(src: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            caption: caption.into(),
        }
    }
}

/// Built-in gallery shown until an import replaces it.
pub fn default_photos() -> Vec<Photo> {
    (1..=SEED_PHOTO_COUNT)
        .map(|n| Photo::new(format!("photos/image{}.jpg", n), format!("Memory {}", n)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_photos_in_display_order() {
        let photos = default_photos();
        assert_eq!(photos.len(), 11);
        assert_eq!(photos[0], Photo::new("photos/image1.jpg", "Memory 1"));
        assert_eq!(photos[10].caption, "Memory 11");
    }

    #[test]
    fn test_photo_json_shape() {
        let photo = Photo::new("a.jpg", "Beach");
        let json = serde_json::to_string(&photo).unwrap();
        assert_eq!(json, r#"{"src":"a.jpg","caption":"Beach"}"#);
    }
}
