//! Contents.json data model for the AppIcon asset catalog.
//!
//! An `AppIcon.appiconset` directory is only picked up by Xcode when a
//! Contents.json names its image slots, so the generator rewrites the file
//! alongside the PNGs. Only the single-size iOS app icon schema is modeled
//! here, including the dark/tinted appearance slots introduced with iOS 18.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Root structure of a Contents.json file.
#[derive(Serialize, Debug, Clone)]
pub struct ContentsFile {
    pub images: Vec<ImageEntry>,
    pub info: Info,
}

/// One image slot within the icon set.
#[derive(Serialize, Debug, Clone)]
pub struct ImageEntry {
    /// Appearance variants this slot serves (absent for the any-appearance slot).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appearances: Option<Vec<Appearance>>,

    pub filename: String,

    /// Device idiom; the single-size icon uses "universal".
    pub idiom: String,

    pub platform: String,

    /// Size in points, e.g. "1024x1024".
    pub size: String,
}

/// A single appearance trait, e.g. luminosity "dark" or "tinted".
#[derive(Serialize, Debug, Clone)]
pub struct Appearance {
    pub appearance: String,
    pub value: String,
}

/// Versioning and authorship information for the asset catalog.
#[derive(Serialize, Debug, Clone)]
pub struct Info {
    pub author: String,
    pub version: u8,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            author: "xcode".to_string(),
            version: 1,
        }
    }
}

impl ImageEntry {
    /// Creates the any-appearance (light) slot for a 1024pt universal icon.
    pub fn universal(filename: impl Into<String>) -> Self {
        Self {
            appearances: None,
            filename: filename.into(),
            idiom: "universal".to_string(),
            platform: "ios".to_string(),
            size: "1024x1024".to_string(),
        }
    }

    /// Tags the slot with a luminosity appearance ("dark" or "tinted").
    pub fn with_luminosity(mut self, value: impl Into<String>) -> Self {
        self.appearances = Some(vec![Appearance {
            appearance: "luminosity".to_string(),
            value: value.into(),
        }]);
        self
    }
}

/// Writes a Contents.json file covering the given image slots to `dir`.
pub fn write_contents_json(dir: &Path, images: Vec<ImageEntry>) -> Result<()> {
    let contents = ContentsFile {
        images,
        info: Info::default(),
    };
    let json =
        serde_json::to_string_pretty(&contents).context("Failed to serialize Contents.json")?;
    std::fs::write(dir.join("Contents.json"), json).context("Failed to write Contents.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universal_entry() {
        let entry = ImageEntry::universal("AppIcon.png");
        assert_eq!(entry.filename, "AppIcon.png");
        assert_eq!(entry.idiom, "universal");
        assert_eq!(entry.platform, "ios");
        assert_eq!(entry.size, "1024x1024");
        assert!(entry.appearances.is_none());
    }

    #[test]
    fn test_luminosity_entry() {
        let entry = ImageEntry::universal("AppIcon-Dark.png").with_luminosity("dark");
        let appearances = entry.appearances.unwrap();
        assert_eq!(appearances.len(), 1);
        assert_eq!(appearances[0].appearance, "luminosity");
        assert_eq!(appearances[0].value, "dark");
    }

    #[test]
    fn test_serialization_shape() {
        let contents = ContentsFile {
            images: vec![
                ImageEntry::universal("AppIcon.png"),
                ImageEntry::universal("AppIcon-Dark.png").with_luminosity("dark"),
                ImageEntry::universal("AppIcon-Tinted.png").with_luminosity("tinted"),
            ],
            info: Info::default(),
        };

        let json = serde_json::to_string_pretty(&contents).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        let images = parsed["images"].as_array().unwrap();
        assert_eq!(images.len(), 3);

        // The any-appearance slot must not carry an appearances key.
        assert!(images[0].get("appearances").is_none());
        assert_eq!(images[1]["appearances"][0]["value"], "dark");
        assert_eq!(images[2]["appearances"][0]["value"], "tinted");

        assert_eq!(parsed["info"]["version"], 1);
        assert_eq!(parsed["info"]["author"], "xcode");
    }

    #[test]
    fn test_write_contents_json() {
        let temp_dir = std::env::temp_dir().join("gym_icon_gen_contents_test");
        std::fs::create_dir_all(&temp_dir).unwrap();

        write_contents_json(&temp_dir, vec![ImageEntry::universal("AppIcon.png")]).unwrap();

        let written = std::fs::read_to_string(temp_dir.join("Contents.json")).unwrap();
        assert!(written.contains("AppIcon.png"));
        assert!(written.contains("\"version\": 1"));

        std::fs::remove_dir_all(&temp_dir).ok();
    }
}
