//! Core data types shared between core logic and the UI.
//!
//! Rule of thumb:
//! - These structs should be “boring bags of data”
//! - No GUI code
//! - No filesystem code

/// One `key`/`value` pair of module metadata, as reported by the engine.
///
/// Order matters: the engine sends metadata as an ordered list (tracker
/// modules can carry repeated keys, e.g. one `message` line per pattern), so
/// we keep a Vec instead of a map.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataEntry {
    pub key: String,
    pub value: String,
}

/// Everything we know about the currently loaded module.
/// Filled from the engine's `Loaded` event, replaced wholesale on reload.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTrack {
    pub filename: String,
    pub filepath: String,
    pub metadata: Vec<MetadataEntry>,
    /// Duration in seconds.
    pub duration: f64,
}

impl LoadedTrack {
    /// First metadata value for `key`, if any.
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    /// Display title shown in the title bar / marquee.
    ///
    /// - artist + title -> "Artist - Title"
    /// - only one of the two -> that one
    /// - neither -> the filename
    pub fn display_title(&self) -> String {
        let title = self.meta("title").filter(|s| !s.is_empty());
        let artist = self.meta("artist").filter(|s| !s.is_empty());

        match (artist, title) {
            (Some(artist), Some(title)) => format!("{artist} - {title}"),
            (Some(artist), None) => artist.to_string(),
            (None, Some(title)) => title.to_string(),
            (None, None) => self.filename.clone(),
        }
    }
}

/// Transport state as confirmed by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayState {
    Playing,
    Paused,
    #[default]
    Stopped,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(pairs: &[(&str, &str)]) -> LoadedTrack {
        LoadedTrack {
            filename: "track.mod".to_string(),
            filepath: "/mods/track.mod".to_string(),
            metadata: pairs
                .iter()
                .map(|(k, v)| MetadataEntry {
                    key: k.to_string(),
                    value: v.to_string(),
                })
                .collect(),
            duration: 0.0,
        }
    }

    #[test]
    fn title_uses_artist_and_title_when_both_present() {
        let t = track(&[("title", "Song"), ("artist", "Band")]);
        assert_eq!(t.display_title(), "Band - Song");
    }

    #[test]
    fn title_falls_back_to_single_field() {
        assert_eq!(track(&[("title", "Song")]).display_title(), "Song");
        assert_eq!(track(&[("artist", "Band")]).display_title(), "Band");
    }

    #[test]
    fn title_falls_back_to_filename() {
        assert_eq!(track(&[]).display_title(), "track.mod");
        assert_eq!(track(&[("title", "")]).display_title(), "track.mod");
    }

    #[test]
    fn meta_returns_first_match() {
        let t = track(&[("message", "one"), ("message", "two")]);
        assert_eq!(t.meta("message"), Some("one"));
        assert_eq!(t.meta("missing"), None);
    }
}
