//! gui/model.rs
//! Player view model: the one broker subscriber behind both surfaces.
//!
//! Owns the *displayed* transport state. The engine stays authoritative; the
//! only local exception is the seek preview, which masks `PositionUpdated`
//! while the user is dragging and is reconciled by the next `Seeked` ack.

use crate::core::drag::DragController;
use crate::core::player::PlayerEvent;
use crate::core::types::{LoadedTrack, PlayState};

#[derive(Debug, Default)]
pub(crate) struct PlayerModel {
    pub track: Option<LoadedTrack>,
    /// Displayed position, seconds.
    pub position: f64,
    /// Authoritative duration, seconds.
    pub duration: f64,
    pub play_state: PlayState,
    /// True from the start of a local seek gesture until the engine confirms
    /// with `Seeked` (or abandons it with `Stopped`).
    pub seeking: bool,
    /// Drag state of the position slider. Lives here, not in the slider, so
    /// a `Stopped` event can cancel an in-flight gesture.
    pub seek_drag: DragController,
}

impl PlayerModel {
    pub fn apply(&mut self, event: &PlayerEvent) {
        match event {
            PlayerEvent::Loaded {
                filename,
                filepath,
                metadata,
                duration,
            } => {
                self.track = Some(LoadedTrack {
                    filename: filename.clone(),
                    filepath: filepath.clone(),
                    metadata: metadata.clone(),
                    duration: *duration,
                });
                self.position = 0.0;
                self.duration = *duration;
                self.play_state = PlayState::Stopped;
                self.seeking = false;
                self.seek_drag.cancel();
            }
            PlayerEvent::Playing => self.play_state = PlayState::Playing,
            PlayerEvent::Paused => self.play_state = PlayState::Paused,
            PlayerEvent::Stopped => {
                self.play_state = PlayState::Stopped;
                self.position = 0.0;
                self.duration = 0.0;
                self.seeking = false;
                self.seek_drag.cancel();
            }
            PlayerEvent::PositionUpdated { position, duration } => {
                // Don't fight the user's gesture: while a local seek is in
                // progress only the duration is trusted.
                self.duration = *duration;
                if !self.seeking && !self.seek_drag.is_dragging() {
                    self.position = *position;
                }
            }
            PlayerEvent::Seeked { position, duration } => {
                // The authoritative ack that a committed drag took effect.
                self.position = *position;
                self.duration = *duration;
                self.seeking = false;
            }
        }
    }

    pub fn display_title(&self) -> String {
        self.track
            .as_ref()
            .map(LoadedTrack::display_title)
            .unwrap_or_else(|| "RetroPulse".to_string())
    }

    /// Displayed position as a [0, 1] ratio (live preview while dragging).
    pub fn progress(&self) -> f64 {
        let authoritative = if self.duration > 0.0 {
            self.position / self.duration
        } else {
            0.0
        };
        self.seek_drag.display_value(authoritative)
    }

    /// Displayed position in seconds.
    pub fn displayed_position(&self) -> f64 {
        self.progress() * self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::drag::SliderGeometry;
    use crate::core::types::MetadataEntry;

    fn loaded() -> PlayerEvent {
        PlayerEvent::Loaded {
            filename: "track.mod".to_string(),
            filepath: "/mods/track.mod".to_string(),
            metadata: vec![MetadataEntry {
                key: "title".to_string(),
                value: "Song".to_string(),
            }],
            duration: 200.0,
        }
    }

    fn geometry() -> SliderGeometry {
        SliderGeometry::new(16.0, 248.0, 29.0)
    }

    #[test]
    fn loaded_resets_transport_and_takes_duration() {
        let mut model = PlayerModel::default();
        model.apply(&loaded());
        assert_eq!(model.duration, 200.0);
        assert_eq!(model.position, 0.0);
        assert_eq!(model.play_state, PlayState::Stopped);
        assert_eq!(model.display_title(), "Song");
    }

    #[test]
    fn position_updates_are_trusted_when_idle() {
        let mut model = PlayerModel::default();
        model.apply(&loaded());
        model.apply(&PlayerEvent::Playing);
        model.apply(&PlayerEvent::PositionUpdated {
            position: 12.5,
            duration: 200.0,
        });
        assert_eq!(model.position, 12.5);
        assert_eq!(model.play_state, PlayState::Playing);
    }

    #[test]
    fn position_updates_during_a_drag_keep_duration_but_not_position() {
        let mut model = PlayerModel::default();
        model.apply(&loaded());

        let geometry = geometry();
        model
            .seek_drag
            .begin(geometry.thumb_center_x(0.0), &geometry, 0.0);
        model.seek_drag.update(geometry.thumb_center_x(0.5), &geometry);
        model.seeking = true;

        model.apply(&PlayerEvent::PositionUpdated {
            position: 99.0,
            duration: 180.0,
        });

        // Duration is always stored; the displayed value stays the live one.
        assert_eq!(model.duration, 180.0);
        assert_ne!(model.position, 99.0);
        assert!((model.progress() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn seeked_is_applied_unconditionally_and_clears_seeking() {
        let mut model = PlayerModel::default();
        model.apply(&loaded());
        model.seeking = true;

        model.apply(&PlayerEvent::Seeked {
            position: 150.0,
            duration: 200.0,
        });
        assert!(!model.seeking);
        assert_eq!(model.position, 150.0);
        assert_eq!(model.duration, 200.0);
    }

    #[test]
    fn stopped_resets_display_and_cancels_an_active_drag() {
        let mut model = PlayerModel::default();
        model.apply(&loaded());

        let geometry = geometry();
        model
            .seek_drag
            .begin(geometry.thumb_center_x(0.3), &geometry, 0.3);
        model.seeking = true;

        model.apply(&PlayerEvent::Stopped);

        assert_eq!(model.position, 0.0);
        assert_eq!(model.duration, 0.0);
        assert!(!model.seeking);
        assert!(!model.seek_drag.is_dragging());
        assert_eq!(model.progress(), 0.0);
    }

    #[test]
    fn progress_is_zero_without_a_duration() {
        let model = PlayerModel::default();
        assert_eq!(model.progress(), 0.0);
    }
}
