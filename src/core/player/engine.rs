//! core/player/engine.rs
//! Simulated playback engine.
//!
//! Stands in for the real decoder during development and in tests: it keeps a
//! load queue, a play/pause flag and a position clock, and answers every
//! command with the same events the real engine would send. No audio, no
//! format parsing.
//!
//! Owns:
//! - command loop + periodic position ticks
//!
//! Emits PlayerEvent back via a channel. No Iced imports.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

use crate::core::types::{LoadedTrack, MetadataEntry};

use super::{PlayerCommand, PlayerEvent};

const TICK_MS: u64 = 200;

/// Placeholder duration reported for every module; the simulated engine does
/// not parse files, so it cannot know the real one.
const SIMULATED_DURATION: f64 = 300.0;

pub struct SimulatedEngine {
    /// Load order, so Previous/Next have something to walk.
    queue: Vec<PathBuf>,
    current: Option<usize>,

    playing: bool,
    /// Seconds into the current module.
    position: f64,

    event_tx: Sender<PlayerEvent>,
}

impl SimulatedEngine {
    pub fn new(event_tx: Sender<PlayerEvent>) -> Self {
        Self {
            queue: Vec::new(),
            current: None,
            playing: false,
            position: 0.0,
            event_tx,
        }
    }

    pub fn run(&mut self, command_rx: Receiver<PlayerCommand>) {
        let tick = Duration::from_millis(TICK_MS);

        loop {
            match command_rx.recv_timeout(tick) {
                Ok(cmd) => {
                    if self.handle_command(cmd) {
                        break;
                    }
                    while let Ok(cmd) = command_rx.try_recv() {
                        if self.handle_command(cmd) {
                            return;
                        }
                    }
                }
                Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
                Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
            }

            self.tick(tick.as_secs_f64());
        }
    }

    /// Returns true on Shutdown.
    fn handle_command(&mut self, cmd: PlayerCommand) -> bool {
        match cmd {
            PlayerCommand::Load(path) => {
                self.queue.push(path);
                self.load_index(self.queue.len() - 1);
            }
            PlayerCommand::Play => {
                if self.current.is_some() && !self.playing {
                    self.playing = true;
                    self.send(PlayerEvent::Playing);
                }
            }
            PlayerCommand::Pause => {
                if self.playing {
                    self.playing = false;
                    self.send(PlayerEvent::Paused);
                }
            }
            PlayerCommand::Stop => {
                self.playing = false;
                self.position = 0.0;
                self.send(PlayerEvent::Stopped);
            }
            PlayerCommand::Seek(position) => {
                if self.current.is_some() {
                    self.position = position.clamp(0.0, SIMULATED_DURATION);
                    self.send(PlayerEvent::Seeked {
                        position: self.position,
                        duration: SIMULATED_DURATION,
                    });
                }
            }
            PlayerCommand::Previous => self.step(-1),
            PlayerCommand::Next => self.step(1),
            PlayerCommand::Shutdown => return true,
        }

        false
    }

    fn tick(&mut self, elapsed: f64) {
        if !self.playing {
            return;
        }

        self.position += elapsed;

        if self.position >= SIMULATED_DURATION {
            // End of module: fall through to the next queued one, or stop.
            if self.has_neighbor(1) {
                self.step(1);
            } else {
                self.playing = false;
                self.position = 0.0;
                self.send(PlayerEvent::Stopped);
            }
            return;
        }

        self.send(PlayerEvent::PositionUpdated {
            position: self.position,
            duration: SIMULATED_DURATION,
        });
    }

    fn has_neighbor(&self, direction: isize) -> bool {
        let Some(current) = self.current else {
            return false;
        };
        let target = current as isize + direction;
        target >= 0 && (target as usize) < self.queue.len()
    }

    /// Move within the queue; a step past either end is ignored.
    fn step(&mut self, direction: isize) {
        let Some(current) = self.current else {
            return;
        };
        if !self.has_neighbor(direction) {
            return;
        }

        let was_playing = self.playing;
        self.load_index((current as isize + direction) as usize);
        if was_playing {
            self.playing = true;
            self.send(PlayerEvent::Playing);
        }
    }

    fn load_index(&mut self, index: usize) {
        let path = self.queue[index].clone();
        self.current = Some(index);
        self.playing = false;
        self.position = 0.0;

        let track = simulated_track(&path);
        self.send(PlayerEvent::loaded(&track));
    }

    fn send(&self, event: PlayerEvent) {
        // The receiver is gone during teardown; nothing left to notify.
        let _ = self.event_tx.send(event);
    }
}

/// Fabricate plausible track info from the path alone.
fn simulated_track(path: &Path) -> LoadedTrack {
    let filename = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| filename.clone());

    let mut metadata = vec![MetadataEntry {
        key: "title".to_string(),
        value: stem,
    }];

    if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
        metadata.push(MetadataEntry {
            key: "type".to_string(),
            value: ext.to_string(),
        });
    }

    metadata.push(MetadataEntry {
        key: "channels".to_string(),
        value: "stereo".to_string(),
    });

    LoadedTrack {
        filename,
        filepath: path.display().to_string(),
        metadata,
        duration: SIMULATED_DURATION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn engine() -> (SimulatedEngine, mpsc::Receiver<PlayerEvent>) {
        let (tx, rx) = mpsc::channel();
        (SimulatedEngine::new(tx), rx)
    }

    #[test]
    fn load_emits_loaded_with_filename_metadata() {
        let (mut engine, rx) = engine();
        engine.handle_command(PlayerCommand::Load(PathBuf::from("/mods/banana.s3m")));

        match rx.try_recv().unwrap() {
            PlayerEvent::Loaded {
                filename, metadata, ..
            } => {
                assert_eq!(filename, "banana.s3m");
                assert!(metadata.iter().any(|m| m.key == "title" && m.value == "banana"));
            }
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[test]
    fn seek_answers_with_seeked_clamped_to_duration() {
        let (mut engine, rx) = engine();
        engine.handle_command(PlayerCommand::Load(PathBuf::from("a.mod")));
        let _ = rx.try_recv();

        engine.handle_command(PlayerCommand::Seek(1e9));
        match rx.try_recv().unwrap() {
            PlayerEvent::Seeked { position, duration } => {
                assert_eq!(position, duration);
            }
            other => panic!("expected Seeked, got {other:?}"),
        }
    }

    #[test]
    fn seek_without_module_is_silent() {
        let (mut engine, rx) = engine();
        engine.handle_command(PlayerCommand::Seek(10.0));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn stop_resets_position_and_reports_stopped() {
        let (mut engine, rx) = engine();
        engine.handle_command(PlayerCommand::Load(PathBuf::from("a.mod")));
        engine.handle_command(PlayerCommand::Play);
        engine.tick(1.0);
        engine.handle_command(PlayerCommand::Stop);

        let events: Vec<PlayerEvent> = rx.try_iter().collect();
        assert!(matches!(events.last(), Some(PlayerEvent::Stopped)));
        assert_eq!(engine.position, 0.0);
        assert!(!engine.playing);
    }

    #[test]
    fn ticks_advance_position_only_while_playing() {
        let (mut engine, rx) = engine();
        engine.handle_command(PlayerCommand::Load(PathBuf::from("a.mod")));
        engine.tick(1.0);
        assert_eq!(engine.position, 0.0);

        engine.handle_command(PlayerCommand::Play);
        engine.tick(1.0);
        let events: Vec<PlayerEvent> = rx.try_iter().collect();
        assert!(events.iter().any(|e| matches!(
            e,
            PlayerEvent::PositionUpdated { position, .. } if *position > 0.0
        )));
    }

    #[test]
    fn next_and_previous_walk_the_queue() {
        let (mut engine, rx) = engine();
        engine.handle_command(PlayerCommand::Load(PathBuf::from("a.mod")));
        engine.handle_command(PlayerCommand::Load(PathBuf::from("b.mod")));
        let _: Vec<_> = rx.try_iter().collect();

        engine.handle_command(PlayerCommand::Previous);
        match rx.try_recv().unwrap() {
            PlayerEvent::Loaded { filename, .. } => assert_eq!(filename, "a.mod"),
            other => panic!("expected Loaded, got {other:?}"),
        }

        // Already at the front: another Previous is a no-op.
        engine.handle_command(PlayerCommand::Previous);
        assert!(rx.try_recv().is_err());

        engine.handle_command(PlayerCommand::Next);
        match rx.try_recv().unwrap() {
            PlayerEvent::Loaded { filename, .. } => assert_eq!(filename, "b.mod"),
            other => panic!("expected Loaded, got {other:?}"),
        }
    }
}
