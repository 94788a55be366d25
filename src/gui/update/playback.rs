//! gui/update/playback.rs
//! GUI-engine bridge: transport commands, the seek preview/commit split, and
//! surface-local controls shared by both surfaces.
//!
//! Design goals:
//! - The GUI never touches a decoder directly; every transport action is a
//!   `PlayerCommand` and every displayed value comes back through the broker.
//! - Seeking is preview-then-commit: dragging only updates the preview, the
//!   engine hears about it exactly once, at release.

use std::path::PathBuf;

use iced::{Size, Task, window};

use crate::core::drag::SliderGeometry;
use crate::core::player::PlayerCommand;

use super::super::state::{Message, RetroPulse, Surface, TICK_MS, TimeMode};
use super::super::view::layout::{WINDOW_H, WINDOW_W};

/// Unit-track geometry used by the modern slider, which already works in
/// [0, 1] ratios instead of skin pixels.
fn unit_geometry() -> SliderGeometry {
    SliderGeometry::new(0.0, 1.0, 0.0)
}

/// Periodic poll: drain engine events through the broker, advance animations.
pub(crate) fn tick(state: &mut RetroPulse) -> Task<Message> {
    state.broker.pump();
    state.anim_seconds += TICK_MS as f32 / 1000.0;
    Task::none()
}

pub(crate) fn send(state: &mut RetroPulse, cmd: PlayerCommand) -> Task<Message> {
    if let Some(player) = &state.player {
        player.send(cmd);
    }
    Task::none()
}

pub(crate) fn load_pressed(state: &mut RetroPulse) -> Task<Message> {
    let input = state.path_input.trim();
    if input.is_empty() {
        state.status = "Enter a module path first.".to_string();
        return Task::none();
    }

    let path = PathBuf::from(input);
    state.status = format!("Loading: {}", path.display());
    state.path_input.clear();
    send(state, PlayerCommand::Load(path))
}

/// No file picker in this build; loading goes through the path box.
pub(crate) fn eject_pressed(state: &mut RetroPulse) -> Task<Message> {
    state.status = "Load modules through the path box.".to_string();
    Task::none()
}

/// Seek slider changed: preview only (UI updates, no engine command).
pub(crate) fn seek_preview(state: &mut RetroPulse, ratio: f64) -> Task<Message> {
    let model = &mut *state.model.borrow_mut();
    let geometry = unit_geometry();

    if !model.seek_drag.is_dragging() {
        let current = model.progress();
        model
            .seek_drag
            .begin(geometry.thumb_center_x(current), &geometry, current);
    }
    model.seek_drag.update(ratio as f32, &geometry);

    Task::none()
}

/// Seek slider released: commit the previewed ratio to the engine.
pub(crate) fn seek_commit(state: &mut RetroPulse) -> Task<Message> {
    let target = {
        let model = &mut *state.model.borrow_mut();
        let Some(ratio) = model.seek_drag.finish() else {
            return Task::none();
        };

        if model.duration > 0.0 {
            model.seeking = true;
            Some(ratio * model.duration)
        } else {
            None
        }
    };

    match target {
        Some(seconds) => send(state, PlayerCommand::Seek(seconds)),
        None => Task::none(),
    }
}

/// Volume is surface-local; the engine in this build has no volume command.
pub(crate) fn set_volume(state: &mut RetroPulse, volume: f64) -> Task<Message> {
    state.volume = volume.clamp(0.0, 1.0);
    Task::none()
}

pub(crate) fn toggle_time_mode(state: &mut RetroPulse) -> Task<Message> {
    state.time_mode = match state.time_mode {
        TimeMode::Elapsed => TimeMode::Remaining,
        TimeMode::Remaining => TimeMode::Elapsed,
    };
    Task::none()
}

pub(crate) fn set_double_size(state: &mut RetroPulse, on: bool) -> Task<Message> {
    state.config.double_size = on;

    // Only the skinned surface has a fixed pixel grid worth resizing for.
    if state.surface() != Surface::Skinned {
        return Task::none();
    }

    let scale = state.scale().0;
    let size = Size::new(WINDOW_W * scale, WINDOW_H * scale);
    window::latest().and_then(move |id| window::resize(id, size))
}
