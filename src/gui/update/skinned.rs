//! gui/update/skinned.rs
//! Pointer routing for the skinned surface: hit-test on press, drag updates
//! on move, commit on release.
//!
//! Points arrive already converted to window skin-space by the canvas; this
//! module shifts them below the title bar and hands slider x positions to the
//! drag controllers.

use iced::{Point, Task};

use crate::core::drag::{balance_to_slider, slider_to_balance};
use crate::core::player::PlayerCommand;

use super::super::state::{ActiveSlider, Message, RetroPulse};
use super::super::view::layout::{Control, Hit, SkinLayout, SliderValues, TITLEBAR_H};
use super::playback;

fn main_area(point: Point) -> Point {
    Point::new(point.x, point.y - TITLEBAR_H)
}

fn slider_values(state: &RetroPulse) -> SliderValues {
    SliderValues {
        seek: state.model.borrow().progress(),
        volume: state.volume,
        balance: balance_to_slider(state.balance),
    }
}

fn slider_geometry(state: &RetroPulse, slider: ActiveSlider) -> Option<crate::core::drag::SliderGeometry> {
    let skin = state.skin.as_ref()?;
    Some(SkinLayout::new(&skin.table).slider_geometry(slider))
}

pub(crate) fn pressed(state: &mut RetroPulse, point: Point) -> Task<Message> {
    let hit = {
        let Some(skin) = &state.skin else {
            return Task::none();
        };
        SkinLayout::new(&skin.table).hit_test(main_area(point), slider_values(state))
    };

    match hit {
        Some(Hit::Button(control)) => button_pressed(state, control),
        Some(Hit::SliderThumb(slider)) => begin_drag(state, slider, main_area(point).x),
        None => Task::none(),
    }
}

fn button_pressed(state: &mut RetroPulse, control: Control) -> Task<Message> {
    match control {
        Control::Previous => playback::send(state, PlayerCommand::Previous),
        Control::Play => playback::send(state, PlayerCommand::Play),
        Control::Pause => playback::send(state, PlayerCommand::Pause),
        Control::Stop => playback::send(state, PlayerCommand::Stop),
        Control::Next => playback::send(state, PlayerCommand::Next),
        Control::Eject => playback::eject_pressed(state),
        Control::Shuffle => {
            state.shuffle = !state.shuffle;
            Task::none()
        }
        Control::Repeat => {
            state.repeat = !state.repeat;
            Task::none()
        }
        Control::Equalizer => {
            state.equalizer = !state.equalizer;
            Task::none()
        }
        Control::Playlist => {
            state.playlist = !state.playlist;
            Task::none()
        }
        Control::Options => {
            state.status = "No options menu in this build.".to_string();
            Task::none()
        }
        Control::DoubleSize => playback::set_double_size(state, !state.config.double_size),
        Control::TimeDisplay => playback::toggle_time_mode(state),
    }
}

fn begin_drag(state: &mut RetroPulse, slider: ActiveSlider, x: f32) -> Task<Message> {
    let Some(geometry) = slider_geometry(state, slider) else {
        return Task::none();
    };

    match slider {
        ActiveSlider::Seek => {
            let model = &mut *state.model.borrow_mut();
            let current = model.progress();
            model.seek_drag.begin(x, &geometry, current);
        }
        ActiveSlider::Volume => state.volume_drag.begin(x, &geometry, state.volume),
        ActiveSlider::Balance => state
            .balance_drag
            .begin(x, &geometry, balance_to_slider(state.balance)),
    }

    state.active_slider = Some(slider);
    Task::none()
}

pub(crate) fn moved(state: &mut RetroPulse, point: Point) -> Task<Message> {
    let Some(slider) = state.active_slider else {
        return Task::none();
    };
    let Some(geometry) = slider_geometry(state, slider) else {
        return Task::none();
    };

    let x = main_area(point).x;
    match slider {
        ActiveSlider::Seek => {
            state.model.borrow_mut().seek_drag.update(x, &geometry);
        }
        ActiveSlider::Volume => {
            state.volume_drag.update(x, &geometry);
        }
        ActiveSlider::Balance => {
            state.balance_drag.update(x, &geometry);
        }
    }

    Task::none()
}

pub(crate) fn released(state: &mut RetroPulse, point: Point) -> Task<Message> {
    let Some(slider) = state.active_slider.take() else {
        return Task::none();
    };
    let Some(geometry) = slider_geometry(state, slider) else {
        return Task::none();
    };

    let x = main_area(point).x;
    match slider {
        ActiveSlider::Seek => {
            let target = {
                let model = &mut *state.model.borrow_mut();
                model.seek_drag.update(x, &geometry);
                match model.seek_drag.finish() {
                    Some(ratio) if model.duration > 0.0 => {
                        model.seeking = true;
                        Some(ratio * model.duration)
                    }
                    _ => None,
                }
            };
            match target {
                Some(seconds) => playback::send(state, PlayerCommand::Seek(seconds)),
                None => Task::none(),
            }
        }
        ActiveSlider::Volume => {
            state.volume_drag.update(x, &geometry);
            if let Some(volume) = state.volume_drag.finish() {
                state.volume = volume;
            }
            Task::none()
        }
        ActiveSlider::Balance => {
            state.balance_drag.update(x, &geometry);
            if let Some(value) = state.balance_drag.finish() {
                state.balance = slider_to_balance(value);
            }
            Task::none()
        }
    }
}
