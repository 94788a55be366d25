//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use crate::core::player::PlayerCommand;

use super::state::{Message, RetroPulse};

mod playback;
mod skinned;

pub(crate) fn update(state: &mut RetroPulse, message: Message) -> Task<Message> {
    match message {
        Message::Tick => playback::tick(state),

        // Loader
        Message::PathInputChanged(s) => {
            state.path_input = s;
            Task::none()
        }
        Message::LoadPressed => playback::load_pressed(state),

        // Transport
        Message::PlayPressed => playback::send(state, PlayerCommand::Play),
        Message::PausePressed => playback::send(state, PlayerCommand::Pause),
        Message::StopPressed => playback::send(state, PlayerCommand::Stop),
        Message::PrevPressed => playback::send(state, PlayerCommand::Previous),
        Message::NextPressed => playback::send(state, PlayerCommand::Next),

        // Seek: preview vs commit
        Message::SeekPreview(ratio) => playback::seek_preview(state, ratio),
        Message::SeekCommitted => playback::seek_commit(state),

        Message::VolumeChanged(volume) => playback::set_volume(state, volume),

        // Toggles
        Message::ShuffleToggled(on) => {
            state.shuffle = on;
            Task::none()
        }
        Message::RepeatToggled(on) => {
            state.repeat = on;
            Task::none()
        }
        Message::DoubleSizeToggled(on) => playback::set_double_size(state, on),

        // Skinned pointer stream
        Message::SkinPressed(point) => skinned::pressed(state, point),
        Message::SkinMoved(point) => skinned::moved(state, point),
        Message::SkinReleased(point) => skinned::released(state, point),
    }
}
