//! gui/view/modern.rs
//! Fallback surface: plain widgets, no skin assets required.

use iced::widget::{button, checkbox, column, row, slider, text, text_input};
use iced::{Alignment, Element, Length};

use super::super::state::{Message, RetroPulse};
use super::super::util::fmt_seconds;

pub(crate) fn view(state: &RetroPulse) -> Element<'_, Message> {
    let (title, progress, position, duration) = {
        let model = state.model.borrow();
        (
            model.display_title(),
            model.progress() as f32,
            model.displayed_position(),
            model.duration,
        )
    };

    let path_input = text_input("Path to a module file (.mod, .xm, .it, .s3m)", &state.path_input)
        .on_input(Message::PathInputChanged)
        .on_submit(Message::LoadPressed)
        .width(Length::Fill);
    let load_btn = button("Load").on_press(Message::LoadPressed);

    let transport = row![
        button("⏮").on_press(Message::PrevPressed),
        button("Play").on_press(Message::PlayPressed),
        button("Pause").on_press(Message::PausePressed),
        button("Stop").on_press(Message::StopPressed),
        button("⏭").on_press(Message::NextPressed),
    ]
    .spacing(8);

    let seek = slider(0.0..=1.0, progress, |ratio| {
        Message::SeekPreview(ratio as f64)
    })
    .step(0.001)
    .on_release(Message::SeekCommitted)
    .width(Length::Fill);

    let time_text = if duration > 0.0 {
        format!("{} / {}", fmt_seconds(position), fmt_seconds(duration))
    } else {
        format!("{} / -:--", fmt_seconds(position))
    };

    let volume = slider(0.0..=1.0, state.volume as f32, |volume| {
        Message::VolumeChanged(volume as f64)
    })
    .step(0.01)
    .width(Length::Fixed(140.0));

    let toggles = row![
        checkbox(state.shuffle)
            .label("Shuffle")
            .on_toggle(Message::ShuffleToggled),
        checkbox(state.repeat)
            .label("Repeat")
            .on_toggle(Message::RepeatToggled),
        checkbox(state.config.double_size)
            .label("Double size")
            .on_toggle(Message::DoubleSizeToggled),
    ]
    .spacing(12);

    column![
        text(title).size(18),
        text(&state.status).size(12),
        row![path_input, load_btn].spacing(8),
        transport,
        row![seek, text(time_text).size(12)]
            .spacing(10)
            .align_y(Alignment::Center),
        row![text("Vol").size(12), volume, toggles]
            .spacing(12)
            .align_y(Alignment::Center),
    ]
    .spacing(12)
    .padding(12)
    .into()
}
