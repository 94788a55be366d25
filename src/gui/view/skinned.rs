//! gui/view/skinned.rs
//! Classic skinned surface: a single canvas that blits atlas sprites and
//! publishes the raw pointer stream as skin-space messages.
//!
//! Rendering is split in two:
//! - `draw_ops` is pure: state + symbol table -> ordered list of sprite blits
//!   in window skin-space. That is what the tests exercise.
//! - The canvas `Program` maps each op to `frame.draw_image` and applies the
//!   ambient scale once, so everything above it stays in skin pixels.

use iced::mouse;
use iced::widget::canvas::{self, Canvas, Event, Frame, Geometry, Image, Program};
use iced::widget::image::FilterMethod;
use iced::{Element, Length, Point, Rectangle, Renderer, Size, Theme};

use crate::core::drag::{balance_background_index, balance_to_slider, volume_background_index};
use crate::core::skin::SymbolTable;
use crate::core::skin::marquee::Marquee;
use crate::core::skin::text::{CHAR_WIDTH, digit_glyphs, digit_sprite, glyph_name, text_sprite};
use crate::core::types::PlayState;

use super::super::state::{ActiveSlider, Message, RetroPulse};
use super::super::util::time_parts;
use super::layout::{
    Control, KBPS_POS, KHZ_POS, MARQUEE_POS, MARQUEE_WIDTH, MONO_POS, PLAYSTATE_POS, STEREO_POS,
    SkinLayout, TIME_MINUS_POS, TIME_MINUTES_POS, TIME_SECONDS_POS, TITLEBAR_H, WINDOW_H, WINDOW_W,
    WORK_INDICATOR_POS,
};

/// Separator drawn between marquee repetitions.
const MARQUEE_SEPARATOR: &str = " *** ";

/// Horizontal advance of one large time digit.
const DIGIT_ADVANCE: f32 = 12.0;

/// Controls that get a sprite of their own (the time display is drawn by the
/// digit strips instead).
const DRAWN_CONTROLS: &[Control] = &[
    Control::Previous,
    Control::Play,
    Control::Pause,
    Control::Stop,
    Control::Next,
    Control::Eject,
    Control::Shuffle,
    Control::Repeat,
    Control::Equalizer,
    Control::Playlist,
    Control::Options,
    Control::DoubleSize,
];

/// One sprite blit in window skin-space.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DrawOp {
    pub name: String,
    pub x: f32,
    pub y: f32,
}

fn push(ops: &mut Vec<DrawOp>, table: &SymbolTable, name: &str, x: f32, y: f32) {
    // Fail closed: a sprite the skin doesn't ship simply isn't drawn.
    if table.get(name).is_some() {
        ops.push(DrawOp {
            name: name.to_string(),
            x,
            y,
        });
    }
}

fn push_main(ops: &mut Vec<DrawOp>, table: &SymbolTable, name: &str, x: f32, y: f32) {
    push(ops, table, name, x, y + TITLEBAR_H);
}

fn control_checked(state: &RetroPulse, control: Control) -> bool {
    match control {
        Control::Shuffle => state.shuffle,
        Control::Repeat => state.repeat,
        Control::Equalizer => state.equalizer,
        Control::Playlist => state.playlist,
        Control::DoubleSize => state.config.double_size,
        _ => false,
    }
}

fn push_text(ops: &mut Vec<DrawOp>, table: &SymbolTable, text: &str, x: f32, y: f32) {
    for (i, c) in text.chars().enumerate() {
        push_main(
            ops,
            table,
            &text_sprite(glyph_name(c)),
            x + (i as u32 * CHAR_WIDTH) as f32,
            y,
        );
    }
}

/// Everything the skinned surface draws this frame, back to front.
pub(crate) fn draw_ops(state: &RetroPulse, table: &SymbolTable) -> Vec<DrawOp> {
    let mut ops = Vec::new();
    let layout = SkinLayout::new(table);
    let model = state.model.borrow();

    // Background layers
    push(&mut ops, table, "titlebar-main", 0.0, 0.0);
    push(&mut ops, table, "main-main", 0.0, TITLEBAR_H);

    // Buttons and toggles
    for &control in DRAWN_CONTROLS {
        let rect = layout.button_rect(control);
        let base = SkinLayout::button_sprite(control);
        let checked = format!("{base}-checked");
        let name = if control_checked(state, control) && table.get(&checked).is_some() {
            checked
        } else {
            base.to_string()
        };
        push_main(&mut ops, table, &name, rect.x, rect.y);
    }

    // Transport state + work indicator
    let playstate = match model.play_state {
        PlayState::Playing => "playpaus-playing",
        PlayState::Paused => "playpaus-paused",
        PlayState::Stopped => "playpaus-stopped",
    };
    push_main(&mut ops, table, playstate, PLAYSTATE_POS.0, PLAYSTATE_POS.1);
    push_main(
        &mut ops,
        table,
        "playpaus-not-working",
        WORK_INDICATOR_POS.0,
        WORK_INDICATOR_POS.1,
    );

    // Channel mode + stream info, when the engine reported them
    if let Some(track) = &model.track {
        match track.meta("channels") {
            Some("mono") => push_main(&mut ops, table, "monoster-mono", MONO_POS.0, MONO_POS.1),
            Some("stereo") => push_main(&mut ops, table, "monoster-stereo", STEREO_POS.0, STEREO_POS.1),
            _ => {}
        }
        if let Some(bitrate) = track.meta("bitrate") {
            push_text(&mut ops, table, bitrate, KBPS_POS.0, KBPS_POS.1);
        }
        if let Some(rate) = track.meta("samplerate") {
            push_text(&mut ops, table, rate, KHZ_POS.0, KHZ_POS.1);
        }
    }

    // Time display
    let (negative, minutes, seconds) =
        time_parts(model.displayed_position(), model.duration, state.time_mode);
    let minus = if negative {
        "numbers-minus-sign"
    } else {
        "numbers-no-minus-sign"
    };
    push_main(&mut ops, table, minus, TIME_MINUS_POS.0, TIME_MINUS_POS.1);
    for (i, glyph) in digit_glyphs(minutes, 2).iter().enumerate() {
        push_main(
            &mut ops,
            table,
            &digit_sprite(glyph),
            TIME_MINUTES_POS.0 + i as f32 * DIGIT_ADVANCE,
            TIME_MINUTES_POS.1,
        );
    }
    for (i, glyph) in digit_glyphs(seconds, 2).iter().enumerate() {
        push_main(
            &mut ops,
            table,
            &digit_sprite(glyph),
            TIME_SECONDS_POS.0 + i as f32 * DIGIT_ADVANCE,
            TIME_SECONDS_POS.1,
        );
    }

    // Sliders: background variant from the displayed value, thumb on top
    let seek = model.progress();
    let volume = state.volume_drag.display_value(state.volume);
    let balance = state
        .balance_drag
        .display_value(balance_to_slider(state.balance));

    let rect = layout.slider_rect(ActiveSlider::Seek);
    push_main(&mut ops, table, "posbar-background", rect.x, rect.y);
    let thumb = layout.thumb_rect(ActiveSlider::Seek, seek);
    push_main(&mut ops, table, "posbar-thumb", thumb.x, thumb.y);

    let rect = layout.slider_rect(ActiveSlider::Volume);
    push_main(
        &mut ops,
        table,
        &format!("volume-background-{}", volume_background_index(volume)),
        rect.x,
        rect.y,
    );
    let thumb = layout.thumb_rect(ActiveSlider::Volume, volume);
    push_main(&mut ops, table, "volume-thumb", thumb.x, thumb.y);

    let rect = layout.slider_rect(ActiveSlider::Balance);
    push_main(
        &mut ops,
        table,
        &format!("balance-background-{}", balance_background_index(balance)),
        rect.x,
        rect.y,
    );
    let thumb = layout.thumb_rect(ActiveSlider::Balance, balance);
    push_main(&mut ops, table, "balance-thumb", thumb.x, thumb.y);

    // Marquee: whole-character scroll, clipped to whole glyphs
    let marquee = Marquee::new(model.display_title(), MARQUEE_SEPARATOR);
    let rendered: Vec<char> = marquee.render_text(MARQUEE_WIDTH).chars().collect();
    let start = (marquee.offset_at(MARQUEE_WIDTH, state.anim_seconds) / CHAR_WIDTH) as usize;
    let visible = (MARQUEE_WIDTH / CHAR_WIDTH) as usize;
    for i in 0..visible {
        let Some(c) = rendered.get(start + i) else {
            break;
        };
        push_main(
            &mut ops,
            table,
            &text_sprite(glyph_name(*c)),
            MARQUEE_POS.0 + (i as u32 * CHAR_WIDTH) as f32,
            MARQUEE_POS.1,
        );
    }

    ops
}

pub(crate) fn view(state: &RetroPulse) -> Element<'_, Message> {
    let scale = state.scale().0;
    Canvas::new(SkinCanvas { state })
        .width(Length::Fixed(WINDOW_W * scale))
        .height(Length::Fixed(WINDOW_H * scale))
        .into()
}

struct SkinCanvas<'a> {
    state: &'a RetroPulse,
}

impl Program<Message> for SkinCanvas<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let scale = self.state.scale();

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                let (x, y) = scale.to_skin(position.x, position.y);
                Some(canvas::Action::publish(Message::SkinPressed(Point::new(
                    x, y,
                ))))
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if self.state.active_slider.is_none() {
                    return None;
                }
                // Track the drag even when the cursor leaves the canvas.
                let position = cursor.position()?;
                let (x, y) = scale.to_skin(position.x - bounds.x, position.y - bounds.y);
                Some(canvas::Action::publish(Message::SkinMoved(Point::new(
                    x, y,
                ))))
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if self.state.active_slider.is_none() {
                    return None;
                }
                let position = cursor.position().unwrap_or(Point::ORIGIN);
                let (x, y) = scale.to_skin(position.x - bounds.x, position.y - bounds.y);
                Some(canvas::Action::publish(Message::SkinReleased(Point::new(
                    x, y,
                ))))
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let Some(skin) = &self.state.skin else {
            return Vec::new();
        };

        let mut frame = Frame::new(renderer, bounds.size());
        frame.scale(self.state.scale().0);

        for op in draw_ops(self.state, &skin.table) {
            let Some(handle) = skin.handle(&op.name) else {
                continue;
            };
            let Some((width, height)) = skin.table.size(&op.name) else {
                continue;
            };
            frame.draw_image(
                Rectangle::new(
                    Point::new(op.x, op.y),
                    Size::new(width as f32, height as f32),
                ),
                Image::new(handle.clone()).filter_method(FilterMethod::Nearest),
            );
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.state.active_slider.is_some() {
            mouse::Interaction::Grabbing
        } else {
            mouse::Interaction::default()
        }
    }
}
