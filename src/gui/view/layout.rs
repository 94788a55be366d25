//! gui/view/layout.rs
//! Skin-space placement of every control in the classic shell, plus hit
//! testing for the canvas pointer stream.
//!
//! Coordinates are in skin pixels relative to the *main area* (below the
//! title bar); the draw/hit-test code shifts by `TITLEBAR_H`. Control sizes
//! are never hard-coded — they come from the symbol table, so a skin with a
//! missing sprite simply yields an unhittable zero-sized control.

use iced::{Point, Rectangle, Size};

use crate::core::drag::SliderGeometry;
use crate::core::skin::SymbolTable;

use super::super::state::ActiveSlider;

pub(crate) const WINDOW_W: f32 = 275.0;
pub(crate) const WINDOW_H: f32 = 130.0;
pub(crate) const TITLEBAR_H: f32 = 14.0;

pub(crate) const MARQUEE_POS: (f32, f32) = (110.0, 27.0);
pub(crate) const MARQUEE_WIDTH: u32 = 155;

pub(crate) const KBPS_POS: (f32, f32) = (111.0, 43.0);
pub(crate) const KHZ_POS: (f32, f32) = (156.0, 43.0);

pub(crate) const PLAYSTATE_POS: (f32, f32) = (26.0, 28.0);
pub(crate) const WORK_INDICATOR_POS: (f32, f32) = (24.0, 28.0);

/// Time display anchor: minus-sign slot, then minutes and seconds strips.
pub(crate) const TIME_MINUS_POS: (f32, f32) = (39.0, 32.0);
pub(crate) const TIME_MINUTES_POS: (f32, f32) = (47.0, 26.0);
pub(crate) const TIME_SECONDS_POS: (f32, f32) = (78.0, 26.0);
/// Clickable region that toggles elapsed/remaining.
pub(crate) const TIME_RECT: (f32, f32, f32, f32) = (39.0, 26.0, 60.0, 13.0);

pub(crate) const MONO_POS: (f32, f32) = (212.0, 41.0);
pub(crate) const STEREO_POS: (f32, f32) = (241.0, 41.0);

/// Pressable controls of the skinned surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Control {
    Previous,
    Play,
    Pause,
    Stop,
    Next,
    Eject,
    Shuffle,
    Repeat,
    Equalizer,
    Playlist,
    Options,
    DoubleSize,
    TimeDisplay,
}

/// (control, sprite, x, y) in main-area space; order is also hit-test order.
const BUTTONS: &[(Control, &str, f32, f32)] = &[
    (Control::Previous, "cbuttons-previous", 16.0, 88.0),
    (Control::Play, "cbuttons-play", 39.0, 88.0),
    (Control::Pause, "cbuttons-pause", 62.0, 88.0),
    (Control::Stop, "cbuttons-stop", 85.0, 88.0),
    (Control::Next, "cbuttons-next", 108.0, 88.0),
    (Control::Eject, "cbuttons-eject", 136.0, 89.0),
    (Control::Shuffle, "shufrep-shuffle", 164.0, 89.0),
    (Control::Repeat, "shufrep-repeat", 211.0, 89.0),
    (Control::Equalizer, "shufrep-eq", 219.0, 58.0),
    (Control::Playlist, "shufrep-playlist", 242.0, 58.0),
    (Control::Options, "clutterbar-options", 0.0, 0.0),
    (Control::DoubleSize, "clutterbar-doublesize", 250.0, 0.0),
];

const SLIDERS: &[(ActiveSlider, &str, &str, f32, f32)] = &[
    (ActiveSlider::Seek, "posbar-background", "posbar-thumb", 16.0, 72.0),
    (
        ActiveSlider::Volume,
        "volume-background-0",
        "volume-thumb",
        107.0,
        57.0,
    ),
    (
        ActiveSlider::Balance,
        "balance-background-0",
        "balance-thumb",
        177.0,
        57.0,
    ),
];

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Hit {
    Button(Control),
    SliderThumb(ActiveSlider),
}

/// Current slider values, needed to place thumbs for hit testing.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SliderValues {
    pub seek: f64,
    pub volume: f64,
    pub balance: f64,
}

impl SliderValues {
    fn get(&self, slider: ActiveSlider) -> f64 {
        match slider {
            ActiveSlider::Seek => self.seek,
            ActiveSlider::Volume => self.volume,
            ActiveSlider::Balance => self.balance,
        }
    }
}

pub(crate) struct SkinLayout<'a> {
    table: &'a SymbolTable,
}

impl<'a> SkinLayout<'a> {
    pub fn new(table: &'a SymbolTable) -> Self {
        Self { table }
    }

    fn sprite_size(&self, name: &str) -> Size {
        match self.table.size(name) {
            Some((w, h)) => Size::new(w as f32, h as f32),
            None => Size::ZERO,
        }
    }

    pub fn button_sprite(control: Control) -> &'static str {
        BUTTONS
            .iter()
            .find(|(c, ..)| *c == control)
            .map(|(_, sprite, ..)| *sprite)
            .unwrap_or("")
    }

    pub fn button_rect(&self, control: Control) -> Rectangle {
        if control == Control::TimeDisplay {
            let (x, y, w, h) = TIME_RECT;
            return Rectangle::new(Point::new(x, y), Size::new(w, h));
        }

        BUTTONS
            .iter()
            .find(|(c, ..)| *c == control)
            .map(|(_, sprite, x, y)| {
                Rectangle::new(Point::new(*x, *y), self.sprite_size(sprite))
            })
            .unwrap_or(Rectangle::new(Point::ORIGIN, Size::ZERO))
    }

    fn slider_entry(
        slider: ActiveSlider,
    ) -> &'static (ActiveSlider, &'static str, &'static str, f32, f32) {
        match slider {
            ActiveSlider::Seek => &SLIDERS[0],
            ActiveSlider::Volume => &SLIDERS[1],
            ActiveSlider::Balance => &SLIDERS[2],
        }
    }

    pub fn slider_thumb_sprite(slider: ActiveSlider) -> &'static str {
        Self::slider_entry(slider).2
    }

    /// Full background rect of a slider.
    pub fn slider_rect(&self, slider: ActiveSlider) -> Rectangle {
        let (_, background, _, x, y) = Self::slider_entry(slider);
        Rectangle::new(Point::new(*x, *y), self.sprite_size(background))
    }

    /// Track geometry (excludes the thumb footprint, see `core::drag`).
    pub fn slider_geometry(&self, slider: ActiveSlider) -> SliderGeometry {
        let rect = self.slider_rect(slider);
        let thumb = self.sprite_size(Self::slider_thumb_sprite(slider));
        SliderGeometry::new(rect.x, rect.width, thumb.width)
    }

    /// Where the thumb sits for a given value, vertically centered on the
    /// track.
    pub fn thumb_rect(&self, slider: ActiveSlider, value: f64) -> Rectangle {
        let rect = self.slider_rect(slider);
        let thumb = self.sprite_size(Self::slider_thumb_sprite(slider));
        let center_x = self.slider_geometry(slider).thumb_center_x(value);
        Rectangle::new(
            Point::new(
                center_x - thumb.width / 2.0,
                rect.y + (rect.height - thumb.height) / 2.0,
            ),
            thumb,
        )
    }

    /// Map a main-area point to the control under it. Thumbs win over
    /// everything else so a drag can start on a thumb overlapping a button.
    pub fn hit_test(&self, point: Point, values: SliderValues) -> Option<Hit> {
        for (slider, ..) in SLIDERS {
            if self.thumb_rect(*slider, values.get(*slider)).contains(point) {
                return Some(Hit::SliderThumb(*slider));
            }
        }

        if self.button_rect(Control::TimeDisplay).contains(point) {
            return Some(Hit::Button(Control::TimeDisplay));
        }

        for (control, ..) in BUTTONS {
            if self.button_rect(*control).contains(point) {
                return Some(Hit::Button(*control));
            }
        }

        None
    }
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use std::collections::BTreeMap;

    use crate::core::skin::{SpriteAtlas, SpriteRect, SymbolTable, load_skin};

    /// Symbol table with every sprite the classic shell references, at the
    /// classic sizes, cropped from one blank atlas.
    pub fn symbol_table() -> SymbolTable {
        let sizes: &[(&str, u32, u32)] = &[
            ("main-main", 275, 116),
            ("titlebar-main", 275, 14),
            ("cbuttons-previous", 23, 18),
            ("cbuttons-play", 23, 18),
            ("cbuttons-pause", 23, 18),
            ("cbuttons-stop", 23, 18),
            ("cbuttons-next", 22, 18),
            ("cbuttons-eject", 22, 16),
            ("shufrep-shuffle", 47, 15),
            ("shufrep-repeat", 28, 15),
            ("shufrep-eq", 23, 12),
            ("shufrep-playlist", 23, 12),
            ("clutterbar-options", 8, 43),
            ("clutterbar-doublesize", 8, 43),
            ("monoster-mono", 29, 12),
            ("monoster-stereo", 29, 12),
            ("playpaus-playing", 9, 9),
            ("playpaus-paused", 9, 9),
            ("playpaus-stopped", 9, 9),
            ("playpaus-not-working", 3, 9),
            ("numbers-minus-sign", 5, 1),
            ("numbers-no-minus-sign", 5, 1),
            ("numbers-digit-zero", 9, 13),
            ("numbers-digit-one", 9, 13),
            ("numbers-digit-two", 9, 13),
            ("numbers-digit-seven", 9, 13),
            ("posbar-background", 248, 10),
            ("posbar-thumb", 29, 10),
            ("volume-background-0", 68, 13),
            ("volume-background-14", 68, 13),
            ("volume-background-27", 68, 13),
            ("volume-thumb", 14, 11),
            ("balance-background-0", 38, 13),
            ("balance-background-27", 38, 13),
            ("balance-thumb", 14, 11),
            ("text-a", 5, 6),
            ("text-b", 5, 6),
            ("text-space", 5, 6),
        ];

        let mut rects = BTreeMap::new();
        let mut y = 0;
        for (name, w, h) in sizes {
            rects.insert(
                name.to_string(),
                SpriteRect {
                    x: 0,
                    y,
                    width: *w,
                    height: *h,
                },
            );
            y += h;
        }

        let image = image::RgbaImage::new(300, y.max(1));
        load_skin(&SpriteAtlas { image, rects })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::drag::ScaleFactor;
    use test_fixtures::symbol_table;

    fn values() -> SliderValues {
        SliderValues {
            seek: 0.5,
            volume: 0.8,
            balance: 0.5,
        }
    }

    #[test]
    fn play_button_rect_comes_from_the_sprite_size() {
        let table = symbol_table();
        let layout = SkinLayout::new(&table);
        let rect = layout.button_rect(Control::Play);
        assert_eq!((rect.x, rect.y), (39.0, 88.0));
        assert_eq!((rect.width, rect.height), (23.0, 18.0));
    }

    #[test]
    fn hit_test_finds_the_play_button() {
        let table = symbol_table();
        let layout = SkinLayout::new(&table);
        assert_eq!(
            layout.hit_test(Point::new(45.0, 95.0), values()),
            Some(Hit::Button(Control::Play))
        );
    }

    #[test]
    fn hit_test_respects_double_size_conversion() {
        let table = symbol_table();
        let layout = SkinLayout::new(&table);

        // A physical click at (90, 190) on a 2x surface is (45, 95) in skin
        // space: squarely on the play button.
        let (x, y) = ScaleFactor(2.0).to_skin(90.0, 190.0);
        assert_eq!(
            layout.hit_test(Point::new(x, y), values()),
            Some(Hit::Button(Control::Play))
        );

        // Unconverted it would land in empty space below everything.
        assert_eq!(layout.hit_test(Point::new(90.0, 190.0), values()), None);
    }

    #[test]
    fn hit_test_finds_slider_thumbs_at_their_value() {
        let table = symbol_table();
        let layout = SkinLayout::new(&table);

        let center = layout.thumb_rect(ActiveSlider::Seek, 0.5).center();
        assert_eq!(
            layout.hit_test(center, values()),
            Some(Hit::SliderThumb(ActiveSlider::Seek))
        );

        // At value 0 the same point misses.
        assert_eq!(
            layout.hit_test(
                center,
                SliderValues {
                    seek: 0.0,
                    ..values()
                }
            ),
            None
        );
    }

    #[test]
    fn missing_sprites_yield_unhittable_controls() {
        let table = SymbolTable::default();
        let layout = SkinLayout::new(&table);
        let rect = layout.button_rect(Control::Play);
        assert_eq!((rect.width, rect.height), (0.0, 0.0));
        assert_eq!(layout.hit_test(Point::new(45.0, 95.0), values()), None);
    }

    #[test]
    fn slider_geometry_excludes_the_thumb_footprint() {
        let table = symbol_table();
        let layout = SkinLayout::new(&table);
        let geometry = layout.slider_geometry(ActiveSlider::Seek);

        // posbar: x=16 w=248, thumb 29 -> centers span [30.5, 249.5]
        assert_eq!(geometry.thumb_center_x(0.0), 16.0 + 29.0 / 2.0);
        assert_eq!(geometry.thumb_center_x(1.0), 16.0 + 248.0 - 29.0 / 2.0);
    }

    #[test]
    fn time_display_region_is_clickable() {
        let table = symbol_table();
        let layout = SkinLayout::new(&table);
        assert_eq!(
            layout.hit_test(Point::new(50.0, 30.0), values()),
            Some(Hit::Button(Control::TimeDisplay))
        );
    }
}
