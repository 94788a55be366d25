//! core/skin/mod.rs
//! Sprite atlas model + skin engine.
//!
//! A skin is one packed image plus named rectangles inside it. `load_skin`
//! turns that into a `SymbolTable`: per-sprite entries the UI can render
//! without ever hard-coding pixel offsets. Everything here is plain data and
//! pixel shuffling — no GUI imports, no I/O (the disk loader lives in
//! `atlas.rs`).

use std::collections::BTreeMap;

use image::RgbaImage;
use serde::Deserialize;

pub mod atlas;
pub mod marquee;
pub mod text;

pub use atlas::load_atlas;

#[derive(Debug, thiserror::Error)]
pub enum SkinError {
    #[error("failed to read skin file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode skin image: {0}")]
    Image(#[from] image::ImageError),
    #[error("failed to parse atlas sidecar: {0}")]
    Sidecar(#[from] serde_json::Error),
    #[error("atlas sidecar references missing image file {0}")]
    MissingImage(String),
}

/// Named rectangle in atlas pixel space. Immutable once loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpriteRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// One packed skin image plus the name -> rect mapping.
///
/// Created once per skin load, replaced wholesale on skin change, never
/// mutated in place. The image is shared read-only by every primitive that
/// renders from it.
#[derive(Debug, Clone)]
pub struct SpriteAtlas {
    pub image: RgbaImage,
    pub rects: BTreeMap<String, SpriteRect>,
}

/// One renderable sprite: dimensions plus its pixels, already cropped out of
/// the shared atlas.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteEntry {
    pub width: u32,
    pub height: u32,
    pub rgba: RgbaImage,
}

/// Derived, cached mapping from sprite name to renderable entry — the
/// skin-engine equivalent of a CSS rule set.
///
/// Lookups for unknown names return `None`; rendering fails closed (draws
/// nothing) instead of crashing on a missing skin asset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    entries: BTreeMap<String, SpriteEntry>,
}

impl SymbolTable {
    pub fn get(&self, name: &str) -> Option<&SpriteEntry> {
        self.entries.get(name)
    }

    /// Sprite dimensions, if the name exists.
    pub fn size(&self, name: &str) -> Option<(u32, u32)> {
        self.get(name).map(|entry| (entry.width, entry.height))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Build the renderable symbol table from an atlas.
///
/// Pure with respect to the atlas: the same atlas always yields the same
/// table. Rects that fall outside the image are dropped (with a warning)
/// rather than wrapping or panicking.
pub fn load_skin(atlas: &SpriteAtlas) -> SymbolTable {
    let mut entries = BTreeMap::new();

    for (name, rect) in &atlas.rects {
        if rect.x + rect.width > atlas.image.width() || rect.y + rect.height > atlas.image.height()
        {
            log::warn!("skin: sprite {name:?} exceeds atlas bounds, dropping");
            continue;
        }

        let rgba =
            image::imageops::crop_imm(&atlas.image, rect.x, rect.y, rect.width, rect.height)
                .to_image();

        entries.insert(
            name.clone(),
            SpriteEntry {
                width: rect.width,
                height: rect.height,
                rgba,
            },
        );
    }

    SymbolTable { entries }
}
