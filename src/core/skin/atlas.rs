//! core/skin/atlas.rs
//! Disk loader for sprite atlases.
//!
//! A skin directory holds `atlas.json` (the sprite map sidecar, camelCase —
//! the same serialized form the skin converter emits) next to the packed
//! image it references:
//!
//! ```json
//! {
//!   "meta": { "cbuttons-play": { "x": 0, "y": 0, "width": 23, "height": 18 } },
//!   "image": "atlas.png",
//!   "width": 512,
//!   "height": 256
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::{SkinError, SpriteAtlas, SpriteRect};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AtlasSidecar {
    meta: BTreeMap<String, SpriteRect>,
    image: String,
    width: u32,
    height: u32,
}

/// Load an atlas from a skin directory. This is the only place the skin
/// engine touches the filesystem.
pub fn load_atlas(dir: &Path) -> Result<SpriteAtlas, SkinError> {
    let sidecar_path = dir.join("atlas.json");
    let sidecar: AtlasSidecar = serde_json::from_str(&std::fs::read_to_string(&sidecar_path)?)?;

    let image_path = dir.join(&sidecar.image);
    if !image_path.is_file() {
        return Err(SkinError::MissingImage(image_path.display().to_string()));
    }

    let image = image::open(&image_path)?.to_rgba8();

    if image.width() != sidecar.width || image.height() != sidecar.height {
        log::warn!(
            "skin: atlas image is {}x{}, sidecar says {}x{}",
            image.width(),
            image.height(),
            sidecar.width,
            sidecar.height
        );
    }

    Ok(SpriteAtlas {
        image,
        rects: sidecar.meta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidecar_parses_camel_case_meta() {
        let sidecar: AtlasSidecar = serde_json::from_str(
            r#"{
                "meta": { "posbar-thumb": { "x": 1, "y": 2, "width": 29, "height": 10 } },
                "image": "atlas.png",
                "width": 512,
                "height": 256
            }"#,
        )
        .unwrap();

        assert_eq!(sidecar.image, "atlas.png");
        let rect = sidecar.meta["posbar-thumb"];
        assert_eq!((rect.x, rect.y, rect.width, rect.height), (1, 2, 29, 10));
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let err = load_atlas(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, SkinError::Io(_)));
    }
}
