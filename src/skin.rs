// src/skin.rs

use egui::{ColorImage, Context, TextureHandle, TextureOptions};
use once_cell::sync::Lazy;
use thiserror::Error;

use crate::constants::{GROOVE_HEIGHT, GROOVE_WIDTH, KNOB_MARGIN, KNOB_WIDTH};

#[derive(Error, Debug)]
pub enum SkinError {
    #[error("Failed to decode skin image: {0}")]
    Decode(String),
}

/// One named piece of the switch artwork together with its layout geometry.
#[derive(Clone, Copy, Debug)]
pub struct StyleFragment {
    pub name: &'static str,
    pub bytes: &'static [u8],
    /// Painted width in points.
    pub width: f32,
    /// Painted height in points.
    pub height: f32,
    /// Gap kept between this fragment and the groove edge.
    pub margin: f32,
}

/// The sliding handle.
pub const KNOB_FRAGMENT: StyleFragment = StyleFragment {
    name: "knob",
    bytes: include_bytes!("../assets/knob.png"),
    width: KNOB_WIDTH,
    height: GROOVE_HEIGHT - 2.0 * KNOB_MARGIN,
    margin: KNOB_MARGIN,
};

/// The track painted while the switch is off.
pub const GROOVE_OFF_FRAGMENT: StyleFragment = StyleFragment {
    name: "off",
    bytes: include_bytes!("../assets/off.png"),
    width: GROOVE_WIDTH,
    height: GROOVE_HEIGHT,
    margin: 0.0,
};

/// The track painted while the switch is on.
pub const GROOVE_ON_FRAGMENT: StyleFragment = StyleFragment {
    name: "on",
    bytes: include_bytes!("../assets/on.png"),
    width: GROOVE_WIDTH,
    height: GROOVE_HEIGHT,
    margin: 0.0,
};

/// Which artwork pair the switch currently wears. Either way the knob is the
/// same; only the groove changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwitchStyle {
    #[default]
    Off,
    On,
}

impl SwitchStyle {
    pub fn groove(self) -> &'static StyleFragment {
        match self {
            SwitchStyle::Off => &GROOVE_OFF_FRAGMENT,
            SwitchStyle::On => &GROOVE_ON_FRAGMENT,
        }
    }

    pub fn knob(self) -> &'static StyleFragment {
        &KNOB_FRAGMENT
    }
}

pub(crate) struct DecodedSkin {
    pub knob: ColorImage,
    pub off: ColorImage,
    pub on: ColorImage,
}

/// Uploaded copies of the skin images, ready to paint.
#[derive(Clone)]
pub struct SkinTextures {
    pub knob: TextureHandle,
    pub off: TextureHandle,
    pub on: TextureHandle,
}

fn decode(fragment: &StyleFragment) -> Result<ColorImage, SkinError> {
    let decoded = image::load_from_memory(fragment.bytes)
        .map_err(|err| SkinError::Decode(format!("{}: {}", fragment.name, err)))?;
    let rgba = decoded.to_rgba8();
    let [w, h] = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied([w, h], rgba.as_raw()))
}

pub(crate) fn decode_skin() -> Result<DecodedSkin, SkinError> {
    Ok(DecodedSkin {
        knob: decode(&KNOB_FRAGMENT)?,
        off: decode(&GROOVE_OFF_FRAGMENT)?,
        on: decode(&GROOVE_ON_FRAGMENT)?,
    })
}

// Decoded once per process; a broken asset downgrades every switch to the
// painted fallback rather than failing.
static DECODED: Lazy<Option<DecodedSkin>> = Lazy::new(|| match decode_skin() {
    Ok(skin) => Some(skin),
    Err(err) => {
        tracing::warn!("Switch skin unavailable, using painted fallback: {:?}", err);
        None
    }
});

/// Uploads the skin images to the texture store. Returns `None` when the
/// embedded assets failed to decode; callers then paint the fallback look.
pub fn load_textures(ctx: &Context) -> Option<SkinTextures> {
    let decoded = DECODED.as_ref()?;
    Some(SkinTextures {
        knob: ctx.load_texture(
            "switch_knob",
            decoded.knob.clone(),
            TextureOptions::LINEAR,
        ),
        off: ctx.load_texture("switch_off", decoded.off.clone(), TextureOptions::LINEAR),
        on: ctx.load_texture("switch_on", decoded.on.clone(), TextureOptions::LINEAR),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_geometry() {
        assert_eq!(KNOB_FRAGMENT.width, 32.0);
        assert_eq!(KNOB_FRAGMENT.margin, 2.0);
        assert_eq!(GROOVE_OFF_FRAGMENT.height, 35.0);
        assert_eq!(GROOVE_ON_FRAGMENT.height, 35.0);
    }

    #[test]
    fn test_style_composition() {
        assert_eq!(SwitchStyle::Off.groove().name, "off");
        assert_eq!(SwitchStyle::On.groove().name, "on");
        // Both compositions share the one knob.
        assert_eq!(SwitchStyle::Off.knob().name, "knob");
        assert_eq!(SwitchStyle::On.knob().name, "knob");
    }

    #[test]
    fn test_embedded_assets_decode() {
        let skin = decode_skin().unwrap();
        assert_eq!(skin.knob.size, [32, 31]);
        assert_eq!(skin.off.size, [70, 35]);
        assert_eq!(skin.on.size, [70, 35]);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let bogus = StyleFragment {
            name: "bogus",
            bytes: &[0x00, 0x01, 0x02, 0x03],
            width: 1.0,
            height: 1.0,
            margin: 0.0,
        };
        assert!(decode(&bogus).is_err());
    }
}
