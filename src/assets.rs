//! Asset handles
//!
//! The platform loads textures, sounds and fonts and hands the core opaque
//! ids. A handle that failed to load is simply `None`; every consumer has a
//! degraded path for it.

use crate::sim::Rect;

/// Opaque texture id issued by the renderer backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Opaque font id issued by the renderer backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(pub u32);

/// Opaque sound id issued by the audio backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundId(pub u32);

/// A loaded texture and its pixel size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Texture {
    pub id: TextureId,
    pub width: f32,
    pub height: f32,
}

impl Texture {
    pub fn new(id: u32, width: f32, height: f32) -> Self {
        Self {
            id: TextureId(id),
            width,
            height,
        }
    }

    /// The whole texture as a source region
    pub fn full(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Pipe sprite: the cap sits at the top of the texture, the rest is body
/// that gets stretched to any length
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeSprite {
    pub texture: Texture,
    pub cap_height: f32,
}

impl PipeSprite {
    /// Default cap height for the stock 80x217 pipe sprite
    pub const CAP_HEIGHT: f32 = 24.0;

    pub fn new(texture: Texture) -> Self {
        Self {
            texture,
            cap_height: Self::CAP_HEIGHT.min(texture.height),
        }
    }

    pub fn cap_region(&self) -> Rect {
        Rect::new(0.0, 0.0, self.texture.width, self.cap_height)
    }

    pub fn body_region(&self) -> Rect {
        Rect::new(
            0.0,
            self.cap_height,
            self.texture.width,
            self.texture.height - self.cap_height,
        )
    }
}

/// Everything the game draws and plays
#[derive(Debug, Clone, Default)]
pub struct Assets {
    pub bird: Option<Texture>,
    pub pipe: Option<PipeSprite>,
    pub background: Option<Texture>,
    pub font: Option<FontId>,
    pub sounds: SoundBank,
}

impl Assets {
    /// Log which assets are missing so degraded output is explainable
    pub fn report_missing(&self) {
        let missing: Vec<&str> = [
            ("bird", self.bird.is_none()),
            ("pipe", self.pipe.is_none()),
            ("background", self.background.is_none()),
            ("font", self.font.is_none()),
            ("flap sound", self.sounds.flap.is_none()),
            ("score sound", self.sounds.score.is_none()),
            ("hit sound", self.sounds.hit.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, gone)| gone.then_some(name))
        .collect();

        if !missing.is_empty() {
            log::warn!("Missing assets, using fallbacks: {}", missing.join(", "));
        }
    }
}

/// The three sound cues
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SoundBank {
    pub flap: Option<SoundId>,
    pub score: Option<SoundId>,
    pub hit: Option<SoundId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipe_regions() {
        let sprite = PipeSprite::new(Texture::new(2, 80.0, 217.0));
        assert_eq!(sprite.cap_region(), Rect::new(0.0, 0.0, 80.0, 24.0));
        assert_eq!(sprite.body_region(), Rect::new(0.0, 24.0, 80.0, 193.0));
    }

    #[test]
    fn test_tiny_pipe_texture_is_all_cap() {
        let sprite = PipeSprite::new(Texture::new(2, 80.0, 10.0));
        assert_eq!(sprite.cap_height, 10.0);
        assert_eq!(sprite.body_region().h, 0.0);
    }
}
