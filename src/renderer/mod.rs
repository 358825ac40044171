//! Rendering interface
//!
//! The core never touches pixels. Each frame it builds a [`Frame`], a flat
//! list of draw commands in screen space, and hands it to a [`Renderer`].

pub mod layout;

pub use layout::build_frame;

use glam::Vec2;

use crate::assets::{FontId, TextureId};
use crate::sim::Rect;

/// RGBA, 0.0 - 1.0
pub type Color = [f32; 4];

pub mod colors {
    use super::Color;

    pub const SKY: Color = [0.44, 0.77, 0.81, 1.0];
    pub const PIPE: Color = [0.33, 0.69, 0.18, 1.0];
    pub const BIRD: Color = [0.98, 0.80, 0.18, 1.0];
    pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
    pub const DARK_GRAY: Color = [0.31, 0.31, 0.31, 1.0];
    pub const WHITE: Color = [0.96, 0.96, 0.96, 1.0];
    pub const GOLD: Color = [1.0, 0.80, 0.0, 1.0];
    /// Translucent black behind menus and the game over screen
    pub const SHADE: Color = [0.0, 0.0, 0.0, 0.5];
}

/// One drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        color: Color,
    },
    /// Draw `src` of a texture stretched into `dst`, rotated by `rotation`
    /// degrees around the center of `dst`
    Sprite {
        texture: TextureId,
        src: Rect,
        dst: Rect,
        rotation: f32,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    /// `font: None` means the backend's built-in font
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
        font: Option<FontId>,
    },
}

/// Everything to draw for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
    /// Camera shake applied to world-space commands
    pub shake_offset: Vec2,
}

impl Frame {
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// All text drawn this frame, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Text width lookup. Layout needs it to center strings.
pub trait TextMeasure {
    fn measure_text(&self, text: &str, size: f32, font: Option<FontId>) -> f32;
}

/// Width per glyph, relative to font size, for the built-in font
pub const FALLBACK_GLYPH_ADVANCE: f32 = 0.55;

/// Width estimate used when no font metrics are available
pub fn fallback_text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * FALLBACK_GLYPH_ADVANCE
}

/// Measures every font with the fallback estimate
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackMeasure;

impl TextMeasure for FallbackMeasure {
    fn measure_text(&self, text: &str, size: f32, _font: Option<FontId>) -> f32 {
        fallback_text_width(text, size)
    }
}

/// A frame presentation backend
pub trait Renderer: TextMeasure {
    fn present(&mut self, frame: &Frame);
}

/// Renderer that keeps the last frame, for headless runs and tests
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    pub frames_presented: u64,
    pub last_frame: Frame,
}

impl TextMeasure for HeadlessRenderer {
    fn measure_text(&self, text: &str, size: f32, _font: Option<FontId>) -> f32 {
        fallback_text_width(text, size)
    }
}

impl Renderer for HeadlessRenderer {
    fn present(&mut self, frame: &Frame) {
        self.frames_presented += 1;
        self.last_frame = frame.clone();
        log::trace!(
            "frame {}: {} commands",
            self.frames_presented,
            frame.commands.len()
        );
    }
}
