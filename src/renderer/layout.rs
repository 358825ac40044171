//! Frame layout
//!
//! Turns a [`GameState`] into draw commands. Missing textures fall back to
//! flat rectangles and a missing font to the backend's built-in one, so every
//! frame is complete regardless of what loaded.

use glam::Vec2;

use super::{Color, DrawCommand, Frame, TextMeasure, colors};
use crate::assets::{Assets, PipeSprite};
use crate::sim::{GamePhase, GameState, Pipe, Rect};

const HUD_MARGIN: f32 = 20.0;
const SCORE_SIZE: f32 = 32.0;
const BEST_SIZE: f32 = 24.0;
const TITLE_SIZE: f32 = 48.0;
const HINT_SIZE: f32 = 20.0;
const COUNTDOWN_SIZE: f32 = 96.0;

/// Build the draw list for the current state
pub fn build_frame(state: &GameState, assets: &Assets, measure: &dyn TextMeasure) -> Frame {
    let mut frame = Frame {
        commands: Vec::with_capacity(64),
        shake_offset: shake_offset(state),
    };
    let offset = frame.shake_offset;

    frame.push(DrawCommand::Clear { color: colors::SKY });

    if let Some(bg) = assets.background {
        frame.push(DrawCommand::Sprite {
            texture: bg.id,
            src: bg.full(),
            dst: bg.full().translated(offset),
            rotation: 0.0,
        });
    }

    for (_, pipe) in state.pipes.iter_active() {
        match &assets.pipe {
            Some(sprite) => push_pipe_sprites(&mut frame, pipe, sprite, offset),
            None => {
                for rect in [pipe.top, pipe.bottom] {
                    frame.push(DrawCommand::FillRect {
                        rect: rect.translated(offset),
                        color: colors::PIPE,
                    });
                }
            }
        }
    }

    let bird = state.bird.bounds().translated(offset);
    match assets.bird {
        Some(tex) => frame.push(DrawCommand::Sprite {
            texture: tex.id,
            src: tex.full(),
            dst: bird,
            rotation: state.bird.tilt,
        }),
        None => frame.push(DrawCommand::FillRect {
            rect: bird,
            color: colors::BIRD,
        }),
    }

    let mut ui = Ui {
        frame: &mut frame,
        assets,
        measure,
        width: state.tuning.world_width,
        height: state.tuning.world_height,
    };
    ui.hud(state);
    ui.overlay(state);

    frame
}

/// Body then cap for each half; the caps face the gap
fn push_pipe_sprites(frame: &mut Frame, pipe: &Pipe, sprite: &PipeSprite, offset: Vec2) {
    let cap = sprite.cap_height;
    let (cap_src, body_src) = (sprite.cap_region(), sprite.body_region());
    let texture = sprite.texture.id;
    let w = pipe.width();

    let top = pipe.top;
    let top_body = (top.h - cap).max(0.0);
    let bottom = pipe.bottom;
    let bottom_body = (bottom.h - cap).max(0.0);

    let parts = [
        (body_src, Rect::new(top.x, top.y, w, top_body)),
        (cap_src, Rect::new(top.x, top.y + top_body, w, cap)),
        (body_src, Rect::new(bottom.x, bottom.y + cap, w, bottom_body)),
        (cap_src, Rect::new(bottom.x, bottom.y, w, cap)),
    ];
    for (src, dst) in parts {
        frame.push(DrawCommand::Sprite {
            texture,
            src,
            dst: dst.translated(offset),
            rotation: 0.0,
        });
    }
}

/// Pseudo-random jitter from the tick counter, zero when shake is off
fn shake_offset(state: &GameState) -> Vec2 {
    if !state.settings.screen_shake || state.screen_shake <= 0.0 {
        return Vec2::ZERO;
    }
    let hash = (state.time_ticks as u32).wrapping_mul(2654435761);
    let rx = (hash % 1000) as f32 / 500.0 - 1.0;
    let ry = ((hash >> 10) % 1000) as f32 / 500.0 - 1.0;
    Vec2::new(rx, ry) * state.screen_shake
}

struct Ui<'a> {
    frame: &'a mut Frame,
    assets: &'a Assets,
    measure: &'a dyn TextMeasure,
    width: f32,
    height: f32,
}

impl Ui<'_> {
    fn text(&mut self, text: impl Into<String>, x: f32, y: f32, size: f32, color: Color) {
        self.frame.push(DrawCommand::Text {
            text: text.into(),
            x,
            y,
            size,
            color,
            font: self.assets.font,
        });
    }

    /// Horizontally centered line
    fn centered(&mut self, text: &str, y: f32, size: f32, color: Color) {
        let w = self.measure.measure_text(text, size, self.assets.font);
        self.text(text, self.width / 2.0 - w / 2.0, y, size, color);
    }

    fn shade(&mut self) {
        self.frame.push(DrawCommand::FillRect {
            rect: Rect::new(0.0, 0.0, self.width, self.height),
            color: colors::SHADE,
        });
    }

    fn hud(&mut self, state: &GameState) {
        let y = HUD_MARGIN;
        self.text(
            format!("SCORE: {}", state.score),
            HUD_MARGIN,
            y,
            SCORE_SIZE,
            colors::BLACK,
        );
        self.text(
            format!("BEST: {}", state.high_score),
            HUD_MARGIN,
            y + 40.0,
            BEST_SIZE,
            colors::DARK_GRAY,
        );
        if let Some(lives) = state.lives {
            self.text(
                format!("LIVES: {lives}"),
                HUD_MARGIN,
                y + 70.0,
                BEST_SIZE,
                colors::DARK_GRAY,
            );
        }
    }

    fn overlay(&mut self, state: &GameState) {
        let mid = self.height / 2.0;
        match state.phase {
            GamePhase::Running => {}
            GamePhase::Waiting => {
                self.centered("Press SPACE or click to flap", mid + 60.0, HINT_SIZE, colors::BLACK);
                self.centered("ESC for settings", mid + 90.0, HINT_SIZE, colors::DARK_GRAY);
            }
            GamePhase::Paused => {
                self.shade();
                self.centered("PAUSED", mid - 40.0, TITLE_SIZE, colors::WHITE);
                self.centered("P to resume, ESC for settings", mid + 20.0, HINT_SIZE, colors::WHITE);
            }
            GamePhase::Settings => {
                let s = state.settings;
                self.shade();
                self.centered("SETTINGS", mid - 120.0, TITLE_SIZE, colors::WHITE);
                self.centered(
                    &format!("Music: {:.0}%", s.music_volume * 100.0),
                    mid - 40.0,
                    HINT_SIZE,
                    colors::WHITE,
                );
                self.centered(
                    &format!("SFX: {:.0}%", s.sfx_volume * 100.0),
                    mid - 10.0,
                    HINT_SIZE,
                    colors::WHITE,
                );
                let shake = if s.screen_shake { "ON" } else { "OFF" };
                self.centered(
                    &format!("Screen shake: {shake}"),
                    mid + 20.0,
                    HINT_SIZE,
                    colors::WHITE,
                );
                self.centered(
                    "UP/DOWN volume, S shake, ENTER to save",
                    mid + 80.0,
                    HINT_SIZE,
                    colors::WHITE,
                );
            }
            GamePhase::RespawnCountdown { remaining } => {
                let secs = remaining.ceil().max(1.0) as u32;
                self.centered(&secs.to_string(), mid - 60.0, COUNTDOWN_SIZE, colors::WHITE);
            }
            GamePhase::Over => {
                self.shade();
                self.centered("GAME OVER", mid - 40.0, TITLE_SIZE, colors::WHITE);
                if state.new_best {
                    self.centered("NEW BEST!", mid - 90.0, BEST_SIZE, colors::GOLD);
                }
                self.centered(
                    "Press SPACE or Left Click to restart",
                    mid + 20.0,
                    HINT_SIZE,
                    colors::WHITE,
                );
            }
        }
    }
}
