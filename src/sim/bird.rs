//! The player-controlled bird
//!
//! The bird never moves horizontally; the world scrolls past it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Center of the bird
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (positive = falling)
    pub velocity: f32,
    /// Constant downward acceleration
    pub acceleration: f32,
    /// Sprite tilt in degrees (negative = nose up)
    pub tilt: f32,
}

impl Bird {
    /// A bird at the start position with zero velocity
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.bird_start_x, tuning.bird_start_y()),
            size: Vec2::new(tuning.bird_width, tuning.bird_height),
            velocity: 0.0,
            acceleration: tuning.gravity,
            tilt: 0.0,
        }
    }

    /// Advance one step under gravity.
    ///
    /// Only the top of the world is clamped here; leaving through the bottom
    /// is a hit and is detected by [`Bird::hit_world_bounds`].
    pub fn integrate(&mut self, dt: f32, tuning: &Tuning) {
        self.velocity += self.acceleration * dt;
        self.velocity = self.velocity.min(tuning.max_fall_speed);

        self.pos.y += self.velocity * dt;

        self.tilt = (self.velocity * tuning.tilt_per_velocity)
            .clamp(-tuning.max_tilt, tuning.max_tilt);

        let half_h = self.size.y * 0.5;
        if self.pos.y - half_h < 0.0 {
            self.pos.y = half_h;
            // No energy gained from clipping into the ceiling
            self.velocity = 0.0;
        }
    }

    /// Replace the vertical velocity with the flap impulse
    pub fn flap(&mut self, tuning: &Tuning) {
        self.velocity = tuning.flap_impulse;
        self.tilt = -tuning.max_tilt;
    }

    /// True when the bird touches the floor or the ceiling
    pub fn hit_world_bounds(&self, world_height: f32) -> bool {
        let b = self.bounds();
        b.bottom() >= world_height || b.y <= 0.0
    }

    pub fn bounds(&self) -> Rect {
        Rect::centered(self.pos, self.size)
    }
}
