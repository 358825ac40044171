//! Pipe pairs and the fixed-capacity pipe pool
//!
//! Slots are reused in place: a pipe never changes index while it is active,
//! and spawning when every slot is busy overwrites the slot under the cursor.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::POOL_CAPACITY;
use crate::tuning::Tuning;

/// A top and bottom pipe sharing one x coordinate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pipe {
    pub top: Rect,
    pub bottom: Rect,
    /// Distance from the top of the world to the gap
    pub gap_y: f32,
    pub gap_size: f32,
    pub active: bool,
    /// Set once the bird has passed this pipe
    pub scored: bool,
}

impl Pipe {
    /// Build a pipe pair at `x` for a world of the given height
    pub fn new(x: f32, width: f32, gap_y: f32, gap_size: f32, world_height: f32) -> Self {
        let bottom_y = gap_y + gap_size;
        Self {
            top: Rect::new(x, 0.0, width, gap_y),
            bottom: Rect::new(x, bottom_y, width, world_height - bottom_y),
            gap_y,
            gap_size,
            active: true,
            scored: false,
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.top.x
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.top.w
    }

    /// Horizontal center, the line the bird must cross to score
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.top.center_x()
    }

    pub fn advance(&mut self, dx: f32) {
        self.top.x -= dx;
        self.bottom.x -= dx;
    }

    /// Fully scrolled past the left edge
    pub fn is_offscreen(&self) -> bool {
        self.top.right() < 0.0
    }

    /// True if `rect` overlaps either half
    pub fn collides(&self, rect: &Rect) -> bool {
        rect.intersects(&self.top) || rect.intersects(&self.bottom)
    }
}

/// Ring buffer of pipe slots with an insertion cursor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipePool {
    slots: [Pipe; POOL_CAPACITY],
    cursor: usize,
}

impl Default for PipePool {
    fn default() -> Self {
        Self::new()
    }
}

impl PipePool {
    pub fn new() -> Self {
        Self {
            slots: [Pipe::default(); POOL_CAPACITY],
            cursor: 0,
        }
    }

    /// Index the next claim starts searching from
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn slots_mut(&mut self) -> &mut [Pipe] {
        &mut self.slots
    }

    pub fn get(&self, index: usize) -> Option<&Pipe> {
        self.slots.get(index)
    }

    /// Active pipes with their slot index, in slot order
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &Pipe)> {
        self.slots.iter().enumerate().filter(|(_, p)| p.active)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|p| p.active).count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Spawn a pipe pair at the right edge with a random gap.
    ///
    /// Gap size is drawn from `[min_gap, max_gap]`, then the gap's top from
    /// `[gap_margin, world_height - gap_margin - gap_size]`, both as whole
    /// pixels. Returns the claimed slot.
    pub fn spawn<R: Rng>(&mut self, rng: &mut R, tuning: &Tuning) -> usize {
        let gap_size = rng.random_range(tuning.min_gap..=tuning.max_gap);
        let min_y = tuning.gap_margin;
        let max_y = (tuning.world_height as u32)
            .saturating_sub(tuning.gap_margin + gap_size)
            .max(min_y);
        let gap_y = rng.random_range(min_y..=max_y);

        self.spawn_with_gap(gap_y as f32, gap_size as f32, tuning)
    }

    /// Spawn a pipe pair at the right edge with an explicit gap
    pub fn spawn_with_gap(&mut self, gap_y: f32, gap_size: f32, tuning: &Tuning) -> usize {
        let index = self.claim_slot();
        self.slots[index] = Pipe::new(
            tuning.world_width,
            tuning.pipe_width,
            gap_y,
            gap_size,
            tuning.world_height,
        );
        log::debug!("Pipe spawned in slot {index}: gap_y={gap_y}, gap_size={gap_size}");
        index
    }

    /// Pick the slot for the next pipe and advance the cursor past it.
    ///
    /// First inactive slot at or after the cursor (wrapping); if all are
    /// active, the slot under the cursor is overwritten.
    fn claim_slot(&mut self) -> usize {
        let found = (0..POOL_CAPACITY)
            .map(|offset| (self.cursor + offset) % POOL_CAPACITY)
            .find(|&i| !self.slots[i].active);

        let index = match found {
            Some(i) => i,
            None => {
                log::debug!("Pipe pool full, recycling slot {}", self.cursor);
                self.cursor % POOL_CAPACITY
            }
        };

        self.cursor = (index + 1) % POOL_CAPACITY;
        index
    }

    /// Scroll every active pipe left and retire the ones that left the screen
    pub fn advance_and_retire(&mut self, dt: f32, speed: f32) {
        let dx = speed * dt;
        for pipe in self.slots.iter_mut().filter(|p| p.active) {
            pipe.advance(dx);
            if pipe.is_offscreen() {
                pipe.active = false;
            }
        }
    }

    /// Deactivate every slot
    pub fn clear_all(&mut self) {
        for pipe in &mut self.slots {
            pipe.active = false;
            pipe.scored = false;
        }
    }

    /// Deactivate active pipes overlapping the column `[left, right]`.
    /// Returns how many were removed.
    pub fn clear_column(&mut self, left: f32, right: f32) -> usize {
        let mut removed = 0;
        for pipe in self.slots.iter_mut().filter(|p| p.active) {
            if pipe.x() < right && pipe.top.right() > left {
                pipe.active = false;
                removed += 1;
            }
        }
        removed
    }
}
