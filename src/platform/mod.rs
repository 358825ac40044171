//! Platform abstraction layer
//!
//! Handles the device side of the loop:
//! - Input events, independent of key/button bindings
//! - Frame time, split into simulation steps

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::sim::TickInput;

/// Logical inputs the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    Flap,
    Pause,
    Menu,
    Confirm,
    VolumeUp,
    VolumeDown,
    ToggleShake,
}

/// Collects events between simulation steps.
///
/// Pressed events are one-shot: they are delivered to the next step only.
/// Volume keys are levels and stay set until released.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: TickInput,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, event: InputEvent) {
        let p = &mut self.pending;
        match event {
            InputEvent::Flap => p.flap = true,
            InputEvent::Pause => p.pause = true,
            InputEvent::Menu => p.menu = true,
            InputEvent::Confirm => p.confirm = true,
            InputEvent::VolumeUp => p.volume_up = true,
            InputEvent::VolumeDown => p.volume_down = true,
            InputEvent::ToggleShake => p.toggle_shake = true,
        }
    }

    /// Key release; only matters for held inputs
    pub fn release(&mut self, event: InputEvent) {
        match event {
            InputEvent::VolumeUp => self.pending.volume_up = false,
            InputEvent::VolumeDown => self.pending.volume_down = false,
            _ => {}
        }
    }

    /// Demo mode on or off
    pub fn set_idle_mode(&mut self, idle: bool) {
        self.pending.idle_mode = idle;
    }

    /// Input for the next step; clears one-shot inputs after reading
    pub fn take(&mut self) -> TickInput {
        let input = self.pending.clone();
        self.pending.flap = false;
        self.pending.pause = false;
        self.pending.menu = false;
        self.pending.confirm = false;
        self.pending.toggle_shake = false;
        input
    }
}

/// Fixed-timestep accumulator.
///
/// Frame time is clamped so a long stall (debugger, window drag) cannot
/// trigger a burst of catch-up steps.
#[derive(Debug, Clone)]
pub struct FrameClock {
    accumulator: f32,
    step: f32,
    max_substeps: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FrameClock {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            accumulator: 0.0,
            step,
            max_substeps,
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Add a frame's elapsed time and return how many steps to simulate
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_substeps {
            self.accumulator -= self.step;
            steps += 1;
        }
        if steps == self.max_substeps {
            // Drop what could not be simulated this frame
            self.accumulator = self.accumulator.min(self.step);
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presses_are_one_shot() {
        let mut queue = InputQueue::new();
        queue.press(InputEvent::Flap);
        queue.press(InputEvent::ToggleShake);
        let first = queue.take();
        assert!(first.flap && first.toggle_shake);
        let second = queue.take();
        assert!(!second.flap && !second.toggle_shake);
    }

    #[test]
    fn test_volume_keys_are_held() {
        let mut queue = InputQueue::new();
        queue.press(InputEvent::VolumeUp);
        assert!(queue.take().volume_up);
        assert!(queue.take().volume_up);
        queue.release(InputEvent::VolumeUp);
        assert!(!queue.take().volume_up);
    }

    #[test]
    fn test_clock_steps() {
        let mut clock = FrameClock::new(0.01, 8);
        assert_eq!(clock.advance(0.025), 2);
        assert_eq!(clock.advance(0.006), 1);
    }

    #[test]
    fn test_clock_clamps_long_frames() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.advance(5.0), MAX_SUBSTEPS);
        // The kept remainder is exactly one step; negative time adds nothing
        assert_eq!(clock.advance(-1.0), 1);
        assert_eq!(clock.advance(0.0), 0);
    }
}
