//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, passed explicitly
//! - Stable iteration order (by pool slot)
//! - No rendering, audio or platform dependencies

pub mod bird;
pub mod collision;
pub mod pipes;
pub mod rect;
pub mod state;
pub mod tick;

pub use bird::Bird;
pub use collision::{award_passes, first_collision};
pub use pipes::{Pipe, PipePool};
pub use rect::Rect;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
