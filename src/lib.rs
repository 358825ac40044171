//! Flappy core - a side-scrolling arcade game simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bird physics, pipe pool, collisions, game phases)
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences (volumes, screen shake)
//! - `persistence`: Settings storage with a versioned envelope
//! - `assets`: Opaque texture/font/sound handles supplied by the platform
//! - `audio`: Event-driven sound cue dispatch
//! - `renderer`: Frame layout (draw commands) for an external renderer
//! - `platform`: Input events and frame timing

pub mod assets;
pub mod audio;
pub mod error;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::StoreError;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep used by the frame clock (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame time fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Bird defaults
    pub const BIRD_START_X: f32 = 100.0;
    pub const BIRD_WIDTH: f32 = 27.0;
    pub const BIRD_HEIGHT: f32 = 20.0;
    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 420.0;
    /// Velocity set by a flap (negative = up)
    pub const FLAP_IMPULSE: f32 = -260.0;
    /// Terminal fall speed
    pub const MAX_FALL_SPEED: f32 = 350.0;
    /// Tilt in degrees per unit of vertical velocity
    pub const TILT_PER_VELOCITY: f32 = 0.06;
    /// Nose-up / nose-down tilt limit (degrees)
    pub const MAX_TILT: f32 = 30.0;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 80.0;
    pub const PIPE_SPEED: f32 = 160.0;
    /// Seconds between pipe spawns
    pub const PIPE_SPAWN_INTERVAL: f32 = 2.0;
    pub const MIN_GAP_SIZE: u32 = 135;
    pub const MAX_GAP_SIZE: u32 = 185;
    /// Closest a gap may come to the top or bottom of the world
    pub const GAP_MARGIN: u32 = 60;
    /// Pipe pool capacity
    pub const POOL_CAPACITY: usize = 16;

    /// Lives at the start of a run
    pub const START_LIVES: u8 = 3;
    /// Delay before play resumes after losing a life (seconds)
    pub const RESPAWN_DELAY: f32 = 3.0;

    /// Screen shake applied on a hit (pixels)
    pub const SHAKE_INTENSITY: f32 = 8.0;
    /// Per-tick multiplicative shake decay
    pub const SHAKE_DECAY: f32 = 0.9;

    /// Volume change per second while a volume key is held
    pub const VOLUME_RATE: f32 = 0.5;
}
