//! Game state and core simulation types
//!
//! [`GameState`] is the session aggregate: everything a tick reads or writes
//! lives here, and only [`super::tick::tick`] mutates it during play.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bird::Bird;
use super::pipes::PipePool;
use crate::settings::Settings;
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, nothing moves until the first flap
    Waiting,
    /// Active gameplay
    Running,
    /// Simulation frozen, resumable
    Paused,
    /// Simulation frozen while preferences are edited
    Settings,
    /// A life was lost; play resumes when the timer runs out
    RespawnCountdown { remaining: f32 },
    /// Run ended
    Over,
}

impl GamePhase {
    /// Whether the world is frozen in this phase
    pub fn is_frozen(&self) -> bool {
        matches!(self, GamePhase::Paused | GamePhase::Settings)
    }
}

/// Things that happened during a tick, drained by the audio/persistence
/// adapters after the frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    RunStarted,
    Flapped,
    Scored { score: u32 },
    NewHighScore { score: u32 },
    Hit,
    LifeLost { lives_left: u8 },
    Respawned,
    GameOver { score: u32, high_score: u32 },
    Paused,
    Resumed,
    SettingsOpened,
    /// Preferences may have changed and should be persisted
    SettingsClosed,
}

/// The complete game session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the session RNG was created from
    pub seed: u64,
    pub tuning: Tuning,
    pub settings: Settings,
    pub phase: GamePhase,
    pub score: u32,
    pub high_score: u32,
    /// The high score was beaten during this run
    pub new_best: bool,
    /// Remaining lives; `None` when playing one-hit rules
    pub lives: Option<u8>,
    /// Seconds accumulated toward the next pipe spawn
    pub spawn_timer: f32,
    /// Current screen shake amplitude (pixels)
    pub screen_shake: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub bird: Bird,
    pub pipes: PipePool,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// Create a session in the waiting phase
    pub fn new(seed: u64, tuning: Tuning, settings: Settings) -> Self {
        let tuning = tuning.sanitized();
        Self {
            seed,
            bird: Bird::new(&tuning),
            lives: tuning.lives,
            tuning,
            settings: settings.sanitized(),
            phase: GamePhase::Waiting,
            score: 0,
            high_score: 0,
            new_best: false,
            spawn_timer: 0.0,
            screen_shake: 0.0,
            time_ticks: 0,
            pipes: PipePool::new(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Session with default tuning and settings
    pub fn with_seed(seed: u64) -> Self {
        Self::new(seed, Tuning::default(), Settings::default())
    }

    /// Spawn one pipe with the session RNG
    pub fn spawn_pipe(&mut self) -> usize {
        self.pipes.spawn(&mut self.rng, &self.tuning)
    }

    /// Full reset for a new run: score, lives, bird and pipes.
    /// The high score survives.
    pub fn reset_run(&mut self) {
        self.score = 0;
        self.new_best = false;
        self.lives = self.tuning.lives;
        self.spawn_timer = 0.0;
        self.screen_shake = 0.0;
        self.bird = Bird::new(&self.tuning);
        self.pipes.clear_all();
    }

    /// Raise the high score if the current score beats it
    pub fn update_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let state = GameState::with_seed(42);
        assert_eq!(state.phase, GamePhase::Waiting);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, Some(3));
        assert!(state.pipes.is_empty());
        assert_eq!(state.bird.pos.y, state.tuning.world_height / 2.0);
    }

    #[test]
    fn test_reset_keeps_high_score() {
        let mut state = GameState::with_seed(1);
        state.score = 7;
        state.update_high_score();
        state.lives = Some(1);
        state.spawn_pipe();
        state.reset_run();

        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 7);
        assert_eq!(state.lives, Some(3));
        assert!(state.pipes.is_empty());
    }

    #[test]
    fn test_same_seed_same_pipes() {
        let mut a = GameState::with_seed(2024);
        let mut b = GameState::with_seed(2024);
        for _ in 0..10 {
            let i = a.spawn_pipe();
            let j = b.spawn_pipe();
            assert_eq!(a.pipes.get(i), b.pipes.get(j));
        }
    }

    #[test]
    fn test_drain_events() {
        let mut state = GameState::with_seed(3);
        state.push_event(GameEvent::Flapped);
        assert_eq!(state.drain_events(), vec![GameEvent::Flapped]);
        assert!(state.events.is_empty());
    }
}
