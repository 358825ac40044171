//! Simulation tick
//!
//! One call advances the session by one frame. Each phase has its own
//! handler; the `match` in [`tick`] is the whole state machine.

use std::cmp::Ordering;

use super::bird::Bird;
use super::collision::{award_passes, first_collision};
use super::state::{GameEvent, GamePhase, GameState};

/// Input for a single tick. Every flag is edge-triggered except the volume
/// keys, which are "held".
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Flap (space/click/tap); also starts and restarts a run
    pub flap: bool,
    /// Pause toggle
    pub pause: bool,
    /// Menu/back
    pub menu: bool,
    /// Confirm in menus, restart on the game over screen
    pub confirm: bool,
    /// Volume up held
    pub volume_up: bool,
    /// Volume down held
    pub volume_down: bool,
    /// Toggle screen shake (settings screen)
    pub toggle_shake: bool,
    /// Idle/demo mode - the autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let input = if input.idle_mode {
        autopilot(state, input)
    } else {
        input.clone()
    };
    let input = &input;

    state.time_ticks += 1;

    if !state.phase.is_frozen() {
        decay_screen_shake(state);
    }

    match state.phase {
        GamePhase::Waiting => tick_waiting(state, input),
        GamePhase::Running => tick_running(state, input, dt),
        GamePhase::Paused => tick_paused(state, input),
        GamePhase::Settings => tick_settings(state, input, dt),
        GamePhase::RespawnCountdown { remaining } => tick_respawn(state, remaining, dt),
        GamePhase::Over => tick_over(state, input),
    }
}

fn tick_waiting(state: &mut GameState, input: &TickInput) {
    if input.flap {
        start_run(state);
    } else if input.pause || input.menu {
        open_settings(state);
    }
}

fn tick_running(state: &mut GameState, input: &TickInput, dt: f32) {
    // (a) pause skips the rest of the tick
    if input.pause {
        state.phase = GamePhase::Paused;
        state.push_event(GameEvent::Paused);
        log::info!("Paused at score {}", state.score);
        return;
    }

    // (b) flap
    if input.flap {
        state.bird.flap(&state.tuning);
        state.push_event(GameEvent::Flapped);
    }

    // (c) physics
    state.bird.integrate(dt, &state.tuning);

    // (d) floor and ceiling
    if state.bird.hit_world_bounds(state.tuning.world_height) {
        handle_hit(state);
        return;
    }

    // (e) pipes: scroll, retire, collide, score
    state.pipes.advance_and_retire(dt, state.tuning.pipe_speed);

    let bird_box = state.bird.bounds();
    if let Some(slot) = first_collision(&bird_box, &state.pipes) {
        log::debug!("Bird hit pipe in slot {slot}");
        handle_hit(state);
        return;
    }

    let passed = award_passes(&mut state.pipes, state.bird.pos.x);
    for _ in 0..passed {
        state.score += 1;
        state.push_event(GameEvent::Scored { score: state.score });
        if state.update_high_score() && !state.new_best {
            state.new_best = true;
            state.push_event(GameEvent::NewHighScore { score: state.score });
        }
    }

    // (f) spawn timer; overflow carries into the next interval
    state.spawn_timer += dt;
    if state.spawn_timer >= state.tuning.spawn_interval {
        state.spawn_timer -= state.tuning.spawn_interval;
        state.spawn_pipe();
    }
}

fn tick_paused(state: &mut GameState, input: &TickInput) {
    if input.pause {
        state.phase = GamePhase::Running;
        state.push_event(GameEvent::Resumed);
        log::info!("Resumed");
    } else if input.menu {
        open_settings(state);
    }
}

fn tick_settings(state: &mut GameState, input: &TickInput, dt: f32) {
    let step = state.tuning.volume_rate * dt;
    if input.volume_up {
        state.settings.adjust_volume(step);
    }
    if input.volume_down {
        state.settings.adjust_volume(-step);
    }
    if input.toggle_shake {
        state.settings.toggle_screen_shake();
    }

    if input.confirm || input.menu {
        state.reset_run();
        state.phase = GamePhase::Waiting;
        state.push_event(GameEvent::SettingsClosed);
        log::info!(
            "Settings closed: music={:.2} sfx={:.2} shake={}",
            state.settings.music_volume,
            state.settings.sfx_volume,
            state.settings.screen_shake
        );
    }
}

/// Counts down without accepting input
fn tick_respawn(state: &mut GameState, remaining: f32, dt: f32) {
    let remaining = remaining - dt;
    if remaining > 0.0 {
        state.phase = GamePhase::RespawnCountdown { remaining };
        return;
    }

    if state.pipes.is_empty() {
        state.spawn_pipe();
    }
    state.phase = GamePhase::Running;
    state.push_event(GameEvent::Respawned);
    log::info!("Respawned with {:?} lives", state.lives);
}

fn tick_over(state: &mut GameState, input: &TickInput) {
    if input.flap || input.confirm {
        start_run(state);
    } else if input.menu {
        state.reset_run();
        state.phase = GamePhase::Waiting;
    }
}

/// Fresh run with one pipe already on its way and an opening flap
fn start_run(state: &mut GameState) {
    state.reset_run();
    state.spawn_pipe();
    state.phase = GamePhase::Running;
    state.bird.flap(&state.tuning);
    state.push_event(GameEvent::RunStarted);
    state.push_event(GameEvent::Flapped);
    log::info!("Run started (high score {})", state.high_score);
}

fn open_settings(state: &mut GameState) {
    state.phase = GamePhase::Settings;
    state.push_event(GameEvent::SettingsOpened);
}

/// Floor, ceiling or pipe contact. Costs a life when lives are in play,
/// otherwise ends the run.
fn handle_hit(state: &mut GameState) {
    if state.update_high_score() && !state.new_best {
        state.new_best = true;
        state.push_event(GameEvent::NewHighScore { score: state.score });
    }
    state.push_event(GameEvent::Hit);
    state.screen_shake = state.tuning.shake_intensity;

    match state.lives {
        Some(lives) if lives > 1 => {
            let lives_left = lives - 1;
            state.lives = Some(lives_left);
            state.push_event(GameEvent::LifeLost { lives_left });

            state.bird = Bird::new(&state.tuning);
            if state.tuning.clear_pipes_on_respawn {
                state.pipes.clear_all();
            } else {
                // Kept pipes must not sit on the respawn point
                let half_w = state.bird.size.x * 0.5;
                let x = state.bird.pos.x;
                let removed = state.pipes.clear_column(x - half_w, x + half_w);
                log::debug!("Cleared {removed} pipes from the respawn column");
            }
            state.spawn_timer = 0.0;
            state.phase = GamePhase::RespawnCountdown {
                remaining: state.tuning.respawn_delay,
            };
            log::info!("Life lost, {lives_left} left");
        }
        lives => {
            if lives.is_some() {
                state.lives = Some(0);
                state.push_event(GameEvent::LifeLost { lives_left: 0 });
            }
            state.phase = GamePhase::Over;
            state.push_event(GameEvent::GameOver {
                score: state.score,
                high_score: state.high_score,
            });
            log::info!(
                "Game over: score {} (high score {})",
                state.score,
                state.high_score
            );
        }
    }
}

fn decay_screen_shake(state: &mut GameState) {
    state.screen_shake *= state.tuning.shake_decay;
    if state.screen_shake < 0.01 {
        state.screen_shake = 0.0;
    }
}

/// Synthesize input for idle/demo mode.
///
/// Starts and restarts runs by itself, and while running flaps whenever the
/// bird is falling below a line just under the middle of the next gap.
fn autopilot(state: &GameState, input: &TickInput) -> TickInput {
    let mut input = input.clone();
    match state.phase {
        GamePhase::Waiting | GamePhase::Over => input.flap = true,
        GamePhase::Running => {
            let bird = &state.bird;
            let bird_left = bird.bounds().x;
            let target = state
                .pipes
                .iter_active()
                .map(|(_, p)| p)
                .filter(|p| p.x() + p.width() > bird_left)
                .min_by(|a, b| a.x().partial_cmp(&b.x()).unwrap_or(Ordering::Equal))
                .map(|p| p.gap_y + p.gap_size * 0.65)
                .unwrap_or(state.tuning.world_height * 0.5);
            input.flap = bird.pos.y > target && bird.velocity >= 0.0;
        }
        _ => {}
    }
    input
}
