//! Flappy entry point
//!
//! Native builds run the game headless: the autopilot plays through the
//! frame clock, drained events drive audio and persistence, and every frame
//! is laid out and handed to a renderer.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

#[cfg(not(target_arch = "wasm32"))]
use flappy_core::{
    Tuning,
    assets::Assets,
    audio::{AudioManager, LogBackend},
    persistence::{JsonFileStore, load_settings, save_settings},
    platform::{FrameClock, InputQueue},
    renderer::{HeadlessRenderer, Renderer, build_frame},
    sim::{GameEvent, GameState, tick},
};

#[cfg(not(target_arch = "wasm32"))]
const SETTINGS_PATH: &str = "flappy_settings.json";
#[cfg(not(target_arch = "wasm32"))]
const TUNING_PATH: &str = "tuning.json";
/// Length of the demo in simulated seconds
#[cfg(not(target_arch = "wasm32"))]
const DEMO_SECONDS: f32 = 60.0;
/// Display refresh the demo pretends to run at
#[cfg(not(target_arch = "wasm32"))]
const FRAME_DT: f32 = 1.0 / 60.0;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flappy (native, headless) starting...");

    let tuning = Tuning::load_or_default(TUNING_PATH);
    let mut store = JsonFileStore::new(SETTINGS_PATH);
    let settings = load_settings(&store);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let mut state = GameState::new(seed, tuning, settings);
    log::info!("Session seed {}", state.seed);

    // No asset loader on native yet: everything renders through fallbacks
    let assets = Assets::default();
    assets.report_missing();

    let mut audio = AudioManager::new(LogBackend, assets.sounds);
    audio.apply_settings(&state.settings);
    let mut renderer = HeadlessRenderer::default();
    let mut clock = FrameClock::default();
    let mut input = InputQueue::new();
    input.set_idle_mode(true);

    let frames = (DEMO_SECONDS / FRAME_DT).round() as u32;
    let mut runs_finished = 0u32;

    for _ in 0..frames {
        for _ in 0..clock.advance(FRAME_DT) {
            let step_input = input.take();
            tick(&mut state, &step_input, clock.step());
        }

        let events = state.drain_events();
        audio.apply_settings(&state.settings);
        audio.handle_events(&events);
        for event in &events {
            match event {
                GameEvent::SettingsClosed => {
                    save_settings(&mut store, &state.settings);
                }
                GameEvent::GameOver { score, high_score } => {
                    runs_finished += 1;
                    log::info!("Run {runs_finished} over: score {score}, best {high_score}");
                }
                _ => {}
            }
        }

        let frame = build_frame(&state, &assets, &renderer);
        renderer.present(&frame);
    }

    save_settings(&mut store, &state.settings);
    let last_texts: Vec<&str> = renderer.last_frame.texts().collect();
    println!(
        "Simulated {DEMO_SECONDS}s over {} frames: {} runs finished, high score {}",
        renderer.frames_presented, runs_finished, state.high_score
    );
    println!("Final HUD: {}", last_texts.join(" | "));
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web build is driven by the host page, not by main
}
