//! Zeus Drop headless demo driver
//!
//! Runs the simulation at a fixed timestep with a scripted input (the cloud
//! sweeps side to side, firing periodically) and logs what happens. Useful
//! for smoke-testing determinism and balance without a renderer.
//!
//! Usage: `zeus-drop [seed] [tuning.json]`

use zeus_drop::consts::{MAX_SUBSTEPS, SIM_DT};
use zeus_drop::sim::{GameState, StepInput, tick};
use zeus_drop::tuning::Tuning;

/// Simulated seconds to run
const DEMO_SECONDS: f32 = 30.0;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0x2E05_5EED);

    let tuning = match args.next() {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => match Tuning::from_json(&json) {
                Ok(t) => {
                    log::info!("loaded tuning from {path}");
                    t
                }
                Err(e) => {
                    log::warn!("bad tuning file {path}: {e}; using defaults");
                    Tuning::default()
                }
            },
            Err(e) => {
                log::warn!("cannot read {path}: {e}; using defaults");
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };

    log::info!("Zeus Drop starting, seed {seed}");
    let mut state = GameState::with_tuning(seed, &tuning);

    // pretend to be a 60 Hz host feeding a 120 Hz fixed-step sim
    let frame_dt = 1.0 / 60.0;
    let frames = (DEMO_SECONDS / frame_dt) as u32;
    let mut accumulator = 0.0;
    let mut time = 0.0f32;
    let mut drops = 0u32;
    let mut destroyed = 0usize;

    for _ in 0..frames {
        let mut input = StepInput {
            target_x: Some((time * 0.7).sin() * state.scene_half.x),
            // fire edge once a second while docked
            fire: !state.bullet.fired && time % 1.0 < frame_dt,
        };

        accumulator += frame_dt;
        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let buildings_before = state.buildings.len();
            let was_fired = state.bullet.fired;

            tick(&mut state, &input, SIM_DT);
            accumulator -= SIM_DT;
            substeps += 1;
            // clear one-shot inputs after processing
            input.fire = false;

            destroyed += buildings_before.saturating_sub(state.buildings.len());
            if was_fired && !state.bullet.fired {
                drops += 1;
            }
        }
        time += frame_dt;
    }

    let snap = state.snapshot();
    log::info!(
        "ran {DEMO_SECONDS}s: {drops} drops completed, {destroyed} buildings destroyed, \
         {} still standing, score {}",
        snap.buildings.len(),
        snap.score,
    );
}
