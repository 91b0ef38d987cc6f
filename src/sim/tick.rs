//! Per-frame simulation step
//!
//! One synchronous, single-threaded update: spawner, bullet kinematics,
//! collision resolution, trail bookkeeping. Real-time feel comes purely
//! from the caller's step cadence; nothing here blocks or suspends.

use super::collision::{resolve_building_hits, resolve_walls};
use super::state::{GameState, Snapshot};

/// Input commands for a single step, applied before the step consumes them
#[derive(Debug, Clone, Copy, Default)]
pub struct StepInput {
    /// Target cloud x-position (from mouse/touch position)
    pub target_x: Option<f32>,
    /// Fire the bullet (click/tap); no-op while airborne
    pub fire: bool,
}

/// Host-driven simulation component: the windowing layer feeds input in,
/// advances time, and reads a snapshot back out to draw. There is exactly
/// one simulation variant, so [`GameState`] is the only implementor.
pub trait Mode {
    fn handle_input(&mut self, input: &StepInput);
    fn update(&mut self, elapsed: f32);
    fn snapshot(&self) -> Snapshot<'_>;
}

impl Mode for GameState {
    fn handle_input(&mut self, input: &StepInput) {
        if let Some(x) = input.target_x {
            self.set_cloud_x(x);
        }
        if input.fire {
            self.fire();
        }
    }

    fn update(&mut self, elapsed: f32) {
        step(self, elapsed);
    }

    fn snapshot(&self) -> Snapshot<'_> {
        GameState::snapshot(self)
    }
}

/// Apply one frame's input, then advance by `elapsed` seconds
pub fn tick(state: &mut GameState, input: &StepInput, elapsed: f32) {
    state.handle_input(input);
    step(state, elapsed);
}

/// Advance the simulation by `elapsed` seconds; the sole mutator.
///
/// Callers must guarantee non-negative elapsed. Very large values are not
/// clamped and can tunnel the bullet through buildings or walls; that is a
/// documented limitation of the discrete step, not something to recover from.
pub fn step(state: &mut GameState, elapsed: f32) {
    debug_assert!(elapsed >= 0.0, "elapsed must be non-negative");

    // spawn and growth run first, independent of the bullet
    state
        .spawner
        .advance(elapsed, &mut state.buildings, state.scene_half);

    // keep the cloud in bounds whatever the input layer sent
    state.cloud.clamp_to_scene(state.scene_half);

    if state.bullet.fired {
        state.bullet.integrate(state.gravity, elapsed);

        // buildings first, then walls; docked bullets skip both
        let removed = resolve_building_hits(&mut state.bullet, &mut state.buildings);
        if removed > 0 {
            log::debug!("bullet destroyed {removed} building(s)");
        }
        if resolve_walls(&mut state.bullet, state.cloud.pos, state.scene_half) {
            log::debug!("bullet left the floor, docked back to the cloud");
        }
    } else {
        state.bullet.dock_to(state.cloud.pos);
    }

    state.trail.advance(elapsed, state.bullet.pos);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_zero_step_is_a_no_op() {
        let mut state = GameState::new(1);
        let bullet_before = state.bullet;
        let buildings_before = state.buildings.clone();
        let trail_before = state.trail.len();

        step(&mut state, 0.0);

        assert_eq!(state.bullet.pos, bullet_before.pos);
        assert_eq!(state.bullet.vel, bullet_before.vel);
        assert_eq!(state.buildings.len(), buildings_before.len());
        // trail bookkeeping still appends exactly one zero-age sample
        assert_eq!(state.trail.len(), trail_before + 1);
        assert_eq!(state.trail.sample_at(0.0), Some(bullet_before.pos));
    }

    #[test]
    fn test_docked_bullet_slaved_each_step() {
        let mut state = GameState::new(1);
        for i in 0..20 {
            let x = (i as f32) * 0.3 - 3.0;
            tick(
                &mut state,
                &StepInput {
                    target_x: Some(x),
                    fire: false,
                },
                0.016,
            );
            assert_eq!(state.bullet.pos, state.cloud.pos);
            assert_eq!(state.bullet.vel, Vec2::ZERO);
            assert!(!state.bullet.fired);
        }
    }

    #[test]
    fn test_fire_starts_from_rest() {
        let mut state = GameState::new(1);
        tick(
            &mut state,
            &StepInput {
                target_x: None,
                fire: true,
            },
            0.0,
        );
        assert!(state.bullet.fired);
        assert_eq!(state.bullet.vel, Vec2::ZERO);
        assert_eq!(state.bullet.pos, state.cloud.pos);
    }

    #[test]
    fn test_airborne_bullet_falls() {
        let mut state = GameState::new(1);
        state.fire();
        let y0 = state.bullet.pos.y;
        step(&mut state, 0.1);
        assert!(state.bullet.pos.y < y0);
        assert!(state.bullet.vel.y < 0.0);
    }

    #[test]
    fn test_fire_is_idempotent_while_airborne() {
        let mut state = GameState::new(1);
        state.fire();
        step(&mut state, 0.1);
        let pos = state.bullet.pos;
        let vel = state.bullet.vel;
        // a second fire edge changes nothing
        state.fire();
        assert!(state.bullet.fired);
        assert_eq!(state.bullet.pos, pos);
        assert_eq!(state.bullet.vel, vel);
    }

    #[test]
    fn test_floor_reset_scenario() {
        let mut state = GameState::new(1);
        state.fire();
        state.bullet.pos = Vec2::new(0.0, -state.scene_half.y + state.bullet.half.y - 0.001);
        state.bullet.vel = Vec2::new(0.0, -1.0);

        step(&mut state, 0.01);

        assert!(!state.bullet.fired);
        assert_eq!(state.bullet.pos, state.cloud.pos);
        assert_eq!(state.bullet.vel, Vec2::ZERO);
    }

    #[test]
    fn test_docked_bullet_skips_collisions() {
        let mut state = GameState::new(1);
        // park a building directly under the docked bullet
        state.buildings.push(crate::sim::Building {
            center: state.cloud.pos,
            half: Vec2::new(0.3, 0.5),
        });
        step(&mut state, 0.016);
        assert_eq!(state.buildings.len(), 1);
    }

    #[test]
    fn test_full_drop_destroys_a_building_and_returns() {
        let mut state = GameState::new(1);
        state.buildings.push(crate::sim::Building {
            center: Vec2::new(0.0, -state.scene_half.y + 1.0),
            half: Vec2::new(0.3, 1.0),
        });
        state.fire();

        let mut saw_removal = false;
        for _ in 0..3000 {
            step(&mut state, crate::consts::SIM_DT);
            if state.buildings.iter().all(|b| b.center.x != 0.0) {
                saw_removal = true;
            }
            if !state.bullet.fired {
                break;
            }
        }
        assert!(saw_removal, "drop over a building should destroy it");
        assert!(!state.bullet.fired, "bullet should dock again eventually");
        assert_eq!(state.bullet.pos, state.cloud.pos);
    }

    #[test]
    fn test_trail_follows_the_bullet() {
        let mut state = GameState::new(1);
        state.fire();
        for _ in 0..10 {
            step(&mut state, 0.05);
        }
        assert_eq!(state.trail.sample_at(0.0), Some(state.bullet.pos));
    }

    #[test]
    fn test_score_stays_untouched() {
        let mut state = GameState::new(1);
        state.fire();
        for _ in 0..500 {
            step(&mut state, 0.02);
        }
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_deterministic_replay() {
        let script = |state: &mut GameState| {
            for i in 0..400 {
                let input = StepInput {
                    target_x: Some(((i as f32) * 0.05).sin() * 6.0),
                    fire: i % 97 == 0,
                };
                tick(state, &input, crate::consts::SIM_DT);
            }
        };
        let mut a = GameState::new(0xDECAF);
        let mut b = GameState::new(0xDECAF);
        script(&mut a);
        script(&mut b);
        assert_eq!(a.bullet.pos, b.bullet.pos);
        assert_eq!(a.bullet.vel, b.bullet.vel);
        assert_eq!(a.buildings.len(), b.buildings.len());
        for (x, y) in a.buildings.iter().zip(b.buildings.iter()) {
            assert_eq!(x.center, y.center);
        }
    }
}
