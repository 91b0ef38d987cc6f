//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::spawner::Spawner;
use super::trail::TrailBuffer;
use crate::tuning::Tuning;

/// The movable launcher the bullet drops from
///
/// Horizontal-only, externally driven; it has no physics of its own.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cloud {
    pub pos: Vec2,
    pub half: Vec2,
}

impl Cloud {
    /// Clamp the cloud inside the scene, keeping its own width in bounds
    pub fn clamp_to_scene(&mut self, scene_half: Vec2) {
        let limit = scene_half.x - self.half.x;
        self.pos.x = self.pos.x.clamp(-limit, limit);
    }
}

/// The single projectile entity
///
/// Docked (`fired == false`) means slaved to the cloud with zero velocity;
/// Airborne (`fired == true`) means free flight under gravity. The only path
/// back to Docked is exiting the bottom wall moving downward.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub half: Vec2,
    pub fired: bool,
}

impl Bullet {
    /// Analytic free-fall update over one step
    pub fn integrate(&mut self, gravity: Vec2, elapsed: f32) {
        self.pos += elapsed * self.vel + 0.5 * gravity * elapsed * elapsed;
        self.vel += gravity * elapsed;
    }

    /// Re-bind to the cloud while docked; continuous, not a one-time copy
    pub fn dock_to(&mut self, cloud_pos: Vec2) {
        self.pos = cloud_pos;
        self.vel = Vec2::ZERO;
    }
}

/// A single-use building obstacle
///
/// Fixed width, height grows over time; destroyed on first bullet contact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Building {
    pub center: Vec2,
    pub half: Vec2,
}

/// Complete simulation state
///
/// Owned exclusively by the step function; the renderer and input layer read
/// a [`Snapshot`] between steps and feed input through [`GameState::set_cloud_x`]
/// and [`GameState::fire`] only.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Playfield half-extents, centered at origin
    pub scene_half: Vec2,
    /// Constant downward acceleration applied to the airborne bullet
    pub gravity: Vec2,
    /// Player-driven launcher
    pub cloud: Cloud,
    /// The projectile
    pub bullet: Bullet,
    /// Live buildings, oldest first
    pub buildings: Vec<Building>,
    /// Spawn/growth policy with its owned RNG
    pub spawner: Spawner,
    /// Bullet position history for trail rendering
    pub trail: TrailBuffer,
    /// Read-only for now; increment rules live outside this core
    pub score: u32,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, &Tuning::default())
    }

    /// Create a new game state with explicit tuning
    pub fn with_tuning(seed: u64, tuning: &Tuning) -> Self {
        let cloud = Cloud {
            pos: Vec2::new(0.0, tuning.scene_half.y - tuning.cloud_drop),
            half: tuning.cloud_half,
        };
        let bullet = Bullet {
            pos: cloud.pos,
            vel: Vec2::ZERO,
            half: tuning.bullet_half,
            fired: false,
        };
        Self {
            seed,
            scene_half: tuning.scene_half,
            gravity: tuning.gravity,
            cloud,
            bullet,
            buildings: Vec::new(),
            spawner: Spawner::new(seed, tuning),
            // as if the bullet has been at the cloud forever
            trail: TrailBuffer::new(bullet.pos, tuning.trail_length),
            score: 0,
        }
    }

    /// Move the launcher; called by the input layer on pointer movement.
    ///
    /// Non-finite input is ignored (previous position retained); finite input
    /// is re-clamped to the scene defensively.
    pub fn set_cloud_x(&mut self, x: f32) {
        if !x.is_finite() {
            log::debug!("ignoring non-finite cloud x: {x}");
            return;
        }
        self.cloud.pos.x = x;
        self.cloud.clamp_to_scene(self.scene_half);
        // a docked bullet tracks the cloud immediately
        if !self.bullet.fired {
            self.bullet.pos.x = self.cloud.pos.x;
        }
    }

    /// Fire the bullet; no-op while already airborne
    pub fn fire(&mut self) {
        self.bullet.fired = true;
    }

    /// Read-only view for the presentation layer
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            scene_half: self.scene_half,
            cloud: self.cloud,
            bullet: self.bullet,
            buildings: &self.buildings,
            trail: &self.trail,
            score: self.score,
        }
    }
}

/// Borrowed read-only view of everything a renderer needs
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub scene_half: Vec2,
    pub cloud: Cloud,
    pub bullet: Bullet,
    pub buildings: &'a [Building],
    pub trail: &'a TrailBuffer,
    pub score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_docked_at_cloud() {
        let state = GameState::new(7);
        assert!(!state.bullet.fired);
        assert_eq!(state.bullet.pos, state.cloud.pos);
        assert_eq!(state.bullet.vel, Vec2::ZERO);
        assert!(state.buildings.is_empty());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_set_cloud_x_clamps() {
        let mut state = GameState::new(7);
        state.set_cloud_x(100.0);
        let limit = state.scene_half.x - state.cloud.half.x;
        assert_eq!(state.cloud.pos.x, limit);
        state.set_cloud_x(-100.0);
        assert_eq!(state.cloud.pos.x, -limit);
    }

    #[test]
    fn test_set_cloud_x_ignores_non_finite() {
        let mut state = GameState::new(7);
        state.set_cloud_x(2.0);
        state.set_cloud_x(f32::NAN);
        assert_eq!(state.cloud.pos.x, 2.0);
        state.set_cloud_x(f32::INFINITY);
        assert_eq!(state.cloud.pos.x, 2.0);
    }

    #[test]
    fn test_docked_bullet_tracks_cloud_input() {
        let mut state = GameState::new(7);
        state.set_cloud_x(3.0);
        assert_eq!(state.bullet.pos.x, 3.0);
        state.fire();
        state.set_cloud_x(-3.0);
        // airborne bullet no longer follows the cloud
        assert_eq!(state.bullet.pos.x, 3.0);
    }

    #[test]
    fn test_integrate_matches_analytic_form() {
        let mut bullet = Bullet {
            pos: Vec2::new(1.0, 2.0),
            vel: Vec2::new(3.0, 4.0),
            half: Vec2::splat(0.2),
            fired: true,
        };
        let g = Vec2::new(0.0, -10.0);
        bullet.integrate(g, 0.5);
        assert_eq!(bullet.pos, Vec2::new(1.0 + 1.5, 2.0 + 2.0 - 1.25));
        assert_eq!(bullet.vel, Vec2::new(3.0, 4.0 - 5.0));
    }
}
