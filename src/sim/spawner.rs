//! Timer-driven building generator and growth policy
//!
//! Not reactive to the bullet: buildings appear on a randomized cooldown up
//! to a population cap, and all live buildings grow upward on a shared
//! growth clock. Removal happens only through collision resolution.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::Building;
use crate::tuning::Tuning;

/// Spawn/growth state with its owned, explicitly seeded RNG
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
    /// Seconds until the next spawn becomes eligible
    spawn_timer: f32,
    /// Time accumulated toward the next growth pulse
    grow_timer: f32,
    spawn_cd_min: f32,
    spawn_cd_max: f32,
    grow_cd: f32,
    grow_rate: f32,
    floor_epsilon: f32,
    max_buildings: usize,
    building_half_width: f32,
}

impl Spawner {
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        // draw the first countdown so a fresh state is never spawn-eligible
        let spawn_timer =
            rng.random_range(tuning.spawn_cd_min..tuning.spawn_cd_min + tuning.spawn_cd_max);
        Self {
            rng,
            spawn_timer,
            grow_timer: 0.0,
            spawn_cd_min: tuning.spawn_cd_min,
            spawn_cd_max: tuning.spawn_cd_max,
            grow_cd: tuning.grow_cd,
            grow_rate: tuning.grow_rate,
            floor_epsilon: tuning.spawn_floor_epsilon,
            max_buildings: tuning.max_buildings,
            building_half_width: tuning.building_half_width,
        }
    }

    /// Advance both clocks by `elapsed`: maybe spawn one building, maybe
    /// grow every live building by one increment.
    ///
    /// A zero-elapsed step is a no-op even when a stale countdown is already
    /// spawn-eligible; zero-length steps must not have side effects.
    pub fn advance(&mut self, elapsed: f32, buildings: &mut Vec<Building>, scene_half: Vec2) {
        if elapsed <= 0.0 {
            return;
        }
        self.spawn_timer -= elapsed;
        if self.spawn_timer < self.spawn_cd_min && buildings.len() < self.max_buildings {
            self.spawn_timer = self
                .rng
                .random_range(self.spawn_cd_min..self.spawn_cd_min + self.spawn_cd_max);

            // somewhere across the playfield; the range deliberately lets a
            // building poke past the side walls
            let span = (scene_half.x + self.building_half_width) * 0.5;
            let x = self.rng.random_range(-span..span);

            buildings.push(Building {
                center: Vec2::new(x, -scene_half.y + self.grow_rate + self.floor_epsilon),
                half: Vec2::new(self.building_half_width, self.grow_rate),
            });
            log::debug!("building spawned at x={x:.2} ({} live)", buildings.len());
        }

        if self.grow_timer > self.grow_cd {
            self.grow_timer = 0.0;
            for building in buildings.iter_mut() {
                building.half.y += self.grow_rate;
                building.center.y += self.grow_rate;
                // base stays pinned to the floor while growing upward
                debug_assert!(
                    building.center.y - building.half.y >= -scene_half.y,
                    "building base sank below the floor"
                );
            }
        } else {
            self.grow_timer += elapsed;
        }
    }

    /// Seconds remaining until the countdown reaches the eligibility bound
    pub fn spawn_timer(&self) -> f32 {
        self.spawn_timer
    }

    pub fn max_buildings(&self) -> usize {
        self.max_buildings
    }

    #[cfg(test)]
    pub(crate) fn force_spawn_eligible(&mut self) {
        self.spawn_timer = 0.0;
    }
}
