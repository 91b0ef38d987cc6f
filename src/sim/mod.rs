//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep driven by the caller
//! - Seeded RNG only (owned by the spawner)
//! - Stable iteration order (buildings oldest-first)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod trail;

pub use collision::{Overlap, aabb_overlap, resolve_building_hits, resolve_walls};
pub use spawner::Spawner;
pub use state::{Building, Bullet, Cloud, GameState, Snapshot};
pub use tick::{Mode, StepInput, step, tick};
pub use trail::{TrailBuffer, TrailSample};
