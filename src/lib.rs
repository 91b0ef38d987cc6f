//! Zeus Drop - a bullet-drop arcade simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bullet physics, building spawner,
//!   AABB collisions, positional trail)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, windowing and input mapping are external collaborators: they
//! feed a [`sim::StepInput`] in, call [`sim::tick`] once per frame, and read
//! a [`sim::Snapshot`] back out.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Scene half-extents; the playfield is centered at the origin
    pub const SCENE_HALF: Vec2 = Vec2::new(7.0, 5.0);

    /// Cloud (launcher) half-extents
    pub const CLOUD_HALF: Vec2 = Vec2::new(0.2, 1.0);
    /// Cloud rest height below the ceiling
    pub const CLOUD_DROP: f32 = 0.5;

    /// Bullet half-extents
    pub const BULLET_HALF: Vec2 = Vec2::new(0.2, 0.2);

    /// Constant downward gravity (scene units per second squared)
    pub const GRAVITY: Vec2 = Vec2::new(0.0, -9.8);

    /// Building half-width (buildings have fixed width, growing height)
    pub const BUILDING_HALF_WIDTH: f32 = 0.3;
    /// Half-height gained per growth pulse
    pub const GROW_RATE: f32 = 0.1;
    /// Seconds between growth pulses
    pub const GROW_CD: f32 = 1.0;
    /// Gap between a fresh building's base and the floor
    pub const SPAWN_FLOOR_EPSILON: f32 = 0.1;

    /// Spawn countdown lower bound; a spawn fires when the countdown
    /// falls below this value
    pub const SPAWN_CD_MIN: f32 = 0.5;
    /// Width of the countdown redraw range above `SPAWN_CD_MIN`
    pub const SPAWN_CD_MAX: f32 = 2.0;
    /// Cap on concurrent buildings
    pub const MAX_BUILDINGS: usize = 8;

    /// Seconds of bullet history kept for the fading trail
    pub const TRAIL_LENGTH: f32 = 1.3;
}

/// Linear interpolation between two scalars, `t = 0` yields `a`
#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
