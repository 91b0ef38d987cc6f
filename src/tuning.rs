//! Data-driven game balance
//!
//! Every balance constant from [`crate::consts`] is also a field here, so a
//! host can ship a JSON tuning file without recompiling. Defaults match the
//! constants exactly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts;

/// Simulation balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Playfield half-extents
    pub scene_half: Vec2,
    /// Cloud half-extents
    pub cloud_half: Vec2,
    /// Cloud rest height below the ceiling
    pub cloud_drop: f32,
    /// Bullet half-extents
    pub bullet_half: Vec2,
    /// Constant downward acceleration
    pub gravity: Vec2,
    /// Building half-width
    pub building_half_width: f32,
    /// Half-height gained per growth pulse
    pub grow_rate: f32,
    /// Seconds between growth pulses
    pub grow_cd: f32,
    /// Gap between a fresh building's base and the floor
    pub spawn_floor_epsilon: f32,
    /// Spawn eligibility bound
    pub spawn_cd_min: f32,
    /// Width of the countdown redraw range
    pub spawn_cd_max: f32,
    /// Cap on concurrent buildings
    pub max_buildings: usize,
    /// Seconds of trail history
    pub trail_length: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            scene_half: consts::SCENE_HALF,
            cloud_half: consts::CLOUD_HALF,
            cloud_drop: consts::CLOUD_DROP,
            bullet_half: consts::BULLET_HALF,
            gravity: consts::GRAVITY,
            building_half_width: consts::BUILDING_HALF_WIDTH,
            grow_rate: consts::GROW_RATE,
            grow_cd: consts::GROW_CD,
            spawn_floor_epsilon: consts::SPAWN_FLOOR_EPSILON,
            spawn_cd_min: consts::SPAWN_CD_MIN,
            spawn_cd_max: consts::SPAWN_CD_MAX,
            max_buildings: consts::MAX_BUILDINGS,
            trail_length: consts::TRAIL_LENGTH,
        }
    }
}

impl Tuning {
    /// Parse a tuning file; absent fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize for writing a tuning file
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
