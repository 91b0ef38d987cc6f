//! Collision detection and response for axis-aligned boxes
//!
//! Building hits use a minimum-penetration heuristic: whichever overlap axis
//! is thinner is the one resolved, with an intentionally lossy bounce. Wall
//! bounces are perfectly elastic, except the floor which resets the bullet.

use glam::Vec2;

use super::state::{Building, Bullet};
use crate::mix;

/// Blend weight pulling `vel.y` toward the paddle-return value on a
/// side-of-building hit
const RETURN_ANGLE_BLEND: f32 = 0.75;
/// Speed kept on the resolved axis after a building bounce
const BOUNCE_DAMPING: f32 = 0.5;

/// Overlap region of two AABBs
#[derive(Debug, Clone, Copy)]
pub struct Overlap {
    pub min: Vec2,
    pub max: Vec2,
}

impl Overlap {
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

/// Overlap of two center/half-extent boxes, `None` when disjoint
pub fn aabb_overlap(a_center: Vec2, a_half: Vec2, b_center: Vec2, b_half: Vec2) -> Option<Overlap> {
    let min = (a_center - a_half).max(b_center - b_half);
    let max = (a_center + a_half).min(b_center + b_half);
    if min.x > max.x || min.y > max.y {
        return None;
    }
    Some(Overlap { min, max })
}

/// Resolve the bullet against every live building, removing each building it
/// touches (buildings are single-use). Returns how many were removed.
///
/// Buildings are tested in list order and the bullet moves between tests, so
/// several independently overlapping buildings can all resolve in one step.
/// Hits are marked during the scan and compacted once at the end.
pub fn resolve_building_hits(bullet: &mut Bullet, buildings: &mut Vec<Building>) -> usize {
    let mut hit = vec![false; buildings.len()];

    for (i, building) in buildings.iter().enumerate() {
        let Some(overlap) =
            aabb_overlap(building.center, building.half, bullet.pos, bullet.half)
        else {
            continue;
        };

        if overlap.width() > overlap.height() {
            // wider overlap in x => bounce in y direction
            if bullet.pos.y > building.center.y {
                bullet.pos.y = building.center.y + building.half.y + bullet.half.y;
                bullet.vel.y = bullet.vel.y.abs() * BOUNCE_DAMPING;
            } else {
                bullet.pos.y = building.center.y - building.half.y - bullet.half.y;
                bullet.vel.y = -bullet.vel.y.abs() * BOUNCE_DAMPING;
            }
        } else {
            // wider overlap in y => bounce in x direction
            if bullet.pos.x > building.center.x {
                bullet.pos.x = building.center.x + building.half.x + bullet.half.x;
                bullet.vel.x = bullet.vel.x.abs() * BOUNCE_DAMPING;
            } else {
                bullet.pos.x = building.center.x - building.half.x - bullet.half.x;
                bullet.vel.x = -bullet.vel.x.abs() * BOUNCE_DAMPING;
            }
            // warp y velocity by where the impact landed on the building's
            // flank: near the vertical center returns flat, near an edge
            // deflects sharply
            let aim = (bullet.pos.y - building.center.y) / (building.half.y + bullet.half.y);
            bullet.vel.y = mix(bullet.vel.y, aim, RETURN_ANGLE_BLEND);
        }

        hit[i] = true;
    }

    let before = buildings.len();
    let mut i = 0;
    buildings.retain(|_| {
        let keep = !hit[i];
        i += 1;
        keep
    });
    before - buildings.len()
}

/// Clamp and bounce the bullet against the scene walls.
///
/// Side and top walls reflect elastically. Exiting the bottom wall moving
/// downward resets the bullet onto the cloud (the sole Airborne-to-Docked
/// transition). Returns whether that reset happened.
pub fn resolve_walls(bullet: &mut Bullet, cloud_pos: Vec2, scene_half: Vec2) -> bool {
    let mut reset = false;

    if bullet.pos.y > scene_half.y - bullet.half.y {
        bullet.pos.y = scene_half.y - bullet.half.y;
        if bullet.vel.y > 0.0 {
            bullet.vel.y = -bullet.vel.y;
        }
    }
    if bullet.pos.y < -scene_half.y + bullet.half.y {
        bullet.pos.y = -scene_half.y + bullet.half.y;
        if bullet.vel.y < 0.0 {
            bullet.vel = Vec2::ZERO;
            bullet.pos = cloud_pos;
            bullet.fired = false;
            reset = true;
        }
    }

    if bullet.pos.x > scene_half.x - bullet.half.x {
        bullet.pos.x = scene_half.x - bullet.half.x;
        if bullet.vel.x > 0.0 {
            bullet.vel.x = -bullet.vel.x;
        }
    }
    if bullet.pos.x < -scene_half.x + bullet.half.x {
        bullet.pos.x = -scene_half.x + bullet.half.x;
        if bullet.vel.x < 0.0 {
            bullet.vel.x = -bullet.vel.x;
        }
    }

    reset
}
