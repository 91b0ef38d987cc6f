//! Bounded, age-ordered history of bullet positions
//!
//! The renderer draws a fading trail by sampling this buffer at evenly
//! spaced ages and interpolating between recorded positions.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One recorded bullet position and how long ago it was recorded
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrailSample {
    pub pos: Vec2,
    pub age: f32,
}

/// Ordered sequence of trail samples, oldest first (front has the largest
/// age, back is always age 0, i.e. "now").
///
/// The buffer keeps one sample older than `trail_length` as an anchor so
/// interpolation at the far end of the trail always has a bracketing pair.
/// A non-empty buffer therefore never drops below 2 samples.
#[derive(Debug, Clone)]
pub struct TrailBuffer {
    samples: VecDeque<TrailSample>,
    trail_length: f32,
}

impl TrailBuffer {
    /// Seed the trail as if the bullet has been at `pos` forever
    pub fn new(pos: Vec2, trail_length: f32) -> Self {
        let mut samples = VecDeque::new();
        samples.push_back(TrailSample { pos, age: trail_length });
        samples.push_back(TrailSample { pos, age: 0.0 });
        Self { samples, trail_length }
    }

    /// Per-step bookkeeping: age everything up by `elapsed`, record `pos`
    /// at age 0, then trim expired samples from the front.
    ///
    /// Only trims while the *second* sample is already too old, so one
    /// expired sample survives as the interpolation anchor.
    pub fn advance(&mut self, elapsed: f32, pos: Vec2) {
        for sample in &mut self.samples {
            sample.age += elapsed;
        }
        self.samples.push_back(TrailSample { pos, age: 0.0 });
        while self.samples.len() >= 2 && self.samples[1].age > self.trail_length {
            self.samples.pop_front();
        }
    }

    /// Interpolated bullet position at `age` seconds ago.
    ///
    /// Returns `None` outside `[0, trail_length]` or when the query is older
    /// than the retained history; callers stop drawing further segments.
    pub fn sample_at(&self, age: f32) -> Option<Vec2> {
        if !(0.0..=self.trail_length).contains(&age) {
            return None;
        }
        // ages are non-increasing front to back; find the first sample at
        // least as new as the query, its predecessor brackets from the
        // older side
        if self.samples.front()?.age < age {
            return None;
        }
        let i = (1..self.samples.len()).find(|&i| self.samples[i].age <= age)?;
        let a = self.samples[i - 1];
        let b = self.samples[i];
        let span = a.age - b.age;
        if span <= f32::EPSILON {
            return Some(b.pos);
        }
        let t = (a.age - age) / span;
        Some(a.pos + (b.pos - a.pos) * t)
    }

    /// Longest age a sample is kept for (not counting the anchor)
    pub fn trail_length(&self) -> f32 {
        self.trail_length
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples oldest-first
    pub fn iter(&self) -> impl Iterator<Item = &TrailSample> {
        self.samples.iter()
    }

    /// Age of the oldest retained sample
    pub fn oldest_age(&self) -> Option<f32> {
        self.samples.front().map(|s| s.age)
    }
}
