//! Bounded, time-evicting history of swing tip samples.

use ember_core::Vec2;
use serde::Serialize;
use std::collections::VecDeque;

/// One recorded sample of the swing tip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrailPoint {
    pub position: Vec2,
    /// Pose angle in radians when the point was taken
    pub orientation: f32,
    /// Linear swing progress in [0, 1]
    pub progress: f32,
    pub tick: u64,
}

/// Insertion-ordered trail (oldest first) with two eviction bounds:
/// a maximum point count and a maximum age in ticks.
#[derive(Debug, Clone)]
pub struct TrailBuffer {
    points: VecDeque<TrailPoint>,
    max_points: usize,
    max_age_ticks: u64,
}

impl TrailBuffer {
    pub fn new(max_points: usize, max_age_ticks: u64) -> Self {
        let max_points = max_points.max(1);
        Self {
            points: VecDeque::with_capacity(max_points + 1),
            max_points,
            max_age_ticks,
        }
    }

    /// Append a point, then evict from the front. A second record within the
    /// same tick replaces the newest point instead of appending.
    pub fn record(&mut self, mut point: TrailPoint) {
        point.progress = point.progress.clamp(0.0, 1.0);

        match self.points.back_mut() {
            Some(newest) if newest.tick == point.tick => *newest = point,
            _ => self.points.push_back(point),
        }
        self.evict(point.tick);
    }

    /// Apply only the age bound, for ticks where nothing is recorded.
    pub fn evict_stale(&mut self, current_tick: u64) {
        self.evict(current_tick);
    }

    fn evict(&mut self, current_tick: u64) {
        let mut evicted = 0usize;
        while let Some(oldest) = self.points.front() {
            let too_many = self.points.len() > self.max_points;
            let too_old = current_tick.saturating_sub(oldest.tick) > self.max_age_ticks;
            if !(too_many || too_old) {
                break;
            }
            self.points.pop_front();
            evicted += 1;
        }
        if evicted > 0 {
            log::trace!("trail evicted {} point(s) at tick {}", evicted, current_tick);
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn max_points(&self) -> usize {
        self.max_points
    }

    pub fn max_age_ticks(&self) -> u64 {
        self.max_age_ticks
    }

    /// Oldest point.
    pub fn front(&self) -> Option<&TrailPoint> {
        self.points.front()
    }

    /// Newest point.
    pub fn back(&self) -> Option<&TrailPoint> {
        self.points.back()
    }

    pub fn get(&self, index: usize) -> Option<&TrailPoint> {
        self.points.get(index)
    }

    /// Points from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &TrailPoint> + '_ {
        self.points.iter()
    }

    /// Copy positions, oldest first, into `out` (cleared first).
    pub fn positions_into(&self, out: &mut Vec<Vec2>) {
        out.clear();
        out.extend(self.points.iter().map(|p| p.position));
    }
}
