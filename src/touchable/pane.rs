//! Multi-point gesture pane: pan via single-contact speed, pinch via
//! two-contact distance ratio.

use cgmath::{MetricSpace, Vector2, Zero};

use crate::region::Region;
use crate::touch::mapper::TouchUpdate;
use crate::touch::point::TouchPoint;
use crate::touchable::Touchable;

/// Admits up to a fixed number of contacts inside a region and derives pan
/// and pinch gestures from them.
///
/// A contact is admitted when it lands inside the region while the pane is
/// under capacity; it leaves when the matching removal arrives, capacity
/// notwithstanding. Contacts beyond the limit stay unclaimed for consumers
/// further down the dispatch order.
pub struct TouchPane<R: Region> {
    region: R,
    max_points: usize,
    points: Vec<TouchPoint>,
}

impl<R: Region> TouchPane<R> {
    pub fn new(region: R, max_points: usize) -> Self {
        Self {
            region,
            max_points,
            points: Vec::new(),
        }
    }

    pub fn count(&self) -> usize {
        self.points.len()
    }

    /// Tracked contacts in admission order, refreshed to the latest frame.
    pub fn points(&self) -> &[TouchPoint] {
        &self.points
    }

    pub fn point(&self, index: usize) -> Option<&TouchPoint> {
        self.points.get(index)
    }

    pub fn region(&self) -> &R {
        &self.region
    }

    pub fn region_mut(&mut self) -> &mut R {
        &mut self.region
    }

    /// Pan movement for this frame: the single tracked contact's per-frame
    /// speed, or zero while the pane holds any other number of contacts.
    pub fn movement(&self) -> Vector2<f32> {
        if self.points.len() == 1 {
            self.points[0].speed()
        } else {
            Vector2::zero()
        }
    }

    /// Pinch factor for this frame: the ratio of the current distance
    /// between two tracked contacts to their distance one frame ago.
    /// Greater than one spreads, less than one pinches. Returns 1.0 while
    /// the pane holds any other number of contacts or the previous
    /// distance is degenerate.
    pub fn scale(&self) -> f32 {
        if self.points.len() != 2 {
            return 1.0;
        }

        let (a, b) = (&self.points[0], &self.points[1]);
        let current = a.position().distance(b.position());
        let previous = (a.position() - a.speed()).distance(b.position() - b.speed());

        if previous <= f32::EPSILON {
            return 1.0;
        }
        current / previous
    }
}

impl<R: Region> Touchable for TouchPane<R> {
    fn update(&mut self, update: &mut TouchUpdate) -> bool {
        for point in self.points.iter_mut() {
            if let Some(live) = update.find_active(point) {
                *point = live.clone();
            }
        }

        let mut accepted = false;
        if self.points.len() < self.max_points {
            if let Some(added) = update.added() {
                if self.region.contains(added.position()) {
                    if let Some(added) = update.take_added() {
                        self.points.push(added);
                        accepted = true;
                    }
                }
            }
        }

        if let Some(removed) = update.removed() {
            self.points.retain(|point| point != removed);
        }

        accepted
    }

    fn flush(&mut self) {
        self.points.clear();
    }
}
