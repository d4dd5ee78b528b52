//! Binary pressed/unpressed tracking for one contact.

use crate::region::Region;
use crate::touch::mapper::TouchUpdate;
use crate::touch::point::TouchPoint;
use crate::touchable::Touchable;

/// Tracks pressed state for a single contact inside a region.
///
/// A button claims the frame's added point when its down position falls
/// inside the region, and stays pressed until that same contact (matched by
/// id and creation time) is removed, wherever the release happens. How the
/// pressed state is drawn is up to the caller; `is_pressed()` is the whole
/// visual contract.
pub struct Button<R: Region> {
    region: R,
    claimed: Option<TouchPoint>,
}

impl<R: Region> Button<R> {
    pub fn new(region: R) -> Self {
        Self {
            region,
            claimed: None,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.claimed.is_some()
    }

    /// The claimed contact, refreshed to the latest drained frame.
    pub fn touch_point(&self) -> Option<&TouchPoint> {
        self.claimed.as_ref()
    }

    pub fn region(&self) -> &R {
        &self.region
    }

    /// Mutable region access, for widgets that move or resize.
    pub fn region_mut(&mut self) -> &mut R {
        &mut self.region
    }
}

impl<R: Region> Touchable for Button<R> {
    fn update(&mut self, update: &mut TouchUpdate) -> bool {
        if let Some(claimed) = self.claimed.as_mut() {
            if let Some(live) = update.find_active(claimed) {
                *claimed = live.clone();
            }
        }

        let mut accepted = false;
        if self.claimed.is_none() {
            if let Some(added) = update.added() {
                // The down position decides the claim; where the contact
                // drifts afterwards does not matter to a button.
                if self.region.contains(added.first_position()) {
                    self.claimed = update.take_added();
                    accepted = true;
                }
            }
        }

        if let (Some(claimed), Some(removed)) = (self.claimed.as_ref(), update.removed()) {
            if claimed == removed {
                self.claimed = None;
            }
        }

        accepted
    }

    fn flush(&mut self) {
        self.claimed = None;
    }
}
