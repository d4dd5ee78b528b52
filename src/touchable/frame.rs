//! Tap detection: press inside a region, release inside it, callback.

use crate::region::Region;
use crate::touch::mapper::TouchUpdate;
use crate::touch::point::TouchPoint;
use crate::touchable::Touchable;

/// A region that fires a callback when a tap completes inside it.
///
/// Claims like a button, but the release position matters: the handler runs
/// only when the tracked contact lifts while still inside the region, so a
/// press that drags out before releasing is not a tap. The handler runs
/// synchronously on the thread driving the frame update, before the claim
/// is cleared. `flush()` drops the claim without firing, so teardown never
/// produces a spurious tap.
pub struct TouchFrame<R: Region> {
    region: R,
    claimed: Option<TouchPoint>,
    handler: Option<Box<dyn FnMut()>>,
}

impl<R: Region> TouchFrame<R> {
    pub fn new(region: R) -> Self {
        Self {
            region,
            claimed: None,
            handler: None,
        }
    }

    pub fn with_handler(region: R, handler: impl FnMut() + 'static) -> Self {
        Self {
            region,
            claimed: None,
            handler: Some(Box::new(handler)),
        }
    }

    pub fn set_handler(&mut self, handler: impl FnMut() + 'static) {
        self.handler = Some(Box::new(handler));
    }

    pub fn is_pressed(&self) -> bool {
        self.claimed.is_some()
    }

    pub fn touch_point(&self) -> Option<&TouchPoint> {
        self.claimed.as_ref()
    }

    pub fn region(&self) -> &R {
        &self.region
    }

    pub fn region_mut(&mut self) -> &mut R {
        &mut self.region
    }
}

impl<R: Region> Touchable for TouchFrame<R> {
    fn update(&mut self, update: &mut TouchUpdate) -> bool {
        if let Some(claimed) = self.claimed.as_mut() {
            if let Some(live) = update.find_active(claimed) {
                *claimed = live.clone();
            }
        }

        let mut accepted = false;
        if self.claimed.is_none() {
            if let Some(added) = update.added() {
                if self.region.contains(added.first_position()) {
                    self.claimed = update.take_added();
                    accepted = true;
                }
            }
        }

        if let (Some(claimed), Some(removed)) = (self.claimed.as_ref(), update.removed()) {
            if claimed == removed {
                // The removal carries the final position of the contact.
                if self.region.contains(removed.position()) {
                    if let Some(handler) = self.handler.as_mut() {
                        handler();
                    }
                }
                self.claimed = None;
            }
        }

        accepted
    }

    fn flush(&mut self) {
        self.claimed = None;
    }
}
