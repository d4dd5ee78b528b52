//! Frame-wise touch consumers.
//!
//! A [`Touchable`] receives one [`TouchUpdate`] per frame, decides whether
//! to claim the newly added point, and releases its claim when the matching
//! removal arrives. The concrete consumers:
//!
//! - `button` tracks binary pressed state for one contact
//! - `frame` fires a callback when a tap completes inside its region
//! - `pane` admits several contacts for pan and pinch gestures
//!
//! [`TouchableCollection`] dispatches one update across many consumers.

pub mod button;
pub mod frame;
pub mod pane;

use crate::touch::mapper::TouchUpdate;

/// A consumer of per-frame touch updates.
///
/// Claiming works through the update itself: a consumer that takes the
/// added point removes it from the update, so consumers further down the
/// dispatch order cannot claim it too. Removals stay visible to everyone;
/// each claim holder has to see them to release its own claim.
pub trait Touchable {
    /// Feed one frame's update. Returns true iff the consumer claimed a
    /// point this frame.
    fn update(&mut self, update: &mut TouchUpdate) -> bool;

    /// Drop every claim without firing any callbacks. Called when the
    /// owning surface pauses or tears down, in tandem with the mapper's
    /// own `flush()`.
    fn flush(&mut self);
}

/// Dispatches one update to a list of boxed consumers.
///
/// Default order is registration order. With `newest_first()` the most
/// recently registered consumer sees the update first, which gives
/// front-most widgets first refusal when regions overlap.
pub struct TouchableCollection {
    members: Vec<Box<dyn Touchable>>,
    newest_first: bool,
}

impl TouchableCollection {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            newest_first: false,
        }
    }

    pub fn newest_first() -> Self {
        Self {
            members: Vec::new(),
            newest_first: true,
        }
    }

    pub fn push(&mut self, member: impl Touchable + 'static) {
        self.members.push(Box::new(member));
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Touchable for TouchableCollection {
    fn update(&mut self, update: &mut TouchUpdate) -> bool {
        let mut claimed = false;
        if self.newest_first {
            for member in self.members.iter_mut().rev() {
                claimed |= member.update(update);
            }
        } else {
            for member in self.members.iter_mut() {
                claimed |= member.update(update);
            }
        }
        claimed
    }

    fn flush(&mut self) {
        for member in self.members.iter_mut() {
            member.flush();
        }
    }
}

impl Default for TouchableCollection {
    fn default() -> Self {
        Self::new()
    }
}
