//! The data model for one physical contact on the touch surface.

use cgmath::Vector2;
use instant::Instant;

/// One physical contact (finger or stylus) tracked by the input source.
///
/// The id is assigned by the platform and stays stable while the contact is
/// held down, but platforms recycle ids as soon as a contact lifts. Identity
/// therefore combines the id with the creation timestamp: a recycled id is a
/// new contact, never the old one. `PartialEq` implements exactly that and
/// must be used for all claim/release matching.
///
/// A point carries three positions: where it first touched down, where it is
/// now, and where it was at the previous frame boundary. The last one is
/// advanced by [`TouchMapper::frame_update`](crate::touch::mapper::TouchMapper::frame_update)
/// only, so [`TouchPoint::speed`] measures movement per frame, not per event.
#[derive(Debug, Clone)]
pub struct TouchPoint {
    id: u64,
    primary: bool,
    first: Vector2<f32>,
    position: Vector2<f32>,
    last: Vector2<f32>,
    timestamp: Instant,
}

impl TouchPoint {
    pub(crate) fn new(id: u64, primary: bool, position: Vector2<f32>) -> Self {
        Self {
            id,
            primary,
            first: position,
            position,
            last: position,
            timestamp: Instant::now(),
        }
    }

    /// Platform id of the contact. Unique only among currently active points.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// True for the first contact after a period with no active points.
    /// At most one active point is primary; the flag never changes.
    pub fn is_primary(&self) -> bool {
        self.primary
    }

    /// Position at the time the contact touched down, in screen pixels.
    pub fn first_position(&self) -> Vector2<f32> {
        self.first
    }

    /// Current position in screen pixels.
    pub fn position(&self) -> Vector2<f32> {
        self.position
    }

    /// Movement since the previous frame boundary, in pixels per frame.
    pub fn speed(&self) -> Vector2<f32> {
        self.position - self.last
    }

    /// Creation time on the monotonic clock. Part of the point's identity.
    pub fn timestamp(&self) -> Instant {
        self.timestamp
    }

    pub(crate) fn set_position(&mut self, position: Vector2<f32>) {
        self.position = position;
    }

    /// Advances the per-frame baseline. Called once per drain; calling it
    /// more often collapses `speed()` towards zero.
    pub(crate) fn advance_frame(&mut self) {
        self.last = self.position;
    }
}

impl PartialEq for TouchPoint {
    /// Two values describe the same contact only if id and creation time
    /// both match. Comparing the bare id would confuse a recycled id with
    /// the contact that previously carried it.
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.timestamp == other.timestamp
    }
}
