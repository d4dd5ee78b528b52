//! Frame-wise reconciliation of raw pointer events.
//!
//! [`TouchMapper`] is the producer/consumer seam between the event thread
//! and the render thread. The event thread calls [`TouchMapper::map`] for
//! every raw batch; the render thread calls [`TouchMapper::frame_update`]
//! exactly once per frame and receives a [`TouchUpdate`]: an isolated copy
//! of the active contacts plus at most one newly added and one newly
//! removed point. Both sides run under one mutex owned by the mapper, so a
//! single instance can be shared behind an `Arc`.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::touch::event::{PointerAction, PointerEvent, PointerSample};
use crate::touch::point::TouchPoint;

/// How pending add/remove notifications survive between drains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationPolicy {
    /// Keep every notification and hand them out one per drain, oldest
    /// first. Nothing is dropped; a burst of contacts takes several frames
    /// to report.
    #[default]
    Queued,
    /// Keep only the most recent notification. A second event before the
    /// first was drained overwrites it; consumers that only ask "did
    /// anything change this frame" accept the lost history.
    Collapse,
}

/// The product of one drain: frame-stable touch state.
///
/// `active` is an independently-mutable copy; the live set keeps changing
/// behind the mapper's lock while consumers iterate this one. Consumers
/// claim the added point via [`TouchUpdate::take_added`] so that exactly one
/// of them wins it.
#[derive(Debug)]
pub struct TouchUpdate {
    added: Option<TouchPoint>,
    removed: Option<TouchPoint>,
    active: Vec<TouchPoint>,
}

impl TouchUpdate {
    /// The oldest undrained added point, if any, unless a consumer already
    /// claimed it this frame.
    pub fn added(&self) -> Option<&TouchPoint> {
        self.added.as_ref()
    }

    /// The oldest undrained removed point, if any.
    pub fn removed(&self) -> Option<&TouchPoint> {
        self.removed.as_ref()
    }

    /// Claims the added point. Later consumers of this update see no added
    /// point, which makes claims exclusive.
    pub fn take_added(&mut self) -> Option<TouchPoint> {
        self.added.take()
    }

    /// Clears the removed point for consumers further down the chain. Most
    /// consumers must not call this: every claim holder needs to observe
    /// the removal to release its own claim.
    pub fn take_removed(&mut self) -> Option<TouchPoint> {
        self.removed.take()
    }

    /// Copy of the active set as of this drain, in contact order.
    pub fn active(&self) -> &[TouchPoint] {
        &self.active
    }

    /// Looks up the snapshot state of a previously claimed point, matching
    /// by id and creation time.
    pub fn find_active(&self, point: &TouchPoint) -> Option<&TouchPoint> {
        self.active.iter().find(|candidate| *candidate == point)
    }
}

#[derive(Debug)]
struct MapperState {
    active: Vec<TouchPoint>,
    added: VecDeque<TouchPoint>,
    removed: VecDeque<TouchPoint>,
    added_policy: NotificationPolicy,
    removed_policy: NotificationPolicy,
}

impl MapperState {
    fn index_of(&self, id: u64) -> Option<usize> {
        self.active.iter().position(|point| point.id() == id)
    }

    fn add_point(&mut self, sample: &PointerSample, primary: bool) {
        let point = TouchPoint::new(sample.id, primary, sample.position);
        match self.added_policy {
            NotificationPolicy::Queued => self.added.push_back(point.clone()),
            NotificationPolicy::Collapse => {
                self.added.clear();
                self.added.push_back(point.clone());
            }
        }
        self.active.push(point);
    }

    fn remove_point(&mut self, id: u64) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        let point = self.active.remove(index);
        if self.added_policy == NotificationPolicy::Collapse {
            // The add was never drained, so the contact was never observable.
            self.added.retain(|pending| *pending != point);
        }
        match self.removed_policy {
            NotificationPolicy::Queued => self.removed.push_back(point),
            NotificationPolicy::Collapse => {
                self.removed.clear();
                self.removed.push_back(point);
            }
        }
    }
}

/// Reconciles the raw pointer event stream into per-frame touch state.
///
/// Lifecycle matches the owning surface: create one mapper per view, feed it
/// every raw event, drain it once per rendered frame, `flush()` it on
/// pause or teardown. All methods take `&self`; the mapper carries its own
/// mutex and is safe to share between the event and render threads.
#[derive(Debug)]
pub struct TouchMapper {
    state: Mutex<MapperState>,
}

impl TouchMapper {
    /// A mapper with the [`NotificationPolicy::Queued`] policy on both
    /// channels, which never drops a gesture start.
    pub fn new() -> Self {
        Self::with_policies(NotificationPolicy::Queued, NotificationPolicy::Queued)
    }

    /// A mapper with explicit per-channel notification policies.
    pub fn with_policies(added: NotificationPolicy, removed: NotificationPolicy) -> Self {
        Self {
            state: Mutex::new(MapperState {
                active: Vec::new(),
                added: VecDeque::new(),
                removed: VecDeque::new(),
                added_policy: added,
                removed_policy: removed,
            }),
        }
    }

    /// Ingests one raw event batch. Call this for every pointer event the
    /// host delivers, from whichever thread delivers it.
    ///
    /// Unknown ids moving, actions pointing outside the batch and similar
    /// malformed input are ignored; input delivery is best-effort and must
    /// never take down the render loop.
    pub fn map(&self, event: &PointerEvent) {
        let mut state = self.state.lock().unwrap();

        if event.pointers().is_empty() {
            return;
        }

        let mut ended: Vec<u64> = Vec::new();
        for (index, sample) in event.pointers().iter().enumerate() {
            let carries_action = index == event.action_index();
            match state.index_of(sample.id) {
                Some(slot) => {
                    // Position first: a batch that both moves and lifts a
                    // contact must report the final position on removal.
                    state.active[slot].set_position(sample.position);
                    match event.action() {
                        PointerAction::Up | PointerAction::PointerUp if carries_action => {
                            ended.push(sample.id)
                        }
                        PointerAction::Cancel => ended.push(sample.id),
                        _ => {}
                    }
                }
                None => match event.action() {
                    PointerAction::Down if carries_action => {
                        let primary = state.active.is_empty();
                        state.add_point(sample, primary);
                    }
                    PointerAction::PointerDown if carries_action => {
                        state.add_point(sample, false);
                    }
                    _ => {
                        log::debug!(
                            "ignoring {:?} sample for untracked contact {}",
                            event.action(),
                            sample.id
                        );
                    }
                },
            }
        }

        // Contacts the batch stopped reporting ended without an explicit up
        // (gesture takeover, dropped events). Treat them as removed.
        for point in &state.active {
            if !event.pointers().iter().any(|sample| sample.id == point.id()) {
                ended.push(point.id());
            }
        }

        for id in ended {
            state.remove_point(id);
        }
    }

    /// Drains one frame of touch state. Call exactly once per rendered
    /// frame: the drain advances every active point's per-frame baseline,
    /// so extra calls reset [`TouchPoint::speed`] early.
    pub fn frame_update(&self) -> TouchUpdate {
        let mut state = self.state.lock().unwrap();

        let mut added = state.added.pop_front();
        let removed = state.removed.pop_front();

        // The contact may have moved between its down event and this drain;
        // report it where it is now, not where it was queued.
        if let Some(pending) = added.as_mut() {
            if let Some(live) = state.active.iter().find(|candidate| **candidate == *pending) {
                *pending = live.clone();
            }
        }

        // Snapshot before advancing baselines so the copies still measure
        // movement since the previous frame.
        let active = state.active.clone();
        for point in &mut state.active {
            point.advance_frame();
        }

        TouchUpdate {
            added,
            removed,
            active,
        }
    }

    /// Copy of the currently active points, in contact order.
    pub fn active_points(&self) -> Vec<TouchPoint> {
        self.state.lock().unwrap().active.clone()
    }

    /// The active point with the given id, if any.
    pub fn point(&self, id: u64) -> Option<TouchPoint> {
        let state = self.state.lock().unwrap();
        state.index_of(id).map(|index| state.active[index].clone())
    }

    /// The primary point: the first contact after a pause without any
    /// active points. None once that contact lifted.
    pub fn primary_point(&self) -> Option<TouchPoint> {
        let state = self.state.lock().unwrap();
        state
            .active
            .iter()
            .find(|point| point.is_primary())
            .cloned()
    }

    /// Drops all active points and pending notifications without reporting
    /// any removals. Consumers holding claims must `flush()` themselves;
    /// this is the pause/teardown path, not a gesture.
    pub fn flush(&self) {
        let mut state = self.state.lock().unwrap();
        state.active.clear();
        state.added.clear();
        state.removed.clear();
    }
}

impl Default for TouchMapper {
    fn default() -> Self {
        Self::new()
    }
}
