//! Raw pointer event batches and the winit ingestion adapter.
//!
//! The mapper consumes [`PointerEvent`]s: one batch per hardware event,
//! carrying a sample for every contact currently on the surface plus a
//! single action (down/up/move/cancel) tagged to one of those samples.
//! Platforms that deliver batched events map onto this directly; winit
//! reports one contact per event, so [`WinitTouches`] rebuilds full batches
//! from winit's stream.

use cgmath::Vector2;
use winit::event::{MouseButton, TouchPhase, WindowEvent};

/// The action carried by one event batch, tagged to a single sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    /// First contact after a period with no active points.
    Down,
    /// An additional contact while others are already down.
    PointerDown,
    /// Position change only; no contact started or ended.
    Move,
    /// The last remaining contact lifted.
    Up,
    /// One of several contacts lifted.
    PointerUp,
    /// The system aborted the gesture; every contact in the batch ends.
    Cancel,
}

/// Position sample for one contact within a batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub id: u64,
    pub position: Vector2<f32>,
}

/// One raw input event as the mapper expects it.
///
/// The batch lists every contact currently on the surface; contacts that a
/// batch omits are treated as ended by the mapper (the platform stopped
/// reporting them). `action_index` points at the sample the action applies
/// to; an index outside the batch degrades the event to position updates
/// only, which is the defensive behavior for malformed input.
#[derive(Debug, Clone)]
pub struct PointerEvent {
    action: PointerAction,
    action_index: usize,
    pointers: Vec<PointerSample>,
}

impl PointerEvent {
    pub fn new(action: PointerAction, action_index: usize, pointers: Vec<PointerSample>) -> Self {
        Self {
            action,
            action_index,
            pointers,
        }
    }

    pub fn action(&self) -> PointerAction {
        self.action
    }

    pub fn action_index(&self) -> usize {
        self.action_index
    }

    pub fn pointers(&self) -> &[PointerSample] {
        &self.pointers
    }
}

/// Synthetic contact id used when emulating touch input with the mouse.
/// Chosen from the top of the id space so it cannot collide with platform
/// touch ids, which count up from zero.
pub const MOUSE_CONTACT_ID: u64 = u64::MAX;

/// Rebuilds full contact batches from winit's one-contact-per-event stream.
///
/// winit reports each finger separately, while the mapper requires every
/// batch to enumerate all live contacts (a missing contact means "ended").
/// The adapter keeps the last sample per finger and emits a complete batch
/// for every incoming event. It lives on the event thread next to the winit
/// loop; only the resulting [`PointerEvent`]s cross over to the mapper.
///
/// With mouse emulation enabled, the left button acts as one synthetic
/// contact ([`MOUSE_CONTACT_ID`]) so desktop builds can exercise touch
/// consumers without a touchscreen.
#[derive(Debug)]
pub struct WinitTouches {
    contacts: Vec<PointerSample>,
    emulate_mouse: bool,
    cursor: Vector2<f32>,
}

impl WinitTouches {
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
            emulate_mouse: false,
            cursor: Vector2::new(0.0, 0.0),
        }
    }

    /// Enables treating the left mouse button as a synthetic contact.
    pub fn with_mouse_emulation(mut self) -> Self {
        self.emulate_mouse = true;
        self
    }

    /// Feed one winit window event. Returns a batch whenever the event
    /// changed touch state; all other events pass through untouched.
    pub fn handle(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::Touch(touch) => self.touch(
                touch.id,
                touch.phase,
                Vector2::new(touch.location.x as f32, touch.location.y as f32),
            ),
            WindowEvent::CursorMoved { position, .. } if self.emulate_mouse => {
                self.cursor_moved(Vector2::new(position.x as f32, position.y as f32))
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } if self.emulate_mouse => self.mouse_input(state.is_pressed()),
            _ => None,
        }
    }

    /// One contact changed phase. Split out from [`WinitTouches::handle`] so
    /// behavior is drivable without constructing winit event values.
    pub fn touch(
        &mut self,
        id: u64,
        phase: TouchPhase,
        position: Vector2<f32>,
    ) -> Option<PointerEvent> {
        match phase {
            TouchPhase::Started => {
                if self.index_of(id).is_some() {
                    log::debug!("contact {} started twice, treating as move", id);
                    return self.moved(id, position);
                }
                self.contacts.push(PointerSample { id, position });
                let action = if self.contacts.len() == 1 {
                    PointerAction::Down
                } else {
                    PointerAction::PointerDown
                };
                Some(self.batch(action, self.contacts.len() - 1))
            }
            TouchPhase::Moved => self.moved(id, position),
            TouchPhase::Ended => {
                let index = match self.index_of(id) {
                    Some(index) => index,
                    None => {
                        log::debug!("ignoring end of unknown contact {}", id);
                        return None;
                    }
                };
                self.contacts[index].position = position;
                let action = if self.contacts.len() == 1 {
                    PointerAction::Up
                } else {
                    PointerAction::PointerUp
                };
                let event = self.batch(action, index);
                self.contacts.remove(index);
                Some(event)
            }
            TouchPhase::Cancelled => {
                if self.contacts.is_empty() {
                    return None;
                }
                let index = match self.index_of(id) {
                    Some(index) => {
                        self.contacts[index].position = position;
                        index
                    }
                    None => {
                        log::debug!("cancel for unknown contact {}, aborting gesture anyway", id);
                        0
                    }
                };
                // OS gesture takeover ends the interaction as a whole, not
                // just the contact that carried the cancel.
                let event = self.batch(PointerAction::Cancel, index);
                self.contacts.clear();
                Some(event)
            }
        }
    }

    /// Cursor motion while emulating the mouse as a contact.
    pub fn cursor_moved(&mut self, position: Vector2<f32>) -> Option<PointerEvent> {
        self.cursor = position;
        if self.index_of(MOUSE_CONTACT_ID).is_some() {
            self.moved(MOUSE_CONTACT_ID, position)
        } else {
            None
        }
    }

    /// Left mouse button state change while emulating the mouse.
    pub fn mouse_input(&mut self, pressed: bool) -> Option<PointerEvent> {
        if pressed {
            if self.index_of(MOUSE_CONTACT_ID).is_some() {
                return None;
            }
            self.touch(MOUSE_CONTACT_ID, TouchPhase::Started, self.cursor)
        } else {
            self.touch(MOUSE_CONTACT_ID, TouchPhase::Ended, self.cursor)
        }
    }

    fn moved(&mut self, id: u64, position: Vector2<f32>) -> Option<PointerEvent> {
        let index = match self.index_of(id) {
            Some(index) => index,
            None => {
                log::debug!("ignoring move of unknown contact {}", id);
                return None;
            }
        };
        self.contacts[index].position = position;
        Some(self.batch(PointerAction::Move, index))
    }

    fn index_of(&self, id: u64) -> Option<usize> {
        self.contacts.iter().position(|sample| sample.id == id)
    }

    fn batch(&self, action: PointerAction, action_index: usize) -> PointerEvent {
        PointerEvent::new(action, action_index, self.contacts.clone())
    }
}

impl Default for WinitTouches {
    fn default() -> Self {
        Self::new()
    }
}
