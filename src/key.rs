//! Frame-wise keyboard state, companion to the touch mapper.
//!
//! Key events arrive whenever the host delivers them; game logic asks
//! "was this key hit since last frame" once per frame. [`KeyMapper`]
//! collects raw transitions and publishes a frame-stable view on each
//! [`KeyMapper::frame_update`], under the same one-mutex, two-thread
//! contract as the touch mapper.

use std::collections::HashSet;
use std::mem;
use std::sync::Mutex;

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

#[derive(Debug, Default)]
struct KeyState {
    down: HashSet<KeyCode>,
    hits: Vec<KeyCode>,
    releases: Vec<KeyCode>,
    frame_down: HashSet<KeyCode>,
    frame_hits: Vec<KeyCode>,
    frame_releases: Vec<KeyCode>,
}

/// Maps raw key events to per-frame pressed/hit/released queries.
///
/// Queries answer against the state published by the last
/// [`KeyMapper::frame_update`], so every consumer within one frame sees the
/// same answers no matter how events interleave. Keys are identified by
/// physical position ([`KeyCode`]), the usual choice for game controls.
#[derive(Debug, Default)]
pub struct KeyMapper {
    state: Mutex<KeyState>,
}

impl KeyMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one winit key event. OS auto-repeat is not a new press and is
    /// ignored; keys without a known physical position are dropped.
    pub fn map(&self, event: &KeyEvent) {
        let PhysicalKey::Code(code) = event.physical_key else {
            log::debug!("ignoring key without physical code: {:?}", event.physical_key);
            return;
        };
        if event.repeat {
            return;
        }
        match event.state {
            ElementState::Pressed => self.press(code),
            ElementState::Released => self.release(code),
        }
    }

    /// Records a key press. Pressing an already-down key is a no-op.
    pub fn press(&self, code: KeyCode) {
        let mut state = self.state.lock().unwrap();
        if state.down.insert(code) {
            state.hits.push(code);
        }
    }

    /// Records a key release. Releasing an up key is a no-op.
    pub fn release(&self, code: KeyCode) {
        let mut state = self.state.lock().unwrap();
        if state.down.remove(&code) {
            state.releases.push(code);
        }
    }

    /// Publishes the transitions collected since the previous call. Call
    /// once per rendered frame, before consumers query.
    pub fn frame_update(&self) {
        let mut state = self.state.lock().unwrap();
        state.frame_down = state.down.clone();
        state.frame_hits = mem::take(&mut state.hits);
        state.frame_releases = mem::take(&mut state.releases);
    }

    /// True while the key is held down, as of the last frame boundary.
    pub fn key_down(&self, code: KeyCode) -> bool {
        self.state.lock().unwrap().frame_down.contains(&code)
    }

    /// True for exactly the one frame in which the press was published.
    pub fn key_hit(&self, code: KeyCode) -> bool {
        self.state.lock().unwrap().frame_hits.contains(&code)
    }

    /// True for exactly the one frame in which the release was published.
    pub fn key_released(&self, code: KeyCode) -> bool {
        self.state.lock().unwrap().frame_releases.contains(&code)
    }

    /// Clears all pressed keys and pending transitions without reporting
    /// releases. The pause/teardown path.
    pub fn flush(&self) {
        let mut state = self.state.lock().unwrap();
        *state = KeyState::default();
    }
}
