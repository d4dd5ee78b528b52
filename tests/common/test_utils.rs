#![allow(dead_code)]

use touch_flow::Vector2;
use touch_flow::touch::event::{PointerAction, PointerEvent, PointerSample};

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn sample(id: u64, x: f32, y: f32) -> PointerSample {
    PointerSample {
        id,
        position: Vector2::new(x, y),
    }
}

/// First contact touching down: a single-sample `Down` batch.
pub(crate) fn down(id: u64, x: f32, y: f32) -> PointerEvent {
    PointerEvent::new(PointerAction::Down, 0, vec![sample(id, x, y)])
}

/// The only remaining contact moving.
pub(crate) fn move_one(id: u64, x: f32, y: f32) -> PointerEvent {
    PointerEvent::new(PointerAction::Move, 0, vec![sample(id, x, y)])
}

/// The only remaining contact lifting.
pub(crate) fn up_one(id: u64, x: f32, y: f32) -> PointerEvent {
    PointerEvent::new(PointerAction::Up, 0, vec![sample(id, x, y)])
}
