//! Touch input: points, raw event batches and the frame-wise mapper.
//!
//! This module contains the core touch tracking types:
//!
//! - `point` holds `TouchPoint`, the record for one physical contact
//! - `event` holds the raw `PointerEvent` batch format and the winit
//!   ingestion adapter `WinitTouches`
//! - `mapper` holds `TouchMapper`, which reconciles raw events into
//!   per-frame `TouchUpdate`s

pub mod event;
pub mod mapper;
pub mod point;
