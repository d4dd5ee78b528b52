//! touch-flow
//!
//! A lightweight, cross-platform input mapping library for games, focused on
//! native and WASM compatibility. Raw pointer and key events arrive whenever
//! the host toolkit delivers them; game logic wants a stable view once per
//! rendered frame. This crate converts the interleaved event stream into
//! frame-scoped snapshots that are safe to read from the render thread while
//! events keep arriving on the UI thread.
//!
//! High-level modules
//! - `touch`: the touch point data model, raw event batches and the mapper
//!   that reconciles them into per-frame updates
//! - `touchable`: frame-wise consumers (buttons, tap regions, gesture panes)
//!   and a collection for dispatching one update to many of them
//! - `region`: hit-testing capability used by the consumers
//! - `key`: frame-wise keyboard state, companion to the touch mapper
//!

pub mod key;
pub mod region;
pub mod touch;
pub mod touchable;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::Vector2;
pub use winit::event::ElementState;
pub use winit::event::TouchPhase;
pub use winit::event::WindowEvent;
pub use winit::keyboard::KeyCode;
