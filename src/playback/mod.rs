//! The playback controller state machine.

mod controller;

pub use controller::PathPlayback;
