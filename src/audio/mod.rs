//! Audio system
//!
//! Speaks battle announcements through the platform text-to-speech command.

pub mod announcer;

pub use announcer::{Announcer, DEFAULT_SPEECH_COMMAND};
