//! Event Sink Implementations
//!
//! Provides concrete implementations of DeployEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - ConsoleEventSink: localized progress lines

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::{event_to_json, JsonEventSink};
