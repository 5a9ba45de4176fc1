//! Payload fixtures shared by the render and CLI integration tests.

pub mod fixtures;

pub use fixtures::*;
