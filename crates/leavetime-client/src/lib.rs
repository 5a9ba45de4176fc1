//! Status fetcher: one bounded-timeout GET against the commute server.
//!
//! Exactly one attempt per render cycle. Retry and refresh scheduling belong
//! to the host, not here.

pub mod fetch;

pub use fetch::{DEFAULT_TIMEOUT, StatusClient, parse_status_body};
