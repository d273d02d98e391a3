//! Keyed cache of lookup results.
//!
//! One [`QueryEntry`] per [`CountryCode`](crate::country::CountryCode).
//! Requests are tagged with a generation so a response can only land in
//! the entry that asked for it, and only while that request is current.

mod cache;
mod state;

pub use cache::{FetchTicket, QueryCache, Resolution};
pub use state::{FetchState, QueryEntry};
