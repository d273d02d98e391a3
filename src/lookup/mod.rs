//! Remote country lookup.
//!
//! ```text
//! GET {base_url}/alpha/{CODE}  →  JSON document  →  CountryRecord
//! ```

mod client;
mod error;

pub use client::{RestCountriesClient, TimeoutConfig};
pub use error::LookupError;

use async_trait::async_trait;

use crate::country::{CountryCode, CountryRecord};

/// Source of country records.
///
/// The event loop only talks to this trait, so tests and alternative
/// backends can stand in for the HTTP client.
#[async_trait]
pub trait CountryLookup: Send + Sync {
    /// Fetch the record for `code`. Any failure is a [`LookupError`].
    async fn lookup(&self, code: CountryCode) -> Result<CountryRecord, LookupError>;
}
