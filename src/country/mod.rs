//! Country identifiers and the opaque records fetched for them.

mod code;
mod record;

pub use code::{CountryCode, UnknownCountry};
pub use record::CountryRecord;
