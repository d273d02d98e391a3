use std::time::Instant;

use crate::country::CountryRecord;
use crate::lookup::LookupError;

/// Result of the remote lookup for one country.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    /// Never requested.
    #[default]
    Idle,
    Loading,
    Success(CountryRecord),
    Error(LookupError),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn record(&self) -> Option<&CountryRecord> {
        match self {
            FetchState::Success(record) => Some(record),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LookupError> {
        match self {
            FetchState::Error(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryEntry {
    pub state: FetchState,
    /// Generation of the request that owns this entry.
    pub generation: u64,
    /// Set when a lookup succeeded.
    pub fetched_at: Option<Instant>,
}

impl QueryEntry {
    pub(super) fn idle() -> Self {
        Self {
            state: FetchState::Idle,
            generation: 0,
            fetched_at: None,
        }
    }
}
