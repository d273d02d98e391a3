use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::country::{CountryCode, CountryRecord};
use crate::lookup::LookupError;
use crate::query::state::{FetchState, QueryEntry};

static IDLE: FetchState = FetchState::Idle;

/// Request the caller must issue after [`QueryCache::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub code: CountryCode,
    pub generation: u64,
}

/// Outcome of feeding a response back into the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// A newer request for the same key is in flight, or the key was invalidated.
    Stale,
}

pub struct QueryCache {
    entries: HashMap<CountryCode, QueryEntry>,
    stale_after: Duration,
    next_generation: u64,
}

impl QueryCache {
    pub fn new(stale_after: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stale_after,
            next_generation: 1,
        }
    }

    pub fn state(&self, code: CountryCode) -> &FetchState {
        self.entries
            .get(&code)
            .map(|entry| &entry.state)
            .unwrap_or(&IDLE)
    }

    pub fn entry(&self, code: CountryCode) -> Option<&QueryEntry> {
        self.entries.get(&code)
    }

    /// Decide whether `code` needs a request.
    ///
    /// Returns a ticket (and moves the entry to `Loading`) unless a request
    /// is already in flight or a fresh record is cached.
    pub fn begin(&mut self, code: CountryCode, now: Instant) -> Option<FetchTicket> {
        let stale_after = self.stale_after;
        let entry = self.entries.entry(code).or_insert_with(QueryEntry::idle);

        match &entry.state {
            FetchState::Loading => return None,
            FetchState::Success(_) => {
                let fresh = entry
                    .fetched_at
                    .is_some_and(|at| now.saturating_duration_since(at) < stale_after);
                if fresh {
                    return None;
                }
            }
            FetchState::Idle | FetchState::Error(_) => {}
        }

        let generation = self.next_generation;
        self.next_generation += 1;
        entry.state = FetchState::Loading;
        entry.generation = generation;
        Some(FetchTicket { code, generation })
    }

    /// Store the result of the request identified by `code` and `generation`.
    pub fn resolve(
        &mut self,
        code: CountryCode,
        generation: u64,
        result: Result<CountryRecord, LookupError>,
        now: Instant,
    ) -> Resolution {
        let Some(entry) = self.entries.get_mut(&code) else {
            return Resolution::Stale;
        };
        if entry.generation != generation || !entry.state.is_loading() {
            return Resolution::Stale;
        }

        match result {
            Ok(record) => {
                entry.state = FetchState::Success(record);
                entry.fetched_at = Some(now);
            }
            Err(err) => {
                entry.state = FetchState::Error(err);
                entry.fetched_at = None;
            }
        }
        Resolution::Applied
    }

    /// Force the next [`QueryCache::begin`] for `code` to issue a request.
    ///
    /// A response still in flight for `code` is dropped when it arrives.
    pub fn invalidate(&mut self, code: CountryCode) {
        if let Some(entry) = self.entries.get_mut(&code) {
            entry.state = FetchState::Idle;
            entry.generation = 0;
            entry.fetched_at = None;
        }
    }
}
