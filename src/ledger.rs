//! Bounded history of ranking timings.

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Serialize, Serializer};
use time::OffsetDateTime;

use crate::core::{Algorithm, Direction};

/// Number of entries the ledger retains.
pub const LEDGER_CAPACITY: usize = 3;

/// Timing of one completed ranking.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PerformanceEntry {
    pub algorithm: Algorithm,
    pub direction: Direction,
    pub size: usize,
    /// Sort and truncate only; fetch time is never included.
    #[serde(rename = "duration_secs", serialize_with = "as_secs_f64")]
    pub duration: Duration,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl PerformanceEntry {
    pub fn new(algorithm: Algorithm, direction: Direction, size: usize, duration: Duration) -> Self {
        Self {
            algorithm,
            direction,
            size,
            duration,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}

fn as_secs_f64<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

/// Most-recent-first history, evicting by recency only.
#[derive(Clone, Debug, Default)]
pub struct PerformanceLedger {
    entries: VecDeque<PerformanceEntry>,
}

impl PerformanceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends `entry` and drops whatever falls past the capacity.
    pub fn record(&mut self, entry: PerformanceEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(LEDGER_CAPACITY);
    }

    /// Entries, newest first.
    pub fn list(&self) -> Vec<PerformanceEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PerformanceEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
