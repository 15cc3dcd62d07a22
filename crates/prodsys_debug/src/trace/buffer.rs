//! Append-only buffer of trace records.
//!
//! A run's step trace is an audit log, so nothing is ever evicted.

use super::record::{TraceEvent, TraceRecord};

// =============================================================================
// Trace Buffer
// =============================================================================

/// An append-only store of trace records, oldest first.
#[derive(Clone, Debug, Default)]
pub struct TraceBuffer {
    /// The records, oldest first.
    records: Vec<TraceRecord>,
    /// Next record ID to assign.
    next_id: u64,
}

impl TraceBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event.
    ///
    /// Returns the assigned record ID.
    pub fn push(&mut self, cycle: u64, event: TraceEvent) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(TraceRecord::new(id, cycle, event));
        id
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns an iterator over all records.
    pub fn iter(&self) -> impl Iterator<Item = &TraceRecord> {
        self.records.iter()
    }

    /// Returns all records as a slice.
    #[must_use]
    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    /// Returns records matching a predicate.
    pub fn filter<F>(&self, predicate: F) -> Vec<&TraceRecord>
    where
        F: Fn(&TraceRecord) -> bool,
    {
        self.records.iter().filter(|r| predicate(r)).collect()
    }

    /// Returns records of a specific event type.
    #[must_use]
    pub fn by_event_type(&self, event_type: &str) -> Vec<&TraceRecord> {
        self.filter(|r| r.event_type() == event_type)
    }
}

// =============================================================================
// Tests
// =============================================================================
