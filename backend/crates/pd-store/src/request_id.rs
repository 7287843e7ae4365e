//! Request identifier allocation.

use chrono::{Datelike, NaiveDate};

/// Issues `RFQ-<year>-<n>` identifiers.
///
/// `n` starts at `seed_len + offset` and only ever grows, so deleting a
/// record never lets a later create reuse its number. Numbers already held
/// by an existing record are skipped.
#[derive(Debug, Clone)]
pub struct RequestIdSequence {
    next: u64,
}

impl RequestIdSequence {
    pub fn new(seed_len: usize, offset: u64) -> Self {
        Self {
            next: offset.saturating_add(seed_len as u64),
        }
    }

    pub fn format(year: i32, number: u64) -> String {
        format!("RFQ-{year}-{number}")
    }

    /// Allocate the next free id for `date`'s year.
    pub fn issue<F>(&mut self, date: NaiveDate, is_taken: F) -> String
    where
        F: Fn(&str) -> bool,
    {
        loop {
            let id = Self::format(date.year(), self.next);
            self.next = self.next.saturating_add(1);
            if !is_taken(&id) {
                return id;
            }
            log::warn!("Request id {} already in use, skipping", id);
        }
    }
}
