//! Client-side staging for batched inserts

use super::record::StudentRecord;

/// Staging buffer bounded by the batch size.
///
/// Holds validated records between flushes. The buffer never persists
/// anything itself; the ingest service drains it into the session
/// transaction whenever it fills, and once more at end of input.
#[derive(Debug)]
pub struct RecordBatch {
    staged: Vec<StudentRecord>,
    capacity: usize,
}

impl RecordBatch {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "batch capacity must be positive");
        Self {
            staged: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Stage one record.
    pub fn push(&mut self, record: StudentRecord) {
        self.staged.push(record);
    }

    /// True once the staged count has reached the batch size.
    pub fn is_full(&self) -> bool {
        self.staged.len() >= self.capacity
    }

    /// Empty the buffer, handing the staged records to the caller.
    pub fn take(&mut self) -> Vec<StudentRecord> {
        std::mem::take(&mut self.staged)
    }

    pub fn len(&self) -> usize {
        self.staged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }
}
