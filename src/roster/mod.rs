//! Student roster ingest
//!
//! Batched, validated inserts into the `students` table. One session is one
//! transaction: staged batches are an efficiency mechanism, durability comes
//! only from the final commit.

pub mod batch;
pub mod error;
pub mod record;
pub mod repository;
pub mod service;

pub use batch::RecordBatch;
pub use error::{IngestError, ValidationError};
pub use record::{RawStudent, StudentRecord};
pub use repository::{RosterRepository, Student};
pub use service::{DEFAULT_BATCH_SIZE, IngestService};
