//! Batch ingest session

use super::batch::RecordBatch;
use super::error::IngestError;
use super::record::StudentRecord;
use crate::db::Database;
use crate::input::RecordSource;
use sqlx::{Postgres, Transaction};

/// Records staged between flushes.
pub const DEFAULT_BATCH_SIZE: usize = 50;

const INSERT_STUDENT: &str = "INSERT INTO students (name, age, score) VALUES ($1, $2, $3)";

/// Runs one batched-insert session against the `students` table.
pub struct IngestService {
    batch_size: usize,
}

impl Default for IngestService {
    fn default() -> Self {
        Self::new()
    }
}

impl IngestService {
    pub fn new() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Override the flush threshold. Intended for tests.
    pub fn with_batch_size(batch_size: usize) -> Self {
        Self { batch_size }
    }

    /// Ingest every record the source yields, returning the staged count.
    ///
    /// Invalid records are skipped with a warning and the source is asked
    /// for the next one. Staged records flush per `batch_size`, with a final
    /// flush for the remainder, then exactly one commit. Any storage error
    /// rolls back the whole session, flushed batches included: the returned
    /// count matches visible rows only because the commit succeeded.
    pub async fn run<S: RecordSource>(
        &self,
        source: &mut S,
        db: &Database,
    ) -> Result<u64, IngestError> {
        let mut tx = db.pool().begin().await?;
        let mut batch = RecordBatch::new(self.batch_size);
        let mut staged_total: u64 = 0;

        while let Some(raw) = source.next_record() {
            let record = match StudentRecord::parse(&raw) {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!("Skipping record: {}", e);
                    continue;
                }
            };

            batch.push(record);
            staged_total += 1;

            if batch.is_full() {
                flush(&mut tx, batch.take()).await?;
            }
        }

        // Leftover batch of 0-49 records
        flush(&mut tx, batch.take()).await?;
        tx.commit().await?;

        tracing::info!("Ingest session committed: {} records", staged_total);
        Ok(staged_total)
    }
}

/// Execute the staged records inside the session transaction.
///
/// A statement reporting zero affected rows is a per-item warning, not a
/// session failure. A statement error propagates and rolls back everything
/// flushed so far.
async fn flush(
    tx: &mut Transaction<'_, Postgres>,
    staged: Vec<StudentRecord>,
) -> Result<(), IngestError> {
    let size = staged.len();

    for (i, record) in staged.iter().enumerate() {
        let result = sqlx::query(INSERT_STUDENT)
            .bind(record.name())
            .bind(record.age())
            .bind(record.score())
            .execute(&mut **tx)
            .await?;

        if result.rows_affected() == 0 {
            tracing::warn!("Insert {} of {} affected no rows", i + 1, size);
        }
    }

    tracing::info!("Flushed batch of {} records", size);
    Ok(())
}
