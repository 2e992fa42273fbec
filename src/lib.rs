//! campus_ledger - Batched roster ingest and transactional account transfers
//!
//! Two single-threaded workflows against one PostgreSQL database:
//!
//! # Modules
//!
//! - [`config`] - YAML application config (database credentials, logging)
//! - [`logging`] - tracing subscriber setup
//! - [`db`] - connection pool and health check
//! - [`input`] - console and in-memory record sources
//! - [`roster`] - validated student records, batched-insert sessions
//! - [`ledger`] - debit/credit transfers with a balance precondition

pub mod config;
pub mod db;
pub mod input;
pub mod ledger;
pub mod logging;
pub mod roster;

// Convenient re-exports at crate root
pub use config::{AppConfig, DatabaseConfig};
pub use db::Database;
pub use input::{ConsoleSource, RawTransfer, RecordSource, VecSource};
pub use ledger::{InputError, TransferError, TransferRequest, TransferService};
pub use roster::{
    IngestError, IngestService, RawStudent, RosterRepository, StudentRecord, ValidationError,
};
