//! Simulation harness support: image loading and transfer logging.

/// Memory image loading.
pub mod loader;

/// Transfer event records and sinks.
pub mod trace;

pub use trace::{NullLog, PrintLog, RecordingLog, TransferEvent, TransferKind, TransferLog};
