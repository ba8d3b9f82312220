//! Data Transfer Log.
//!
//! Every movement of data between the processor, the cache, and memory is
//! reported as a `TransferEvent`. Events are handed to a `TransferLog`
//! sink in the exact order the operations happen, so a miss always shows
//! the memory-to-cache fill before the word reaches the processor, and a
//! dirty eviction shows the write-back before the discard.

use std::fmt;

/// Source and destination of a transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferKind {
    /// A word read from the cache by the processor.
    CacheToProcessor,
    /// A word written into the cache by the processor.
    ProcessorToCache,
    /// A block filled from memory.
    MemoryToCache,
    /// A dirty block written back to memory.
    CacheToMemory,
    /// A block evicted and thrown away.
    CacheToNowhere,
}

impl fmt::Display for TransferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransferKind::CacheToProcessor => "from the cache to the processor",
            TransferKind::ProcessorToCache => "from the processor to the cache",
            TransferKind::MemoryToCache => "from the memory to the cache",
            TransferKind::CacheToMemory => "from the cache to the memory",
            TransferKind::CacheToNowhere => "from the cache to nowhere",
        };
        f.write_str(s)
    }
}

/// A single transfer of `size` words starting at word address `start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransferEvent {
    pub start: usize,
    pub size: usize,
    pub kind: TransferKind,
}

impl TransferEvent {
    pub fn new(start: usize, size: usize, kind: TransferKind) -> Self {
        Self { start, size, kind }
    }

    /// Last word address covered by the transfer.
    pub fn end(&self) -> usize {
        (self.start + self.size).saturating_sub(1)
    }
}

impl fmt::Display for TransferEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "transferring word [{}-{}] {}",
            self.start,
            self.end(),
            self.kind
        )
    }
}

/// Sink for transfer events.
pub trait TransferLog {
    /// Receives one event.
    fn record(&mut self, event: TransferEvent);

    /// Builds and records an event.
    fn transfer(&mut self, start: usize, size: usize, kind: TransferKind) {
        self.record(TransferEvent::new(start, size, kind));
    }
}

impl<T: TransferLog + ?Sized> TransferLog for Box<T> {
    fn record(&mut self, event: TransferEvent) {
        (**self).record(event);
    }
}

/// Prints each event to stdout as it happens.
#[derive(Default)]
pub struct PrintLog;

impl TransferLog for PrintLog {
    fn record(&mut self, event: TransferEvent) {
        println!("{}", event);
    }
}

/// Keeps every event in memory for later inspection.
#[derive(Default, Debug)]
pub struct RecordingLog {
    pub events: Vec<TransferEvent>,
}

impl RecordingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded kinds in order.
    pub fn kinds(&self) -> Vec<TransferKind> {
        self.events.iter().map(|e| e.kind).collect()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TransferLog for RecordingLog {
    fn record(&mut self, event: TransferEvent) {
        self.events.push(event);
    }
}

/// Discards every event.
#[derive(Default)]
pub struct NullLog;

impl TransferLog for NullLog {
    fn record(&mut self, _event: TransferEvent) {}
}
