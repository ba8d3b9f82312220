//! Tests for shared types, statistics, and transfer events.

use cache_simulator::common::*;
use cache_simulator::sim::{NullLog, RecordingLog, TransferEvent, TransferKind, TransferLog};
use cache_simulator::stats::SimStats;

/// Tests access type display names.
#[test]
fn test_access_type_display() {
    assert_eq!(AccessType::Fetch.to_string(), "fetch");
    assert_eq!(AccessType::Read.to_string(), "load");
    assert_eq!(AccessType::Write.to_string(), "store");
}

/// Tests error messages carry their context.
#[test]
fn test_sim_error_display() {
    let err = SimError::AddressOutOfRange {
        addr: -1,
        access: AccessType::Read,
    };
    assert_eq!(err.to_string(), "AddressOutOfRange: load at address -1");

    let err = SimError::config("bad geometry");
    assert_eq!(err.to_string(), "ConfigurationError: bad geometry");

    let err = SimError::InstructionLimit(10);
    assert!(err.to_string().contains("10"));
}

/// Tests register reads and writes.
#[test]
fn test_register_file() {
    let mut regs = RegisterFile::new();
    assert_eq!(regs.as_slice(), &[0; NUM_REGS]);

    regs.write(0, 5);
    regs.write(7, -3);
    assert_eq!(regs.read(0), 5);
    assert_eq!(regs.read(7), -3);

    // Register 0 is an ordinary register.
    regs.write(0, 9);
    assert_eq!(regs.read(0), 9);
}

/// Tests transfer event formatting.
#[test]
fn test_transfer_event_display() {
    let event = TransferEvent::new(8, 4, TransferKind::CacheToMemory);
    assert_eq!(
        event.to_string(),
        "transferring word [8-11] from the cache to the memory"
    );

    let event = TransferEvent::new(5, 1, TransferKind::CacheToProcessor);
    assert_eq!(event.end(), 5);
    assert_eq!(
        event.to_string(),
        "transferring word [5-5] from the cache to the processor"
    );

    assert_eq!(
        TransferKind::CacheToNowhere.to_string(),
        "from the cache to nowhere"
    );
}

/// Tests the recording and boxed sinks.
#[test]
fn test_transfer_sinks() {
    let mut log = RecordingLog::new();
    log.transfer(0, 4, TransferKind::MemoryToCache);
    log.transfer(2, 1, TransferKind::ProcessorToCache);
    assert_eq!(
        log.kinds(),
        vec![TransferKind::MemoryToCache, TransferKind::ProcessorToCache]
    );
    log.clear();
    assert!(log.events.is_empty());

    let mut boxed: Box<dyn TransferLog> = Box::new(NullLog);
    boxed.transfer(0, 4, TransferKind::MemoryToCache);
}

/// Tests derived statistics.
#[test]
fn test_stats_hit_rate() {
    let stats = SimStats::default();
    assert_eq!(stats.accesses(), 0);
    assert_eq!(stats.hit_rate(), 0.0);

    let stats = SimStats {
        hits: 3,
        misses: 1,
        ..Default::default()
    };
    assert_eq!(stats.accesses(), 4);
    assert!((stats.hit_rate() - 0.75).abs() < 1e-9);
}

/// Tests JSON export of statistics.
#[test]
fn test_stats_json() {
    let stats = SimStats {
        hits: 12,
        misses: 4,
        instructions: 9,
        ..Default::default()
    };
    let json = stats.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["hits"], 12);
    assert_eq!(value["misses"], 4);
    assert_eq!(value["instructions"], 9);
}

/// Tests that the summary block reports the counters.
#[test]
fn test_stats_summary() {
    let stats = SimStats {
        hits: 3,
        misses: 1,
        instructions: 4,
        loads: 1,
        stores: 2,
        writebacks: 5,
        evictions: 6,
    };
    let summary = stats.to_string();
    assert!(summary.contains("CACHE SIMULATION STATISTICS"));
    assert!(summary.contains("sim_insts                4"));
    assert!(summary.contains("miss_rate: 25.00%"));
    assert!(summary.contains("writebacks             5"));
    assert!(summary.contains("evictions              6"));
}

/// Tests writing statistics to a JSON file.
#[test]
fn test_stats_write_json() {
    let stats = SimStats {
        hits: 7,
        ..Default::default()
    };
    let path = std::env::temp_dir().join(format!("cachesim-stats-{}.json", std::process::id()));
    stats.write_json(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["hits"], 7);
}

/// Tests that an unwritable JSON destination is an error.
#[test]
fn test_stats_write_json_unwritable() {
    let path = std::path::Path::new("/nonexistent_dir/stats.json");
    let err = SimStats::default().write_json(path).unwrap_err();
    match &err {
        SimError::Output { path, .. } => assert_eq!(path, "/nonexistent_dir/stats.json"),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().starts_with("OutputError: '/nonexistent_dir/stats.json'"));
}
