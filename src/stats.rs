//! Simulation statistics collection and reporting.
//!
//! Tracks cache hits and misses together with a breakdown of the work the
//! processor did. The hit and miss counters only ever grow, and their sum
//! is the number of cache-routed accesses (fetches, loads, and stores).

use crate::common::SimError;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Simulation statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    pub hits: u64,
    pub misses: u64,

    /// Instructions fetched, including the final `halt`.
    pub instructions: u64,
    pub loads: u64,
    pub stores: u64,

    pub writebacks: u64,
    pub evictions: u64,
}

impl SimStats {
    /// Total cache-routed accesses.
    pub fn accesses(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of accesses that hit, or 0 when nothing was accessed.
    pub fn hit_rate(&self) -> f64 {
        let total = self.accesses();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Serializes the statistics as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Writes the JSON form of the statistics to `path`.
    pub fn write_json(&self, path: &Path) -> Result<(), SimError> {
        let output_err = |reason: String| SimError::Output {
            path: path.display().to_string(),
            reason,
        };
        let json = self.to_json().map_err(|e| output_err(e.to_string()))?;
        fs::write(path, json).map_err(|e| output_err(e.to_string()))
    }

    /// Prints the final hit/miss report.
    pub fn print(&self) {
        println!("Hits: {}", self.hits);
        println!("Misses: {}", self.misses);
    }

    /// Prints the longer summary block.
    pub fn print_summary(&self) {
        print!("{}", self);
    }
}

/// The summary block: instruction mix, cache accesses, and eviction traffic.
impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(58);
        let miss_rate = if self.accesses() > 0 {
            100.0 - self.hit_rate() * 100.0
        } else {
            0.0
        };
        writeln!(f, "{}", rule)?;
        writeln!(f, "CACHE SIMULATION STATISTICS")?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "sim_insts                {}", self.instructions)?;
        writeln!(f, "  op.load                {}", self.loads)?;
        writeln!(f, "  op.store               {}", self.stores)?;
        writeln!(f, "{}", "-".repeat(58))?;
        writeln!(
            f,
            "  accesses: {:<10} | hits: {:<10} | miss_rate: {:.2}%",
            self.accesses(),
            self.hits,
            miss_rate
        )?;
        writeln!(f, "  writebacks             {}", self.writebacks)?;
        writeln!(f, "  evictions              {}", self.evictions)?;
        writeln!(f, "{}", rule)
    }
}
