//! Processor State and Execution Loop.
//!
//! `Cpu` owns the whole simulated machine: program counter, registers,
//! main memory, the cache in front of it, the statistics, and the sink
//! that receives transfer events. Each call to `step` runs one instruction
//! through fetch, decode, and execute; `run` steps until `halt`.

/// Opcode dispatch.
mod execute;

/// Cache-routed fetches, loads, and stores.
mod memory;

use crate::common::{RegisterFile, SimError, Word};
use crate::config::Config;
use crate::core::units::cache::CacheSim;
use crate::isa::{Instruction, Opcode};
use crate::sim::trace::TransferLog;
use crate::soc::Memory;
use crate::stats::SimStats;
use log::{debug, info};

/// Where the fetch/execute loop currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// Ready to fetch the instruction at `pc`.
    Fetching,
    /// An instruction has been fetched and is being executed.
    Executing,
    /// `halt` was executed and the cache flushed. Terminal.
    Halted,
}

/// The simulated machine.
pub struct Cpu<L: TransferLog> {
    pub pc: Word,
    pub regs: RegisterFile,
    pub memory: Memory,
    pub cache: CacheSim,
    pub stats: SimStats,
    /// Receives every transfer between processor, cache, and memory.
    pub log: L,
    pub state: EngineState,
    /// Abort with `InstructionLimit` after this many instructions.
    pub max_instructions: Option<u64>,
}

impl<L: TransferLog> Cpu<L> {
    /// Builds a machine with zeroed memory and registers and an empty cache.
    ///
    /// # Returns
    ///
    /// `ConfigurationError` if the configuration does not validate.
    pub fn new(config: &Config, log: L) -> Result<Self, SimError> {
        let capacity = config.sim.memory_words;
        let cache = CacheSim::new(&config.cache, capacity)?;
        Ok(Self {
            pc: 0,
            regs: RegisterFile::new(),
            memory: Memory::new(capacity),
            cache,
            stats: SimStats::default(),
            log,
            state: EngineState::Fetching,
            max_instructions: config.sim.max_instructions,
        })
    }

    /// Copies a memory image into memory starting at address zero.
    pub fn load_image(&mut self, image: &[Word]) -> Result<(), SimError> {
        self.memory.load_image(image)
    }

    pub fn is_halted(&self) -> bool {
        self.state == EngineState::Halted
    }

    /// Executes one instruction.
    ///
    /// Does nothing once the machine has halted.
    pub fn step(&mut self) -> Result<EngineState, SimError> {
        if self.is_halted() {
            return Ok(EngineState::Halted);
        }
        if let Some(limit) = self.max_instructions {
            if self.stats.instructions >= limit {
                return Err(SimError::InstructionLimit(limit));
            }
        }

        self.state = EngineState::Fetching;
        self.stats.instructions += 1;
        let word = self.fetch()?;
        let inst = Instruction::decode(word);
        debug!("pc={} inst={:#09x} {}", self.pc, word, inst);

        if inst.opcode == Opcode::Halt {
            self.halt()?;
            return Ok(self.state);
        }

        self.state = EngineState::Executing;
        self.pc = self.pc.wrapping_add(1);
        self.execute(inst)?;

        self.state = EngineState::Fetching;
        Ok(self.state)
    }

    /// Steps until `halt` and returns the final statistics.
    pub fn run(&mut self) -> Result<&SimStats, SimError> {
        while !self.is_halted() {
            self.step()?;
        }
        Ok(&self.stats)
    }

    /// Flushes dirty lines and enters the terminal state.
    fn halt(&mut self) -> Result<(), SimError> {
        self.cache.flush_all(&mut self.memory, &mut self.log)?;
        self.stats.writebacks = self.cache.writebacks;
        self.stats.evictions = self.cache.evictions;
        self.state = EngineState::Halted;
        info!(
            "halted at pc={} after {} instructions ({} hits, {} misses)",
            self.pc, self.stats.instructions, self.stats.hits, self.stats.misses
        );
        Ok(())
    }

    /// Prints the program counter, the loaded part of memory, and the registers.
    pub fn dump_state(&self) {
        println!("\n@@@\nstate:");
        println!("\tpc {}", self.pc);
        println!("\tmemory:");
        let mem = self.memory.as_slice();
        for (i, val) in mem.iter().take(self.memory.loaded_len()).enumerate() {
            println!("\t\tmem[{}]={}", i, val);
        }
        println!("\tregisters:");
        self.regs.dump();
        println!("end state");
    }
}
