//! Test module organization.
//!
//! This module organizes all integration tests for the cache simulator.



/// Shared types, statistics, and transfer event tests.
mod common_tests;



/// Address decoder tests.
mod decoder_tests;


/// Memory image loader tests.
mod loader_tests;
