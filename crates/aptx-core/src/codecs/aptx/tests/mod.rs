//! aptX Test Modules
//!
//! This module organizes the codec-level test suite. Stage-level unit tests
//! live next to the stages themselves.

pub mod utils;

mod basic_tests;
mod property_tests;
mod sync_tests;
