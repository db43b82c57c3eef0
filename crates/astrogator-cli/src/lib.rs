//! Astrogator CLI library.
//!
//! This crate provides command-line interface utilities for the astrogator
//! route planner, including sector file loading and output formatting.

pub mod output;
pub mod sector_file;
