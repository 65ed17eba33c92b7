//! CLI module for conduit-estimator
//!
//! Handles command-line argument parsing and configuration management.

pub mod args;
pub mod config;

pub use args::{Args, Commands, EstimateArgs, Verbosity};
pub use config::Config;
