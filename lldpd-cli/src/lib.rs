//! CLI interface for lldpd-rs
//!
//! This crate provides the command-line interface for the `lldpd` binary,
//! including argument parsing and process detachment.

pub mod args;
pub mod daemon;

pub use args::Cli;
