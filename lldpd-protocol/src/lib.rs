//! LLDP protocol implementation for lldpd-rs
//!
//! ### LLDP (Link Layer Discovery Protocol)
//! Send-only implementation: attribute encoding, LLDPDU assembly and the
//! periodic announcement loop.
//! See [`lldp`] module for details.

pub mod lldp;

pub use lldp::{Announcer, RunOutcome};
