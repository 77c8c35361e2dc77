//! lldpd-rs Core Library
//!
//! This crate provides the fundamental types, error handling, configuration
//! and the link collaborator traits shared by the lldpd-rs workspace.

pub mod config;
pub mod error;
pub mod link;
pub mod types;

// Re-export commonly used types
pub use config::{AnnouncementConfig, DEFAULT_PERIOD_SECS, MAX_INTERFACES};
pub use error::{EncodeError, Error, Result};
pub use link::{InterfaceFacts, LinkContext, LinkProvider, NameResolution};
pub use types::*;
