//! Announcement configuration
//!
//! An [`AnnouncementConfig`] is built once at startup and only borrowed
//! afterwards. [`AnnouncementConfig::new`] is the single place where startup
//! input is validated.

use crate::{Error, Result};
use std::time::Duration;
use tracing::warn;

/// Maximum number of interfaces announced by one process
pub const MAX_INTERFACES: usize = 6;

/// Default period between announcement rounds (seconds)
pub const DEFAULT_PERIOD_SECS: u32 = 60;

/// TTL advertised to neighbors, as a multiple of the announcement period
pub const TTL_MULTIPLIER: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementConfig {
    interfaces: Vec<String>,
    period_secs: u32,
    run_once: bool,
}

impl AnnouncementConfig {
    /// Validate startup input into a configuration.
    ///
    /// Repeated interface names keep their first position. A non-positive
    /// period is replaced by [`DEFAULT_PERIOD_SECS`] with a warning. An empty
    /// interface list, or more than [`MAX_INTERFACES`] distinct names, is a
    /// configuration error.
    pub fn new<I, S>(interfaces: I, period_secs: i64, run_once: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = Vec::new();
        for name in interfaces {
            let name = name.into();
            if name.is_empty() {
                return Err(Error::config("Empty interface name"));
            }
            if names.contains(&name) {
                warn!(interface = %name, "Interface given more than once, ignoring repeat");
                continue;
            }
            names.push(name);
        }

        if names.is_empty() {
            return Err(Error::config("No devices to use"));
        }
        if names.len() > MAX_INTERFACES {
            return Err(Error::config(format!(
                "Too many interfaces: {} given, at most {} supported",
                names.len(),
                MAX_INTERFACES
            )));
        }

        let period_secs = match u32::try_from(period_secs) {
            Ok(secs) if secs > 0 => secs,
            _ => {
                warn!(
                    requested = period_secs,
                    default = DEFAULT_PERIOD_SECS,
                    "Illegal timeout value, reverting to default"
                );
                DEFAULT_PERIOD_SECS
            }
        };

        Ok(Self {
            interfaces: names,
            period_secs,
            run_once,
        })
    }

    /// Interfaces in announcement order
    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    pub fn period_secs(&self) -> u32 {
        self.period_secs
    }

    pub fn period(&self) -> Duration {
        Duration::from_secs(u64::from(self.period_secs))
    }

    pub fn run_once(&self) -> bool {
        self.run_once
    }
}

/// TTL in seconds for a given period, saturating at `u16::MAX`
pub fn ttl_for_period(period_secs: u32) -> u16 {
    let ttl = period_secs.saturating_mul(TTL_MULTIPLIER);
    u16::try_from(ttl).unwrap_or(u16::MAX)
}
