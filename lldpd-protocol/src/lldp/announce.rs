//! Periodic LLDP announcements
//!
//! One [`Announcer`] walks the configured interfaces in order each round,
//! sending one LLDPDU per interface, then waits for the configured period.
//! Everything runs on the caller's task. The only suspension point is the
//! wait between rounds, which also watches the shutdown signal.

use super::assembler::AnnouncementPayload;
use super::packet::{LLDP_ETHERTYPE, LLDP_MULTICAST_MAC};
use lldpd_core::{AnnouncementConfig, InterfaceFacts, LinkContext, LinkProvider, Result};
use tokio::sync::watch;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, error, info, trace};

/// How [`Announcer::run`] finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// One pass was made in run-once mode
    Done,
    /// The shutdown signal was observed
    Stopped,
}

/// Create the shutdown signal for [`Announcer::run`]; send `true` to stop
pub fn shutdown_channel() -> (watch::Sender<bool>, watch::Receiver<bool>) {
    watch::channel(false)
}

pub struct Announcer<'a, P> {
    config: &'a AnnouncementConfig,
    provider: P,
}

impl<'a, P: LinkProvider> Announcer<'a, P> {
    pub fn new(config: &'a AnnouncementConfig, provider: P) -> Self {
        Self { config, provider }
    }

    /// Announce until run-once completes or `shutdown` turns `true`
    ///
    /// The first failing interface aborts the run; interfaces after it are
    /// not announced.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) -> Result<RunOutcome> {
        info!(
            interfaces = ?self.config.interfaces(),
            period_secs = self.config.period_secs(),
            run_once = self.config.run_once(),
            "Starting LLDP announcements"
        );

        let mut round: u64 = 0;
        loop {
            if *shutdown.borrow() {
                info!(rounds = round, "Shutdown requested, stopping announcements");
                return Ok(RunOutcome::Stopped);
            }

            round += 1;
            self.announce_round(round)?;

            if self.config.run_once() {
                info!("Run-once pass complete");
                return Ok(RunOutcome::Done);
            }

            debug!(round, secs = self.config.period_secs(), "Sleeping until next round");
            if wait_or_shutdown(Instant::now() + self.config.period(), &mut shutdown).await {
                info!(rounds = round, "Shutdown requested, stopping announcements");
                return Ok(RunOutcome::Stopped);
            }
        }
    }

    /// Announce once on every configured interface, returning frames sent
    pub fn announce_round(&self, round: u64) -> Result<usize> {
        debug!(round, "Starting announcement round");

        for name in self.config.interfaces() {
            if let Err(e) = self.announce_interface(name) {
                error!(round, interface = %name, error = %e, "Announcement failed");
                return Err(e);
            }
        }

        Ok(self.config.interfaces().len())
    }

    /// Open `name`, build its LLDPDU and send it; returns bytes on the wire
    pub fn announce_interface(&self, name: &str) -> Result<usize> {
        let mut link = self.provider.open(name)?;
        let facts = InterfaceFacts::gather(&link)?;
        let payload = AnnouncementPayload::build(&facts, self.config.period_secs())?;

        trace!(
            interface = %name,
            payload = %hex::encode(payload.as_bytes()),
            "Assembled LLDPDU"
        );

        link.build_ethernet(
            LLDP_MULTICAST_MAC,
            facts.hardware_address,
            LLDP_ETHERTYPE,
            payload.as_bytes(),
        )?;
        let sent = link.write()?;

        info!(
            interface = %name,
            src = %facts.hardware_address,
            bytes = sent,
            "Sent LLDP announcement"
        );
        Ok(sent)
    }
}

/// Wait until `deadline`; returns `true` if shutdown was requested first
///
/// A dropped sender can no longer request shutdown, so the wait then runs
/// to the deadline.
async fn wait_or_shutdown(deadline: Instant, shutdown: &mut watch::Receiver<bool>) -> bool {
    loop {
        tokio::select! {
            _ = sleep_until(deadline) => return false,
            changed = shutdown.changed() => {
                if changed.is_err() {
                    sleep_until(deadline).await;
                    return false;
                }
                if *shutdown.borrow() {
                    return true;
                }
            }
        }
    }
}
