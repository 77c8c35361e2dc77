//! CLI argument parsing

use clap::Parser;
use lldpd_core::{AnnouncementConfig, Result, DEFAULT_PERIOD_SECS};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "lldpd")]
#[command(version, about = "Periodically announce interfaces with LLDP", long_about = None)]
pub struct Cli {
    /// Interface to send announcements on (repeat for up to 6 interfaces)
    #[arg(short = 'i', long = "interface", value_name = "IFACE")]
    pub interfaces: Vec<String>,

    /// Period between LLDP announcements in seconds
    #[arg(
        short = 't',
        long = "time",
        value_name = "SECONDS",
        default_value_t = i64::from(DEFAULT_PERIOD_SECS),
        allow_negative_numbers = true
    )]
    pub period: i64,

    /// Run once: send a packet on each interface and exit
    #[arg(short = 'o', long = "once")]
    pub once: bool,

    /// Stay attached to the terminal instead of running in the background
    #[arg(short = 'f', long)]
    pub foreground: bool,

    /// Verbose output (-v, -vv for increasing verbosity)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the arguments into an announcement configuration
    pub fn to_config(&self) -> Result<AnnouncementConfig> {
        AnnouncementConfig::new(self.interfaces.iter().cloned(), self.period, self.once)
    }

    /// Whether the process should detach into the background
    pub fn detach(&self) -> bool {
        !self.once && !self.foreground
    }

    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lldpd_core::Error;

    #[test]
    fn test_repeated_interfaces_keep_order() {
        let cli = Cli::try_parse_from(["lldpd", "-i", "eth1", "-i", "eth0", "-o"]).unwrap();
        let config = cli.to_config().unwrap();
        assert_eq!(config.interfaces(), &["eth1", "eth0"]);
        assert!(config.run_once());
        assert!(!cli.detach());
    }

    #[test]
    fn test_default_period() {
        let cli = Cli::try_parse_from(["lldpd", "-i", "eth0"]).unwrap();
        assert_eq!(cli.period, 60);
        assert_eq!(cli.to_config().unwrap().period_secs(), 60);
        assert!(cli.detach());
    }

    #[test]
    fn test_zero_period_reverts_to_default() {
        let cli = Cli::try_parse_from(["lldpd", "-i", "eth0", "-t", "0"]).unwrap();
        assert_eq!(cli.to_config().unwrap().period_secs(), 60);
    }

    #[test]
    fn test_negative_period_reverts_to_default() {
        let cli = Cli::try_parse_from(["lldpd", "-i", "eth0", "-t", "-5"]).unwrap();
        assert_eq!(cli.period, -5);
        assert_eq!(cli.to_config().unwrap().period_secs(), 60);
    }

    #[test]
    fn test_custom_period() {
        let cli = Cli::try_parse_from(["lldpd", "-i", "eth0", "-t", "30"]).unwrap();
        let config = cli.to_config().unwrap();
        assert_eq!(config.period_secs(), 30);
        assert_eq!(lldpd_core::config::ttl_for_period(config.period_secs()), 90);
    }

    #[test]
    fn test_no_interfaces_is_config_error() {
        let cli = Cli::try_parse_from(["lldpd", "-o"]).unwrap();
        assert!(matches!(cli.to_config(), Err(Error::Config(_))));
    }

    #[test]
    fn test_foreground_prevents_detach() {
        let cli = Cli::try_parse_from(["lldpd", "-i", "eth0", "-f"]).unwrap();
        assert!(!cli.detach());
    }

    #[test]
    fn test_help_flag() {
        let err = Cli::try_parse_from(["lldpd", "-h"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_verbosity_levels() {
        let cli = Cli::try_parse_from(["lldpd", "-vv"]).unwrap();
        assert_eq!(cli.log_level(), Level::TRACE);
        let cli = Cli::try_parse_from(["lldpd"]).unwrap();
        assert_eq!(cli.log_level(), Level::INFO);
    }
}
