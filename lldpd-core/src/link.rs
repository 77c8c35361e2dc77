//! Link collaborator traits
//!
//! A [`LinkProvider`] opens one [`LinkContext`] per interface and round. The
//! context answers address queries and injects one Ethernet frame; dropping
//! it closes the underlying channel.

use crate::{MacAddr, Result};
use std::net::Ipv4Addr;
use tracing::debug;

/// How an IPv4 address is rendered as a name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameResolution {
    /// Dotted-quad text, no lookup
    Numeric,
    /// Reverse lookup, falling back to dotted-quad text
    Resolve,
}

/// Opens packet-injection contexts by interface name
pub trait LinkProvider {
    type Context: LinkContext;

    /// Open a context on `interface`. Failures map to
    /// [`crate::Error::CollaboratorInit`].
    fn open(&self, interface: &str) -> Result<Self::Context>;
}

/// A packet-injection context bound to one interface
pub trait LinkContext {
    /// Interface this context was opened on
    fn interface(&self) -> &str;

    fn hardware_address(&self) -> Result<MacAddr>;

    fn ipv4_address(&self) -> Result<Ipv4Addr>;

    /// Render `addr` as a name
    fn ipv4_name(&self, addr: Ipv4Addr, mode: NameResolution) -> Result<String>;

    /// Stage an Ethernet II frame for the next [`LinkContext::write`]
    fn build_ethernet(
        &mut self,
        destination: MacAddr,
        source: MacAddr,
        ethertype: u16,
        payload: &[u8],
    ) -> Result<()>;

    /// Send the staged frame, returning the number of bytes on the wire
    fn write(&mut self) -> Result<usize>;
}

/// Per-round facts about an announcing interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceFacts {
    pub name: String,
    pub hardware_address: MacAddr,
    pub ipv4_address: Ipv4Addr,
    /// `ipv4_address` as rendered by the link without a lookup
    pub ipv4_name: String,
    pub resolved_hostname: String,
}

impl InterfaceFacts {
    /// Query `link` for everything an announcement needs
    pub fn gather<L: LinkContext + ?Sized>(link: &L) -> Result<Self> {
        let hardware_address = link.hardware_address()?;
        let ipv4_address = link.ipv4_address()?;
        let ipv4_name = link.ipv4_name(ipv4_address, NameResolution::Numeric)?;
        let resolved_hostname = link.ipv4_name(ipv4_address, NameResolution::Resolve)?;

        debug!(
            interface = link.interface(),
            mac = %hardware_address,
            ipv4 = %ipv4_address,
            hostname = %resolved_hostname,
            "Gathered interface facts"
        );

        Ok(Self {
            name: link.interface().to_string(),
            hardware_address,
            ipv4_address,
            ipv4_name,
            resolved_hostname,
        })
    }
}
