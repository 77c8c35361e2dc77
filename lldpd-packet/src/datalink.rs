//! `pnet_datalink` backed link contexts
//!
//! Each [`DatalinkContext`] owns its own Ethernet channel, opened when the
//! context is created and released when it is dropped.

use crate::ethernet::{EtherType, EthernetFrame};
use crate::resolve;
use lldpd_core::{Error, LinkContext, LinkProvider, MacAddr, NameResolution, Result};
use pnet_datalink::{self, Channel, DataLinkSender, NetworkInterface};
use std::net::Ipv4Addr;
use tracing::{debug, trace};

/// Opens raw Ethernet channels on local interfaces
#[derive(Debug, Clone, Copy, Default)]
pub struct DatalinkProvider;

impl DatalinkProvider {
    pub fn new() -> Self {
        Self
    }
}

impl LinkProvider for DatalinkProvider {
    type Context = DatalinkContext;

    fn open(&self, interface: &str) -> Result<DatalinkContext> {
        DatalinkContext::open(interface)
    }
}

/// Packet-injection context on one interface
pub struct DatalinkContext {
    interface: NetworkInterface,
    tx: Box<dyn DataLinkSender>,
    staged: Option<Vec<u8>>,
}

impl DatalinkContext {
    /// Find `name` and open an Ethernet channel on it
    pub fn open(name: &str) -> Result<Self> {
        let interface = find_interface(name)?;

        let tx = match pnet_datalink::channel(&interface, Default::default()) {
            Ok(Channel::Ethernet(tx, _rx)) => tx,
            Ok(_) => return Err(Error::collaborator_init(name, "Unsupported channel type")),
            Err(e) => {
                return Err(Error::collaborator_init(
                    name,
                    format!("Failed to create channel: {}", e),
                ))
            }
        };

        debug!(interface = %name, index = interface.index, "Opened link context");

        Ok(Self {
            interface,
            tx,
            staged: None,
        })
    }
}

impl LinkContext for DatalinkContext {
    fn interface(&self) -> &str {
        &self.interface.name
    }

    fn hardware_address(&self) -> Result<MacAddr> {
        self.interface
            .mac
            .map(|mac| MacAddr::new([mac.0, mac.1, mac.2, mac.3, mac.4, mac.5]))
            .ok_or_else(|| Error::address(&self.interface.name, "no hardware address"))
    }

    fn ipv4_address(&self) -> Result<Ipv4Addr> {
        first_ipv4(&self.interface)
            .ok_or_else(|| Error::address(&self.interface.name, "no IPv4 address assigned"))
    }

    fn ipv4_name(&self, addr: Ipv4Addr, mode: NameResolution) -> Result<String> {
        Ok(resolve::ipv4_name(addr, mode))
    }

    fn build_ethernet(
        &mut self,
        destination: MacAddr,
        source: MacAddr,
        ethertype: u16,
        payload: &[u8],
    ) -> Result<()> {
        if payload.len() > EthernetFrame::MAX_PAYLOAD_SIZE {
            return Err(Error::transmit(
                &self.interface.name,
                format!(
                    "Failed to build ethernet frame: payload of {} bytes exceeds {}",
                    payload.len(),
                    EthernetFrame::MAX_PAYLOAD_SIZE
                ),
            ));
        }

        let frame = EthernetFrame::new(
            destination,
            source,
            EtherType::from_u16(ethertype),
            payload.to_vec(),
        );
        self.staged = Some(frame.to_bytes());
        Ok(())
    }

    fn write(&mut self) -> Result<usize> {
        let frame = self
            .staged
            .take()
            .ok_or_else(|| Error::transmit(&self.interface.name, "No frame built"))?;

        trace!(interface = %self.interface.name, len = frame.len(), "Writing frame");

        self.tx
            .send_to(&frame, None)
            .ok_or_else(|| Error::transmit(&self.interface.name, "Unable to send packet"))?
            .map_err(|e| Error::transmit(&self.interface.name, format!("Send error: {}", e)))?;

        Ok(frame.len())
    }
}

fn find_interface(name: &str) -> Result<NetworkInterface> {
    pnet_datalink::interfaces()
        .into_iter()
        .find(|iface| iface.name == name)
        .ok_or_else(|| Error::collaborator_init(name, "Interface not found"))
}

/// First IPv4 address assigned to the interface
fn first_ipv4(interface: &NetworkInterface) -> Option<Ipv4Addr> {
    interface.ips.iter().find_map(|network| match network {
        ipnetwork::IpNetwork::V4(v4) => Some(v4.ip()),
        ipnetwork::IpNetwork::V6(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_nonexistent_interface() {
        let result = DatalinkProvider::new().open("nonexistent_interface_xyz");
        match result {
            Err(Error::CollaboratorInit { interface, .. }) => {
                assert_eq!(interface, "nonexistent_interface_xyz")
            }
            Err(e) => panic!("Expected CollaboratorInit error, got {}", e),
            Ok(_) => panic!("Expected CollaboratorInit error"),
        }
    }

    #[test]
    fn test_loopback_has_ipv4() {
        let loopback = pnet_datalink::interfaces()
            .into_iter()
            .find(|iface| iface.is_loopback());
        if let Some(iface) = loopback {
            if let Some(addr) = first_ipv4(&iface) {
                assert!(addr.is_loopback());
            }
        }
    }
}
