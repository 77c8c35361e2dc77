//! LLDP attribute encoders
//!
//! Each encoder writes one TLV at the start of `buf`, whose length is the
//! remaining payload capacity. They all go through [`put_record`], so every
//! one of them returns 0 and leaves `buf` untouched when the record does not
//! fit.

use super::tlv::{put_record, LldpTlvType};
use lldpd_core::EncodeError;

use lldpd_core::MacAddr;

/// LLDP multicast MAC address (nearest bridge)
pub const LLDP_MULTICAST_MAC: MacAddr = MacAddr::LLDP_MULTICAST;

/// LLDP Ethertype
pub const LLDP_ETHERTYPE: u16 = lldpd_core::ethertypes::LLDP;

/// Chassis ID subtype carried before the address text (locally assigned)
pub const CHASSIS_ID_SUBTYPE: u8 = 7;

/// Port ID subtype carried before the interface name (locally assigned)
pub const PORT_ID_SUBTYPE: u8 = 7;

/// System Capabilities (bitmap)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LldpCapabilities(pub u16);

impl LldpCapabilities {
    pub const OTHER: u16 = 0x0001;
    pub const REPEATER: u16 = 0x0002;
    pub const BRIDGE: u16 = 0x0004;
    pub const WLAN_ACCESS_POINT: u16 = 0x0008;
    pub const ROUTER: u16 = 0x0010;
    pub const TELEPHONE: u16 = 0x0020;
    pub const DOCSIS: u16 = 0x0040;
    pub const STATION_ONLY: u16 = 0x0080;

    /// What every announcement advertises, both supported and enabled.
    /// The host is not inspected.
    pub const ANNOUNCED: LldpCapabilities = LldpCapabilities(Self::STATION_ONLY);

    pub fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

/// End of LLDPDU, an empty record
pub fn end_of_lldpdu(buf: &mut [u8]) -> Result<usize, EncodeError> {
    put_record(buf, LldpTlvType::EndOfLldpdu as u8, &[])
}

/// Chassis ID: subtype byte then the interface IPv4 address as text
pub fn chassis_id(buf: &mut [u8], ipv4_text: &str) -> Result<usize, EncodeError> {
    put_record(
        buf,
        LldpTlvType::ChassisId as u8,
        &[&[CHASSIS_ID_SUBTYPE][..], ipv4_text.as_bytes()],
    )
}

/// Port ID: subtype byte then the interface name
pub fn port_id(buf: &mut [u8], ifname: &str) -> Result<usize, EncodeError> {
    put_record(
        buf,
        LldpTlvType::PortId as u8,
        &[&[PORT_ID_SUBTYPE][..], ifname.as_bytes()],
    )
}

/// Time to live in seconds, big-endian
pub fn ttl(buf: &mut [u8], seconds: u16) -> Result<usize, EncodeError> {
    put_record(buf, LldpTlvType::Ttl as u8, &[&seconds.to_be_bytes()[..]])
}

pub fn port_description(buf: &mut [u8], ifname: &str) -> Result<usize, EncodeError> {
    put_record(buf, LldpTlvType::PortDescription as u8, &[ifname.as_bytes()])
}

/// System name: resolved host name, or the address text when unresolved
pub fn system_name(buf: &mut [u8], name: &str) -> Result<usize, EncodeError> {
    put_record(buf, LldpTlvType::SystemName as u8, &[name.as_bytes()])
}

/// System capabilities: supported bitmap then enabled bitmap
pub fn system_capabilities(buf: &mut [u8]) -> Result<usize, EncodeError> {
    let caps = LldpCapabilities::ANNOUNCED.to_be_bytes();
    put_record(buf, LldpTlvType::SystemCapabilities as u8, &[&caps[..], &caps[..]])
}
