//! Ethernet frame construction
//!
//! LLDP rides directly on Ethernet II with its own EtherType, so only the
//! EtherType form of the header is supported here.

use bytes::{BufMut, BytesMut};
use lldpd_core::{ethertypes, MacAddr};
use std::fmt;

/// EtherType values carried in Ethernet II frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EtherType {
    /// LLDP (0x88CC)
    Lldp,
    /// Any other EtherType
    Custom(u16),
}

impl EtherType {
    /// Convert EtherType to u16 value
    pub fn to_u16(self) -> u16 {
        match self {
            EtherType::Lldp => ethertypes::LLDP,
            EtherType::Custom(val) => val,
        }
    }

    /// Create EtherType from u16 value
    pub fn from_u16(value: u16) -> Self {
        match value {
            ethertypes::LLDP => EtherType::Lldp,
            val => EtherType::Custom(val),
        }
    }
}

impl fmt::Display for EtherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EtherType::Lldp => write!(f, "LLDP"),
            EtherType::Custom(val) => write!(f, "0x{:04X}", val),
        }
    }
}

/// Ethernet II frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EthernetFrame {
    /// Destination MAC address
    pub destination: MacAddr,
    /// Source MAC address
    pub source: MacAddr,
    pub ethertype: EtherType,
    pub payload: Vec<u8>,
}

impl EthernetFrame {
    /// Minimum Ethernet frame size (without FCS)
    pub const MIN_FRAME_SIZE: usize = 60;

    /// Ethernet header size (dst + src + type)
    pub const HEADER_SIZE: usize = 14;

    /// Maximum payload size (MTU)
    pub const MAX_PAYLOAD_SIZE: usize = 1500;

    pub fn new(
        destination: MacAddr,
        source: MacAddr,
        ethertype: EtherType,
        payload: Vec<u8>,
    ) -> Self {
        EthernetFrame {
            destination,
            source,
            ethertype,
            payload,
        }
    }

    /// Convert the frame to bytes, zero-padded to the minimum frame size
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buffer = BytesMut::with_capacity(Self::HEADER_SIZE + self.payload.len());

        buffer.put_slice(self.destination.as_bytes());
        buffer.put_slice(self.source.as_bytes());
        buffer.put_u16(self.ethertype.to_u16());
        buffer.put_slice(&self.payload);

        if buffer.len() < Self::MIN_FRAME_SIZE {
            buffer.resize(Self::MIN_FRAME_SIZE, 0);
        }

        buffer.to_vec()
    }

    /// Get the on-wire frame size in bytes
    pub fn len(&self) -> usize {
        (Self::HEADER_SIZE + self.payload.len()).max(Self::MIN_FRAME_SIZE)
    }

    /// Frames always carry at least a header
    pub fn is_empty(&self) -> bool {
        false
    }
}
