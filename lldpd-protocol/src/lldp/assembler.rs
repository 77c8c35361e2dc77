//! LLDPDU assembly
//!
//! Records are laid out in the order the protocol mandates: chassis id,
//! port id, TTL, port description, system name, capabilities, end of LLDPDU.

use super::packet;
use super::tlv::LldpTlvType;
use lldpd_core::config::ttl_for_period;
use lldpd_core::{EncodeError, InterfaceFacts};

/// Payload buffer size used for every announcement
pub const PAYLOAD_CAPACITY: usize = 1600;

/// Assemble the announcement for `facts` into the front of `buf`
///
/// Returns the payload length. When a record does not fit, assembly stops
/// with [`EncodeError::PayloadTooLarge`] and `buf` is not modified.
pub fn assemble(
    facts: &InterfaceFacts,
    period_secs: u32,
    buf: &mut [u8],
) -> Result<usize, EncodeError> {
    let mut scratch = vec![0u8; buf.len()];

    let mut offset = 0;
    offset = append(&mut scratch, offset, LldpTlvType::ChassisId, |b| {
        packet::chassis_id(b, &facts.ipv4_name)
    })?;
    offset = append(&mut scratch, offset, LldpTlvType::PortId, |b| {
        packet::port_id(b, &facts.name)
    })?;
    offset = append(&mut scratch, offset, LldpTlvType::Ttl, |b| {
        packet::ttl(b, ttl_for_period(period_secs))
    })?;
    offset = append(&mut scratch, offset, LldpTlvType::PortDescription, |b| {
        packet::port_description(b, &facts.name)
    })?;
    offset = append(&mut scratch, offset, LldpTlvType::SystemName, |b| {
        packet::system_name(b, &facts.resolved_hostname)
    })?;
    offset = append(
        &mut scratch,
        offset,
        LldpTlvType::SystemCapabilities,
        packet::system_capabilities,
    )?;
    offset = append(
        &mut scratch,
        offset,
        LldpTlvType::EndOfLldpdu,
        packet::end_of_lldpdu,
    )?;

    buf[..offset].copy_from_slice(&scratch[..offset]);
    Ok(offset)
}

/// Run one encoder at `offset`, turning a 0 return into `PayloadTooLarge`
fn append<F>(
    scratch: &mut [u8],
    offset: usize,
    record: LldpTlvType,
    encode: F,
) -> Result<usize, EncodeError>
where
    F: FnOnce(&mut [u8]) -> Result<usize, EncodeError>,
{
    let capacity = scratch.len();
    match encode(&mut scratch[offset..])? {
        0 => Err(EncodeError::PayloadTooLarge {
            record: record.name(),
            offset,
            capacity,
        }),
        written => Ok(offset + written),
    }
}

/// One interface's assembled LLDPDU
#[derive(Clone)]
pub struct AnnouncementPayload {
    buf: [u8; PAYLOAD_CAPACITY],
    len: usize,
}

impl AnnouncementPayload {
    pub fn build(facts: &InterfaceFacts, period_secs: u32) -> Result<Self, EncodeError> {
        let mut buf = [0u8; PAYLOAD_CAPACITY];
        let len = assemble(facts, period_secs, &mut buf)?;
        Ok(Self { buf, len })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl std::fmt::Debug for AnnouncementPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnnouncementPayload")
            .field("len", &self.len)
            .field("bytes", &hex::encode(self.as_bytes()))
            .finish()
    }
}
