//! LLDP TLV header codec
//!
//! Every LLDP attribute is a TLV with a 2-byte header: a 7-bit type followed
//! by a 9-bit value length, big-endian.
//!
//! ```text
//!  byte 0          byte 1
//! +-------------+-+----------------+
//! |  type (7)   |   length (9)     |
//! +-------------+-+----------------+
//! ```

use bytes::BufMut;
use lldpd_core::EncodeError;

/// Size of an encoded TLV header
pub const TLV_HEADER_LEN: usize = 2;

/// Largest value of the 7-bit type field
pub const MAX_TLV_TYPE: u8 = 0x7F;

/// Largest value of the 9-bit length field
pub const MAX_TLV_LENGTH: usize = 0x1FF;

/// LLDP TLV types emitted by the announcer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LldpTlvType {
    EndOfLldpdu = 0,
    ChassisId = 1,
    PortId = 2,
    Ttl = 3,
    PortDescription = 4,
    SystemName = 5,
    SystemCapabilities = 7,
}

impl LldpTlvType {
    pub fn name(self) -> &'static str {
        match self {
            LldpTlvType::EndOfLldpdu => "end of LLDPDU",
            LldpTlvType::ChassisId => "chassis id",
            LldpTlvType::PortId => "port id",
            LldpTlvType::Ttl => "time to live",
            LldpTlvType::PortDescription => "port description",
            LldpTlvType::SystemName => "system name",
            LldpTlvType::SystemCapabilities => "system capabilities",
        }
    }
}

/// Pack a (type, length) pair into a TLV header
///
/// Out-of-range fields are rejected rather than masked.
pub fn encode_header(tlv_type: u8, length: usize) -> Result<[u8; 2], EncodeError> {
    if tlv_type > MAX_TLV_TYPE {
        return Err(EncodeError::TypeOutOfRange(tlv_type));
    }
    if length > MAX_TLV_LENGTH {
        return Err(EncodeError::LengthOutOfRange(length));
    }

    let type_length = (u16::from(tlv_type) << 9) | length as u16;
    Ok(type_length.to_be_bytes())
}

/// Unpack a TLV header into (type, length)
pub fn decode_header(header: [u8; 2]) -> (u8, usize) {
    let type_length = u16::from_be_bytes(header);
    ((type_length >> 9) as u8, usize::from(type_length & 0x1FF))
}

/// Write one record whose declared `length` must match `value`
///
/// Returns `length + 2`, or 0 when `buf` cannot hold the record.
pub fn encode_record(
    buf: &mut [u8],
    tlv_type: u8,
    length: usize,
    value: &[u8],
) -> Result<usize, EncodeError> {
    if value.len() != length {
        return Err(EncodeError::LengthMismatch {
            declared: length,
            actual: value.len(),
        });
    }
    put_record(buf, tlv_type, &[value])
}

/// Capacity-checked record writer shared by every attribute encoder
///
/// The value is the concatenation of `parts`. Nothing is written and 0 is
/// returned when `buf` is shorter than the whole record; otherwise exactly
/// header plus value bytes are written and their count returned.
pub fn put_record(buf: &mut [u8], tlv_type: u8, parts: &[&[u8]]) -> Result<usize, EncodeError> {
    let length: usize = parts.iter().map(|part| part.len()).sum();
    let header = encode_header(tlv_type, length)?;

    let total = TLV_HEADER_LEN + length;
    if buf.len() < total {
        return Ok(0);
    }

    let mut out: &mut [u8] = &mut buf[..total];
    out.put_slice(&header);
    for part in parts {
        out.put_slice(part);
    }

    Ok(total)
}

/// Split the first record off `data`, returning (type, value, consumed)
pub fn decode_record(data: &[u8]) -> Option<(u8, &[u8], usize)> {
    let header: [u8; 2] = data.get(..TLV_HEADER_LEN)?.try_into().ok()?;
    let (tlv_type, length) = decode_header(header);
    let value = data.get(TLV_HEADER_LEN..TLV_HEADER_LEN + length)?;
    Some((tlv_type, value, TLV_HEADER_LEN + length))
}
