//! Link Layer Discovery Protocol (LLDP) announcements - IEEE 802.1AB
//!
//! This module implements the transmit side of LLDP:
//! - TLV header codec with range-checked 7-bit type and 9-bit length
//! - Attribute encoders sharing one capacity-checked record writer
//! - LLDPDU assembly in protocol order
//! - A periodic, cancellable announcement loop over several interfaces
//!
//! ## Packet Structure
//!
//! LLDP frames have the following structure:
//! - Destination MAC: 01:80:C2:00:00:0E (nearest bridge multicast)
//! - Ethertype: 0x88CC
//! - TLVs: Type-Length-Value format
//!
//! Each announcement carries, in order:
//! - Chassis ID (Type 1): subtype 7, interface IPv4 address as text
//! - Port ID (Type 2): subtype 7, interface name
//! - TTL (Type 3): three times the announcement period
//! - Port Description (Type 4): interface name
//! - System Name (Type 5): reverse-resolved host name
//! - System Capabilities (Type 7): station only, supported and enabled
//! - End of LLDPDU (Type 0)
//!
//! Nothing is received or parsed from neighbors.

pub mod announce;
pub mod assembler;
pub mod packet;
pub mod tlv;


pub use announce::{shutdown_channel, Announcer, RunOutcome};
pub use assembler::{assemble, AnnouncementPayload, PAYLOAD_CAPACITY};
pub use packet::{LldpCapabilities, LLDP_ETHERTYPE, LLDP_MULTICAST_MAC};
pub use tlv::{decode_header, encode_header, encode_record, LldpTlvType};
