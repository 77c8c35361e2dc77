//! Link-layer frame construction and injection for lldpd-rs
//!
//! - [`ethernet`] - Ethernet II frame construction
//! - [`datalink`] - `pnet_datalink` backed [`LinkProvider`](lldpd_core::LinkProvider)
//! - [`resolve`] - reverse name lookup for interface addresses
//!
//! # Example
//!
//! ```rust
//! use lldpd_core::MacAddr;
//! use lldpd_packet::ethernet::{EtherType, EthernetFrame};
//!
//! let src = MacAddr([0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
//! let frame = EthernetFrame::new(MacAddr::LLDP_MULTICAST, src, EtherType::Lldp, vec![0x00, 0x00]);
//! let bytes = frame.to_bytes();
//! assert_eq!(&bytes[12..14], &[0x88, 0xCC]);
//! ```

pub mod datalink;
pub mod ethernet;
pub mod resolve;

pub use datalink::{DatalinkContext, DatalinkProvider};
pub use ethernet::{EtherType, EthernetFrame};
