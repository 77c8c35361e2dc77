//! Error types for lldpd-rs

use thiserror::Error;

/// Result type alias for lldpd operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for lldpd-rs
///
/// Everything except [`Error::Config`] is raised while a round is in
/// progress and aborts the whole announcer.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid startup configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The packet-injection context could not be opened
    #[error("Cannot open link context on '{interface}': {reason}")]
    CollaboratorInit { interface: String, reason: String },

    /// Hardware or IPv4 address lookup failed
    #[error("Cannot determine address of '{interface}': {reason}")]
    Address { interface: String, reason: String },

    /// Attribute encoding failed
    #[error("Encoding error: {0}")]
    Encode(#[from] EncodeError),

    /// Frame build or send failure
    #[error("Transmit error on '{interface}': {reason}")]
    Transmit { interface: String, reason: String },

    /// OS call failure outside a link context
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error with a custom message
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    pub fn collaborator_init<S: Into<String>, R: ToString>(interface: S, reason: R) -> Self {
        Error::CollaboratorInit {
            interface: interface.into(),
            reason: reason.to_string(),
        }
    }

    pub fn address<S: Into<String>, R: ToString>(interface: S, reason: R) -> Self {
        Error::Address {
            interface: interface.into(),
            reason: reason.to_string(),
        }
    }

    pub fn transmit<S: Into<String>, R: ToString>(interface: S, reason: R) -> Self {
        Error::Transmit {
            interface: interface.into(),
            reason: reason.to_string(),
        }
    }
}

/// TLV encoding errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// TLV type does not fit the 7-bit type field
    #[error("TLV type {0} exceeds 127")]
    TypeOutOfRange(u8),

    /// TLV value does not fit the 9-bit length field
    #[error("TLV length {0} exceeds 511")]
    LengthOutOfRange(usize),

    /// Value length disagrees with the declared record length
    #[error("TLV value is {actual} bytes but the header declares {declared}")]
    LengthMismatch { declared: usize, actual: usize },

    /// The assembled payload does not fit the destination buffer
    #[error("Payload too large: no room for {record} record at offset {offset} of {capacity}")]
    PayloadTooLarge {
        record: &'static str,
        offset: usize,
        capacity: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_error_converts() {
        let err: Error = EncodeError::TypeOutOfRange(200).into();
        assert!(matches!(err, Error::Encode(EncodeError::TypeOutOfRange(200))));
        assert_eq!(err.to_string(), "Encoding error: TLV type 200 exceeds 127");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "fork refused");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "I/O error: fork refused");
    }

    #[test]
    fn test_transmit_message() {
        let err = Error::transmit("eth0", "link down");
        assert_eq!(err.to_string(), "Transmit error on 'eth0': link down");
    }
}
