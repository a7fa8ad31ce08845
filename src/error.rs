//! NWK layer error types.

use crate::ie::IeType;
use std::fmt;
use std::io;

/// Errors produced by the S-format codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SfmtError {
    /// An IE header does not obey the S-format length rules.
    MalformedHeader,
    /// An IE failed content validation (length bounds, illegal enum
    /// discriminator, group-end bit discipline).
    InvalidIeContents { ie_type: IeType },
    /// An IE marked mandatory for the receive direction is absent.
    MandatoryIeMissing { ie_type: IeType },
    /// An IE marked mandatory for the receive direction failed to parse.
    MandatoryIeError { ie_type: IeType },
    /// An IE was supplied for a message that does not allow it in the
    /// send direction.
    InvalidIe { ie_type: IeType },
}

impl fmt::Display for SfmtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SfmtError::MalformedHeader => write!(f, "malformed IE header"),
            SfmtError::InvalidIeContents { ie_type } => {
                write!(f, "invalid {:?} IE contents", ie_type)
            }
            SfmtError::MandatoryIeMissing { ie_type } => {
                write!(f, "mandatory {:?} IE missing", ie_type)
            }
            SfmtError::MandatoryIeError { ie_type } => {
                write!(f, "mandatory {:?} IE failed to parse", ie_type)
            }
            SfmtError::InvalidIe { ie_type } => {
                write!(f, "{:?} IE not allowed in this direction", ie_type)
            }
        }
    }
}

impl std::error::Error for SfmtError {}

/// Errors surfaced by the protocol entities and the transaction layer.
#[derive(Debug)]
pub enum NwkError {
    /// S-format codec failure.
    Sfmt(SfmtError),
    /// The per-link transaction table for the protocol is full.
    NoTransactionAvailable,
    /// The referenced data link does not exist.
    UnknownLink,
    /// The referenced call does not exist (it may have been destroyed).
    UnknownCall,
    /// The referenced MM transaction does not exist.
    UnknownMmTransaction,
    /// A primitive was invoked in a state that does not permit it.
    InvalidState,
    /// The DLC socket reported an error.
    Io(io::Error),
}

impl fmt::Display for NwkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NwkError::Sfmt(e) => write!(f, "S-format error: {}", e),
            NwkError::NoTransactionAvailable => write!(f, "no transaction available"),
            NwkError::UnknownLink => write!(f, "unknown data link"),
            NwkError::UnknownCall => write!(f, "unknown call"),
            NwkError::UnknownMmTransaction => write!(f, "unknown MM transaction"),
            NwkError::InvalidState => write!(f, "primitive not permitted in current state"),
            NwkError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for NwkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NwkError::Sfmt(e) => Some(e),
            NwkError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SfmtError> for NwkError {
    fn from(e: SfmtError) -> Self {
        NwkError::Sfmt(e)
    }
}

impl From<io::Error> for NwkError {
    fn from(e: io::Error) -> Self {
        NwkError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sfmt_error_display() {
        let e = SfmtError::MandatoryIeMissing {
            ie_type: IeType::PortableIdentity,
        };
        assert_eq!(e.to_string(), "mandatory PortableIdentity IE missing");
    }

    #[test]
    fn test_nwk_error_from_sfmt() {
        let e: NwkError = SfmtError::MalformedHeader.into();
        assert!(matches!(e, NwkError::Sfmt(SfmtError::MalformedHeader)));
    }
}
