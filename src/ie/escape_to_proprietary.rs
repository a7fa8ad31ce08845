//! Escape to Proprietary Information Element.

use crate::error::SfmtError;
use crate::ie::{IeType, OCTET_GROUP_END};

pub const ESCAPE_CONTENT_MAX: usize = 64;

const DESC_TYPE_MASK: u8 = 0x7f;
const DESC_EMC: u8 = 0x01;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeToProprietary {
    /// Equipment Manufacturer Code.
    pub emc: u16,
    pub content: Vec<u8>,
}

impl EscapeToProprietary {
    pub fn new(emc: u16, content: impl Into<Vec<u8>>) -> Self {
        EscapeToProprietary {
            emc,
            content: content.into(),
        }
    }

    pub fn marshal(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(3 + self.content.len());
        out.push(DESC_EMC | OCTET_GROUP_END);
        out.extend_from_slice(&self.emc.to_be_bytes());
        out.extend_from_slice(&self.content);
        out
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, SfmtError> {
        let e = SfmtError::InvalidIeContents {
            ie_type: IeType::EscapeToProprietary,
        };
        if data.len() < 3 {
            return Err(e);
        }
        if data[0] & DESC_TYPE_MASK != DESC_EMC {
            return Err(e);
        }
        let content = data[3..].to_vec();
        if content.len() > ESCAPE_CONTENT_MAX {
            return Err(e);
        }
        Ok(EscapeToProprietary {
            emc: u16::from_be_bytes([data[1], data[2]]),
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_to_proprietary_round_trip() {
        let esc = EscapeToProprietary::new(0x1234, vec![0xde, 0xad]);
        let marshaled = esc.marshal();
        assert_eq!(marshaled[..3], [0x81, 0x12, 0x34]);
        assert_eq!(EscapeToProprietary::unmarshal(&marshaled).unwrap(), esc);
    }

    #[test]
    fn test_escape_to_proprietary_bad_discriminator() {
        assert!(EscapeToProprietary::unmarshal(&[0x82, 0x12, 0x34]).is_err());
    }

    #[test]
    fn test_escape_to_proprietary_short() {
        assert!(EscapeToProprietary::unmarshal(&[0x81, 0x12]).is_err());
    }
}
