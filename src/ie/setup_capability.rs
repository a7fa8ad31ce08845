//! Setup Capability Information Element.

use crate::error::SfmtError;
use crate::ie::{IeType, OCTET_GROUP_END};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupCapability {
    /// Paging capability (2 bits).
    pub page_capability: u8,
    /// Setup capability (2 bits).
    pub setup_capability: u8,
}

impl SetupCapability {
    pub fn new(page_capability: u8, setup_capability: u8) -> Self {
        SetupCapability {
            page_capability: page_capability & 0x3,
            setup_capability: setup_capability & 0x3,
        }
    }

    pub fn marshal(&self) -> [u8; 1] {
        [self.page_capability | (self.setup_capability << 2) | OCTET_GROUP_END]
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, SfmtError> {
        let b = data.first().ok_or(SfmtError::InvalidIeContents {
            ie_type: IeType::SetupCapability,
        })?;
        Ok(SetupCapability {
            page_capability: b & 0x3,
            setup_capability: (b & 0xc) >> 2,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_capability_round_trip() {
        let sc = SetupCapability::new(0x2, 0x1);
        assert_eq!(sc.marshal(), [0x86]);
        assert_eq!(SetupCapability::unmarshal(&sc.marshal()).unwrap(), sc);
    }
}
