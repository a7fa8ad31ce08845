//! Info Type Information Element.

use crate::error::SfmtError;
use crate::ie::{IeType, OCTET_GROUP_END};

pub const INFO_TYPE_MAX: usize = 8;

/// Parameter type codes.
pub mod parameter {
    pub const LOCATE_SUGGEST: u8 = 0x00;
    pub const ACCESS_RIGHTS_MODIFY_SUGGEST: u8 = 0x01;
    pub const PP_AUTHENTICATION_FAILURE: u8 = 0x04;
    pub const DYNAMIC_PARAMETERS_ALLOCATION: u8 = 0x06;
    pub const EXTERNAL_HO_PARAMETERS: u8 = 0x08;
    pub const LOCATION_AREA: u8 = 0x0d;
    pub const HANDOVER_REFERENCE: u8 = 0x0e;
    pub const OLD_FIXED_PART_IDENTITY: u8 = 0x10;
    pub const OLD_NETWORK_ASSIGNED_IDENTITY: u8 = 0x11;
    pub const BILLING: u8 = 0x20;
    pub const DEBITING: u8 = 0x21;
    pub const CK_TRANSFER: u8 = 0x30;
    pub const HANDOVER_FAILED_REVERSION: u8 = 0x31;
    pub const QA_M_CALL: u8 = 0x32;
    pub const DISTRIBUTED_COMMUNICATION_DOWNLOAD: u8 = 0x33;
    pub const ETHERNET_ADDRESS: u8 = 0x40;
    pub const TOKEN_RING_ADDRESS: u8 = 0x41;
    pub const IPV4_ADDRESS: u8 = 0x42;
    pub const IPV6_ADDRESS: u8 = 0x43;
    pub const IDENTITY_ALLOCATION: u8 = 0x44;
}

/// A list of 7-bit parameter type codes, group-end terminated on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InfoType {
    pub types: Vec<u8>,
}

impl InfoType {
    pub fn new(types: impl Into<Vec<u8>>) -> Self {
        InfoType {
            types: types.into(),
        }
    }

    pub fn marshal(&self) -> Vec<u8> {
        let mut out: Vec<u8> = self.types.iter().map(|t| t & !OCTET_GROUP_END).collect();
        if let Some(last) = out.last_mut() {
            *last |= OCTET_GROUP_END;
        }
        out
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, SfmtError> {
        if data.is_empty() {
            return Err(SfmtError::InvalidIeContents {
                ie_type: IeType::InfoType,
            });
        }
        let mut types = Vec::new();
        for b in data {
            types.push(b & !OCTET_GROUP_END);
            if b & OCTET_GROUP_END != 0 || types.len() == INFO_TYPE_MAX {
                break;
            }
        }
        Ok(InfoType { types })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_type_round_trip() {
        let it = InfoType::new([parameter::LOCATE_SUGGEST, parameter::LOCATION_AREA]);
        let marshaled = it.marshal();
        assert_eq!(marshaled, [0x00, 0x8d]);
        assert_eq!(InfoType::unmarshal(&marshaled).unwrap(), it);
    }

    #[test]
    fn test_info_type_stops_at_group_end() {
        // Octets after the group-end bit are not part of the list.
        let it = InfoType::unmarshal(&[0x80, 0x01]).unwrap();
        assert_eq!(it.types, [0x00]);
    }

    #[test]
    fn test_info_type_empty() {
        assert!(InfoType::unmarshal(&[]).is_err());
    }
}
