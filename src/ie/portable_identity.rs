//! Portable Identity Information Element.

use crate::error::SfmtError;
use crate::identity::{Ipui, Tpui};
use crate::ie::{IeType, OCTET_GROUP_END};

const TYPE_IPUI: u8 = 0x00;
const TYPE_IPEI: u8 = 0x10;
const TYPE_TPUI: u8 = 0x20;

const MIN_SIZE: usize = 2;

fn err() -> SfmtError {
    SfmtError::InvalidIeContents {
        ie_type: IeType::PortableIdentity,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortableIdentity {
    Ipui(Ipui),
    Tpui(Tpui),
}

impl PortableIdentity {
    pub fn ipui(&self) -> Option<&Ipui> {
        match self {
            PortableIdentity::Ipui(ipui) => Some(ipui),
            PortableIdentity::Tpui(_) => None,
        }
    }

    pub fn marshal(&self) -> Result<Vec<u8>, SfmtError> {
        let mut value = Vec::new();
        let (id_type, len) = match self {
            PortableIdentity::Ipui(ipui) => (TYPE_IPUI, ipui.build(&mut value)),
            PortableIdentity::Tpui(tpui) => {
                let v = tpui.build();
                value.extend_from_slice(&[(v >> 16) as u8, (v >> 8) as u8, v as u8]);
                (TYPE_TPUI, 20)
            }
        };
        let mut out = Vec::with_capacity(2 + value.len());
        out.push(id_type | OCTET_GROUP_END);
        out.push(len | OCTET_GROUP_END);
        out.extend_from_slice(&value);
        Ok(out)
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, SfmtError> {
        if data.len() < MIN_SIZE {
            return Err(err());
        }
        if data[0] & OCTET_GROUP_END == 0 {
            return Err(err());
        }
        let id_type = data[0] & !OCTET_GROUP_END;
        if data[1] & OCTET_GROUP_END == 0 {
            return Err(err());
        }
        let len = data[1] & !OCTET_GROUP_END;

        match id_type {
            TYPE_IPUI | TYPE_IPEI => {
                let ipui = Ipui::parse(&data[2..], len).ok_or_else(err)?;
                Ok(PortableIdentity::Ipui(ipui))
            }
            TYPE_TPUI => {
                if data.len() < 5 {
                    return Err(err());
                }
                let v = ((data[2] as u32) << 16) | ((data[3] as u32) << 8) | data[4] as u32;
                Ok(PortableIdentity::Tpui(Tpui::parse(v)))
            }
            _ => Err(err()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Ipei;

    #[test]
    fn test_portable_identity_ipui_round_trip() {
        let pi = PortableIdentity::Ipui(Ipui::N(Ipei::new(0x123, 0x456789)));
        let marshaled = pi.marshal().unwrap();
        assert_eq!(marshaled[0], 0x80);
        assert_eq!(marshaled[1], 0x80 | 40);
        assert_eq!(marshaled.len(), 7);
        assert_eq!(PortableIdentity::unmarshal(&marshaled).unwrap(), pi);
    }

    #[test]
    fn test_portable_identity_tpui_round_trip() {
        let pi = PortableIdentity::Tpui(Tpui::IndividualDefault(0x6789));
        let marshaled = pi.marshal().unwrap();
        assert_eq!(marshaled[0], 0x80 | 0x20);
        assert_eq!(PortableIdentity::unmarshal(&marshaled).unwrap(), pi);
    }

    #[test]
    fn test_portable_identity_missing_group_end() {
        // Type octet without the group-end bit.
        assert!(PortableIdentity::unmarshal(&[0x00, 0xa8, 0, 0, 0, 0, 0]).is_err());
    }

    #[test]
    fn test_portable_identity_bad_type() {
        assert!(PortableIdentity::unmarshal(&[0x80 | 0x30, 0xa8, 0, 0, 0, 0, 0]).is_err());
    }
}
