//! Fixed Identity Information Element.
//!
//! Carries an ARI (or PARK), left-shifted by one bit on the wire; the
//! length octet counts the ARI bits plus that shift bit.

use crate::error::SfmtError;
use crate::identity::Ari;
use crate::ie::{IeType, OCTET_GROUP_END};

const MIN_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FixedIdType {
    Ari = 0x00,
    AriPlusRpn = 0x01,
    AriPlusWrs = 0x02,
    Park = 0x20,
}

impl FixedIdType {
    fn from_u8(v: u8) -> Option<Self> {
        match v {
            0x00 => Some(FixedIdType::Ari),
            0x01 => Some(FixedIdType::AriPlusRpn),
            0x02 => Some(FixedIdType::AriPlusWrs),
            0x20 => Some(FixedIdType::Park),
            _ => None,
        }
    }
}

fn err() -> SfmtError {
    SfmtError::InvalidIeContents {
        ie_type: IeType::FixedIdentity,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedIdentity {
    pub id_type: FixedIdType,
    pub ari: Ari,
    pub rpn: u8,
}

impl FixedIdentity {
    pub fn new(id_type: FixedIdType, ari: Ari) -> Self {
        FixedIdentity {
            id_type,
            ari,
            rpn: 0,
        }
    }

    /// A PARK identity built from the handle's primary ARI.
    pub fn park(ari: Ari) -> Self {
        FixedIdentity::new(FixedIdType::Park, ari)
    }

    pub fn marshal(&self) -> Vec<u8> {
        let len = self.ari.len() + 1;
        let nbytes = (len as usize + 7) / 8;
        let value = self.ari.build() >> 1;
        let mut out = Vec::with_capacity(2 + nbytes);
        out.push(self.id_type as u8 | OCTET_GROUP_END);
        out.push(len | OCTET_GROUP_END);
        out.extend_from_slice(&value.to_be_bytes()[..nbytes]);
        out
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, SfmtError> {
        if data.len() < MIN_SIZE {
            return Err(err());
        }
        if data[0] & OCTET_GROUP_END == 0 {
            return Err(err());
        }
        let id_type = FixedIdType::from_u8(data[0] & !OCTET_GROUP_END).ok_or_else(err)?;
        if data[1] & OCTET_GROUP_END == 0 {
            return Err(err());
        }
        let len = data[1] & !OCTET_GROUP_END;

        let mut raw = [0u8; 8];
        let avail = data.len() - 2;
        raw[..avail.min(8)].copy_from_slice(&data[2..2 + avail.min(8)]);
        let (ari, ari_len) = Ari::parse(u64::from_be_bytes(raw) << 1).ok_or_else(err)?;

        match id_type {
            FixedIdType::Ari | FixedIdType::Park => {
                if ari_len + 1 != len {
                    return Err(err());
                }
                Ok(FixedIdentity::new(id_type, ari))
            }
            FixedIdType::AriPlusRpn | FixedIdType::AriPlusWrs => Ok(FixedIdentity::new(id_type, ari)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_identity_park_round_trip() {
        let fi = FixedIdentity::park(Ari::ClassA {
            emc: 0x123,
            fpn: 0x4567,
        });
        let marshaled = fi.marshal();
        assert_eq!(marshaled[0], 0x80 | 0x20);
        assert_eq!(marshaled[1], 0x80 | 37);
        assert_eq!(marshaled.len(), 7);
        assert_eq!(FixedIdentity::unmarshal(&marshaled).unwrap(), fi);
    }

    #[test]
    fn test_fixed_identity_class_b_round_trip() {
        let fi = FixedIdentity::new(
            FixedIdType::Ari,
            Ari::ClassB {
                eic: 0xbeef,
                fpn: 3,
                fps: 9,
            },
        );
        let marshaled = fi.marshal();
        assert_eq!(marshaled[1], 0x80 | 32);
        assert_eq!(FixedIdentity::unmarshal(&marshaled).unwrap(), fi);
    }

    #[test]
    fn test_fixed_identity_length_mismatch() {
        let fi = FixedIdentity::park(Ari::ClassA { emc: 1, fpn: 2 });
        let mut marshaled = fi.marshal();
        // Claim a class-B length for a class-A ARI.
        marshaled[1] = 0x80 | 32;
        assert!(FixedIdentity::unmarshal(&marshaled).is_err());
    }

    #[test]
    fn test_fixed_identity_truncated() {
        assert!(FixedIdentity::unmarshal(&[0xa0, 0xa5]).is_err());
    }
}
