//! Called Party Number Information Element.

use crate::error::SfmtError;
use crate::ie::calling_party_number::{NumberType, Npi, ADDRESS_MAX};
use crate::ie::{IeType, OCTET_GROUP_END};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CalledPartyNumber {
    pub number_type: NumberType,
    pub npi: Npi,
    pub address: Vec<u8>,
}

impl CalledPartyNumber {
    pub fn new(number_type: NumberType, npi: Npi, address: impl Into<Vec<u8>>) -> Self {
        CalledPartyNumber {
            number_type,
            npi,
            address: address.into(),
        }
    }

    pub fn marshal(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + self.address.len());
        out.push(((self.number_type as u8) << 4) | self.npi as u8 | OCTET_GROUP_END);
        out.extend_from_slice(&self.address);
        out
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, SfmtError> {
        let b = data.first().ok_or(SfmtError::InvalidIeContents {
            ie_type: IeType::CalledPartyNumber,
        })?;
        let address = data[1..].to_vec();
        if address.len() > ADDRESS_MAX {
            return Err(SfmtError::InvalidIeContents {
                ie_type: IeType::CalledPartyNumber,
            });
        }
        Ok(CalledPartyNumber {
            number_type: NumberType::from((b & 0x70) >> 4),
            npi: Npi::from(b & 0x0f),
            address,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_called_party_number_round_trip() {
        let cpn = CalledPartyNumber::new(NumberType::Unknown, Npi::Unknown, *b"5551234");
        let marshaled = cpn.marshal();
        assert_eq!(marshaled[0], 0x80);
        assert_eq!(&marshaled[1..], b"5551234");
        assert_eq!(CalledPartyNumber::unmarshal(&marshaled).unwrap(), cpn);
    }

    #[test]
    fn test_called_party_number_empty() {
        assert!(CalledPartyNumber::unmarshal(&[]).is_err());
    }
}
