//! Calling Party Number Information Element.

use crate::error::SfmtError;
use crate::ie::{IeType, OCTET_GROUP_END};

pub const ADDRESS_MAX: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum NumberType {
    #[default]
    Unknown = 0x0,
    International = 0x1,
    National = 0x2,
    NetworkSpecific = 0x3,
    Subscriber = 0x4,
    Abbreviated = 0x6,
    Reserved = 0x7,
}

impl From<u8> for NumberType {
    fn from(v: u8) -> Self {
        match v {
            0x0 => NumberType::Unknown,
            0x1 => NumberType::International,
            0x2 => NumberType::National,
            0x3 => NumberType::NetworkSpecific,
            0x4 => NumberType::Subscriber,
            0x6 => NumberType::Abbreviated,
            _ => NumberType::Reserved,
        }
    }
}

/// Numbering plan identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Npi {
    #[default]
    Unknown = 0x0,
    IsdnE164 = 0x1,
    DataPlanX121 = 0x3,
    TcpIp = 0x7,
    NationalStandard = 0x8,
    Private = 0x9,
    Sip = 0xa,
    InternetCharacterFormat = 0xb,
    LanMacAddress = 0xc,
    X400 = 0xd,
    ProfileSpecific = 0xe,
    Reserved = 0xf,
}

impl From<u8> for Npi {
    fn from(v: u8) -> Self {
        match v {
            0x0 => Npi::Unknown,
            0x1 => Npi::IsdnE164,
            0x3 => Npi::DataPlanX121,
            0x7 => Npi::TcpIp,
            0x8 => Npi::NationalStandard,
            0x9 => Npi::Private,
            0xa => Npi::Sip,
            0xb => Npi::InternetCharacterFormat,
            0xc => Npi::LanMacAddress,
            0xd => Npi::X400,
            0xe => Npi::ProfileSpecific,
            _ => Npi::Reserved,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum PresentationIndicator {
    #[default]
    Allowed = 0x0,
    Restricted = 0x1,
    NotAvailable = 0x2,
    HandsetLocator = 0x3,
}

impl From<u8> for PresentationIndicator {
    fn from(v: u8) -> Self {
        match v & 0x3 {
            0x0 => PresentationIndicator::Allowed,
            0x1 => PresentationIndicator::Restricted,
            0x2 => PresentationIndicator::NotAvailable,
            _ => PresentationIndicator::HandsetLocator,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ScreeningIndicator {
    #[default]
    UserProvidedNotScreened = 0x0,
    UserProvidedVerifiedPassed = 0x1,
    UserProvidedVerifiedFailed = 0x2,
    NetworkProvided = 0x3,
}

impl From<u8> for ScreeningIndicator {
    fn from(v: u8) -> Self {
        match v & 0x3 {
            0x0 => ScreeningIndicator::UserProvidedNotScreened,
            0x1 => ScreeningIndicator::UserProvidedVerifiedPassed,
            0x2 => ScreeningIndicator::UserProvidedVerifiedFailed,
            _ => ScreeningIndicator::NetworkProvided,
        }
    }
}

fn err() -> SfmtError {
    SfmtError::InvalidIeContents {
        ie_type: IeType::CallingPartyNumber,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CallingPartyNumber {
    pub number_type: NumberType,
    pub npi: Npi,
    /// Presentation and screening indicators; absent when group 4 is
    /// omitted on the wire.
    pub presentation: Option<(PresentationIndicator, ScreeningIndicator)>,
    pub address: Vec<u8>,
}

impl CallingPartyNumber {
    pub fn new(number_type: NumberType, npi: Npi, address: impl Into<Vec<u8>>) -> Self {
        CallingPartyNumber {
            number_type,
            npi,
            presentation: None,
            address: address.into(),
        }
    }

    pub fn marshal(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(2 + self.address.len());
        let mut b = ((self.number_type as u8) << 4) | self.npi as u8;
        match self.presentation {
            None => {
                out.push(b | OCTET_GROUP_END);
            }
            Some((presentation, screening)) => {
                out.push(b);
                b = ((presentation as u8) << 5) | screening as u8;
                out.push(b | OCTET_GROUP_END);
            }
        }
        out.extend_from_slice(&self.address);
        out
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, SfmtError> {
        let b = *data.first().ok_or_else(err)?;
        let number_type = NumberType::from((b & 0x70) >> 4);
        let npi = Npi::from(b & 0x0f);
        let mut n = 1;

        let presentation = if b & OCTET_GROUP_END != 0 {
            None
        } else {
            let b = *data.get(n).ok_or_else(err)?;
            if b & OCTET_GROUP_END == 0 {
                return Err(err());
            }
            n += 1;
            Some((
                PresentationIndicator::from((b >> 5) & 0x3),
                ScreeningIndicator::from(b & 0x3),
            ))
        };

        let address = data[n..].to_vec();
        if address.len() > ADDRESS_MAX {
            return Err(err());
        }

        Ok(CallingPartyNumber {
            number_type,
            npi,
            presentation,
            address,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calling_party_number_no_group4() {
        let cpn = CallingPartyNumber::new(NumberType::National, Npi::IsdnE164, *b"5551234");
        let marshaled = cpn.marshal();
        assert_eq!(marshaled[0], 0x80 | 0x21);
        assert_eq!(CallingPartyNumber::unmarshal(&marshaled).unwrap(), cpn);
    }

    #[test]
    fn test_calling_party_number_with_presentation() {
        let mut cpn = CallingPartyNumber::new(NumberType::Unknown, Npi::Private, *b"42");
        cpn.presentation = Some((
            PresentationIndicator::Allowed,
            ScreeningIndicator::NetworkProvided,
        ));
        let marshaled = cpn.marshal();
        assert_eq!(marshaled[0], 0x09);
        assert_eq!(marshaled[1], 0x80 | 0x03);
        assert_eq!(CallingPartyNumber::unmarshal(&marshaled).unwrap(), cpn);
    }

    #[test]
    fn test_calling_party_number_unterminated_group4() {
        // Octet 3 continues but octet 4 lacks the group-end bit.
        assert!(CallingPartyNumber::unmarshal(&[0x21, 0x03, b'1']).is_err());
    }

    #[test]
    fn test_calling_party_number_address_too_long() {
        let mut data = vec![0x80 | 0x21];
        data.extend_from_slice(&[b'5'; ADDRESS_MAX + 1]);
        assert!(CallingPartyNumber::unmarshal(&data).is_err());
    }
}
