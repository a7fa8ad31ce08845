//! Progress Indicator Information Element.

use crate::error::SfmtError;
use crate::ie::{IeType, OCTET_GROUP_END};

const LOCATION_MASK: u8 = 0x0f;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Location {
    User = 0x0,
    PrivateNetworkServingLocalUser = 0x1,
    PublicNetworkServingLocalUser = 0x2,
    PublicNetworkServingRemoteUser = 0x4,
    PrivateNetworkServingRemoteUser = 0x5,
    InternationalNetwork = 0x7,
    NetworkBeyondInterworkingPoint = 0xa,
    NotApplicable = 0xf,
    Unknown,
}

impl From<u8> for Location {
    fn from(v: u8) -> Self {
        match v {
            0x0 => Location::User,
            0x1 => Location::PrivateNetworkServingLocalUser,
            0x2 => Location::PublicNetworkServingLocalUser,
            0x4 => Location::PublicNetworkServingRemoteUser,
            0x5 => Location::PrivateNetworkServingRemoteUser,
            0x7 => Location::InternationalNetwork,
            0xa => Location::NetworkBeyondInterworkingPoint,
            0xf => Location::NotApplicable,
            _ => Location::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Progress {
    NotEndToEndIsdn = 0x01,
    DestinationAddressNonIsdn = 0x02,
    OriginationAddressNonIsdn = 0x03,
    CallReturnedToIsdn = 0x04,
    ServiceChange = 0x05,
    InbandInformationAvailable = 0x08,
    InbandInformationNotAvailable = 0x09,
    EndToEndIsdn = 0x20,
    Unknown,
}

impl From<u8> for Progress {
    fn from(v: u8) -> Self {
        match v {
            0x01 => Progress::NotEndToEndIsdn,
            0x02 => Progress::DestinationAddressNonIsdn,
            0x03 => Progress::OriginationAddressNonIsdn,
            0x04 => Progress::CallReturnedToIsdn,
            0x05 => Progress::ServiceChange,
            0x08 => Progress::InbandInformationAvailable,
            0x09 => Progress::InbandInformationNotAvailable,
            0x20 => Progress::EndToEndIsdn,
            _ => Progress::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressIndicator {
    pub location: Location,
    pub progress: Progress,
}

impl ProgressIndicator {
    pub fn new(location: Location, progress: Progress) -> Self {
        ProgressIndicator { location, progress }
    }

    pub fn marshal(&self) -> [u8; 2] {
        [
            self.location as u8 | OCTET_GROUP_END,
            self.progress as u8 | OCTET_GROUP_END,
        ]
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, SfmtError> {
        if data.len() < 2 {
            return Err(SfmtError::InvalidIeContents {
                ie_type: IeType::ProgressIndicator,
            });
        }
        Ok(ProgressIndicator {
            location: Location::from(data[0] & LOCATION_MASK),
            progress: Progress::from(data[1] & !OCTET_GROUP_END),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_indicator_round_trip() {
        let pi = ProgressIndicator::new(Location::User, Progress::InbandInformationAvailable);
        let marshaled = pi.marshal();
        assert_eq!(marshaled, [0x80, 0x88]);
        assert_eq!(ProgressIndicator::unmarshal(&marshaled).unwrap(), pi);
    }

    #[test]
    fn test_progress_indicator_short() {
        assert!(ProgressIndicator::unmarshal(&[0x80]).is_err());
    }
}
