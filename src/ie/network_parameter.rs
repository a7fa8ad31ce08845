//! Network Parameter Information Element.

use crate::error::SfmtError;
use crate::ie::IeType;

pub const NETWORK_PARAMETER_MAX: usize = 64;

/// Parameter discriminators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum NetworkParameterDiscriminator {
    ApplicationAssigned = 0x08,
    DeviceName = 0x10,
    HoReferenceNotRequired = 0x68,
    HoReferencePrivateNetwork = 0x69,
    HoReferenceGsmNetwork = 0x6a,
    HoReferencePublicNetwork = 0x6b,
    Proprietary = 0x70,
    HoReferenceRequestGsmNetwork = 0x74,
    HoReferenceUmtsNetwork = 0x75,
    HoReferenceRequestUmtsNetwork = 0x76,
    Unknown,
}

impl From<u8> for NetworkParameterDiscriminator {
    fn from(v: u8) -> Self {
        use NetworkParameterDiscriminator::*;
        match v {
            0x08 => ApplicationAssigned,
            0x10 => DeviceName,
            0x68 => HoReferenceNotRequired,
            0x69 => HoReferencePrivateNetwork,
            0x6a => HoReferenceGsmNetwork,
            0x6b => HoReferencePublicNetwork,
            0x70 => Proprietary,
            0x74 => HoReferenceRequestGsmNetwork,
            0x75 => HoReferenceUmtsNetwork,
            0x76 => HoReferenceRequestUmtsNetwork,
            _ => Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkParameter {
    pub discriminator: NetworkParameterDiscriminator,
    pub data: Vec<u8>,
}

impl NetworkParameter {
    pub fn new(discriminator: NetworkParameterDiscriminator, data: impl Into<Vec<u8>>) -> Self {
        NetworkParameter {
            discriminator,
            data: data.into(),
        }
    }

    pub fn marshal(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + self.data.len());
        out.push(self.discriminator as u8);
        out.extend_from_slice(&self.data);
        out
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, SfmtError> {
        let b = data.first().ok_or(SfmtError::InvalidIeContents {
            ie_type: IeType::NetworkParameter,
        })?;
        if data.len() - 1 > NETWORK_PARAMETER_MAX {
            return Err(SfmtError::InvalidIeContents {
                ie_type: IeType::NetworkParameter,
            });
        }
        Ok(NetworkParameter {
            discriminator: NetworkParameterDiscriminator::from(*b),
            data: data[1..].to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_parameter_round_trip() {
        let np = NetworkParameter::new(
            NetworkParameterDiscriminator::DeviceName,
            b"base-1".to_vec(),
        );
        assert_eq!(NetworkParameter::unmarshal(&np.marshal()).unwrap(), np);
    }

    #[test]
    fn test_network_parameter_empty() {
        assert!(NetworkParameter::unmarshal(&[]).is_err());
    }
}
