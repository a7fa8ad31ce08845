//! Feature Activate Information Element.

use crate::error::SfmtError;
use crate::ie::{IeType, OCTET_GROUP_END};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Feature {
    RegisterRecall = 0x01,
    ExternalHoSwitch = 0x0f,
    QueueEntryRequest = 0x20,
    IndicationOfSubscriberNumber = 0x30,
    FeatureKey = 0x42,
    SpecificLineSelection = 0x44,
    SpecificTrunkSelection = 0x47,
    EchoControl = 0x48,
    CostInformation = 0x60,
    Unknown,
}

impl From<u8> for Feature {
    fn from(v: u8) -> Self {
        match v {
            0x01 => Feature::RegisterRecall,
            0x0f => Feature::ExternalHoSwitch,
            0x20 => Feature::QueueEntryRequest,
            0x30 => Feature::IndicationOfSubscriberNumber,
            0x42 => Feature::FeatureKey,
            0x44 => Feature::SpecificLineSelection,
            0x47 => Feature::SpecificTrunkSelection,
            0x48 => Feature::EchoControl,
            0x60 => Feature::CostInformation,
            _ => Feature::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureActivate {
    pub feature: Feature,
}

impl FeatureActivate {
    pub fn new(feature: Feature) -> Self {
        FeatureActivate { feature }
    }

    pub fn marshal(&self) -> [u8; 1] {
        [self.feature as u8 | OCTET_GROUP_END]
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, SfmtError> {
        let b = data.first().ok_or(SfmtError::InvalidIeContents {
            ie_type: IeType::FeatureActivate,
        })?;
        Ok(FeatureActivate {
            feature: Feature::from(b & !OCTET_GROUP_END),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_activate_round_trip() {
        let fa = FeatureActivate::new(Feature::RegisterRecall);
        assert_eq!(fa.marshal(), [0x81]);
        assert_eq!(FeatureActivate::unmarshal(&fa.marshal()).unwrap(), fa);
    }
}
