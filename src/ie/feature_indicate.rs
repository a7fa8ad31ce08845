//! Feature Indicate Information Element.

use crate::error::SfmtError;
use crate::ie::feature_activate::Feature;
use crate::ie::{IeType, OCTET_GROUP_END};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureIndicate {
    pub feature: Feature,
    pub status: u8,
}

impl FeatureIndicate {
    pub fn new(feature: Feature, status: u8) -> Self {
        FeatureIndicate { feature, status }
    }

    pub fn marshal(&self) -> [u8; 2] {
        [self.feature as u8 | OCTET_GROUP_END, self.status]
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, SfmtError> {
        if data.len() < 2 {
            return Err(SfmtError::InvalidIeContents {
                ie_type: IeType::FeatureIndicate,
            });
        }
        Ok(FeatureIndicate {
            feature: Feature::from(data[0] & !OCTET_GROUP_END),
            status: data[1],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_indicate_round_trip() {
        let fi = FeatureIndicate::new(Feature::EchoControl, 0x9f);
        assert_eq!(FeatureIndicate::unmarshal(&fi.marshal()).unwrap(), fi);
    }

    #[test]
    fn test_feature_indicate_short() {
        assert!(FeatureIndicate::unmarshal(&[0x81]).is_err());
    }
}
