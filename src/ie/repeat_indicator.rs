//! Repeat Indicator Information Element.

use crate::error::SfmtError;
use crate::ie::IeType;

/// List type carried by a REPEAT-INDICATOR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ListType {
    /// Non-prioritized list.
    #[default]
    Normal = 0x1,
    /// Prioritized list.
    Prioritized = 0x2,
}

impl ListType {
    pub fn marshal(&self) -> [u8; 1] {
        [*self as u8]
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, SfmtError> {
        match data.first() {
            Some(0x1) => Ok(ListType::Normal),
            Some(0x2) => Ok(ListType::Prioritized),
            _ => Err(SfmtError::InvalidIeContents {
                ie_type: IeType::RepeatIndicator,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_type_round_trip() {
        for t in [ListType::Normal, ListType::Prioritized] {
            assert_eq!(ListType::unmarshal(&t.marshal()).unwrap(), t);
        }
    }

    #[test]
    fn test_list_type_invalid() {
        assert!(ListType::unmarshal(&[0x7]).is_err());
        assert!(ListType::unmarshal(&[]).is_err());
    }
}
