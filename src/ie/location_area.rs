//! Location Area Information Element.

use crate::error::SfmtError;
use crate::ie::IeType;

const TYPE_MASK: u8 = 0xc0;
const TYPE_SHIFT: u8 = 6;
const LEVEL_MASK: u8 = 0x3f;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationArea {
    /// Location area type bits.
    pub la_type: u8,
    /// Location area level.
    pub level: u8,
}

impl LocationArea {
    pub fn new(la_type: u8, level: u8) -> Self {
        LocationArea {
            la_type: la_type & 0x3,
            level: level & LEVEL_MASK,
        }
    }

    pub fn marshal(&self) -> [u8; 1] {
        [(self.la_type << TYPE_SHIFT) | self.level]
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, SfmtError> {
        let b = data.first().ok_or(SfmtError::InvalidIeContents {
            ie_type: IeType::LocationArea,
        })?;
        Ok(LocationArea {
            la_type: (b & TYPE_MASK) >> TYPE_SHIFT,
            level: b & LEVEL_MASK,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_area_round_trip() {
        let la = LocationArea::new(0x1, 36);
        let marshaled = la.marshal();
        assert_eq!(marshaled, [0x64]);
        assert_eq!(LocationArea::unmarshal(&marshaled).unwrap(), la);
    }

    #[test]
    fn test_location_area_empty() {
        assert!(LocationArea::unmarshal(&[]).is_err());
    }
}
