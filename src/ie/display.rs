//! Display Information Element.
//!
//! Covers both the SINGLE-DISPLAY double-octet element (one character) and
//! the MULTI-DISPLAY variable-length element; the descriptor engine selects
//! the wire form from the content length.

use crate::error::SfmtError;
use crate::ie::IeType;

pub const DISPLAY_MAX: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Display {
    pub info: Vec<u8>,
}

impl Display {
    pub fn new(info: impl Into<Vec<u8>>) -> Self {
        Display { info: info.into() }
    }

    /// The single-character form used by SINGLE-DISPLAY.
    pub fn single(c: u8) -> Self {
        Display { info: vec![c] }
    }

    pub fn marshal(&self) -> Vec<u8> {
        self.info.clone()
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, SfmtError> {
        if data.len() > DISPLAY_MAX {
            return Err(SfmtError::InvalidIeContents {
                ie_type: IeType::MultiDisplay,
            });
        }
        Ok(Display {
            info: data.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trip() {
        let d = Display::new(*b"CALLING 5551234");
        assert_eq!(Display::unmarshal(&d.marshal()).unwrap(), d);
    }

    #[test]
    fn test_display_single() {
        assert_eq!(Display::single(b'5').info, [b'5']);
    }

    #[test]
    fn test_display_too_long() {
        assert!(Display::unmarshal(&[b'x'; DISPLAY_MAX + 1]).is_err());
    }
}
