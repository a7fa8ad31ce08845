//! Keypad Information Element.
//!
//! SINGLE-KEYPAD carries one character in a double-octet element,
//! MULTI-KEYPAD a string in a variable-length element.

use crate::error::SfmtError;
use crate::ie::IeType;

pub const KEYPAD_MAX: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Keypad {
    pub info: Vec<u8>,
}

impl Keypad {
    pub fn new(info: impl Into<Vec<u8>>) -> Self {
        Keypad { info: info.into() }
    }

    pub fn single(c: u8) -> Self {
        Keypad { info: vec![c] }
    }

    pub fn marshal(&self) -> Vec<u8> {
        self.info.clone()
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, SfmtError> {
        if data.len() > KEYPAD_MAX {
            return Err(SfmtError::InvalidIeContents {
                ie_type: IeType::MultiKeypad,
            });
        }
        Ok(Keypad {
            info: data.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_round_trip() {
        let k = Keypad::new(*b"5551234");
        assert_eq!(Keypad::unmarshal(&k.marshal()).unwrap(), k);
    }

    #[test]
    fn test_keypad_too_long() {
        assert!(Keypad::unmarshal(&[b'1'; KEYPAD_MAX + 1]).is_err());
    }
}
