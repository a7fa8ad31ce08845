//! RES authentication result Information Element.

use crate::error::SfmtError;
use crate::ie::IeType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthRes {
    pub value: u32,
}

impl AuthRes {
    pub fn new(value: u32) -> Self {
        AuthRes { value }
    }

    pub fn marshal(&self) -> [u8; 4] {
        self.value.to_be_bytes()
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, SfmtError> {
        if data.len() != 4 {
            return Err(SfmtError::InvalidIeContents {
                ie_type: IeType::Res,
            });
        }
        let mut b = [0u8; 4];
        b.copy_from_slice(data);
        Ok(AuthRes {
            value: u32::from_be_bytes(b),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_res_round_trip() {
        let v = AuthRes::new(0xdeadbeef);
        assert_eq!(AuthRes::unmarshal(&v.marshal()).unwrap(), v);
    }

    #[test]
    fn test_auth_res_bad_length() {
        assert!(AuthRes::unmarshal(&[0; 3]).is_err());
    }
}
