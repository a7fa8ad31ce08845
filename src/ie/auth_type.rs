//! Auth Type Information Element.

use crate::error::SfmtError;
use crate::ie::allocation_type::AuthAlg;
use crate::ie::IeType;
use bitflags::bitflags;

bitflags! {
    /// AUTH-TYPE option flags (octet 5, high nibble).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct AuthFlags: u8 {
        /// Increment the ZAP field.
        const INC = 0x80;
        /// Store the derived cipher key as default cipher key.
        const DEF = 0x40;
        /// Transmit the stored cipher key.
        const TXC = 0x20;
        /// Update user authentication parameters.
        const UPC = 0x10;
    }
}

/// Authentication key type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AuthKeyType {
    UserAuthenticationKey = 0x1,
    UserPersonalIdentity = 0x3,
    AuthenticationCode = 0x4,
    Unknown,
}

impl From<u8> for AuthKeyType {
    fn from(v: u8) -> Self {
        match v {
            0x1 => AuthKeyType::UserAuthenticationKey,
            0x3 => AuthKeyType::UserPersonalIdentity,
            0x4 => AuthKeyType::AuthenticationCode,
            _ => AuthKeyType::Unknown,
        }
    }
}

fn err() -> SfmtError {
    SfmtError::InvalidIeContents {
        ie_type: IeType::AuthType,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthType {
    pub auth_id: AuthAlg,
    /// Present only when `auth_id` is proprietary.
    pub proprietary_auth_id: Option<u8>,
    pub auth_key_type: AuthKeyType,
    pub auth_key_num: u8,
    pub flags: AuthFlags,
    pub cipher_key_num: u8,
    /// Default cipher key index, present only when the DEF flag is set.
    pub defck_index: Option<u16>,
}

impl AuthType {
    pub fn new(auth_id: AuthAlg, auth_key_type: AuthKeyType, auth_key_num: u8) -> Self {
        AuthType {
            auth_id,
            proprietary_auth_id: None,
            auth_key_type,
            auth_key_num: auth_key_num & 0xf,
            flags: AuthFlags::empty(),
            cipher_key_num: 0,
            defck_index: None,
        }
    }

    pub fn marshal(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(5);
        out.push(self.auth_id as u8);
        if self.auth_id == AuthAlg::Proprietary {
            out.push(self.proprietary_auth_id.unwrap_or(0));
        }
        out.push(((self.auth_key_type as u8) << 4) | (self.auth_key_num & 0xf));
        out.push(self.flags.bits() | (self.cipher_key_num & 0xf));
        if self.flags.contains(AuthFlags::DEF) {
            let defck = self.defck_index.unwrap_or(0);
            out.push((defck >> 8) as u8);
            out.push(defck as u8);
        }
        out
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, SfmtError> {
        let mut n = 0;
        let auth_id = AuthAlg::from(*data.first().ok_or_else(err)?);
        n += 1;

        let proprietary_auth_id = if auth_id == AuthAlg::Proprietary {
            let id = *data.get(n).ok_or_else(err)?;
            n += 1;
            Some(id)
        } else {
            None
        };

        let b = *data.get(n).ok_or_else(err)?;
        let auth_key_type = AuthKeyType::from((b & 0xf0) >> 4);
        let auth_key_num = b & 0x0f;
        n += 1;

        let b = *data.get(n).ok_or_else(err)?;
        let flags = AuthFlags::from_bits_truncate(b & 0xf0);
        let cipher_key_num = b & 0x0f;
        n += 1;

        // Octets 5a and 5b are only present if the DEF flag is set.
        let defck_index = if flags.contains(AuthFlags::DEF) {
            if data.len() < n + 2 {
                return Err(err());
            }
            Some(((data[n] as u16) << 8) | data[n + 1] as u16)
        } else {
            None
        };

        Ok(AuthType {
            auth_id,
            proprietary_auth_id,
            auth_key_type,
            auth_key_num,
            flags,
            cipher_key_num,
            defck_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_type_round_trip() {
        let at = AuthType::new(AuthAlg::Dsaa, AuthKeyType::UserAuthenticationKey, 0x8);
        let marshaled = at.marshal();
        assert_eq!(marshaled, [0x01, 0x18, 0x00]);
        assert_eq!(AuthType::unmarshal(&marshaled).unwrap(), at);
    }

    #[test]
    fn test_auth_type_def_flag_round_trip() {
        let mut at = AuthType::new(AuthAlg::Dsaa, AuthKeyType::AuthenticationCode, 0x1);
        at.flags = AuthFlags::DEF | AuthFlags::UPC;
        at.cipher_key_num = 0x2;
        at.defck_index = Some(0x1234);
        let marshaled = at.marshal();
        assert_eq!(marshaled, [0x01, 0x41, 0x52, 0x12, 0x34]);
        assert_eq!(AuthType::unmarshal(&marshaled).unwrap(), at);
    }

    #[test]
    fn test_auth_type_proprietary_round_trip() {
        let mut at = AuthType::new(AuthAlg::Proprietary, AuthKeyType::UserPersonalIdentity, 0);
        at.proprietary_auth_id = Some(0x42);
        let marshaled = at.marshal();
        assert_eq!(AuthType::unmarshal(&marshaled).unwrap(), at);
    }

    #[test]
    fn test_auth_type_def_flag_truncated() {
        // DEF set but the defck index octets are missing.
        assert!(AuthType::unmarshal(&[0x01, 0x18, 0x40]).is_err());
    }
}
