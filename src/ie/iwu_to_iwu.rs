//! IWU-to-IWU Information Element.

use crate::error::SfmtError;
use crate::ie::{IeType, OCTET_GROUP_END};

pub const IWU_TO_IWU_MAX: usize = 128;

/// IWU-to-IWU protocol discriminators (6 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum IwuProtocol {
    #[default]
    UserSpecific = 0x00,
    OsiHigherLayer = 0x01,
    ItuTX263 = 0x02,
    ListAccess = 0x03,
    Ia5Characters = 0x04,
    LightDataServiceSuota = 0x06,
    ItuTV120 = 0x07,
    ItuTQ931Message = 0x08,
    ItuTQ931Ie = 0x09,
    ItuTQ931PartialMessage = 0x0a,
    GsmMessage = 0x10,
    GsmIe = 0x11,
    UmtsGprsIe = 0x12,
    UmtsGprsMessage = 0x13,
    Lrms = 0x14,
    RllAccessProfile = 0x15,
    Wrs = 0x16,
    DectIsdnCPlane = 0x20,
    DectIsdnUPlane = 0x21,
    DectIsdnOperationAndMaintenance = 0x22,
    TerminalData = 0x23,
    DectIpNetworkAccess = 0x24,
    Mpeg4ErAacLdConfiguration = 0x25,
    Unknown = 0x3f,
}

impl From<u8> for IwuProtocol {
    fn from(v: u8) -> Self {
        use IwuProtocol::*;
        match v {
            0x00 => UserSpecific,
            0x01 => OsiHigherLayer,
            0x02 => ItuTX263,
            0x03 => ListAccess,
            0x04 => Ia5Characters,
            0x06 => LightDataServiceSuota,
            0x07 => ItuTV120,
            0x08 => ItuTQ931Message,
            0x09 => ItuTQ931Ie,
            0x0a => ItuTQ931PartialMessage,
            0x10 => GsmMessage,
            0x11 => GsmIe,
            0x12 => UmtsGprsIe,
            0x13 => UmtsGprsMessage,
            0x14 => Lrms,
            0x15 => RllAccessProfile,
            0x16 => Wrs,
            0x20 => DectIsdnCPlane,
            0x21 => DectIsdnUPlane,
            0x22 => DectIsdnOperationAndMaintenance,
            0x23 => TerminalData,
            0x24 => DectIpNetworkAccess,
            0x25 => Mpeg4ErAacLdConfiguration,
            _ => Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IwuToIwu {
    /// Send/Reject bit: true = transmission of message.
    pub sr: bool,
    pub pd: IwuProtocol,
    pub data: Vec<u8>,
}

impl IwuToIwu {
    pub fn new(sr: bool, pd: IwuProtocol, data: impl Into<Vec<u8>>) -> Self {
        IwuToIwu {
            sr,
            pd,
            data: data.into(),
        }
    }

    pub fn marshal(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + self.data.len());
        out.push((if self.sr { 0x40 } else { 0 }) | self.pd as u8 | OCTET_GROUP_END);
        out.extend_from_slice(&self.data);
        out
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, SfmtError> {
        let e = SfmtError::InvalidIeContents {
            ie_type: IeType::IwuToIwu,
        };
        let b = *data.first().ok_or(e)?;
        if b & OCTET_GROUP_END == 0 {
            return Err(e);
        }
        let payload = data[1..].to_vec();
        if payload.len() > IWU_TO_IWU_MAX {
            return Err(e);
        }
        Ok(IwuToIwu {
            sr: b & 0x40 != 0,
            pd: IwuProtocol::from(b & 0x3f),
            data: payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iwu_to_iwu_round_trip() {
        let iwu = IwuToIwu::new(true, IwuProtocol::ListAccess, vec![1, 2, 3]);
        let marshaled = iwu.marshal();
        assert_eq!(marshaled[0], 0x80 | 0x40 | 0x03);
        assert_eq!(IwuToIwu::unmarshal(&marshaled).unwrap(), iwu);
    }

    #[test]
    fn test_iwu_to_iwu_missing_group_end() {
        assert!(IwuToIwu::unmarshal(&[0x43, 1]).is_err());
    }
}
