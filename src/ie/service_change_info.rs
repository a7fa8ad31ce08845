//! Service Change Info Information Element.

use crate::error::SfmtError;
use crate::ie::{IeType, OCTET_GROUP_END};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ServiceChangeMode {
    #[default]
    None = 0x0,
    ConnectionReversal = 0x1,
    Bandwidth = 0x2,
    Modulation = 0x3,
    Rerouting = 0x4,
    BandwidthPlusModulation = 0x5,
    ReroutingPlusBandwidth = 0x6,
    BandwidthOrModulation = 0x7,
    Suspend = 0x8,
    Resume = 0x9,
    VoiceDataToData = 0xa,
    VoiceDataToVoice = 0xb,
    IwuAttributes = 0xc,
    AudioCodec = 0xd,
    BasicServiceAndIwuAttributes = 0xe,
    Unknown = 0xf,
}

impl From<u8> for ServiceChangeMode {
    fn from(v: u8) -> Self {
        use ServiceChangeMode::*;
        match v {
            0x0 => None,
            0x1 => ConnectionReversal,
            0x2 => Bandwidth,
            0x3 => Modulation,
            0x4 => Rerouting,
            0x5 => BandwidthPlusModulation,
            0x6 => ReroutingPlusBandwidth,
            0x7 => BandwidthOrModulation,
            0x8 => Suspend,
            0x9 => Resume,
            0xa => VoiceDataToData,
            0xb => VoiceDataToVoice,
            0xc => IwuAttributes,
            0xd => AudioCodec,
            0xe => BasicServiceAndIwuAttributes,
            _ => Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceChangeInfo {
    /// True when the sender is master of the change.
    pub master: bool,
    pub mode: ServiceChangeMode,
}

impl ServiceChangeInfo {
    pub fn new(master: bool, mode: ServiceChangeMode) -> Self {
        ServiceChangeInfo { master, mode }
    }

    pub fn marshal(&self) -> [u8; 1] {
        [(if self.master { 0x40 } else { 0 }) | self.mode as u8 | OCTET_GROUP_END]
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, SfmtError> {
        let b = data.first().ok_or(SfmtError::InvalidIeContents {
            ie_type: IeType::ServiceChangeInfo,
        })?;
        Ok(ServiceChangeInfo {
            master: b & 0x40 != 0,
            mode: ServiceChangeMode::from(b & 0x0f),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_change_info_round_trip() {
        let sci = ServiceChangeInfo::new(true, ServiceChangeMode::AudioCodec);
        assert_eq!(sci.marshal(), [0x80 | 0x40 | 0x0d]);
        assert_eq!(ServiceChangeInfo::unmarshal(&sci.marshal()).unwrap(), sci);
    }
}
