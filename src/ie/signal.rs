//! Signal Information Element.

use crate::error::SfmtError;
use crate::ie::IeType;

/// Signal codes. Alerting patterns live at `ALERTING_BASE + pattern`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signal {
    pub code: u8,
}

impl Signal {
    pub const DIAL_TONE_ON: u8 = 0x00;
    pub const RING_BACK_TONE_ON: u8 = 0x01;
    pub const INTERCEPT_TONE_ON: u8 = 0x02;
    pub const NETWORK_CONGESTION_TONE_ON: u8 = 0x03;
    pub const BUSY_TONE_ON: u8 = 0x04;
    pub const CONFIRM_TONE_ON: u8 = 0x05;
    pub const ANSWER_TONE_ON: u8 = 0x06;
    pub const CALL_WAITING_TONE_ON: u8 = 0x07;
    pub const OFF_HOOK_WARNING_TONE_ON: u8 = 0x08;
    pub const NEGATIVE_ACKNOWLEDGEMENT_TONE: u8 = 0x09;
    pub const TONES_OFF: u8 = 0x3f;
    pub const ALERTING_BASE: u8 = 0x40;
    pub const ALERTING_CONTINUOUS: u8 = 0x48;
    pub const ALERTING_OFF: u8 = 0x4f;

    pub fn new(code: u8) -> Self {
        Signal { code }
    }

    /// Ring pattern 0..7.
    pub fn alerting(pattern: u8) -> Self {
        Signal {
            code: Self::ALERTING_BASE + (pattern & 0x7),
        }
    }

    pub fn marshal(&self) -> [u8; 1] {
        [self.code]
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, SfmtError> {
        let b = data.first().ok_or(SfmtError::InvalidIeContents {
            ie_type: IeType::Signal,
        })?;
        Ok(Signal { code: *b })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_round_trip() {
        let s = Signal::alerting(3);
        assert_eq!(s.code, 0x43);
        assert_eq!(Signal::unmarshal(&s.marshal()).unwrap(), s);
    }

    #[test]
    fn test_signal_unmarshal_empty() {
        assert!(Signal::unmarshal(&[]).is_err());
    }
}
