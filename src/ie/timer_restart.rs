//! Timer Restart Information Element.

use crate::error::SfmtError;
use crate::ie::IeType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TimerRestart {
    Restart = 0x0,
    Stop = 0x1,
}

impl TimerRestart {
    pub fn marshal(&self) -> [u8; 1] {
        [*self as u8]
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, SfmtError> {
        match data.first() {
            Some(0x0) => Ok(TimerRestart::Restart),
            Some(0x1) => Ok(TimerRestart::Stop),
            _ => Err(SfmtError::InvalidIeContents {
                ie_type: IeType::TimerRestart,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_restart_round_trip() {
        for t in [TimerRestart::Restart, TimerRestart::Stop] {
            assert_eq!(TimerRestart::unmarshal(&t.marshal()).unwrap(), t);
        }
    }

    #[test]
    fn test_timer_restart_invalid_code() {
        assert!(TimerRestart::unmarshal(&[0x2]).is_err());
    }
}
