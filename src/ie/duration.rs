//! Duration Information Element.

use crate::error::SfmtError;
use crate::ie::{IeType, OCTET_GROUP_END};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum LockLimits {
    TemporaryUserLimit1 = 0x1,
    #[default]
    NoLimits = 0x2,
    TemporaryUserLimit2 = 0x3,
    Unknown = 0x0,
}

impl From<u8> for LockLimits {
    fn from(v: u8) -> Self {
        match v {
            0x1 => LockLimits::TemporaryUserLimit1,
            0x2 => LockLimits::NoLimits,
            0x3 => LockLimits::TemporaryUserLimit2,
            _ => LockLimits::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum TimeLimits {
    Erase = 0x0,
    DefinedTimeLimit1 = 0x1,
    DefinedTimeLimit2 = 0x2,
    #[default]
    StandardTimeLimit = 0x4,
    Infinite = 0xf,
    Unknown = 0xe,
}

impl From<u8> for TimeLimits {
    fn from(v: u8) -> Self {
        match v {
            0x0 => TimeLimits::Erase,
            0x1 => TimeLimits::DefinedTimeLimit1,
            0x2 => TimeLimits::DefinedTimeLimit2,
            0x4 => TimeLimits::StandardTimeLimit,
            0xf => TimeLimits::Infinite,
            _ => TimeLimits::Unknown,
        }
    }
}

/// Lock and time limits; the duration octet is carried only for the
/// defined time limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DurationIe {
    pub lock: LockLimits,
    pub time: TimeLimits,
    pub duration: u8,
}

impl DurationIe {
    pub fn new(lock: LockLimits, time: TimeLimits, duration: u8) -> Self {
        DurationIe {
            lock,
            time,
            duration,
        }
    }

    fn has_duration(time: TimeLimits) -> bool {
        matches!(
            time,
            TimeLimits::DefinedTimeLimit1 | TimeLimits::DefinedTimeLimit2
        )
    }

    pub fn marshal(&self) -> Vec<u8> {
        let b = ((self.lock as u8) << 4) | self.time as u8;
        if Self::has_duration(self.time) {
            vec![b, self.duration]
        } else {
            vec![b | OCTET_GROUP_END]
        }
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, SfmtError> {
        let b = *data.first().ok_or(SfmtError::InvalidIeContents {
            ie_type: IeType::Duration,
        })?;
        let mut d = DurationIe {
            lock: LockLimits::from((b >> 4) & 0x7),
            time: TimeLimits::from(b & 0x0f),
            duration: 0,
        };
        if b & OCTET_GROUP_END == 0 {
            d.duration = *data.get(1).ok_or(SfmtError::InvalidIeContents {
                ie_type: IeType::Duration,
            })?;
        }
        Ok(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_standard_limit() {
        let d = DurationIe::new(LockLimits::NoLimits, TimeLimits::StandardTimeLimit, 0);
        let marshaled = d.marshal();
        assert_eq!(marshaled, [0x80 | 0x24]);
        assert_eq!(DurationIe::unmarshal(&marshaled).unwrap(), d);
    }

    #[test]
    fn test_duration_defined_limit_round_trip() {
        let d = DurationIe::new(
            LockLimits::TemporaryUserLimit1,
            TimeLimits::DefinedTimeLimit1,
            30,
        );
        let marshaled = d.marshal();
        assert_eq!(marshaled, [0x11, 30]);
        assert_eq!(DurationIe::unmarshal(&marshaled).unwrap(), d);
    }

    #[test]
    fn test_duration_missing_duration_octet() {
        assert!(DurationIe::unmarshal(&[0x11]).is_err());
    }
}
