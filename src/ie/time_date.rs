//! Time and Date Information Element.
//!
//! The coding field selects presence of the date triplet and the time
//! quadruplet; all values are BCD as transmitted.

use crate::error::SfmtError;
use crate::ie::IeType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TimeDateInterpretation {
    Current = 0x0,
    Duration = 0x1,
    Unknown,
}

impl From<u8> for TimeDateInterpretation {
    fn from(v: u8) -> Self {
        match v {
            0x0 => TimeDateInterpretation::Current,
            0x1 => TimeDateInterpretation::Duration,
            _ => TimeDateInterpretation::Unknown,
        }
    }
}

/// BCD date triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBcd {
    pub year: u8,
    pub month: u8,
    pub day: u8,
}

/// BCD time quadruplet, timezone in quarter hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBcd {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub timezone: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeDate {
    pub interpretation: TimeDateInterpretation,
    pub date: Option<DateBcd>,
    pub time: Option<TimeBcd>,
}

fn err() -> SfmtError {
    SfmtError::InvalidIeContents {
        ie_type: IeType::TimeDate,
    }
}

impl TimeDate {
    /// The 2-bit coding field: bit 1 = time present, bit 2 = date present.
    fn coding(&self) -> u8 {
        (if self.date.is_some() { 0x2 } else { 0 }) | (if self.time.is_some() { 0x1 } else { 0 })
    }

    pub fn marshal(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(8);
        out.push((self.coding() << 6) | (self.interpretation as u8 & 0x3f));
        if let Some(d) = self.date {
            out.extend_from_slice(&[d.year, d.month, d.day]);
        }
        if let Some(t) = self.time {
            out.extend_from_slice(&[t.hour, t.minute, t.second, t.timezone]);
        }
        out
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, SfmtError> {
        let b = *data.first().ok_or_else(err)?;
        let coding = b >> 6;
        let interpretation = TimeDateInterpretation::from(b & 0x3f);
        let mut n = 1;

        let date = if coding & 0x2 != 0 {
            if data.len() < n + 3 {
                return Err(err());
            }
            let d = DateBcd {
                year: data[n],
                month: data[n + 1],
                day: data[n + 2],
            };
            n += 3;
            Some(d)
        } else {
            None
        };

        let time = if coding & 0x1 != 0 {
            if data.len() < n + 4 {
                return Err(err());
            }
            Some(TimeBcd {
                hour: data[n],
                minute: data[n + 1],
                second: data[n + 2],
                timezone: data[n + 3],
            })
        } else {
            None
        };

        Ok(TimeDate {
            interpretation,
            date,
            time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_date_full_round_trip() {
        let td = TimeDate {
            interpretation: TimeDateInterpretation::Current,
            date: Some(DateBcd {
                year: 0x26,
                month: 0x08,
                day: 0x01,
            }),
            time: Some(TimeBcd {
                hour: 0x12,
                minute: 0x34,
                second: 0x56,
                timezone: 0x04,
            }),
        };
        let marshaled = td.marshal();
        assert_eq!(marshaled[0] >> 6, 0x3);
        assert_eq!(TimeDate::unmarshal(&marshaled).unwrap(), td);
    }

    #[test]
    fn test_time_date_date_only() {
        let td = TimeDate {
            interpretation: TimeDateInterpretation::Duration,
            date: Some(DateBcd {
                year: 0x01,
                month: 0x02,
                day: 0x03,
            }),
            time: None,
        };
        let marshaled = td.marshal();
        assert_eq!(marshaled.len(), 4);
        assert_eq!(TimeDate::unmarshal(&marshaled).unwrap(), td);
    }

    #[test]
    fn test_time_date_truncated_time() {
        // Coding claims a time quadruplet but only two octets follow.
        assert!(TimeDate::unmarshal(&[0x40, 0x12, 0x34]).is_err());
    }
}
