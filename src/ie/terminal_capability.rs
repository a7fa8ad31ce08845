//! Terminal Capability Information Element.
//!
//! Octet groups 3 to 6; each group terminates when bit 8 is set, and
//! older equipment may stop early inside group 3 or omit group 6
//! entirely. The parser tolerates both.

use crate::error::SfmtError;
use crate::ie::{IeType, OCTET_GROUP_END};
use bitflags::bitflags;

const DISPLAY_MASK: u8 = 0x0f;
const TONE_MASK: u8 = 0x70;
const TONE_SHIFT: u8 = 4;
const ECHO_MASK: u8 = 0x70;
const ECHO_SHIFT: u8 = 4;
const NOISE_MASK: u8 = 0x0c;
const NOISE_SHIFT: u8 = 2;
const VOLUME_MASK: u8 = 0x03;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum DisplayCapability {
    #[default]
    NotApplicable = 0x1,
    NoDisplay = 0x2,
    Numeric = 0x3,
    NumericPlus = 0x4,
    Alphanumeric = 0x5,
    FullDisplay = 0x6,
    Unknown = 0x0,
}

impl From<u8> for DisplayCapability {
    fn from(v: u8) -> Self {
        match v {
            0x1 => DisplayCapability::NotApplicable,
            0x2 => DisplayCapability::NoDisplay,
            0x3 => DisplayCapability::Numeric,
            0x4 => DisplayCapability::NumericPlus,
            0x5 => DisplayCapability::Alphanumeric,
            0x6 => DisplayCapability::FullDisplay,
            _ => DisplayCapability::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ToneCapability {
    #[default]
    NotApplicable = 0x1,
    NoTone = 0x2,
    DialToneOnly = 0x3,
    ItuTE182Tones = 0x4,
    CompleteDectTones = 0x5,
    Unknown = 0x0,
}

impl From<u8> for ToneCapability {
    fn from(v: u8) -> Self {
        match v {
            0x1 => ToneCapability::NotApplicable,
            0x2 => ToneCapability::NoTone,
            0x3 => ToneCapability::DialToneOnly,
            0x4 => ToneCapability::ItuTE182Tones,
            0x5 => ToneCapability::CompleteDectTones,
            _ => ToneCapability::Unknown,
        }
    }
}

bitflags! {
    /// Slot type capabilities (7 bits of octet 3b).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SlotCapability: u8 {
        const HALF_SLOT = 1 << 0;
        const LONG_SLOT_640 = 1 << 1;
        const LONG_SLOT_672 = 1 << 2;
        const FULL_SLOT = 1 << 3;
        const DOUBLE_SLOT = 1 << 4;
    }
}

bitflags! {
    /// Profile indicator, accumulated from the group-4 octets into a
    /// left-aligned 64-bit field (octet 4 at bits 62..56, octet 4a at
    /// bits 54..48 and so on, the group-end bit masked out).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ProfileIndicator: u64 {
        const CAP = 0x40 << 56;
        const GAP = 0x20 << 56;
        const DECT_GSM_INTERWORKING = 0x10 << 56;
        const ISDN_END_SYSTEM = 0x08 << 56;
        const LRMS = 0x04 << 56;
        const DPRS_STREAM = 0x02 << 56;
        const DPRS_ASYMMETRIC_BEARERS = 0x01 << 56;
        const DPRS_CLASS_2 = 0x40 << 48;
        const DATA_SERVICES_PROFILE_D = 0x20 << 48;
        const ISDN_IAP = 0x10 << 48;
        const ETHERNET = 0x02 << 48;
        const TOKEN_RING = 0x01 << 48;
        const IP = 0x40 << 40;
        const PPP = 0x20 << 40;
        const V24 = 0x10 << 40;
        const CF = 0x08 << 40;
        const IP_ROAMING = 0x04 << 40;
        const WRS = 0x40 << 32;
        const SMS_OVER_LRMS = 0x20 << 32;
        const DMAP = 0x10 << 32;
        const REKEYING_EARLY_ENCRYPTION = 0x01 << 24;
        const NG_DECT_PART_1 = 0x40 << 16;
        const NG_DECT_PART_3 = 0x20 << 16;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ScrollingBehaviour {
    #[default]
    NotSpecified = 0x0,
    Type1 = 0x1,
    Type2 = 0x2,
    Unknown = 0x7f,
}

impl From<u8> for ScrollingBehaviour {
    fn from(v: u8) -> Self {
        match v {
            0x0 => ScrollingBehaviour::NotSpecified,
            0x1 => ScrollingBehaviour::Type1,
            0x2 => ScrollingBehaviour::Type2,
            _ => ScrollingBehaviour::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TerminalCapability {
    pub display: DisplayCapability,
    pub tone: ToneCapability,
    /// Echo parameters (3 bits).
    pub echo: u8,
    /// Noise rejection capability (2 bits).
    pub noise_rejection: u8,
    /// Adaptive volume control provision (2 bits).
    pub volume_ctrl: u8,
    pub slot: SlotCapability,
    /// Display memory in characters (14 bits over two octets).
    pub display_memory: u16,
    pub display_lines: u8,
    pub display_columns: u8,
    pub scrolling: ScrollingBehaviour,
    pub profile_indicator: ProfileIndicator,
    /// Display control codes (3 bits).
    pub display_control: u8,
    pub display_charsets: u8,
}

fn err() -> SfmtError {
    SfmtError::InvalidIeContents {
        ie_type: IeType::TerminalCapability,
    }
}

impl TerminalCapability {
    pub fn marshal(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(16);

        // Octet group 3
        out.push(self.display as u8 | ((self.tone as u8) << TONE_SHIFT));
        out.push(
            ((self.echo << ECHO_SHIFT) & ECHO_MASK)
                | ((self.noise_rejection << NOISE_SHIFT) & NOISE_MASK)
                | (self.volume_ctrl & VOLUME_MASK),
        );
        out.push(self.slot.bits());
        out.push((self.display_memory >> 7) as u8 & 0x7f);
        out.push(self.display_memory as u8 & 0x7f);
        out.push(self.display_lines & 0x7f);
        out.push(self.display_columns & 0x7f);
        out.push(self.scrolling as u8 | OCTET_GROUP_END);

        // Octet group 4
        let profile = self.profile_indicator.bits();
        for i in 0..8u32 {
            let shift = 64 - 8 * (i + 1);
            let mut octet = (profile >> shift) as u8 & !OCTET_GROUP_END;
            let remaining = if shift == 0 {
                0
            } else {
                profile & (u64::MAX >> (64 - shift))
            };
            if remaining == 0 {
                octet |= OCTET_GROUP_END;
                out.push(octet);
                break;
            }
            out.push(octet);
        }

        // Octet group 5
        out.push(self.display_control & 0x7);
        out.push(self.display_charsets | OCTET_GROUP_END);

        out
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, SfmtError> {
        let mut tc = TerminalCapability::default();
        let mut n = 0;

        let next = |n: &mut usize| -> Option<u8> {
            let b = data.get(*n).copied();
            *n += 1;
            b
        };

        // Octet group 3: terminates on the first group-end bit.
        'group3: {
            let b = next(&mut n).ok_or_else(err)?;
            tc.display = DisplayCapability::from(b & DISPLAY_MASK);
            tc.tone = ToneCapability::from((b & TONE_MASK) >> TONE_SHIFT);
            if b & OCTET_GROUP_END != 0 {
                break 'group3;
            }

            let b = next(&mut n).ok_or_else(err)?;
            tc.echo = (b & ECHO_MASK) >> ECHO_SHIFT;
            tc.noise_rejection = (b & NOISE_MASK) >> NOISE_SHIFT;
            tc.volume_ctrl = b & VOLUME_MASK;
            if b & OCTET_GROUP_END != 0 {
                break 'group3;
            }

            let b = next(&mut n).ok_or_else(err)?;
            tc.slot = SlotCapability::from_bits_truncate(b & !OCTET_GROUP_END);
            if b & OCTET_GROUP_END != 0 {
                break 'group3;
            }

            let b = next(&mut n).ok_or_else(err)?;
            tc.display_memory = (b & !OCTET_GROUP_END) as u16;
            if b & OCTET_GROUP_END != 0 {
                break 'group3;
            }
            tc.display_memory <<= 7;

            let b = next(&mut n).ok_or_else(err)?;
            tc.display_memory += (b & !OCTET_GROUP_END) as u16;
            if b & OCTET_GROUP_END != 0 {
                break 'group3;
            }

            let b = next(&mut n).ok_or_else(err)?;
            tc.display_lines = b & !OCTET_GROUP_END;
            if b & OCTET_GROUP_END != 0 {
                break 'group3;
            }

            let b = next(&mut n).ok_or_else(err)?;
            tc.display_columns = b & !OCTET_GROUP_END;
            if b & OCTET_GROUP_END != 0 {
                break 'group3;
            }

            let b = next(&mut n).ok_or_else(err)?;
            tc.scrolling = ScrollingBehaviour::from(b & !OCTET_GROUP_END);
        }

        // Octet group 4
        let mut profile = 0u64;
        for i in 0..8u32 {
            let b = next(&mut n).ok_or_else(err)?;
            profile |= ((b & !OCTET_GROUP_END) as u64) << (64 - 8 * (i + 1));
            if b & OCTET_GROUP_END != 0 {
                break;
            }
        }
        tc.profile_indicator = ProfileIndicator::from_bits_truncate(profile);

        // Octet group 5
        let b = next(&mut n).ok_or_else(err)?;
        tc.display_control = b & 0x7;
        if b & OCTET_GROUP_END == 0 {
            let b = next(&mut n).ok_or_else(err)?;
            tc.display_charsets = b & !OCTET_GROUP_END;
        }

        // Octet group 6: older equipment may omit it entirely.
        if n < data.len() {
            let b = next(&mut n).ok_or_else(err)?;
            if b & OCTET_GROUP_END == 0 {
                let b = next(&mut n).ok_or_else(err)?;
                if b & OCTET_GROUP_END == 0 {
                    return Err(err());
                }
            }
        }

        Ok(tc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TerminalCapability {
        TerminalCapability {
            display: DisplayCapability::FullDisplay,
            tone: ToneCapability::CompleteDectTones,
            echo: 0x2,
            noise_rejection: 0x2,
            volume_ctrl: 0x1,
            slot: SlotCapability::FULL_SLOT | SlotCapability::HALF_SLOT,
            display_memory: 576,
            display_lines: 4,
            display_columns: 16,
            scrolling: ScrollingBehaviour::Type1,
            profile_indicator: ProfileIndicator::GAP | ProfileIndicator::NG_DECT_PART_1,
            display_control: 0x2,
            display_charsets: 0x1,
        }
    }

    #[test]
    fn test_terminal_capability_round_trip() {
        let tc = sample();
        assert_eq!(TerminalCapability::unmarshal(&tc.marshal()).unwrap(), tc);
    }

    #[test]
    fn test_terminal_capability_group3_early_end() {
        // Group 3 ends at the first octet; groups 4 and 5 follow.
        let data = [
            0x80 | 0x56, // display + tone, group end
            0xa0,        // profile indicator octet, group end
            0x82,        // display control, group end
        ];
        let tc = TerminalCapability::unmarshal(&data).unwrap();
        assert_eq!(tc.display, DisplayCapability::FullDisplay);
        assert_eq!(tc.profile_indicator, ProfileIndicator::GAP);
        assert_eq!(tc.slot, SlotCapability::empty());
        assert_eq!(tc.display_control, 0x2);
    }

    #[test]
    fn test_terminal_capability_tolerates_missing_group6() {
        let tc = sample();
        let mut wire = tc.marshal();
        // Append a well-formed group 6; the parser must accept both forms.
        wire.push(0x80 | 0x11);
        assert_eq!(TerminalCapability::unmarshal(&wire).unwrap(), tc);
    }

    #[test]
    fn test_terminal_capability_bad_group6() {
        let tc = sample();
        let mut wire = tc.marshal();
        // Two group-6 octets, neither carrying the group-end bit.
        wire.push(0x11);
        wire.push(0x11);
        assert!(TerminalCapability::unmarshal(&wire).is_err());
    }

    #[test]
    fn test_terminal_capability_truncated() {
        assert!(TerminalCapability::unmarshal(&[0x06]).is_err());
    }
}
