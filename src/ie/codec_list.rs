//! Codec List Information Element.

use crate::error::SfmtError;
use crate::ie::{IeType, OCTET_GROUP_END};

pub const CODEC_LIST_MAX: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum NegotiationIndicator {
    #[default]
    NotPossible = 0x0,
    Codec = 0x1,
    Unknown = 0x7,
}

impl From<u8> for NegotiationIndicator {
    fn from(v: u8) -> Self {
        match v {
            0x0 => NegotiationIndicator::NotPossible,
            0x1 => NegotiationIndicator::Codec,
            _ => NegotiationIndicator::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Codec {
    UserSpecific32kbit = 0x1,
    G726_32kbit = 0x2,
    G722_64kbit = 0x3,
    G711Alaw64kbit = 0x4,
    G711Ulaw64kbit = 0x5,
    G729_1_32kbit = 0x6,
    Mpeg4ErAacLd32kbit = 0x7,
    Mpeg4ErAacLd64kbit = 0x8,
    UserSpecific64kbit = 0x9,
    Unknown,
}

impl From<u8> for Codec {
    fn from(v: u8) -> Self {
        match v {
            0x1 => Codec::UserSpecific32kbit,
            0x2 => Codec::G726_32kbit,
            0x3 => Codec::G722_64kbit,
            0x4 => Codec::G711Alaw64kbit,
            0x5 => Codec::G711Ulaw64kbit,
            0x6 => Codec::G729_1_32kbit,
            0x7 => Codec::Mpeg4ErAacLd32kbit,
            0x8 => Codec::Mpeg4ErAacLd64kbit,
            0x9 => Codec::UserSpecific64kbit,
            _ => Codec::Unknown,
        }
    }
}

/// One 3-octet codec entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecEntry {
    pub codec: Codec,
    /// MAC/DLC service (4 bits).
    pub service: u8,
    /// C-plane routing (3 bits).
    pub cplane: u8,
    /// Slot size (4 bits).
    pub slot: u8,
}

impl CodecEntry {
    pub fn new(codec: Codec, service: u8, cplane: u8, slot: u8) -> Self {
        CodecEntry {
            codec,
            service: service & 0xf,
            cplane: cplane & 0x7,
            slot: slot & 0xf,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodecList {
    pub negotiation: NegotiationIndicator,
    pub entries: Vec<CodecEntry>,
}

impl CodecList {
    pub fn new(negotiation: NegotiationIndicator, entries: Vec<CodecEntry>) -> Self {
        CodecList {
            negotiation,
            entries,
        }
    }

    pub fn marshal(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + 3 * self.entries.len());
        out.push(((self.negotiation as u8) << 4) | OCTET_GROUP_END);
        for entry in &self.entries {
            out.push(entry.codec as u8);
            out.push(entry.service);
            out.push((entry.cplane << 4) | entry.slot);
        }
        if let Some(last) = out.last_mut() {
            *last |= OCTET_GROUP_END;
        }
        out
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, SfmtError> {
        let b = data.first().ok_or(SfmtError::InvalidIeContents {
            ie_type: IeType::CodecList,
        })?;
        let negotiation = NegotiationIndicator::from(((b & !OCTET_GROUP_END) >> 4) & 0x7);

        let mut entries = Vec::new();
        let mut n = 1;
        while data.len() - n >= 3 {
            entries.push(CodecEntry {
                codec: Codec::from(data[n]),
                service: data[n + 1] & 0x0f,
                cplane: (data[n + 2] & 0x70) >> 4,
                slot: data[n + 2] & 0x0f,
            });
            n += 3;
            if entries.len() == CODEC_LIST_MAX {
                break;
            }
        }
        Ok(CodecList {
            negotiation,
            entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_list_round_trip() {
        let cl = CodecList::new(
            NegotiationIndicator::Codec,
            vec![
                CodecEntry::new(Codec::G726_32kbit, 0x0, 0x0, 0x4),
                CodecEntry::new(Codec::G722_64kbit, 0x1, 0x1, 0x5),
            ],
        );
        let marshaled = cl.marshal();
        assert_eq!(marshaled[0], 0x90);
        assert_eq!(marshaled.len(), 7);
        assert_eq!(CodecList::unmarshal(&marshaled).unwrap(), cl);
    }

    #[test]
    fn test_codec_list_entry_cap() {
        let mut data = vec![0x90];
        for _ in 0..CODEC_LIST_MAX + 2 {
            data.extend_from_slice(&[0x2, 0x0, 0x04]);
        }
        let cl = CodecList::unmarshal(&data).unwrap();
        assert_eq!(cl.entries.len(), CODEC_LIST_MAX);
    }

    #[test]
    fn test_codec_list_ignores_trailing_fragment() {
        // A trailing partial entry is not consumed.
        let cl = CodecList::unmarshal(&[0x90, 0x2, 0x0]).unwrap();
        assert!(cl.entries.is_empty());
    }
}
