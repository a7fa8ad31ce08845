//! Information Elements for NWK S-format messages.
//!
//! Every IE kind has a typed value in its own module with `marshal` /
//! `unmarshal` operating on the IE *content*; the raw wire form including
//! the 1-2 octet S-format header is [`Ie`]. The [`value::IeValue`] union is
//! the process-wide registry dispatching between the two.

use crate::error::SfmtError;

pub mod allocation_type;
pub mod auth_res;
pub mod auth_type;
pub mod auth_value;
pub mod basic_service;
pub mod called_party_number;
pub mod calling_party_name;
pub mod calling_party_number;
pub mod cipher_info;
pub mod codec_list;
pub mod display;
pub mod duration;
pub mod escape_to_proprietary;
pub mod events_notification;
pub mod facility;
pub mod feature_activate;
pub mod feature_indicate;
pub mod fixed_identity;
pub mod identity_type;
pub mod info_type;
pub mod iwu_to_iwu;
pub mod keypad;
pub mod location_area;
pub mod network_parameter;
pub mod portable_identity;
pub mod progress_indicator;
pub mod reject_reason;
pub mod release_reason;
pub mod repeat_indicator;
pub mod service_change_info;
pub mod setup_capability;
pub mod signal;
pub mod terminal_capability;
pub mod time_date;
pub mod timer_restart;
pub mod value;

pub use repeat_indicator::ListType;
pub use value::{IeList, IeValue};

/// Group-extension bit: set in the last octet of an octet group.
pub const OCTET_GROUP_END: u8 = 0x80;

const FIXED_LEN: u8 = 0x80;
const FIXED_ID_MASK: u8 = 0x70;
const FIXED_VAL_MASK: u8 = 0x0f;
const EXT_PREFIX: u8 = 0xb0;
const DOUBLE_OCTET: u8 = 0xe0;

/// IE identifiers, carrying the EN 300 175-5 identifier coding.
///
/// Identifiers with bit 8 set are fixed-length elements: single-octet
/// (value in the low nibble), single-octet extended (`0xb1..`, the value
/// nibble extends the identifier) and double-octet (`0xe0..`, a second
/// octet carries the value). All others are variable-length elements with
/// a length octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum IeType {
    // Fixed length, single octet
    RepeatIndicator = 0xd0,
    SendingComplete = 0xb1,
    DelimiterRequest = 0xb2,
    UseTpui = 0xb3,
    // Fixed length, double octet
    BasicService = 0xe0,
    ReleaseReason = 0xe2,
    Signal = 0xe4,
    TimerRestart = 0xe5,
    TestHookControl = 0xe6,
    SingleDisplay = 0xe8,
    SingleKeypad = 0xe9,
    // Variable length
    InfoType = 0x01,
    IdentityType = 0x02,
    PortableIdentity = 0x05,
    FixedIdentity = 0x06,
    LocationArea = 0x07,
    NwkAssignedIdentity = 0x09,
    AuthType = 0x0a,
    AllocationType = 0x0b,
    Rand = 0x0c,
    Res = 0x0d,
    Rs = 0x0e,
    IwuAttributes = 0x12,
    CallAttributes = 0x13,
    ServiceChangeInfo = 0x16,
    ConnectionAttributes = 0x17,
    CipherInfo = 0x19,
    CallIdentity = 0x1a,
    ConnectionIdentity = 0x1b,
    Facility = 0x1c,
    ProgressIndicator = 0x1e,
    MmsGenericHeader = 0x20,
    MmsObjectHeader = 0x21,
    MmsExtendedHeader = 0x22,
    TimeDate = 0x23,
    MultiDisplay = 0x28,
    MultiKeypad = 0x2c,
    FeatureActivate = 0x38,
    FeatureIndicate = 0x39,
    NetworkParameter = 0x41,
    ExtHoIndicator = 0x42,
    ZapField = 0x52,
    ServiceClass = 0x54,
    Key = 0x56,
    RejectReason = 0x60,
    SetupCapability = 0x62,
    TerminalCapability = 0x63,
    EndToEndCompatibility = 0x64,
    RateParameters = 0x65,
    TransitDelay = 0x66,
    WindowSize = 0x67,
    CallingPartyNumber = 0x6c,
    CallingPartyName = 0x6d,
    CalledPartyNumber = 0x70,
    CalledPartySubaddress = 0x71,
    Duration = 0x72,
    SegmentedInfo = 0x75,
    Alphanumeric = 0x76,
    IwuToIwu = 0x77,
    ModelIdentifier = 0x78,
    IwuPacket = 0x7a,
    EscapeToProprietary = 0x7b,
    CodecList = 0x7c,
    EventsNotification = 0x7d,
    CallInformation = 0x7e,
    EscapeForExtension = 0x7f,
    Unknown = 0x00,
}

impl From<u8> for IeType {
    fn from(v: u8) -> Self {
        match v {
            0xd0 => IeType::RepeatIndicator,
            0xb1 => IeType::SendingComplete,
            0xb2 => IeType::DelimiterRequest,
            0xb3 => IeType::UseTpui,
            0xe0 => IeType::BasicService,
            0xe2 => IeType::ReleaseReason,
            0xe4 => IeType::Signal,
            0xe5 => IeType::TimerRestart,
            0xe6 => IeType::TestHookControl,
            0xe8 => IeType::SingleDisplay,
            0xe9 => IeType::SingleKeypad,
            0x01 => IeType::InfoType,
            0x02 => IeType::IdentityType,
            0x05 => IeType::PortableIdentity,
            0x06 => IeType::FixedIdentity,
            0x07 => IeType::LocationArea,
            0x09 => IeType::NwkAssignedIdentity,
            0x0a => IeType::AuthType,
            0x0b => IeType::AllocationType,
            0x0c => IeType::Rand,
            0x0d => IeType::Res,
            0x0e => IeType::Rs,
            0x12 => IeType::IwuAttributes,
            0x13 => IeType::CallAttributes,
            0x16 => IeType::ServiceChangeInfo,
            0x17 => IeType::ConnectionAttributes,
            0x19 => IeType::CipherInfo,
            0x1a => IeType::CallIdentity,
            0x1b => IeType::ConnectionIdentity,
            0x1c => IeType::Facility,
            0x1e => IeType::ProgressIndicator,
            0x20 => IeType::MmsGenericHeader,
            0x21 => IeType::MmsObjectHeader,
            0x22 => IeType::MmsExtendedHeader,
            0x23 => IeType::TimeDate,
            0x28 => IeType::MultiDisplay,
            0x2c => IeType::MultiKeypad,
            0x38 => IeType::FeatureActivate,
            0x39 => IeType::FeatureIndicate,
            0x41 => IeType::NetworkParameter,
            0x42 => IeType::ExtHoIndicator,
            0x52 => IeType::ZapField,
            0x54 => IeType::ServiceClass,
            0x56 => IeType::Key,
            0x60 => IeType::RejectReason,
            0x62 => IeType::SetupCapability,
            0x63 => IeType::TerminalCapability,
            0x64 => IeType::EndToEndCompatibility,
            0x65 => IeType::RateParameters,
            0x66 => IeType::TransitDelay,
            0x67 => IeType::WindowSize,
            0x6c => IeType::CallingPartyNumber,
            0x6d => IeType::CallingPartyName,
            0x70 => IeType::CalledPartyNumber,
            0x71 => IeType::CalledPartySubaddress,
            0x72 => IeType::Duration,
            0x75 => IeType::SegmentedInfo,
            0x76 => IeType::Alphanumeric,
            0x77 => IeType::IwuToIwu,
            0x78 => IeType::ModelIdentifier,
            0x7a => IeType::IwuPacket,
            0x7b => IeType::EscapeToProprietary,
            0x7c => IeType::CodecList,
            0x7d => IeType::EventsNotification,
            0x7e => IeType::CallInformation,
            0x7f => IeType::EscapeForExtension,
            _ => IeType::Unknown,
        }
    }
}

impl IeType {
    /// Reports whether this is a fixed-length (1-2 octet) element.
    pub fn is_fixed_length(self) -> bool {
        self as u8 & FIXED_LEN != 0
    }

    /// Reports whether this is a double-octet element.
    pub fn is_double_octet(self) -> bool {
        self as u8 & 0xf0 == DOUBLE_OCTET
    }
}

/// A raw S-format encoded Information Element.
///
/// `payload` holds the content octets: the value nibble for single-octet
/// elements, the value octet for double-octet elements and the octets
/// following the length octet for variable-length elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ie {
    pub ie_type: IeType,
    pub payload: Vec<u8>,
}

impl Ie {
    pub fn new(ie_type: IeType, payload: Vec<u8>) -> Self {
        Ie { ie_type, payload }
    }

    /// Wire length of the IE, header included.
    pub fn len(&self) -> usize {
        let id = self.ie_type as u8;
        if id & FIXED_LEN != 0 {
            if self.ie_type.is_double_octet() {
                2
            } else {
                1
            }
        } else {
            2 + self.payload.len()
        }
    }

    /// Reports whether a variable-length IE carries no content.
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Serializes the IE, header included.
    pub fn marshal(&self) -> Vec<u8> {
        let id = self.ie_type as u8;
        if id & FIXED_LEN != 0 {
            if self.ie_type.is_double_octet() {
                vec![id, self.payload.first().copied().unwrap_or(0)]
            } else if id & FIXED_ID_MASK == EXT_PREFIX & FIXED_ID_MASK {
                // Extended single-octet elements carry their value in the
                // identifier itself.
                vec![id]
            } else {
                vec![id | (self.payload.first().copied().unwrap_or(0) & FIXED_VAL_MASK)]
            }
        } else {
            let mut out = Vec::with_capacity(2 + self.payload.len());
            out.push(id);
            out.push(self.payload.len() as u8);
            out.extend_from_slice(&self.payload);
            out
        }
    }

    /// Deserializes one IE from the head of `data`. Returns the IE and the
    /// number of octets it spans on the wire.
    pub fn unmarshal(data: &[u8]) -> Result<(Ie, usize), SfmtError> {
        let b0 = *data.first().ok_or(SfmtError::MalformedHeader)?;
        if b0 & FIXED_LEN != 0 {
            let base = FIXED_LEN | (b0 & FIXED_ID_MASK);
            let val = b0 & FIXED_VAL_MASK;
            if base == DOUBLE_OCTET {
                if data.len() < 2 {
                    return Err(SfmtError::MalformedHeader);
                }
                Ok((Ie::new(IeType::from(b0), vec![data[1]]), 2))
            } else if base == EXT_PREFIX {
                Ok((Ie::new(IeType::from(b0), Vec::new()), 1))
            } else {
                Ok((Ie::new(IeType::from(base), vec![val]), 1))
            }
        } else {
            if data.len() < 2 {
                return Err(SfmtError::MalformedHeader);
            }
            let len = data[1] as usize;
            if data.len() < 2 + len {
                return Err(SfmtError::MalformedHeader);
            }
            Ok((Ie::new(IeType::from(b0), data[2..2 + len].to_vec()), 2 + len))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_length_round_trip() {
        let ie = Ie::new(IeType::RejectReason, vec![0x01]);
        let marshaled = ie.marshal();
        assert_eq!(marshaled, [0x60, 0x01, 0x01]);
        let (parsed, len) = Ie::unmarshal(&marshaled).unwrap();
        assert_eq!(parsed, ie);
        assert_eq!(len, 3);
    }

    #[test]
    fn test_double_octet_round_trip() {
        let ie = Ie::new(IeType::ReleaseReason, vec![0x04]);
        let marshaled = ie.marshal();
        assert_eq!(marshaled, [0xe2, 0x04]);
        let (parsed, len) = Ie::unmarshal(&marshaled).unwrap();
        assert_eq!(parsed, ie);
        assert_eq!(len, 2);
    }

    #[test]
    fn test_single_octet_value_nibble() {
        let ie = Ie::new(IeType::RepeatIndicator, vec![0x01]);
        let marshaled = ie.marshal();
        assert_eq!(marshaled, [0xd1]);
        let (parsed, len) = Ie::unmarshal(&marshaled).unwrap();
        assert_eq!(parsed.ie_type, IeType::RepeatIndicator);
        assert_eq!(parsed.payload, [0x01]);
        assert_eq!(len, 1);
    }

    #[test]
    fn test_extended_single_octet() {
        let ie = Ie::new(IeType::SendingComplete, vec![]);
        let marshaled = ie.marshal();
        assert_eq!(marshaled, [0xb1]);
        let (parsed, len) = Ie::unmarshal(&marshaled).unwrap();
        assert_eq!(parsed.ie_type, IeType::SendingComplete);
        assert_eq!(len, 1);
    }

    #[test]
    fn test_empty_variable_length() {
        let (parsed, len) = Ie::unmarshal(&[0x05, 0x00]).unwrap();
        assert_eq!(parsed.ie_type, IeType::PortableIdentity);
        assert!(parsed.is_empty());
        assert_eq!(len, 2);
    }

    #[test]
    fn test_unmarshal_truncated_content() {
        // Length octet says 5, only 1 content octet follows.
        assert_eq!(
            Ie::unmarshal(&[0x60, 0x05, 0x01]),
            Err(SfmtError::MalformedHeader)
        );
    }

    #[test]
    fn test_unmarshal_truncated_double_octet() {
        assert_eq!(Ie::unmarshal(&[0xe2]), Err(SfmtError::MalformedHeader));
    }

    #[test]
    fn test_unmarshal_empty_buffer() {
        assert_eq!(Ie::unmarshal(&[]), Err(SfmtError::MalformedHeader));
    }

    #[test]
    fn test_wire_length_accounting() {
        let ie = Ie::new(IeType::IwuToIwu, vec![0x81, 1, 2, 3]);
        assert_eq!(ie.len(), 6);
        assert_eq!(ie.marshal().len(), 6);
    }
}
