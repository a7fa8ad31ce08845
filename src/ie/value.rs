//! Typed IE values and the process-wide parse/build registry.
//!
//! [`IeValue`] is the union of every IE kind the codec understands; kinds
//! carried but not interpreted (IWU-ATTRIBUTES, CALL-ATTRIBUTES and
//! friends) pass through as [`IeValue::Opaque`] so messages round-trip
//! bit-exactly. The registry is static: dispatch is a match on the IE
//! identifier, populated at compile time.

use crate::error::SfmtError;
use crate::ie::allocation_type::AllocationType;
use crate::ie::auth_res::AuthRes;
use crate::ie::auth_type::AuthType;
use crate::ie::auth_value::AuthValue;
use crate::ie::basic_service::BasicService;
use crate::ie::called_party_number::CalledPartyNumber;
use crate::ie::calling_party_name::CallingPartyName;
use crate::ie::calling_party_number::CallingPartyNumber;
use crate::ie::cipher_info::CipherInfo;
use crate::ie::codec_list::CodecList;
use crate::ie::display::Display;
use crate::ie::duration::DurationIe;
use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::events_notification::EventsNotification;
use crate::ie::facility::Facility;
use crate::ie::feature_activate::FeatureActivate;
use crate::ie::feature_indicate::FeatureIndicate;
use crate::ie::fixed_identity::FixedIdentity;
use crate::ie::identity_type::IdentityType;
use crate::ie::info_type::InfoType;
use crate::ie::iwu_to_iwu::IwuToIwu;
use crate::ie::keypad::Keypad;
use crate::ie::location_area::LocationArea;
use crate::ie::network_parameter::NetworkParameter;
use crate::ie::portable_identity::PortableIdentity;
use crate::ie::progress_indicator::ProgressIndicator;
use crate::ie::reject_reason::RejectReason;
use crate::ie::release_reason::ReleaseReason;
use crate::ie::repeat_indicator::ListType;
use crate::ie::service_change_info::ServiceChangeInfo;
use crate::ie::setup_capability::SetupCapability;
use crate::ie::signal::Signal;
use crate::ie::terminal_capability::TerminalCapability;
use crate::ie::time_date::TimeDate;
use crate::ie::timer_restart::TimerRestart;
use crate::ie::{Ie, IeType};

/// SENDING-COMPLETE marker element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SendingComplete;

/// DELIMITER-REQUEST marker element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DelimiterRequest;

/// USE-TPUI marker element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UseTpui;

/// A typed Information Element value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IeValue {
    RepeatIndicator(ListType),
    SendingComplete(SendingComplete),
    DelimiterRequest(DelimiterRequest),
    UseTpui(UseTpui),
    BasicService(BasicService),
    ReleaseReason(ReleaseReason),
    Signal(Signal),
    TimerRestart(TimerRestart),
    Display(Display),
    Keypad(Keypad),
    InfoType(InfoType),
    IdentityType(IdentityType),
    PortableIdentity(PortableIdentity),
    FixedIdentity(FixedIdentity),
    LocationArea(LocationArea),
    AllocationType(AllocationType),
    AuthType(AuthType),
    AuthValue(AuthValue),
    AuthRes(AuthRes),
    CipherInfo(CipherInfo),
    Facility(Facility),
    ProgressIndicator(ProgressIndicator),
    TimeDate(TimeDate),
    FeatureActivate(FeatureActivate),
    FeatureIndicate(FeatureIndicate),
    NetworkParameter(NetworkParameter),
    RejectReason(RejectReason),
    SetupCapability(SetupCapability),
    TerminalCapability(TerminalCapability),
    CallingPartyNumber(CallingPartyNumber),
    CallingPartyName(CallingPartyName),
    CalledPartyNumber(CalledPartyNumber),
    Duration(DurationIe),
    IwuToIwu(IwuToIwu),
    EscapeToProprietary(EscapeToProprietary),
    CodecList(CodecList),
    ServiceChangeInfo(ServiceChangeInfo),
    EventsNotification(EventsNotification),
    /// An IE kind carried without interpretation.
    Opaque { ie_type: IeType, data: Vec<u8> },
}

impl IeValue {
    /// Parses the typed value out of a raw IE.
    pub fn parse(ie: &Ie) -> Result<IeValue, SfmtError> {
        use IeType::*;
        let p = ie.payload.as_slice();
        Ok(match ie.ie_type {
            RepeatIndicator => IeValue::RepeatIndicator(ListType::unmarshal(p)?),
            IeType::SendingComplete => IeValue::SendingComplete(self::SendingComplete),
            IeType::DelimiterRequest => IeValue::DelimiterRequest(self::DelimiterRequest),
            IeType::UseTpui => IeValue::UseTpui(self::UseTpui),
            BasicService => IeValue::BasicService(self::BasicService::unmarshal(p)?),
            ReleaseReason => IeValue::ReleaseReason(self::ReleaseReason::unmarshal(p)?),
            Signal => IeValue::Signal(self::Signal::unmarshal(p)?),
            TimerRestart => IeValue::TimerRestart(self::TimerRestart::unmarshal(p)?),
            SingleDisplay | MultiDisplay => IeValue::Display(Display::unmarshal(p)?),
            SingleKeypad | MultiKeypad => IeValue::Keypad(Keypad::unmarshal(p)?),
            InfoType => IeValue::InfoType(self::InfoType::unmarshal(p)?),
            IdentityType => IeValue::IdentityType(self::IdentityType::unmarshal(p)?),
            PortableIdentity => IeValue::PortableIdentity(self::PortableIdentity::unmarshal(p)?),
            FixedIdentity => IeValue::FixedIdentity(self::FixedIdentity::unmarshal(p)?),
            LocationArea => IeValue::LocationArea(self::LocationArea::unmarshal(p)?),
            AllocationType => IeValue::AllocationType(self::AllocationType::unmarshal(p)?),
            AuthType => IeValue::AuthType(self::AuthType::unmarshal(p)?),
            Rand | Rs => IeValue::AuthValue(AuthValue::unmarshal(p)?),
            Res => IeValue::AuthRes(AuthRes::unmarshal(p)?),
            CipherInfo => IeValue::CipherInfo(self::CipherInfo::unmarshal(p)?),
            Facility => IeValue::Facility(self::Facility::unmarshal(p)?),
            ProgressIndicator => {
                IeValue::ProgressIndicator(self::ProgressIndicator::unmarshal(p)?)
            }
            TimeDate => IeValue::TimeDate(self::TimeDate::unmarshal(p)?),
            FeatureActivate => IeValue::FeatureActivate(self::FeatureActivate::unmarshal(p)?),
            FeatureIndicate => IeValue::FeatureIndicate(self::FeatureIndicate::unmarshal(p)?),
            NetworkParameter => IeValue::NetworkParameter(self::NetworkParameter::unmarshal(p)?),
            RejectReason => IeValue::RejectReason(self::RejectReason::unmarshal(p)?),
            SetupCapability => IeValue::SetupCapability(self::SetupCapability::unmarshal(p)?),
            TerminalCapability => {
                IeValue::TerminalCapability(self::TerminalCapability::unmarshal(p)?)
            }
            CallingPartyNumber => {
                IeValue::CallingPartyNumber(self::CallingPartyNumber::unmarshal(p)?)
            }
            CallingPartyName => IeValue::CallingPartyName(self::CallingPartyName::unmarshal(p)?),
            CalledPartyNumber => {
                IeValue::CalledPartyNumber(self::CalledPartyNumber::unmarshal(p)?)
            }
            Duration => IeValue::Duration(DurationIe::unmarshal(p)?),
            IwuToIwu => IeValue::IwuToIwu(self::IwuToIwu::unmarshal(p)?),
            EscapeToProprietary => {
                IeValue::EscapeToProprietary(self::EscapeToProprietary::unmarshal(p)?)
            }
            CodecList => IeValue::CodecList(self::CodecList::unmarshal(p)?),
            ServiceChangeInfo => IeValue::ServiceChangeInfo(self::ServiceChangeInfo::unmarshal(p)?),
            EventsNotification => {
                IeValue::EventsNotification(self::EventsNotification::unmarshal(p)?)
            }
            Unknown => {
                return Err(SfmtError::InvalidIeContents {
                    ie_type: IeType::Unknown,
                })
            }
            other => IeValue::Opaque {
                ie_type: other,
                data: p.to_vec(),
            },
        })
    }

    /// Builds the raw IE for this value. `ie_type` is the identifier the
    /// message descriptor expects; it resolves the kinds with more than one
    /// wire form (SINGLE/MULTI display and keypad, RAND vs RS).
    pub fn build(&self, ie_type: IeType) -> Result<Ie, SfmtError> {
        let misuse = SfmtError::InvalidIe { ie_type };
        let ie = match self {
            IeValue::Display(d) => {
                // A display string longer than one character is promoted to
                // the MULTI-DISPLAY form.
                if ie_type == IeType::SingleDisplay && d.info.len() <= 1 {
                    Ie::new(
                        IeType::SingleDisplay,
                        vec![d.info.first().copied().unwrap_or(0)],
                    )
                } else if matches!(ie_type, IeType::SingleDisplay | IeType::MultiDisplay) {
                    Ie::new(IeType::MultiDisplay, d.marshal())
                } else {
                    return Err(misuse);
                }
            }
            IeValue::Keypad(k) => {
                if ie_type == IeType::SingleKeypad && k.info.len() <= 1 {
                    Ie::new(
                        IeType::SingleKeypad,
                        vec![k.info.first().copied().unwrap_or(0)],
                    )
                } else if matches!(ie_type, IeType::SingleKeypad | IeType::MultiKeypad) {
                    Ie::new(IeType::MultiKeypad, k.marshal())
                } else {
                    return Err(misuse);
                }
            }
            IeValue::AuthValue(v) => {
                if !matches!(ie_type, IeType::Rand | IeType::Rs) {
                    return Err(misuse);
                }
                Ie::new(ie_type, v.marshal().to_vec())
            }
            IeValue::Opaque { ie_type: t, data } => {
                if *t != ie_type {
                    return Err(misuse);
                }
                Ie::new(*t, data.clone())
            }
            IeValue::RepeatIndicator(t) => Ie::new(IeType::RepeatIndicator, t.marshal().to_vec()),
            IeValue::SendingComplete(_) => Ie::new(IeType::SendingComplete, Vec::new()),
            IeValue::DelimiterRequest(_) => Ie::new(IeType::DelimiterRequest, Vec::new()),
            IeValue::UseTpui(_) => Ie::new(IeType::UseTpui, Vec::new()),
            IeValue::BasicService(v) => Ie::new(IeType::BasicService, v.marshal().to_vec()),
            IeValue::ReleaseReason(v) => Ie::new(IeType::ReleaseReason, v.marshal().to_vec()),
            IeValue::Signal(v) => Ie::new(IeType::Signal, v.marshal().to_vec()),
            IeValue::TimerRestart(v) => Ie::new(IeType::TimerRestart, v.marshal().to_vec()),
            IeValue::InfoType(v) => Ie::new(IeType::InfoType, v.marshal()),
            IeValue::IdentityType(v) => Ie::new(IeType::IdentityType, v.marshal().to_vec()),
            IeValue::PortableIdentity(v) => Ie::new(IeType::PortableIdentity, v.marshal()?),
            IeValue::FixedIdentity(v) => Ie::new(IeType::FixedIdentity, v.marshal()),
            IeValue::LocationArea(v) => Ie::new(IeType::LocationArea, v.marshal().to_vec()),
            IeValue::AllocationType(v) => Ie::new(IeType::AllocationType, v.marshal().to_vec()),
            IeValue::AuthType(v) => Ie::new(IeType::AuthType, v.marshal()),
            IeValue::AuthRes(v) => Ie::new(IeType::Res, v.marshal().to_vec()),
            IeValue::CipherInfo(v) => Ie::new(IeType::CipherInfo, v.marshal().to_vec()),
            IeValue::Facility(v) => Ie::new(IeType::Facility, v.marshal()),
            IeValue::ProgressIndicator(v) => {
                Ie::new(IeType::ProgressIndicator, v.marshal().to_vec())
            }
            IeValue::TimeDate(v) => Ie::new(IeType::TimeDate, v.marshal()),
            IeValue::FeatureActivate(v) => Ie::new(IeType::FeatureActivate, v.marshal().to_vec()),
            IeValue::FeatureIndicate(v) => Ie::new(IeType::FeatureIndicate, v.marshal().to_vec()),
            IeValue::NetworkParameter(v) => Ie::new(IeType::NetworkParameter, v.marshal()),
            IeValue::RejectReason(v) => Ie::new(IeType::RejectReason, v.marshal().to_vec()),
            IeValue::SetupCapability(v) => Ie::new(IeType::SetupCapability, v.marshal().to_vec()),
            IeValue::TerminalCapability(v) => Ie::new(IeType::TerminalCapability, v.marshal()),
            IeValue::CallingPartyNumber(v) => Ie::new(IeType::CallingPartyNumber, v.marshal()),
            IeValue::CallingPartyName(v) => Ie::new(IeType::CallingPartyName, v.marshal()),
            IeValue::CalledPartyNumber(v) => Ie::new(IeType::CalledPartyNumber, v.marshal()),
            IeValue::Duration(v) => Ie::new(IeType::Duration, v.marshal()),
            IeValue::IwuToIwu(v) => Ie::new(IeType::IwuToIwu, v.marshal()),
            IeValue::EscapeToProprietary(v) => Ie::new(IeType::EscapeToProprietary, v.marshal()),
            IeValue::CodecList(v) => Ie::new(IeType::CodecList, v.marshal()),
            IeValue::ServiceChangeInfo(v) => {
                Ie::new(IeType::ServiceChangeInfo, v.marshal().to_vec())
            }
            IeValue::EventsNotification(v) => Ie::new(IeType::EventsNotification, v.marshal()),
        };
        if !matches!(
            self,
            IeValue::Display(_) | IeValue::Keypad(_) | IeValue::AuthValue(_) | IeValue::Opaque { .. }
        ) && ie.ie_type != ie_type
        {
            return Err(misuse);
        }
        Ok(ie)
    }
}

/// Extraction of a typed value out of the [`IeValue`] union.
pub trait FromIeValue: Sized {
    fn from_value(v: IeValue) -> Option<Self>;
}

impl FromIeValue for IeValue {
    fn from_value(v: IeValue) -> Option<Self> {
        Some(v)
    }
}

macro_rules! ie_value_conv {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for IeValue {
                fn from(v: $ty) -> IeValue {
                    IeValue::$variant(v)
                }
            }

            impl FromIeValue for $ty {
                fn from_value(v: IeValue) -> Option<$ty> {
                    match v {
                        IeValue::$variant(x) => Some(x),
                        _ => None,
                    }
                }
            }
        )*
    };
}

ie_value_conv! {
    SendingComplete => SendingComplete,
    DelimiterRequest => DelimiterRequest,
    UseTpui => UseTpui,
    BasicService => BasicService,
    ReleaseReason => ReleaseReason,
    Signal => Signal,
    TimerRestart => TimerRestart,
    Display => Display,
    Keypad => Keypad,
    InfoType => InfoType,
    IdentityType => IdentityType,
    PortableIdentity => PortableIdentity,
    FixedIdentity => FixedIdentity,
    LocationArea => LocationArea,
    AllocationType => AllocationType,
    AuthType => AuthType,
    AuthValue => AuthValue,
    AuthRes => AuthRes,
    CipherInfo => CipherInfo,
    Facility => Facility,
    ProgressIndicator => ProgressIndicator,
    TimeDate => TimeDate,
    FeatureActivate => FeatureActivate,
    FeatureIndicate => FeatureIndicate,
    NetworkParameter => NetworkParameter,
    RejectReason => RejectReason,
    SetupCapability => SetupCapability,
    TerminalCapability => TerminalCapability,
    CallingPartyNumber => CallingPartyNumber,
    CallingPartyName => CallingPartyName,
    CalledPartyNumber => CalledPartyNumber,
    Duration => DurationIe,
    IwuToIwu => IwuToIwu,
    EscapeToProprietary => EscapeToProprietary,
    CodecList => CodecList,
    ServiceChangeInfo => ServiceChangeInfo,
    EventsNotification => EventsNotification,
}

/// An ordered, homogeneous list of repeated IEs with its list type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IeList<T = IeValue> {
    pub kind: ListType,
    pub items: Vec<T>,
}

impl<T> Default for IeList<T> {
    fn default() -> Self {
        IeList {
            kind: ListType::Normal,
            items: Vec::new(),
        }
    }
}

impl<T> IeList<T> {
    pub fn new(kind: ListType, items: Vec<T>) -> Self {
        IeList { kind, items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }
}

impl<T: Into<IeValue>> IeList<T> {
    /// Converts a typed list into the untyped slot form.
    pub fn into_raw(self) -> IeList<IeValue> {
        IeList {
            kind: self.kind,
            items: self.items.into_iter().map(Into::into).collect(),
        }
    }
}

impl IeList<IeValue> {
    /// Converts an untyped slot list into a typed one, dropping values of
    /// a foreign kind.
    pub fn into_typed<T: FromIeValue>(self) -> IeList<T> {
        IeList {
            kind: self.kind,
            items: self
                .items
                .into_iter()
                .filter_map(T::from_value)
                .collect(),
        }
    }
}

impl<T> From<Vec<T>> for IeList<T> {
    fn from(items: Vec<T>) -> Self {
        IeList {
            kind: ListType::Normal,
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_parse_build_round_trip() {
        let ie = Ie::new(IeType::ReleaseReason, vec![0x04]);
        let v = IeValue::parse(&ie).unwrap();
        assert_eq!(
            v,
            IeValue::ReleaseReason(ReleaseReason::InvalidIeContents)
        );
        assert_eq!(v.build(IeType::ReleaseReason).unwrap(), ie);
    }

    #[test]
    fn test_value_build_type_mismatch() {
        let v = IeValue::ReleaseReason(ReleaseReason::Normal);
        assert!(v.build(IeType::Signal).is_err());
    }

    #[test]
    fn test_single_display_promotion() {
        let v = IeValue::Display(Display::new(*b"HELLO"));
        let ie = v.build(IeType::SingleDisplay).unwrap();
        assert_eq!(ie.ie_type, IeType::MultiDisplay);

        let v = IeValue::Display(Display::single(b'x'));
        let ie = v.build(IeType::SingleDisplay).unwrap();
        assert_eq!(ie.ie_type, IeType::SingleDisplay);
    }

    #[test]
    fn test_auth_value_builds_as_rand_or_rs() {
        let v = IeValue::AuthValue(AuthValue::new(7));
        assert_eq!(v.build(IeType::Rand).unwrap().ie_type, IeType::Rand);
        assert_eq!(v.build(IeType::Rs).unwrap().ie_type, IeType::Rs);
        assert!(v.build(IeType::Res).is_err());
    }

    #[test]
    fn test_opaque_passthrough() {
        let ie = Ie::new(IeType::IwuAttributes, vec![1, 2, 3]);
        let v = IeValue::parse(&ie).unwrap();
        assert!(matches!(v, IeValue::Opaque { .. }));
        assert_eq!(v.build(IeType::IwuAttributes).unwrap(), ie);
        assert!(v.build(IeType::CallAttributes).is_err());
    }

    #[test]
    fn test_typed_list_conversion() {
        let raw: IeList = IeList::new(
            ListType::Prioritized,
            vec![
                IeValue::Signal(Signal::new(1)),
                IeValue::ReleaseReason(ReleaseReason::Normal),
            ],
        );
        let typed: IeList<Signal> = raw.into_typed();
        assert_eq!(typed.kind, ListType::Prioritized);
        assert_eq!(typed.items, vec![Signal::new(1)]);
    }
}
