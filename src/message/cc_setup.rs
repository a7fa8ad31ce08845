//! CC-SETUP message.

use crate::ie::basic_service::BasicService;
use crate::ie::called_party_number::CalledPartyNumber;
use crate::ie::calling_party_name::CallingPartyName;
use crate::ie::calling_party_number::CallingPartyNumber;
use crate::ie::cipher_info::CipherInfo;
use crate::ie::codec_list::CodecList;
use crate::ie::display::Display;
use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::facility::Facility;
use crate::ie::feature_activate::FeatureActivate;
use crate::ie::feature_indicate::FeatureIndicate;
use crate::ie::fixed_identity::FixedIdentity;
use crate::ie::iwu_to_iwu::IwuToIwu;
use crate::ie::keypad::Keypad;
use crate::ie::network_parameter::NetworkParameter;
use crate::ie::portable_identity::PortableIdentity;
use crate::ie::progress_indicator::ProgressIndicator;
use crate::ie::signal::Signal;
use crate::ie::terminal_capability::TerminalCapability;
use crate::ie::value::{IeList, IeValue, SendingComplete};
use crate::ie::IeType;
use crate::message::descriptor::{
    IeDesc, MsgDesc, SlotReader, SlotWriter, IE_MANDATORY, IE_NONE, IE_OPTIONAL,
};
use crate::message::SFormatMessage;

pub const CC_SETUP_DESC: MsgDesc = MsgDesc {
    name: "CC-SETUP",
    ies: &[
        IeDesc::new(IeType::PortableIdentity, IE_MANDATORY, IE_MANDATORY),
        IeDesc::new(IeType::FixedIdentity, IE_MANDATORY, IE_MANDATORY),
        IeDesc::new(IeType::NwkAssignedIdentity, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::BasicService, IE_MANDATORY, IE_MANDATORY),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::repeated(IeType::IwuAttributes, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::repeated(IeType::CallAttributes, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::repeated(IeType::ConnectionAttributes, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::CipherInfo, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::ConnectionIdentity, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::repeated(IeType::Facility, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_NONE),
        IeDesc::repeated(IeType::ProgressIndicator, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::SingleDisplay, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::SingleKeypad, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::Signal, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::FeatureActivate, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::FeatureIndicate, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::NetworkParameter, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::ExtHoIndicator, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::TerminalCapability, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::EndToEndCompatibility, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::RateParameters, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::TransitDelay, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::WindowSize, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::CallingPartyNumber, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::CalledPartyNumber, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::CalledPartySubaddress, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::SendingComplete, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::repeated(IeType::SegmentedInfo, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::IwuToIwu, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::IwuPacket, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::CallingPartyName, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::CodecList, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::CallInformation, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::EscapeToProprietary, IE_OPTIONAL, IE_OPTIONAL),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CcSetupMsg {
    pub portable_identity: Option<PortableIdentity>,
    pub fixed_identity: Option<FixedIdentity>,
    pub nwk_assigned_identity: Option<IeValue>,
    pub basic_service: Option<BasicService>,
    pub iwu_attributes: IeList<IeValue>,
    pub call_attributes: IeList<IeValue>,
    pub connection_attributes: IeList<IeValue>,
    pub cipher_info: Option<CipherInfo>,
    pub connection_identity: Option<IeValue>,
    pub facility: IeList<Facility>,
    pub progress_indicator: IeList<ProgressIndicator>,
    pub display: Option<Display>,
    pub keypad: Option<Keypad>,
    pub signal: Option<Signal>,
    pub feature_activate: Option<FeatureActivate>,
    pub feature_indicate: Option<FeatureIndicate>,
    pub network_parameter: Option<NetworkParameter>,
    pub ext_ho_indicator: Option<IeValue>,
    pub terminal_capability: Option<TerminalCapability>,
    pub end_to_end_compatibility: Option<IeValue>,
    pub rate_parameters: Option<IeValue>,
    pub transit_delay: Option<IeValue>,
    pub window_size: Option<IeValue>,
    pub calling_party_number: Option<CallingPartyNumber>,
    pub called_party_number: Option<CalledPartyNumber>,
    pub called_party_subaddress: Option<IeValue>,
    pub sending_complete: Option<SendingComplete>,
    pub segmented_info: IeList<IeValue>,
    pub iwu_to_iwu: Option<IwuToIwu>,
    pub iwu_packet: Option<IeValue>,
    pub calling_party_name: Option<CallingPartyName>,
    pub codec_list: Option<CodecList>,
    pub call_information: Option<IeValue>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
}

impl SFormatMessage for CcSetupMsg {
    const DESC: &'static MsgDesc = &CC_SETUP_DESC;

    fn from_slots(r: &mut SlotReader) -> Self {
        CcSetupMsg {
            portable_identity: r.take(),
            fixed_identity: r.take(),
            nwk_assigned_identity: r.take(),
            basic_service: r.take(),
            iwu_attributes: r.take_list(),
            call_attributes: r.take_list(),
            connection_attributes: r.take_list(),
            cipher_info: r.take(),
            connection_identity: r.take(),
            facility: r.take_list(),
            progress_indicator: r.take_list(),
            display: r.take(),
            keypad: r.take(),
            signal: r.take(),
            feature_activate: r.take(),
            feature_indicate: r.take(),
            network_parameter: r.take(),
            ext_ho_indicator: r.take(),
            terminal_capability: r.take(),
            end_to_end_compatibility: r.take(),
            rate_parameters: r.take(),
            transit_delay: r.take(),
            window_size: r.take(),
            calling_party_number: r.take(),
            called_party_number: r.take(),
            called_party_subaddress: r.take(),
            sending_complete: r.take(),
            segmented_info: r.take_list(),
            iwu_to_iwu: r.take(),
            iwu_packet: r.take(),
            calling_party_name: r.take(),
            codec_list: r.take(),
            call_information: r.take(),
            escape_to_proprietary: r.take(),
        }
    }

    fn to_slots(&self, w: &mut SlotWriter) {
        w.push(self.portable_identity);
        w.push(self.fixed_identity);
        w.push(self.nwk_assigned_identity.clone());
        w.push(self.basic_service);
        w.push_list(self.iwu_attributes.clone());
        w.push_list(self.call_attributes.clone());
        w.push_list(self.connection_attributes.clone());
        w.push(self.cipher_info);
        w.push(self.connection_identity.clone());
        w.push_list(self.facility.clone());
        w.push_list(self.progress_indicator.clone());
        w.push(self.display.clone());
        w.push(self.keypad.clone());
        w.push(self.signal);
        w.push(self.feature_activate);
        w.push(self.feature_indicate);
        w.push(self.network_parameter.clone());
        w.push(self.ext_ho_indicator.clone());
        w.push(self.terminal_capability);
        w.push(self.end_to_end_compatibility.clone());
        w.push(self.rate_parameters.clone());
        w.push(self.transit_delay.clone());
        w.push(self.window_size.clone());
        w.push(self.calling_party_number.clone());
        w.push(self.called_party_number.clone());
        w.push(self.called_party_subaddress.clone());
        w.push(self.sending_complete);
        w.push_list(self.segmented_info.clone());
        w.push(self.iwu_to_iwu.clone());
        w.push(self.iwu_packet.clone());
        w.push(self.calling_party_name.clone());
        w.push(self.codec_list.clone());
        w.push(self.call_information.clone());
        w.push(self.escape_to_proprietary.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SfmtError;
    use crate::ie::basic_service::{CallClass, ServiceType};
    use crate::ie::called_party_number::CalledPartyNumber;
    use crate::ie::calling_party_number::{NumberType, Npi};
    use crate::identity::{Ari, Ipei, Ipui};
    use crate::ie::fixed_identity::FixedIdentity;
    use crate::Mode;

    fn sample() -> CcSetupMsg {
        let mut msg = CcSetupMsg::default();
        msg.portable_identity = Some(PortableIdentity::Ipui(Ipui::N(Ipei::new(0x123, 0x456789))));
        msg.fixed_identity = Some(FixedIdentity::park(Ari::ClassA {
            emc: 0x123,
            fpn: 0x11,
        }));
        msg.basic_service = Some(BasicService::new(
            CallClass::Normal,
            ServiceType::BasicSpeechDefault,
        ));
        msg.called_party_number = Some(CalledPartyNumber::new(
            NumberType::Unknown,
            Npi::Unknown,
            *b"5551234",
        ));
        msg
    }

    #[test]
    fn test_cc_setup_round_trip() {
        let msg = sample();
        // Built by the PP, parsed by the FP.
        let wire = msg.build(Mode::Pp).unwrap();
        assert_eq!(wire[0], IeType::PortableIdentity as u8);
        let parsed = CcSetupMsg::parse(Mode::Fp, &wire).unwrap();
        assert_eq!(parsed, msg);
    }

    #[test]
    fn test_cc_setup_missing_basic_service() {
        let mut msg = sample();
        msg.basic_service = None;
        assert_eq!(
            msg.build(Mode::Pp),
            Err(SfmtError::MandatoryIeMissing {
                ie_type: IeType::BasicService
            })
        );
    }

    #[test]
    fn test_cc_setup_keypad_only_towards_fp(){
        let mut msg = sample();
        msg.keypad = Some(Keypad::new(*b"1234"));
        // PP may send keypad information, the FP may not.
        assert!(msg.build(Mode::Pp).is_ok());
        assert!(msg.build(Mode::Fp).is_err());
    }
}
