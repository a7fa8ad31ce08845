//! CC-INFO message.

use crate::ie::called_party_number::CalledPartyNumber;
use crate::ie::calling_party_name::CallingPartyName;
use crate::ie::calling_party_number::CallingPartyNumber;
use crate::ie::codec_list::CodecList;
use crate::ie::display::Display;
use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::facility::Facility;
use crate::ie::feature_activate::FeatureActivate;
use crate::ie::feature_indicate::FeatureIndicate;
use crate::ie::iwu_to_iwu::IwuToIwu;
use crate::ie::keypad::Keypad;
use crate::ie::location_area::LocationArea;
use crate::ie::network_parameter::NetworkParameter;
use crate::ie::progress_indicator::ProgressIndicator;
use crate::ie::signal::Signal;
use crate::ie::value::{IeList, IeValue, SendingComplete};
use crate::ie::IeType;
use crate::message::descriptor::{
    IeDesc, MsgDesc, SlotReader, SlotWriter, IE_NONE, IE_OPTIONAL,
};
use crate::message::SFormatMessage;

pub const CC_INFO_DESC: MsgDesc = MsgDesc {
    name: "CC-INFO",
    ies: &[
        IeDesc::new(IeType::LocationArea, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::NwkAssignedIdentity, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::repeated(IeType::Facility, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::repeated(IeType::ProgressIndicator, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::SingleDisplay, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::SingleKeypad, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::Signal, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::FeatureActivate, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::FeatureIndicate, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::NetworkParameter, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::ExtHoIndicator, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::CallingPartyNumber, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::CalledPartyNumber, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::CalledPartySubaddress, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::SendingComplete, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::TestHookControl, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::repeated(IeType::IwuToIwu, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::IwuPacket, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::CallingPartyName, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::CodecList, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::CallInformation, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::EscapeToProprietary, IE_OPTIONAL, IE_OPTIONAL),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CcInfoMsg {
    pub location_area: Option<LocationArea>,
    pub nwk_assigned_identity: Option<IeValue>,
    pub facility: IeList<Facility>,
    pub progress_indicator: IeList<ProgressIndicator>,
    pub display: Option<Display>,
    pub keypad: Option<Keypad>,
    pub signal: Option<Signal>,
    pub feature_activate: Option<FeatureActivate>,
    pub feature_indicate: Option<FeatureIndicate>,
    pub network_parameter: Option<NetworkParameter>,
    pub ext_ho_indicator: Option<IeValue>,
    pub calling_party_number: Option<CallingPartyNumber>,
    pub called_party_number: Option<CalledPartyNumber>,
    pub called_party_subaddress: Option<IeValue>,
    pub sending_complete: Option<SendingComplete>,
    pub test_hook_control: Option<IeValue>,
    pub iwu_to_iwu: IeList<IwuToIwu>,
    pub iwu_packet: Option<IeValue>,
    pub calling_party_name: Option<CallingPartyName>,
    pub codec_list: Option<CodecList>,
    pub call_information: Option<IeValue>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
}

impl SFormatMessage for CcInfoMsg {
    const DESC: &'static MsgDesc = &CC_INFO_DESC;

    fn from_slots(r: &mut SlotReader) -> Self {
        CcInfoMsg {
            location_area: r.take(),
            nwk_assigned_identity: r.take(),
            facility: r.take_list(),
            progress_indicator: r.take_list(),
            display: r.take(),
            keypad: r.take(),
            signal: r.take(),
            feature_activate: r.take(),
            feature_indicate: r.take(),
            network_parameter: r.take(),
            ext_ho_indicator: r.take(),
            calling_party_number: r.take(),
            called_party_number: r.take(),
            called_party_subaddress: r.take(),
            sending_complete: r.take(),
            test_hook_control: r.take(),
            iwu_to_iwu: r.take_list(),
            iwu_packet: r.take(),
            calling_party_name: r.take(),
            codec_list: r.take(),
            call_information: r.take(),
            escape_to_proprietary: r.take(),
        }
    }

    fn to_slots(&self, w: &mut SlotWriter) {
        w.push(self.location_area);
        w.push(self.nwk_assigned_identity.clone());
        w.push_list(self.facility.clone());
        w.push_list(self.progress_indicator.clone());
        w.push(self.display.clone());
        w.push(self.keypad.clone());
        w.push(self.signal);
        w.push(self.feature_activate);
        w.push(self.feature_indicate);
        w.push(self.network_parameter.clone());
        w.push(self.ext_ho_indicator.clone());
        w.push(self.calling_party_number.clone());
        w.push(self.called_party_number.clone());
        w.push(self.called_party_subaddress.clone());
        w.push(self.sending_complete);
        w.push(self.test_hook_control.clone());
        w.push_list(self.iwu_to_iwu.clone());
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
    use crate::Mode;

    #[test]
    fn test_cc_info_round_trip() {
        let mut msg = CcInfoMsg::default();
        msg.keypad = Some(Keypad::new(*b"123"));
        msg.sending_complete = Some(SendingComplete);
        let wire = msg.build(Mode::Pp).unwrap();
        let parsed = CcInfoMsg::parse(Mode::Fp, &wire).unwrap();
        assert_eq!(parsed, msg);
    }

    #[test]
    fn test_cc_info_multi_keypad_accepted_for_single_entry() {
        // Descriptor says SINGLE-KEYPAD; a 3-character keypad goes out as
        // MULTI-KEYPAD and must still parse into the same slot.
        let mut msg = CcInfoMsg::default();
        msg.keypad = Some(Keypad::new(*b"987"));
        let wire = msg.build(Mode::Pp).unwrap();
        assert_eq!(wire[0], IeType::MultiKeypad as u8);
        let parsed = CcInfoMsg::parse(Mode::Fp, &wire).unwrap();
        assert_eq!(parsed.keypad, msg.keypad);
    }

    #[test]
    fn test_cc_info_empty_message() {
        let msg = CcInfoMsg::default();
        let wire = msg.build(Mode::Fp).unwrap();
        assert!(wire.is_empty());
        assert_eq!(CcInfoMsg::parse(Mode::Pp, &wire).unwrap(), msg);
    }
}
