//! CC-SETUP-ACK message.

use crate::ie::display::Display;
use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::facility::Facility;
use crate::ie::feature_indicate::FeatureIndicate;
use crate::ie::fixed_identity::FixedIdentity;
use crate::ie::info_type::InfoType;
use crate::ie::iwu_to_iwu::IwuToIwu;
use crate::ie::location_area::LocationArea;
use crate::ie::network_parameter::NetworkParameter;
use crate::ie::portable_identity::PortableIdentity;
use crate::ie::progress_indicator::ProgressIndicator;
use crate::ie::signal::Signal;
use crate::ie::value::{DelimiterRequest, IeList, IeValue};
use crate::ie::IeType;
use crate::message::descriptor::{
    IeDesc, MsgDesc, SlotReader, SlotWriter, IE_NONE, IE_OPTIONAL,
};
use crate::message::SFormatMessage;

pub const CC_SETUP_ACK_DESC: MsgDesc = MsgDesc {
    name: "CC-SETUP-ACK",
    ies: &[
        IeDesc::new(IeType::InfoType, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::PortableIdentity, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::FixedIdentity, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::LocationArea, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::IwuAttributes, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::CallAttributes, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::ConnectionAttributes, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::ConnectionIdentity, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_NONE),
        IeDesc::repeated(IeType::Facility, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_NONE),
        IeDesc::repeated(IeType::ProgressIndicator, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::SingleDisplay, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::Signal, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::FeatureIndicate, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::NetworkParameter, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::ExtHoIndicator, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::TransitDelay, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::WindowSize, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::DelimiterRequest, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_NONE),
        IeDesc::repeated(IeType::IwuToIwu, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::IwuPacket, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::CodecList, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::EscapeToProprietary, IE_OPTIONAL, IE_NONE),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CcSetupAckMsg {
    pub info_type: Option<InfoType>,
    pub portable_identity: Option<PortableIdentity>,
    pub fixed_identity: Option<FixedIdentity>,
    pub location_area: Option<LocationArea>,
    pub iwu_attributes: Option<IeValue>,
    pub call_attributes: Option<IeValue>,
    pub connection_attributes: Option<IeValue>,
    pub connection_identity: Option<IeValue>,
    pub facility: IeList<Facility>,
    pub progress_indicator: IeList<ProgressIndicator>,
    pub display: Option<Display>,
    pub signal: Option<Signal>,
    pub feature_indicate: Option<FeatureIndicate>,
    pub network_parameter: Option<NetworkParameter>,
    pub ext_ho_indicator: Option<IeValue>,
    pub transit_delay: Option<IeValue>,
    pub window_size: Option<IeValue>,
    pub delimiter_request: Option<DelimiterRequest>,
    pub iwu_to_iwu: IeList<IwuToIwu>,
    pub iwu_packet: Option<IeValue>,
    pub codec_list: Option<IeValue>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
}

impl SFormatMessage for CcSetupAckMsg {
    const DESC: &'static MsgDesc = &CC_SETUP_ACK_DESC;

    fn from_slots(r: &mut SlotReader) -> Self {
        CcSetupAckMsg {
            info_type: r.take(),
            portable_identity: r.take(),
            fixed_identity: r.take(),
            location_area: r.take(),
            iwu_attributes: r.take(),
            call_attributes: r.take(),
            connection_attributes: r.take(),
            connection_identity: r.take(),
            facility: r.take_list(),
            progress_indicator: r.take_list(),
            display: r.take(),
            signal: r.take(),
            feature_indicate: r.take(),
            network_parameter: r.take(),
            ext_ho_indicator: r.take(),
            transit_delay: r.take(),
            window_size: r.take(),
            delimiter_request: r.take(),
            iwu_to_iwu: r.take_list(),
            iwu_packet: r.take(),
            codec_list: r.take(),
            escape_to_proprietary: r.take(),
        }
    }

    fn to_slots(&self, w: &mut SlotWriter) {
        w.push(self.info_type.clone());
        w.push(self.portable_identity);
        w.push(self.fixed_identity);
        w.push(self.location_area);
        w.push(self.iwu_attributes.clone());
        w.push(self.call_attributes.clone());
        w.push(self.connection_attributes.clone());
        w.push(self.connection_identity.clone());
        w.push_list(self.facility.clone());
        w.push_list(self.progress_indicator.clone());
        w.push(self.display.clone());
        w.push(self.signal);
        w.push(self.feature_indicate);
        w.push(self.network_parameter.clone());
        w.push(self.ext_ho_indicator.clone());
        w.push(self.transit_delay.clone());
        w.push(self.window_size.clone());
        w.push(self.delimiter_request);
        w.push_list(self.iwu_to_iwu.clone());
        w.push(self.iwu_packet.clone());
        w.push(self.codec_list.clone());
        w.push(self.escape_to_proprietary.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mode;

    #[test]
    fn test_cc_setup_ack_round_trip() {
        let mut msg = CcSetupAckMsg::default();
        msg.location_area = Some(LocationArea::new(0, 36));
        msg.signal = Some(Signal::new(Signal::DIAL_TONE_ON));
        msg.delimiter_request = Some(DelimiterRequest);
        let wire = msg.build(Mode::Fp).unwrap();
        assert_eq!(CcSetupAckMsg::parse(Mode::Pp, &wire).unwrap(), msg);
    }

    #[test]
    fn test_cc_setup_ack_is_fp_to_pp_only() {
        let mut msg = CcSetupAckMsg::default();
        msg.signal = Some(Signal::new(0));
        assert!(msg.build(Mode::Pp).is_err());
    }
}
