//! CC-CONNECT message.

use crate::ie::display::Display;
use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::facility::Facility;
use crate::ie::feature_indicate::FeatureIndicate;
use crate::ie::iwu_to_iwu::IwuToIwu;
use crate::ie::network_parameter::NetworkParameter;
use crate::ie::progress_indicator::ProgressIndicator;
use crate::ie::signal::Signal;
use crate::ie::terminal_capability::TerminalCapability;
use crate::ie::value::{IeList, IeValue};
use crate::ie::IeType;
use crate::message::descriptor::{
    IeDesc, MsgDesc, SlotReader, SlotWriter, IE_NONE, IE_OPTIONAL,
};
use crate::message::SFormatMessage;

pub const CC_CONNECT_DESC: MsgDesc = MsgDesc {
    name: "CC-CONNECT",
    ies: &[
        IeDesc::new(IeType::IwuAttributes, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::CallAttributes, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::ConnectionAttributes, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::ConnectionIdentity, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::repeated(IeType::Facility, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_NONE),
        IeDesc::repeated(IeType::ProgressIndicator, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::SingleDisplay, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::Signal, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::FeatureIndicate, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::NetworkParameter, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::ExtHoIndicator, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::TerminalCapability, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::TransitDelay, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::WindowSize, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::repeated(IeType::SegmentedInfo, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::IwuToIwu, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::IwuPacket, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::CodecList, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::EscapeToProprietary, IE_OPTIONAL, IE_OPTIONAL),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CcConnectMsg {
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
    pub terminal_capability: Option<TerminalCapability>,
    pub transit_delay: Option<IeValue>,
    pub window_size: Option<IeValue>,
    pub segmented_info: IeList<IeValue>,
    pub iwu_to_iwu: Option<IwuToIwu>,
    pub iwu_packet: Option<IeValue>,
    pub codec_list: Option<IeValue>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
}

impl SFormatMessage for CcConnectMsg {
    const DESC: &'static MsgDesc = &CC_CONNECT_DESC;

    fn from_slots(r: &mut SlotReader) -> Self {
        CcConnectMsg {
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
            terminal_capability: r.take(),
            transit_delay: r.take(),
            window_size: r.take(),
            segmented_info: r.take_list(),
            iwu_to_iwu: r.take(),
            iwu_packet: r.take(),
            codec_list: r.take(),
            escape_to_proprietary: r.take(),
        }
    }

    fn to_slots(&self, w: &mut SlotWriter) {
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
        w.push(self.terminal_capability);
        w.push(self.transit_delay.clone());
        w.push(self.window_size.clone());
        w.push_list(self.segmented_info.clone());
        w.push(self.iwu_to_iwu.clone());
        w.push(self.iwu_packet.clone());
        w.push(self.codec_list.clone());
        w.push(self.escape_to_proprietary.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ie::iwu_to_iwu::IwuProtocol;
    use crate::Mode;

    #[test]
    fn test_cc_connect_round_trip() {
        let mut msg = CcConnectMsg::default();
        msg.iwu_to_iwu = Some(IwuToIwu::new(true, IwuProtocol::UserSpecific, vec![9, 9]));
        let wire = msg.build(Mode::Pp).unwrap();
        assert_eq!(CcConnectMsg::parse(Mode::Fp, &wire).unwrap(), msg);
    }

    #[test]
    fn test_cc_connect_empty_round_trip() {
        let msg = CcConnectMsg::default();
        let wire = msg.build(Mode::Fp).unwrap();
        assert!(wire.is_empty());
        assert_eq!(CcConnectMsg::parse(Mode::Pp, &wire).unwrap(), msg);
    }
}
