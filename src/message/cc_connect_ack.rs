//! CC-CONNECT-ACK message.

use crate::ie::display::Display;
use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::feature_indicate::FeatureIndicate;
use crate::ie::iwu_to_iwu::IwuToIwu;
use crate::ie::value::{IeList, IeValue};
use crate::ie::IeType;
use crate::message::descriptor::{
    IeDesc, MsgDesc, SlotReader, SlotWriter, IE_NONE, IE_OPTIONAL,
};
use crate::message::SFormatMessage;

pub const CC_CONNECT_ACK_DESC: MsgDesc = MsgDesc {
    name: "CC-CONNECT-ACK",
    ies: &[
        IeDesc::new(IeType::SingleDisplay, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::FeatureIndicate, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::repeated(IeType::IwuToIwu, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::IwuPacket, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::EscapeToProprietary, IE_OPTIONAL, IE_OPTIONAL),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CcConnectAckMsg {
    pub display: Option<Display>,
    pub feature_indicate: Option<FeatureIndicate>,
    pub iwu_to_iwu: IeList<IwuToIwu>,
    pub iwu_packet: Option<IeValue>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
}

impl SFormatMessage for CcConnectAckMsg {
    const DESC: &'static MsgDesc = &CC_CONNECT_ACK_DESC;

    fn from_slots(r: &mut SlotReader) -> Self {
        CcConnectAckMsg {
            display: r.take(),
            feature_indicate: r.take(),
            iwu_to_iwu: r.take_list(),
            iwu_packet: r.take(),
            escape_to_proprietary: r.take(),
        }
    }

    fn to_slots(&self, w: &mut SlotWriter) {
        w.push(self.display.clone());
        w.push(self.feature_indicate);
        w.push_list(self.iwu_to_iwu.clone());
        w.push(self.iwu_packet.clone());
        w.push(self.escape_to_proprietary.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mode;

    #[test]
    fn test_cc_connect_ack_round_trip() {
        let mut msg = CcConnectAckMsg::default();
        msg.display = Some(Display::new(*b"CONNECTED"));
        let wire = msg.build(Mode::Fp).unwrap();
        assert_eq!(CcConnectAckMsg::parse(Mode::Pp, &wire).unwrap(), msg);
    }
}
