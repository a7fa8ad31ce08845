//! CC-SERVICE-ACCEPT message.

use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::iwu_to_iwu::IwuToIwu;
use crate::ie::value::{IeList, IeValue};
use crate::ie::IeType;
use crate::message::descriptor::{IeDesc, MsgDesc, SlotReader, SlotWriter, IE_OPTIONAL};
use crate::message::SFormatMessage;

pub const CC_SERVICE_ACCEPT_DESC: MsgDesc = MsgDesc {
    name: "CC-SERVICE-ACCEPT",
    ies: &[
        IeDesc::new(IeType::IwuAttributes, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::ConnectionIdentity, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::repeated(IeType::SegmentedInfo, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::IwuToIwu, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::EscapeToProprietary, IE_OPTIONAL, IE_OPTIONAL),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CcServiceAcceptMsg {
    pub iwu_attributes: Option<IeValue>,
    pub connection_identity: Option<IeValue>,
    pub segmented_info: IeList<IeValue>,
    pub iwu_to_iwu: Option<IwuToIwu>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
}

impl SFormatMessage for CcServiceAcceptMsg {
    const DESC: &'static MsgDesc = &CC_SERVICE_ACCEPT_DESC;

    fn from_slots(r: &mut SlotReader) -> Self {
        CcServiceAcceptMsg {
            iwu_attributes: r.take(),
            connection_identity: r.take(),
            segmented_info: r.take_list(),
            iwu_to_iwu: r.take(),
            escape_to_proprietary: r.take(),
        }
    }

    fn to_slots(&self, w: &mut SlotWriter) {
        w.push(self.iwu_attributes.clone());
        w.push(self.connection_identity.clone());
        w.push_list(self.segmented_info.clone());
        w.push(self.iwu_to_iwu.clone());
        w.push(self.escape_to_proprietary.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mode;

    #[test]
    fn test_cc_service_accept_round_trip() {
        let msg = CcServiceAcceptMsg::default();
        let wire = msg.build(Mode::Fp).unwrap();
        assert_eq!(CcServiceAcceptMsg::parse(Mode::Pp, &wire).unwrap(), msg);
    }
}
