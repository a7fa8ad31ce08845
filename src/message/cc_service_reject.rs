//! CC-SERVICE-REJECT message.

use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::iwu_to_iwu::IwuToIwu;
use crate::ie::release_reason::ReleaseReason;
use crate::ie::value::{IeList, IeValue};
use crate::ie::IeType;
use crate::message::descriptor::{IeDesc, MsgDesc, SlotReader, SlotWriter, IE_OPTIONAL};
use crate::message::SFormatMessage;

pub const CC_SERVICE_REJECT_DESC: MsgDesc = MsgDesc {
    name: "CC-SERVICE-REJECT",
    ies: &[
        IeDesc::new(IeType::ReleaseReason, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::IwuAttributes, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::ConnectionAttributes, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::repeated(IeType::SegmentedInfo, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::IwuToIwu, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::EscapeToProprietary, IE_OPTIONAL, IE_OPTIONAL),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CcServiceRejectMsg {
    pub release_reason: Option<ReleaseReason>,
    pub iwu_attributes: Option<IeValue>,
    pub connection_attributes: Option<IeValue>,
    pub segmented_info: IeList<IeValue>,
    pub iwu_to_iwu: Option<IwuToIwu>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
}

impl SFormatMessage for CcServiceRejectMsg {
    const DESC: &'static MsgDesc = &CC_SERVICE_REJECT_DESC;

    fn from_slots(r: &mut SlotReader) -> Self {
        CcServiceRejectMsg {
            release_reason: r.take(),
            iwu_attributes: r.take(),
            connection_attributes: r.take(),
            segmented_info: r.take_list(),
            iwu_to_iwu: r.take(),
            escape_to_proprietary: r.take(),
        }
    }

    fn to_slots(&self, w: &mut SlotWriter) {
        w.push(self.release_reason);
        w.push(self.iwu_attributes.clone());
        w.push(self.connection_attributes.clone());
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
    fn test_cc_service_reject_round_trip() {
        let mut msg = CcServiceRejectMsg::default();
        msg.release_reason = Some(ReleaseReason::NegotiationNotSupported);
        let wire = msg.build(Mode::Fp).unwrap();
        assert_eq!(CcServiceRejectMsg::parse(Mode::Pp, &wire).unwrap(), msg);
    }
}
