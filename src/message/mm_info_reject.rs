//! MM-INFO-REJECT message.

use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::iwu_to_iwu::IwuToIwu;
use crate::ie::reject_reason::RejectReason;
use crate::ie::value::IeValue;
use crate::ie::IeType;
use crate::message::descriptor::{IeDesc, MsgDesc, SlotReader, SlotWriter, IE_OPTIONAL};
use crate::message::SFormatMessage;

pub const MM_INFO_REJECT_DESC: MsgDesc = MsgDesc {
    name: "MM-INFO-REJECT",
    ies: &[
        IeDesc::new(IeType::CallIdentity, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::RejectReason, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::IwuToIwu, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::EscapeToProprietary, IE_OPTIONAL, IE_OPTIONAL),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MmInfoRejectMsg {
    pub call_identity: Option<IeValue>,
    pub reject_reason: Option<RejectReason>,
    pub iwu_to_iwu: Option<IwuToIwu>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
}

impl SFormatMessage for MmInfoRejectMsg {
    const DESC: &'static MsgDesc = &MM_INFO_REJECT_DESC;

    fn from_slots(r: &mut SlotReader) -> Self {
        MmInfoRejectMsg {
            call_identity: r.take(),
            reject_reason: r.take(),
            iwu_to_iwu: r.take(),
            escape_to_proprietary: r.take(),
        }
    }

    fn to_slots(&self, w: &mut SlotWriter) {
        w.push(self.call_identity.clone());
        w.push(self.reject_reason);
        w.push(self.iwu_to_iwu.clone());
        w.push(self.escape_to_proprietary.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mode;

    #[test]
    fn test_info_reject_round_trip() {
        let mut msg = MmInfoRejectMsg::default();
        msg.reject_reason = Some(RejectReason::InvalidMessage);
        let wire = msg.build(Mode::Fp).unwrap();
        assert_eq!(MmInfoRejectMsg::parse(Mode::Pp, &wire).unwrap(), msg);
    }
}
