//! MM-LOCATE-REJECT message.

use crate::ie::duration::DurationIe;
use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::iwu_to_iwu::IwuToIwu;
use crate::ie::reject_reason::RejectReason;
use crate::ie::value::{IeList, IeValue};
use crate::ie::IeType;
use crate::message::descriptor::{
    IeDesc, MsgDesc, SlotReader, SlotWriter, IE_NONE, IE_OPTIONAL,
};
use crate::message::SFormatMessage;

pub const MM_LOCATE_REJECT_DESC: MsgDesc = MsgDesc {
    name: "MM-LOCATE-REJECT",
    ies: &[
        IeDesc::new(IeType::RejectReason, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::Duration, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::repeated(IeType::SegmentedInfo, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::IwuToIwu, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::EscapeToProprietary, IE_OPTIONAL, IE_NONE),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MmLocateRejectMsg {
    pub reject_reason: Option<RejectReason>,
    pub duration: Option<DurationIe>,
    pub segmented_info: IeList<IeValue>,
    pub iwu_to_iwu: Option<IwuToIwu>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
}

impl SFormatMessage for MmLocateRejectMsg {
    const DESC: &'static MsgDesc = &MM_LOCATE_REJECT_DESC;

    fn from_slots(r: &mut SlotReader) -> Self {
        MmLocateRejectMsg {
            reject_reason: r.take(),
            duration: r.take(),
            segmented_info: r.take_list(),
            iwu_to_iwu: r.take(),
            escape_to_proprietary: r.take(),
        }
    }

    fn to_slots(&self, w: &mut SlotWriter) {
        w.push(self.reject_reason);
        w.push(self.duration);
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
    fn test_locate_reject_round_trip() {
        let mut msg = MmLocateRejectMsg::default();
        msg.reject_reason = Some(RejectReason::LocationAreaNotAllowed);
        let wire = msg.build(Mode::Fp).unwrap();
        assert_eq!(MmLocateRejectMsg::parse(Mode::Pp, &wire).unwrap(), msg);
    }
}
