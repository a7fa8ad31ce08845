//! MM-ACCESS-RIGHTS-REJECT message.

use crate::ie::duration::DurationIe;
use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::iwu_to_iwu::IwuToIwu;
use crate::ie::reject_reason::RejectReason;
use crate::ie::IeType;
use crate::message::descriptor::{
    IeDesc, MsgDesc, SlotReader, SlotWriter, IE_NONE, IE_OPTIONAL,
};
use crate::message::SFormatMessage;

pub const MM_ACCESS_RIGHTS_REJECT_DESC: MsgDesc = MsgDesc {
    name: "MM-ACCESS-RIGHTS-REJECT",
    ies: &[
        IeDesc::new(IeType::RejectReason, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::Duration, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::IwuToIwu, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::EscapeToProprietary, IE_NONE, IE_OPTIONAL),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MmAccessRightsRejectMsg {
    pub reject_reason: Option<RejectReason>,
    pub duration: Option<DurationIe>,
    pub iwu_to_iwu: Option<IwuToIwu>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
}

impl SFormatMessage for MmAccessRightsRejectMsg {
    const DESC: &'static MsgDesc = &MM_ACCESS_RIGHTS_REJECT_DESC;

    fn from_slots(r: &mut SlotReader) -> Self {
        MmAccessRightsRejectMsg {
            reject_reason: r.take(),
            duration: r.take(),
            iwu_to_iwu: r.take(),
            escape_to_proprietary: r.take(),
        }
    }

    fn to_slots(&self, w: &mut SlotWriter) {
        w.push(self.reject_reason);
        w.push(self.duration);
        w.push(self.iwu_to_iwu.clone());
        w.push(self.escape_to_proprietary.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mode;

    #[test]
    fn test_access_rights_reject_round_trip() {
        let mut msg = MmAccessRightsRejectMsg::default();
        msg.reject_reason = Some(RejectReason::IpuiNotAccepted);
        let wire = msg.build(Mode::Fp).unwrap();
        assert_eq!(MmAccessRightsRejectMsg::parse(Mode::Pp, &wire).unwrap(), msg);
    }
}
