//! MM-TEMPORARY-IDENTITY-ASSIGN-REJ message.

use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::reject_reason::RejectReason;
use crate::ie::IeType;
use crate::message::descriptor::{
    IeDesc, MsgDesc, SlotReader, SlotWriter, IE_NONE, IE_OPTIONAL,
};
use crate::message::SFormatMessage;

pub const MM_TEMPORARY_IDENTITY_ASSIGN_REJ_DESC: MsgDesc = MsgDesc {
    name: "MM-TEMPORARY-IDENTITY-ASSIGN-REJ",
    ies: &[
        IeDesc::new(IeType::RejectReason, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::EscapeToProprietary, IE_NONE, IE_OPTIONAL),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MmTemporaryIdentityAssignRejMsg {
    pub reject_reason: Option<RejectReason>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
}

impl SFormatMessage for MmTemporaryIdentityAssignRejMsg {
    const DESC: &'static MsgDesc = &MM_TEMPORARY_IDENTITY_ASSIGN_REJ_DESC;

    fn from_slots(r: &mut SlotReader) -> Self {
        MmTemporaryIdentityAssignRejMsg {
            reject_reason: r.take(),
            escape_to_proprietary: r.take(),
        }
    }

    fn to_slots(&self, w: &mut SlotWriter) {
        w.push(self.reject_reason);
        w.push(self.escape_to_proprietary.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mode;

    #[test]
    fn test_temporary_identity_assign_rej_round_trip() {
        let mut msg = MmTemporaryIdentityAssignRejMsg::default();
        msg.reject_reason = Some(RejectReason::InvalidTpui);
        let wire = msg.build(Mode::Pp).unwrap();
        assert_eq!(
            MmTemporaryIdentityAssignRejMsg::parse(Mode::Fp, &wire).unwrap(),
            msg
        );
    }
}
