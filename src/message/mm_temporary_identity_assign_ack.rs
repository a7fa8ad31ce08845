//! MM-TEMPORARY-IDENTITY-ASSIGN-ACK message.

use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::iwu_to_iwu::IwuToIwu;
use crate::ie::value::IeValue;
use crate::ie::IeType;
use crate::message::descriptor::{
    IeDesc, MsgDesc, SlotReader, SlotWriter, IE_NONE, IE_OPTIONAL,
};
use crate::message::SFormatMessage;

pub const MM_TEMPORARY_IDENTITY_ASSIGN_ACK_DESC: MsgDesc = MsgDesc {
    name: "MM-TEMPORARY-IDENTITY-ASSIGN-ACK",
    ies: &[
        IeDesc::new(IeType::SegmentedInfo, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::IwuToIwu, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::EscapeToProprietary, IE_NONE, IE_OPTIONAL),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MmTemporaryIdentityAssignAckMsg {
    pub segmented_info: Option<IeValue>,
    pub iwu_to_iwu: Option<IwuToIwu>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
}

impl SFormatMessage for MmTemporaryIdentityAssignAckMsg {
    const DESC: &'static MsgDesc = &MM_TEMPORARY_IDENTITY_ASSIGN_ACK_DESC;

    fn from_slots(r: &mut SlotReader) -> Self {
        MmTemporaryIdentityAssignAckMsg {
            segmented_info: r.take(),
            iwu_to_iwu: r.take(),
            escape_to_proprietary: r.take(),
        }
    }

    fn to_slots(&self, w: &mut SlotWriter) {
        w.push(self.segmented_info.clone());
        w.push(self.iwu_to_iwu.clone());
        w.push(self.escape_to_proprietary.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mode;

    #[test]
    fn test_temporary_identity_assign_ack_round_trip() {
        let msg = MmTemporaryIdentityAssignAckMsg::default();
        let wire = msg.build(Mode::Pp).unwrap();
        assert!(wire.is_empty());
        assert_eq!(
            MmTemporaryIdentityAssignAckMsg::parse(Mode::Fp, &wire).unwrap(),
            msg
        );
    }
}
