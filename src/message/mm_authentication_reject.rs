//! MM-AUTHENTICATION-REJECT message.

use crate::ie::auth_type::AuthType;
use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::iwu_to_iwu::IwuToIwu;
use crate::ie::reject_reason::RejectReason;
use crate::ie::value::IeList;
use crate::ie::IeType;
use crate::message::descriptor::{
    IeDesc, MsgDesc, SlotReader, SlotWriter, IE_OPTIONAL,
};
use crate::message::SFormatMessage;

pub const MM_AUTHENTICATION_REJECT_DESC: MsgDesc = MsgDesc {
    name: "MM-AUTHENTICATION-REJECT",
    ies: &[
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::repeated(IeType::AuthType, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::RejectReason, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::repeated(IeType::IwuToIwu, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::EscapeToProprietary, IE_OPTIONAL, IE_OPTIONAL),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MmAuthenticationRejectMsg {
    pub auth_type: IeList<AuthType>,
    pub reject_reason: Option<RejectReason>,
    pub iwu_to_iwu: IeList<IwuToIwu>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
}

impl SFormatMessage for MmAuthenticationRejectMsg {
    const DESC: &'static MsgDesc = &MM_AUTHENTICATION_REJECT_DESC;

    fn from_slots(r: &mut SlotReader) -> Self {
        MmAuthenticationRejectMsg {
            auth_type: r.take_list(),
            reject_reason: r.take(),
            iwu_to_iwu: r.take_list(),
            escape_to_proprietary: r.take(),
        }
    }

    fn to_slots(&self, w: &mut SlotWriter) {
        w.push_list(self.auth_type.clone());
        w.push(self.reject_reason);
        w.push_list(self.iwu_to_iwu.clone());
        w.push(self.escape_to_proprietary.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mode;

    #[test]
    fn test_authentication_reject_round_trip() {
        let mut msg = MmAuthenticationRejectMsg::default();
        msg.reject_reason = Some(RejectReason::AuthenticationFailed);
        let wire = msg.build(Mode::Pp).unwrap();
        assert_eq!(MmAuthenticationRejectMsg::parse(Mode::Fp, &wire).unwrap(), msg);
    }
}
