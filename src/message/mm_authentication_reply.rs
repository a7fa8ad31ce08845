//! MM-AUTHENTICATION-REPLY message.

use crate::ie::auth_res::AuthRes;
use crate::ie::auth_value::AuthValue;
use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::iwu_to_iwu::IwuToIwu;
use crate::ie::value::{IeList, IeValue};
use crate::ie::IeType;
use crate::message::descriptor::{
    IeDesc, MsgDesc, SlotReader, SlotWriter, IE_MANDATORY, IE_NONE, IE_OPTIONAL,
};
use crate::message::SFormatMessage;

pub const MM_AUTHENTICATION_REPLY_DESC: MsgDesc = MsgDesc {
    name: "MM-AUTHENTICATION-REPLY",
    ies: &[
        IeDesc::new(IeType::Res, IE_MANDATORY, IE_MANDATORY),
        IeDesc::new(IeType::Rs, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::ZapField, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::ServiceClass, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::Key, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::repeated(IeType::IwuToIwu, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::EscapeToProprietary, IE_OPTIONAL, IE_OPTIONAL),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MmAuthenticationReplyMsg {
    pub res: Option<AuthRes>,
    pub rs: Option<AuthValue>,
    pub zap_field: Option<IeValue>,
    pub service_class: Option<IeValue>,
    pub key: Option<IeValue>,
    pub iwu_to_iwu: IeList<IwuToIwu>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
}

impl SFormatMessage for MmAuthenticationReplyMsg {
    const DESC: &'static MsgDesc = &MM_AUTHENTICATION_REPLY_DESC;

    fn from_slots(r: &mut SlotReader) -> Self {
        MmAuthenticationReplyMsg {
            res: r.take(),
            rs: r.take(),
            zap_field: r.take(),
            service_class: r.take(),
            key: r.take(),
            iwu_to_iwu: r.take_list(),
            escape_to_proprietary: r.take(),
        }
    }

    fn to_slots(&self, w: &mut SlotWriter) {
        w.push(self.res);
        w.push(self.rs);
        w.push(self.zap_field.clone());
        w.push(self.service_class.clone());
        w.push(self.key.clone());
        w.push_list(self.iwu_to_iwu.clone());
        w.push(self.escape_to_proprietary.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mode;

    #[test]
    fn test_authentication_reply_round_trip() {
        let mut msg = MmAuthenticationReplyMsg::default();
        msg.res = Some(AuthRes::new(0xcafe1234));
        let wire = msg.build(Mode::Pp).unwrap();
        assert_eq!(MmAuthenticationReplyMsg::parse(Mode::Fp, &wire).unwrap(), msg);
    }
}
