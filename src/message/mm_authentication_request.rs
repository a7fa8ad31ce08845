//! MM-AUTHENTICATION-REQUEST message.

use crate::ie::auth_res::AuthRes;
use crate::ie::auth_type::AuthType;
use crate::ie::auth_value::AuthValue;
use crate::ie::cipher_info::CipherInfo;
use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::iwu_to_iwu::IwuToIwu;
use crate::ie::IeType;
use crate::message::descriptor::{
    IeDesc, MsgDesc, SlotReader, SlotWriter, IE_MANDATORY, IE_NONE, IE_OPTIONAL,
};
use crate::message::SFormatMessage;
use crate::ie::value::IeList;

pub const MM_AUTHENTICATION_REQUEST_DESC: MsgDesc = MsgDesc {
    name: "MM-AUTHENTICATION-REQUEST",
    ies: &[
        IeDesc::new(IeType::AuthType, IE_MANDATORY, IE_MANDATORY),
        IeDesc::new(IeType::Rand, IE_MANDATORY, IE_MANDATORY),
        IeDesc::new(IeType::Res, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::Rs, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::CipherInfo, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::repeated(IeType::IwuToIwu, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::EscapeToProprietary, IE_OPTIONAL, IE_OPTIONAL),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MmAuthenticationRequestMsg {
    pub auth_type: Option<AuthType>,
    pub rand: Option<AuthValue>,
    pub res: Option<AuthRes>,
    pub rs: Option<AuthValue>,
    pub cipher_info: Option<CipherInfo>,
    pub iwu_to_iwu: IeList<IwuToIwu>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
}

impl SFormatMessage for MmAuthenticationRequestMsg {
    const DESC: &'static MsgDesc = &MM_AUTHENTICATION_REQUEST_DESC;

    fn from_slots(r: &mut SlotReader) -> Self {
        MmAuthenticationRequestMsg {
            auth_type: r.take(),
            rand: r.take(),
            res: r.take(),
            rs: r.take(),
            cipher_info: r.take(),
            iwu_to_iwu: r.take_list(),
            escape_to_proprietary: r.take(),
        }
    }

    fn to_slots(&self, w: &mut SlotWriter) {
        w.push(self.auth_type);
        w.push(self.rand);
        w.push(self.res);
        w.push(self.rs);
        w.push(self.cipher_info);
        w.push_list(self.iwu_to_iwu.clone());
        w.push(self.escape_to_proprietary.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ie::allocation_type::AuthAlg;
    use crate::ie::auth_type::AuthKeyType;
    use crate::Mode;

    #[test]
    fn test_authentication_request_round_trip() {
        let mut msg = MmAuthenticationRequestMsg::default();
        msg.auth_type = Some(AuthType::new(
            AuthAlg::Dsaa,
            AuthKeyType::UserAuthenticationKey,
            1,
        ));
        msg.rand = Some(AuthValue::new(0x1122334455667788));
        msg.rs = Some(AuthValue::new(0xaabbccdd00112233));
        // FP-initiated: RS goes out, RES does not.
        let wire = msg.build(Mode::Fp).unwrap();
        assert_eq!(MmAuthenticationRequestMsg::parse(Mode::Pp, &wire).unwrap(), msg);
    }

    #[test]
    fn test_authentication_request_rs_not_sent_by_pp() {
        let mut msg = MmAuthenticationRequestMsg::default();
        msg.auth_type = Some(AuthType::new(
            AuthAlg::Dsaa,
            AuthKeyType::UserAuthenticationKey,
            1,
        ));
        msg.rand = Some(AuthValue::new(1));
        msg.rs = Some(AuthValue::new(2));
        assert!(msg.build(Mode::Pp).is_err());
    }
}
