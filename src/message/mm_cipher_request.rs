//! MM-CIPHER-REQUEST message.

use crate::ie::cipher_info::CipherInfo;
use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::iwu_to_iwu::IwuToIwu;
use crate::ie::value::IeValue;
use crate::ie::IeType;
use crate::message::descriptor::{
    IeDesc, MsgDesc, SlotReader, SlotWriter, IE_MANDATORY, IE_NONE, IE_OPTIONAL,
};
use crate::message::SFormatMessage;

pub const MM_CIPHER_REQUEST_DESC: MsgDesc = MsgDesc {
    name: "MM-CIPHER-REQUEST",
    ies: &[
        IeDesc::new(IeType::CipherInfo, IE_MANDATORY, IE_NONE),
        IeDesc::new(IeType::CallIdentity, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::ConnectionIdentity, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::IwuToIwu, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::EscapeToProprietary, IE_OPTIONAL, IE_NONE),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MmCipherRequestMsg {
    pub cipher_info: Option<CipherInfo>,
    pub call_identity: Option<IeValue>,
    pub connection_identity: Option<IeValue>,
    pub iwu_to_iwu: Option<IwuToIwu>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
}

impl SFormatMessage for MmCipherRequestMsg {
    const DESC: &'static MsgDesc = &MM_CIPHER_REQUEST_DESC;

    fn from_slots(r: &mut SlotReader) -> Self {
        MmCipherRequestMsg {
            cipher_info: r.take(),
            call_identity: r.take(),
            connection_identity: r.take(),
            iwu_to_iwu: r.take(),
            escape_to_proprietary: r.take(),
        }
    }

    fn to_slots(&self, w: &mut SlotWriter) {
        w.push(self.cipher_info);
        w.push(self.call_identity.clone());
        w.push(self.connection_identity.clone());
        w.push(self.iwu_to_iwu.clone());
        w.push(self.escape_to_proprietary.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ie::cipher_info::{CipherAlg, CipherKeyType};
    use crate::Mode;

    #[test]
    fn test_cipher_request_round_trip() {
        let mut msg = MmCipherRequestMsg::default();
        msg.cipher_info = Some(CipherInfo::new(
            true,
            CipherAlg::DectStandard1,
            CipherKeyType::Derived,
            1,
        ));
        let wire = msg.build(Mode::Fp).unwrap();
        assert_eq!(MmCipherRequestMsg::parse(Mode::Pp, &wire).unwrap(), msg);
    }
}
