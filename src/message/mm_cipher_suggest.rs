//! MM-CIPHER-SUGGEST message.

use crate::ie::cipher_info::CipherInfo;
use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::iwu_to_iwu::IwuToIwu;
use crate::ie::value::IeValue;
use crate::ie::IeType;
use crate::message::descriptor::{
    IeDesc, MsgDesc, SlotReader, SlotWriter, IE_MANDATORY, IE_NONE, IE_OPTIONAL,
};
use crate::message::SFormatMessage;

pub const MM_CIPHER_SUGGEST_DESC: MsgDesc = MsgDesc {
    name: "MM-CIPHER-SUGGEST",
    ies: &[
        IeDesc::new(IeType::CipherInfo, IE_NONE, IE_MANDATORY),
        IeDesc::new(IeType::CallIdentity, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::ConnectionIdentity, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::IwuToIwu, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::EscapeToProprietary, IE_NONE, IE_OPTIONAL),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MmCipherSuggestMsg {
    pub cipher_info: Option<CipherInfo>,
    pub call_identity: Option<IeValue>,
    pub connection_identity: Option<IeValue>,
    pub iwu_to_iwu: Option<IwuToIwu>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
}

impl SFormatMessage for MmCipherSuggestMsg {
    const DESC: &'static MsgDesc = &MM_CIPHER_SUGGEST_DESC;

    fn from_slots(r: &mut SlotReader) -> Self {
        MmCipherSuggestMsg {
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
    fn test_cipher_suggest_round_trip() {
        let mut msg = MmCipherSuggestMsg::default();
        msg.cipher_info = Some(CipherInfo::new(
            true,
            CipherAlg::DectStandard1,
            CipherKeyType::Derived,
            3,
        ));
        let wire = msg.build(Mode::Pp).unwrap();
        assert_eq!(MmCipherSuggestMsg::parse(Mode::Fp, &wire).unwrap(), msg);
    }
}
