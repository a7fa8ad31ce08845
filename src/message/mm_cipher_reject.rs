//! MM-CIPHER-REJECT message.

use crate::ie::cipher_info::CipherInfo;
use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::iwu_to_iwu::IwuToIwu;
use crate::ie::reject_reason::RejectReason;
use crate::ie::value::IeList;
use crate::ie::IeType;
use crate::message::descriptor::{IeDesc, MsgDesc, SlotReader, SlotWriter, IE_OPTIONAL};
use crate::message::SFormatMessage;

pub const MM_CIPHER_REJECT_DESC: MsgDesc = MsgDesc {
    name: "MM-CIPHER-REJECT",
    ies: &[
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::repeated(IeType::CipherInfo, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::RejectReason, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::IwuToIwu, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::EscapeToProprietary, IE_OPTIONAL, IE_OPTIONAL),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MmCipherRejectMsg {
    pub cipher_info: IeList<CipherInfo>,
    pub reject_reason: Option<RejectReason>,
    pub iwu_to_iwu: Option<IwuToIwu>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
}

impl SFormatMessage for MmCipherRejectMsg {
    const DESC: &'static MsgDesc = &MM_CIPHER_REJECT_DESC;

    fn from_slots(r: &mut SlotReader) -> Self {
        MmCipherRejectMsg {
            cipher_info: r.take_list(),
            reject_reason: r.take(),
            iwu_to_iwu: r.take(),
            escape_to_proprietary: r.take(),
        }
    }

    fn to_slots(&self, w: &mut SlotWriter) {
        w.push_list(self.cipher_info.clone());
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
    fn test_cipher_reject_round_trip() {
        let mut msg = MmCipherRejectMsg::default();
        msg.reject_reason = Some(RejectReason::NoCipherAlgorithm);
        let wire = msg.build(Mode::Pp).unwrap();
        assert_eq!(MmCipherRejectMsg::parse(Mode::Fp, &wire).unwrap(), msg);
    }
}
