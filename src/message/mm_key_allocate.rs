//! MM-KEY-ALLOCATE message.

use crate::ie::allocation_type::AllocationType;
use crate::ie::auth_value::AuthValue;
use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::IeType;
use crate::message::descriptor::{
    IeDesc, MsgDesc, SlotReader, SlotWriter, IE_MANDATORY, IE_NONE, IE_OPTIONAL,
};
use crate::message::SFormatMessage;

pub const MM_KEY_ALLOCATE_DESC: MsgDesc = MsgDesc {
    name: "MM-KEY-ALLOCATE",
    ies: &[
        IeDesc::new(IeType::AllocationType, IE_MANDATORY, IE_NONE),
        IeDesc::new(IeType::Rand, IE_MANDATORY, IE_NONE),
        IeDesc::new(IeType::Rs, IE_MANDATORY, IE_NONE),
        IeDesc::new(IeType::EscapeToProprietary, IE_OPTIONAL, IE_NONE),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MmKeyAllocateMsg {
    pub allocation_type: Option<AllocationType>,
    pub rand: Option<AuthValue>,
    pub rs: Option<AuthValue>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
}

impl SFormatMessage for MmKeyAllocateMsg {
    const DESC: &'static MsgDesc = &MM_KEY_ALLOCATE_DESC;

    fn from_slots(r: &mut SlotReader) -> Self {
        MmKeyAllocateMsg {
            allocation_type: r.take(),
            rand: r.take(),
            rs: r.take(),
            escape_to_proprietary: r.take(),
        }
    }

    fn to_slots(&self, w: &mut SlotWriter) {
        w.push(self.allocation_type);
        w.push(self.rand);
        w.push(self.rs);
        w.push(self.escape_to_proprietary.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SfmtError;
    use crate::ie::allocation_type::AuthAlg;
    use crate::Mode;

    #[test]
    fn test_key_allocate_round_trip() {
        let mut msg = MmKeyAllocateMsg::default();
        msg.allocation_type = Some(AllocationType::new(AuthAlg::Dsaa, 8, 1));
        msg.rand = Some(AuthValue::new(0x1111222233334444));
        msg.rs = Some(AuthValue::new(0x5555666677778888));
        let wire = msg.build(Mode::Fp).unwrap();
        assert_eq!(MmKeyAllocateMsg::parse(Mode::Pp, &wire).unwrap(), msg);
    }

    #[test]
    fn test_key_allocate_requires_rs() {
        let mut msg = MmKeyAllocateMsg::default();
        msg.allocation_type = Some(AllocationType::new(AuthAlg::Dsaa, 8, 1));
        msg.rand = Some(AuthValue::new(1));
        assert_eq!(
            msg.build(Mode::Fp),
            Err(SfmtError::MandatoryIeMissing {
                ie_type: IeType::Rs
            })
        );
    }
}
