//! CC-IWU-INFO message.
//!
//! Carries no IEs at this profile level; the message-type octet alone is
//! significant.

use crate::message::descriptor::{MsgDesc, SlotReader, SlotWriter};
use crate::message::SFormatMessage;

pub const CC_IWU_INFO_DESC: MsgDesc = MsgDesc {
    name: "CC-IWU-INFO",
    ies: &[],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CcIwuInfoMsg;

impl SFormatMessage for CcIwuInfoMsg {
    const DESC: &'static MsgDesc = &CC_IWU_INFO_DESC;

    fn from_slots(_r: &mut SlotReader) -> Self {
        CcIwuInfoMsg
    }

    fn to_slots(&self, _w: &mut SlotWriter) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mode;

    #[test]
    fn test_cc_iwu_info_round_trip() {
        let msg = CcIwuInfoMsg;
        let wire = msg.build(Mode::Pp).unwrap();
        assert!(wire.is_empty());
        assert_eq!(CcIwuInfoMsg::parse(Mode::Fp, &wire).unwrap(), msg);
    }
}
