//! CC-NOTIFY message.

use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::timer_restart::TimerRestart;
use crate::ie::IeType;
use crate::message::descriptor::{IeDesc, MsgDesc, SlotReader, SlotWriter, IE_OPTIONAL};
use crate::message::SFormatMessage;

pub const CC_NOTIFY_DESC: MsgDesc = MsgDesc {
    name: "CC-NOTIFY",
    ies: &[
        IeDesc::new(IeType::TimerRestart, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::EscapeToProprietary, IE_OPTIONAL, IE_OPTIONAL),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CcNotifyMsg {
    pub timer_restart: Option<TimerRestart>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
}

impl SFormatMessage for CcNotifyMsg {
    const DESC: &'static MsgDesc = &CC_NOTIFY_DESC;

    fn from_slots(r: &mut SlotReader) -> Self {
        CcNotifyMsg {
            timer_restart: r.take(),
            escape_to_proprietary: r.take(),
        }
    }

    fn to_slots(&self, w: &mut SlotWriter) {
        w.push(self.timer_restart);
        w.push(self.escape_to_proprietary.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mode;

    #[test]
    fn test_cc_notify_round_trip() {
        let mut msg = CcNotifyMsg::default();
        msg.timer_restart = Some(TimerRestart::Restart);
        let wire = msg.build(Mode::Fp).unwrap();
        assert_eq!(wire, [0xe5, 0x00]);
        assert_eq!(CcNotifyMsg::parse(Mode::Pp, &wire).unwrap(), msg);
    }
}
