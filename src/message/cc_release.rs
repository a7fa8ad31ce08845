//! CC-RELEASE message.

use crate::ie::display::Display;
use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::facility::Facility;
use crate::ie::feature_indicate::FeatureIndicate;
use crate::ie::iwu_to_iwu::IwuToIwu;
use crate::ie::progress_indicator::ProgressIndicator;
use crate::ie::release_reason::ReleaseReason;
use crate::ie::value::{IeList, IeValue};
use crate::ie::IeType;
use crate::message::descriptor::{
    IeDesc, MsgDesc, SlotReader, SlotWriter, IE_NONE, IE_OPTIONAL,
};
use crate::message::SFormatMessage;

pub const CC_RELEASE_DESC: MsgDesc = MsgDesc {
    name: "CC-RELEASE",
    ies: &[
        IeDesc::new(IeType::ReleaseReason, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::repeated(IeType::Facility, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_NONE),
        IeDesc::repeated(IeType::ProgressIndicator, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::SingleDisplay, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::FeatureIndicate, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_NONE),
        IeDesc::repeated(IeType::SegmentedInfo, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::IwuToIwu, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::IwuPacket, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::EscapeToProprietary, IE_OPTIONAL, IE_OPTIONAL),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CcReleaseMsg {
    pub release_reason: Option<ReleaseReason>,
    pub facility: IeList<Facility>,
    pub progress_indicator: IeList<ProgressIndicator>,
    pub display: Option<Display>,
    pub feature_indicate: Option<FeatureIndicate>,
    pub segmented_info: IeList<IeValue>,
    pub iwu_to_iwu: Option<IwuToIwu>,
    pub iwu_packet: Option<IeValue>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
}

impl SFormatMessage for CcReleaseMsg {
    const DESC: &'static MsgDesc = &CC_RELEASE_DESC;

    fn from_slots(r: &mut SlotReader) -> Self {
        CcReleaseMsg {
            release_reason: r.take(),
            facility: r.take_list(),
            progress_indicator: r.take_list(),
            display: r.take(),
            feature_indicate: r.take(),
            segmented_info: r.take_list(),
            iwu_to_iwu: r.take(),
            iwu_packet: r.take(),
            escape_to_proprietary: r.take(),
        }
    }

    fn to_slots(&self, w: &mut SlotWriter) {
        w.push(self.release_reason);
        w.push_list(self.facility.clone());
        w.push_list(self.progress_indicator.clone());
        w.push(self.display.clone());
        w.push(self.feature_indicate);
        w.push_list(self.segmented_info.clone());
        w.push(self.iwu_to_iwu.clone());
        w.push(self.iwu_packet.clone());
        w.push(self.escape_to_proprietary.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mode;

    #[test]
    fn test_cc_release_round_trip() {
        let mut msg = CcReleaseMsg::default();
        msg.release_reason = Some(ReleaseReason::Normal);
        let wire = msg.build(Mode::Pp).unwrap();
        assert_eq!(wire, [0xe2, 0x00]);
        assert_eq!(CcReleaseMsg::parse(Mode::Fp, &wire).unwrap(), msg);
    }
}
