//! MM-LOCATE-ACCEPT message.

use crate::ie::codec_list::CodecList;
use crate::ie::duration::DurationIe;
use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::iwu_to_iwu::IwuToIwu;
use crate::ie::location_area::LocationArea;
use crate::ie::portable_identity::PortableIdentity;
use crate::ie::setup_capability::SetupCapability;
use crate::ie::value::{IeList, IeValue, UseTpui};
use crate::ie::IeType;
use crate::message::descriptor::{
    IeDesc, MsgDesc, SlotReader, SlotWriter, IE_MANDATORY, IE_NONE, IE_OPTIONAL,
};
use crate::message::SFormatMessage;

pub const MM_LOCATE_ACCEPT_DESC: MsgDesc = MsgDesc {
    name: "MM-LOCATE-ACCEPT",
    ies: &[
        IeDesc::new(IeType::PortableIdentity, IE_MANDATORY, IE_NONE),
        IeDesc::new(IeType::LocationArea, IE_MANDATORY, IE_NONE),
        IeDesc::new(IeType::UseTpui, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::NwkAssignedIdentity, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::ExtHoIndicator, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::SetupCapability, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::Duration, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::repeated(IeType::SegmentedInfo, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::IwuToIwu, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::ModelIdentifier, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::CodecList, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::EscapeToProprietary, IE_OPTIONAL, IE_NONE),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MmLocateAcceptMsg {
    pub portable_identity: Option<PortableIdentity>,
    pub location_area: Option<LocationArea>,
    pub use_tpui: Option<UseTpui>,
    pub nwk_assigned_identity: Option<IeValue>,
    pub ext_ho_indicator: Option<IeValue>,
    pub setup_capability: Option<SetupCapability>,
    pub duration: Option<DurationIe>,
    pub segmented_info: IeList<IeValue>,
    pub iwu_to_iwu: Option<IwuToIwu>,
    pub model_identifier: Option<IeValue>,
    pub codec_list: Option<CodecList>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
}

impl SFormatMessage for MmLocateAcceptMsg {
    const DESC: &'static MsgDesc = &MM_LOCATE_ACCEPT_DESC;

    fn from_slots(r: &mut SlotReader) -> Self {
        MmLocateAcceptMsg {
            portable_identity: r.take(),
            location_area: r.take(),
            use_tpui: r.take(),
            nwk_assigned_identity: r.take(),
            ext_ho_indicator: r.take(),
            setup_capability: r.take(),
            duration: r.take(),
            segmented_info: r.take_list(),
            iwu_to_iwu: r.take(),
            model_identifier: r.take(),
            codec_list: r.take(),
            escape_to_proprietary: r.take(),
        }
    }

    fn to_slots(&self, w: &mut SlotWriter) {
        w.push(self.portable_identity);
        w.push(self.location_area);
        w.push(self.use_tpui);
        w.push(self.nwk_assigned_identity.clone());
        w.push(self.ext_ho_indicator.clone());
        w.push(self.setup_capability);
        w.push(self.duration);
        w.push_list(self.segmented_info.clone());
        w.push(self.iwu_to_iwu.clone());
        w.push(self.model_identifier.clone());
        w.push(self.codec_list.clone());
        w.push(self.escape_to_proprietary.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SfmtError;
    use crate::identity::{Ipei, Ipui};
    use crate::ie::duration::{LockLimits, TimeLimits};
    use crate::Mode;

    #[test]
    fn test_locate_accept_round_trip() {
        let mut msg = MmLocateAcceptMsg::default();
        msg.portable_identity = Some(PortableIdentity::Ipui(Ipui::N(Ipei::new(1, 2))));
        msg.location_area = Some(LocationArea::new(0, 5));
        msg.duration = Some(DurationIe::new(
            LockLimits::NoLimits,
            TimeLimits::StandardTimeLimit,
            0,
        ));
        let wire = msg.build(Mode::Fp).unwrap();
        assert_eq!(MmLocateAcceptMsg::parse(Mode::Pp, &wire).unwrap(), msg);
    }

    #[test]
    fn test_locate_accept_requires_location_area() {
        let mut msg = MmLocateAcceptMsg::default();
        msg.portable_identity = Some(PortableIdentity::Ipui(Ipui::N(Ipei::new(1, 2))));
        assert_eq!(
            msg.build(Mode::Fp),
            Err(SfmtError::MandatoryIeMissing {
                ie_type: IeType::LocationArea
            })
        );
    }
}
