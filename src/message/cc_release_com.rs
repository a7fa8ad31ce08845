//! CC-RELEASE-COM message.

use crate::ie::display::Display;
use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::facility::Facility;
use crate::ie::feature_indicate::FeatureIndicate;
use crate::ie::identity_type::IdentityType;
use crate::ie::iwu_to_iwu::IwuToIwu;
use crate::ie::location_area::LocationArea;
use crate::ie::network_parameter::NetworkParameter;
use crate::ie::release_reason::ReleaseReason;
use crate::ie::value::{IeList, IeValue};
use crate::ie::IeType;
use crate::message::descriptor::{
    IeDesc, MsgDesc, SlotReader, SlotWriter, IE_NONE, IE_OPTIONAL,
};
use crate::message::SFormatMessage;

pub const CC_RELEASE_COM_DESC: MsgDesc = MsgDesc {
    name: "CC-RELEASE-COM",
    ies: &[
        IeDesc::new(IeType::ReleaseReason, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::IdentityType, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::LocationArea, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::IwuAttributes, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::ConnectionAttributes, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::repeated(IeType::Facility, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::SingleDisplay, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::FeatureIndicate, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::NetworkParameter, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::repeated(IeType::SegmentedInfo, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::IwuToIwu, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::IwuPacket, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::EscapeToProprietary, IE_OPTIONAL, IE_OPTIONAL),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CcReleaseComMsg {
    pub release_reason: Option<ReleaseReason>,
    pub identity_type: Option<IdentityType>,
    pub location_area: Option<LocationArea>,
    pub iwu_attributes: Option<IeValue>,
    pub connection_attributes: Option<IeValue>,
    pub facility: IeList<Facility>,
    pub display: Option<Display>,
    pub feature_indicate: Option<FeatureIndicate>,
    pub network_parameter: Option<NetworkParameter>,
    pub segmented_info: IeList<IeValue>,
    pub iwu_to_iwu: Option<IwuToIwu>,
    pub iwu_packet: Option<IeValue>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
}

impl CcReleaseComMsg {
    /// The minimal reject/error form carrying only a release reason.
    pub fn with_reason(reason: ReleaseReason) -> Self {
        CcReleaseComMsg {
            release_reason: Some(reason),
            ..Default::default()
        }
    }
}

impl SFormatMessage for CcReleaseComMsg {
    const DESC: &'static MsgDesc = &CC_RELEASE_COM_DESC;

    fn from_slots(r: &mut SlotReader) -> Self {
        CcReleaseComMsg {
            release_reason: r.take(),
            identity_type: r.take(),
            location_area: r.take(),
            iwu_attributes: r.take(),
            connection_attributes: r.take(),
            facility: r.take_list(),
            display: r.take(),
            feature_indicate: r.take(),
            network_parameter: r.take(),
            segmented_info: r.take_list(),
            iwu_to_iwu: r.take(),
            iwu_packet: r.take(),
            escape_to_proprietary: r.take(),
        }
    }

    fn to_slots(&self, w: &mut SlotWriter) {
        w.push(self.release_reason);
        w.push(self.identity_type);
        w.push(self.location_area);
        w.push(self.iwu_attributes.clone());
        w.push(self.connection_attributes.clone());
        w.push_list(self.facility.clone());
        w.push(self.display.clone());
        w.push(self.feature_indicate);
        w.push(self.network_parameter.clone());
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
    fn test_cc_release_com_round_trip() {
        let msg = CcReleaseComMsg::with_reason(ReleaseReason::InvalidIeContents);
        let wire = msg.build(Mode::Fp).unwrap();
        assert_eq!(wire, [0xe2, 0x04]);
        assert_eq!(CcReleaseComMsg::parse(Mode::Pp, &wire).unwrap(), msg);
    }
}
