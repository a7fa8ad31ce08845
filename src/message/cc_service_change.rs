//! CC-SERVICE-CHANGE message.

use crate::ie::codec_list::CodecList;
use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::iwu_to_iwu::IwuToIwu;
use crate::ie::portable_identity::PortableIdentity;
use crate::ie::service_change_info::ServiceChangeInfo;
use crate::ie::value::{IeList, IeValue};
use crate::ie::IeType;
use crate::message::descriptor::{
    IeDesc, MsgDesc, SlotReader, SlotWriter, IE_MANDATORY, IE_OPTIONAL,
};
use crate::message::SFormatMessage;

pub const CC_SERVICE_CHANGE_DESC: MsgDesc = MsgDesc {
    name: "CC-SERVICE-CHANGE",
    ies: &[
        IeDesc::new(IeType::PortableIdentity, IE_MANDATORY, IE_MANDATORY),
        IeDesc::new(IeType::IwuAttributes, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::ServiceChangeInfo, IE_MANDATORY, IE_MANDATORY),
        IeDesc::new(IeType::CallAttributes, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::repeated(IeType::ConnectionAttributes, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::ConnectionIdentity, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::repeated(IeType::SegmentedInfo, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::IwuToIwu, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::CodecList, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::EscapeToProprietary, IE_OPTIONAL, IE_OPTIONAL),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CcServiceChangeMsg {
    pub portable_identity: Option<PortableIdentity>,
    pub iwu_attributes: Option<IeValue>,
    pub service_change_info: Option<ServiceChangeInfo>,
    pub call_attributes: Option<IeValue>,
    pub connection_attributes: IeList<IeValue>,
    pub connection_identity: Option<IeValue>,
    pub segmented_info: IeList<IeValue>,
    pub iwu_to_iwu: Option<IwuToIwu>,
    pub codec_list: Option<CodecList>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
}

impl SFormatMessage for CcServiceChangeMsg {
    const DESC: &'static MsgDesc = &CC_SERVICE_CHANGE_DESC;

    fn from_slots(r: &mut SlotReader) -> Self {
        CcServiceChangeMsg {
            portable_identity: r.take(),
            iwu_attributes: r.take(),
            service_change_info: r.take(),
            call_attributes: r.take(),
            connection_attributes: r.take_list(),
            connection_identity: r.take(),
            segmented_info: r.take_list(),
            iwu_to_iwu: r.take(),
            codec_list: r.take(),
            escape_to_proprietary: r.take(),
        }
    }

    fn to_slots(&self, w: &mut SlotWriter) {
        w.push(self.portable_identity);
        w.push(self.iwu_attributes.clone());
        w.push(self.service_change_info);
        w.push(self.call_attributes.clone());
        w.push_list(self.connection_attributes.clone());
        w.push(self.connection_identity.clone());
        w.push_list(self.segmented_info.clone());
        w.push(self.iwu_to_iwu.clone());
        w.push(self.codec_list.clone());
        w.push(self.escape_to_proprietary.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SfmtError;
    use crate::identity::{Ipei, Ipui};
    use crate::ie::service_change_info::ServiceChangeMode;
    use crate::Mode;

    #[test]
    fn test_cc_service_change_round_trip() {
        let mut msg = CcServiceChangeMsg::default();
        msg.portable_identity = Some(PortableIdentity::Ipui(Ipui::N(Ipei::new(1, 2))));
        msg.service_change_info = Some(ServiceChangeInfo::new(true, ServiceChangeMode::AudioCodec));
        let wire = msg.build(Mode::Pp).unwrap();
        assert_eq!(CcServiceChangeMsg::parse(Mode::Fp, &wire).unwrap(), msg);
    }

    #[test]
    fn test_cc_service_change_requires_change_info() {
        let mut msg = CcServiceChangeMsg::default();
        msg.portable_identity = Some(PortableIdentity::Ipui(Ipui::N(Ipei::new(1, 2))));
        assert_eq!(
            msg.build(Mode::Pp),
            Err(SfmtError::MandatoryIeMissing {
                ie_type: IeType::ServiceChangeInfo
            })
        );
    }
}
