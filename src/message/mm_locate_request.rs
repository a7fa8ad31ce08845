//! MM-LOCATE-REQUEST message.

use crate::ie::cipher_info::CipherInfo;
use crate::ie::codec_list::CodecList;
use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::fixed_identity::FixedIdentity;
use crate::ie::iwu_to_iwu::IwuToIwu;
use crate::ie::location_area::LocationArea;
use crate::ie::network_parameter::NetworkParameter;
use crate::ie::portable_identity::PortableIdentity;
use crate::ie::setup_capability::SetupCapability;
use crate::ie::terminal_capability::TerminalCapability;
use crate::ie::value::{IeList, IeValue};
use crate::ie::IeType;
use crate::message::descriptor::{
    IeDesc, MsgDesc, SlotReader, SlotWriter, IE_MANDATORY, IE_NONE, IE_OPTIONAL,
};
use crate::message::SFormatMessage;

pub const MM_LOCATE_REQUEST_DESC: MsgDesc = MsgDesc {
    name: "MM-LOCATE-REQUEST",
    ies: &[
        IeDesc::new(IeType::PortableIdentity, IE_NONE, IE_MANDATORY),
        IeDesc::new(IeType::FixedIdentity, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::LocationArea, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::NwkAssignedIdentity, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::CipherInfo, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::SetupCapability, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::TerminalCapability, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::NetworkParameter, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::repeated(IeType::SegmentedInfo, IE_OPTIONAL, IE_OPTIONAL),
        IeDesc::new(IeType::IwuToIwu, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::ModelIdentifier, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::CodecList, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::EscapeToProprietary, IE_NONE, IE_OPTIONAL),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MmLocateRequestMsg {
    pub portable_identity: Option<PortableIdentity>,
    pub fixed_identity: Option<FixedIdentity>,
    pub location_area: Option<LocationArea>,
    pub nwk_assigned_identity: Option<IeValue>,
    pub cipher_info: Option<CipherInfo>,
    pub setup_capability: Option<SetupCapability>,
    pub terminal_capability: Option<TerminalCapability>,
    pub network_parameter: Option<NetworkParameter>,
    pub segmented_info: IeList<IeValue>,
    pub iwu_to_iwu: Option<IwuToIwu>,
    pub model_identifier: Option<IeValue>,
    pub codec_list: Option<CodecList>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
}

impl SFormatMessage for MmLocateRequestMsg {
    const DESC: &'static MsgDesc = &MM_LOCATE_REQUEST_DESC;

    fn from_slots(r: &mut SlotReader) -> Self {
        MmLocateRequestMsg {
            portable_identity: r.take(),
            fixed_identity: r.take(),
            location_area: r.take(),
            nwk_assigned_identity: r.take(),
            cipher_info: r.take(),
            setup_capability: r.take(),
            terminal_capability: r.take(),
            network_parameter: r.take(),
            segmented_info: r.take_list(),
            iwu_to_iwu: r.take(),
            model_identifier: r.take(),
            codec_list: r.take(),
            escape_to_proprietary: r.take(),
        }
    }

    fn to_slots(&self, w: &mut SlotWriter) {
        w.push(self.portable_identity);
        w.push(self.fixed_identity);
        w.push(self.location_area);
        w.push(self.nwk_assigned_identity.clone());
        w.push(self.cipher_info);
        w.push(self.setup_capability);
        w.push(self.terminal_capability);
        w.push(self.network_parameter.clone());
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
    use crate::identity::{Ipei, Ipui};
    use crate::Mode;

    #[test]
    fn test_locate_request_round_trip() {
        let mut msg = MmLocateRequestMsg::default();
        msg.portable_identity = Some(PortableIdentity::Ipui(Ipui::N(Ipei::new(0x123, 0x9))));
        msg.location_area = Some(LocationArea::new(0, 1));
        let wire = msg.build(Mode::Pp).unwrap();
        assert_eq!(MmLocateRequestMsg::parse(Mode::Fp, &wire).unwrap(), msg);
    }
}
