//! MM-INFO-REQUEST message.

use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::fixed_identity::FixedIdentity;
use crate::ie::info_type::InfoType;
use crate::ie::iwu_to_iwu::IwuToIwu;
use crate::ie::location_area::LocationArea;
use crate::ie::network_parameter::NetworkParameter;
use crate::ie::portable_identity::PortableIdentity;
use crate::ie::value::IeValue;
use crate::ie::IeType;
use crate::message::descriptor::{
    IeDesc, MsgDesc, SlotReader, SlotWriter, IE_MANDATORY, IE_NONE, IE_OPTIONAL,
};
use crate::message::SFormatMessage;

pub const MM_INFO_REQUEST_DESC: MsgDesc = MsgDesc {
    name: "MM-INFO-REQUEST",
    ies: &[
        IeDesc::new(IeType::InfoType, IE_NONE, IE_MANDATORY),
        IeDesc::new(IeType::CallIdentity, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::PortableIdentity, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::FixedIdentity, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::LocationArea, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::NwkAssignedIdentity, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::NetworkParameter, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::IwuToIwu, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::EscapeToProprietary, IE_NONE, IE_OPTIONAL),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MmInfoRequestMsg {
    pub info_type: Option<InfoType>,
    pub call_identity: Option<IeValue>,
    pub portable_identity: Option<PortableIdentity>,
    pub fixed_identity: Option<FixedIdentity>,
    pub location_area: Option<LocationArea>,
    pub nwk_assigned_identity: Option<IeValue>,
    pub network_parameter: Option<NetworkParameter>,
    pub iwu_to_iwu: Option<IwuToIwu>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
}

impl SFormatMessage for MmInfoRequestMsg {
    const DESC: &'static MsgDesc = &MM_INFO_REQUEST_DESC;

    fn from_slots(r: &mut SlotReader) -> Self {
        MmInfoRequestMsg {
            info_type: r.take(),
            call_identity: r.take(),
            portable_identity: r.take(),
            fixed_identity: r.take(),
            location_area: r.take(),
            nwk_assigned_identity: r.take(),
            network_parameter: r.take(),
            iwu_to_iwu: r.take(),
            escape_to_proprietary: r.take(),
        }
    }

    fn to_slots(&self, w: &mut SlotWriter) {
        w.push(self.info_type.clone());
        w.push(self.call_identity.clone());
        w.push(self.portable_identity);
        w.push(self.fixed_identity);
        w.push(self.location_area);
        w.push(self.nwk_assigned_identity.clone());
        w.push(self.network_parameter.clone());
        w.push(self.iwu_to_iwu.clone());
        w.push(self.escape_to_proprietary.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ie::info_type::parameter;
    use crate::Mode;

    #[test]
    fn test_info_request_round_trip() {
        let mut msg = MmInfoRequestMsg::default();
        msg.info_type = Some(InfoType::new([parameter::LOCATE_SUGGEST]));
        let wire = msg.build(Mode::Pp).unwrap();
        assert_eq!(MmInfoRequestMsg::parse(Mode::Fp, &wire).unwrap(), msg);
    }
}
