//! MM-INFO-ACCEPT message.

use crate::ie::duration::DurationIe;
use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::fixed_identity::FixedIdentity;
use crate::ie::info_type::InfoType;
use crate::ie::iwu_to_iwu::IwuToIwu;
use crate::ie::location_area::LocationArea;
use crate::ie::network_parameter::NetworkParameter;
use crate::ie::value::IeValue;
use crate::ie::IeType;
use crate::message::descriptor::{
    IeDesc, MsgDesc, SlotReader, SlotWriter, IE_MANDATORY, IE_NONE, IE_OPTIONAL,
};
use crate::message::SFormatMessage;

pub const MM_INFO_ACCEPT_DESC: MsgDesc = MsgDesc {
    name: "MM-INFO-ACCEPT",
    ies: &[
        IeDesc::new(IeType::InfoType, IE_MANDATORY, IE_NONE),
        IeDesc::new(IeType::CallIdentity, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::FixedIdentity, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::LocationArea, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::NwkAssignedIdentity, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::NetworkParameter, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::Duration, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::IwuToIwu, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::EscapeToProprietary, IE_OPTIONAL, IE_NONE),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MmInfoAcceptMsg {
    pub info_type: Option<InfoType>,
    pub call_identity: Option<IeValue>,
    pub fixed_identity: Option<FixedIdentity>,
    pub location_area: Option<LocationArea>,
    pub nwk_assigned_identity: Option<IeValue>,
    pub network_parameter: Option<NetworkParameter>,
    pub duration: Option<DurationIe>,
    pub iwu_to_iwu: Option<IwuToIwu>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
}

impl SFormatMessage for MmInfoAcceptMsg {
    const DESC: &'static MsgDesc = &MM_INFO_ACCEPT_DESC;

    fn from_slots(r: &mut SlotReader) -> Self {
        MmInfoAcceptMsg {
            info_type: r.take(),
            call_identity: r.take(),
            fixed_identity: r.take(),
            location_area: r.take(),
            nwk_assigned_identity: r.take(),
            network_parameter: r.take(),
            duration: r.take(),
            iwu_to_iwu: r.take(),
            escape_to_proprietary: r.take(),
        }
    }

    fn to_slots(&self, w: &mut SlotWriter) {
        w.push(self.info_type.clone());
        w.push(self.call_identity.clone());
        w.push(self.fixed_identity);
        w.push(self.location_area);
        w.push(self.nwk_assigned_identity.clone());
        w.push(self.network_parameter.clone());
        w.push(self.duration);
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
    fn test_info_accept_round_trip() {
        let mut msg = MmInfoAcceptMsg::default();
        msg.info_type = Some(InfoType::new([parameter::LOCATION_AREA]));
        msg.location_area = Some(LocationArea::new(0, 3));
        let wire = msg.build(Mode::Fp).unwrap();
        assert_eq!(MmInfoAcceptMsg::parse(Mode::Pp, &wire).unwrap(), msg);
    }
}
