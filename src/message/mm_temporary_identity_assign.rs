//! MM-TEMPORARY-IDENTITY-ASSIGN message.

use crate::ie::duration::DurationIe;
use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::iwu_to_iwu::IwuToIwu;
use crate::ie::location_area::LocationArea;
use crate::ie::network_parameter::NetworkParameter;
use crate::ie::portable_identity::PortableIdentity;
use crate::ie::value::{IeList, IeValue};
use crate::ie::IeType;
use crate::message::descriptor::{
    IeDesc, MsgDesc, SlotReader, SlotWriter, IE_NONE, IE_OPTIONAL,
};
use crate::message::SFormatMessage;

pub const MM_TEMPORARY_IDENTITY_ASSIGN_DESC: MsgDesc = MsgDesc {
    name: "MM-TEMPORARY-IDENTITY-ASSIGN",
    ies: &[
        IeDesc::new(IeType::PortableIdentity, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::LocationArea, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::NwkAssignedIdentity, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::Duration, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::NetworkParameter, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_NONE),
        IeDesc::repeated(IeType::IwuToIwu, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::EscapeToProprietary, IE_OPTIONAL, IE_NONE),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MmTemporaryIdentityAssignMsg {
    pub portable_identity: Option<PortableIdentity>,
    pub location_area: Option<LocationArea>,
    pub nwk_assigned_identity: Option<IeValue>,
    pub duration: Option<DurationIe>,
    pub network_parameter: Option<NetworkParameter>,
    pub iwu_to_iwu: IeList<IwuToIwu>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
}

impl SFormatMessage for MmTemporaryIdentityAssignMsg {
    const DESC: &'static MsgDesc = &MM_TEMPORARY_IDENTITY_ASSIGN_DESC;

    fn from_slots(r: &mut SlotReader) -> Self {
        MmTemporaryIdentityAssignMsg {
            portable_identity: r.take(),
            location_area: r.take(),
            nwk_assigned_identity: r.take(),
            duration: r.take(),
            network_parameter: r.take(),
            iwu_to_iwu: r.take_list(),
            escape_to_proprietary: r.take(),
        }
    }

    fn to_slots(&self, w: &mut SlotWriter) {
        w.push(self.portable_identity);
        w.push(self.location_area);
        w.push(self.nwk_assigned_identity.clone());
        w.push(self.duration);
        w.push(self.network_parameter.clone());
        w.push_list(self.iwu_to_iwu.clone());
        w.push(self.escape_to_proprietary.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Tpui;
    use crate::Mode;

    #[test]
    fn test_temporary_identity_assign_round_trip() {
        let mut msg = MmTemporaryIdentityAssignMsg::default();
        msg.portable_identity = Some(PortableIdentity::Tpui(Tpui::IndividualAssigned(0x12345)));
        let wire = msg.build(Mode::Fp).unwrap();
        assert_eq!(
            MmTemporaryIdentityAssignMsg::parse(Mode::Pp, &wire).unwrap(),
            msg
        );
    }
}
