//! MM-ACCESS-RIGHTS-ACCEPT message.

use crate::ie::auth_type::AuthType;
use crate::ie::cipher_info::CipherInfo;
use crate::ie::codec_list::CodecList;
use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::fixed_identity::FixedIdentity;
use crate::ie::iwu_to_iwu::IwuToIwu;
use crate::ie::location_area::LocationArea;
use crate::ie::portable_identity::PortableIdentity;
use crate::ie::setup_capability::SetupCapability;
use crate::ie::value::{IeList, IeValue};
use crate::ie::IeType;
use crate::message::descriptor::{
    IeDesc, MsgDesc, SlotReader, SlotWriter, IE_MANDATORY, IE_NONE, IE_OPTIONAL,
};
use crate::message::SFormatMessage;

pub const MM_ACCESS_RIGHTS_ACCEPT_DESC: MsgDesc = MsgDesc {
    name: "MM-ACCESS-RIGHTS-ACCEPT",
    ies: &[
        IeDesc::new(IeType::PortableIdentity, IE_MANDATORY, IE_NONE),
        IeDesc::new(IeType::RepeatIndicator, IE_OPTIONAL, IE_NONE),
        IeDesc::repeated(IeType::FixedIdentity, IE_MANDATORY, IE_NONE),
        IeDesc::new(IeType::LocationArea, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::AuthType, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::CipherInfo, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::ZapField, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::ServiceClass, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::SetupCapability, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::ModelIdentifier, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::IwuToIwu, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::CodecList, IE_OPTIONAL, IE_NONE),
        IeDesc::new(IeType::EscapeToProprietary, IE_OPTIONAL, IE_NONE),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MmAccessRightsAcceptMsg {
    pub portable_identity: Option<PortableIdentity>,
    pub fixed_identity: IeList<FixedIdentity>,
    pub location_area: Option<LocationArea>,
    pub auth_type: Option<AuthType>,
    pub cipher_info: Option<CipherInfo>,
    pub zap_field: Option<IeValue>,
    pub service_class: Option<IeValue>,
    pub setup_capability: Option<SetupCapability>,
    pub model_identifier: Option<IeValue>,
    pub iwu_to_iwu: Option<IwuToIwu>,
    pub codec_list: Option<CodecList>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
}

impl SFormatMessage for MmAccessRightsAcceptMsg {
    const DESC: &'static MsgDesc = &MM_ACCESS_RIGHTS_ACCEPT_DESC;

    fn from_slots(r: &mut SlotReader) -> Self {
        MmAccessRightsAcceptMsg {
            portable_identity: r.take(),
            fixed_identity: r.take_list(),
            location_area: r.take(),
            auth_type: r.take(),
            cipher_info: r.take(),
            zap_field: r.take(),
            service_class: r.take(),
            setup_capability: r.take(),
            model_identifier: r.take(),
            iwu_to_iwu: r.take(),
            codec_list: r.take(),
            escape_to_proprietary: r.take(),
        }
    }

    fn to_slots(&self, w: &mut SlotWriter) {
        w.push(self.portable_identity);
        w.push_list(self.fixed_identity.clone());
        w.push(self.location_area);
        w.push(self.auth_type);
        w.push(self.cipher_info);
        w.push(self.zap_field.clone());
        w.push(self.service_class.clone());
        w.push(self.setup_capability);
        w.push(self.model_identifier.clone());
        w.push(self.iwu_to_iwu.clone());
        w.push(self.codec_list.clone());
        w.push(self.escape_to_proprietary.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SfmtError;
    use crate::identity::{Ari, Ipei, Ipui};
    use crate::Mode;

    fn sample() -> MmAccessRightsAcceptMsg {
        let mut msg = MmAccessRightsAcceptMsg::default();
        msg.portable_identity = Some(PortableIdentity::Ipui(Ipui::N(Ipei::new(7, 9))));
        msg.fixed_identity = vec![FixedIdentity::park(Ari::ClassA { emc: 1, fpn: 2 })].into();
        msg
    }

    #[test]
    fn test_access_rights_accept_round_trip() {
        let msg = sample();
        let wire = msg.build(Mode::Fp).unwrap();
        assert_eq!(MmAccessRightsAcceptMsg::parse(Mode::Pp, &wire).unwrap(), msg);
    }

    #[test]
    fn test_access_rights_accept_two_identities_use_repeat_indicator() {
        let mut msg = sample();
        msg.fixed_identity.push(FixedIdentity::park(Ari::ClassA {
            emc: 3,
            fpn: 4,
        }));
        let wire = msg.build(Mode::Fp).unwrap();
        let parsed = MmAccessRightsAcceptMsg::parse(Mode::Pp, &wire).unwrap();
        assert_eq!(parsed.fixed_identity.len(), 2);
        assert_eq!(parsed, msg);
    }

    #[test]
    fn test_access_rights_accept_requires_fixed_identity() {
        let mut msg = sample();
        msg.fixed_identity = IeList::default();
        assert_eq!(
            msg.build(Mode::Fp),
            Err(SfmtError::MandatoryIeMissing {
                ie_type: IeType::FixedIdentity
            })
        );
    }
}
