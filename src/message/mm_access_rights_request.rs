//! MM-ACCESS-RIGHTS-REQUEST message.

use crate::ie::auth_type::AuthType;
use crate::ie::cipher_info::CipherInfo;
use crate::ie::codec_list::CodecList;
use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::iwu_to_iwu::IwuToIwu;
use crate::ie::portable_identity::PortableIdentity;
use crate::ie::setup_capability::SetupCapability;
use crate::ie::terminal_capability::TerminalCapability;
use crate::ie::value::IeValue;
use crate::ie::IeType;
use crate::message::descriptor::{
    IeDesc, MsgDesc, SlotReader, SlotWriter, IE_MANDATORY, IE_NONE, IE_OPTIONAL,
};
use crate::message::SFormatMessage;

pub const MM_ACCESS_RIGHTS_REQUEST_DESC: MsgDesc = MsgDesc {
    name: "MM-ACCESS-RIGHTS-REQUEST",
    ies: &[
        IeDesc::new(IeType::PortableIdentity, IE_NONE, IE_MANDATORY),
        IeDesc::new(IeType::AuthType, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::CipherInfo, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::SetupCapability, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::TerminalCapability, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::IwuToIwu, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::ModelIdentifier, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::CodecList, IE_NONE, IE_OPTIONAL),
        IeDesc::new(IeType::EscapeToProprietary, IE_NONE, IE_OPTIONAL),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MmAccessRightsRequestMsg {
    pub portable_identity: Option<PortableIdentity>,
    pub auth_type: Option<AuthType>,
    pub cipher_info: Option<CipherInfo>,
    pub setup_capability: Option<SetupCapability>,
    pub terminal_capability: Option<TerminalCapability>,
    pub iwu_to_iwu: Option<IwuToIwu>,
    pub model_identifier: Option<IeValue>,
    pub codec_list: Option<CodecList>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
}

impl SFormatMessage for MmAccessRightsRequestMsg {
    const DESC: &'static MsgDesc = &MM_ACCESS_RIGHTS_REQUEST_DESC;

    fn from_slots(r: &mut SlotReader) -> Self {
        MmAccessRightsRequestMsg {
            portable_identity: r.take(),
            auth_type: r.take(),
            cipher_info: r.take(),
            setup_capability: r.take(),
            terminal_capability: r.take(),
            iwu_to_iwu: r.take(),
            model_identifier: r.take(),
            codec_list: r.take(),
            escape_to_proprietary: r.take(),
        }
    }

    fn to_slots(&self, w: &mut SlotWriter) {
        w.push(self.portable_identity);
        w.push(self.auth_type);
        w.push(self.cipher_info);
        w.push(self.setup_capability);
        w.push(self.terminal_capability);
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
    use crate::Mode;

    #[test]
    fn test_access_rights_request_round_trip() {
        let mut msg = MmAccessRightsRequestMsg::default();
        msg.portable_identity = Some(PortableIdentity::Ipui(Ipui::N(Ipei::new(0x123, 0x456))));
        msg.terminal_capability = Some(TerminalCapability::default());
        let wire = msg.build(Mode::Pp).unwrap();
        assert_eq!(MmAccessRightsRequestMsg::parse(Mode::Fp, &wire).unwrap(), msg);
    }

    #[test]
    fn test_access_rights_request_needs_portable_identity() {
        let msg = MmAccessRightsRequestMsg::default();
        assert_eq!(
            msg.build(Mode::Pp),
            Err(SfmtError::MandatoryIeMissing {
                ie_type: IeType::PortableIdentity
            })
        );
    }

    #[test]
    fn test_access_rights_request_fp_cannot_send() {
        let mut msg = MmAccessRightsRequestMsg::default();
        msg.portable_identity = Some(PortableIdentity::Ipui(Ipui::N(Ipei::new(1, 1))));
        assert!(msg.build(Mode::Fp).is_err());
    }
}
