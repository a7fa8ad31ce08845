//! NWK S-format messages.
//!
//! One module per message: its descriptor table plus a typed struct whose
//! fields mirror the table order. [`SFormatMessage`] ties the two to the
//! descriptor engine.

use crate::error::SfmtError;
use crate::message::descriptor::{build_message, parse_message, MsgDesc, SlotReader, SlotWriter};
use crate::Mode;

pub mod descriptor;
pub mod display;

pub mod cc_alerting;
pub mod cc_call_proc;
pub mod cc_connect;
pub mod cc_connect_ack;
pub mod cc_info;
pub mod cc_iwu_info;
pub mod cc_notify;
pub mod cc_release;
pub mod cc_release_com;
pub mod cc_service_accept;
pub mod cc_service_change;
pub mod cc_service_reject;
pub mod cc_setup;
pub mod cc_setup_ack;

pub mod mm_access_rights_accept;
pub mod mm_access_rights_reject;
pub mod mm_access_rights_request;
pub mod mm_authentication_reject;
pub mod mm_authentication_reply;
pub mod mm_authentication_request;
pub mod mm_cipher_reject;
pub mod mm_cipher_request;
pub mod mm_cipher_suggest;
pub mod mm_info_accept;
pub mod mm_info_reject;
pub mod mm_info_request;
pub mod mm_info_suggest;
pub mod mm_key_allocate;
pub mod mm_locate_accept;
pub mod mm_locate_reject;
pub mod mm_locate_request;
pub mod mm_temporary_identity_assign;
pub mod mm_temporary_identity_assign_ack;
pub mod mm_temporary_identity_assign_rej;

/// CC message types (EN 300 175-5 section 7.4.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum CcMsgType {
    Alerting = 0x01,
    CallProc = 0x02,
    Setup = 0x05,
    Connect = 0x07,
    SetupAck = 0x0d,
    ConnectAck = 0x0f,
    ServiceChange = 0x20,
    ServiceAccept = 0x21,
    ServiceReject = 0x23,
    Release = 0x4d,
    ReleaseCom = 0x5a,
    IwuInfo = 0x60,
    Notify = 0x6e,
    Info = 0x7b,
    Unknown = 0x00,
}

impl From<u8> for CcMsgType {
    fn from(v: u8) -> Self {
        match v {
            0x01 => CcMsgType::Alerting,
            0x02 => CcMsgType::CallProc,
            0x05 => CcMsgType::Setup,
            0x07 => CcMsgType::Connect,
            0x0d => CcMsgType::SetupAck,
            0x0f => CcMsgType::ConnectAck,
            0x20 => CcMsgType::ServiceChange,
            0x21 => CcMsgType::ServiceAccept,
            0x23 => CcMsgType::ServiceReject,
            0x4d => CcMsgType::Release,
            0x5a => CcMsgType::ReleaseCom,
            0x60 => CcMsgType::IwuInfo,
            0x6e => CcMsgType::Notify,
            0x7b => CcMsgType::Info,
            _ => CcMsgType::Unknown,
        }
    }
}

/// MM message types (EN 300 175-5 section 7.4.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum MmMsgType {
    AuthenticationRequest = 0x40,
    AuthenticationReply = 0x41,
    KeyAllocate = 0x42,
    AuthenticationReject = 0x43,
    AccessRightsRequest = 0x44,
    AccessRightsAccept = 0x45,
    AccessRightsReject = 0x47,
    AccessRightsTerminateRequest = 0x48,
    AccessRightsTerminateAccept = 0x49,
    AccessRightsTerminateReject = 0x4b,
    CipherRequest = 0x4c,
    CipherSuggest = 0x4e,
    CipherReject = 0x4f,
    InfoRequest = 0x50,
    InfoAccept = 0x51,
    InfoSuggest = 0x52,
    InfoReject = 0x53,
    LocateRequest = 0x54,
    LocateAccept = 0x55,
    Detach = 0x56,
    LocateReject = 0x57,
    IdentityRequest = 0x58,
    IdentityReply = 0x59,
    TemporaryIdentityAssign = 0x5c,
    TemporaryIdentityAssignAck = 0x5d,
    TemporaryIdentityAssignRej = 0x5e,
    Unknown = 0x00,
}

impl From<u8> for MmMsgType {
    fn from(v: u8) -> Self {
        match v {
            0x40 => MmMsgType::AuthenticationRequest,
            0x41 => MmMsgType::AuthenticationReply,
            0x42 => MmMsgType::KeyAllocate,
            0x43 => MmMsgType::AuthenticationReject,
            0x44 => MmMsgType::AccessRightsRequest,
            0x45 => MmMsgType::AccessRightsAccept,
            0x47 => MmMsgType::AccessRightsReject,
            0x48 => MmMsgType::AccessRightsTerminateRequest,
            0x49 => MmMsgType::AccessRightsTerminateAccept,
            0x4b => MmMsgType::AccessRightsTerminateReject,
            0x4c => MmMsgType::CipherRequest,
            0x4e => MmMsgType::CipherSuggest,
            0x4f => MmMsgType::CipherReject,
            0x50 => MmMsgType::InfoRequest,
            0x51 => MmMsgType::InfoAccept,
            0x52 => MmMsgType::InfoSuggest,
            0x53 => MmMsgType::InfoReject,
            0x54 => MmMsgType::LocateRequest,
            0x55 => MmMsgType::LocateAccept,
            0x56 => MmMsgType::Detach,
            0x57 => MmMsgType::LocateReject,
            0x58 => MmMsgType::IdentityRequest,
            0x59 => MmMsgType::IdentityReply,
            0x5c => MmMsgType::TemporaryIdentityAssign,
            0x5d => MmMsgType::TemporaryIdentityAssignAck,
            0x5e => MmMsgType::TemporaryIdentityAssignRej,
            _ => MmMsgType::Unknown,
        }
    }
}

/// An S-format message: a typed struct bound to its descriptor table.
pub trait SFormatMessage: Sized {
    const DESC: &'static MsgDesc;

    /// Rebuilds the typed struct from the slots of a successful parse.
    /// Fields appear in descriptor order.
    fn from_slots(reader: &mut SlotReader) -> Self;

    /// Writes the struct's fields as slots in descriptor order.
    fn to_slots(&self, writer: &mut SlotWriter);

    /// Parses the IE sequence following the message-type octet.
    fn parse(mode: Mode, buf: &[u8]) -> Result<Self, SfmtError> {
        let slots = parse_message(mode, Self::DESC, buf)?;
        Ok(Self::from_slots(&mut SlotReader::new(slots)))
    }

    /// Builds the IE sequence following the message-type octet.
    fn build(&self, mode: Mode) -> Result<Vec<u8>, SfmtError> {
        let mut writer = SlotWriter::default();
        self.to_slots(&mut writer);
        let mut out = Vec::new();
        build_message(mode, Self::DESC, &writer.finish(), &mut out)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cc_msg_type_round_trip() {
        for t in [
            CcMsgType::Setup,
            CcMsgType::Release,
            CcMsgType::ReleaseCom,
            CcMsgType::Info,
        ] {
            assert_eq!(CcMsgType::from(t as u8), t);
        }
        assert_eq!(CcMsgType::from(0x7f), CcMsgType::Unknown);
    }

    #[test]
    fn test_mm_msg_type_round_trip() {
        for t in [
            MmMsgType::AccessRightsRequest,
            MmMsgType::LocateAccept,
            MmMsgType::TemporaryIdentityAssignRej,
        ] {
            assert_eq!(MmMsgType::from(t as u8), t);
        }
    }
}
