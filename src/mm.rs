//! Mobility Management (MM) protocol entity.
//!
//! Each MM exchange is a short handshake over its own transaction:
//! access rights, location registration, temporary identity assignment,
//! authentication, key allocation, ciphering and parameter retrieval.
//! The entity muxes messages to the application; it implements none of
//! the cryptography.

use crate::error::NwkError;
use crate::handle::{DectHandle, LinkId, NwkEvent};
use crate::ie::allocation_type::AllocationType;
use crate::ie::auth_res::AuthRes;
use crate::ie::auth_type::AuthType;
use crate::ie::auth_value::AuthValue;
use crate::ie::cipher_info::CipherInfo;
use crate::ie::codec_list::CodecList;
use crate::ie::duration::DurationIe;
use crate::ie::fixed_identity::FixedIdentity;
use crate::ie::info_type::InfoType;
use crate::ie::iwu_to_iwu::IwuToIwu;
use crate::ie::location_area::LocationArea;
use crate::ie::network_parameter::NetworkParameter;
use crate::ie::portable_identity::PortableIdentity;
use crate::ie::reject_reason::RejectReason;
use crate::ie::setup_capability::SetupCapability;
use crate::ie::terminal_capability::TerminalCapability;
use crate::ie::value::{IeList, IeValue, UseTpui};
use crate::message::mm_access_rights_accept::MmAccessRightsAcceptMsg;
use crate::message::mm_access_rights_reject::MmAccessRightsRejectMsg;
use crate::message::mm_access_rights_request::MmAccessRightsRequestMsg;
use crate::message::mm_authentication_reject::MmAuthenticationRejectMsg;
use crate::message::mm_authentication_reply::MmAuthenticationReplyMsg;
use crate::message::mm_authentication_request::MmAuthenticationRequestMsg;
use crate::message::mm_cipher_reject::MmCipherRejectMsg;
use crate::message::mm_cipher_request::MmCipherRequestMsg;
use crate::message::mm_cipher_suggest::MmCipherSuggestMsg;
use crate::message::mm_info_accept::MmInfoAcceptMsg;
use crate::message::mm_info_reject::MmInfoRejectMsg;
use crate::message::mm_info_request::MmInfoRequestMsg;
use crate::message::mm_info_suggest::MmInfoSuggestMsg;
use crate::message::mm_key_allocate::MmKeyAllocateMsg;
use crate::message::mm_locate_accept::MmLocateAcceptMsg;
use crate::message::mm_locate_reject::MmLocateRejectMsg;
use crate::message::mm_locate_request::MmLocateRequestMsg;
use crate::message::mm_temporary_identity_assign::MmTemporaryIdentityAssignMsg;
use crate::message::mm_temporary_identity_assign_ack::MmTemporaryIdentityAssignAckMsg;
use crate::message::mm_temporary_identity_assign_rej::MmTemporaryIdentityAssignRejMsg;
use crate::message::{MmMsgType, SFormatMessage};
use crate::transaction::{DdlRelease, FrameHeader, Pd, Role, Transaction, TransactionOwner};
use crate::Mode;
use tracing::{debug, warn};

/// Identifies one MM transaction instance within a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MmId(pub u64);

/// Which handshake a transaction carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MmExchange {
    AccessRights,
    Locate,
    IdentityAssign,
    Authenticate,
    KeyAllocate,
    Cipher,
    Info,
}

pub(crate) struct MmTransaction {
    pub link: LinkId,
    pub transaction: Transaction,
    pub exchange: MmExchange,
}

/// MM_ACCESS_RIGHTS parameters.
#[derive(Debug, Clone, Default)]
pub struct MmAccessRightsParam {
    pub portable_identity: Option<PortableIdentity>,
    pub fixed_identity: IeList<FixedIdentity>,
    pub location_area: Option<LocationArea>,
    pub auth_type: Option<AuthType>,
    pub cipher_info: Option<CipherInfo>,
    pub setup_capability: Option<SetupCapability>,
    pub terminal_capability: Option<TerminalCapability>,
    pub model_identifier: Option<IeValue>,
    pub iwu_to_iwu: Option<IwuToIwu>,
    pub codec_list: Option<CodecList>,
    pub reject_reason: Option<RejectReason>,
    pub duration: Option<DurationIe>,
}

/// MM_LOCATE parameters. A populated `reject_reason` turns the response
/// into a LOCATE-REJECT.
#[derive(Debug, Clone, Default)]
pub struct MmLocateParam {
    pub portable_identity: Option<PortableIdentity>,
    pub fixed_identity: Option<FixedIdentity>,
    pub location_area: Option<LocationArea>,
    pub nwk_assigned_identity: Option<IeValue>,
    pub cipher_info: Option<CipherInfo>,
    pub setup_capability: Option<SetupCapability>,
    pub terminal_capability: Option<TerminalCapability>,
    pub network_parameter: Option<NetworkParameter>,
    pub use_tpui: Option<UseTpui>,
    pub duration: Option<DurationIe>,
    pub iwu_to_iwu: Option<IwuToIwu>,
    pub model_identifier: Option<IeValue>,
    pub codec_list: Option<CodecList>,
    pub reject_reason: Option<RejectReason>,
}

/// MM_IDENTITY_ASSIGN parameters.
#[derive(Debug, Clone, Default)]
pub struct MmIdentityAssignParam {
    pub portable_identity: Option<PortableIdentity>,
    pub location_area: Option<LocationArea>,
    pub nwk_assigned_identity: Option<IeValue>,
    pub duration: Option<DurationIe>,
    pub network_parameter: Option<NetworkParameter>,
    pub reject_reason: Option<RejectReason>,
}

/// MM_AUTHENTICATE parameters.
#[derive(Debug, Clone, Default)]
pub struct MmAuthenticateParam {
    pub auth_type: Option<AuthType>,
    pub rand: Option<AuthValue>,
    pub rs: Option<AuthValue>,
    pub res: Option<AuthRes>,
    pub cipher_info: Option<CipherInfo>,
    pub reject_reason: Option<RejectReason>,
}

/// MM_KEY_ALLOCATE parameters.
#[derive(Debug, Clone, Default)]
pub struct MmKeyAllocateParam {
    pub allocation_type: Option<AllocationType>,
    pub rand: Option<AuthValue>,
    pub rs: Option<AuthValue>,
}

/// MM_CIPHER parameters.
#[derive(Debug, Clone, Default)]
pub struct MmCipherParam {
    pub cipher_info: Option<CipherInfo>,
    pub call_identity: Option<IeValue>,
    pub connection_identity: Option<IeValue>,
    pub iwu_to_iwu: Option<IwuToIwu>,
    pub reject_reason: Option<RejectReason>,
}

/// MM_INFO parameters.
#[derive(Debug, Clone, Default)]
pub struct MmInfoParam {
    pub info_type: Option<InfoType>,
    pub call_identity: Option<IeValue>,
    pub portable_identity: Option<PortableIdentity>,
    pub fixed_identity: Option<FixedIdentity>,
    pub location_area: Option<LocationArea>,
    pub nwk_assigned_identity: Option<IeValue>,
    pub network_parameter: Option<NetworkParameter>,
    pub duration: Option<DurationIe>,
    pub iwu_to_iwu: Option<IwuToIwu>,
    pub reject_reason: Option<RejectReason>,
}

/// Indications from the MM entity.
#[derive(Debug)]
pub enum MmEvent {
    AccessRightsInd { mm: MmId, param: MmAccessRightsParam },
    AccessRightsCfm { mm: MmId, accept: bool, param: MmAccessRightsParam },
    LocateInd { mm: MmId, param: MmLocateParam },
    LocateCfm { mm: MmId, accept: bool, param: MmLocateParam },
    IdentityAssignInd { mm: MmId, param: MmIdentityAssignParam },
    IdentityAssignCfm { mm: MmId, accept: bool, param: MmIdentityAssignParam },
    AuthenticateInd { mm: MmId, param: MmAuthenticateParam },
    AuthenticateCfm { mm: MmId, accept: bool, param: MmAuthenticateParam },
    KeyAllocateInd { mm: MmId, param: MmKeyAllocateParam },
    CipherInd { mm: MmId, param: MmCipherParam },
    CipherCfm { mm: MmId, accept: bool, param: MmCipherParam },
    InfoInd { mm: MmId, param: MmInfoParam },
    InfoCfm { mm: MmId, accept: bool, param: MmInfoParam },
}

impl DectHandle {
    /// PP: requests access rights (subscription) from the FP.
    pub fn mm_access_rights_req(
        &mut self,
        link: LinkId,
        param: MmAccessRightsParam,
    ) -> Result<MmId, NwkError> {
        let msg = MmAccessRightsRequestMsg {
            portable_identity: param.portable_identity,
            auth_type: param.auth_type,
            cipher_info: param.cipher_info,
            setup_capability: param.setup_capability,
            terminal_capability: param.terminal_capability,
            iwu_to_iwu: param.iwu_to_iwu,
            model_identifier: param.model_identifier,
            codec_list: param.codec_list,
            ..Default::default()
        };
        self.mm_open_transaction(
            link,
            MmExchange::AccessRights,
            MmMsgType::AccessRightsRequest,
            &msg,
        )
    }

    /// FP: answers an access rights request. The fixed identity list
    /// defaults to the handle's PARK when left empty.
    pub fn mm_access_rights_res(
        &mut self,
        mm: MmId,
        accept: bool,
        param: MmAccessRightsParam,
    ) -> Result<(), NwkError> {
        let (link, transaction) = self.mm_route(mm)?;
        let result = if accept {
            let mut fixed_identity = param.fixed_identity;
            if fixed_identity.is_empty() {
                fixed_identity.push(FixedIdentity::park(self.pari));
            }
            let msg = MmAccessRightsAcceptMsg {
                portable_identity: param.portable_identity,
                fixed_identity,
                location_area: param.location_area,
                auth_type: param.auth_type,
                cipher_info: param.cipher_info,
                setup_capability: param.setup_capability,
                model_identifier: param.model_identifier,
                iwu_to_iwu: param.iwu_to_iwu,
                codec_list: param.codec_list,
                ..Default::default()
            };
            self.mm_send(link, transaction, MmMsgType::AccessRightsAccept, &msg)
        } else {
            let msg = MmAccessRightsRejectMsg {
                reject_reason: param.reject_reason,
                duration: param.duration,
                ..Default::default()
            };
            self.mm_send(link, transaction, MmMsgType::AccessRightsReject, &msg)
        };
        self.mm_destroy(mm, DdlRelease::Partial);
        result
    }

    /// PP: requests location registration.
    pub fn mm_locate_req(&mut self, link: LinkId, param: MmLocateParam) -> Result<MmId, NwkError> {
        let msg = MmLocateRequestMsg {
            portable_identity: param.portable_identity,
            fixed_identity: param.fixed_identity,
            location_area: param.location_area,
            nwk_assigned_identity: param.nwk_assigned_identity,
            cipher_info: param.cipher_info,
            setup_capability: param.setup_capability,
            terminal_capability: param.terminal_capability,
            network_parameter: param.network_parameter,
            iwu_to_iwu: param.iwu_to_iwu,
            model_identifier: param.model_identifier,
            codec_list: param.codec_list,
            ..Default::default()
        };
        self.mm_open_transaction(link, MmExchange::Locate, MmMsgType::LocateRequest, &msg)
    }

    /// FP: answers a locate request. Accepts when `reject_reason` is
    /// unset, rejects otherwise.
    pub fn mm_locate_res(&mut self, mm: MmId, param: MmLocateParam) -> Result<(), NwkError> {
        let (link, transaction) = self.mm_route(mm)?;
        let result = if param.reject_reason.is_none() {
            let msg = MmLocateAcceptMsg {
                portable_identity: param.portable_identity,
                location_area: param.location_area,
                use_tpui: param.use_tpui,
                nwk_assigned_identity: param.nwk_assigned_identity,
                setup_capability: param.setup_capability,
                duration: param.duration,
                iwu_to_iwu: param.iwu_to_iwu,
                model_identifier: param.model_identifier,
                codec_list: param.codec_list,
                ..Default::default()
            };
            self.mm_send(link, transaction, MmMsgType::LocateAccept, &msg)
        } else {
            let msg = MmLocateRejectMsg {
                reject_reason: param.reject_reason,
                duration: param.duration,
                iwu_to_iwu: param.iwu_to_iwu,
                ..Default::default()
            };
            self.mm_send(link, transaction, MmMsgType::LocateReject, &msg)
        };
        self.mm_destroy(mm, DdlRelease::Partial);
        result
    }

    /// FP: assigns a temporary identity.
    pub fn mm_identity_assign_req(
        &mut self,
        link: LinkId,
        param: MmIdentityAssignParam,
    ) -> Result<MmId, NwkError> {
        let msg = MmTemporaryIdentityAssignMsg {
            portable_identity: param.portable_identity,
            location_area: param.location_area,
            nwk_assigned_identity: param.nwk_assigned_identity,
            duration: param.duration,
            network_parameter: param.network_parameter,
            ..Default::default()
        };
        self.mm_open_transaction(
            link,
            MmExchange::IdentityAssign,
            MmMsgType::TemporaryIdentityAssign,
            &msg,
        )
    }

    /// PP: acknowledges or rejects a temporary identity assignment.
    pub fn mm_identity_assign_res(
        &mut self,
        mm: MmId,
        accept: bool,
        param: MmIdentityAssignParam,
    ) -> Result<(), NwkError> {
        let (link, transaction) = self.mm_route(mm)?;
        let result = if accept {
            let msg = MmTemporaryIdentityAssignAckMsg::default();
            self.mm_send(link, transaction, MmMsgType::TemporaryIdentityAssignAck, &msg)
        } else {
            let msg = MmTemporaryIdentityAssignRejMsg {
                reject_reason: param.reject_reason,
                ..Default::default()
            };
            self.mm_send(link, transaction, MmMsgType::TemporaryIdentityAssignRej, &msg)
        };
        self.mm_destroy(mm, DdlRelease::Partial);
        result
    }

    /// Starts an authentication exchange.
    pub fn mm_authenticate_req(
        &mut self,
        link: LinkId,
        param: MmAuthenticateParam,
    ) -> Result<MmId, NwkError> {
        let msg = MmAuthenticationRequestMsg {
            auth_type: param.auth_type,
            rand: param.rand,
            res: param.res,
            rs: param.rs,
            cipher_info: param.cipher_info,
            ..Default::default()
        };
        self.mm_open_transaction(
            link,
            MmExchange::Authenticate,
            MmMsgType::AuthenticationRequest,
            &msg,
        )
    }

    /// Answers an authentication request with a reply or a reject.
    pub fn mm_authenticate_res(
        &mut self,
        mm: MmId,
        accept: bool,
        param: MmAuthenticateParam,
    ) -> Result<(), NwkError> {
        let (link, transaction) = self.mm_route(mm)?;
        let result = if accept {
            let msg = MmAuthenticationReplyMsg {
                res: param.res,
                rs: param.rs,
                ..Default::default()
            };
            self.mm_send(link, transaction, MmMsgType::AuthenticationReply, &msg)
        } else {
            let msg = MmAuthenticationRejectMsg {
                reject_reason: param.reject_reason,
                ..Default::default()
            };
            self.mm_send(link, transaction, MmMsgType::AuthenticationReject, &msg)
        };
        self.mm_destroy(mm, DdlRelease::Partial);
        result
    }

    /// FP: starts user authentication key allocation. The PP continues
    /// the exchange with an authentication request on the same
    /// transaction.
    pub fn mm_key_allocate_req(
        &mut self,
        link: LinkId,
        param: MmKeyAllocateParam,
    ) -> Result<MmId, NwkError> {
        let msg = MmKeyAllocateMsg {
            allocation_type: param.allocation_type,
            rand: param.rand,
            rs: param.rs,
            ..Default::default()
        };
        self.mm_open_transaction(link, MmExchange::KeyAllocate, MmMsgType::KeyAllocate, &msg)
    }

    /// PP: answers a key allocation with the authentication request
    /// carrying its RAND and RES.
    pub fn mm_key_allocate_res(
        &mut self,
        mm: MmId,
        param: MmAuthenticateParam,
    ) -> Result<(), NwkError> {
        let (link, transaction) = self.mm_route(mm)?;
        let msg = MmAuthenticationRequestMsg {
            auth_type: param.auth_type,
            rand: param.rand,
            res: param.res,
            cipher_info: param.cipher_info,
            ..Default::default()
        };
        let result = self.mm_send(link, transaction, MmMsgType::AuthenticationRequest, &msg);
        if let Some(t) = self.mm_transactions.get_mut(&mm) {
            t.exchange = MmExchange::Authenticate;
        }
        result
    }

    /// Starts a cipher exchange: CIPHER-REQUEST from the FP,
    /// CIPHER-SUGGEST from the PP.
    pub fn mm_cipher_req(&mut self, link: LinkId, param: MmCipherParam) -> Result<MmId, NwkError> {
        match self.mode {
            Mode::Fp => {
                let msg = MmCipherRequestMsg {
                    cipher_info: param.cipher_info,
                    call_identity: param.call_identity,
                    connection_identity: param.connection_identity,
                    iwu_to_iwu: param.iwu_to_iwu,
                    ..Default::default()
                };
                self.mm_open_transaction(link, MmExchange::Cipher, MmMsgType::CipherRequest, &msg)
            }
            Mode::Pp => {
                let msg = MmCipherSuggestMsg {
                    cipher_info: param.cipher_info,
                    call_identity: param.call_identity,
                    connection_identity: param.connection_identity,
                    iwu_to_iwu: param.iwu_to_iwu,
                    ..Default::default()
                };
                self.mm_open_transaction(link, MmExchange::Cipher, MmMsgType::CipherSuggest, &msg)
            }
        }
    }

    /// Answers a cipher exchange. Acceptance is signalled below the NWK
    /// layer; only a rejection produces wire traffic.
    pub fn mm_cipher_res(
        &mut self,
        mm: MmId,
        accept: bool,
        param: MmCipherParam,
    ) -> Result<(), NwkError> {
        let (link, transaction) = self.mm_route(mm)?;
        let result = if accept {
            Ok(())
        } else {
            let msg = MmCipherRejectMsg {
                reject_reason: param.reject_reason,
                iwu_to_iwu: param.iwu_to_iwu,
                ..Default::default()
            };
            self.mm_send(link, transaction, MmMsgType::CipherReject, &msg)
        };
        self.mm_destroy(mm, DdlRelease::Partial);
        result
    }

    /// Requests (PP) or suggests (FP) MM parameters.
    pub fn mm_info_req(&mut self, link: LinkId, param: MmInfoParam) -> Result<MmId, NwkError> {
        match self.mode {
            Mode::Pp => {
                let msg = MmInfoRequestMsg {
                    info_type: param.info_type,
                    call_identity: param.call_identity,
                    portable_identity: param.portable_identity,
                    fixed_identity: param.fixed_identity,
                    location_area: param.location_area,
                    nwk_assigned_identity: param.nwk_assigned_identity,
                    network_parameter: param.network_parameter,
                    iwu_to_iwu: param.iwu_to_iwu,
                    ..Default::default()
                };
                self.mm_open_transaction(link, MmExchange::Info, MmMsgType::InfoRequest, &msg)
            }
            Mode::Fp => {
                let msg = MmInfoSuggestMsg {
                    info_type: param.info_type,
                    fixed_identity: param.fixed_identity,
                    location_area: param.location_area,
                    nwk_assigned_identity: param.nwk_assigned_identity,
                    network_parameter: param.network_parameter,
                    duration: param.duration,
                    iwu_to_iwu: param.iwu_to_iwu,
                    ..Default::default()
                };
                let mm =
                    self.mm_open_transaction(link, MmExchange::Info, MmMsgType::InfoSuggest, &msg)?;
                // A suggest has no reply.
                self.mm_destroy(mm, DdlRelease::Partial);
                Ok(mm)
            }
        }
    }

    /// FP: answers an info request.
    pub fn mm_info_res(
        &mut self,
        mm: MmId,
        accept: bool,
        param: MmInfoParam,
    ) -> Result<(), NwkError> {
        let (link, transaction) = self.mm_route(mm)?;
        let result = if accept {
            let msg = MmInfoAcceptMsg {
                info_type: param.info_type,
                call_identity: param.call_identity,
                fixed_identity: param.fixed_identity,
                location_area: param.location_area,
                nwk_assigned_identity: param.nwk_assigned_identity,
                network_parameter: param.network_parameter,
                duration: param.duration,
                iwu_to_iwu: param.iwu_to_iwu,
                ..Default::default()
            };
            self.mm_send(link, transaction, MmMsgType::InfoAccept, &msg)
        } else {
            let msg = MmInfoRejectMsg {
                call_identity: param.call_identity,
                reject_reason: param.reject_reason,
                iwu_to_iwu: param.iwu_to_iwu,
                ..Default::default()
            };
            self.mm_send(link, transaction, MmMsgType::InfoReject, &msg)
        };
        self.mm_destroy(mm, DdlRelease::Partial);
        result
    }

    // Inbound path

    pub(crate) fn mm_receive(
        &mut self,
        link: LinkId,
        hdr: FrameHeader,
        body: &[u8],
        events: &mut Vec<NwkEvent>,
    ) -> Result<(), NwkError> {
        let msg_type = MmMsgType::from(hdr.msg_type);
        let owner = self.link_mut(link)?.mm.get(hdr.ti, hdr.local_role());
        match owner {
            Some(TransactionOwner::Mm(id)) => {
                self.mm_rcv(id, msg_type, body, events);
            }
            Some(other) => {
                warn!(?other, "MM frame for foreign transaction owner, dropping");
            }
            None => self.mm_open(link, hdr, msg_type, body, events),
        }
        Ok(())
    }

    fn mm_rcv(&mut self, id: MmId, msg_type: MmMsgType, body: &[u8], events: &mut Vec<NwkEvent>) {
        debug!(mm = id.0, ?msg_type, "receive");
        match msg_type {
            MmMsgType::AccessRightsAccept => {
                let Ok(msg) = MmAccessRightsAcceptMsg::parse(self.mode, body) else {
                    return self.mm_drop(id, msg_type);
                };
                events.push(NwkEvent::Mm(MmEvent::AccessRightsCfm {
                    mm: id,
                    accept: true,
                    param: MmAccessRightsParam {
                        portable_identity: msg.portable_identity,
                        fixed_identity: msg.fixed_identity,
                        location_area: msg.location_area,
                        auth_type: msg.auth_type,
                        cipher_info: msg.cipher_info,
                        setup_capability: msg.setup_capability,
                        model_identifier: msg.model_identifier,
                        iwu_to_iwu: msg.iwu_to_iwu,
                        codec_list: msg.codec_list,
                        ..Default::default()
                    },
                }));
                self.mm_destroy(id, DdlRelease::Partial);
            }
            MmMsgType::AccessRightsReject => {
                let Ok(msg) = MmAccessRightsRejectMsg::parse(self.mode, body) else {
                    return self.mm_drop(id, msg_type);
                };
                events.push(NwkEvent::Mm(MmEvent::AccessRightsCfm {
                    mm: id,
                    accept: false,
                    param: MmAccessRightsParam {
                        reject_reason: msg.reject_reason,
                        duration: msg.duration,
                        ..Default::default()
                    },
                }));
                self.mm_destroy(id, DdlRelease::Partial);
            }
            MmMsgType::LocateAccept => {
                let Ok(msg) = MmLocateAcceptMsg::parse(self.mode, body) else {
                    return self.mm_drop(id, msg_type);
                };
                events.push(NwkEvent::Mm(MmEvent::LocateCfm {
                    mm: id,
                    accept: true,
                    param: MmLocateParam {
                        portable_identity: msg.portable_identity,
                        location_area: msg.location_area,
                        use_tpui: msg.use_tpui,
                        nwk_assigned_identity: msg.nwk_assigned_identity,
                        setup_capability: msg.setup_capability,
                        duration: msg.duration,
                        iwu_to_iwu: msg.iwu_to_iwu,
                        model_identifier: msg.model_identifier,
                        codec_list: msg.codec_list,
                        ..Default::default()
                    },
                }));
                self.mm_destroy(id, DdlRelease::Partial);
            }
            MmMsgType::LocateReject => {
                let Ok(msg) = MmLocateRejectMsg::parse(self.mode, body) else {
                    return self.mm_drop(id, msg_type);
                };
                events.push(NwkEvent::Mm(MmEvent::LocateCfm {
                    mm: id,
                    accept: false,
                    param: MmLocateParam {
                        reject_reason: msg.reject_reason.or(Some(RejectReason::Unknown)),
                        duration: msg.duration,
                        iwu_to_iwu: msg.iwu_to_iwu,
                        ..Default::default()
                    },
                }));
                self.mm_destroy(id, DdlRelease::Partial);
            }
            MmMsgType::TemporaryIdentityAssignAck => {
                let Ok(_msg) = MmTemporaryIdentityAssignAckMsg::parse(self.mode, body) else {
                    return self.mm_drop(id, msg_type);
                };
                events.push(NwkEvent::Mm(MmEvent::IdentityAssignCfm {
                    mm: id,
                    accept: true,
                    param: MmIdentityAssignParam::default(),
                }));
                self.mm_destroy(id, DdlRelease::Partial);
            }
            MmMsgType::TemporaryIdentityAssignRej => {
                let Ok(msg) = MmTemporaryIdentityAssignRejMsg::parse(self.mode, body) else {
                    return self.mm_drop(id, msg_type);
                };
                events.push(NwkEvent::Mm(MmEvent::IdentityAssignCfm {
                    mm: id,
                    accept: false,
                    param: MmIdentityAssignParam {
                        reject_reason: msg.reject_reason,
                        ..Default::default()
                    },
                }));
                self.mm_destroy(id, DdlRelease::Partial);
            }
            MmMsgType::AuthenticationRequest => {
                // Continuation of a key allocation on the same transaction.
                if self
                    .mm_transactions
                    .get(&id)
                    .map(|t| t.exchange)
                    != Some(MmExchange::KeyAllocate)
                {
                    return self.mm_drop(id, msg_type);
                }
                let Ok(msg) = MmAuthenticationRequestMsg::parse(self.mode, body) else {
                    return self.mm_drop(id, msg_type);
                };
                if let Some(t) = self.mm_transactions.get_mut(&id) {
                    t.exchange = MmExchange::Authenticate;
                }
                events.push(NwkEvent::Mm(MmEvent::AuthenticateInd {
                    mm: id,
                    param: MmAuthenticateParam {
                        auth_type: msg.auth_type,
                        rand: msg.rand,
                        res: msg.res,
                        rs: msg.rs,
                        cipher_info: msg.cipher_info,
                        ..Default::default()
                    },
                }));
            }
            MmMsgType::AuthenticationReply => {
                let Ok(msg) = MmAuthenticationReplyMsg::parse(self.mode, body) else {
                    return self.mm_drop(id, msg_type);
                };
                events.push(NwkEvent::Mm(MmEvent::AuthenticateCfm {
                    mm: id,
                    accept: true,
                    param: MmAuthenticateParam {
                        res: msg.res,
                        rs: msg.rs,
                        ..Default::default()
                    },
                }));
                self.mm_destroy(id, DdlRelease::Partial);
            }
            MmMsgType::AuthenticationReject => {
                let Ok(msg) = MmAuthenticationRejectMsg::parse(self.mode, body) else {
                    return self.mm_drop(id, msg_type);
                };
                events.push(NwkEvent::Mm(MmEvent::AuthenticateCfm {
                    mm: id,
                    accept: false,
                    param: MmAuthenticateParam {
                        reject_reason: msg.reject_reason,
                        ..Default::default()
                    },
                }));
                self.mm_destroy(id, DdlRelease::Partial);
            }
            MmMsgType::CipherReject => {
                let Ok(msg) = MmCipherRejectMsg::parse(self.mode, body) else {
                    return self.mm_drop(id, msg_type);
                };
                events.push(NwkEvent::Mm(MmEvent::CipherCfm {
                    mm: id,
                    accept: false,
                    param: MmCipherParam {
                        reject_reason: msg.reject_reason,
                        iwu_to_iwu: msg.iwu_to_iwu,
                        ..Default::default()
                    },
                }));
                self.mm_destroy(id, DdlRelease::Partial);
            }
            MmMsgType::InfoAccept => {
                let Ok(msg) = MmInfoAcceptMsg::parse(self.mode, body) else {
                    return self.mm_drop(id, msg_type);
                };
                events.push(NwkEvent::Mm(MmEvent::InfoCfm {
                    mm: id,
                    accept: true,
                    param: MmInfoParam {
                        info_type: msg.info_type,
                        call_identity: msg.call_identity,
                        fixed_identity: msg.fixed_identity,
                        location_area: msg.location_area,
                        nwk_assigned_identity: msg.nwk_assigned_identity,
                        network_parameter: msg.network_parameter,
                        duration: msg.duration,
                        iwu_to_iwu: msg.iwu_to_iwu,
                        ..Default::default()
                    },
                }));
                self.mm_destroy(id, DdlRelease::Partial);
            }
            MmMsgType::InfoReject => {
                let Ok(msg) = MmInfoRejectMsg::parse(self.mode, body) else {
                    return self.mm_drop(id, msg_type);
                };
                events.push(NwkEvent::Mm(MmEvent::InfoCfm {
                    mm: id,
                    accept: false,
                    param: MmInfoParam {
                        call_identity: msg.call_identity,
                        reject_reason: msg.reject_reason,
                        iwu_to_iwu: msg.iwu_to_iwu,
                        ..Default::default()
                    },
                }));
                self.mm_destroy(id, DdlRelease::Partial);
            }
            _ => self.mm_drop(id, msg_type),
        }
    }

    fn mm_drop(&mut self, id: MmId, msg_type: MmMsgType) {
        // Unknown and out-of-sequence messages are logged and dropped.
        debug!(mm = id.0, ?msg_type, "MM message dropped");
    }

    fn mm_open(
        &mut self,
        link: LinkId,
        hdr: FrameHeader,
        msg_type: MmMsgType,
        body: &[u8],
        events: &mut Vec<NwkEvent>,
    ) {
        debug!(ti = hdr.ti, ?msg_type, "MM message for unknown transaction");
        if hdr.from_responder {
            return;
        }
        match msg_type {
            MmMsgType::AccessRightsRequest => {
                let Ok(msg) = MmAccessRightsRequestMsg::parse(self.mode, body) else {
                    return;
                };
                let id = self.mm_confirm(link, hdr.ti, MmExchange::AccessRights);
                events.push(NwkEvent::Mm(MmEvent::AccessRightsInd {
                    mm: id,
                    param: MmAccessRightsParam {
                        portable_identity: msg.portable_identity,
                        auth_type: msg.auth_type,
                        cipher_info: msg.cipher_info,
                        setup_capability: msg.setup_capability,
                        terminal_capability: msg.terminal_capability,
                        model_identifier: msg.model_identifier,
                        iwu_to_iwu: msg.iwu_to_iwu,
                        codec_list: msg.codec_list,
                        ..Default::default()
                    },
                }));
            }
            MmMsgType::LocateRequest => {
                let Ok(msg) = MmLocateRequestMsg::parse(self.mode, body) else {
                    return;
                };
                let id = self.mm_confirm(link, hdr.ti, MmExchange::Locate);
                events.push(NwkEvent::Mm(MmEvent::LocateInd {
                    mm: id,
                    param: MmLocateParam {
                        portable_identity: msg.portable_identity,
                        fixed_identity: msg.fixed_identity,
                        location_area: msg.location_area,
                        nwk_assigned_identity: msg.nwk_assigned_identity,
                        cipher_info: msg.cipher_info,
                        setup_capability: msg.setup_capability,
                        terminal_capability: msg.terminal_capability,
                        network_parameter: msg.network_parameter,
                        iwu_to_iwu: msg.iwu_to_iwu,
                        model_identifier: msg.model_identifier,
                        codec_list: msg.codec_list,
                        ..Default::default()
                    },
                }));
            }
            MmMsgType::TemporaryIdentityAssign => {
                let Ok(msg) = MmTemporaryIdentityAssignMsg::parse(self.mode, body) else {
                    return;
                };
                let id = self.mm_confirm(link, hdr.ti, MmExchange::IdentityAssign);
                events.push(NwkEvent::Mm(MmEvent::IdentityAssignInd {
                    mm: id,
                    param: MmIdentityAssignParam {
                        portable_identity: msg.portable_identity,
                        location_area: msg.location_area,
                        nwk_assigned_identity: msg.nwk_assigned_identity,
                        duration: msg.duration,
                        network_parameter: msg.network_parameter,
                        ..Default::default()
                    },
                }));
            }
            MmMsgType::AuthenticationRequest => {
                let Ok(msg) = MmAuthenticationRequestMsg::parse(self.mode, body) else {
                    return;
                };
                let id = self.mm_confirm(link, hdr.ti, MmExchange::Authenticate);
                events.push(NwkEvent::Mm(MmEvent::AuthenticateInd {
                    mm: id,
                    param: MmAuthenticateParam {
                        auth_type: msg.auth_type,
                        rand: msg.rand,
                        res: msg.res,
                        rs: msg.rs,
                        cipher_info: msg.cipher_info,
                        ..Default::default()
                    },
                }));
            }
            MmMsgType::KeyAllocate => {
                let Ok(msg) = MmKeyAllocateMsg::parse(self.mode, body) else {
                    return;
                };
                let id = self.mm_confirm(link, hdr.ti, MmExchange::KeyAllocate);
                events.push(NwkEvent::Mm(MmEvent::KeyAllocateInd {
                    mm: id,
                    param: MmKeyAllocateParam {
                        allocation_type: msg.allocation_type,
                        rand: msg.rand,
                        rs: msg.rs,
                    },
                }));
            }
            MmMsgType::CipherRequest => {
                let Ok(msg) = MmCipherRequestMsg::parse(self.mode, body) else {
                    return;
                };
                let id = self.mm_confirm(link, hdr.ti, MmExchange::Cipher);
                events.push(NwkEvent::Mm(MmEvent::CipherInd {
                    mm: id,
                    param: MmCipherParam {
                        cipher_info: msg.cipher_info,
                        call_identity: msg.call_identity,
                        connection_identity: msg.connection_identity,
                        iwu_to_iwu: msg.iwu_to_iwu,
                        ..Default::default()
                    },
                }));
            }
            MmMsgType::CipherSuggest => {
                let Ok(msg) = MmCipherSuggestMsg::parse(self.mode, body) else {
                    return;
                };
                let id = self.mm_confirm(link, hdr.ti, MmExchange::Cipher);
                events.push(NwkEvent::Mm(MmEvent::CipherInd {
                    mm: id,
                    param: MmCipherParam {
                        cipher_info: msg.cipher_info,
                        call_identity: msg.call_identity,
                        connection_identity: msg.connection_identity,
                        iwu_to_iwu: msg.iwu_to_iwu,
                        ..Default::default()
                    },
                }));
            }
            MmMsgType::InfoRequest => {
                let Ok(msg) = MmInfoRequestMsg::parse(self.mode, body) else {
                    return;
                };
                let id = self.mm_confirm(link, hdr.ti, MmExchange::Info);
                events.push(NwkEvent::Mm(MmEvent::InfoInd {
                    mm: id,
                    param: MmInfoParam {
                        info_type: msg.info_type,
                        call_identity: msg.call_identity,
                        portable_identity: msg.portable_identity,
                        fixed_identity: msg.fixed_identity,
                        location_area: msg.location_area,
                        nwk_assigned_identity: msg.nwk_assigned_identity,
                        network_parameter: msg.network_parameter,
                        iwu_to_iwu: msg.iwu_to_iwu,
                        ..Default::default()
                    },
                }));
            }
            MmMsgType::InfoSuggest => {
                let Ok(msg) = MmInfoSuggestMsg::parse(self.mode, body) else {
                    return;
                };
                let id = self.mm_confirm(link, hdr.ti, MmExchange::Info);
                events.push(NwkEvent::Mm(MmEvent::InfoInd {
                    mm: id,
                    param: MmInfoParam {
                        info_type: msg.info_type,
                        fixed_identity: msg.fixed_identity,
                        location_area: msg.location_area,
                        nwk_assigned_identity: msg.nwk_assigned_identity,
                        network_parameter: msg.network_parameter,
                        duration: msg.duration,
                        iwu_to_iwu: msg.iwu_to_iwu,
                        ..Default::default()
                    },
                }));
                // A suggest has no reply.
                self.mm_destroy(id, DdlRelease::Partial);
            }
            _ => {
                debug!(?msg_type, "message cannot open an MM transaction, dropping");
            }
        }
    }

    pub(crate) fn mm_shutdown(&mut self, id: MmId, _events: &mut Vec<NwkEvent>) {
        debug!(mm = id.0, "shutdown");
        self.mm_transactions.remove(&id);
    }

    // Internals

    fn mm_route(&self, id: MmId) -> Result<(LinkId, Transaction), NwkError> {
        let t = self
            .mm_transactions
            .get(&id)
            .ok_or(NwkError::UnknownMmTransaction)?;
        Ok((t.link, t.transaction))
    }

    fn mm_open_transaction<M: SFormatMessage>(
        &mut self,
        link: LinkId,
        exchange: MmExchange,
        msg_type: MmMsgType,
        msg: &M,
    ) -> Result<MmId, NwkError> {
        let id = self.new_mm_id();
        let ti = self
            .link_mut(link)?
            .mm
            .allocate(Pd::Mm, TransactionOwner::Mm(id))?;
        let transaction = Transaction::new(Pd::Mm, ti, Role::Initiator);

        if let Err(e) = self.mm_send(link, transaction, msg_type, msg) {
            self.link_mut(link)?.mm.remove(ti, Role::Initiator);
            return Err(e);
        }
        self.mm_transactions.insert(
            id,
            MmTransaction {
                link,
                transaction,
                exchange,
            },
        );
        debug!(mm = id.0, ?exchange, "transaction opened");
        Ok(id)
    }

    fn mm_confirm(&mut self, link: LinkId, ti: u8, exchange: MmExchange) -> MmId {
        let id = self.new_mm_id();
        let transaction = Transaction::new(Pd::Mm, ti, Role::Responder);
        if let Ok(l) = self.link_mut(link) {
            l.mm.confirm(ti, TransactionOwner::Mm(id));
        }
        self.mm_transactions.insert(
            id,
            MmTransaction {
                link,
                transaction,
                exchange,
            },
        );
        debug!(mm = id.0, ?exchange, "transaction confirmed");
        id
    }

    fn mm_send<M: SFormatMessage>(
        &mut self,
        link: LinkId,
        transaction: Transaction,
        msg_type: MmMsgType,
        msg: &M,
    ) -> Result<(), NwkError> {
        let body = msg.build(self.mode)?;
        let mut frame = Vec::with_capacity(2 + body.len());
        frame.extend_from_slice(&transaction.frame_header(msg_type as u8));
        frame.extend_from_slice(&body);
        self.link_mut(link)?.transport.send_frame(&frame)?;
        Ok(())
    }

    fn mm_destroy(&mut self, id: MmId, release: DdlRelease) {
        if let Some(t) = self.mm_transactions.remove(&id) {
            if let Ok(l) = self.link_mut(t.link) {
                l.mm.remove(t.transaction.ti, t.transaction.role);
            }
            debug!(mm = id.0, ?release, "transaction closed");
        }
    }
}
