//! Call Control (CC) protocol entity.
//!
//! One state machine per call, one call per transaction. Application
//! primitives follow the MNCC naming of the DECT C-plane service
//! boundary; indications come back as [`CcEvent`]s.

use crate::error::{NwkError, SfmtError};
use crate::handle::{DectHandle, LinkId, NwkEvent, TimerOwner};
use crate::identity::Ipui;
use crate::ie::basic_service::BasicService;
use crate::ie::called_party_number::CalledPartyNumber;
use crate::ie::calling_party_name::CallingPartyName;
use crate::ie::calling_party_number::CallingPartyNumber;
use crate::ie::cipher_info::CipherInfo;
use crate::ie::codec_list::CodecList;
use crate::ie::display::Display;
use crate::ie::escape_to_proprietary::EscapeToProprietary;
use crate::ie::facility::Facility;
use crate::ie::feature_activate::FeatureActivate;
use crate::ie::feature_indicate::FeatureIndicate;
use crate::ie::fixed_identity::FixedIdentity;
use crate::ie::identity_type::IdentityType;
use crate::ie::iwu_to_iwu::IwuToIwu;
use crate::ie::keypad::Keypad;
use crate::ie::location_area::LocationArea;
use crate::ie::network_parameter::NetworkParameter;
use crate::ie::portable_identity::PortableIdentity;
use crate::ie::progress_indicator::ProgressIndicator;
use crate::ie::release_reason::ReleaseReason;
use crate::ie::service_change_info::ServiceChangeInfo;
use crate::ie::signal::Signal;
use crate::ie::terminal_capability::TerminalCapability;
use crate::ie::value::{IeList, IeValue, SendingComplete};
use crate::message::cc_alerting::CcAlertingMsg;
use crate::message::cc_call_proc::CcCallProcMsg;
use crate::message::cc_connect::CcConnectMsg;
use crate::message::cc_connect_ack::CcConnectAckMsg;
use crate::message::cc_info::CcInfoMsg;
use crate::message::cc_iwu_info::CcIwuInfoMsg;
use crate::message::cc_notify::CcNotifyMsg;
use crate::message::cc_release::CcReleaseMsg;
use crate::message::cc_release_com::CcReleaseComMsg;
use crate::message::cc_service_accept::CcServiceAcceptMsg;
use crate::message::cc_service_change::CcServiceChangeMsg;
use crate::message::cc_service_reject::CcServiceRejectMsg;
use crate::message::cc_setup::CcSetupMsg;
use crate::message::cc_setup_ack::CcSetupAckMsg;
use crate::message::{CcMsgType, SFormatMessage};
use crate::transaction::{DdlRelease, FrameHeader, Pd, Role, Transaction, TransactionOwner};
use crate::transport::UPlane;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// Default setup supervision timeout (<CC.03>).
pub const CC_SETUP_TIMEOUT: Duration = Duration::from_secs(20);

const U_PLANE_MTU: usize = 1024;

/// Identifies one call within a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallId(pub u64);

/// CC call states per EN 300 175-5 section 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallState {
    Null,
    CallInitiated,
    OverlapSending,
    CallProceeding,
    CallDelivered,
    CallPresent,
    CallReceived,
    ConnectPending,
    Active,
    ReleasePending,
    OverlapReceiving,
    IncomingCallProceeding,
    Released,
}

impl fmt::Display for CallState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CallState::Null => "NULL",
            CallState::CallInitiated => "CALL INITIATED",
            CallState::OverlapSending => "OVERLAP SENDING",
            CallState::CallProceeding => "CALL PROCEEDING",
            CallState::CallDelivered => "CALL DELIVERED",
            CallState::CallPresent => "CALL PRESENT",
            CallState::CallReceived => "CALL RECEIVED",
            CallState::ConnectPending => "CONNECT PENDING",
            CallState::Active => "ACTIVE",
            CallState::ReleasePending => "RELEASE PENDING",
            CallState::OverlapReceiving => "OVERLAP RECEIVING",
            CallState::IncomingCallProceeding => "INCOMING CALL PROCEEDING",
            CallState::Released => "RELEASED",
        };
        f.write_str(s)
    }
}

/// One call instance, owning its transaction, supervision timer and the
/// companion U-plane socket.
pub(crate) struct Call {
    pub link: LinkId,
    pub transaction: Transaction,
    pub state: CallState,
    pub setup_timer: Option<crate::transport::TimerToken>,
    pub pt_id: Option<PortableIdentity>,
    pub ft_id: Option<FixedIdentity>,
    pub u_plane: Option<Box<dyn UPlane>>,
}

/// MNCC_SETUP parameters, shared by request and indication.
#[derive(Debug, Clone, Default)]
pub struct MnccSetupParam {
    pub basic_service: Option<BasicService>,
    pub iwu_attributes: IeList<IeValue>,
    pub cipher_info: Option<CipherInfo>,
    pub facility: IeList<Facility>,
    pub progress_indicator: IeList<ProgressIndicator>,
    pub display: Option<Display>,
    pub keypad: Option<Keypad>,
    pub signal: Option<Signal>,
    pub feature_activate: Option<FeatureActivate>,
    pub feature_indicate: Option<FeatureIndicate>,
    pub network_parameter: Option<NetworkParameter>,
    pub terminal_capability: Option<TerminalCapability>,
    pub end_to_end_compatibility: Option<IeValue>,
    pub rate_parameters: Option<IeValue>,
    pub transit_delay: Option<IeValue>,
    pub window_size: Option<IeValue>,
    pub calling_party_number: Option<CallingPartyNumber>,
    pub called_party_number: Option<CalledPartyNumber>,
    pub called_party_subaddress: Option<IeValue>,
    pub calling_party_name: Option<CallingPartyName>,
    pub sending_complete: Option<SendingComplete>,
    pub iwu_to_iwu: Option<IwuToIwu>,
    pub iwu_packet: Option<IeValue>,
}

/// MNCC_SETUP_ACK parameters.
#[derive(Debug, Clone, Default)]
pub struct MnccSetupAckParam {
    pub info_type: Option<crate::ie::info_type::InfoType>,
    pub location_area: Option<LocationArea>,
    pub display: Option<Display>,
    pub signal: Option<Signal>,
    pub feature_indicate: Option<FeatureIndicate>,
    pub transit_delay: Option<IeValue>,
    pub window_size: Option<IeValue>,
    pub delimiter_request: Option<crate::ie::value::DelimiterRequest>,
    pub iwu_to_iwu: IeList<IwuToIwu>,
    pub iwu_packet: Option<IeValue>,
}

/// MNCC_CALL_PROC parameters.
#[derive(Debug, Clone, Default)]
pub struct MnccCallProcParam {
    pub facility: IeList<Facility>,
    pub progress_indicator: IeList<ProgressIndicator>,
    pub display: Option<Display>,
    pub signal: Option<Signal>,
    pub feature_indicate: Option<FeatureIndicate>,
    pub transit_delay: Option<IeValue>,
    pub window_size: Option<IeValue>,
    pub iwu_to_iwu: IeList<IwuToIwu>,
    pub iwu_packet: Option<IeValue>,
}

/// MNCC_ALERT parameters.
#[derive(Debug, Clone, Default)]
pub struct MnccAlertParam {
    pub facility: IeList<Facility>,
    pub progress_indicator: IeList<ProgressIndicator>,
    pub display: Option<Display>,
    pub signal: Option<Signal>,
    pub feature_indicate: Option<FeatureIndicate>,
    pub terminal_capability: Option<TerminalCapability>,
    pub transit_delay: Option<IeValue>,
    pub window_size: Option<IeValue>,
    pub iwu_to_iwu: IeList<IwuToIwu>,
    pub iwu_packet: Option<IeValue>,
}

/// MNCC_CONNECT parameters, shared by request, response and indication.
#[derive(Debug, Clone, Default)]
pub struct MnccConnectParam {
    pub facility: IeList<Facility>,
    pub progress_indicator: IeList<ProgressIndicator>,
    pub display: Option<Display>,
    pub signal: Option<Signal>,
    pub feature_indicate: Option<FeatureIndicate>,
    pub terminal_capability: Option<TerminalCapability>,
    pub transit_delay: Option<IeValue>,
    pub window_size: Option<IeValue>,
    pub iwu_to_iwu: Option<IwuToIwu>,
    pub iwu_packet: Option<IeValue>,
}

/// MNCC_RELEASE parameters, shared by the release and reject primitives.
#[derive(Debug, Clone, Default)]
pub struct MnccReleaseParam {
    pub release_reason: Option<ReleaseReason>,
    pub identity_type: Option<IdentityType>,
    pub location_area: Option<LocationArea>,
    pub iwu_attributes: Option<IeValue>,
    pub facility: IeList<Facility>,
    pub display: Option<Display>,
    pub feature_indicate: Option<FeatureIndicate>,
    pub network_parameter: Option<NetworkParameter>,
    pub iwu_to_iwu: Option<IwuToIwu>,
    pub iwu_packet: Option<IeValue>,
}

/// MNCC_INFO parameters.
#[derive(Debug, Clone, Default)]
pub struct MnccInfoParam {
    pub location_area: Option<LocationArea>,
    pub nwk_assigned_identity: Option<IeValue>,
    pub facility: IeList<Facility>,
    pub progress_indicator: IeList<ProgressIndicator>,
    pub display: Option<Display>,
    pub keypad: Option<Keypad>,
    pub signal: Option<Signal>,
    pub feature_activate: Option<FeatureActivate>,
    pub feature_indicate: Option<FeatureIndicate>,
    pub network_parameter: Option<NetworkParameter>,
    pub called_party_number: Option<CalledPartyNumber>,
    pub called_party_subaddress: Option<IeValue>,
    pub calling_party_number: Option<CallingPartyNumber>,
    pub calling_party_name: Option<CallingPartyName>,
    pub sending_complete: Option<SendingComplete>,
    pub iwu_to_iwu: IeList<IwuToIwu>,
    pub iwu_packet: Option<IeValue>,
}

/// MNCC_MODIFY parameters (service change).
#[derive(Debug, Clone, Default)]
pub struct MnccModifyParam {
    pub service_change_info: Option<ServiceChangeInfo>,
    pub iwu_attributes: Option<IeValue>,
    pub call_attributes: Option<IeValue>,
    pub connection_attributes: IeList<IeValue>,
    pub connection_identity: Option<IeValue>,
    pub iwu_to_iwu: Option<IwuToIwu>,
    pub codec_list: Option<CodecList>,
    pub escape_to_proprietary: Option<EscapeToProprietary>,
    pub release_reason: Option<ReleaseReason>,
}

/// Indications from the CC entity.
#[derive(Debug)]
pub enum CcEvent {
    SetupInd { call: CallId, param: MnccSetupParam },
    SetupAckInd { call: CallId, param: MnccSetupAckParam },
    CallProcInd { call: CallId, param: MnccCallProcParam },
    AlertInd { call: CallId, param: MnccAlertParam },
    ConnectInd { call: CallId, param: MnccConnectParam },
    ConnectCfm { call: CallId, param: MnccConnectParam },
    ReleaseInd { call: CallId, param: MnccReleaseParam },
    ReleaseCfm { call: CallId, param: MnccReleaseParam },
    RejectInd { call: CallId, param: MnccReleaseParam },
    InfoInd { call: CallId, param: MnccInfoParam },
    ModifyInd { call: CallId, param: MnccModifyParam },
    ModifyCfm { call: CallId, accept: bool, param: MnccModifyParam },
    UPlaneData { call: CallId, data: Vec<u8> },
}

fn release_com_from_param(param: MnccReleaseParam) -> CcReleaseComMsg {
    CcReleaseComMsg {
        release_reason: param.release_reason,
        identity_type: param.identity_type,
        location_area: param.location_area,
        iwu_attributes: param.iwu_attributes,
        facility: param.facility,
        display: param.display,
        feature_indicate: param.feature_indicate,
        network_parameter: param.network_parameter,
        iwu_to_iwu: param.iwu_to_iwu,
        iwu_packet: param.iwu_packet,
        ..Default::default()
    }
}

impl DectHandle {
    /// Originates a call towards the portable (or fixed) part reachable
    /// over `link`, addressed by `ipui`.
    pub fn mncc_setup_req(
        &mut self,
        link: LinkId,
        ipui: &Ipui,
        param: MnccSetupParam,
    ) -> Result<CallId, NwkError> {
        let id = self.new_call_id();
        let ti = self
            .link_mut(link)?
            .cc
            .allocate(Pd::Cc, TransactionOwner::Call(id))?;
        let transaction = Transaction::new(Pd::Cc, ti, Role::Initiator);

        let pt_id = PortableIdentity::Ipui(*ipui);
        let ft_id = FixedIdentity::park(self.pari);
        let msg = CcSetupMsg {
            portable_identity: Some(pt_id),
            fixed_identity: Some(ft_id),
            basic_service: param.basic_service,
            iwu_attributes: param.iwu_attributes,
            cipher_info: param.cipher_info,
            facility: param.facility,
            progress_indicator: param.progress_indicator,
            display: param.display,
            keypad: param.keypad,
            signal: param.signal,
            feature_activate: param.feature_activate,
            feature_indicate: param.feature_indicate,
            network_parameter: param.network_parameter,
            terminal_capability: param.terminal_capability,
            end_to_end_compatibility: param.end_to_end_compatibility,
            rate_parameters: param.rate_parameters,
            transit_delay: param.transit_delay,
            window_size: param.window_size,
            calling_party_number: param.calling_party_number,
            called_party_number: param.called_party_number,
            called_party_subaddress: param.called_party_subaddress,
            calling_party_name: param.calling_party_name,
            sending_complete: param.sending_complete,
            iwu_to_iwu: param.iwu_to_iwu,
            iwu_packet: param.iwu_packet,
            ..Default::default()
        };

        if let Err(e) = self.cc_send(link, transaction, CcMsgType::Setup, &msg) {
            self.link_mut(link)?.cc.remove(ti, Role::Initiator);
            return Err(e);
        }

        let timer = self.alloc_timer(TimerOwner::CallSetup(id));
        self.timer_service.start(timer, CC_SETUP_TIMEOUT);

        self.calls.insert(
            id,
            Call {
                link,
                transaction,
                state: CallState::CallPresent,
                setup_timer: Some(timer),
                pt_id: Some(pt_id),
                ft_id: Some(ft_id),
                u_plane: None,
            },
        );
        debug!(call = id.0, "setup request, state CALL PRESENT");
        Ok(id)
    }

    /// Acknowledges an inbound SETUP for overlap dialing.
    pub fn mncc_setup_ack_req(
        &mut self,
        call: CallId,
        param: MnccSetupAckParam,
    ) -> Result<(), NwkError> {
        let (link, transaction, pt_id, ft_id) = {
            let c = self.call(call)?;
            (c.link, c.transaction, c.pt_id, c.ft_id)
        };
        let msg = CcSetupAckMsg {
            info_type: param.info_type,
            portable_identity: pt_id,
            fixed_identity: ft_id,
            location_area: param.location_area,
            display: param.display,
            signal: param.signal,
            feature_indicate: param.feature_indicate,
            transit_delay: param.transit_delay,
            window_size: param.window_size,
            delimiter_request: param.delimiter_request,
            iwu_to_iwu: param.iwu_to_iwu,
            iwu_packet: param.iwu_packet,
            ..Default::default()
        };
        self.cc_send(link, transaction, CcMsgType::SetupAck, &msg)?;
        self.set_call_state(call, CallState::OverlapSending);
        Ok(())
    }

    pub fn mncc_call_proc_req(
        &mut self,
        call: CallId,
        param: MnccCallProcParam,
    ) -> Result<(), NwkError> {
        let (link, transaction) = self.call_route(call)?;
        let msg = CcCallProcMsg {
            facility: param.facility,
            progress_indicator: param.progress_indicator,
            display: param.display,
            signal: param.signal,
            feature_indicate: param.feature_indicate,
            transit_delay: param.transit_delay,
            window_size: param.window_size,
            iwu_to_iwu: param.iwu_to_iwu,
            iwu_packet: param.iwu_packet,
            ..Default::default()
        };
        self.cc_send(link, transaction, CcMsgType::CallProc, &msg)?;
        self.set_call_state(call, CallState::IncomingCallProceeding);
        Ok(())
    }

    pub fn mncc_alert_req(&mut self, call: CallId, param: MnccAlertParam) -> Result<(), NwkError> {
        let (link, transaction) = self.call_route(call)?;
        let msg = CcAlertingMsg {
            facility: param.facility,
            progress_indicator: param.progress_indicator,
            display: param.display,
            signal: param.signal,
            feature_indicate: param.feature_indicate,
            terminal_capability: param.terminal_capability,
            transit_delay: param.transit_delay,
            window_size: param.window_size,
            iwu_to_iwu: param.iwu_to_iwu,
            iwu_packet: param.iwu_packet,
            ..Default::default()
        };
        self.cc_send(link, transaction, CcMsgType::Alerting, &msg)?;
        self.set_call_state(call, CallState::CallReceived);
        Ok(())
    }

    /// Answers a call: sends CC-CONNECT and opens the U-plane.
    pub fn mncc_connect_req(
        &mut self,
        call: CallId,
        param: MnccConnectParam,
    ) -> Result<(), NwkError> {
        let (link, transaction) = self.call_route(call)?;
        let msg = CcConnectMsg {
            facility: param.facility,
            progress_indicator: param.progress_indicator,
            display: param.display,
            signal: param.signal,
            feature_indicate: param.feature_indicate,
            terminal_capability: param.terminal_capability,
            transit_delay: param.transit_delay,
            window_size: param.window_size,
            iwu_to_iwu: param.iwu_to_iwu,
            iwu_packet: param.iwu_packet,
            ..Default::default()
        };
        self.cc_send(link, transaction, CcMsgType::Connect, &msg)?;
        self.cc_connect_uplane(call);
        self.set_call_state(call, CallState::ConnectPending);
        Ok(())
    }

    /// Completes connect establishment: opens the U-plane and sends
    /// CC-CONNECT-ACK.
    pub fn mncc_connect_res(
        &mut self,
        call: CallId,
        param: MnccConnectParam,
    ) -> Result<(), NwkError> {
        let (link, transaction) = self.call_route(call)?;
        let msg = CcConnectAckMsg {
            display: param.display,
            feature_indicate: param.feature_indicate,
            iwu_packet: param.iwu_packet,
            ..Default::default()
        };
        self.cc_connect_uplane(call);
        if let Err(e) = self.cc_send(link, transaction, CcMsgType::ConnectAck, &msg) {
            self.cc_disconnect_uplane(call);
            return Err(e);
        }
        self.set_call_state(call, CallState::Active);
        Ok(())
    }

    /// Initiates call release.
    pub fn mncc_release_req(
        &mut self,
        call: CallId,
        param: MnccReleaseParam,
    ) -> Result<(), NwkError> {
        let (link, transaction) = self.call_route(call)?;
        let msg = CcReleaseMsg {
            release_reason: param.release_reason,
            facility: param.facility,
            display: param.display,
            feature_indicate: param.feature_indicate,
            iwu_to_iwu: param.iwu_to_iwu,
            iwu_packet: param.iwu_packet,
            ..Default::default()
        };
        self.cc_send(link, transaction, CcMsgType::Release, &msg)?;
        self.set_call_state(call, CallState::ReleasePending);
        Ok(())
    }

    /// Completes a peer-initiated release: sends CC-RELEASE-COM and
    /// destroys the call.
    pub fn mncc_release_res(
        &mut self,
        call: CallId,
        param: MnccReleaseParam,
    ) -> Result<(), NwkError> {
        let (link, transaction) = self.call_route(call)?;
        let msg = release_com_from_param(param);
        if let Err(e) = self.cc_send(link, transaction, CcMsgType::ReleaseCom, &msg) {
            debug!(call = call.0, error = %e, "release-com build failed");
        }
        self.cc_disconnect_uplane(call);
        self.cc_destroy_call(call, DdlRelease::Normal);
        Ok(())
    }

    /// Rejects a call with CC-RELEASE-COM and destroys it.
    pub fn mncc_reject_req(
        &mut self,
        call: CallId,
        param: MnccReleaseParam,
    ) -> Result<(), NwkError> {
        let (link, transaction) = self.call_route(call)?;
        let msg = release_com_from_param(param);
        if let Err(e) = self.cc_send(link, transaction, CcMsgType::ReleaseCom, &msg) {
            debug!(call = call.0, error = %e, "release-com build failed");
        }
        self.cc_destroy_call(call, DdlRelease::Normal);
        Ok(())
    }

    pub fn mncc_info_req(&mut self, call: CallId, param: MnccInfoParam) -> Result<(), NwkError> {
        let (link, transaction) = self.call_route(call)?;
        let msg = CcInfoMsg {
            location_area: param.location_area,
            nwk_assigned_identity: param.nwk_assigned_identity,
            facility: param.facility,
            progress_indicator: param.progress_indicator,
            display: param.display,
            keypad: param.keypad,
            signal: param.signal,
            feature_activate: param.feature_activate,
            feature_indicate: param.feature_indicate,
            network_parameter: param.network_parameter,
            calling_party_number: param.calling_party_number,
            called_party_number: param.called_party_number,
            called_party_subaddress: param.called_party_subaddress,
            calling_party_name: param.calling_party_name,
            sending_complete: param.sending_complete,
            iwu_to_iwu: param.iwu_to_iwu,
            iwu_packet: param.iwu_packet,
            ..Default::default()
        };
        self.cc_send(link, transaction, CcMsgType::Info, &msg)
    }

    /// Requests a service change (CC-SERVICE-CHANGE).
    pub fn mncc_modify_req(
        &mut self,
        call: CallId,
        param: MnccModifyParam,
    ) -> Result<(), NwkError> {
        let (link, transaction, pt_id) = {
            let c = self.call(call)?;
            (c.link, c.transaction, c.pt_id)
        };
        let msg = CcServiceChangeMsg {
            portable_identity: pt_id,
            iwu_attributes: param.iwu_attributes,
            service_change_info: param.service_change_info,
            call_attributes: param.call_attributes,
            connection_attributes: param.connection_attributes,
            connection_identity: param.connection_identity,
            iwu_to_iwu: param.iwu_to_iwu,
            codec_list: param.codec_list,
            escape_to_proprietary: param.escape_to_proprietary,
            ..Default::default()
        };
        self.cc_send(link, transaction, CcMsgType::ServiceChange, &msg)
    }

    /// Answers a peer's service change request.
    pub fn mncc_modify_res(
        &mut self,
        call: CallId,
        accept: bool,
        param: MnccModifyParam,
    ) -> Result<(), NwkError> {
        let (link, transaction) = self.call_route(call)?;
        if accept {
            let msg = CcServiceAcceptMsg {
                iwu_attributes: param.iwu_attributes,
                connection_identity: param.connection_identity,
                iwu_to_iwu: param.iwu_to_iwu,
                escape_to_proprietary: param.escape_to_proprietary,
                ..Default::default()
            };
            self.cc_send(link, transaction, CcMsgType::ServiceAccept, &msg)
        } else {
            let msg = CcServiceRejectMsg {
                release_reason: param.release_reason,
                iwu_attributes: param.iwu_attributes,
                iwu_to_iwu: param.iwu_to_iwu,
                escape_to_proprietary: param.escape_to_proprietary,
                ..Default::default()
            };
            self.cc_send(link, transaction, CcMsgType::ServiceReject, &msg)
        }
    }

    pub fn mncc_iwu_info_req(&mut self, call: CallId) -> Result<(), NwkError> {
        let (link, transaction) = self.call_route(call)?;
        self.cc_send(link, transaction, CcMsgType::IwuInfo, &CcIwuInfoMsg)
    }

    /// Not carried on the wire at this profile level.
    pub fn mncc_facility_req(&mut self, call: CallId) -> Result<(), NwkError> {
        self.call(call)?;
        debug!(call = call.0, "facility request ignored");
        Ok(())
    }

    /// Not carried on the wire at this profile level.
    pub fn mncc_hold_req(&mut self, call: CallId) -> Result<(), NwkError> {
        self.call(call)?;
        debug!(call = call.0, "hold request ignored");
        Ok(())
    }

    /// Not carried on the wire at this profile level.
    pub fn mncc_hold_res(&mut self, call: CallId) -> Result<(), NwkError> {
        self.call(call)?;
        Ok(())
    }

    /// Not carried on the wire at this profile level.
    pub fn mncc_retrieve_req(&mut self, call: CallId) -> Result<(), NwkError> {
        self.call(call)?;
        debug!(call = call.0, "retrieve request ignored");
        Ok(())
    }

    /// Not carried on the wire at this profile level.
    pub fn mncc_retrieve_res(&mut self, call: CallId) -> Result<(), NwkError> {
        self.call(call)?;
        Ok(())
    }

    /// Sends downstream U-plane data. Best effort: failures are logged
    /// and never tear down the call.
    pub fn dl_u_data_req(&mut self, call: CallId, data: &[u8]) -> Result<(), NwkError> {
        let c = self.calls.get_mut(&call).ok_or(NwkError::UnknownCall)?;
        let Some(u_plane) = c.u_plane.as_mut() else {
            debug!(call = call.0, "U-plane data request while unconnected");
            return Ok(());
        };
        match u_plane.send(data) {
            Ok(n) if n != data.len() => {
                debug!(call = call.0, sent = n, len = data.len(), "short U-plane send")
            }
            Ok(_) => {}
            Err(e) => debug!(call = call.0, error = %e, "U-plane send failed"),
        }
        Ok(())
    }

    /// Drains pending inbound U-plane data for a call.
    pub fn u_plane_readable(&mut self, call: CallId) -> Result<Vec<NwkEvent>, NwkError> {
        let mut events = Vec::new();
        let c = self.calls.get_mut(&call).ok_or(NwkError::UnknownCall)?;
        let Some(u_plane) = c.u_plane.as_mut() else {
            return Ok(events);
        };
        let mut buf = [0u8; U_PLANE_MTU];
        match u_plane.recv(&mut buf) {
            Ok(n) if n > 0 => {
                events.push(NwkEvent::Cc(CcEvent::UPlaneData {
                    call,
                    data: buf[..n].to_vec(),
                }));
            }
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {}
            Err(e) => debug!(call = call.0, error = %e, "U-plane receive failed"),
        }
        Ok(events)
    }

    /// Current state of a call, if it is still alive.
    pub fn call_state(&self, call: CallId) -> Option<CallState> {
        self.calls.get(&call).map(|c| c.state)
    }

    /// The portable identity captured at call setup.
    pub fn call_portable_identity(&self, call: CallId) -> Option<PortableIdentity> {
        self.calls.get(&call).and_then(|c| c.pt_id)
    }

    // Inbound path

    pub(crate) fn cc_receive(
        &mut self,
        link: LinkId,
        hdr: FrameHeader,
        body: &[u8],
        events: &mut Vec<NwkEvent>,
    ) -> Result<(), NwkError> {
        let msg_type = CcMsgType::from(hdr.msg_type);
        let owner = self.link_mut(link)?.cc.get(hdr.ti, hdr.local_role());
        match owner {
            Some(TransactionOwner::Call(id)) => {
                self.cc_rcv(id, msg_type, body, events);
            }
            Some(other) => {
                warn!(?other, "CC frame for foreign transaction owner, dropping");
            }
            None => self.cc_open(link, hdr, msg_type, body, events),
        }
        Ok(())
    }

    fn cc_rcv(&mut self, id: CallId, msg_type: CcMsgType, body: &[u8], events: &mut Vec<NwkEvent>) {
        debug!(call = id.0, ?msg_type, "receive");
        match msg_type {
            CcMsgType::Alerting => self.cc_rcv_alerting(id, body, events),
            CcMsgType::CallProc => self.cc_rcv_call_proc(id, body, events),
            CcMsgType::Connect => self.cc_rcv_connect(id, body, events),
            CcMsgType::SetupAck => self.cc_rcv_setup_ack(id, body, events),
            CcMsgType::ConnectAck => self.cc_rcv_connect_ack(id, body, events),
            CcMsgType::ServiceChange => self.cc_rcv_service_change(id, body, events),
            CcMsgType::ServiceAccept => self.cc_rcv_service_accept(id, body, events),
            CcMsgType::ServiceReject => self.cc_rcv_service_reject(id, body, events),
            CcMsgType::Release => self.cc_rcv_release(id, body, events),
            CcMsgType::ReleaseCom => self.cc_rcv_release_com(id, body, events),
            CcMsgType::IwuInfo => {
                if CcIwuInfoMsg::parse(self.mode, body).is_err() {
                    debug!(call = id.0, "undecodable CC-IWU-INFO");
                }
            }
            CcMsgType::Notify => match CcNotifyMsg::parse(self.mode, body) {
                Ok(msg) => debug!(call = id.0, restart = ?msg.timer_restart, "CC-NOTIFY"),
                Err(e) => debug!(call = id.0, error = %e, "undecodable CC-NOTIFY"),
            },
            CcMsgType::Info => self.cc_rcv_info(id, body, events),
            CcMsgType::Setup | CcMsgType::Unknown => {
                debug!(call = id.0, ?msg_type, "unexpected message, ignoring");
            }
        }
    }

    fn cc_state(&self, id: CallId) -> Option<CallState> {
        self.calls.get(&id).map(|c| c.state)
    }

    fn cc_rcv_alerting(&mut self, id: CallId, body: &[u8], events: &mut Vec<NwkEvent>) {
        if self.cc_state(id) != Some(CallState::CallPresent) {
            debug!(call = id.0, "CC-ALERTING outside CALL PRESENT, ignoring");
            return;
        }
        let msg = match CcAlertingMsg::parse(self.mode, body) {
            Ok(msg) => msg,
            Err(e) => return self.cc_parse_error(id, e, events),
        };
        self.cc_stop_setup_timer(id);
        self.set_call_state(id, CallState::CallReceived);
        events.push(NwkEvent::Cc(CcEvent::AlertInd {
            call: id,
            param: MnccAlertParam {
                facility: msg.facility,
                progress_indicator: msg.progress_indicator,
                display: msg.display,
                signal: msg.signal,
                feature_indicate: msg.feature_indicate,
                terminal_capability: msg.terminal_capability,
                transit_delay: msg.transit_delay,
                window_size: msg.window_size,
                iwu_to_iwu: msg.iwu_to_iwu,
                iwu_packet: msg.iwu_packet,
            },
        }));
    }

    fn cc_rcv_call_proc(&mut self, id: CallId, body: &[u8], events: &mut Vec<NwkEvent>) {
        if self.cc_state(id) != Some(CallState::CallPresent) {
            debug!(call = id.0, "CC-CALL-PROC outside CALL PRESENT, ignoring");
            return;
        }
        let msg = match CcCallProcMsg::parse(self.mode, body) {
            Ok(msg) => msg,
            Err(e) => return self.cc_parse_error(id, e, events),
        };
        events.push(NwkEvent::Cc(CcEvent::CallProcInd {
            call: id,
            param: MnccCallProcParam {
                facility: msg.facility,
                progress_indicator: msg.progress_indicator,
                display: msg.display,
                signal: msg.signal,
                feature_indicate: msg.feature_indicate,
                transit_delay: msg.transit_delay,
                window_size: msg.window_size,
                iwu_to_iwu: msg.iwu_to_iwu,
                iwu_packet: msg.iwu_packet,
            },
        }));
    }

    fn cc_rcv_setup_ack(&mut self, id: CallId, body: &[u8], events: &mut Vec<NwkEvent>) {
        if self.cc_state(id) != Some(CallState::CallPresent) {
            debug!(call = id.0, "CC-SETUP-ACK outside CALL PRESENT, ignoring");
            return;
        }
        let msg = match CcSetupAckMsg::parse(self.mode, body) {
            Ok(msg) => msg,
            Err(e) => return self.cc_parse_error(id, e, events),
        };
        events.push(NwkEvent::Cc(CcEvent::SetupAckInd {
            call: id,
            param: MnccSetupAckParam {
                info_type: msg.info_type,
                location_area: msg.location_area,
                display: msg.display,
                signal: msg.signal,
                feature_indicate: msg.feature_indicate,
                transit_delay: msg.transit_delay,
                window_size: msg.window_size,
                delimiter_request: msg.delimiter_request,
                iwu_to_iwu: msg.iwu_to_iwu,
                iwu_packet: msg.iwu_packet,
            },
        }));
    }

    fn cc_rcv_connect(&mut self, id: CallId, body: &[u8], events: &mut Vec<NwkEvent>) {
        if !matches!(
            self.cc_state(id),
            Some(CallState::CallPresent | CallState::CallReceived)
        ) {
            debug!(call = id.0, "CC-CONNECT in unexpected state, ignoring");
            return;
        }
        let msg = match CcConnectMsg::parse(self.mode, body) {
            Ok(msg) => msg,
            Err(e) => return self.cc_parse_error(id, e, events),
        };
        self.cc_stop_setup_timer(id);
        self.set_call_state(id, CallState::ConnectPending);
        events.push(NwkEvent::Cc(CcEvent::ConnectInd {
            call: id,
            param: MnccConnectParam {
                facility: msg.facility,
                progress_indicator: msg.progress_indicator,
                display: msg.display,
                signal: msg.signal,
                feature_indicate: msg.feature_indicate,
                terminal_capability: msg.terminal_capability,
                transit_delay: msg.transit_delay,
                window_size: msg.window_size,
                iwu_to_iwu: msg.iwu_to_iwu,
                iwu_packet: msg.iwu_packet,
            },
        }));
    }

    fn cc_rcv_connect_ack(&mut self, id: CallId, body: &[u8], events: &mut Vec<NwkEvent>) {
        if self.cc_state(id) != Some(CallState::ConnectPending) {
            debug!(call = id.0, "CC-CONNECT-ACK outside CONNECT PENDING, ignoring");
            return;
        }
        let msg = match CcConnectAckMsg::parse(self.mode, body) {
            Ok(msg) => msg,
            Err(e) => return self.cc_parse_error(id, e, events),
        };
        self.set_call_state(id, CallState::Active);
        events.push(NwkEvent::Cc(CcEvent::ConnectCfm {
            call: id,
            param: MnccConnectParam {
                display: msg.display,
                feature_indicate: msg.feature_indicate,
                iwu_packet: msg.iwu_packet,
                ..Default::default()
            },
        }));
    }

    fn cc_rcv_release(&mut self, id: CallId, body: &[u8], events: &mut Vec<NwkEvent>) {
        let msg = match CcReleaseMsg::parse(self.mode, body) {
            Ok(msg) => msg,
            Err(e) => return self.cc_parse_error(id, e, events),
        };
        events.push(NwkEvent::Cc(CcEvent::ReleaseInd {
            call: id,
            param: MnccReleaseParam {
                release_reason: msg.release_reason,
                facility: msg.facility,
                display: msg.display,
                feature_indicate: msg.feature_indicate,
                iwu_to_iwu: msg.iwu_to_iwu,
                iwu_packet: msg.iwu_packet,
                ..Default::default()
            },
        }));
    }

    fn cc_rcv_release_com(&mut self, id: CallId, body: &[u8], events: &mut Vec<NwkEvent>) {
        // CC-RELEASE-COM always completes release, decodable or not.
        let param = match CcReleaseComMsg::parse(self.mode, body) {
            Ok(msg) => MnccReleaseParam {
                release_reason: msg.release_reason,
                identity_type: msg.identity_type,
                location_area: msg.location_area,
                iwu_attributes: msg.iwu_attributes,
                facility: msg.facility,
                display: msg.display,
                feature_indicate: msg.feature_indicate,
                network_parameter: msg.network_parameter,
                iwu_to_iwu: msg.iwu_to_iwu,
                iwu_packet: msg.iwu_packet,
            },
            Err(e) => {
                debug!(call = id.0, error = %e, "undecodable CC-RELEASE-COM");
                MnccReleaseParam::default()
            }
        };
        let event = if self.cc_state(id) == Some(CallState::ReleasePending) {
            CcEvent::ReleaseCfm { call: id, param }
        } else {
            CcEvent::ReleaseInd { call: id, param }
        };
        events.push(NwkEvent::Cc(event));

        self.cc_disconnect_uplane(id);
        self.cc_destroy_call(id, DdlRelease::Normal);
    }

    fn cc_rcv_info(&mut self, id: CallId, body: &[u8], events: &mut Vec<NwkEvent>) {
        let msg = match CcInfoMsg::parse(self.mode, body) {
            Ok(msg) => msg,
            Err(e) => return self.cc_parse_error(id, e, events),
        };
        events.push(NwkEvent::Cc(CcEvent::InfoInd {
            call: id,
            param: MnccInfoParam {
                location_area: msg.location_area,
                nwk_assigned_identity: msg.nwk_assigned_identity,
                facility: msg.facility,
                progress_indicator: msg.progress_indicator,
                display: msg.display,
                keypad: msg.keypad,
                signal: msg.signal,
                feature_activate: msg.feature_activate,
                feature_indicate: msg.feature_indicate,
                network_parameter: msg.network_parameter,
                called_party_number: msg.called_party_number,
                called_party_subaddress: msg.called_party_subaddress,
                calling_party_number: msg.calling_party_number,
                calling_party_name: msg.calling_party_name,
                sending_complete: msg.sending_complete,
                iwu_to_iwu: msg.iwu_to_iwu,
                iwu_packet: msg.iwu_packet,
            },
        }));
    }

    fn cc_rcv_service_change(&mut self, id: CallId, body: &[u8], events: &mut Vec<NwkEvent>) {
        let msg = match CcServiceChangeMsg::parse(self.mode, body) {
            Ok(msg) => msg,
            Err(e) => return self.cc_parse_error(id, e, events),
        };
        events.push(NwkEvent::Cc(CcEvent::ModifyInd {
            call: id,
            param: MnccModifyParam {
                service_change_info: msg.service_change_info,
                iwu_attributes: msg.iwu_attributes,
                call_attributes: msg.call_attributes,
                connection_attributes: msg.connection_attributes,
                connection_identity: msg.connection_identity,
                iwu_to_iwu: msg.iwu_to_iwu,
                codec_list: msg.codec_list,
                escape_to_proprietary: msg.escape_to_proprietary,
                release_reason: None,
            },
        }));
    }

    fn cc_rcv_service_accept(&mut self, id: CallId, body: &[u8], events: &mut Vec<NwkEvent>) {
        let msg = match CcServiceAcceptMsg::parse(self.mode, body) {
            Ok(msg) => msg,
            Err(e) => return self.cc_parse_error(id, e, events),
        };
        events.push(NwkEvent::Cc(CcEvent::ModifyCfm {
            call: id,
            accept: true,
            param: MnccModifyParam {
                iwu_attributes: msg.iwu_attributes,
                connection_identity: msg.connection_identity,
                iwu_to_iwu: msg.iwu_to_iwu,
                escape_to_proprietary: msg.escape_to_proprietary,
                ..Default::default()
            },
        }));
    }

    fn cc_rcv_service_reject(&mut self, id: CallId, body: &[u8], events: &mut Vec<NwkEvent>) {
        let msg = match CcServiceRejectMsg::parse(self.mode, body) {
            Ok(msg) => msg,
            Err(e) => return self.cc_parse_error(id, e, events),
        };
        events.push(NwkEvent::Cc(CcEvent::ModifyCfm {
            call: id,
            accept: false,
            param: MnccModifyParam {
                release_reason: msg.release_reason,
                iwu_attributes: msg.iwu_attributes,
                iwu_to_iwu: msg.iwu_to_iwu,
                escape_to_proprietary: msg.escape_to_proprietary,
                ..Default::default()
            },
        }));
    }

    fn cc_open(
        &mut self,
        link: LinkId,
        hdr: FrameHeader,
        msg_type: CcMsgType,
        body: &[u8],
        events: &mut Vec<NwkEvent>,
    ) {
        debug!(ti = hdr.ti, ?msg_type, "CC message for unknown transaction");
        if hdr.from_responder {
            return;
        }
        match msg_type {
            CcMsgType::Setup => self.cc_rcv_setup(link, hdr, body, events),
            CcMsgType::Release | CcMsgType::ReleaseCom => {}
            _ => {
                let transaction = Transaction::new(Pd::Cc, hdr.ti, Role::Responder);
                let msg =
                    CcReleaseComMsg::with_reason(ReleaseReason::UnknownTransactionIdentifier);
                if let Err(e) = self.cc_send(link, transaction, CcMsgType::ReleaseCom, &msg) {
                    debug!(error = %e, "failed to reject unknown transaction");
                }
            }
        }
    }

    fn cc_rcv_setup(
        &mut self,
        link: LinkId,
        hdr: FrameHeader,
        body: &[u8],
        events: &mut Vec<NwkEvent>,
    ) {
        let transaction = Transaction::new(Pd::Cc, hdr.ti, Role::Responder);
        let msg = match CcSetupMsg::parse(self.mode, body) {
            Ok(msg) => msg,
            Err(SfmtError::MalformedHeader) => {
                debug!("malformed CC-SETUP frame, dropping");
                return;
            }
            Err(e) => {
                // Well-formed frame with bad contents: answer with a
                // RELEASE-COM carrying the matching reason, no call.
                let reason = match e {
                    SfmtError::MandatoryIeMissing { .. } => ReleaseReason::MandatoryIeMissing,
                    _ => ReleaseReason::InvalidIeContents,
                };
                let reply = CcReleaseComMsg::with_reason(reason);
                if let Err(e) = self.cc_send(link, transaction, CcMsgType::ReleaseCom, &reply) {
                    debug!(error = %e, "failed to reject CC-SETUP");
                }
                return;
            }
        };

        let id = self.new_call_id();
        if let Ok(l) = self.link_mut(link) {
            l.cc.confirm(hdr.ti, TransactionOwner::Call(id));
        }
        self.calls.insert(
            id,
            Call {
                link,
                transaction,
                state: CallState::CallInitiated,
                setup_timer: None,
                pt_id: msg.portable_identity,
                ft_id: msg.fixed_identity,
                u_plane: None,
            },
        );
        debug!(call = id.0, "new call, state CALL INITIATED");

        events.push(NwkEvent::Cc(CcEvent::SetupInd {
            call: id,
            param: MnccSetupParam {
                basic_service: msg.basic_service,
                iwu_attributes: msg.iwu_attributes,
                cipher_info: msg.cipher_info,
                facility: msg.facility,
                progress_indicator: msg.progress_indicator,
                display: msg.display,
                keypad: msg.keypad,
                signal: msg.signal,
                feature_activate: msg.feature_activate,
                feature_indicate: msg.feature_indicate,
                network_parameter: msg.network_parameter,
                terminal_capability: msg.terminal_capability,
                end_to_end_compatibility: msg.end_to_end_compatibility,
                rate_parameters: msg.rate_parameters,
                transit_delay: msg.transit_delay,
                window_size: msg.window_size,
                calling_party_number: msg.calling_party_number,
                called_party_number: msg.called_party_number,
                called_party_subaddress: msg.called_party_subaddress,
                calling_party_name: msg.calling_party_name,
                sending_complete: msg.sending_complete,
                iwu_to_iwu: msg.iwu_to_iwu,
                iwu_packet: msg.iwu_packet,
            },
        }));
    }

    /// Parse failure on a live call: answer with CC-RELEASE-COM carrying
    /// the matching reason and tear the call down.
    fn cc_parse_error(&mut self, id: CallId, e: SfmtError, events: &mut Vec<NwkEvent>) {
        if e == SfmtError::MalformedHeader {
            debug!(call = id.0, "malformed frame, dropping");
            return;
        }
        let reason = match e {
            SfmtError::MandatoryIeMissing { .. } => ReleaseReason::MandatoryIeMissing,
            _ => ReleaseReason::InvalidIeContents,
        };
        warn!(call = id.0, error = %e, "message parsing failed, releasing call");
        if let Ok((link, transaction)) = self.call_route(id) {
            let reply = CcReleaseComMsg::with_reason(reason);
            if let Err(e) = self.cc_send(link, transaction, CcMsgType::ReleaseCom, &reply) {
                debug!(call = id.0, error = %e, "release-com send failed");
            }
        }
        self.cc_disconnect_uplane(id);
        self.cc_destroy_call(id, DdlRelease::Abnormal);
        events.push(NwkEvent::Cc(CcEvent::RejectInd {
            call: id,
            param: MnccReleaseParam {
                release_reason: Some(reason),
                ..Default::default()
            },
        }));
    }

    pub(crate) fn cc_setup_timeout(&mut self, id: CallId, events: &mut Vec<NwkEvent>) {
        if !self.calls.contains_key(&id) {
            return;
        }
        debug!(call = id.0, "setup timer expired");
        self.cc_destroy_call(id, DdlRelease::Normal);
        events.push(NwkEvent::Cc(CcEvent::RejectInd {
            call: id,
            param: MnccReleaseParam::default(),
        }));
    }

    /// Data link failure: deliver a synthetic reject and free the call.
    /// The transaction table entry is already gone at this point.
    pub(crate) fn cc_shutdown(&mut self, id: CallId, events: &mut Vec<NwkEvent>) {
        debug!(call = id.0, "shutdown");
        if let Some(mut call) = self.calls.remove(&id) {
            if let Some(timer) = call.setup_timer.take() {
                self.stop_timer(timer);
            }
            call.u_plane = None;
            events.push(NwkEvent::Cc(CcEvent::RejectInd {
                call: id,
                param: MnccReleaseParam::default(),
            }));
        }
    }

    // Internals

    fn call(&self, id: CallId) -> Result<&Call, NwkError> {
        self.calls.get(&id).ok_or(NwkError::UnknownCall)
    }

    fn call_route(&self, id: CallId) -> Result<(LinkId, Transaction), NwkError> {
        let c = self.call(id)?;
        Ok((c.link, c.transaction))
    }

    fn cc_stop_setup_timer(&mut self, id: CallId) {
        let token = self.calls.get_mut(&id).and_then(|c| c.setup_timer.take());
        if let Some(timer) = token {
            self.stop_timer(timer);
        }
    }

    fn set_call_state(&mut self, id: CallId, state: CallState) {
        if let Some(call) = self.calls.get_mut(&id) {
            debug!(call = id.0, from = %call.state, to = %state, "state change");
            call.state = state;
        }
    }

    fn cc_send<M: SFormatMessage>(
        &mut self,
        link: LinkId,
        transaction: Transaction,
        msg_type: CcMsgType,
        msg: &M,
    ) -> Result<(), NwkError> {
        let body = msg.build(self.mode)?;
        let mut frame = Vec::with_capacity(2 + body.len());
        frame.extend_from_slice(&transaction.frame_header(msg_type as u8));
        frame.extend_from_slice(&body);
        self.link_mut(link)?.transport.send_frame(&frame)?;
        Ok(())
    }

    fn cc_connect_uplane(&mut self, id: CallId) {
        let Ok((link, _)) = self.call_route(id) else {
            return;
        };
        let connected = match self.link_mut(link) {
            Ok(l) => l.transport.connect_lu1(),
            Err(e) => {
                debug!(call = id.0, error = %e, "U-plane connect failed");
                return;
            }
        };
        match connected {
            Ok(u_plane) => {
                if let Some(call) = self.calls.get_mut(&id) {
                    call.u_plane = Some(u_plane);
                    debug!(call = id.0, "U-plane connected");
                }
            }
            Err(e) => debug!(call = id.0, error = %e, "U-plane connect failed"),
        }
    }

    fn cc_disconnect_uplane(&mut self, id: CallId) {
        if let Some(call) = self.calls.get_mut(&id) {
            if call.u_plane.take().is_some() {
                debug!(call = id.0, "U-plane disconnected");
            }
        }
    }

    fn cc_destroy_call(&mut self, id: CallId, release: DdlRelease) {
        if let Some(mut call) = self.calls.remove(&id) {
            if let Some(timer) = call.setup_timer.take() {
                self.stop_timer(timer);
            }
            if let Ok(l) = self.link_mut(call.link) {
                l.cc.remove(call.transaction.ti, call.transaction.role);
            }
            debug!(call = id.0, ?release, "call destroyed");
        }
    }
}
