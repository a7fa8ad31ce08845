//! End-to-end Call Control flows over a mock DLC transport.

mod common;

use common::{MockTimers, MockTransport};
use rs_dect::cc::{
    CallId, CallState, CcEvent, MnccConnectParam, MnccReleaseParam, MnccSetupParam,
    CC_SETUP_TIMEOUT,
};
use rs_dect::error::NwkError;
use rs_dect::handle::{DectHandle, LinkId, NwkEvent};
use rs_dect::identity::{Ari, Ipei, Ipui};
use rs_dect::ie::basic_service::{BasicService, CallClass, ServiceType};
use rs_dect::ie::called_party_number::CalledPartyNumber;
use rs_dect::ie::calling_party_number::{NumberType, Npi};
use rs_dect::ie::fixed_identity::FixedIdentity;
use rs_dect::ie::portable_identity::PortableIdentity;
use rs_dect::ie::{Ie, IeType};
use rs_dect::Mode;

fn pari() -> Ari {
    Ari::ClassA {
        emc: 0x123,
        fpn: 0x4567,
    }
}

fn ipui() -> Ipui {
    Ipui::N(Ipei::new(0x123, 0x456789))
}

fn setup_param() -> MnccSetupParam {
    let mut param = MnccSetupParam::default();
    param.basic_service = Some(BasicService::new(
        CallClass::Normal,
        ServiceType::BasicSpeechDefault,
    ));
    param.called_party_number = Some(CalledPartyNumber::new(
        NumberType::Unknown,
        Npi::Unknown,
        *b"5551234",
    ));
    param
}

struct Side {
    dh: DectHandle,
    link: LinkId,
    state: std::rc::Rc<std::cell::RefCell<common::MockState>>,
    timers: std::rc::Rc<std::cell::RefCell<common::TimerLog>>,
}

fn side(mode: Mode) -> Side {
    let (transport, state, _rx, _tx) = MockTransport::new();
    let (timer_service, timers) = MockTimers::new();
    let mut dh = DectHandle::new(mode, pari(), timer_service);
    let link = dh.add_link(transport);
    Side {
        dh,
        link,
        state,
        timers,
    }
}

impl Side {
    fn sent_frames(&self) -> Vec<Vec<u8>> {
        self.state.borrow().frames.clone()
    }

    fn last_frame(&self) -> Vec<u8> {
        self.state.borrow().frames.last().cloned().unwrap()
    }

    fn deliver_last_to(&self, other: &mut Side) -> Vec<NwkEvent> {
        other.dh.receive(other.link, &self.last_frame()).unwrap()
    }
}

#[test]
fn pp_places_a_call() {
    let mut pp = side(Mode::Pp);
    let call = pp.dh.mncc_setup_req(pp.link, &ipui(), setup_param()).unwrap();

    let frames = pp.sent_frames();
    assert_eq!(frames.len(), 1);
    let wire = &frames[0];
    // TI 0, F 0, PD CC; CC-SETUP.
    assert_eq!(wire[0], 0x03);
    assert_eq!(wire[1], 0x05);
    // First IE is the PORTABLE-IDENTITY, then FIXED-IDENTITY with the
    // handle's PARK.
    assert_eq!(wire[2], IeType::PortableIdentity as u8);
    let (pi, n) = Ie::unmarshal(&wire[2..]).unwrap();
    assert_eq!(
        PortableIdentity::unmarshal(&pi.payload).unwrap(),
        PortableIdentity::Ipui(ipui())
    );
    let (fi, _) = Ie::unmarshal(&wire[2 + n..]).unwrap();
    assert_eq!(fi.ie_type, IeType::FixedIdentity);
    let fi = FixedIdentity::unmarshal(&fi.payload).unwrap();
    assert_eq!(fi.ari, pari());

    assert_eq!(pp.dh.call_state(call), Some(CallState::CallPresent));
    // Setup timer running with the default timeout.
    let timers = pp.timers.borrow();
    assert_eq!(timers.started.len(), 1);
    assert_eq!(timers.started[0].1, CC_SETUP_TIMEOUT);
}

#[test]
fn setup_timeout_rejects_the_call() {
    let mut pp = side(Mode::Pp);
    let call = pp.dh.mncc_setup_req(pp.link, &ipui(), setup_param()).unwrap();

    let token = pp.timers.borrow().started[0].0;
    let events = pp.dh.timer_expired(token);
    assert!(matches!(
        events.as_slice(),
        [NwkEvent::Cc(CcEvent::RejectInd { call: c, param })]
            if *c == call && param.release_reason.is_none()
    ));
    assert_eq!(pp.dh.call_state(call), None);
    assert_eq!(pp.dh.call_count(), 0);

    // The same TI is free again afterwards.
    pp.dh.mncc_setup_req(pp.link, &ipui(), setup_param()).unwrap();
    assert_eq!(pp.sent_frames()[1][0], 0x03);
}

fn establish() -> (Side, CallId, Side, CallId) {
    let mut pp = side(Mode::Pp);
    let mut fp = side(Mode::Fp);

    let pp_call = pp.dh.mncc_setup_req(pp.link, &ipui(), setup_param()).unwrap();
    let events = pp.deliver_last_to(&mut fp);
    let fp_call = match events.as_slice() {
        [NwkEvent::Cc(CcEvent::SetupInd { call, param })] => {
            assert_eq!(
                param.basic_service,
                Some(BasicService::new(
                    CallClass::Normal,
                    ServiceType::BasicSpeechDefault
                ))
            );
            assert_eq!(
                param.called_party_number.as_ref().map(|n| n.address.clone()),
                Some(b"5551234".to_vec())
            );
            *call
        }
        other => panic!("expected SetupInd, got {:?}", other),
    };
    assert_eq!(fp.dh.call_state(fp_call), Some(CallState::CallInitiated));
    assert_eq!(
        fp.dh.call_portable_identity(fp_call),
        Some(PortableIdentity::Ipui(ipui()))
    );

    // FP answers: CONNECT, U-plane opens.
    fp.dh.mncc_connect_req(fp_call, MnccConnectParam::default()).unwrap();
    assert_eq!(fp.state.borrow().lu1_connects, 1);
    assert_eq!(fp.dh.call_state(fp_call), Some(CallState::ConnectPending));
    assert_eq!(fp.last_frame()[1], 0x07);
    // Responder frames carry the F bit.
    assert_eq!(fp.last_frame()[0], 0x83);

    let events = fp.deliver_last_to(&mut pp);
    assert!(matches!(
        events.as_slice(),
        [NwkEvent::Cc(CcEvent::ConnectInd { call, .. })] if *call == pp_call
    ));

    // PP completes: U-plane opens, CONNECT-ACK goes out, call is active.
    pp.dh.mncc_connect_res(pp_call, MnccConnectParam::default()).unwrap();
    assert_eq!(pp.state.borrow().lu1_connects, 1);
    assert_eq!(pp.dh.call_state(pp_call), Some(CallState::Active));
    assert_eq!(pp.last_frame()[1], 0x0f);

    let events = pp.deliver_last_to(&mut fp);
    assert!(matches!(
        events.as_slice(),
        [NwkEvent::Cc(CcEvent::ConnectCfm { call, .. })] if *call == fp_call
    ));
    assert_eq!(fp.dh.call_state(fp_call), Some(CallState::Active));

    (pp, pp_call, fp, fp_call)
}

#[test]
fn fp_receives_setup_and_connects() {
    establish();
}

#[test]
fn u_plane_data_flows_after_connect() {
    let (mut pp, pp_call, _fp, _) = establish();
    pp.dh.dl_u_data_req(pp_call, &[0x55; 40]).unwrap();
    // Best effort: sending on a dead call id is an error, on an
    // unconnected call a no-op.
    assert!(matches!(
        pp.dh.dl_u_data_req(CallId(999), &[0]),
        Err(NwkError::UnknownCall)
    ));
}

#[test]
fn normal_release() {
    let (mut pp, pp_call, mut fp, fp_call) = establish();

    pp.dh.mncc_release_req(pp_call, MnccReleaseParam::default()).unwrap();
    assert_eq!(pp.dh.call_state(pp_call), Some(CallState::ReleasePending));

    let events = pp.deliver_last_to(&mut fp);
    assert!(matches!(
        events.as_slice(),
        [NwkEvent::Cc(CcEvent::ReleaseInd { call, .. })] if *call == fp_call
    ));

    fp.dh.mncc_release_res(fp_call, MnccReleaseParam::default()).unwrap();
    assert_eq!(fp.dh.call_count(), 0);

    let events = fp.deliver_last_to(&mut pp);
    assert!(matches!(
        events.as_slice(),
        [NwkEvent::Cc(CcEvent::ReleaseCfm { call, .. })] if *call == pp_call
    ));
    assert_eq!(pp.dh.call_count(), 0);
}

#[test]
fn release_collision_destroys_each_call_once() {
    let (mut pp, pp_call, mut fp, fp_call) = establish();

    // Both sides release concurrently.
    pp.dh.mncc_release_req(pp_call, MnccReleaseParam::default()).unwrap();
    fp.dh.mncc_release_req(fp_call, MnccReleaseParam::default()).unwrap();
    let pp_release = pp.last_frame();
    let fp_release = fp.last_frame();

    let events = fp.dh.receive(fp.link, &pp_release).unwrap();
    assert!(matches!(
        events.as_slice(),
        [NwkEvent::Cc(CcEvent::ReleaseInd { call, .. })] if *call == fp_call
    ));
    let events = pp.dh.receive(pp.link, &fp_release).unwrap();
    assert!(matches!(
        events.as_slice(),
        [NwkEvent::Cc(CcEvent::ReleaseInd { call, .. })] if *call == pp_call
    ));

    // Both answer with RELEASE-COM and destroy exactly once.
    pp.dh.mncc_release_res(pp_call, MnccReleaseParam::default()).unwrap();
    fp.dh.mncc_release_res(fp_call, MnccReleaseParam::default()).unwrap();
    assert_eq!(pp.dh.call_count(), 0);
    assert_eq!(fp.dh.call_count(), 0);

    // The crossing RELEASE-COMs land on closed transactions and are
    // dropped without a reply.
    let fp_frames_before = fp.sent_frames().len();
    let events = pp.deliver_last_to(&mut fp);
    assert!(events.is_empty());
    assert_eq!(fp.sent_frames().len(), fp_frames_before);
}

#[test]
fn malformed_fixed_identity_in_setup_is_rejected() {
    let mut fp = side(Mode::Fp);

    let pi = Ie::new(
        IeType::PortableIdentity,
        PortableIdentity::Ipui(ipui()).marshal().unwrap(),
    );
    let mut fi_content = FixedIdentity::park(pari()).marshal();
    // Length octet inconsistent with the class A ARI.
    fi_content[1] = 0x80 | 32;
    let fi = Ie::new(IeType::FixedIdentity, fi_content);
    let bs = Ie::new(IeType::BasicService, vec![0x80]);

    let mut frame = vec![0x03, 0x05];
    frame.extend_from_slice(&pi.marshal());
    frame.extend_from_slice(&fi.marshal());
    frame.extend_from_slice(&bs.marshal());

    let events = fp.dh.receive(fp.link, &frame).unwrap();
    assert!(events.is_empty());
    assert_eq!(fp.dh.call_count(), 0);

    // The transaction layer answered with CC-RELEASE-COM carrying
    // INVALID-IE-CONTENTS.
    let reply = fp.last_frame();
    assert_eq!(reply[0], 0x83);
    assert_eq!(reply[1], 0x5a);
    assert_eq!(&reply[2..4], &[0xe2, 0x04]);
}

#[test]
fn unknown_transaction_message_is_rejected_with_release_com() {
    let mut fp = side(Mode::Fp);
    // CC-ALERTING on a fresh TI.
    let events = fp.dh.receive(fp.link, &[0x13, 0x01]).unwrap();
    assert!(events.is_empty());
    let reply = fp.last_frame();
    assert_eq!(reply[0], 0x93);
    assert_eq!(reply[1], 0x5a);
    // RELEASE-REASON: unknown transaction identifier.
    assert_eq!(&reply[2..4], &[0xe2, 0x02]);
}

#[test]
fn cc_transaction_identifiers_exhaust_at_seven() {
    let mut pp = side(Mode::Pp);
    for i in 0..7 {
        let call = pp.dh.mncc_setup_req(pp.link, &ipui(), setup_param()).unwrap();
        let frame = pp.last_frame();
        assert_eq!(frame[0] >> 4, i);
        assert!(pp.dh.call_state(call).is_some());
    }
    assert!(matches!(
        pp.dh.mncc_setup_req(pp.link, &ipui(), setup_param()),
        Err(NwkError::NoTransactionAvailable)
    ));
}

#[test]
fn link_down_rejects_all_calls() {
    let (mut pp, pp_call, _fp, _) = establish();
    let second = pp.dh.mncc_setup_req(pp.link, &ipui(), setup_param()).unwrap();

    let events = pp.dh.link_down(pp.link).unwrap();
    assert_eq!(events.len(), 2);
    for event in &events {
        assert!(matches!(event, NwkEvent::Cc(CcEvent::RejectInd { .. })));
    }
    assert_eq!(pp.dh.call_state(pp_call), None);
    assert_eq!(pp.dh.call_state(second), None);
}
