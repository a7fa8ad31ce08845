//! End-to-end Mobility Management flows over a mock DLC transport.

mod common;

use common::{MockTimers, MockTransport};
use rs_dect::handle::{DectHandle, LinkId, NwkEvent};
use rs_dect::identity::{Ari, Ipei, Ipui};
use rs_dect::ie::duration::{DurationIe, LockLimits, TimeLimits};
use rs_dect::ie::fixed_identity::FixedIdType;
use rs_dect::ie::location_area::LocationArea;
use rs_dect::ie::portable_identity::PortableIdentity;
use rs_dect::ie::reject_reason::RejectReason;
use rs_dect::ie::terminal_capability::TerminalCapability;
use rs_dect::identity::Tpui;
use rs_dect::mm::{
    MmAccessRightsParam, MmEvent, MmIdentityAssignParam, MmLocateParam,
};
use rs_dect::Mode;

fn pari() -> Ari {
    Ari::ClassA {
        emc: 0x321,
        fpn: 0x7654,
    }
}

fn portable_id() -> PortableIdentity {
    PortableIdentity::Ipui(Ipui::N(Ipei::new(0x123, 0x456789)))
}

struct Side {
    dh: DectHandle,
    link: LinkId,
    state: std::rc::Rc<std::cell::RefCell<common::MockState>>,
}

fn side(mode: Mode) -> Side {
    let (transport, state, _rx, _tx) = MockTransport::new();
    let (timer_service, _timers) = MockTimers::new();
    let mut dh = DectHandle::new(mode, pari(), timer_service);
    let link = dh.add_link(transport);
    Side { dh, link, state }
}

impl Side {
    fn last_frame(&self) -> Vec<u8> {
        self.state.borrow().frames.last().cloned().unwrap()
    }

    fn deliver_last_to(&self, other: &mut Side) -> Vec<NwkEvent> {
        other.dh.receive(other.link, &self.last_frame()).unwrap()
    }
}

#[test]
fn locate_accept_flow() {
    let mut pp = side(Mode::Pp);
    let mut fp = side(Mode::Fp);

    let mut param = MmLocateParam::default();
    param.portable_identity = Some(portable_id());
    param.terminal_capability = Some(TerminalCapability::default());
    let pp_mm = pp.dh.mm_locate_req(pp.link, param).unwrap();

    let wire = pp.last_frame();
    // TI 0, F 0, PD MM; LOCATE-REQUEST.
    assert_eq!(wire[0], 0x05);
    assert_eq!(wire[1], 0x54);

    let events = pp.deliver_last_to(&mut fp);
    let fp_mm = match events.as_slice() {
        [NwkEvent::Mm(MmEvent::LocateInd { mm, param })] => {
            assert_eq!(param.portable_identity, Some(portable_id()));
            *mm
        }
        other => panic!("expected LocateInd, got {:?}", other),
    };

    let mut res = MmLocateParam::default();
    res.portable_identity = Some(portable_id());
    res.location_area = Some(LocationArea::new(0, 36));
    res.duration = Some(DurationIe::new(
        LockLimits::NoLimits,
        TimeLimits::StandardTimeLimit,
        0,
    ));
    fp.dh.mm_locate_res(fp_mm, res).unwrap();

    let accept = fp.last_frame();
    assert_eq!(accept[0], 0x85);
    assert_eq!(accept[1], 0x55);

    let events = fp.deliver_last_to(&mut pp);
    match events.as_slice() {
        [NwkEvent::Mm(MmEvent::LocateCfm { mm, accept, param })] => {
            assert_eq!(*mm, pp_mm);
            assert!(*accept);
            assert_eq!(param.location_area, Some(LocationArea::new(0, 36)));
            assert!(param.duration.is_some());
        }
        other => panic!("expected LocateCfm, got {:?}", other),
    }
}

#[test]
fn locate_reject_flow() {
    let mut pp = side(Mode::Pp);
    let mut fp = side(Mode::Fp);

    let mut param = MmLocateParam::default();
    param.portable_identity = Some(portable_id());
    pp.dh.mm_locate_req(pp.link, param).unwrap();
    let events = pp.deliver_last_to(&mut fp);
    let fp_mm = match events.as_slice() {
        [NwkEvent::Mm(MmEvent::LocateInd { mm, .. })] => *mm,
        other => panic!("expected LocateInd, got {:?}", other),
    };

    let mut res = MmLocateParam::default();
    res.reject_reason = Some(RejectReason::LocationAreaNotAllowed);
    fp.dh.mm_locate_res(fp_mm, res).unwrap();
    assert_eq!(fp.last_frame()[1], 0x57);

    let events = fp.deliver_last_to(&mut pp);
    assert!(matches!(
        events.as_slice(),
        [NwkEvent::Mm(MmEvent::LocateCfm { accept: false, param, .. })]
            if param.reject_reason == Some(RejectReason::LocationAreaNotAllowed)
    ));
}

#[test]
fn access_rights_accept_defaults_to_park() {
    let mut pp = side(Mode::Pp);
    let mut fp = side(Mode::Fp);

    let mut param = MmAccessRightsParam::default();
    param.portable_identity = Some(portable_id());
    param.terminal_capability = Some(TerminalCapability::default());
    let pp_mm = pp.dh.mm_access_rights_req(pp.link, param).unwrap();
    assert_eq!(pp.last_frame()[1], 0x44);

    let events = pp.deliver_last_to(&mut fp);
    let fp_mm = match events.as_slice() {
        [NwkEvent::Mm(MmEvent::AccessRightsInd { mm, param })] => {
            assert!(param.terminal_capability.is_some());
            *mm
        }
        other => panic!("expected AccessRightsInd, got {:?}", other),
    };

    let mut res = MmAccessRightsParam::default();
    res.portable_identity = Some(portable_id());
    fp.dh.mm_access_rights_res(fp_mm, true, res).unwrap();
    assert_eq!(fp.last_frame()[1], 0x45);

    let events = fp.deliver_last_to(&mut pp);
    match events.as_slice() {
        [NwkEvent::Mm(MmEvent::AccessRightsCfm { mm, accept, param })] => {
            assert_eq!(*mm, pp_mm);
            assert!(*accept);
            // The FP filled its PARK in for the empty identity list.
            assert_eq!(param.fixed_identity.len(), 1);
            assert_eq!(param.fixed_identity.items[0].id_type, FixedIdType::Park);
            assert_eq!(param.fixed_identity.items[0].ari, pari());
        }
        other => panic!("expected AccessRightsCfm, got {:?}", other),
    }
}

#[test]
fn access_rights_reject_carries_reason_and_backoff() {
    let mut pp = side(Mode::Pp);
    let mut fp = side(Mode::Fp);

    let mut param = MmAccessRightsParam::default();
    param.portable_identity = Some(portable_id());
    pp.dh.mm_access_rights_req(pp.link, param).unwrap();
    let events = pp.deliver_last_to(&mut fp);
    let fp_mm = match events.as_slice() {
        [NwkEvent::Mm(MmEvent::AccessRightsInd { mm, .. })] => *mm,
        other => panic!("expected AccessRightsInd, got {:?}", other),
    };

    let mut res = MmAccessRightsParam::default();
    res.reject_reason = Some(RejectReason::IpuiNotAccepted);
    res.duration = Some(DurationIe::new(
        LockLimits::TemporaryUserLimit1,
        TimeLimits::DefinedTimeLimit1,
        30,
    ));
    fp.dh.mm_access_rights_res(fp_mm, false, res).unwrap();
    assert_eq!(fp.last_frame()[1], 0x47);

    let events = fp.deliver_last_to(&mut pp);
    assert!(matches!(
        events.as_slice(),
        [NwkEvent::Mm(MmEvent::AccessRightsCfm { accept: false, param, .. })]
            if param.reject_reason == Some(RejectReason::IpuiNotAccepted)
                && param.duration.map(|d| d.duration) == Some(30)
    ));
}

#[test]
fn temporary_identity_assignment() {
    let mut pp = side(Mode::Pp);
    let mut fp = side(Mode::Fp);

    let mut param = MmIdentityAssignParam::default();
    param.portable_identity = Some(PortableIdentity::Tpui(Tpui::IndividualAssigned(0x12345)));
    let fp_mm = fp.dh.mm_identity_assign_req(fp.link, param).unwrap();
    assert_eq!(fp.last_frame()[1], 0x5c);

    let events = fp.deliver_last_to(&mut pp);
    let pp_mm = match events.as_slice() {
        [NwkEvent::Mm(MmEvent::IdentityAssignInd { mm, param })] => {
            assert_eq!(
                param.portable_identity,
                Some(PortableIdentity::Tpui(Tpui::IndividualAssigned(0x12345)))
            );
            *mm
        }
        other => panic!("expected IdentityAssignInd, got {:?}", other),
    };

    pp.dh
        .mm_identity_assign_res(pp_mm, true, MmIdentityAssignParam::default())
        .unwrap();
    assert_eq!(pp.last_frame()[1], 0x5d);

    let events = pp.deliver_last_to(&mut fp);
    assert!(matches!(
        events.as_slice(),
        [NwkEvent::Mm(MmEvent::IdentityAssignCfm { mm, accept: true, .. })] if *mm == fp_mm
    ));
}

#[test]
fn mm_has_a_single_transaction() {
    let mut pp = side(Mode::Pp);
    let mut param = MmLocateParam::default();
    param.portable_identity = Some(portable_id());
    pp.dh.mm_locate_req(pp.link, param.clone()).unwrap();
    assert!(pp.dh.mm_locate_req(pp.link, param).is_err());
}

#[test]
fn non_opening_mm_message_on_fresh_ti_is_dropped() {
    let mut fp = side(Mode::Fp);
    // LOCATE-ACCEPT cannot open a transaction.
    let before = fp.state.borrow().frames.len();
    let events = fp.dh.receive(fp.link, &[0x05, 0x55]).unwrap();
    assert!(events.is_empty());
    assert_eq!(fp.state.borrow().frames.len(), before);
}
