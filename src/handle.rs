//! The NWK handle: data links, protocol dispatch, timers and events.
//!
//! [`DectHandle`] owns every per-handle resource. It is single-threaded
//! and never blocks; the application's event loop feeds it inbound frames,
//! timer expiries and U-plane readiness, and drains the [`NwkEvent`]s each
//! entry point returns.

use crate::cc::{Call, CallId, CcEvent};
use crate::error::NwkError;
use crate::identity::Ari;
use crate::mm::{MmEvent, MmId, MmTransaction};
use crate::transaction::{FrameHeader, Pd, TransactionTable};
use crate::transport::{DlcTransport, TimerService, TimerToken};
use crate::Mode;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Identifies one DLC data link registered with the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkId(pub u32);

/// What a running timer belongs to.
#[derive(Debug, Clone, Copy)]
pub(crate) enum TimerOwner {
    CallSetup(CallId),
}

/// An indication produced by the core for the application.
#[derive(Debug)]
pub enum NwkEvent {
    Cc(CcEvent),
    Mm(MmEvent),
}

pub(crate) struct Link {
    pub transport: Box<dyn DlcTransport>,
    pub cc: TransactionTable,
    pub mm: TransactionTable,
}

/// The NWK protocol handle.
pub struct DectHandle {
    pub(crate) mode: Mode,
    pub(crate) pari: Ari,
    pub(crate) links: HashMap<LinkId, Link>,
    next_link: u32,
    pub(crate) calls: HashMap<CallId, Call>,
    next_call: u64,
    pub(crate) mm_transactions: HashMap<MmId, MmTransaction>,
    next_mm: u64,
    pub(crate) timers: HashMap<TimerToken, TimerOwner>,
    next_timer: u64,
    pub(crate) timer_service: Box<dyn TimerService>,
}

impl DectHandle {
    /// Creates a handle operating in `mode` with the given primary access
    /// rights identity.
    pub fn new(mode: Mode, pari: Ari, timer_service: Box<dyn TimerService>) -> Self {
        DectHandle {
            mode,
            pari,
            links: HashMap::new(),
            next_link: 0,
            calls: HashMap::new(),
            next_call: 0,
            mm_transactions: HashMap::new(),
            next_mm: 0,
            timers: HashMap::new(),
            next_timer: 0,
            timer_service,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn pari(&self) -> &Ari {
        &self.pari
    }

    /// Registers an established DLC data link.
    pub fn add_link(&mut self, transport: Box<dyn DlcTransport>) -> LinkId {
        let id = LinkId(self.next_link);
        self.next_link += 1;
        self.links.insert(
            id,
            Link {
                transport,
                cc: TransactionTable::new(),
                mm: TransactionTable::new(),
            },
        );
        debug!(link = id.0, "data link registered");
        id
    }

    /// Number of live calls.
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// Processes one inbound NWK frame from a data link.
    pub fn receive(&mut self, link: LinkId, frame: &[u8]) -> Result<Vec<NwkEvent>, NwkError> {
        let mut events = Vec::new();
        if !self.links.contains_key(&link) {
            return Err(NwkError::UnknownLink);
        }

        let Some((hdr, off)) = FrameHeader::parse(frame) else {
            warn!(link = link.0, "unroutable frame, dropping");
            return Ok(events);
        };
        let body = &frame[off..];

        match hdr.pd {
            Pd::Cc => self.cc_receive(link, hdr, body, &mut events)?,
            Pd::Mm => self.mm_receive(link, hdr, body, &mut events)?,
            other => {
                warn!(link = link.0, pd = ?other, "no protocol registered, dropping");
            }
        }
        Ok(events)
    }

    /// Reports expiry of a timer previously started through the timer
    /// service.
    pub fn timer_expired(&mut self, timer: TimerToken) -> Vec<NwkEvent> {
        let mut events = Vec::new();
        match self.timers.remove(&timer) {
            Some(TimerOwner::CallSetup(call)) => {
                self.cc_setup_timeout(call, &mut events);
            }
            None => {
                debug!(timer = timer.0, "expiry for unknown timer");
            }
        }
        events
    }

    /// Tears down a data link: every transaction on it is shut down and
    /// its entity delivers a synthetic negative indication.
    pub fn link_down(&mut self, link: LinkId) -> Result<Vec<NwkEvent>, NwkError> {
        let mut events = Vec::new();
        let l = self.links.get_mut(&link).ok_or(NwkError::UnknownLink)?;
        let cc_owners = l.cc.drain();
        let mm_owners = l.mm.drain();
        self.links.remove(&link);

        for owner in cc_owners {
            if let crate::transaction::TransactionOwner::Call(id) = owner {
                self.cc_shutdown(id, &mut events);
            }
        }
        for owner in mm_owners {
            if let crate::transaction::TransactionOwner::Mm(id) = owner {
                self.mm_shutdown(id, &mut events);
            }
        }
        Ok(events)
    }

    pub(crate) fn link_mut(&mut self, link: LinkId) -> Result<&mut Link, NwkError> {
        self.links.get_mut(&link).ok_or(NwkError::UnknownLink)
    }

    pub(crate) fn new_call_id(&mut self) -> CallId {
        self.next_call += 1;
        CallId(self.next_call)
    }

    pub(crate) fn new_mm_id(&mut self) -> MmId {
        self.next_mm += 1;
        MmId(self.next_mm)
    }

    pub(crate) fn alloc_timer(&mut self, owner: TimerOwner) -> TimerToken {
        self.next_timer += 1;
        let token = TimerToken(self.next_timer);
        self.timers.insert(token, owner);
        token
    }

    pub(crate) fn stop_timer(&mut self, timer: TimerToken) {
        if self.timers.remove(&timer).is_some() {
            self.timer_service.stop(timer);
        }
    }
}
