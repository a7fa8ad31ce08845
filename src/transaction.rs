//! Transaction identifiers and NWK protocol framing.
//!
//! Every S-format message travels inside a two-octet frame: octet 0
//! carries the transaction flag, the transaction value and the protocol
//! discriminator, octet 1 the message type with bit 8 zero. The per-link
//! transaction tables here map `(TI, role)` pairs to their owning
//! protocol entity instance.

use crate::cc::CallId;
use crate::error::NwkError;
use crate::mm::MmId;
use std::collections::HashMap;

/// NWK protocol discriminators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Pd {
    Lce = 0x0,
    Cc = 0x3,
    Ciss = 0x4,
    Mm = 0x5,
    Clms = 0x6,
    Coms = 0x7,
    Unknown = 0xf,
}

impl From<u8> for Pd {
    fn from(v: u8) -> Self {
        match v {
            0x0 => Pd::Lce,
            0x3 => Pd::Cc,
            0x4 => Pd::Ciss,
            0x5 => Pd::Mm,
            0x6 => Pd::Clms,
            0x7 => Pd::Coms,
            _ => Pd::Unknown,
        }
    }
}

/// Maximum concurrent transactions per protocol and link.
pub fn max_transactions(pd: Pd) -> u8 {
    match pd {
        Pd::Cc => 7,
        Pd::Mm => 1,
        _ => 1,
    }
}

/// Side of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Initiator,
    Responder,
}

impl Role {
    pub fn opposite(self) -> Role {
        match self {
            Role::Initiator => Role::Responder,
            Role::Responder => Role::Initiator,
        }
    }
}

/// Close reason handed down to the DLC on transaction release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DdlRelease {
    Normal,
    Partial,
    Abnormal,
}

/// One conversation within a data link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    pub pd: Pd,
    pub ti: u8,
    pub role: Role,
}

impl Transaction {
    pub fn new(pd: Pd, ti: u8, role: Role) -> Self {
        Transaction { pd, ti, role }
    }

    /// Writes the two framing octets ahead of the S-format IE sequence.
    pub fn frame_header(&self, msg_type: u8) -> [u8; 2] {
        let f = match self.role {
            // F is zero in messages sent by the transaction originator.
            Role::Initiator => 0,
            Role::Responder => 0x80,
        };
        [f | (self.ti << 4) | (self.pd as u8), msg_type & 0x7f]
    }
}

/// A parsed frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub pd: Pd,
    pub ti: u8,
    /// Set when the message was sent by the transaction responder.
    pub from_responder: bool,
    pub msg_type: u8,
}

impl FrameHeader {
    /// Parses the two framing octets. Returns the header and the offset of
    /// the S-format body. `None` means the frame is not routable.
    pub fn parse(frame: &[u8]) -> Option<(FrameHeader, usize)> {
        if frame.len() < 2 {
            return None;
        }
        // Bit 8 of the message type octet must be zero.
        if frame[1] & 0x80 != 0 {
            return None;
        }
        Some((
            FrameHeader {
                pd: Pd::from(frame[0] & 0x0f),
                ti: (frame[0] >> 4) & 0x7,
                from_responder: frame[0] & 0x80 != 0,
                msg_type: frame[1] & 0x7f,
            },
            2,
        ))
    }

    /// The role under which the receiver holds this transaction: a message
    /// from the originator addresses our responder-side entry and vice
    /// versa.
    pub fn local_role(&self) -> Role {
        if self.from_responder {
            Role::Initiator
        } else {
            Role::Responder
        }
    }
}

/// Owner of a transaction table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionOwner {
    Call(CallId),
    Mm(MmId),
}

/// Per-link, per-protocol transaction table.
#[derive(Debug, Default)]
pub struct TransactionTable {
    entries: HashMap<(u8, Role), TransactionOwner>,
}

impl TransactionTable {
    pub fn new() -> Self {
        TransactionTable {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, ti: u8, role: Role) -> Option<TransactionOwner> {
        self.entries.get(&(ti, role)).copied()
    }

    /// Allocates the lowest free initiator TI.
    pub fn allocate(&mut self, pd: Pd, owner: TransactionOwner) -> Result<u8, NwkError> {
        for ti in 0..max_transactions(pd) {
            if !self.entries.contains_key(&(ti, Role::Initiator)) {
                self.entries.insert((ti, Role::Initiator), owner);
                return Ok(ti);
            }
        }
        Err(NwkError::NoTransactionAvailable)
    }

    /// Installs a responder-side transaction confirmed from an inbound
    /// opening message.
    pub fn confirm(&mut self, ti: u8, owner: TransactionOwner) {
        self.entries.insert((ti, Role::Responder), owner);
    }

    pub fn remove(&mut self, ti: u8, role: Role) -> Option<TransactionOwner> {
        self.entries.remove(&(ti, role))
    }

    /// Drains every transaction, for data-link teardown.
    pub fn drain(&mut self) -> Vec<TransactionOwner> {
        self.entries.drain().map(|(_, owner)| owner).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_header_round_trip() {
        let t = Transaction::new(Pd::Cc, 3, Role::Initiator);
        let hdr = t.frame_header(0x05);
        assert_eq!(hdr, [0x33, 0x05]);

        let (parsed, off) = FrameHeader::parse(&hdr).unwrap();
        assert_eq!(off, 2);
        assert_eq!(parsed.pd, Pd::Cc);
        assert_eq!(parsed.ti, 3);
        assert!(!parsed.from_responder);
        assert_eq!(parsed.msg_type, 0x05);
        // The receiver holds the peer's transaction as responder.
        assert_eq!(parsed.local_role(), Role::Responder);
    }

    #[test]
    fn test_frame_header_responder_flag() {
        let t = Transaction::new(Pd::Mm, 0, Role::Responder);
        let hdr = t.frame_header(0x45);
        assert_eq!(hdr[0], 0x85);
        let (parsed, _) = FrameHeader::parse(&hdr).unwrap();
        assert!(parsed.from_responder);
        assert_eq!(parsed.local_role(), Role::Initiator);
    }

    #[test]
    fn test_frame_header_rejects_bad_msg_type_octet() {
        assert!(FrameHeader::parse(&[0x33, 0x85]).is_none());
        assert!(FrameHeader::parse(&[0x33]).is_none());
    }

    #[test]
    fn test_ti_allocation_lowest_free() {
        let mut table = TransactionTable::new();
        let owner = TransactionOwner::Call(CallId(1));
        assert_eq!(table.allocate(Pd::Cc, owner).unwrap(), 0);
        assert_eq!(table.allocate(Pd::Cc, owner).unwrap(), 1);
        table.remove(0, Role::Initiator);
        assert_eq!(table.allocate(Pd::Cc, owner).unwrap(), 0);
    }

    #[test]
    fn test_ti_exhaustion() {
        let mut table = TransactionTable::new();
        let owner = TransactionOwner::Mm(MmId(1));
        assert_eq!(table.allocate(Pd::Mm, owner).unwrap(), 0);
        assert!(matches!(
            table.allocate(Pd::Mm, owner),
            Err(NwkError::NoTransactionAvailable)
        ));
    }

    #[test]
    fn test_initiator_and_responder_entries_coexist() {
        let mut table = TransactionTable::new();
        let a = TransactionOwner::Call(CallId(1));
        let b = TransactionOwner::Call(CallId(2));
        let ti = table.allocate(Pd::Cc, a).unwrap();
        table.confirm(ti, b);
        assert_eq!(table.get(ti, Role::Initiator), Some(a));
        assert_eq!(table.get(ti, Role::Responder), Some(b));
    }
}
