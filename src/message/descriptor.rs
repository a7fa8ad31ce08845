//! Message descriptor tables and the parse/build engine.
//!
//! Each message owns an ordered table of [`IeDesc`] entries giving, per IE
//! kind, its status in the FP=>PP and PP=>FP directions and whether it is a
//! repeatable member bound to a preceding REPEAT-INDICATOR entry. The
//! tables are the single source of truth for per-message grammar; the
//! engine here runs the two traversals against them.

use crate::error::SfmtError;
use crate::ie::repeat_indicator::ListType;
use crate::ie::value::{FromIeValue, IeList, IeValue};
use crate::ie::{Ie, IeType};
use crate::Mode;
use tracing::{debug, trace};

/// Per-direction status of a descriptor entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IeStatus {
    /// The IE must not appear in this direction.
    None,
    Optional,
    Mandatory,
}

/// Shorthands used by the descriptor tables.
pub const IE_MANDATORY: IeStatus = IeStatus::Mandatory;
pub const IE_OPTIONAL: IeStatus = IeStatus::Optional;
pub const IE_NONE: IeStatus = IeStatus::None;

/// One entry of a message descriptor table.
#[derive(Debug, Clone, Copy)]
pub struct IeDesc {
    pub ie_type: IeType,
    /// Status in the FP to PP direction.
    pub fp_pp: IeStatus,
    /// Status in the PP to FP direction.
    pub pp_fp: IeStatus,
    /// Entry consumes a list bound to the preceding REPEAT-INDICATOR.
    pub repeat: bool,
}

impl IeDesc {
    pub const fn new(ie_type: IeType, fp_pp: IeStatus, pp_fp: IeStatus) -> Self {
        IeDesc {
            ie_type,
            fp_pp,
            pp_fp,
            repeat: false,
        }
    }

    pub const fn repeated(ie_type: IeType, fp_pp: IeStatus, pp_fp: IeStatus) -> Self {
        IeDesc {
            ie_type,
            fp_pp,
            pp_fp,
            repeat: true,
        }
    }

    fn rx_status(&self, mode: Mode) -> IeStatus {
        match mode {
            Mode::Fp => self.pp_fp,
            Mode::Pp => self.fp_pp,
        }
    }

    fn tx_status(&self, mode: Mode) -> IeStatus {
        match mode {
            Mode::Fp => self.fp_pp,
            Mode::Pp => self.pp_fp,
        }
    }
}

/// A message descriptor: ordered IE table plus a name for tracing.
#[derive(Debug)]
pub struct MsgDesc {
    pub name: &'static str,
    pub ies: &'static [IeDesc],
}

/// One positional IE slot of a parsed or to-be-built message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IeSlot {
    Single(Option<IeValue>),
    List(IeList),
}

/// SINGLE-DISPLAY / SINGLE-KEYPAD entries also accept the MULTI forms.
fn display_keypad_tolerance(expected: IeType, got: IeType) -> bool {
    matches!(
        (expected, got),
        (IeType::SingleDisplay, IeType::MultiDisplay)
            | (IeType::MultiDisplay, IeType::SingleDisplay)
            | (IeType::SingleKeypad, IeType::MultiKeypad)
            | (IeType::MultiKeypad, IeType::SingleKeypad)
    )
}

/// Builds the empty slot vector for a descriptor plus the entry-to-slot
/// index map (repeat entries share the slot of their REPEAT-INDICATOR).
fn make_slots(desc: &MsgDesc) -> (Vec<IeSlot>, Vec<usize>) {
    let mut slots = Vec::new();
    let mut map = Vec::with_capacity(desc.ies.len());
    for entry in desc.ies {
        if entry.repeat {
            debug_assert!(!slots.is_empty());
            map.push(slots.len().saturating_sub(1));
        } else if entry.ie_type == IeType::RepeatIndicator {
            slots.push(IeSlot::List(IeList::default()));
            map.push(slots.len() - 1);
        } else {
            slots.push(IeSlot::Single(None));
            map.push(slots.len() - 1);
        }
    }
    (slots, map)
}

/// Parse traversal: consumes the S-format IE sequence in `buf` against the
/// descriptor and returns the filled slot vector.
pub fn parse_message(mode: Mode, desc: &MsgDesc, buf: &[u8]) -> Result<Vec<IeSlot>, SfmtError> {
    trace!(message = desc.name, len = buf.len(), "parse");
    let (mut slots, map) = make_slots(desc);
    let mut di = 0;
    let mut pos = 0;

    'outer: while pos < buf.len() {
        let (ie, n) = Ie::unmarshal(&buf[pos..])?;

        // Locate a matching entry, applying the per-entry policy to
        // everything skipped on the way.
        loop {
            let Some(entry) = desc.ies.get(di) else {
                // Table exhausted: trailing IEs are ignored.
                break 'outer;
            };
            let matched = entry.ie_type == ie.ie_type;
            match entry.rx_status(mode) {
                IeStatus::Mandatory => {
                    if matched {
                        break;
                    }
                    return Err(SfmtError::MandatoryIeMissing {
                        ie_type: entry.ie_type,
                    });
                }
                IeStatus::None => {
                    if matched {
                        return Err(SfmtError::InvalidIeContents { ie_type: ie.ie_type });
                    }
                    di += 1;
                }
                IeStatus::Optional => {
                    if matched || display_keypad_tolerance(entry.ie_type, ie.ie_type) {
                        break;
                    }
                    di += 1;
                }
            }
        }
        let entry = &desc.ies[di];

        // Empty variable-length IEs are consumed but not stored.
        if !ie.ie_type.is_fixed_length() && ie.is_empty() {
            if entry.rx_status(mode) == IeStatus::Mandatory {
                return Err(SfmtError::MandatoryIeMissing {
                    ie_type: entry.ie_type,
                });
            }
            trace!(ie = ?ie.ie_type, "empty IE");
            pos += n;
            di += 1;
            continue;
        }

        match IeValue::parse(&ie) {
            Ok(value) => {
                trace!(ie = ?ie.ie_type, ?value, "parsed IE");
                match &mut slots[map[di]] {
                    IeSlot::List(list) => {
                        if let IeValue::RepeatIndicator(kind) = value {
                            list.kind = kind;
                        } else {
                            list.items.push(value);
                        }
                    }
                    IeSlot::Single(slot) => *slot = Some(value),
                }
            }
            Err(e) => {
                // Corrupt optional IEs are ignored.
                if entry.rx_status(mode) == IeStatus::Mandatory {
                    return Err(SfmtError::MandatoryIeError {
                        ie_type: entry.ie_type,
                    });
                }
                debug!(ie = ?ie.ie_type, error = %e, "ignoring corrupt optional IE");
            }
        }

        pos += n;
        if entry.repeat {
            // Stay on a repeat entry while further members of the same
            // kind follow on the wire.
            let more = Ie::unmarshal(&buf[pos..])
                .map(|(next, _)| next.ie_type == entry.ie_type)
                .unwrap_or(false);
            if !more {
                di += 1;
            }
        } else {
            di += 1;
        }
    }

    // Everything the buffer did not reach must be allowed to be absent.
    for entry in &desc.ies[di.min(desc.ies.len())..] {
        if entry.rx_status(mode) == IeStatus::Mandatory {
            return Err(SfmtError::MandatoryIeMissing {
                ie_type: entry.ie_type,
            });
        }
    }

    Ok(slots)
}

fn emit(out: &mut Vec<u8>, ie: &Ie) {
    out.extend_from_slice(&ie.marshal());
}

/// Build traversal: walks the descriptor in order and appends the encoded
/// IEs to `out`.
pub fn build_message(
    mode: Mode,
    desc: &MsgDesc,
    slots: &[IeSlot],
    out: &mut Vec<u8>,
) -> Result<(), SfmtError> {
    trace!(message = desc.name, "build");
    let (_, map) = make_slots(desc);
    let mut i = 0;

    while i < desc.ies.len() {
        let entry = &desc.ies[i];

        if entry.ie_type == IeType::RepeatIndicator {
            let member = desc.ies.get(i + 1).filter(|m| m.repeat).ok_or(
                SfmtError::InvalidIe {
                    ie_type: IeType::RepeatIndicator,
                },
            )?;
            let IeSlot::List(list) = &slots[map[i]] else {
                return Err(SfmtError::InvalidIe {
                    ie_type: IeType::RepeatIndicator,
                });
            };

            if !list.items.is_empty() {
                // The indicator is emitted only for lists of two or more.
                if list.items.len() >= 2 {
                    if entry.tx_status(mode) == IeStatus::None {
                        return Err(SfmtError::InvalidIe {
                            ie_type: entry.ie_type,
                        });
                    }
                    emit(out, &IeValue::RepeatIndicator(list.kind).build(entry.ie_type)?);
                }
                if member.tx_status(mode) == IeStatus::None {
                    return Err(SfmtError::InvalidIe {
                        ie_type: member.ie_type,
                    });
                }
                for item in &list.items {
                    emit(out, &item.build(member.ie_type)?);
                }
            } else if member.tx_status(mode) == IeStatus::Mandatory {
                return Err(SfmtError::MandatoryIeMissing {
                    ie_type: member.ie_type,
                });
            }
            i += 2;
            continue;
        }

        match &slots[map[i]] {
            IeSlot::Single(Some(value)) => match entry.tx_status(mode) {
                IeStatus::None => {
                    debug!(ie = ?entry.ie_type, "IE not allowed in this direction");
                    return Err(SfmtError::InvalidIe {
                        ie_type: entry.ie_type,
                    });
                }
                _ => emit(out, &value.build(entry.ie_type)?),
            },
            IeSlot::Single(None) => {
                if entry.tx_status(mode) == IeStatus::Mandatory {
                    return Err(SfmtError::MandatoryIeMissing {
                        ie_type: entry.ie_type,
                    });
                }
            }
            IeSlot::List(_) => {
                return Err(SfmtError::InvalidIe {
                    ie_type: entry.ie_type,
                })
            }
        }
        i += 1;
    }

    Ok(())
}

/// Positional reader consuming the slots of a parsed message in
/// descriptor order.
pub struct SlotReader {
    inner: std::vec::IntoIter<IeSlot>,
}

impl SlotReader {
    pub fn new(slots: Vec<IeSlot>) -> Self {
        SlotReader {
            inner: slots.into_iter(),
        }
    }

    /// Takes the next single-value slot.
    pub fn take<T: FromIeValue>(&mut self) -> Option<T> {
        match self.inner.next() {
            Some(IeSlot::Single(v)) => v.and_then(T::from_value),
            _ => None,
        }
    }

    /// Takes the next list slot.
    pub fn take_list<T: FromIeValue>(&mut self) -> IeList<T> {
        match self.inner.next() {
            Some(IeSlot::List(list)) => list.into_typed(),
            _ => IeList::default(),
        }
    }
}

/// Positional writer producing slots in descriptor order.
#[derive(Default)]
pub struct SlotWriter {
    slots: Vec<IeSlot>,
}

impl SlotWriter {
    pub fn push<T: Into<IeValue>>(&mut self, value: Option<T>) {
        self.slots.push(IeSlot::Single(value.map(Into::into)));
    }

    pub fn push_list<T: Into<IeValue>>(&mut self, list: IeList<T>) {
        self.slots.push(IeSlot::List(list.into_raw()));
    }

    pub fn finish(self) -> Vec<IeSlot> {
        self.slots
    }
}

/// Builds a REPEAT-INDICATOR slot list in one step.
pub fn list_of<T>(items: Vec<T>) -> IeList<T> {
    IeList::new(ListType::Normal, items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ie::facility::Facility;
    use crate::ie::release_reason::ReleaseReason;
    use crate::ie::signal::Signal;

    const TEST_DESC: MsgDesc = MsgDesc {
        name: "test",
        ies: &[
            IeDesc::new(IeType::ReleaseReason, IeStatus::Mandatory, IeStatus::Optional),
            IeDesc::new(IeType::RepeatIndicator, IeStatus::Optional, IeStatus::Optional),
            IeDesc::repeated(IeType::Facility, IeStatus::Optional, IeStatus::Optional),
            IeDesc::new(IeType::Signal, IeStatus::Optional, IeStatus::None),
            IeDesc::new(IeType::IwuToIwu, IeStatus::Optional, IeStatus::Optional),
        ],
    };

    fn build_fp(slots: &[IeSlot]) -> Result<Vec<u8>, SfmtError> {
        let mut out = Vec::new();
        build_message(Mode::Fp, &TEST_DESC, slots, &mut out)?;
        Ok(out)
    }

    #[test]
    fn test_parse_build_round_trip() {
        let mut w = SlotWriter::default();
        w.push(Some(ReleaseReason::Normal));
        w.push_list(list_of(vec![
            Facility::new(0x11, vec![1]),
            Facility::new(0x11, vec![2]),
        ]));
        w.push(Some(Signal::new(0x40)));
        w.push(None::<IeValue>);
        let slots = w.finish();

        let wire = build_fp(&slots).unwrap();
        // FP built it, so the PP receive direction parses it.
        let parsed = parse_message(Mode::Pp, &TEST_DESC, &wire).unwrap();
        assert_eq!(parsed, slots);
    }

    #[test]
    fn test_repeat_indicator_emitted_for_two_members() {
        let mut w = SlotWriter::default();
        w.push(Some(ReleaseReason::Normal));
        w.push_list(list_of(vec![
            Facility::new(0x11, vec![1]),
            Facility::new(0x11, vec![2]),
        ]));
        w.push(None::<Signal>);
        w.push(None::<IeValue>);

        let wire = build_fp(&w.finish()).unwrap();
        // RELEASE-REASON, then the indicator ahead of the two members.
        assert_eq!(wire[2], 0xd1);
    }

    #[test]
    fn test_repeat_indicator_suppressed_for_one_member() {
        let mut w = SlotWriter::default();
        w.push(Some(ReleaseReason::Normal));
        w.push_list(list_of(vec![Facility::new(0x11, vec![1])]));
        w.push(None::<Signal>);
        w.push(None::<IeValue>);

        let wire = build_fp(&w.finish()).unwrap();
        assert_eq!(wire[2], IeType::Facility as u8);
    }

    #[test]
    fn test_mandatory_missing_on_build() {
        let mut w = SlotWriter::default();
        w.push(None::<ReleaseReason>);
        w.push_list(IeList::<IeValue>::default());
        w.push(None::<Signal>);
        w.push(None::<IeValue>);

        assert_eq!(
            build_fp(&w.finish()),
            Err(SfmtError::MandatoryIeMissing {
                ie_type: IeType::ReleaseReason
            })
        );
    }

    #[test]
    fn test_invalid_ie_direction_on_build() {
        // SIGNAL is FP=>PP only; building it in PP mode must fail.
        let mut w = SlotWriter::default();
        w.push(Some(ReleaseReason::Normal));
        w.push_list(IeList::<IeValue>::default());
        w.push(Some(Signal::new(1)));
        w.push(None::<IeValue>);

        let mut out = Vec::new();
        assert_eq!(
            build_message(Mode::Pp, &TEST_DESC, &w.finish(), &mut out),
            Err(SfmtError::InvalidIe {
                ie_type: IeType::Signal
            })
        );
    }

    #[test]
    fn test_parse_mandatory_missing() {
        // PP receives in the FP=>PP direction where RELEASE-REASON is
        // mandatory; the wire starts with SIGNAL instead.
        let wire = Ie::new(IeType::Signal, vec![0x01]).marshal();
        assert_eq!(
            parse_message(Mode::Pp, &TEST_DESC, &wire),
            Err(SfmtError::MandatoryIeMissing {
                ie_type: IeType::ReleaseReason
            })
        );
    }

    #[test]
    fn test_parse_rejects_ie_with_none_status() {
        // SIGNAL is marked None in the PP=>FP direction.
        let mut wire = Ie::new(IeType::ReleaseReason, vec![0x00]).marshal();
        wire.extend_from_slice(&Ie::new(IeType::Signal, vec![0x01]).marshal());
        assert!(parse_message(Mode::Fp, &TEST_DESC, &wire).is_err());
    }

    #[test]
    fn test_parse_empty_variable_length_not_stored() {
        let mut wire = Ie::new(IeType::ReleaseReason, vec![0x00]).marshal();
        wire.extend_from_slice(&[IeType::IwuToIwu as u8, 0x00]);
        let slots = parse_message(Mode::Pp, &TEST_DESC, &wire).unwrap();
        assert_eq!(slots[3], IeSlot::Single(None));
    }

    #[test]
    fn test_parse_corrupt_optional_skipped() {
        let mut wire = Ie::new(IeType::ReleaseReason, vec![0x00]).marshal();
        // IWU-TO-IWU whose first content octet lacks the group-end bit.
        wire.extend_from_slice(&Ie::new(IeType::IwuToIwu, vec![0x03, 0xaa]).marshal());
        let slots = parse_message(Mode::Pp, &TEST_DESC, &wire).unwrap();
        assert_eq!(slots[3], IeSlot::Single(None));
    }

    #[test]
    fn test_parse_trailing_ies_ignored() {
        let mut wire = Ie::new(IeType::ReleaseReason, vec![0x00]).marshal();
        wire.extend_from_slice(&Ie::new(IeType::IwuToIwu, vec![0x80, 1]).marshal());
        // An IE past the end of the table.
        wire.extend_from_slice(&Ie::new(IeType::CodecList, vec![0x90]).marshal());
        assert!(parse_message(Mode::Pp, &TEST_DESC, &wire).is_ok());
    }
}
