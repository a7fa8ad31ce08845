//! Events Notification Information Element.

use crate::error::SfmtError;
use crate::ie::{IeType, OCTET_GROUP_END};

pub const EVENTS_MAX: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum EventType {
    MessageWaiting = 0x0,
    MissedCall = 0x1,
    WebContent = 0x2,
    ListChangeIndication = 0x3,
    Unknown,
}

impl From<u8> for EventType {
    fn from(v: u8) -> Self {
        match v {
            0x0 => EventType::MessageWaiting,
            0x1 => EventType::MissedCall,
            0x2 => EventType::WebContent,
            0x3 => EventType::ListChangeIndication,
            _ => EventType::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventNotify {
    pub event_type: EventType,
    pub subtype: u8,
    pub multiplicity: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventsNotification {
    pub events: Vec<EventNotify>,
}

impl EventsNotification {
    pub fn new(events: Vec<EventNotify>) -> Self {
        EventsNotification { events }
    }

    pub fn marshal(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(3 * self.events.len());
        for ev in &self.events {
            out.push(ev.event_type as u8);
            out.push(ev.subtype | OCTET_GROUP_END);
            out.push(ev.multiplicity | OCTET_GROUP_END);
        }
        out
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, SfmtError> {
        if data.len() % 3 != 0 {
            return Err(SfmtError::InvalidIeContents {
                ie_type: IeType::EventsNotification,
            });
        }
        let mut events = Vec::new();
        for chunk in data.chunks_exact(3) {
            events.push(EventNotify {
                event_type: EventType::from(chunk[0]),
                subtype: chunk[1] & !OCTET_GROUP_END,
                multiplicity: chunk[2] & !OCTET_GROUP_END,
            });
            if events.len() == EVENTS_MAX {
                break;
            }
        }
        Ok(EventsNotification { events })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_notification_round_trip() {
        let en = EventsNotification::new(vec![
            EventNotify {
                event_type: EventType::MissedCall,
                subtype: 0,
                multiplicity: 2,
            },
            EventNotify {
                event_type: EventType::MessageWaiting,
                subtype: 1,
                multiplicity: 1,
            },
        ]);
        assert_eq!(EventsNotification::unmarshal(&en.marshal()).unwrap(), en);
    }

    #[test]
    fn test_events_notification_bad_length() {
        assert!(EventsNotification::unmarshal(&[0x1, 0x80]).is_err());
    }
}
