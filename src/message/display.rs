//! Human-readable message dumps.
//!
//! Renders parsed messages as JSON for tracing tools and the pcap-reader
//! example. The rendering is positional: one entry per populated slot of
//! the message descriptor.

use crate::message::descriptor::{IeSlot, SlotWriter};
use crate::message::SFormatMessage;
use serde_json::{json, Value};

/// Renders a slot vector against its descriptor.
pub fn slots_to_json(name: &str, desc_names: &[&'static str], slots: &[IeSlot]) -> Value {
    let mut ies = Vec::new();
    for (i, slot) in slots.iter().enumerate() {
        let label = desc_names.get(i).copied().unwrap_or("?");
        match slot {
            IeSlot::Single(Some(value)) => {
                ies.push(json!({ "ie": label, "value": format!("{:?}", value) }));
            }
            IeSlot::Single(None) => {}
            IeSlot::List(list) if !list.is_empty() => {
                let items: Vec<String> =
                    list.items.iter().map(|v| format!("{:?}", v)).collect();
                ies.push(json!({ "ie": label, "list": items }));
            }
            IeSlot::List(_) => {}
        }
    }
    json!({ "message": name, "ies": ies })
}

/// JSON rendering of a typed message.
pub trait MessageDisplay {
    fn to_json(&self) -> Value;

    fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
    }
}

impl<T: SFormatMessage> MessageDisplay for T {
    fn to_json(&self) -> Value {
        let mut writer = SlotWriter::default();
        self.to_slots(&mut writer);
        let slots = writer.finish();

        // Slot labels: one per non-repeat descriptor entry.
        let mut names = Vec::new();
        for entry in Self::DESC.ies {
            if !entry.repeat {
                names.push(ie_type_label(entry.ie_type));
            }
        }
        slots_to_json(Self::DESC.name, &names, &slots)
    }
}

fn ie_type_label(t: crate::ie::IeType) -> &'static str {
    use crate::ie::IeType::*;
    match t {
        RepeatIndicator => "REPEAT-INDICATOR",
        SendingComplete => "SENDING-COMPLETE",
        DelimiterRequest => "DELIMITER-REQUEST",
        UseTpui => "USE-TPUI",
        BasicService => "BASIC-SERVICE",
        ReleaseReason => "RELEASE-REASON",
        Signal => "SIGNAL",
        TimerRestart => "TIMER-RESTART",
        TestHookControl => "TEST-HOOK-CONTROL",
        SingleDisplay => "SINGLE-DISPLAY",
        SingleKeypad => "SINGLE-KEYPAD",
        InfoType => "INFO-TYPE",
        IdentityType => "IDENTITY-TYPE",
        PortableIdentity => "PORTABLE-IDENTITY",
        FixedIdentity => "FIXED-IDENTITY",
        LocationArea => "LOCATION-AREA",
        NwkAssignedIdentity => "NWK-ASSIGNED-IDENTITY",
        AuthType => "AUTH-TYPE",
        AllocationType => "ALLOCATION-TYPE",
        Rand => "RAND",
        Res => "RES",
        Rs => "RS",
        IwuAttributes => "IWU-ATTRIBUTES",
        CallAttributes => "CALL-ATTRIBUTES",
        ServiceChangeInfo => "SERVICE-CHANGE-INFO",
        ConnectionAttributes => "CONNECTION-ATTRIBUTES",
        CipherInfo => "CIPHER-INFO",
        CallIdentity => "CALL-IDENTITY",
        ConnectionIdentity => "CONNECTION-IDENTITY",
        Facility => "FACILITY",
        ProgressIndicator => "PROGRESS-INDICATOR",
        MmsGenericHeader => "MMS-GENERIC-HEADER",
        MmsObjectHeader => "MMS-OBJECT-HEADER",
        MmsExtendedHeader => "MMS-EXTENDED-HEADER",
        TimeDate => "TIME-DATE",
        MultiDisplay => "MULTI-DISPLAY",
        MultiKeypad => "MULTI-KEYPAD",
        FeatureActivate => "FEATURE-ACTIVATE",
        FeatureIndicate => "FEATURE-INDICATE",
        NetworkParameter => "NETWORK-PARAMETER",
        ExtHoIndicator => "EXT-H/O-INDICATOR",
        ZapField => "ZAP-FIELD",
        ServiceClass => "SERVICE-CLASS",
        Key => "KEY",
        RejectReason => "REJECT-REASON",
        SetupCapability => "SETUP-CAPABILITY",
        TerminalCapability => "TERMINAL-CAPABILITY",
        EndToEndCompatibility => "END-TO-END-COMPATIBILITY",
        RateParameters => "RATE-PARAMETERS",
        TransitDelay => "TRANSIT-DELAY",
        WindowSize => "WINDOW-SIZE",
        CallingPartyNumber => "CALLING-PARTY-NUMBER",
        CallingPartyName => "CALLING-PARTY-NAME",
        CalledPartyNumber => "CALLED-PARTY-NUMBER",
        CalledPartySubaddress => "CALLED-PARTY-SUBADDRESS",
        Duration => "DURATION",
        SegmentedInfo => "SEGMENTED-INFO",
        Alphanumeric => "ALPHANUMERIC",
        IwuToIwu => "IWU-TO-IWU",
        ModelIdentifier => "MODEL-IDENTIFIER",
        IwuPacket => "IWU-PACKET",
        EscapeToProprietary => "ESCAPE-TO-PROPRIETARY",
        CodecList => "CODEC-LIST",
        EventsNotification => "EVENTS-NOTIFICATION",
        CallInformation => "CALL-INFORMATION",
        EscapeForExtension => "ESCAPE-FOR-EXTENSION",
        Unknown => "UNKNOWN",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ie::release_reason::ReleaseReason;
    use crate::message::cc_release::CcReleaseMsg;

    #[test]
    fn test_message_to_json() {
        let mut msg = CcReleaseMsg::default();
        msg.release_reason = Some(ReleaseReason::Normal);
        let v = msg.to_json();
        assert_eq!(v["message"], "CC-RELEASE");
        assert_eq!(v["ies"][0]["ie"], "RELEASE-REASON");
    }

    #[test]
    fn test_pretty_output_is_nonempty() {
        let msg = CcReleaseMsg::default();
        assert!(msg.to_json_pretty().contains("CC-RELEASE"));
    }
}
