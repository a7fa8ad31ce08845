// demos/pcap-reader.rs
//
// Reads NWK frames out of a capture file and pretty-prints the decoded
// messages as JSON. Frames are expected either raw or inside
// Ethernet/IPv4/UDP.

use anyhow::{Context, Result};
use clap::Parser;
use pcap_file::pcap::PcapReader;
use rs_dect::message::display::MessageDisplay;
use rs_dect::message::{
    cc_alerting::CcAlertingMsg, cc_call_proc::CcCallProcMsg, cc_connect::CcConnectMsg,
    cc_connect_ack::CcConnectAckMsg, cc_info::CcInfoMsg, cc_notify::CcNotifyMsg,
    cc_release::CcReleaseMsg, cc_release_com::CcReleaseComMsg, cc_setup::CcSetupMsg,
    cc_setup_ack::CcSetupAckMsg, mm_access_rights_accept::MmAccessRightsAcceptMsg,
    mm_access_rights_reject::MmAccessRightsRejectMsg,
    mm_access_rights_request::MmAccessRightsRequestMsg,
    mm_authentication_reject::MmAuthenticationRejectMsg,
    mm_authentication_reply::MmAuthenticationReplyMsg,
    mm_authentication_request::MmAuthenticationRequestMsg, mm_locate_accept::MmLocateAcceptMsg,
    mm_locate_reject::MmLocateRejectMsg, mm_locate_request::MmLocateRequestMsg,
    mm_temporary_identity_assign::MmTemporaryIdentityAssignMsg,
    mm_temporary_identity_assign_ack::MmTemporaryIdentityAssignAckMsg,
    mm_temporary_identity_assign_rej::MmTemporaryIdentityAssignRejMsg, CcMsgType, MmMsgType,
    SFormatMessage,
};
use rs_dect::transaction::{FrameHeader, Pd};
use rs_dect::Mode;
use std::fs::File;

#[derive(Parser, Debug)]
#[command(author, version, about = "Decode DECT NWK frames from a pcap file", long_about = None)]
struct Args {
    /// Path to the pcap file to read
    #[arg(short, long)]
    pcap: String,

    /// Parse in FP receive direction instead of PP
    #[arg(long)]
    fp: bool,
}

fn decode_cc(mode: Mode, msg_type: CcMsgType, body: &[u8]) -> Option<String> {
    match msg_type {
        CcMsgType::Setup => CcSetupMsg::parse(mode, body).ok().map(|m| m.to_json_pretty()),
        CcMsgType::SetupAck => CcSetupAckMsg::parse(mode, body)
            .ok()
            .map(|m| m.to_json_pretty()),
        CcMsgType::CallProc => CcCallProcMsg::parse(mode, body)
            .ok()
            .map(|m| m.to_json_pretty()),
        CcMsgType::Alerting => CcAlertingMsg::parse(mode, body)
            .ok()
            .map(|m| m.to_json_pretty()),
        CcMsgType::Connect => CcConnectMsg::parse(mode, body)
            .ok()
            .map(|m| m.to_json_pretty()),
        CcMsgType::ConnectAck => CcConnectAckMsg::parse(mode, body)
            .ok()
            .map(|m| m.to_json_pretty()),
        CcMsgType::Release => CcReleaseMsg::parse(mode, body)
            .ok()
            .map(|m| m.to_json_pretty()),
        CcMsgType::ReleaseCom => CcReleaseComMsg::parse(mode, body)
            .ok()
            .map(|m| m.to_json_pretty()),
        CcMsgType::Info => CcInfoMsg::parse(mode, body).ok().map(|m| m.to_json_pretty()),
        CcMsgType::Notify => CcNotifyMsg::parse(mode, body)
            .ok()
            .map(|m| m.to_json_pretty()),
        _ => None,
    }
}

fn decode_mm(mode: Mode, msg_type: MmMsgType, body: &[u8]) -> Option<String> {
    match msg_type {
        MmMsgType::AccessRightsRequest => MmAccessRightsRequestMsg::parse(mode, body)
            .ok()
            .map(|m| m.to_json_pretty()),
        MmMsgType::AccessRightsAccept => MmAccessRightsAcceptMsg::parse(mode, body)
            .ok()
            .map(|m| m.to_json_pretty()),
        MmMsgType::AccessRightsReject => MmAccessRightsRejectMsg::parse(mode, body)
            .ok()
            .map(|m| m.to_json_pretty()),
        MmMsgType::LocateRequest => MmLocateRequestMsg::parse(mode, body)
            .ok()
            .map(|m| m.to_json_pretty()),
        MmMsgType::LocateAccept => MmLocateAcceptMsg::parse(mode, body)
            .ok()
            .map(|m| m.to_json_pretty()),
        MmMsgType::LocateReject => MmLocateRejectMsg::parse(mode, body)
            .ok()
            .map(|m| m.to_json_pretty()),
        MmMsgType::AuthenticationRequest => MmAuthenticationRequestMsg::parse(mode, body)
            .ok()
            .map(|m| m.to_json_pretty()),
        MmMsgType::AuthenticationReply => MmAuthenticationReplyMsg::parse(mode, body)
            .ok()
            .map(|m| m.to_json_pretty()),
        MmMsgType::AuthenticationReject => MmAuthenticationRejectMsg::parse(mode, body)
            .ok()
            .map(|m| m.to_json_pretty()),
        MmMsgType::TemporaryIdentityAssign => MmTemporaryIdentityAssignMsg::parse(mode, body)
            .ok()
            .map(|m| m.to_json_pretty()),
        MmMsgType::TemporaryIdentityAssignAck => MmTemporaryIdentityAssignAckMsg::parse(mode, body)
            .ok()
            .map(|m| m.to_json_pretty()),
        MmMsgType::TemporaryIdentityAssignRej => MmTemporaryIdentityAssignRejMsg::parse(mode, body)
            .ok()
            .map(|m| m.to_json_pretty()),
        _ => None,
    }
}

/// Tries the frame at a handful of encapsulation offsets: raw, and
/// Ethernet + IPv4 + UDP.
fn decode_frame(mode: Mode, data: &[u8]) -> Option<String> {
    for offset in [0usize, 42] {
        let Some(frame) = data.get(offset..) else {
            continue;
        };
        let Some((hdr, body_off)) = FrameHeader::parse(frame) else {
            continue;
        };
        let body = &frame[body_off..];
        let decoded = match hdr.pd {
            Pd::Cc => decode_cc(mode, CcMsgType::from(hdr.msg_type), body),
            Pd::Mm => decode_mm(mode, MmMsgType::from(hdr.msg_type), body),
            _ => None,
        };
        if let Some(text) = decoded {
            return Some(format!(
                "TI {} {} PD {:?}\n{}",
                hdr.ti,
                if hdr.from_responder { "F" } else { "I" },
                hdr.pd,
                text
            ));
        }
    }
    None
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mode = if args.fp { Mode::Fp } else { Mode::Pp };

    let file = File::open(&args.pcap).with_context(|| format!("opening {}", args.pcap))?;
    let mut reader = PcapReader::new(file).context("reading pcap header")?;

    let mut total = 0usize;
    let mut decoded = 0usize;
    while let Some(packet) = reader.next_packet() {
        let packet = packet.context("reading packet")?;
        total += 1;
        match decode_frame(mode, &packet.data) {
            Some(text) => {
                decoded += 1;
                println!("--- packet {total} ---");
                println!("{text}");
            }
            None => println!("--- packet {total}: not a NWK frame ---"),
        }
    }

    println!("{decoded}/{total} packets decoded");
    Ok(())
}
