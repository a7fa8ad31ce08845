// demos/fp-server.rs
//
// A minimal Fixed Part answering calls over a UDP-backed mock DLC.
// NWK frames travel as datagrams on the control port; the LU1 U-plane
// uses the control port + 1 on each side.

use anyhow::{Context, Result};
use clap::Parser;
use network_interface::{NetworkInterface, NetworkInterfaceConfig};
use rs_dect::cc::{CcEvent, MnccAlertParam, MnccConnectParam, MnccReleaseParam};
use rs_dect::handle::{DectHandle, NwkEvent};
use rs_dect::identity::Ari;
use rs_dect::mm::MmEvent;
use rs_dect::transport::{DlcTransport, TimerService, TimerToken, UPlane};
use rs_dect::Mode;
use serde::Deserialize;
use std::cell::RefCell;
use std::io;
use std::net::{SocketAddr, UdpSocket};
use std::rc::Rc;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(author, version, about = "DECT NWK Fixed Part demo", long_about = None)]
struct Args {
    /// Control-plane bind address
    #[arg(short, long, default_value = "127.0.0.1:38550")]
    bind: String,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Bind to the first IPv4 address of this interface instead
    #[arg(short, long)]
    iface: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct FpConfig {
    /// Equipment manufacturer code of the PARI.
    emc: Option<u16>,
    /// Fixed part number of the PARI.
    fpn: Option<u32>,
    bind: Option<String>,
}

struct UdpDlc {
    socket: UdpSocket,
    peer: Rc<RefCell<Option<SocketAddr>>>,
}

impl DlcTransport for UdpDlc {
    fn send_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        let peer = self
            .peer
            .borrow()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "no peer yet"))?;
        self.socket.send_to(frame, peer)?;
        Ok(())
    }

    fn connect_lu1(&mut self) -> io::Result<Box<dyn UPlane>> {
        let peer = self
            .peer
            .borrow()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "no peer yet"))?;
        let local = self.socket.local_addr()?;
        let socket = UdpSocket::bind((local.ip(), local.port() + 1))?;
        socket.set_nonblocking(true)?;
        socket.connect((peer.ip(), peer.port() + 1))?;
        Ok(Box::new(UdpUPlane { socket }))
    }
}

struct UdpUPlane {
    socket: UdpSocket,
}

impl UPlane for UdpUPlane {
    fn send(&mut self, data: &[u8]) -> io::Result<usize> {
        self.socket.send(data)
    }

    fn recv(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.socket.recv(buf)
    }
}

struct LoopTimers {
    deadlines: Rc<RefCell<Vec<(TimerToken, Instant)>>>,
}

impl TimerService for LoopTimers {
    fn start(&mut self, timer: TimerToken, timeout: Duration) {
        self.deadlines
            .borrow_mut()
            .push((timer, Instant::now() + timeout));
    }

    fn stop(&mut self, timer: TimerToken) {
        self.deadlines.borrow_mut().retain(|(t, _)| *t != timer);
    }
}

fn iface_addr(name: &str) -> Result<String> {
    let interfaces = NetworkInterface::show().context("listing network interfaces")?;
    let iface = interfaces
        .iter()
        .find(|i| i.name == name)
        .with_context(|| format!("interface {name} not found"))?;
    for addr in &iface.addr {
        if let network_interface::Addr::V4(v4) = addr {
            return Ok(v4.ip.to_string());
        }
    }
    anyhow::bail!("interface {name} has no IPv4 address")
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config: FpConfig = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {path}"))?;
            serde_yaml_ng::from_str(&raw).context("parsing config")?
        }
        None => FpConfig::default(),
    };

    let bind = match &args.iface {
        Some(name) => {
            let port = args.bind.rsplit(':').next().unwrap_or("38550");
            format!("{}:{}", iface_addr(name)?, port)
        }
        None => config.bind.clone().unwrap_or(args.bind.clone()),
    };

    let pari = Ari::ClassA {
        emc: config.emc.unwrap_or(0x123),
        fpn: config.fpn.unwrap_or(0x4567),
    };

    let socket = UdpSocket::bind(&bind).with_context(|| format!("binding {bind}"))?;
    socket.set_nonblocking(true)?;
    println!("FP listening on {bind}, PARI {:?}", pari);

    let peer = Rc::new(RefCell::new(None));
    let deadlines = Rc::new(RefCell::new(Vec::new()));

    let mut dh = DectHandle::new(
        Mode::Fp,
        pari,
        Box::new(LoopTimers {
            deadlines: deadlines.clone(),
        }),
    );
    let link = dh.add_link(Box::new(UdpDlc {
        socket: socket.try_clone()?,
        peer: peer.clone(),
    }));

    let mut buf = [0u8; 1500];
    let mut active = Vec::new();
    loop {
        let mut events = Vec::new();

        match socket.recv_from(&mut buf) {
            Ok((n, from)) => {
                peer.borrow_mut().replace(from);
                events.extend(dh.receive(link, &buf[..n])?);
            }
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => {}
            Err(e) => return Err(e.into()),
        }

        let now = Instant::now();
        let expired: Vec<TimerToken> = {
            let mut pending = deadlines.borrow_mut();
            let fired = pending
                .iter()
                .filter(|(_, at)| *at <= now)
                .map(|(t, _)| *t)
                .collect();
            pending.retain(|(_, at)| *at > now);
            fired
        };
        for timer in expired {
            events.extend(dh.timer_expired(timer));
        }

        for call in &active {
            events.extend(dh.u_plane_readable(*call)?);
        }

        for event in events {
            match event {
                NwkEvent::Cc(CcEvent::SetupInd { call, param }) => {
                    println!(
                        "incoming call {:?}, called party {:?}",
                        call,
                        param
                            .called_party_number
                            .map(|n| String::from_utf8_lossy(&n.address).into_owned())
                    );
                    dh.mncc_alert_req(call, MnccAlertParam::default())?;
                    dh.mncc_connect_req(call, MnccConnectParam::default())?;
                }
                NwkEvent::Cc(CcEvent::ConnectCfm { call, .. }) => {
                    println!("call {:?} active", call);
                    active.push(call);
                }
                NwkEvent::Cc(CcEvent::ReleaseInd { call, param }) => {
                    println!("call {:?} released ({:?})", call, param.release_reason);
                    dh.mncc_release_res(call, MnccReleaseParam::default())?;
                    active.retain(|c| *c != call);
                }
                NwkEvent::Cc(CcEvent::RejectInd { call, .. }) => {
                    println!("call {:?} rejected", call);
                    active.retain(|c| *c != call);
                }
                NwkEvent::Cc(CcEvent::UPlaneData { call, data }) => {
                    println!("call {:?}: {} U-plane bytes", call, data.len());
                }
                NwkEvent::Mm(MmEvent::AccessRightsInd { mm, param }) => {
                    println!("access rights request from {:?}", param.portable_identity);
                    dh.mm_access_rights_res(mm, true, Default::default())?;
                }
                NwkEvent::Mm(MmEvent::LocateInd { mm, param }) => {
                    println!("locate request from {:?}", param.portable_identity);
                    let mut res = rs_dect::mm::MmLocateParam::default();
                    res.portable_identity = param.portable_identity;
                    res.location_area =
                        Some(rs_dect::ie::location_area::LocationArea::new(0, 1));
                    dh.mm_locate_res(mm, res)?;
                }
                other => println!("event: {:?}", other),
            }
        }

        std::thread::sleep(Duration::from_millis(10));
    }
}
