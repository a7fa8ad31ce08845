// demos/pp-client.rs
//
// A minimal Portable Part placing one call against the fp-server demo.

use anyhow::{Context, Result};
use clap::Parser;
use rs_dect::cc::{CcEvent, MnccConnectParam, MnccReleaseParam, MnccSetupParam};
use rs_dect::handle::{DectHandle, NwkEvent};
use rs_dect::identity::{Ari, Ipei, Ipui};
use rs_dect::ie::basic_service::{BasicService, CallClass, ServiceType};
use rs_dect::ie::called_party_number::CalledPartyNumber;
use rs_dect::ie::calling_party_number::{NumberType, Npi};
use rs_dect::transport::{DlcTransport, TimerService, TimerToken, UPlane};
use rs_dect::Mode;
use std::cell::RefCell;
use std::io;
use std::net::UdpSocket;
use std::rc::Rc;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(author, version, about = "DECT NWK Portable Part demo", long_about = None)]
struct Args {
    /// Fixed Part control-plane address
    #[arg(short, long, default_value = "127.0.0.1:38550")]
    server: String,

    /// Local control-plane bind address
    #[arg(short, long, default_value = "127.0.0.1:38560")]
    bind: String,

    /// Called party number to dial
    #[arg(short, long, default_value = "5551234")]
    number: String,

    /// IPEI equipment manufacturer code
    #[arg(long, default_value_t = 0x123)]
    emc: u16,

    /// IPEI serial number
    #[arg(long, default_value_t = 0x456789)]
    psn: u32,

    /// Hang up after this many seconds of active call
    #[arg(long, default_value_t = 5)]
    talk_time: u64,
}

struct UdpDlc {
    socket: UdpSocket,
    server: std::net::SocketAddr,
}

impl DlcTransport for UdpDlc {
    fn send_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        self.socket.send_to(frame, self.server)?;
        Ok(())
    }

    fn connect_lu1(&mut self) -> io::Result<Box<dyn UPlane>> {
        let local = self.socket.local_addr()?;
        let socket = UdpSocket::bind((local.ip(), local.port() + 1))?;
        socket.set_nonblocking(true)?;
        socket.connect((self.server.ip(), self.server.port() + 1))?;
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

fn main() -> Result<()> {
    let args = Args::parse();

    let server = args
        .server
        .parse()
        .with_context(|| format!("parsing server address {}", args.server))?;
    let socket = UdpSocket::bind(&args.bind)
        .with_context(|| format!("binding {}", args.bind))?;
    socket.set_nonblocking(true)?;

    let deadlines = Rc::new(RefCell::new(Vec::new()));
    let pari = Ari::ClassA {
        emc: args.emc,
        fpn: 0,
    };
    let mut dh = DectHandle::new(
        Mode::Pp,
        pari,
        Box::new(LoopTimers {
            deadlines: deadlines.clone(),
        }),
    );
    let link = dh.add_link(Box::new(UdpDlc {
        socket: socket.try_clone()?,
        server,
    }));

    let ipui = Ipui::N(Ipei::new(args.emc, args.psn));
    let mut param = MnccSetupParam::default();
    param.basic_service = Some(BasicService::new(
        CallClass::Normal,
        ServiceType::BasicSpeechDefault,
    ));
    param.called_party_number = Some(CalledPartyNumber::new(
        NumberType::Unknown,
        Npi::Unknown,
        args.number.clone().into_bytes(),
    ));
    let call = dh.mncc_setup_req(link, &ipui, param)?;
    println!("dialing {} as call {:?}", args.number, call);

    let mut buf = [0u8; 1500];
    let mut hangup_at: Option<Instant> = None;
    loop {
        let mut events = Vec::new();

        match socket.recv_from(&mut buf) {
            Ok((n, _)) => events.extend(dh.receive(link, &buf[..n])?),
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
        events.extend(dh.u_plane_readable(call).unwrap_or_default());

        for event in events {
            match event {
                NwkEvent::Cc(CcEvent::SetupAckInd { .. })
                | NwkEvent::Cc(CcEvent::CallProcInd { .. }) => println!("call proceeding"),
                NwkEvent::Cc(CcEvent::AlertInd { .. }) => println!("remote party alerted"),
                NwkEvent::Cc(CcEvent::ConnectInd { .. }) => {
                    dh.mncc_connect_res(call, MnccConnectParam::default())?;
                    println!("call active");
                    dh.dl_u_data_req(call, b"hello over LU1")?;
                    hangup_at = Some(Instant::now() + Duration::from_secs(args.talk_time));
                }
                NwkEvent::Cc(CcEvent::ReleaseInd { .. }) => {
                    dh.mncc_release_res(call, MnccReleaseParam::default())?;
                    println!("released by peer");
                    return Ok(());
                }
                NwkEvent::Cc(CcEvent::ReleaseCfm { .. }) => {
                    println!("release complete");
                    return Ok(());
                }
                NwkEvent::Cc(CcEvent::RejectInd { param, .. }) => {
                    println!("call rejected ({:?})", param.release_reason);
                    return Ok(());
                }
                NwkEvent::Cc(CcEvent::UPlaneData { data, .. }) => {
                    println!("{} U-plane bytes", data.len());
                }
                other => println!("event: {:?}", other),
            }
        }

        if let Some(at) = hangup_at {
            if Instant::now() >= at {
                println!("hanging up");
                dh.mncc_release_req(call, MnccReleaseParam::default())?;
                hangup_at = None;
            }
        }

        std::thread::sleep(Duration::from_millis(10));
    }
}
