//! Shared test fixtures: an in-memory DLC transport and a recording
//! timer service.
#![allow(dead_code)]

use rs_dect::transport::{DlcTransport, TimerService, TimerToken, UPlane};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;
use std::time::Duration;

#[derive(Default)]
pub struct MockState {
    pub frames: Vec<Vec<u8>>,
    pub lu1_connects: usize,
}

pub struct MockTransport {
    pub state: Rc<RefCell<MockState>>,
    pub u_plane_rx: Rc<RefCell<VecDeque<Vec<u8>>>>,
    pub u_plane_tx: Rc<RefCell<Vec<Vec<u8>>>>,
}

impl MockTransport {
    pub fn new() -> (
        Box<dyn DlcTransport>,
        Rc<RefCell<MockState>>,
        Rc<RefCell<VecDeque<Vec<u8>>>>,
        Rc<RefCell<Vec<Vec<u8>>>>,
    ) {
        let state = Rc::new(RefCell::new(MockState::default()));
        let rx = Rc::new(RefCell::new(VecDeque::new()));
        let tx = Rc::new(RefCell::new(Vec::new()));
        let transport = MockTransport {
            state: state.clone(),
            u_plane_rx: rx.clone(),
            u_plane_tx: tx.clone(),
        };
        (Box::new(transport), state, rx, tx)
    }
}

impl DlcTransport for MockTransport {
    fn send_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        self.state.borrow_mut().frames.push(frame.to_vec());
        Ok(())
    }

    fn connect_lu1(&mut self) -> io::Result<Box<dyn UPlane>> {
        self.state.borrow_mut().lu1_connects += 1;
        Ok(Box::new(MockUPlane {
            rx: self.u_plane_rx.clone(),
            tx: self.u_plane_tx.clone(),
        }))
    }
}

pub struct MockUPlane {
    rx: Rc<RefCell<VecDeque<Vec<u8>>>>,
    tx: Rc<RefCell<Vec<Vec<u8>>>>,
}

impl UPlane for MockUPlane {
    fn send(&mut self, data: &[u8]) -> io::Result<usize> {
        self.tx.borrow_mut().push(data.to_vec());
        Ok(data.len())
    }

    fn recv(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.rx.borrow_mut().pop_front() {
            Some(data) => {
                let n = data.len().min(buf.len());
                buf[..n].copy_from_slice(&data[..n]);
                Ok(n)
            }
            None => Err(io::Error::new(io::ErrorKind::WouldBlock, "no data")),
        }
    }
}

#[derive(Default)]
pub struct TimerLog {
    pub started: Vec<(TimerToken, Duration)>,
    pub stopped: Vec<TimerToken>,
}

pub struct MockTimers {
    pub log: Rc<RefCell<TimerLog>>,
}

impl MockTimers {
    pub fn new() -> (Box<dyn TimerService>, Rc<RefCell<TimerLog>>) {
        let log = Rc::new(RefCell::new(TimerLog::default()));
        (Box::new(MockTimers { log: log.clone() }), log)
    }
}

impl TimerService for MockTimers {
    fn start(&mut self, timer: TimerToken, timeout: Duration) {
        self.log.borrow_mut().started.push((timer, timeout));
    }

    fn stop(&mut self, timer: TimerToken) {
        self.log.borrow_mut().stopped.push(timer);
    }
}
