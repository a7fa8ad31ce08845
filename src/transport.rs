//! Collaborator traits: DLC transport, U-plane bearer and timer service.
//!
//! The core never performs I/O itself. Applications hand in a
//! [`DlcTransport`] per data link and a [`TimerService`]; both are driven
//! from the application's event loop. All sockets behind these traits are
//! expected to be non-blocking.

use std::io;
use std::time::Duration;

/// A U-plane (LU1) bearer socket.
pub trait UPlane {
    /// Best-effort non-blocking send. Short writes are accepted.
    fn send(&mut self, data: &[u8]) -> io::Result<usize>;

    /// One-shot receive for a readiness event.
    fn recv(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

/// One DLC data link endpoint.
pub trait DlcTransport {
    /// Sends one framed NWK message.
    fn send_frame(&mut self, frame: &[u8]) -> io::Result<()>;

    /// Opens the companion LU1 stream socket for the U-plane and connects
    /// it to the link endpoint.
    fn connect_lu1(&mut self) -> io::Result<Box<dyn UPlane>>;
}

/// Opaque timer handle owned by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(pub u64);

/// External timer service. Expiry is reported back through
/// [`DectHandle::timer_expired`](crate::handle::DectHandle::timer_expired).
pub trait TimerService {
    fn start(&mut self, timer: TimerToken, timeout: Duration);
    fn stop(&mut self, timer: TimerToken);
}
