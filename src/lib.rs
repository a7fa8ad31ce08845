//! # rs-dect
//!
//! A user-space implementation of the Network (NWK) layer of the DECT
//! air-interface signaling stack as defined by ETSI EN 300 175-5/-6.
//!
//! The crate provides the S-format message codec (Information Elements and
//! messages) together with the NWK protocol entities running on top of DLC
//! link endpoints:
//!
//! - [`ie`] - Information Elements: typed values and the S-format wire codec
//! - [`message`] - per-message IE descriptor tables, typed messages and the
//!   descriptor engine driving parse and build
//! - [`identity`] - ARI / IPUI / TPUI / PARK identity codecs (EN 300 175-6)
//! - [`transaction`] - transaction identifiers and protocol framing
//! - [`cc`] / [`mm`] - the Call Control and Mobility Management entities
//! - [`handle`] - the [`DectHandle`](handle::DectHandle) tying links,
//!   transactions and timers together
//!
//! The core is sans-I/O: sockets and timers are reached through the traits
//! in [`transport`], and every entry point returns the indications it
//! produced as a list of events instead of calling back into application
//! code.
//!
//! ## Quick start
//!
//! ```no_run
//! use rs_dect::handle::{DectHandle, NwkEvent};
//! use rs_dect::cc::MnccSetupParam;
//! use rs_dect::identity::{Ari, Ipei, Ipui};
//! use rs_dect::ie::basic_service::{BasicService, CallClass, ServiceType};
//! use rs_dect::Mode;
//! # fn transport() -> Box<dyn rs_dect::transport::DlcTransport> { unimplemented!() }
//! # fn timers() -> Box<dyn rs_dect::transport::TimerService> { unimplemented!() }
//!
//! let pari = Ari::ClassA { emc: 0x0123, fpn: 0x4567 };
//! let mut dh = DectHandle::new(Mode::Pp, pari, timers());
//! let link = dh.add_link(transport());
//!
//! let mut param = MnccSetupParam::default();
//! param.basic_service = Some(BasicService::new(
//!     CallClass::Normal,
//!     ServiceType::BasicSpeechDefault,
//! ));
//! let ipui = Ipui::N(Ipei::new(0x123, 0x456789));
//! let call = dh.mncc_setup_req(link, &ipui, param).unwrap();
//!
//! // feed inbound DLC frames:
//! let events: Vec<NwkEvent> = dh.receive(link, &[0x08, 0x01]).unwrap();
//! # let _ = (call, events);
//! ```

pub mod cc;
pub mod error;
pub mod handle;
pub mod identity;
pub mod ie;
pub mod message;
pub mod mm;
pub mod transaction;
pub mod transport;

/// Operating mode of a NWK handle.
///
/// The mode selects the transmit/receive direction applied to message
/// descriptor tables: a Fixed Part sends in the FP=>PP direction and
/// receives PP=>FP, a Portable Part the opposite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Fixed Part (base station).
    Fp,
    /// Portable Part (handset).
    Pp,
}
