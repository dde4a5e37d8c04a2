//! Portable core of a flight-rules watch face.
//!
//! # Philosophy
//!
//! The original face is a tiny embedded program: a clock, a weather station identifier
//! and a flight-category condition (VFR, MVFR, IFR, LIFR), refreshed through a paired
//! companion device. All of its actual logic sits in one place, the [`RefreshScheduler`]:
//! a pair of minute counters deciding when to request fresh data and when to declare the
//! shown data stale.
//!
//! This crate keeps that shape. The [`Watchface`] is a single worker owning every piece
//! of mutable display state; events (minute ticks, inbound messages, transport results)
//! reach it one at a time over a channel, so there is no parallelism and no locking
//! anywhere in the face itself. Everything device-specific stays behind two seams:
//!
//! - [`Display`]: the window and text layers of the device SDK,
//! - [`Outbox`]: the outbound half of the message channel to the companion.
//!
//! # Usage
//!
//! The scheduler alone, ticked by hand:
//!
//! ```
//! use flightface::{Intervals, RefreshScheduler, TickAction};
//!
//! let mut scheduler = RefreshScheduler::new(Intervals::new(15, 5, 2));
//!
//! // Quiet for 14 minutes, then the refresh interval elapses.
//! for _ in 0..14 {
//!     assert_eq!(scheduler.on_minute_tick(), TickAction::Nothing);
//! }
//! assert_eq!(scheduler.on_minute_tick(), TickAction::RequestRefresh);
//!
//! // The companion answers; the failure window is disarmed.
//! scheduler.on_data_received();
//! ```
//!
//! A complete face wired into a runtime (requires the `timing` feature):
//!
//! ```no_run
//! use flightface::timers::MinuteTickerContext;
//! use flightface::{
//!     Display, FaceConfig, Message, Register, Runtime, Theme, WatchfaceContext,
//! };
//!
//! struct NullPanel;
//!
//! impl Display for NullPanel {
//!     fn set_clock(&mut self, _: &str) {}
//!     fn set_station(&mut self, _: &str) {}
//!     fn set_condition(&mut self, _: &str) {}
//!     fn set_theme(&mut self, _: Theme) {}
//! }
//!
//! let (outbox, requests) = crossbeam_channel::unbounded::<Message>();
//!
//! let mut face = WatchfaceContext::new(FaceConfig::default());
//! face.set_display(NullPanel);
//! face.set_outbox(outbox);
//!
//! let mut ticker = MinuteTickerContext::new();
//! face.register(&mut ticker);
//!
//! let mut runtime = Runtime::new();
//! runtime.enable_graceful_shutdown();
//! runtime.launch_from_context(face).unwrap();
//! runtime.launch_from_context(ticker).unwrap();
//! runtime.wait();
//! ```
//!
//! ## Driving the face from a host event loop
//!
//! Hosts that already own an event loop don't need the runtime at all: build the
//! [`Watchface`] directly and feed it through [`Watchface::handle`], one [`Event`]
//! per callback.
//!
//! ## Timers
//!
//! With the `timing` feature enabled, this crate re-exports the [`minuteurs`] crate and
//! provides [`timers::MinuteTicker`], a worker turning a [`minuteurs::Timer`] into the
//! face's once-per-minute tick source.
//!
//! [`minuteurs`]: <https://docs.rs/minuteurs/latest/minuteurs/>

#![warn(missing_docs)]

mod clock;
mod display;
mod error;
mod face;
mod link;
mod report;
mod runtime;
mod scheduler;
mod service;
mod settings;
#[cfg(test)]
mod test_utils;
#[cfg(feature = "timing")]
pub mod timers;
mod utils;
mod worker;

#[cfg(feature = "timing")]
pub use minuteurs;

pub use clock::*;
pub use display::*;
pub use error::*;
pub use face::*;
pub use link::*;
pub use report::*;
pub use runtime::*;
pub use scheduler::*;
pub use service::*;
pub use settings::*;
pub use utils::*;
pub use worker::*;
