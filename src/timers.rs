//! Minute tick source built on the [`minuteurs`] crate.
//!
//! On real hardware the once-per-minute tick comes from the host's time service; here it
//! comes from a [`minuteurs::Timer`] running in its own worker. Demos shorten the period
//! to compress simulated minutes.
//!
//! Requires the `timing` feature.
//!
//! [`minuteurs`]: <https://docs.rs/minuteurs/latest/minuteurs/>

use std::time::Duration;

use chrono::Local;
use crossbeam_channel::Sender;
use minuteurs::{Timer, Watcher};

use crate::face::WatchfaceContext;
use crate::link::Event;
use crate::service::Connect;
use crate::settings::Settings;
use crate::worker::{Context, ControlFlow, Worker};
use crate::Error;

/* ---------- */

/// A worker sending [`Event::MinuteTick`] to the face once per period.
///
/// The tick carries the current local wall-clock time, which the face uses to
/// refresh the clock layer.
pub struct MinuteTicker {
    timer: Timer,
    watcher: Watcher,
    face: Sender<Event>,
}

impl Worker for MinuteTicker {
    fn on_update(&mut self) -> ControlFlow {
        self.timer.tick();

        if self.watcher.has_ticked()
            && self.face.send(Event::MinuteTick(Local::now().time())).is_err()
        {
            // The face is gone, no point in ticking on.
            return ControlFlow::Break;
        }

        ControlFlow::Continue
    }
}

/* ---------- */

/// Wiring context of a [`MinuteTicker`].
pub struct MinuteTickerContext {
    period: Duration,
    face: Option<Sender<Event>>,
}

impl MinuteTickerContext {
    /// Returns a context ticking at the hardware cadence of one minute.
    #[inline]
    pub fn new() -> Self {
        Self::with_period(Duration::from_secs(60))
    }

    /// Returns a context ticking at an arbitrary period.
    #[inline]
    pub fn with_period(period: Duration) -> Self {
        Self { period, face: None }
    }
}

impl Context for MinuteTickerContext {
    type Target = MinuteTicker;

    fn into_worker(self) -> Result<Self::Target, Error> {
        let face = self.face.ok_or(Error::context("face"))?;
        let timer = Timer::new(self.period);
        let watcher = timer.watcher();

        Ok(MinuteTicker {
            timer,
            watcher,
            face,
        })
    }

    fn settings(&self) -> Settings {
        Settings::new().name("minute-ticker")
    }
}

impl Default for MinuteTickerContext {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<D, O> Connect<WatchfaceContext<D, O>> for MinuteTickerContext {
    fn on_connection(&mut self, endpoint: Sender<Event>) {
        let _ = self.face.insert(endpoint);
    }
}

/* ---------- */

#[cfg(test)]
mod tests {
    use crossbeam_channel::Sender;

    use super::*;
    use crate::face::FaceConfig;
    use crate::link::Message;
    use crate::service::Register;
    use crate::test_utils::RecordingDisplay;

    #[test]
    fn unwired_context_fails() {
        let err = MinuteTickerContext::new().into_worker().err().unwrap();
        assert!(matches!(err, Error::InvalidContext(_)));
    }

    #[test]
    fn registration_wires_the_face() {
        let mut face =
            WatchfaceContext::<RecordingDisplay, Sender<Message>>::new(FaceConfig::default());
        let mut ticker = MinuteTickerContext::with_period(Duration::from_millis(1));

        face.register(&mut ticker);
        assert!(ticker.face.is_some());
        ticker.into_worker().expect("the ticker should be wired");
    }
}
