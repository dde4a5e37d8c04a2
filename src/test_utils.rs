use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::display::{Display, Theme};
use crate::worker::{Context, ControlFlow, Worker};
use crate::Error;

/* ---------- */

/// What a [`RecordingDisplay`] currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct Screen {
    pub(crate) clock: String,
    pub(crate) station: String,
    pub(crate) condition: String,
    pub(crate) theme: Theme,
}

/// A display double recording the latest value of every layer.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingDisplay(Arc<Mutex<Screen>>);

impl RecordingDisplay {
    pub(crate) fn screen(&self) -> Screen {
        self.0.lock().unwrap().clone()
    }
}

impl Display for RecordingDisplay {
    fn set_clock(&mut self, text: &str) {
        self.0.lock().unwrap().clock = text.to_owned();
    }

    fn set_station(&mut self, text: &str) {
        self.0.lock().unwrap().station = text.to_owned();
    }

    fn set_condition(&mut self, text: &str) {
        self.0.lock().unwrap().condition = text.to_owned();
    }

    fn set_theme(&mut self, theme: Theme) {
        self.0.lock().unwrap().theme = theme;
    }
}

/* ---------- */

pub(crate) struct SpinningWorker;

impl Worker for SpinningWorker {
    fn on_update(&mut self) -> ControlFlow {
        std::thread::sleep(Duration::from_millis(1));
        ControlFlow::Continue
    }
}

/* ---------- */

pub(crate) struct TimedWorker {
    timeout: Duration,
    now: Instant,
}

impl TimedWorker {
    pub(crate) fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            now: Instant::now(),
        }
    }
}

impl Worker for TimedWorker {
    fn on_start(&mut self) {
        self.now = Instant::now();
    }

    fn on_update(&mut self) -> ControlFlow {
        if self.now.elapsed() >= self.timeout {
            return ControlFlow::Break;
        }

        ControlFlow::Continue
    }
}

/* ---------- */

pub(crate) struct BadWorker;

impl Worker for BadWorker {
    fn on_update(&mut self) -> ControlFlow {
        std::thread::sleep(Duration::from_millis(500));
        ControlFlow::Break
    }
}

pub(crate) struct BadWorkerContext;

impl Context for BadWorkerContext {
    type Target = BadWorker;

    fn into_worker(self) -> Result<Self::Target, Error> {
        Err(Error::context("bad context"))
    }
}
