mod companion;
mod console;

use std::time::Duration;

use flightface::timers::MinuteTickerContext;
use flightface::{ClockStyle, FaceConfig, Intervals, Register, Runtime, WatchfaceContext};

use crate::companion::CompanionContext;
use crate::console::ConsolePanel;

/* ---------- */

/// One simulated minute every 300ms.
const MINUTE: Duration = Duration::from_millis(300);

fn main() {
    env_logger::init();

    let mut rt = Runtime::new();
    rt.enable_graceful_shutdown();

    let config = FaceConfig {
        intervals: Intervals::new(15, 5, 2),
        clock_style: ClockStyle::H12,
    };

    let mut face = WatchfaceContext::new(config);
    let mut ticker = MinuteTickerContext::with_period(MINUTE);
    let mut companion = CompanionContext::new();

    face.set_display(ConsolePanel::default());
    face.register(&mut ticker); // hands the event sender to the ticker...
    face.register(&mut companion); // ... and to the simulated companion
    companion.register(&mut face); // hands the request outbox to the face

    rt.launch_from_context(companion)
        .expect("failed to spawn the companion");
    rt.launch_from_context(face)
        .expect("failed to spawn the face");
    rt.launch_from_context(ticker)
        .expect("failed to spawn the ticker");

    // Runs until Ctrl+C.
    rt.wait();
}
