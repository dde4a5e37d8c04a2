use std::time::Duration;

use chrono::NaiveTime;
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use log::{debug, error, info};

use crate::clock::{clock_text, ClockStyle};
use crate::display::{self, Display, Theme};
use crate::link::{Event, Message, Outbox};
use crate::report::Report;
use crate::scheduler::{Intervals, RefreshScheduler, TickAction};
use crate::service::{Connect, Register};
use crate::settings::Settings;
use crate::worker::{Context, ControlFlow, Worker};
use crate::Error;

/* ---------- */

const RECV_TIMEOUT: Duration = Duration::from_millis(100);

/* ---------- */

/// Scheduling and rendering options of a face.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaceConfig {
    /// Thresholds of the refresh cycle.
    pub intervals: Intervals,
    /// Clock format, as reported by the host locale.
    pub clock_style: ClockStyle,
}

/* ---------- */

/// The watch face: one worker owning all of the mutable display state.
///
/// The face reacts to [`Events`] delivered one at a time: minute ticks drive the clock
/// and the [`RefreshScheduler`], inbound messages become [`Reports`], and transport
/// results are logged. It writes to the device through a [`Display`] and requests fresh
/// data through an [`Outbox`]; it owns no thread of its own and no lock.
///
/// Hosts with their own event loop can skip the runtime entirely and call
/// [`Watchface::handle`] directly.
///
/// [`Events`]: crate::Event
/// [`Reports`]: crate::Report
pub struct Watchface<D, O> {
    scheduler: RefreshScheduler,
    clock_style: ClockStyle,
    display: D,
    outbox: O,
    events: Receiver<Event>,
}

impl<D, O> Watchface<D, O>
where
    D: Display,
    O: Outbox,
{
    /// Returns a face reading its events from `events`.
    pub fn new(config: FaceConfig, display: D, outbox: O, events: Receiver<Event>) -> Self {
        Self {
            scheduler: RefreshScheduler::new(config.intervals),
            clock_style: config.clock_style,
            display,
            outbox,
            events,
        }
    }

    /// Reacts to one host event.
    pub fn handle(&mut self, event: Event) {
        match event {
            Event::MinuteTick(time) => self.on_minute_tick(time),
            Event::Inbox(message) => self.on_report(&message),
            Event::InboxDropped(reason) => error!("inbound message dropped: {reason}"),
            Event::OutboxSent => debug!("refresh request delivered"),
            Event::OutboxFailed(reason) => error!("refresh request not delivered: {reason}"),
        }
    }

    fn on_minute_tick(&mut self, time: NaiveTime) {
        self.display.set_clock(&clock_text(time, self.clock_style));

        match self.scheduler.on_minute_tick() {
            TickAction::RequestRefresh => {
                if let Err(err) = self.outbox.send(Message::refresh_request()) {
                    // The per-minute cycle is the only retry mechanism.
                    error!("could not send the refresh request: {err}");
                }
            }
            TickAction::FlagFailure => {
                self.display.set_condition(display::FAILURE_INDICATOR);
                self.display.set_theme(Theme::Neutral);
            }
            TickAction::Nothing => {}
        }
    }

    fn on_report(&mut self, message: &Message) {
        let report = Report::decode(message);
        self.scheduler.on_data_received();

        info!(
            "updating display elements: station {:?}, condition {:?}",
            report.station, report.condition
        );

        if let Some(station) = &report.station {
            self.display.set_station(station);
        }
        if let Some(condition) = &report.condition {
            self.display.set_condition(condition);
        }

        if !report.success {
            self.display.set_theme(Theme::Neutral);
        } else if report.condition.is_some() {
            self.display.set_theme(report.category().theme());
        }
    }
}

impl<D, O> Worker for Watchface<D, O>
where
    D: Display,
    O: Outbox,
{
    fn on_start(&mut self) {
        self.display.set_clock(display::CLOCK_PLACEHOLDER);
        self.display.set_station(display::STATION_PLACEHOLDER);
        self.display.set_condition(display::CONDITION_PLACEHOLDER);
        self.display.set_theme(Theme::Neutral);
    }

    fn on_update(&mut self) -> ControlFlow {
        match self.events.recv_timeout(RECV_TIMEOUT) {
            Ok(event) => {
                self.handle(event);
                ControlFlow::Continue
            }
            Err(RecvTimeoutError::Timeout) => ControlFlow::Continue,
            Err(RecvTimeoutError::Disconnected) => {
                info!("all event sources are gone, stopping the face");
                ControlFlow::Break
            }
        }
    }
}

/* ---------- */

/// Wiring context of a [`Watchface`].
///
/// The context owns the event channel. Registering it with a source (a tick source, the
/// companion link) hands that source a sender for the channel; the display and outbox
/// are set explicitly. [`Context::into_worker`] fails if either seam is missing.
pub struct WatchfaceContext<D, O> {
    config: FaceConfig,
    display: Option<D>,
    outbox: Option<O>,
    sender: Sender<Event>,
    events: Receiver<Event>,
}

impl<D, O> WatchfaceContext<D, O> {
    /// Returns an unwired context.
    pub fn new(config: FaceConfig) -> Self {
        let (sender, events) = crossbeam_channel::unbounded();

        Self {
            config,
            display: None,
            outbox: None,
            sender,
            events,
        }
    }

    /// Sets the rendering seam.
    #[inline]
    pub fn set_display(&mut self, display: D) {
        let _ = self.display.insert(display);
    }

    /// Sets the outbound half of the companion link.
    #[inline]
    pub fn set_outbox(&mut self, outbox: O) {
        let _ = self.outbox.insert(outbox);
    }
}

impl<D, O> Context for WatchfaceContext<D, O>
where
    D: Display + 'static,
    O: Outbox + 'static,
{
    type Target = Watchface<D, O>;

    fn into_worker(self) -> Result<Self::Target, Error> {
        let display = self.display.ok_or(Error::context("display"))?;
        let outbox = self.outbox.ok_or(Error::context("outbox"))?;

        Ok(Watchface::new(self.config, display, outbox, self.events))
    }

    fn settings(&self) -> Settings {
        Settings::new().name("watchface")
    }
}

impl<D, O> Register for WatchfaceContext<D, O> {
    type Endpoint = Sender<Event>;

    fn register(&mut self, other: &mut impl Connect<Self>) {
        other.on_connection(self.sender.clone())
    }
}

/* ---------- */

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;
    use crate::link::{Value, KEY_CONDITION, KEY_STATION, KEY_SUCCESS};
    use crate::test_utils::*;

    const INTERVALS: Intervals = Intervals::new(2, 1, 1);

    fn test_face(
        style: ClockStyle,
    ) -> (
        Watchface<RecordingDisplay, Sender<Message>>,
        RecordingDisplay,
        Receiver<Message>,
    ) {
        let (outbox, requests) = crossbeam_channel::unbounded();
        let (_, events) = crossbeam_channel::unbounded();
        let display = RecordingDisplay::default();

        let config = FaceConfig {
            intervals: INTERVALS,
            clock_style: style,
        };
        let mut face = Watchface::new(config, display.clone(), outbox, events);
        face.on_start();

        (face, display, requests)
    }

    fn tick(minute: u32) -> Event {
        Event::MinuteTick(NaiveTime::from_hms_opt(10, minute, 0).unwrap())
    }

    #[test]
    fn startup_shows_placeholders() {
        let (_face, display, _requests) = test_face(ClockStyle::H24);
        let screen = display.screen();

        assert_eq!(screen.clock, display::CLOCK_PLACEHOLDER);
        assert_eq!(screen.station, display::STATION_PLACEHOLDER);
        assert_eq!(screen.condition, display::CONDITION_PLACEHOLDER);
        assert_eq!(screen.theme, Theme::Neutral);
    }

    #[test]
    fn ticks_refresh_the_clock() {
        let (mut face, display, _requests) = test_face(ClockStyle::H12);

        face.handle(tick(5));
        assert_eq!(display.screen().clock, "10:05");
    }

    #[test]
    fn report_updates_the_display() {
        let (mut face, display, _requests) = test_face(ClockStyle::H24);

        let message = Message::new()
            .with(KEY_STATION, Value::Str("KSFO".to_owned()))
            .with(KEY_CONDITION, Value::Str("VFR".to_owned()));
        face.handle(Event::Inbox(message));

        let screen = display.screen();
        assert_eq!(screen.station, "KSFO");
        assert_eq!(screen.condition, "VFR");
        assert_eq!(screen.theme, Theme::Green);
    }

    #[test]
    fn partial_report_leaves_other_layers_alone() {
        let (mut face, display, _requests) = test_face(ClockStyle::H24);

        let message = Message::new().with(KEY_CONDITION, Value::Str("IFR".to_owned()));
        face.handle(Event::Inbox(message));

        let screen = display.screen();
        assert_eq!(screen.station, display::STATION_PLACEHOLDER);
        assert_eq!(screen.condition, "IFR");
        assert_eq!(screen.theme, Theme::Red);
    }

    #[test]
    fn failed_lookup_forces_the_neutral_theme() {
        let (mut face, display, _requests) = test_face(ClockStyle::H24);

        let message = Message::new()
            .with(KEY_STATION, Value::Str("GOT".to_owned()))
            .with(KEY_CONDITION, Value::Str("ERR".to_owned()))
            .with(KEY_SUCCESS, Value::Bool(false));
        face.handle(Event::Inbox(message));

        let screen = display.screen();
        assert_eq!(screen.condition, "ERR");
        assert_eq!(screen.theme, Theme::Neutral);
    }

    #[test]
    fn unanswered_request_flags_the_failure() {
        let (mut face, display, requests) = test_face(ClockStyle::H24);

        // Two ticks reach the refresh interval and emit the request.
        face.handle(tick(1));
        face.handle(tick(2));
        assert_eq!(requests.try_recv().unwrap(), Message::refresh_request());

        // One more silent minute and the failure shows up.
        face.handle(tick(3));
        let screen = display.screen();
        assert_eq!(screen.condition, display::FAILURE_INDICATOR);
        assert_eq!(screen.theme, Theme::Neutral);

        // The shortened retry: refresh - retry = 1, so the next tick requests again.
        face.handle(tick(4));
        assert_eq!(requests.try_recv().unwrap(), Message::refresh_request());
    }

    #[test]
    fn answered_request_keeps_the_face_healthy() {
        let (mut face, display, requests) = test_face(ClockStyle::H24);

        face.handle(tick(1));
        face.handle(tick(2));
        requests.try_recv().unwrap();

        let message = Message::new().with(KEY_CONDITION, Value::Str("MVFR".to_owned()));
        face.handle(Event::Inbox(message));

        face.handle(tick(3));
        assert_eq!(display.screen().condition, "MVFR");
        assert!(requests.try_recv().is_err());
    }

    #[test]
    fn transport_results_only_log() {
        let (mut face, display, _requests) = test_face(ClockStyle::H24);
        let before = display.screen();

        face.handle(Event::InboxDropped("radio silence".to_owned()));
        face.handle(Event::OutboxSent);
        face.handle(Event::OutboxFailed("busy".to_owned()));

        assert_eq!(display.screen(), before);
    }

    #[test]
    fn context_requires_both_seams() {
        let mut ctx =
            WatchfaceContext::<RecordingDisplay, Sender<Message>>::new(FaceConfig::default());
        ctx.set_display(RecordingDisplay::default());

        let err = ctx.into_worker().err().unwrap();
        assert!(matches!(err, Error::InvalidContext(_)));
    }
}
