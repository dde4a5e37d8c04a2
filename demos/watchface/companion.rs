use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use flightface::{
    Connect, Context, ControlFlow, Error, Event, Message, Register, Settings, Value, Worker,
    WatchfaceContext, KEY_CONDITION, KEY_STATION, KEY_SUCCESS,
};
use log::info;
use rand::Rng;

use crate::console::ConsolePanel;

/* ---------- */

const STATIONS: &[&str] = &["KJFK", "KORD", "KSFO", "EGLL", "CYYZ"];
const CONDITIONS: &[&str] = &["VFR", "VFR", "MVFR", "IFR", "LIFR"];

/* ---------- */

/// A pretend companion device: answers refresh requests with canned reports,
/// with the occasional lookup error, dropped message or plain silence.
pub(crate) struct Companion {
    requests: Receiver<Message>,
    face: Sender<Event>,
}

impl Companion {
    fn answer(&mut self) -> ControlFlow {
        let mut rng = rand::thread_rng();

        // The radio needs a moment.
        std::thread::sleep(Duration::from_millis(rng.gen_range(100..400)));

        let event = match rng.gen_range(0..10) {
            0..=5 => {
                let station = STATIONS[rng.gen_range(0..STATIONS.len())];
                let condition = CONDITIONS[rng.gen_range(0..CONDITIONS.len())];
                info!("companion: reporting {condition} at {station}");

                Event::Inbox(
                    Message::new()
                        .with(KEY_STATION, Value::Str(station.to_owned()))
                        .with(KEY_CONDITION, Value::Str(condition.to_owned()))
                        .with(KEY_SUCCESS, Value::Bool(true)),
                )
            }
            6 => {
                info!("companion: simulating a failed lookup");
                Event::Inbox(
                    Message::new()
                        .with(KEY_STATION, Value::Str("GOT".to_owned()))
                        .with(KEY_CONDITION, Value::Str("ERR".to_owned()))
                        .with(KEY_SUCCESS, Value::Bool(false)),
                )
            }
            7 => {
                info!("companion: dropping the report");
                Event::InboxDropped("radio interference".to_owned())
            }
            _ => {
                info!("companion: staying silent");
                return ControlFlow::Continue;
            }
        };

        if self.face.send(event).is_err() {
            return ControlFlow::Break;
        }

        ControlFlow::Continue
    }
}

impl Worker for Companion {
    fn on_update(&mut self) -> ControlFlow {
        match self.requests.recv_timeout(Duration::from_millis(100)) {
            Ok(request) => {
                // The payload is a placeholder byte; only the arrival matters.
                drop(request);

                if self.face.send(Event::OutboxSent).is_err() {
                    return ControlFlow::Break;
                }

                self.answer()
            }
            Err(RecvTimeoutError::Timeout) => ControlFlow::Continue,
            Err(RecvTimeoutError::Disconnected) => ControlFlow::Break,
        }
    }
}

/* ---------- */

pub(crate) struct CompanionContext {
    requests: Receiver<Message>,
    outbox: Sender<Message>,
    face: Option<Sender<Event>>,
}

impl CompanionContext {
    pub(crate) fn new() -> Self {
        let (outbox, requests) = crossbeam_channel::unbounded();

        Self {
            requests,
            outbox,
            face: None,
        }
    }
}

impl Context for CompanionContext {
    type Target = Companion;

    fn into_worker(self) -> Result<Self::Target, Error> {
        let face = self.face.ok_or(Error::context("face"))?;

        Ok(Companion {
            requests: self.requests,
            face,
        })
    }

    fn settings(&self) -> Settings {
        Settings::new().name("companion")
    }
}

impl Register for CompanionContext {
    type Endpoint = Sender<Message>;

    fn register(&mut self, other: &mut impl Connect<Self>) {
        other.on_connection(self.outbox.clone())
    }
}

impl Connect<WatchfaceContext<ConsolePanel, Sender<Message>>> for CompanionContext {
    fn on_connection(&mut self, endpoint: Sender<Event>) {
        let _ = self.face.insert(endpoint);
    }
}

/* ---------- */

impl Connect<CompanionContext> for WatchfaceContext<ConsolePanel, Sender<Message>> {
    fn on_connection(&mut self, endpoint: Sender<Message>) {
        self.set_outbox(endpoint)
    }
}
