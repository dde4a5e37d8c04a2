use chrono::NaiveTime;
use crossbeam_channel::Sender;

use crate::Error;

/* ---------- */

/// Key of the station identifier field.
pub const KEY_STATION: u32 = 0;
/// Key of the flight-category condition field.
pub const KEY_CONDITION: u32 = 1;
/// Key of the explicit success flag sent by color-variant companions.
pub const KEY_SUCCESS: u32 = 2;

/* ---------- */

/// A single value carried by a [`Message`] tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A short text field.
    Str(String),
    /// A boolean flag.
    Bool(bool),
    /// A raw byte.
    Byte(u8),
}

/// One key-value pair of a [`Message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuple {
    /// The field key.
    pub key: u32,
    /// The field value.
    pub value: Value,
}

/* ---------- */

/// A key-value dictionary exchanged with the companion device.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message(Vec<Tuple>);

impl Message {
    /// Returns an empty message.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field to the message.
    #[inline]
    pub fn with(mut self, key: u32, value: Value) -> Self {
        self.0.push(Tuple { key, value });
        self
    }

    /// Iterates over the fields in the order they were received.
    #[inline]
    pub fn tuples(&self) -> std::slice::Iter<'_, Tuple> {
        self.0.iter()
    }

    /// Builds the outbound refresh request.
    ///
    /// The payload is a single placeholder byte; the companion only reacts to the
    /// message arriving, never to its content.
    #[inline]
    pub fn refresh_request() -> Self {
        Self::new().with(KEY_STATION, Value::Byte(0))
    }
}

/* ---------- */

/// An event delivered to the face by the host runtime.
///
/// Events arrive one at a time, on a single thread; the face never sees two of them
/// concurrently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// One minute elapsed; carries the current wall-clock time.
    MinuteTick(NaiveTime),
    /// A message arrived from the companion.
    Inbox(Message),
    /// The transport dropped an inbound message.
    InboxDropped(String),
    /// The last outbound message was delivered.
    OutboxSent,
    /// The last outbound message could not be delivered.
    OutboxFailed(String),
}

/* ---------- */

/// The outbound half of the companion link.
///
/// Sends are fire-and-forget: delivery results come back later as
/// [`Event::OutboxSent`] / [`Event::OutboxFailed`] and are only logged.
pub trait Outbox: Send {
    /// Hands `message` to the transport.
    fn send(&mut self, message: Message) -> Result<(), Error>;
}

impl Outbox for Sender<Message> {
    #[inline]
    fn send(&mut self, message: Message) -> Result<(), Error> {
        Sender::send(self, message).map_err(|_| Error::ChannelClosed)
    }
}

/* ---------- */
