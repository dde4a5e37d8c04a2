/// A type that implements this trait can open a communication channel between itself and
/// some other type implementing the [`Connect`] trait of the type.
///
/// This is how the pieces of the face are wired together before launch: the face context
/// registers itself with every event source, handing each of them a sender for its event
/// channel. The traits are channel agnostic; anything that can send or receive data can be
/// used as a [`Register::Endpoint`].
///
/// # Examples
///
/// ```
/// # use flightface::*;
/// # use std::sync::mpsc::{self, Receiver, Sender};
/// #[derive(Default)]
/// struct Ticker {
///     face: Option<Sender<u8>>,
/// }
///
/// impl Connect<Face> for Ticker {
///     fn on_connection(&mut self, endpoint: Sender<u8>) {
///         self.face = Some(endpoint)
///     }
/// }
///
/// struct Face {
///     sender: Sender<u8>,
///     recver: Receiver<u8>,
/// }
///
/// impl Face {
///     fn new() -> Self {
///         let (sender, recver) = mpsc::channel();
///
///         Self { sender, recver }
///     }
/// }
///
/// impl Register for Face {
///     type Endpoint = Sender<u8>;
///
///     fn register(&mut self, other: &mut impl Connect<Self>) {
///         other.on_connection(self.sender.clone())
///     }
/// }
///
/// let mut face = Face::new();
/// let mut ticker = Ticker::default();
///
/// face.register(&mut ticker);
/// ```
pub trait Register {
    /// The type used to communicate with some [`Connect`].
    type Endpoint;

    /// Connects the [`Register`] to the `other` entity, which must implement [`Connect`]
    /// of `self`.
    ///
    /// This function should pass an `Endpoint` to `other` by calling the
    /// [`Connect::on_connection`] function.
    fn register(&mut self, other: &mut impl Connect<Self>);
}

/* ---------- */

/// A type implementing this trait can be connected to some [`Register`].
///
/// See the [`Register`] documentation for the full wiring example.
pub trait Connect<S: Register + ?Sized> {
    /// Sets the endpoint of the communication channel between `self` and `S`.
    fn on_connection(&mut self, endpoint: S::Endpoint);
}

/* ---------- */

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::rc::Rc;

    /* ---------- */

    #[derive(Debug, Default)]
    struct Panel {
        shown: Option<Rc<RefCell<u8>>>,
    }

    impl Panel {
        fn shown(&mut self) -> Option<u8> {
            self.shown.as_ref().map(|inner| *inner.borrow())
        }
    }

    impl Connect<Sensor> for Panel {
        fn on_connection(&mut self, channel: Rc<RefCell<u8>>) {
            let _ = self.shown.insert(channel);
        }
    }

    /* ---------- */

    #[derive(Debug, Default)]
    struct Sensor {
        reading: Rc<RefCell<u8>>,
    }

    impl Sensor {
        fn reading(&self) -> u8 {
            *self.reading.borrow()
        }

        fn set_reading(&mut self, val: u8) {
            *self.reading.borrow_mut() = val
        }
    }

    impl Register for Sensor {
        type Endpoint = Rc<RefCell<u8>>;

        fn register(&mut self, client: &mut impl Connect<Self>) {
            client.on_connection(self.reading.clone())
        }
    }

    /* ---------- */

    #[test]
    fn reception() {
        let mut panel = Panel::default();
        let mut sensor = Sensor::default();

        assert!(
            panel.shown.is_none(),
            "the panel shouldn't be connected to anything"
        );

        sensor.register(&mut panel);
        assert!(panel.shown.is_some(), "the panel should see the sensor");
        assert_eq!(panel.shown(), Some(sensor.reading()));

        sensor.set_reading(8);
        assert_eq!(panel.shown(), Some(sensor.reading()));
    }
}
