use std::ops::DerefMut;

use crate::settings::Settings;
use crate::utils::Shutdown;
use crate::Error;

/* ---------- */

/// A worker represents a thread that runs for the lifetime of the face.
///
/// The watch face itself, its tick source and its link to the companion device are all
/// workers: independent loops that only talk to each other through channels. Workers are
/// defined by one main method, [`Worker::run`], which runs the actual loop. The default
/// implementation first calls [`Worker::on_start`] once, then calls [`Worker::on_update`]
/// until it returns [`ControlFlow::Break`] or the runtime is stopped.
///
/// # Examples
///
/// A worker that counts its updates and leaves after ten of them:
///
/// ```
/// # use flightface::{Runtime, Worker, ControlFlow};
/// #[derive(Default)]
/// struct UpdateCounter {
///     count: usize,
/// }
///
/// impl Worker for UpdateCounter {
///     fn on_update(&mut self) -> ControlFlow {
///         self.count += 1;
///
///         if self.count >= 10 {
///             return ControlFlow::Break;
///         }
///
///         ControlFlow::Continue
///     }
/// }
///
/// let mut runtime = Runtime::new();
/// runtime.launch(UpdateCounter::default()).unwrap();
/// runtime.wait();
/// ```
pub trait Worker: Send {
    /// Convenient method to set things up before entering the worker loop.
    ///
    /// The first method to be called by the [`Worker::run`] default implementation.
    /// By default, this does nothing.
    #[inline]
    fn on_start(&mut self) {}

    /// One iteration of the worker loop.
    ///
    /// Called repeatedly by the [`Worker::run`] default implementation, until either
    /// [`ControlFlow::Break`] is returned or the runtime in which the worker runs is
    /// shut down. By default, this method just returns [`ControlFlow::Break`].
    #[inline]
    fn on_update(&mut self) -> ControlFlow {
        ControlFlow::Break
    }

    /// Main worker loop, spawned in a new thread by one of the [`Runtime::launch`] functions.
    ///
    /// By default, this first calls [`Worker::on_start`] then [`Worker::on_update`] in a loop
    /// that spins until [`shutdown.is_running()`] returns `false`.
    ///
    /// [`Runtime::launch`]: crate::Runtime::launch
    /// [`shutdown.is_running()`]: crate::Shutdown::is_running
    #[inline]
    fn run(&mut self, shutdown: Shutdown) {
        self.on_start();

        while shutdown.is_running() {
            if let ControlFlow::Break = self.on_update() {
                break;
            }
        }
    }
}

impl<T: Worker + ?Sized> Worker for Box<T> {
    #[inline]
    fn on_start(&mut self) {
        self.deref_mut().on_start()
    }

    #[inline]
    fn on_update(&mut self) -> ControlFlow {
        self.deref_mut().on_update()
    }

    #[inline]
    fn run(&mut self, shutdown: Shutdown) {
        self.deref_mut().run(shutdown)
    }
}

/* ---------- */

/// Allows building a worker before actually launching it with the
/// [`Runtime::launch_from_context`] function.
///
/// Contexts exist so that workers can be wired together through the [`Register`] and
/// [`Connect`] traits before any thread starts: the face context hands its event sender
/// to the tick source and to the companion link, then each context is consumed into its
/// worker. A context whose wiring is incomplete fails with [`Error::InvalidContext`]
/// instead of producing a half-connected worker.
///
/// [`Runtime::launch_from_context`]: crate::Runtime::launch_from_context
/// [`Register`]: crate::Register
/// [`Connect`]: crate::Connect
///
/// # Examples
///
/// ```
/// # use flightface::{Context, ControlFlow, Error, Runtime, Worker};
/// struct Blinker {
///     period: usize,
/// }
///
/// impl Worker for Blinker {
///     fn on_update(&mut self) -> ControlFlow {
///         ControlFlow::Break
///     }
/// }
///
/// #[derive(Default)]
/// struct BlinkerContext {
///     period: Option<usize>,
/// }
///
/// impl Context for BlinkerContext {
///     type Target = Blinker;
///
///     fn into_worker(self) -> Result<Self::Target, Error> {
///         let period = self.period.ok_or(Error::context("period"))?;
///
///         Ok(Blinker { period })
///     }
/// }
///
/// let mut runtime = Runtime::new();
///
/// // No period was set, so the launch fails before any thread is spawned.
/// runtime
///     .launch_from_context(BlinkerContext::default())
///     .unwrap_err();
/// ```
pub trait Context {
    /// The type of [`Worker`] built from this context.
    type Target: Worker;

    /// Consumes `self` to build the targeted [`Worker`] from the context.
    fn into_worker(self) -> Result<Self::Target, Error>;

    /// Returns some [`Settings`] used to configure the worker's thread.
    ///
    /// By default, it returns default thread settings.
    #[inline]
    fn settings(&self) -> Settings {
        Settings::default()
    }
}

/* ---------- */

/// Defines the control flow of [`Workers`].
///
/// [`Workers`]: crate::Worker
#[derive(Debug, PartialEq, Eq)]
pub enum ControlFlow {
    /// Tells the runtime to continue the main worker loop.
    Continue,
    /// Tells the runtime to break the main worker loop.
    Break,
}
