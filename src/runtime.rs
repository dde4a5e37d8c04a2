use std::thread::JoinHandle;

use crate::settings::Settings;
use crate::utils::Shutdown;
use crate::worker::{Context, Worker};
use crate::Error;

/* ---------- */

/// A runtime that manages [`Worker`] threads.
///
/// The face, its minute tick source and the companion link each run as a worker owned by
/// a single runtime. When dropped, the runtime stops and waits for all of them to complete.
///
/// [`Worker`]: crate::Worker
pub struct Runtime {
    shutdown: Shutdown,
    threads: Vec<JoinHandle<()>>,
}

impl Runtime {
    /// Returns a new runtime.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables this runtime to be gracefully shut down with a `Ctrl+C` signal.
    ///
    /// If the graceful shutdown doesn't have any effect, users can still
    /// send a second `Ctrl+C` signal to forcefully kill the runtime.
    #[inline]
    pub fn enable_graceful_shutdown(&self) {
        crate::utils::enable_graceful_shutdown(&self.shutdown)
    }

    /// Stops the runtime, asking every worker to leave its loop.
    #[inline]
    pub fn stop(&self) {
        self.shutdown.stop()
    }

    /// Runs a [`Worker`] in a new thread.
    ///
    /// # Errors
    ///
    /// On error, the corresponding error is returned and the runtime is stopped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use flightface::*;
    /// struct Ticker;
    /// // -- skipping the Worker implementation for Ticker...
    /// # impl Worker for Ticker {}
    ///
    /// let mut runtime = Runtime::new();
    ///
    /// // Run a Ticker thread.
    /// runtime.launch(Ticker).unwrap();
    /// ```
    #[inline]
    pub fn launch<W: Worker + 'static>(&mut self, worker: W) -> Result<(), Error> {
        self.inner_spawn_thread(worker, Settings::default())
    }

    /// Runs a [`Worker`] in a new thread configured with `settings`.
    ///
    /// # Errors
    ///
    /// On error, the corresponding error is returned and the runtime is stopped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use flightface::*;
    /// struct Ticker;
    /// // -- skipping the Worker implementation for Ticker...
    /// # impl Worker for Ticker {}
    ///
    /// let mut runtime = Runtime::new();
    /// let settings = Settings::new().name("ticker");
    ///
    /// // Run a Ticker thread named "ticker".
    /// runtime.launch_with_settings(Ticker, settings).unwrap();
    /// ```
    #[inline]
    pub fn launch_with_settings<W: Worker + 'static>(
        &mut self,
        worker: W,
        settings: Settings,
    ) -> Result<(), Error> {
        self.inner_spawn_thread(worker, settings)
    }

    /// Runs a [`Worker`] built from a [`Context`] in a new thread.
    ///
    /// The new thread is configured with the values returned by the [`Context::settings`]
    /// function. Building the worker happens before the thread starts, so a context with
    /// incomplete wiring fails here rather than at the first update.
    ///
    /// # Errors
    ///
    /// On error, the corresponding error is returned and the runtime is stopped.
    #[inline]
    pub fn launch_from_context<W, C>(&mut self, ctx: C) -> Result<(), Error>
    where
        W: Worker + 'static,
        C: Context<Target = W>,
    {
        let settings = ctx.settings();
        let worker = ctx.into_worker().inspect_err(|_| self.shutdown.stop())?;

        self.inner_spawn_thread(worker, settings)
    }

    /// Blocks the calling thread until all the runtime's workers stop.
    ///
    /// # Example
    ///
    /// ```
    /// # use std::time::{Duration, Instant};
    /// # use flightface::*;
    /// struct Ticker;
    ///
    /// impl Worker for Ticker {
    ///     fn on_update(&mut self) -> ControlFlow {
    ///         // Let's simulate some work.
    ///         std::thread::sleep(Duration::from_secs(1));
    ///
    ///         ControlFlow::Break
    ///     }
    /// }
    ///
    /// let mut runtime = Runtime::new();
    /// let now = Instant::now();
    ///
    /// runtime.launch(Ticker).unwrap();
    /// runtime.wait();
    ///
    /// assert!(now.elapsed() >= Duration::from_secs(1));
    /// ```
    #[inline]
    pub fn wait(&mut self) {
        for thread in self.threads.drain(..) {
            let _ = thread.join();
        }
    }

    #[inline]
    fn inner_spawn_thread<W: Worker + 'static>(
        &mut self,
        worker: W,
        settings: Settings,
    ) -> Result<(), Error> {
        let thread = crate::utils::spawn_thread(worker, settings, &self.shutdown)
            .inspect_err(|_| self.shutdown.stop())?;

        self.threads.push(thread);
        Ok(())
    }
}

impl Default for Runtime {
    #[inline]
    fn default() -> Self {
        Self {
            shutdown: Shutdown::new(),
            threads: Vec::new(),
        }
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        self.shutdown.stop();
        self.wait()
    }
}

/* ---------- */
