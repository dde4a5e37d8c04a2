use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use signal_hook::consts::TERM_SIGNALS;
use signal_hook::flag;

use crate::settings::Settings;
use crate::worker::Worker;
use crate::Error;

/* ---------- */

/// Enables the runtime to be gracefully shut down.
///
/// If for some reason the runtime isn't shut down after the first signal,
/// users can send another signal to kill the runtime ungracefully.
#[inline]
pub(crate) fn enable_graceful_shutdown(shutdown: &Shutdown) {
    for sig in TERM_SIGNALS {
        let _ = flag::register_conditional_shutdown(*sig, 1, shutdown.as_ref().clone());
        let _ = flag::register(*sig, shutdown.as_ref().clone());
    }
}

/* ---------- */

/// Spawns a thread running the worker loop, stopping it when `shutdown` is raised.
pub(crate) fn spawn_thread<W>(
    mut worker: W,
    settings: Settings,
    shutdown: &Shutdown,
) -> Result<JoinHandle<()>, Error>
where
    W: Worker + 'static,
{
    let shutdown = shutdown.clone();
    let handle = settings.into_inner().spawn(move || worker.run(shutdown))?;

    Ok(handle)
}

/* ---------- */

/// Describes the running status of a [`Runtime`].
///
/// Primarily used when the graceful shutdown is enabled; workers that implement their own
/// [`Worker::run`] loop use it to know when the runtime wants them gone.
///
/// [`Runtime`]: crate::Runtime
/// [`Worker::run`]: crate::Worker::run
#[derive(Debug, Default)]
pub struct Shutdown(Arc<AtomicBool>);

impl Shutdown {
    #[inline]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn stop(&self) {
        self.0.store(true, Ordering::SeqCst)
    }

    /// Returns whether or not the [`Runtime`] is running.
    ///
    /// [`Runtime`]: crate::Runtime
    #[inline]
    pub fn is_running(&self) -> bool {
        !self.0.load(Ordering::SeqCst)
    }
}

impl AsRef<Arc<AtomicBool>> for Shutdown {
    #[inline]
    fn as_ref(&self) -> &Arc<AtomicBool> {
        &self.0
    }
}

impl Clone for Shutdown {
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
