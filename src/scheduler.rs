use log::{debug, info};

/* ---------- */

/// Minute thresholds driving the refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intervals {
    /// Minutes between two refresh requests under normal operation.
    pub refresh: u32,
    /// How many minutes sooner the next request fires after a failed refresh.
    pub retry: u32,
    /// Minutes of silence after a request before the refresh is deemed failed.
    pub fail_recognize: u32,
}

impl Intervals {
    /// Returns a new set of thresholds.
    #[inline]
    pub const fn new(refresh: u32, retry: u32, fail_recognize: u32) -> Self {
        Self {
            refresh,
            retry,
            fail_recognize,
        }
    }
}

impl Default for Intervals {
    #[inline]
    fn default() -> Self {
        Self::new(17, 5, 2)
    }
}

/* ---------- */

/// Where the scheduler stands in the request/response cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The last refresh succeeded (or nothing was requested yet).
    Healthy,
    /// A refresh request went out and no report came back yet.
    AwaitingResponse,
    /// A request went unanswered for too long; the failure was shown once
    /// and a shortened retry is pending.
    Failed,
}

/* ---------- */

/// What the face must do after a minute tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickAction {
    /// Counters moved, nothing else to do.
    Nothing,
    /// Send a refresh request to the companion.
    RequestRefresh,
    /// Show the failure indicator; the retry is already scheduled.
    FlagFailure,
}

/* ---------- */

/// Decides, once per minute, whether to request fresh data or to declare the
/// current data stale.
///
/// The scheduler is pure state: it owns two minute counters and a [`Phase`], and the only
/// inputs are [`on_minute_tick`] and [`on_data_received`]. Everything it asks of the
/// outside world is expressed through the returned [`TickAction`].
///
/// Under normal operation a request fires every `refresh` minutes. When a request goes
/// unanswered for `fail_recognize` minutes the failure is flagged exactly once and
/// `minutes_since_request` jumps ahead to `refresh - retry`, so the next attempt comes
/// `retry` minutes after the flag instead of waiting out a full interval.
///
/// [`on_minute_tick`]: Self::on_minute_tick
/// [`on_data_received`]: Self::on_data_received
///
/// # Examples
///
/// ```
/// # use flightface::{Intervals, RefreshScheduler, TickAction};
/// let mut scheduler = RefreshScheduler::new(Intervals::new(15, 5, 2));
///
/// for _ in 0..14 {
///     assert_eq!(scheduler.on_minute_tick(), TickAction::Nothing);
/// }
/// assert_eq!(scheduler.on_minute_tick(), TickAction::RequestRefresh);
/// ```
#[derive(Debug)]
pub struct RefreshScheduler {
    intervals: Intervals,
    phase: Phase,
    minutes_since_request: u32,
    minutes_since_success: u32,
}

impl RefreshScheduler {
    /// Returns a scheduler with both counters at zero.
    #[inline]
    pub fn new(intervals: Intervals) -> Self {
        Self {
            intervals,
            phase: Phase::Healthy,
            minutes_since_request: 0,
            minutes_since_success: 0,
        }
    }

    /// Advances the scheduler by one minute.
    pub fn on_minute_tick(&mut self) -> TickAction {
        self.minutes_since_request = self.minutes_since_request.saturating_add(1);
        self.minutes_since_success = self.minutes_since_success.saturating_add(1);

        if self.minutes_since_request >= self.intervals.refresh {
            self.minutes_since_request = 0;
            self.minutes_since_success = 0;
            self.phase = Phase::AwaitingResponse;

            info!("refresh interval elapsed, requesting a new report");
            return TickAction::RequestRefresh;
        }

        if self.phase == Phase::AwaitingResponse
            && self.minutes_since_success >= self.intervals.fail_recognize
        {
            self.phase = Phase::Failed;
            self.minutes_since_request =
                self.intervals.refresh.saturating_sub(self.intervals.retry);

            info!(
                "no report within {} min, retrying in {} min",
                self.intervals.fail_recognize, self.intervals.retry
            );
            return TickAction::FlagFailure;
        }

        debug!(
            "tick: {} min since request, {} min since report",
            self.minutes_since_request, self.minutes_since_success
        );
        TickAction::Nothing
    }

    /// Records a successfully decoded report.
    ///
    /// `minutes_since_request` is left untouched, so the normal request cadence
    /// is unaffected by when the report arrived.
    #[inline]
    pub fn on_data_received(&mut self) {
        self.phase = Phase::Healthy;
        self.minutes_since_success = 0;
    }

    /// The current phase of the request/response cycle.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Minutes elapsed since the last refresh request (or since startup).
    #[inline]
    pub fn minutes_since_request(&self) -> u32 {
        self.minutes_since_request
    }

    /// Minutes elapsed since the last report (or since startup).
    #[inline]
    pub fn minutes_since_success(&self) -> u32 {
        self.minutes_since_success
    }
}

impl Default for RefreshScheduler {
    #[inline]
    fn default() -> Self {
        Self::new(Intervals::default())
    }
}

/* ---------- */
