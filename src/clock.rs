use chrono::NaiveTime;

/* ---------- */

/// How the host formats the time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockStyle {
    /// 24-hour clock, zero padded (`08:30`, `21:04`).
    #[default]
    H24,
    /// 12-hour clock, space padded, no AM/PM marker (` 8:30`, ` 9:04`).
    H12,
}

impl ClockStyle {
    #[inline]
    fn pattern(self) -> &'static str {
        match self {
            Self::H24 => "%H:%M",
            Self::H12 => "%l:%M",
        }
    }
}

/* ---------- */

/// Formats a wall-clock time for the clock layer, minute precision.
#[inline]
pub fn clock_text(time: NaiveTime, style: ClockStyle) -> String {
    time.format(style.pattern()).to_string()
}

/* ---------- */
