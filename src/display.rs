/* ---------- */

/// Text shown on the clock layer before the first tick.
pub const CLOCK_PLACEHOLDER: &str = "00:00";
/// Text shown on the station layer before the first report.
pub const STATION_PLACEHOLDER: &str = "ICAO";
/// Text shown on the condition layer before the first report.
pub const CONDITION_PLACEHOLDER: &str = "....";
/// Text shown on the condition layer when a refresh fails.
pub const FAILURE_INDICATOR: &str = ":(";

/* ---------- */

/// Background theme of the face.
///
/// Each flight category maps to one color; [`Theme::Neutral`] is the fallback for
/// unrecognized conditions, failed lookups and monochrome hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// The plain background, black on the original hardware.
    #[default]
    Neutral,
    /// VFR.
    Green,
    /// MVFR.
    Blue,
    /// IFR.
    Red,
    /// LIFR.
    Purple,
}

/* ---------- */

/// The rendering seam towards the device SDK.
///
/// Implementations own the actual window and text layers; the face only pushes text and
/// a theme through this trait and never reads anything back. All calls happen from the
/// face's own thread.
pub trait Display: Send {
    /// Replaces the clock layer text.
    fn set_clock(&mut self, text: &str);

    /// Replaces the station layer text.
    fn set_station(&mut self, text: &str);

    /// Replaces the condition layer text.
    fn set_condition(&mut self, text: &str);

    /// Switches the background theme.
    fn set_theme(&mut self, theme: Theme);
}
