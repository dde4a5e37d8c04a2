use log::error;

use crate::display::Theme;
use crate::link::{Message, Value, KEY_CONDITION, KEY_STATION, KEY_SUCCESS};

/* ---------- */

/// Maximum characters kept from a text field, matching the 8-byte layer buffers
/// of the original hardware (7 characters plus the terminator).
pub const FIELD_CHARS: usize = 7;

/* ---------- */

/// A decoded companion report.
///
/// Fields absent from the inbound message stay `None` and must leave the
/// corresponding display element untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// The weather station identifier, e.g. an ICAO airport code.
    pub station: Option<String>,
    /// The flight-category condition text.
    pub condition: Option<String>,
    /// Whether the companion's lookup succeeded. Earlier companions never send
    /// this flag, so it defaults to `true`.
    pub success: bool,
}

impl Report {
    /// Decodes a report from an inbound key-value message.
    ///
    /// Unrecognized keys and mistyped values are logged and skipped; decoding
    /// itself never fails.
    pub fn decode(message: &Message) -> Self {
        let mut report = Self::default();

        for tuple in message.tuples() {
            match (tuple.key, &tuple.value) {
                (KEY_STATION, Value::Str(text)) => {
                    report.station = Some(truncate(text).to_owned());
                }
                (KEY_CONDITION, Value::Str(text)) => {
                    report.condition = Some(truncate(text).to_owned());
                }
                (KEY_SUCCESS, Value::Bool(flag)) => report.success = *flag,
                (key @ (KEY_STATION | KEY_CONDITION | KEY_SUCCESS), value) => {
                    error!("unexpected value {value:?} for key {key}");
                }
                (key, _) => error!("key {key} not recognized"),
            }
        }

        report
    }

    /// The flight category parsed from the condition text.
    #[inline]
    pub fn category(&self) -> FlightCategory {
        self.condition
            .as_deref()
            .map(FlightCategory::from)
            .unwrap_or(FlightCategory::Unknown)
    }
}

impl Default for Report {
    #[inline]
    fn default() -> Self {
        Self {
            station: None,
            condition: None,
            success: true,
        }
    }
}

/* ---------- */

/// Coarse weather classification reported by the companion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightCategory {
    /// Visual flight rules.
    Vfr,
    /// Marginal visual flight rules.
    Mvfr,
    /// Instrument flight rules.
    Ifr,
    /// Low instrument flight rules.
    Lifr,
    /// Anything else, including companion error markers like `ERR`.
    Unknown,
}

impl FlightCategory {
    /// The background theme associated with this category.
    #[inline]
    pub fn theme(self) -> Theme {
        match self {
            Self::Vfr => Theme::Green,
            Self::Mvfr => Theme::Blue,
            Self::Ifr => Theme::Red,
            Self::Lifr => Theme::Purple,
            Self::Unknown => Theme::Neutral,
        }
    }
}

impl From<&str> for FlightCategory {
    // Exact match only: the companion sends these codes verbatim.
    fn from(code: &str) -> Self {
        match code {
            "VFR" => Self::Vfr,
            "MVFR" => Self::Mvfr,
            "IFR" => Self::Ifr,
            "LIFR" => Self::Lifr,
            _ => Self::Unknown,
        }
    }
}

/* ---------- */

/// Truncates a field to [`FIELD_CHARS`] characters.
fn truncate(field: &str) -> &str {
    match field.char_indices().nth(FIELD_CHARS) {
        Some((index, _)) => &field[..index],
        None => field,
    }
}

/* ---------- */

#[cfg(test)]
mod tests {
    use super::*;

    fn str_value(text: &str) -> Value {
        Value::Str(text.to_owned())
    }

    #[test]
    fn decode_full_report() {
        let message = Message::new()
            .with(KEY_STATION, str_value("KJFK"))
            .with(KEY_CONDITION, str_value("MVFR"))
            .with(KEY_SUCCESS, Value::Bool(true));
        let report = Report::decode(&message);

        assert_eq!(report.station.as_deref(), Some("KJFK"));
        assert_eq!(report.condition.as_deref(), Some("MVFR"));
        assert!(report.success);
        assert_eq!(report.category(), FlightCategory::Mvfr);
    }

    #[test]
    fn success_defaults_to_true_when_absent() {
        let message = Message::new().with(KEY_CONDITION, str_value("IFR"));
        let report = Report::decode(&message);

        assert!(report.success);
        assert!(report.station.is_none());
    }

    #[test]
    fn failed_lookup_report() {
        let message = Message::new()
            .with(KEY_STATION, str_value("GOT"))
            .with(KEY_CONDITION, str_value("ERR"))
            .with(KEY_SUCCESS, Value::Bool(false));
        let report = Report::decode(&message);

        assert!(!report.success);
        assert_eq!(report.category(), FlightCategory::Unknown);
    }

    #[test]
    fn unknown_keys_and_mistyped_values_are_skipped() {
        let message = Message::new()
            .with(42, str_value("bogus"))
            .with(KEY_STATION, Value::Byte(7))
            .with(KEY_CONDITION, str_value("VFR"));
        let report = Report::decode(&message);

        assert!(report.station.is_none());
        assert_eq!(report.condition.as_deref(), Some("VFR"));
    }

    #[test]
    fn long_fields_are_truncated() {
        let message = Message::new().with(KEY_STATION, str_value("KTALLAHASSEE"));
        let report = Report::decode(&message);

        assert_eq!(report.station.as_deref(), Some("KTALLAH"));
    }

    #[test]
    fn category_match_is_exact() {
        assert_eq!(FlightCategory::from("VFR"), FlightCategory::Vfr);
        assert_eq!(FlightCategory::from("LIFR"), FlightCategory::Lifr);
        assert_eq!(FlightCategory::from("vfr"), FlightCategory::Unknown);
        assert_eq!(FlightCategory::from(""), FlightCategory::Unknown);
    }

    #[test]
    fn category_themes() {
        assert_eq!(FlightCategory::Vfr.theme(), Theme::Green);
        assert_eq!(FlightCategory::Mvfr.theme(), Theme::Blue);
        assert_eq!(FlightCategory::Ifr.theme(), Theme::Red);
        assert_eq!(FlightCategory::Lifr.theme(), Theme::Purple);
        assert_eq!(FlightCategory::Unknown.theme(), Theme::Neutral);
    }
}
