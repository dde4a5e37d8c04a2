use flightface::{Display, Theme};

/* ---------- */

/// Renders the face as a single console line, redrawn on every change.
#[derive(Debug, Default)]
pub(crate) struct ConsolePanel {
    clock: String,
    station: String,
    condition: String,
    theme: Theme,
}

impl ConsolePanel {
    fn redraw(&self) {
        let theme = match self.theme {
            Theme::Neutral => "neutral",
            Theme::Green => "green",
            Theme::Blue => "blue",
            Theme::Red => "red",
            Theme::Purple => "purple",
        };

        println!(
            "| {:>5} | {:<7} | {:<7} | {theme:<7} |",
            self.clock, self.station, self.condition
        );
    }
}

impl Display for ConsolePanel {
    fn set_clock(&mut self, text: &str) {
        self.clock = text.to_owned();
        self.redraw();
    }

    fn set_station(&mut self, text: &str) {
        self.station = text.to_owned();
        self.redraw();
    }

    fn set_condition(&mut self, text: &str) {
        self.condition = text.to_owned();
        self.redraw();
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.redraw();
    }
}
