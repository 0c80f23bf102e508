//! Progress reporting using indicatif.
//!
//! Thin wrapper around indicatif's `ProgressBar` so the read loop does
//! not deal with styles directly.

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle};

pub struct ProgressBar {
    bar: IndicatifBar,
}

impl ProgressBar {
    /// Byte-based bar with a known total.
    pub fn new(total: usize, label: &str) -> Self {
        let bar = IndicatifBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40.cyan/blue}] {percent:>3}% ({pos}/{len})")
                .expect("invalid progress bar template")
                .progress_chars("█░"),
        );
        bar.set_message(label.to_string());

        Self { bar }
    }

    /// Spinner for inputs whose size is unknown (e.g. compressed files
    /// without usable metadata).
    pub fn new_spinner(label: &str) -> Self {
        let bar = IndicatifBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{msg} {spinner} {pos}")
                .expect("invalid spinner template"),
        );
        bar.set_message(label.to_string());

        Self { bar }
    }

    pub fn update(&self, current: usize) {
        self.bar.set_position(current as u64);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
