//! Defines [`ClockFrame`], the time zone in which the dashboard reads "now".

use chrono::{Local, NaiveDateTime, Utc};
use std::fmt;

/// Time zone the payload's wall-clock timestamps are expressed in.
///
/// The next-24-hour window compares each record's naive timestamp against "now";
/// both must be read in the same frame. OpenWeatherMap's `dt_txt` is UTC, so
/// [`ClockFrame::Utc`] is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClockFrame {
    /// Timestamps are UTC wall-clock times.
    #[default]
    Utc,
    /// Timestamps are in the host's local time zone.
    Local,
}

impl ClockFrame {
    /// The current instant as a naive wall-clock time in this frame.
    pub fn now(&self) -> NaiveDateTime {
        match self {
            ClockFrame::Utc => Utc::now().naive_utc(),
            ClockFrame::Local => Local::now().naive_local(),
        }
    }
}

impl fmt::Display for ClockFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockFrame::Utc => write!(f, "utc"),
            ClockFrame::Local => write!(f, "local"),
        }
    }
}
