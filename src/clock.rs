use std::fmt;

use crate::grid::Grid;
use crate::progress::progress;

/// First hour of the morning shown on the grid, the meter is empty at that time.
pub const MORNING_START: i32 = 4;

/// Last hour of the afternoon shown on the grid, in 12-hour form. The meter is empty again then.
pub const EVENING_END: i32 = 8;

/// What the grid shows for a given time of day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Display {
    /// Outside of the 4am to 8pm window, all leds are off.
    Blank,
    /// A progress meter, see `progress::progress`.
    Progress {
        num: i32,
        eighths: i32,
        reverse: bool,
    },
}

/// A time of day, with the hour in 12-hour form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeOfDay {
    /// Hour in [0, 12). Noon is hour 0 in the afternoon.
    pub hour: i32,
    /// Minute in [0, 60).
    pub minute: i32,
    pub am: bool,
}

impl TimeOfDay {
    /// Converts a 24-hour time into its 12-hour form.
    pub fn from_24h(hour: i32, minute: i32) -> TimeOfDay {
        if hour >= 12 {
            TimeOfDay { hour: hour - 12, minute, am: false }
        } else {
            TimeOfDay { hour, minute, am: true }
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{} {}", self.hour, self.minute, if self.am { "am" } else { "pm" })
    }
}

/// Maps a time of day to what the grid shows.
///
/// The meter starts empty at 4am, fills from the left one column per hour until it is full at
/// noon, then empties from the left until 8pm. Each hour is split in eighths of 7.5 minutes.
pub fn map_time(hour: i32, minute: i32, am: bool) -> Display {
    // floor(minute / 7.5)
    let eighths = minute * 2 / 15;
    if am {
        if hour < MORNING_START {
            return Display::Blank;
        }
        Display::Progress {
            num: hour - MORNING_START,
            eighths,
            reverse: false,
        }
    } else {
        if hour > EVENING_END {
            return Display::Blank;
        }
        Display::Progress {
            num: 7 - hour,
            eighths: 8 - eighths,
            reverse: true,
        }
    }
}

/// Shows a time of day on the grid.
pub fn display_time<G: Grid>(grid: &mut G, hour: i32, minute: i32, am: bool) {
    match map_time(hour, minute, am) {
        Display::Blank => grid.all(false),
        Display::Progress { num, eighths, reverse } => progress(grid, num, eighths, reverse),
    }
}
