use std::time::Duration;

use crate::clock::{display_time, TimeOfDay};
use crate::grid::{Grid, MAX_INTENSITY};

/// The tempo all the delays of the demo derive from, in beats per minute.
pub const BPM: u64 = 98;

/// Brightness the grid is left at when the demo is done.
pub const DEFAULT_INTENSITY: u8 = MAX_INTENSITY;

/// Hours of the day swept by the demo, in 24-hour form.
pub const SWEEP_START: i32 = 4;
pub const SWEEP_END: i32 = 20;

/// Number of steps per hour in the sweep, one per eighth of an hour.
pub const STEPS_PER_HOUR: i32 = 8;

/// Speed multipliers of the demo phases.
const SWEEP_SPEED: u64 = 3;
const PAUSE_SPEED: u64 = 400;
const FADE_SPEED: u64 = 16;

/// The length of a beat at `speed` times the tempo, rounded down to the millisecond.
pub fn beat(speed: u64) -> Duration {
    Duration::from_millis(60_000 / (BPM * speed))
}

/// The minute at which `step` of an hour starts, rounded up.
fn step_minute(step: i32) -> i32 {
    // ceil(step * 7.5)
    (step * 15 + 1) / 2
}

/// Shows every eighth of an hour between 4am and 8pm, one beat at a time.
pub fn sweep<G, S>(grid: &mut G, sleep: &mut S)
    where G: Grid,
          S: FnMut(Duration)
{
    for hour in SWEEP_START..=SWEEP_END {
        for step in 0..STEPS_PER_HOUR {
            let time = TimeOfDay::from_24h(hour, step_minute(step));
            info!("time: {}", time);
            display_time(grid, time.hour, time.minute, time.am);
            sleep(beat(SWEEP_SPEED));
        }
    }
}

/// Dims the grid from full brightness down to zero, one level per beat.
pub fn fade_out<G, S>(grid: &mut G, sleep: &mut S)
    where G: Grid,
          S: FnMut(Duration)
{
    for level in (0..=MAX_INTENSITY).rev() {
        grid.intensity(level);
        sleep(beat(FADE_SPEED));
    }
}

/// Runs the whole demo: the time sweep, a flash of the full grid fading out, and a clean up so
/// that the grid is left dark at its default brightness.
pub fn run<G, S>(grid: &mut G, sleep: &mut S)
    where G: Grid,
          S: FnMut(Duration)
{
    sweep(grid, sleep);

    sleep(beat(PAUSE_SPEED));

    grid.all(true);
    fade_out(grid, sleep);

    grid.all(false);
    grid.intensity(DEFAULT_INTENSITY);
}
