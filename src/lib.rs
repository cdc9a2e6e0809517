//! Draws the time of day on a monome grid as a progress meter with a precision of an eighth of
//! an hour, and plays it back from 4am to 8pm followed by a fade out.

extern crate futures;
extern crate rosc;
extern crate tokio;
#[macro_use]
extern crate log;
extern crate thiserror;

pub mod clock;
pub mod config;
pub mod demo;
pub mod device;
pub mod error;
pub mod grid;
pub mod progress;

#[cfg(test)]
mod testing;

pub use clock::{display_time, map_time, Display, TimeOfDay};
pub use config::Config;
pub use device::Monome;
pub use error::{Error, Result};
pub use grid::Grid;
pub use progress::progress;
