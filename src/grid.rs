/// The number of columns and rows the displays are drawn on.
pub const GRID_SIZE: i32 = 8;

/// The highest global intensity a grid accepts.
pub const MAX_INTENSITY: u8 = 15;

/// The LED operations used to draw on a grid.
///
/// Calls are fire-and-forget: a device that fails to deliver a message logs it and carries on.
pub trait Grid {
    /// Set a single led on or off.
    ///
    /// # Arguments
    ///
    /// - `x` - the column of the led, 0-indexed from the left.
    /// - `y` - the row of the led, 0-indexed from the top.
    /// - `on` - true to light the led up, false to turn it off.
    fn set(&mut self, x: i32, y: i32, on: bool);

    /// Set every led of the grid to the same state.
    fn all(&mut self, on: bool);

    /// Set the global brightness of the grid, between 0 and 15.
    fn intensity(&mut self, level: u8);
}
