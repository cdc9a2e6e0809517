use crate::grid::{Grid, GRID_SIZE};

/// Fill pattern of the partially lit column, indexed by `[row][eighths]`.
///
/// Each eighth is easy to tell apart from its neighbours, and the quarters look different from
/// the odd eighths. Fraction 0 is fully off and fraction 8 fully on, so they join seamlessly with
/// the whole columns on either side.
pub const EIGHTHS_PATTERN: [[bool; 9]; 8] = {
    const O: bool = false;
    const X: bool = true;
    [[O, O, O, O, O, O, O, X, X],
     [O, O, O, O, O, X, X, X, X],
     [O, O, O, X, X, X, X, X, X],
     [O, X, X, O, X, O, X, O, X],
     [O, O, X, O, X, O, X, O, X],
     [O, O, O, X, X, X, X, X, X],
     [O, O, O, O, O, X, X, X, X],
     [O, O, O, O, O, O, O, X, X]]
};

/// Draw a progress meter in the range [0, 8], with a precision of an eighth of a column.
///
/// The first `num` columns are lit, and the column right after them shows `eighths` using
/// `EIGHTHS_PATTERN`. In `reverse` mode the meter grows from the right edge of the grid instead.
///
/// A `num` outside of [0, 8) lights the grid fully on or off, without a partial column.
pub fn progress<G: Grid>(grid: &mut G, num: i32, eighths: i32, reverse: bool) {
    // whole columns
    for c in 0..GRID_SIZE {
        let on = if reverse { c > 7 - num } else { c < num };
        for r in 0..GRID_SIZE {
            grid.set(c, r, on);
        }
    }

    if num >= 0 && num < GRID_SIZE && eighths >= 0 && eighths <= 8 {
        let c = if reverse { 7 - num } else { num };
        for r in 0..GRID_SIZE {
            grid.set(c, r, EIGHTHS_PATTERN[r as usize][eighths as usize]);
        }
    }
}
