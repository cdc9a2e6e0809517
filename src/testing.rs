use crate::grid::{Grid, GRID_SIZE};

/// A call made on a `FakeGrid`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Call {
    Set { x: i32, y: i32, on: bool },
    All(bool),
    Intensity(u8),
}

/// An in-memory 8x8 grid recording every call it receives.
pub struct FakeGrid {
    /// Led state, indexed as `leds[x][y]`.
    pub leds: [[bool; 8]; 8],
    pub intensity: Option<u8>,
    pub calls: Vec<Call>,
}

impl FakeGrid {
    pub fn new() -> FakeGrid {
        FakeGrid {
            leds: [[false; 8]; 8],
            intensity: None,
            calls: Vec::new(),
        }
    }

    /// Whether every led of column `x` is in state `on`.
    pub fn column_is(&self, x: usize, on: bool) -> bool {
        self.leds[x].iter().all(|&led| led == on)
    }

    pub fn intensities(&self) -> Vec<u8> {
        self.calls
            .iter()
            .filter_map(|call| match *call {
                Call::Intensity(level) => Some(level),
                _ => None,
            })
            .collect()
    }
}

impl Grid for FakeGrid {
    fn set(&mut self, x: i32, y: i32, on: bool) {
        assert!(x >= 0 && x < GRID_SIZE && y >= 0 && y < GRID_SIZE,
                "led {}:{} out of the grid",
                x,
                y);
        self.leds[x as usize][y as usize] = on;
        self.calls.push(Call::Set { x, y, on });
    }

    fn all(&mut self, on: bool) {
        self.leds = [[on; 8]; 8];
        self.calls.push(Call::All(on));
    }

    fn intensity(&mut self, level: u8) {
        self.intensity = Some(level);
        self.calls.push(Call::Intensity(level));
    }
}
