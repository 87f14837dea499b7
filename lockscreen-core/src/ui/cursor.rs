//! One-pixel cursor

use lockscreen_display::geometry::{HEIGHT, WIDTH};

use crate::input::InputLevels;

/// Cursor position and draw mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    pub x: u8,
    pub y: u8,
    /// Drawn as a clear pixel while over a button on the lock screen
    pub inverted: bool,
}

impl Cursor {
    pub fn new(x: u8, y: u8) -> Self {
        Self {
            x: x.min((WIDTH - 1) as u8),
            y: y.min((HEIGHT - 1) as u8),
            inverted: false,
        }
    }

    /// Move one pixel per held direction, stopping at the edges
    ///
    /// Returns the previous position if the cursor moved.
    pub fn step(&mut self, levels: &InputLevels) -> Option<(u8, u8)> {
        let old = (self.x, self.y);

        if levels.up && self.y > 0 {
            self.y -= 1;
        }
        if levels.down && (self.y as usize) < HEIGHT - 1 {
            self.y += 1;
        }
        if levels.left && self.x > 0 {
            self.x -= 1;
        }
        if levels.right && (self.x as usize) < WIDTH - 1 {
            self.x += 1;
        }

        (old != (self.x, self.y)).then_some(old)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn held(up: bool, down: bool, left: bool, right: bool) -> InputLevels {
        InputLevels {
            up,
            down,
            left,
            right,
            activate: false,
        }
    }

    #[test]
    fn test_diagonal_step() {
        let mut c = Cursor::new(64, 32);
        assert_eq!(c.step(&held(true, false, false, true)), Some((64, 32)));
        assert_eq!((c.x, c.y), (65, 31));
    }

    #[test]
    fn test_opposite_directions_cancel() {
        let mut c = Cursor::new(64, 32);
        assert_eq!(c.step(&held(true, true, true, true)), None);
        assert_eq!((c.x, c.y), (64, 32));
    }

    #[test]
    fn test_edges_stop_movement() {
        let mut c = Cursor::new(0, 0);
        assert_eq!(c.step(&held(true, false, true, false)), None);

        let mut c = Cursor::new(127, 63);
        assert_eq!(c.step(&held(false, true, false, true)), None);
        assert_eq!((c.x, c.y), (127, 63));
    }

    #[test]
    fn test_new_clamps() {
        let c = Cursor::new(255, 255);
        assert_eq!((c.x, c.y), (127, 63));
        assert!(!c.inverted);
    }

    proptest! {
        #[test]
        fn prop_never_leaves_panel(
            start in (any::<u8>(), any::<u8>()),
            moves in proptest::collection::vec((any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()), 0..300),
        ) {
            let mut c = Cursor::new(start.0, start.1);
            for (u, d, l, r) in moves {
                c.step(&held(u, d, l, r));
                prop_assert!((c.x as usize) < WIDTH);
                prop_assert!((c.y as usize) < HEIGHT);
            }
        }
    }
}
