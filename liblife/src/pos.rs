#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Moves by (dx, dy) on a torus of the given size, wrapping around every edge.
    pub fn wrapping_offset(self, dx: isize, dy: isize, width: usize, height: usize) -> Self {
        fn wrap(center: usize, offset: isize, len: usize) -> usize {
            (center as isize + offset).rem_euclid(len as isize) as usize
        }

        Self {
            x: wrap(self.x, dx, width),
            y: wrap(self.y, dy, height),
        }
    }
}

impl From<[usize; 2]> for Position {
    fn from(value: [usize; 2]) -> Self {
        Self {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl From<Position> for [usize; 2] {
    fn from(value: Position) -> Self {
        [value.x, value.y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_offset_crosses_every_edge() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.wrapping_offset(-1, -1, 10, 5), Position::new(9, 4));

        let far = Position::new(9, 4);
        assert_eq!(far.wrapping_offset(1, 1, 10, 5), Position::new(0, 0));
    }

    #[test]
    fn wrapping_offset_inside_is_plain_addition() {
        let pos = Position::new(3, 3);
        assert_eq!(pos.wrapping_offset(1, -1, 10, 10), Position::new(4, 2));
    }
}
