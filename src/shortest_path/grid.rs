use crate::error::Error;
use crate::io::Scanner;

pub const MAX_SIDE: usize = 1000;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn as_char(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::Up => 'U',
            Direction::Down => 'D',
        }
    }
}

/// Rectangular map of floor and wall cells with one start and one end.
#[derive(Debug, Clone)]
pub struct Grid {
    height: usize,
    width: usize,
    is_floor: Vec<bool>,
    start: (usize, usize),
    end: (usize, usize),
}

impl Grid {
    /// Reads `height * width` cells, whitespace between them ignored.
    pub fn read(height: usize, width: usize, input: &mut Scanner) -> Result<Self, Error> {
        if !(1..=MAX_SIDE).contains(&height) || !(1..=MAX_SIDE).contains(&width) {
            return Err(Error::InvalidDimensions { height: height as i64, width: width as i64 });
        }

        let mut is_floor = vec![false; height * width];
        let (mut start, mut end) = (None, None);
        for y in 0..height {
            for x in 0..width {
                let cell = input.byte().ok_or(Error::UnexpectedEof("grid cell"))?;
                let endpoint = match cell {
                    b'.' => None,
                    b'#' => continue,
                    b'A' => Some(&mut start),
                    b'B' => Some(&mut end),
                    _ => return Err(Error::InvalidCell(cell as char)),
                };
                if let Some(endpoint) = endpoint {
                    if endpoint.replace((y, x)).is_some() {
                        return Err(Error::RepeatedEndpoint(cell as char));
                    }
                }
                is_floor[y * width + x] = true;
            }
        }

        Ok(Self {
            height,
            width,
            is_floor,
            start: start.ok_or(Error::MissingEndpoint('A'))?,
            end: end.ok_or(Error::MissingEndpoint('B'))?,
        })
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn num_cells(&self) -> usize {
        self.height * self.width
    }

    // (row, column)
    pub fn start(&self) -> (usize, usize) {
        self.start
    }

    pub fn end(&self) -> (usize, usize) {
        self.end
    }

    #[inline]
    pub fn index(&self, (y, x): (usize, usize)) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn is_floor(&self, cell: (usize, usize)) -> bool {
        self.is_floor[self.index(cell)]
    }

    /// Cell reached by moving from `cell` in `direction`, if it stays on the map.
    pub fn step(&self, (y, x): (usize, usize), direction: Direction) -> Option<(usize, usize)> {
        match direction {
            Direction::Left => x.checked_sub(1).map(|x| (y, x)),
            Direction::Right => (x + 1 < self.width).then_some((y, x + 1)),
            Direction::Up => y.checked_sub(1).map(|y| (y, x)),
            Direction::Down => (y + 1 < self.height).then_some((y + 1, x)),
        }
    }

    pub fn neighbors(&self, cell: (usize, usize)) -> impl Iterator<Item = (usize, usize)> + '_ {
        [Direction::Left, Direction::Right, Direction::Up, Direction::Down]
            .into_iter()
            .filter_map(move |d| self.step(cell, d))
            .filter(|&c| self.is_floor(c))
    }
}
