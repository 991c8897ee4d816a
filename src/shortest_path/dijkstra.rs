use crate::shortest_path::grid::{Direction, Grid};
use log::debug;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

pub const UNREACHABLE: usize = usize::MAX;

// checked when walking back from the end; the move is the one that led into the current cell
const RECONSTRUCTION_ORDER: [Direction; 4] = [Direction::Right, Direction::Left, Direction::Down, Direction::Up];

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Path {
    pub moves: Vec<Direction>,
}

impl Path {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.moves.iter().try_for_each(|d| write!(f, "{}", d.as_char()))
    }
}

#[derive(Default)]
pub struct Dijkstra {
    distances: Vec<usize>,
    visited: Vec<bool>,
    heap: BinaryHeap<Reverse<(usize, usize)>>,
}

impl Dijkstra {
    /// Shortest path from the start to the end of `grid`, `None` if the end is walled off.
    pub fn solve(&mut self, grid: &Grid) -> Option<Path> {
        self.distances.clear();
        self.distances.resize(grid.num_cells(), UNREACHABLE);
        self.visited.clear();
        self.visited.resize(grid.num_cells(), false);
        self.heap.clear();

        let start = grid.index(grid.start());
        self.distances[start] = 0;
        self.heap.push(Reverse((0, start)));

        while let Some(Reverse((d, u))) = self.heap.pop() {
            if self.visited[u] {
                continue;
            }
            self.visited[u] = true;

            let cell = (u / grid.width(), u % grid.width());
            for next in grid.neighbors(cell) {
                let v = grid.index(next);
                if d + 1 < self.distances[v] {
                    self.distances[v] = d + 1;
                    self.heap.push(Reverse((d + 1, v)));
                }
            }
        }

        let end = grid.index(grid.end());
        debug!("distance to end: {}", self.distances[end]);
        if self.distances[end] == UNREACHABLE {
            return None;
        }
        Some(self.reconstruct(grid))
    }

    pub fn distance(&self, grid: &Grid, cell: (usize, usize)) -> usize {
        self.distances[grid.index(cell)]
    }

    fn reconstruct(&self, grid: &Grid) -> Path {
        let mut moves = Vec::with_capacity(self.distances[grid.index(grid.end())]);
        let mut cell = grid.end();
        while cell != grid.start() {
            let d = self.distance(grid, cell);
            // some floor neighbour is one step closer, otherwise d would not be final
            for direction in RECONSTRUCTION_ORDER {
                let prev = match grid.step(cell, opposite(direction)) {
                    Some(prev) if grid.is_floor(prev) && self.distance(grid, prev) == d - 1 => prev,
                    _ => continue,
                };
                moves.push(direction);
                cell = prev;
                break;
            }
        }
        moves.reverse();
        Path { moves }
    }
}

fn opposite(direction: Direction) -> Direction {
    match direction {
        Direction::Left => Direction::Right,
        Direction::Right => Direction::Left,
        Direction::Up => Direction::Down,
        Direction::Down => Direction::Up,
    }
}
