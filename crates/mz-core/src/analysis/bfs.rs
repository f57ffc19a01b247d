//! Breadth-first distance search

use crate::grid::{Cell, Direction, OpenGrid};

/// Distances and predecessors from one BFS run.
///
/// Unreached cells have distance `-1` and no predecessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    width: usize,
    height: usize,
    start: Cell,
    distance: Vec<i32>,
    predecessor: Vec<Option<Cell>>,
}

impl DistanceMap {
    fn new(width: usize, height: usize, start: Cell) -> Self {
        Self {
            width,
            height,
            start,
            distance: vec![-1; width * height],
            predecessor: vec![None; width * height],
        }
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        (cell.x < self.width && cell.y < self.height).then(|| cell.y * self.width + cell.x)
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    /// Steps from the start, or `-1` when unreached or out of range
    pub fn distance(&self, cell: Cell) -> i32 {
        self.index(cell).map_or(-1, |i| self.distance[i])
    }

    pub fn is_reached(&self, cell: Cell) -> bool {
        self.distance(cell) >= 0
    }

    /// Cell this one was first reached from
    pub fn predecessor(&self, cell: Cell) -> Option<Cell> {
        self.index(cell).and_then(|i| self.predecessor[i])
    }

    /// Reached interior cell with the strictly greatest distance.
    ///
    /// Scans row-major and keeps the first maximum; the start is returned
    /// when nothing is farther.
    pub fn farthest_interior(&self) -> (Cell, i32) {
        let mut best = (self.start, 0);
        for y in 1..self.height.saturating_sub(1) {
            for x in 1..self.width.saturating_sub(1) {
                let d = self.distance[y * self.width + x];
                if d > best.1 {
                    best = (Cell::new(x, y), d);
                }
            }
        }
        best
    }
}

/// Run a BFS from `start` over open interior cells.
///
/// Neighbours are visited in right, left, down, up order and the queue is a
/// plain vector walked by index, so predecessors are deterministic. The start
/// itself is always given distance zero.
pub fn bfs(grid: &OpenGrid, start: Cell) -> DistanceMap {
    let width = grid.width();
    let height = grid.height();
    let mut map = DistanceMap::new(width, height, start);

    let Some(start_idx) = map.index(start) else {
        return map;
    };
    map.distance[start_idx] = 0;

    let mut queue = vec![start];
    let mut head = 0;
    while head < queue.len() {
        let current = queue[head];
        head += 1;
        let current_dist = map.distance[current.y * width + current.x];

        for dir in Direction::ALL {
            let Some(next) = current.step(dir) else {
                continue;
            };
            if next.x < 1 || next.y < 1 || next.x + 1 >= width || next.y + 1 >= height {
                continue;
            }
            let idx = next.y * width + next.x;
            if !grid.is_open_cell(next) || map.distance[idx] != -1 {
                continue;
            }
            map.distance[idx] = current_dist + 1;
            map.predecessor[idx] = Some(current);
            queue.push(next);
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> OpenGrid {
        OpenGrid::from_rows(&[
            "#######",
            "#...#.#",
            "#.#.#.#",
            "#.#...#",
            "#######",
        ])
    }

    #[test]
    fn test_distances() {
        let map = bfs(&grid(), Cell::new(1, 1));
        assert_eq!(map.distance(Cell::new(1, 1)), 0);
        assert_eq!(map.distance(Cell::new(3, 1)), 2);
        assert_eq!(map.distance(Cell::new(1, 3)), 2);
        assert_eq!(map.distance(Cell::new(5, 1)), 8);
        assert_eq!(map.distance(Cell::new(2, 2)), -1);
        assert_eq!(map.distance(Cell::new(40, 40)), -1);
    }

    #[test]
    fn test_predecessor_prefers_right_then_down() {
        // (2, 2) is two steps away both ways; the cell to the right of the
        // start is dequeued first, so it claims (2, 2)
        let g = OpenGrid::from_rows(&["#####", "#...#", "#...#", "#####"]);
        let map = bfs(&g, Cell::new(1, 1));
        assert_eq!(map.distance(Cell::new(2, 2)), 2);
        assert_eq!(map.predecessor(Cell::new(2, 2)), Some(Cell::new(2, 1)));
        assert_eq!(map.predecessor(Cell::new(1, 1)), None);
    }

    #[test]
    fn test_border_cells_never_entered() {
        let mut g = grid();
        g.open(6, 1);
        g.open(5, 0);
        let map = bfs(&g, Cell::new(1, 1));
        assert_eq!(map.distance(Cell::new(6, 1)), -1);
        assert_eq!(map.distance(Cell::new(5, 0)), -1);
    }

    #[test]
    fn test_closed_start_still_zero() {
        let g = OpenGrid::closed(5, 5);
        let map = bfs(&g, Cell::new(1, 1));
        assert_eq!(map.distance(Cell::new(1, 1)), 0);
        assert_eq!(map.distance(Cell::new(2, 1)), -1);
    }

    #[test]
    fn test_farthest_interior() {
        let map = bfs(&grid(), Cell::new(1, 1));
        assert_eq!(map.farthest_interior(), (Cell::new(5, 1), 8));

        let empty = bfs(&OpenGrid::closed(5, 5), Cell::new(1, 1));
        assert_eq!(empty.farthest_interior(), (Cell::new(1, 1), 0));
    }
}
