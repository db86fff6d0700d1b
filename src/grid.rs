//! Rectangular grid of maze cells
//!
//! The grid owns every [`Cell`] and exposes bounds-checked accessors; it
//! carries no carving logic of its own. The [`MazeGenerator`] drives all
//! mutation during a run.
//!
//! [`MazeGenerator`]: crate::maze_generator::MazeGenerator

use std::fmt;
use std::ops;

use itertools::Itertools;

use crate::MazeError;

/// Location of one cell in the grid
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Edge of a cell; north points toward row zero
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Every direction, in the canonical enumeration order
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The direction pointing back across the same edge
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// One room of the maze: four wall flags and a visited mark
///
/// Cells start fully enclosed and unvisited. The position is assigned
/// once by the grid and never changes.
#[derive(Clone, Debug)]
pub struct Cell {
    position: Point,
    /// Indexed by [`Direction`]; `true` means the edge is impassable.
    walls: [bool; 4],
    visited: bool,
}

impl Cell {
    fn new(position: Point) -> Self {
        Cell {
            position,
            walls: [true; 4],
            visited: false,
        }
    }

    /// Grid coordinate this cell was created at
    pub fn position(&self) -> Point {
        self.position
    }

    /// Is the wall on the given edge closed?
    pub fn is_wall_closed(&self, direction: Direction) -> bool {
        self.walls[direction.index()]
    }

    /// Has this cell entered the generation walk?
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn set_wall(&mut self, direction: Direction, closed: bool) {
        self.walls[direction.index()] = closed;
    }

    pub(crate) fn mark_visited(&mut self) {
        self.visited = true;
    }

    fn reset(&mut self) {
        self.walls = [true; 4];
        self.visited = false;
    }
}

/// Dense `width × height` cell storage with bounds-checked access
#[derive(Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Row-major; the cell at `(x, y)` lives at `y * width + x`.
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of fully enclosed, unvisited cells
    ///
    /// Returns [`MazeError::InvalidDimension`] when either dimension is
    /// zero; dimensions are never clamped.
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimension { width, height });
        }
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::new(Point::new(x, y))))
            .collect();
        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub fn size(&self) -> usize {
        self.width * self.height
    }

    /// Close every wall and clear every visited flag
    ///
    /// This invalidates any generation run in progress, so during a run
    /// only [`MazeGenerator::reset`] may be used; it rejects the call
    /// instead of corrupting the walk.
    ///
    /// [`MazeGenerator::reset`]: crate::maze_generator::MazeGenerator::reset
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.reset();
        }
    }

    /// The cell at `point`
    ///
    /// Returns [`MazeError::OutOfBounds`] outside
    /// `[0, width) × [0, height)`.
    pub fn cell(&self, point: Point) -> Result<&Cell, MazeError> {
        self.cell_index(point).map(|index| &self.cells[index])
    }

    /// Open or close one direction flag of the cell at `point`
    ///
    /// No side effect beyond the single cell: opening a shared edge
    /// consistently takes one call per side (see
    /// [`Direction::opposite`]).
    pub fn set_wall_open(
        &mut self,
        point: Point,
        direction: Direction,
        open: bool,
    ) -> Result<(), MazeError> {
        let index = self.cell_index(point)?;
        self.cells[index].set_wall(direction, !open);
        Ok(())
    }

    /// Has the cell at `point` entered the generation walk?
    pub fn is_visited(&self, point: Point) -> Result<bool, MazeError> {
        self.cell(point).map(Cell::is_visited)
    }

    /// Flag the cell at `point` as visited
    pub fn mark_visited(&mut self, point: Point) -> Result<(), MazeError> {
        let index = self.cell_index(point)?;
        self.cells[index].mark_visited();
        Ok(())
    }

    /// The adjacent coordinate one cell away, or `None` at the grid edge
    pub fn neighbour(&self, point: Point, direction: Direction) -> Option<Point> {
        let Point { x, y } = point;
        match direction {
            Direction::North if y > 0 => Some(Point::new(x, y - 1)),
            Direction::East if x + 1 < self.width => Some(Point::new(x + 1, y)),
            Direction::South if y + 1 < self.height => Some(Point::new(x, y + 1)),
            Direction::West if x > 0 => Some(Point::new(x - 1, y)),
            _ => None,
        }
    }

    /// Generator-internal mutable access; `point` must be in bounds.
    pub(crate) fn cell_mut(&mut self, point: Point) -> &mut Cell {
        debug_assert!(point.x < self.width && point.y < self.height);
        let index = point.y * self.width + point.x;
        &mut self.cells[index]
    }

    fn cell_index(&self, point: Point) -> Result<usize, MazeError> {
        if point.x < self.width && point.y < self.height {
            Ok(point.y * self.width + point.x)
        } else {
            Err(MazeError::OutOfBounds {
                point,
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl ops::Index<Point> for Grid {
    type Output = Cell;

    /// Panics when `point` is outside the grid; use [`Grid::cell`] for a
    /// recoverable variant.
    fn index(&self, point: Point) -> &Cell {
        match self.cell(point) {
            Ok(cell) => cell,
            Err(_) => panic!("point {} outside the {}x{} grid", point, self.width, self.height),
        }
    }
}

/// ASCII rendering of the walls, one `+--+` band per cell row
///
/// A wall between two cells is drawn closed unless it is open on the
/// near side, so a consistently carved maze renders the same from both
/// sides.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            let row = |x: usize| &self.cells[y * self.width + x];
            let tops = (0..self.width)
                .map(|x| {
                    if row(x).is_wall_closed(Direction::North) {
                        "+--"
                    } else {
                        "+  "
                    }
                })
                .join("");
            writeln!(f, "{tops}+")?;

            let sides = (0..self.width)
                .map(|x| {
                    if row(x).is_wall_closed(Direction::West) {
                        "|  "
                    } else {
                        "   "
                    }
                })
                .join("");
            let east_edge = if row(self.width - 1).is_wall_closed(Direction::East) {
                "|"
            } else {
                " "
            };
            writeln!(f, "{sides}{east_edge}")?;
        }

        let bottoms = (0..self.width)
            .map(|x| {
                let cell = &self.cells[(self.height - 1) * self.width + x];
                if cell.is_wall_closed(Direction::South) {
                    "+--"
                } else {
                    "+  "
                }
            })
            .join("");
        write!(f, "{bottoms}+")
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, Grid, Point};
    use crate::MazeError;

    #[test]
    fn new_grid_is_fully_enclosed_and_unvisited() {
        let grid = Grid::new(3, 2).unwrap();
        assert_eq!(grid.size(), 6);

        for y in 0..2 {
            for x in 0..3 {
                let cell = grid.cell(Point::new(x, y)).unwrap();
                assert_eq!(cell.position(), Point::new(x, y));
                assert!(!cell.is_visited());
                for direction in Direction::ALL {
                    assert!(cell.is_wall_closed(direction));
                }
            }
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Grid::new(0, 5).unwrap_err(),
            MazeError::InvalidDimension { width: 0, height: 5 }
        );
        assert_eq!(
            Grid::new(5, 0).unwrap_err(),
            MazeError::InvalidDimension { width: 5, height: 0 }
        );
        assert_eq!(
            Grid::new(0, 0).unwrap_err(),
            MazeError::InvalidDimension { width: 0, height: 0 }
        );
    }

    #[test]
    fn out_of_bounds_access_is_surfaced() {
        let mut grid = Grid::new(4, 4).unwrap();
        let outside = Point::new(4, 0);
        let expected = MazeError::OutOfBounds {
            point: outside,
            width: 4,
            height: 4,
        };

        assert_eq!(grid.cell(outside).unwrap_err(), expected);
        assert_eq!(grid.is_visited(outside).unwrap_err(), expected);
        assert_eq!(grid.mark_visited(outside).unwrap_err(), expected);
        assert_eq!(
            grid.set_wall_open(outside, Direction::North, true).unwrap_err(),
            expected
        );
    }

    #[test]
    fn set_wall_open_touches_one_cell_only() {
        let mut grid = Grid::new(2, 1).unwrap();
        let west = Point::new(0, 0);
        let east = Point::new(1, 0);

        grid.set_wall_open(west, Direction::East, true).unwrap();

        assert!(!grid[west].is_wall_closed(Direction::East));
        // The shared edge seen from the other cell is untouched.
        assert!(grid[east].is_wall_closed(Direction::West));
        for direction in [Direction::North, Direction::South, Direction::West] {
            assert!(grid[west].is_wall_closed(direction));
        }

        grid.set_wall_open(west, Direction::East, false).unwrap();
        assert!(grid[west].is_wall_closed(Direction::East));
    }

    #[test]
    fn visited_flag_round_trip() {
        let mut grid = Grid::new(2, 2).unwrap();
        let point = Point::new(1, 1);

        assert!(!grid.is_visited(point).unwrap());
        grid.mark_visited(point).unwrap();
        assert!(grid.is_visited(point).unwrap());
        assert!(!grid.is_visited(Point::new(0, 0)).unwrap());
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.mark_visited(Point::new(0, 0)).unwrap();
        grid.set_wall_open(Point::new(0, 0), Direction::East, true)
            .unwrap();

        grid.reset();

        assert!(!grid.is_visited(Point::new(0, 0)).unwrap());
        assert!(grid[Point::new(0, 0)].is_wall_closed(Direction::East));
    }

    #[test]
    fn neighbour_respects_grid_bounds() {
        let grid = Grid::new(3, 3).unwrap();

        // Interior cell has all four neighbours.
        let mid = Point::new(1, 1);
        assert_eq!(grid.neighbour(mid, Direction::North), Some(Point::new(1, 0)));
        assert_eq!(grid.neighbour(mid, Direction::East), Some(Point::new(2, 1)));
        assert_eq!(grid.neighbour(mid, Direction::South), Some(Point::new(1, 2)));
        assert_eq!(grid.neighbour(mid, Direction::West), Some(Point::new(0, 1)));

        // Corners lose two directions each.
        let origin = Point::new(0, 0);
        assert_eq!(grid.neighbour(origin, Direction::North), None);
        assert_eq!(grid.neighbour(origin, Direction::West), None);
        assert_eq!(grid.neighbour(origin, Direction::East), Some(Point::new(1, 0)));

        let far = Point::new(2, 2);
        assert_eq!(grid.neighbour(far, Direction::South), None);
        assert_eq!(grid.neighbour(far, Direction::East), None);
        assert_eq!(grid.neighbour(far, Direction::West), Some(Point::new(1, 2)));
    }

    #[test]
    fn westward_neighbour_exists_away_from_the_edge() {
        // A column-zero check must not block every westward move.
        let grid = Grid::new(3, 1).unwrap();
        assert_eq!(
            grid.neighbour(Point::new(2, 0), Direction::West),
            Some(Point::new(1, 0))
        );
        assert_eq!(grid.neighbour(Point::new(0, 0), Direction::West), None);
    }

    #[test]
    fn opposite_directions_pair_up() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::South.opposite(), Direction::North);
        assert_eq!(Direction::East.opposite(), Direction::West);
        assert_eq!(Direction::West.opposite(), Direction::East);
    }

    #[test]
    fn display_draws_closed_and_open_walls() {
        let mut grid = Grid::new(2, 2).unwrap();
        let expected_closed = "\
+--+--+
|  |  |
+--+--+
|  |  |
+--+--+";
        assert_eq!(format!("{grid}"), expected_closed);

        // Open the edge between the top two cells, both sides.
        grid.set_wall_open(Point::new(0, 0), Direction::East, true)
            .unwrap();
        grid.set_wall_open(Point::new(1, 0), Direction::West, true)
            .unwrap();
        let expected_open = "\
+--+--+
|     |
+--+--+
|  |  |
+--+--+";
        assert_eq!(format!("{grid}"), expected_open);
    }
}
