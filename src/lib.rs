//! Perfect maze generation you can watch happen
//!
//! A [`MazeGenerator`] carves a perfect maze (exactly one simple path
//! between any two cells) over a rectangular [`Grid`] using randomized
//! depth-first backtracking. The walk advances one unit of work per
//! [`MazeGenerator::step`] call, so a host application can interleave
//! generation with drawing or any other periodic work instead of waiting
//! for the whole maze at once. Each call reports what it did as a
//! [`Step`], which doubles as the wall-removal event stream and the
//! completion signal.
//!
//! # Examples
//! Generate and print an 8×8 maze:
//! ```
//! use maze_carver::{Grid, MazeGenerator, Point, Step};
//!
//! let grid = Grid::new(8, 8).unwrap();
//! let mut generator = MazeGenerator::new(grid, Some(13));
//! generator.start(Point::new(0, 0)).unwrap();
//! while generator.step() != Step::Finished {}
//! println!("{}", generator.grid());
//! ```
//!
//! Observe every wall removal as it happens:
//! ```
//! use maze_carver::{Grid, MazeGenerator, Point, Step};
//!
//! let grid = Grid::new(4, 4).unwrap();
//! let mut generator = MazeGenerator::new(grid, None);
//! generator.start(Point::new(0, 0)).unwrap();
//! loop {
//!     match generator.step() {
//!         Step::Carved { from, to, .. } => println!("opened {from} -> {to}"),
//!         Step::Backtracked { .. } => {}
//!         Step::Finished => break,
//!     }
//! }
//! ```

pub mod grid;
pub mod maze_generator;

pub use grid::{Cell, Direction, Grid, Point};
pub use maze_generator::{IndexSource, MazeGenerator, Step};

use thiserror::Error;

/// Failures of grid construction, cell access and run control
///
/// All of these surface synchronously at the offending call; none is
/// silently recovered or clamped.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    /// A grid dimension was zero at construction.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// A coordinate accessor was called outside the grid extent.
    #[error("point {point} is outside the {width}x{height} grid")]
    OutOfBounds {
        point: Point,
        width: usize,
        height: usize,
    },

    /// A new run or a grid reset was requested while a run is in
    /// progress. Finish or abort the current run first.
    #[error("a generation run is already in progress")]
    AlreadyRunning,
}
