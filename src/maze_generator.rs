//! Randomized depth-first maze carving, one step at a time

use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::grid::{Direction, Grid, Point};
use crate::MazeError;

/// Uniform random index in `0..len`
///
/// The generator draws all of its randomness through this trait so that
/// tests can substitute a scripted source. Every [`rand::Rng`] already
/// implements it.
pub trait IndexSource {
    /// A uniformly distributed index in `0..len`; `len` is at least 1.
    fn uniform_index(&mut self, len: usize) -> usize;
}

impl<R: Rng> IndexSource for R {
    fn uniform_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// What a single [`MazeGenerator::step`] call did
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Step {
    /// The wall between `from` and `to` was opened on both sides and
    /// `to` became the active cell.
    Carved {
        from: Point,
        to: Point,
        direction: Direction,
    },
    /// The active cell was a dead end and was removed from the walk.
    Backtracked { cell: Point },
    /// Every reachable cell has been visited and backtracked. Repeated
    /// calls keep reporting this without touching the grid.
    Finished,
}

/// Restartable, steppable depth-first backtracking maze carver
///
/// The generator owns its [`Grid`]. A run begins with
/// [`start`](Self::start) and advances one unit of work per
/// [`step`](Self::step) call, so an external driver (a game tick, a
/// timer callback, a plain test loop) controls the pacing. When the run
/// completes, the open passages form a spanning tree over the cells:
/// every cell is reachable and exactly `size − 1` wall pairs are open.
pub struct MazeGenerator<R = StdRng> {
    grid: Grid,
    random: R,
    /// Backtracking path from the seed cell to the active cell.
    stack: Vec<Point>,
    running: bool,
}

impl MazeGenerator<StdRng> {
    /// Generator backed by a standard RNG
    ///
    /// With `seed: None` the RNG is seeded from OS entropy; pass a seed
    /// for reproducible mazes.
    pub fn new(grid: Grid, seed: Option<u64>) -> Self {
        Self::with_random_source(
            grid,
            if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        )
    }
}

impl<R: IndexSource> MazeGenerator<R> {
    /// Generator drawing candidate indices from an arbitrary source
    pub fn with_random_source(grid: Grid, random: R) -> Self {
        MazeGenerator {
            grid,
            random,
            stack: Vec::new(),
            running: false,
        }
    }

    /// Begin a generation run from `seed_cell`
    ///
    /// Resets the grid, marks the seed cell visited and pushes it onto
    /// the walk. Returns [`MazeError::AlreadyRunning`] while a run is in
    /// progress and [`MazeError::OutOfBounds`] for an invalid seed cell;
    /// in both cases nothing is modified.
    pub fn start(&mut self, seed_cell: Point) -> Result<(), MazeError> {
        if self.running {
            return Err(MazeError::AlreadyRunning);
        }
        self.grid.cell(seed_cell)?;

        debug!(
            "starting maze generation over a {}x{} grid from {}",
            self.grid.width(),
            self.grid.height(),
            seed_cell
        );
        self.grid.reset();
        self.grid.mark_visited(seed_cell)?;
        self.stack.clear();
        self.stack.push(seed_cell);
        self.running = true;
        Ok(())
    }

    /// Advance the walk by one unit of work
    ///
    /// Either opens one wall toward a randomly chosen unvisited
    /// neighbour and moves there, or backtracks one cell from a dead
    /// end. A backtrack that empties the walk reports [`Step::Finished`]
    /// in the same call rather than stalling for one extra invocation.
    /// Calling before [`start`](Self::start) or after completion is a
    /// no-op reporting [`Step::Finished`].
    pub fn step(&mut self) -> Step {
        let current = match self.stack.last() {
            Some(&point) => point,
            None => {
                self.running = false;
                return Step::Finished;
            }
        };

        let candidates = self.unvisited_neighbours(current);
        if candidates.is_empty() {
            // Dead end: unwind one cell.
            self.stack.pop();
            if self.stack.is_empty() {
                self.running = false;
                debug!("maze generation finished");
                return Step::Finished;
            }
            return Step::Backtracked { cell: current };
        }

        let (direction, neighbour) = candidates[self.random.uniform_index(candidates.len())];
        self.carve(current, neighbour, direction);
        self.stack.push(neighbour);
        Step::Carved {
            from: current,
            to: neighbour,
            direction,
        }
    }

    /// Is a run in progress?
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The active cell (top of the backtracking path) of a run
    pub fn current(&self) -> Option<Point> {
        self.stack.last().copied()
    }

    /// The grid being carved
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Give up ownership of the grid, e.g. once generation completes
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Reset the grid to fully walled and unvisited
    ///
    /// Rejected with [`MazeError::AlreadyRunning`] while a run is in
    /// progress; resetting cells under an active walk would corrupt it.
    pub fn reset(&mut self) -> Result<(), MazeError> {
        if self.running {
            return Err(MazeError::AlreadyRunning);
        }
        self.grid.reset();
        Ok(())
    }

    /// Abandon the current run, leaving the grid as carved so far
    pub fn abort(&mut self) {
        self.stack.clear();
        self.running = false;
    }

    /// In-bounds unvisited neighbours of `point`, in canonical
    /// north, east, south, west order.
    fn unvisited_neighbours(&self, point: Point) -> Vec<(Direction, Point)> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| {
                self.grid
                    .neighbour(point, direction)
                    .filter(|&adjacent| !self.grid[adjacent].is_visited())
                    .map(|adjacent| (direction, adjacent))
            })
            .collect()
    }

    /// Open the shared edge from both sides and mark the far cell
    /// visited. Both coordinates were bounds-checked on selection.
    fn carve(&mut self, from: Point, to: Point, direction: Direction) {
        self.grid.cell_mut(to).mark_visited();
        self.grid.cell_mut(from).set_wall(direction, false);
        self.grid.cell_mut(to).set_wall(direction.opposite(), false);
    }
}
