//! CLI for carving and watching mazes

use std::thread;
use std::time::Duration;

use clap::Parser;
use maze_carver::{Grid, MazeGenerator, Point, Step};

/// Carve a perfect maze, optionally animating every step
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width, in cells
    #[arg(long, default_value_t = 16)]
    width: usize,

    /// Maze height, in cells
    #[arg(long, default_value_t = 12)]
    height: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Animate generation on the terminal
    #[arg(short, long)]
    playback: bool,

    /// Playback frame length in milliseconds
    #[arg(short, long, default_value_t = 25)]
    frame_length: u64,
}

/// Drive the generator to completion, print the maze
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let grid = Grid::new(args.width, args.height)?;
    let mut generator = MazeGenerator::new(grid, args.seed);
    generator.start(Point::new(0, 0))?;

    loop {
        let step = generator.step();
        if args.playback {
            print!("\x1B[2J\x1B[1;1H");
            println!("{}", generator.grid());
            thread::sleep(Duration::from_millis(args.frame_length));
        }
        if step == Step::Finished {
            break;
        }
    }

    if !args.playback {
        println!("{}", generator.grid());
    }
    Ok(())
}
