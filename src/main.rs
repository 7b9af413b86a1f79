//! mazer - parallel depth-first maze explorer.
//!
//! Loads a maze description, then explores it from the start cell with one
//! thread per branch until some branch reaches the exit or every branch
//! dead ends, printing the grid after each visited cell along the way.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

mod explore;
mod loader;
mod maze;
mod render;

use explore::Explorer;
use loader::load_maze;
use render::{ConsoleObserver, Observer, SilentObserver};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "mazer")]
#[command(about = "mazer - parallel depth-first maze explorer")]
#[command(version)]
struct Args {
    /// Path to the maze description file
    maze_file: PathBuf,
    /// Milliseconds to pause after each rendered frame (0 disables)
    #[arg(long, default_value = "50")]
    delay_ms: u64,
    /// Suppress per-step rendering of the grid
    #[arg(long, short)]
    quiet: bool,
}

// --- Main Function ---

fn main() {
    // try_parse so a wrong argument count exits 1, not clap's default 2.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            let code = match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    let (grid, start) = match load_maze(&args.maze_file) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error loading maze: {}", e);
            std::process::exit(1);
        }
    };

    let grid = Arc::new(grid);
    let observer: Arc<dyn Observer> = if args.quiet {
        Arc::new(SilentObserver)
    } else {
        Arc::new(
            ConsoleObserver::new(Arc::clone(&grid)).with_delay(Duration::from_millis(args.delay_ms)),
        )
    };

    let explorer = Explorer::new(Arc::clone(&grid), observer);
    let found = explorer.run(start);

    if found {
        println!("Exit found!");
    } else {
        println!("No exit could be found.");
    }
}
