mod catalog;
mod loader;

pub use catalog::PuzzleCatalog;
pub use loader::{LoadError, load_puzzles_from_path, parse_puzzles};
