mod puzzle;
mod user;

pub use puzzle::{AgeRange, AgeRangeError, Category, Puzzle};
pub use user::{Role, User};
