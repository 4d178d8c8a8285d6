pub mod file_walker;
pub mod score;
pub mod scorer;

pub use file_walker::{FileWalker, WalkStats};
pub use score::{score, score_file};
pub use scorer::Scorer;
