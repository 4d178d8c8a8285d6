pub mod score;

pub use score::{AllUsersResult, BestProject, ProjectResult, RankedUser, ScoreEntry, UserResult};
