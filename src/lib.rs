pub mod config;
pub mod models;
pub mod operations;
pub mod scanner;

// 重新导出常用模块
pub use config::Config;
pub use models::{AllUsersResult, ProjectResult, ScoreEntry, UserResult};
pub use operations::{ReportOperation, Target};
pub use scanner::{score, score_file, FileWalker, Scorer};
