pub mod report;

pub use report::{ReportOperation, Target};
