pub mod alert_tally;
pub mod branch;
pub mod commit_info;
pub mod report_row;
pub mod scan_target;
pub mod scope;

pub use alert_tally::{AlertOutcome, AlertTally, Severity};
pub use branch::BranchRef;
pub use commit_info::CommitInfo;
pub use report_row::{AlertDataStatus, ReportRow};
pub use scan_target::ScanTarget;
pub use scope::Scope;
