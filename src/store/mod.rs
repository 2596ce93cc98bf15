pub mod storage;
pub mod store;
pub mod types;

pub use storage::{
    contributions_path, ensure_data_dir, feedback_path, get_data_dir, load_contributions,
    load_feedback, save_contributions, save_feedback_log,
};
pub use store::ContributionStore;
pub use types::{
    Contribution, ContributionKind, ContributionLog, FeedbackEntry, FeedbackLog, Status,
    ANONYMOUS_NAME,
};
