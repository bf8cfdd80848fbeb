pub mod error;
pub mod event;
pub mod glob_matcher;
pub mod trigger;
pub mod workflow;

pub use error::AppError;
pub use event::{PullRequestEvent, PullRequestEventFacts};
pub use glob_matcher::GlobPrecedenceMatcher;
pub use trigger::{
    MatchOutcome, MatchRejection, evaluate, filter_matching, match_branch, match_paths, match_type,
};
pub use workflow::{PullRequestTrigger, Triggers, WorkflowFile, WorkflowTriggerSpec};
