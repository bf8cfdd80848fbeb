//! prwm: report which GitHub Actions workflows a pull request event would trigger.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use adapters::{HttpGitHubClient, TracingReporter};
use app::AppContext;
use app::config::GitHubApiConfig;

pub use app::commands::match_workflows::MatchResult;
pub use app::config::RunOptions;
pub use domain::{
    AppError, GlobPrecedenceMatcher, MatchOutcome, MatchRejection, PullRequestEventFacts,
    PullRequestTrigger, WorkflowFile, WorkflowTriggerSpec, evaluate, filter_matching, match_branch,
    match_paths, match_type,
};

/// Evaluate the workflows selected by `options.workflows` against the event
/// payload, fetching changed files from the GitHub API.
pub fn match_workflows(options: &RunOptions) -> Result<MatchResult, AppError> {
    let github = HttpGitHubClient::new(&GitHubApiConfig::from_options(options)?)?;
    let ctx = AppContext::new(github, TracingReporter::new());
    app::commands::match_workflows::execute(&ctx, options)
}
