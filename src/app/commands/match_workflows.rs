//! Determine which workflows would run for the current pull request event.

use std::fs;

use crate::adapters::workflow_files;
use crate::app::AppContext;
use crate::app::config::RunOptions;
use crate::domain::{AppError, PullRequestEvent, WorkflowFile, filter_matching};
use crate::ports::{GitHubPort, MatchReporter};

/// Workflows whose `pull_request` trigger matches the event, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub matched_workflows: Vec<WorkflowFile>,
}

impl MatchResult {
    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string(&self.matched_workflows).map_err(|e| AppError::ParseError {
            what: "matched workflows".into(),
            details: e.to_string(),
        })
    }
}

pub fn execute<G, R>(ctx: &AppContext<G, R>, options: &RunOptions) -> Result<MatchResult, AppError>
where
    G: GitHubPort,
    R: MatchReporter,
{
    let payload = fs::read_to_string(&options.event_path).map_err(|e| {
        AppError::config_error(format!(
            "Failed to read event payload {}: {}",
            options.event_path.display(),
            e
        ))
    })?;
    let event = PullRequestEvent::from_payload(&payload)?;
    ctx.reporter().event_received(&event);

    let workflows = workflow_files::load_workflows(&options.workflows)?;
    let filenames: Vec<&str> = workflows.iter().map(|w| w.filename.as_str()).collect();
    ctx.reporter().workflows_loaded(&filenames);

    tracing::info!("Fetching the list of changed files in {}", event.html_url);
    let changed_files = ctx.github().list_pr_files(event.number)?;
    ctx.reporter().changed_files_fetched(&changed_files);

    let facts = event.facts(changed_files);
    let matched_workflows = filter_matching(workflows, &facts, ctx.reporter());
    Ok(MatchResult { matched_workflows })
}
