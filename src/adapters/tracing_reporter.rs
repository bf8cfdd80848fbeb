use crate::domain::{MatchOutcome, PullRequestEvent};
use crate::ports::MatchReporter;

/// Reports matching progress as `tracing` events.
#[derive(Debug, Clone, Default)]
pub struct TracingReporter;

impl TracingReporter {
    pub fn new() -> Self {
        Self
    }
}

impl MatchReporter for TracingReporter {
    fn event_received(&self, event: &PullRequestEvent) {
        tracing::info!("pull_request.type: {}", event.action);
        tracing::info!("pull_request.branch: {}", event.base_ref);
    }

    fn workflows_loaded(&self, filenames: &[&str]) {
        tracing::info!("Parsed {} workflows", filenames.len());
        for filename in filenames {
            tracing::debug!(workflow = *filename, "parsed");
        }
    }

    fn changed_files_fetched(&self, files: &[String]) {
        tracing::info!("Found {} changed files", files.len());
        for file in files {
            tracing::debug!("{}", file);
        }
    }

    fn filtering_started(&self, workflow_count: usize) {
        tracing::info!("Filtering {} workflows based on the event", workflow_count);
    }

    fn workflow_evaluated(&self, filename: &str, outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::Matched => tracing::info!("{}: matched", filename),
            MatchOutcome::Rejected(reason) => tracing::info!("{}: {}", filename, reason),
        }
    }

    fn filtering_finished(&self, matched_count: usize) {
        tracing::info!("Matched {} workflows", matched_count);
    }
}
