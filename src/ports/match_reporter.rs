use crate::domain::{MatchOutcome, PullRequestEvent};

/// Observability hooks for a matching run.
///
/// Reporting never influences the result; implementations only record or log.
pub trait MatchReporter {
    fn event_received(&self, event: &PullRequestEvent);

    fn workflows_loaded(&self, filenames: &[&str]);

    fn changed_files_fetched(&self, files: &[String]);

    fn filtering_started(&self, workflow_count: usize);

    fn workflow_evaluated(&self, filename: &str, outcome: MatchOutcome);

    fn filtering_finished(&self, matched_count: usize);
}
