use std::cell::RefCell;

use crate::domain::{MatchOutcome, PullRequestEvent};
use crate::ports::MatchReporter;

#[derive(Default)]
pub struct RecordingReporter {
    events: RefCell<Vec<String>>,
    outcomes: RefCell<Vec<(String, MatchOutcome)>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    pub fn outcomes(&self) -> Vec<(String, MatchOutcome)> {
        self.outcomes.borrow().clone()
    }
}

impl MatchReporter for RecordingReporter {
    fn event_received(&self, event: &PullRequestEvent) {
        self.events.borrow_mut().push(format!("event {} {}", event.action, event.base_ref));
    }

    fn workflows_loaded(&self, filenames: &[&str]) {
        self.events.borrow_mut().push(format!("loaded {}", filenames.join(",")));
    }

    fn changed_files_fetched(&self, files: &[String]) {
        self.events.borrow_mut().push(format!("changed {}", files.len()));
    }

    fn filtering_started(&self, workflow_count: usize) {
        self.events.borrow_mut().push(format!("filtering {}", workflow_count));
    }

    fn workflow_evaluated(&self, filename: &str, outcome: MatchOutcome) {
        self.outcomes.borrow_mut().push((filename.to_string(), outcome));
    }

    fn filtering_finished(&self, matched_count: usize) {
        self.events.borrow_mut().push(format!("matched {}", matched_count));
    }
}
