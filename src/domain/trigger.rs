//! Pull request trigger matching.
//!
//! Each predicate returns `false` when the workflow has no `pull_request`
//! trigger and `true` when the corresponding filter is absent.

use std::fmt;

use crate::domain::{
    GlobPrecedenceMatcher, PullRequestEventFacts, WorkflowFile, WorkflowTriggerSpec,
};
use crate::ports::MatchReporter;

/// Which check excluded a workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRejection {
    Type,
    Branch,
    Paths,
}

impl fmt::Display for MatchRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchRejection::Type => write!(f, "type did not match"),
            MatchRejection::Branch => write!(f, "branch did not match"),
            MatchRejection::Paths => write!(f, "changed files did not match"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Matched,
    Rejected(MatchRejection),
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched)
    }
}

pub fn match_type(spec: &WorkflowTriggerSpec, action_type: &str) -> bool {
    let Some(trigger) = spec.pull_request() else {
        return false;
    };
    match &trigger.types {
        Some(types) => types.iter().any(|t| t == action_type),
        None => true,
    }
}

pub fn match_branch(spec: &WorkflowTriggerSpec, base_branch: &str) -> bool {
    let Some(trigger) = spec.pull_request() else {
        return false;
    };
    if let Some(branches) = &trigger.branches {
        return GlobPrecedenceMatcher::new(branches).is_match(base_branch);
    }
    if let Some(branches_ignore) = &trigger.branches_ignore {
        return !GlobPrecedenceMatcher::new(branches_ignore).is_match(base_branch);
    }
    true
}

pub fn match_paths<S: AsRef<str>>(spec: &WorkflowTriggerSpec, changed_file_paths: &[S]) -> bool {
    let Some(trigger) = spec.pull_request() else {
        return false;
    };
    if let Some(paths) = &trigger.paths {
        let matcher = GlobPrecedenceMatcher::new(paths);
        return changed_file_paths.iter().any(|path| matcher.is_match(path.as_ref()));
    }
    if let Some(paths_ignore) = &trigger.paths_ignore {
        let matcher = GlobPrecedenceMatcher::new(paths_ignore);
        return !changed_file_paths.iter().all(|path| matcher.is_match(path.as_ref()));
    }
    true
}

/// Run the type, branch and paths checks in that order, stopping at the first failure.
pub fn evaluate(spec: &WorkflowTriggerSpec, facts: &PullRequestEventFacts) -> MatchOutcome {
    if !match_type(spec, &facts.action_type) {
        return MatchOutcome::Rejected(MatchRejection::Type);
    }
    if !match_branch(spec, &facts.base_branch) {
        return MatchOutcome::Rejected(MatchRejection::Branch);
    }
    if !match_paths(spec, &facts.changed_file_paths) {
        return MatchOutcome::Rejected(MatchRejection::Paths);
    }
    MatchOutcome::Matched
}

/// Return the workflows that would run for the event, in input order.
pub fn filter_matching<R: MatchReporter + ?Sized>(
    workflows: Vec<WorkflowFile>,
    facts: &PullRequestEventFacts,
    reporter: &R,
) -> Vec<WorkflowFile> {
    reporter.filtering_started(workflows.len());
    let matched: Vec<WorkflowFile> = workflows
        .into_iter()
        .filter(|file| {
            let outcome = evaluate(&file.workflow, facts);
            reporter.workflow_evaluated(&file.filename, outcome);
            outcome.is_match()
        })
        .collect();
    reporter.filtering_finished(matched.len());
    matched
}
