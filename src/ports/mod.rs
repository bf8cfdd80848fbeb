mod github;
mod match_reporter;

pub use github::GitHubPort;
pub use match_reporter::MatchReporter;
