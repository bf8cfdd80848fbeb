use crate::ports::{GitHubPort, MatchReporter};

/// Application context holding dependencies for command execution.
pub struct AppContext<G: GitHubPort, R: MatchReporter> {
    github: G,
    reporter: R,
}

impl<G: GitHubPort, R: MatchReporter> AppContext<G, R> {
    /// Create a new application context.
    pub fn new(github: G, reporter: R) -> Self {
        Self { github, reporter }
    }

    /// Get a reference to the GitHub client.
    pub fn github(&self) -> &G {
        &self.github
    }

    /// Get a reference to the match reporter.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }
}
