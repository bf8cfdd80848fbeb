mod github_http;
mod tracing_reporter;
pub mod workflow_files;

pub use github_http::HttpGitHubClient;
pub use tracing_reporter::TracingReporter;
