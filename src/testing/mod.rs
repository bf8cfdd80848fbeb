mod fake_github;
mod recording_reporter;

pub use fake_github::FakeGitHub;
pub use recording_reporter::RecordingReporter;
