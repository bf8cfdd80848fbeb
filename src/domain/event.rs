use serde::Deserialize;

use crate::domain::AppError;

/// Event-side input to the trigger matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestEventFacts {
    pub action_type: String,
    pub base_branch: String,
    pub changed_file_paths: Vec<String>,
}

/// Pull request metadata extracted from a GitHub webhook payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestEvent {
    pub action: String,
    pub number: u64,
    pub html_url: String,
    pub base_ref: String,
}

impl PullRequestEvent {
    /// Decode the payload found at `GITHUB_EVENT_PATH`.
    ///
    /// Payloads of other events carry no `pull_request` object and are rejected
    /// with [`AppError::NotPullRequestEvent`].
    pub fn from_payload(content: &str) -> Result<Self, AppError> {
        let payload: dto::PayloadDto =
            serde_json::from_str(content).map_err(|e| AppError::ParseError {
                what: "event payload".into(),
                details: e.to_string(),
            })?;
        let pull_request = payload.pull_request.ok_or(AppError::NotPullRequestEvent)?;

        Ok(Self {
            action: payload.action.unwrap_or_default(),
            number: pull_request.number,
            html_url: pull_request.html_url.unwrap_or_default(),
            base_ref: pull_request.base.git_ref,
        })
    }

    pub fn facts(&self, changed_file_paths: Vec<String>) -> PullRequestEventFacts {
        PullRequestEventFacts {
            action_type: self.action.clone(),
            base_branch: self.base_ref.clone(),
            changed_file_paths,
        }
    }
}

mod dto {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PayloadDto {
        pub action: Option<String>,
        pub pull_request: Option<PullRequestDto>,
    }

    #[derive(Debug, Deserialize)]
    pub struct PullRequestDto {
        pub number: u64,
        pub html_url: Option<String>,
        pub base: BaseDto,
    }

    #[derive(Debug, Deserialize)]
    pub struct BaseDto {
        #[serde(rename = "ref")]
        pub git_ref: String,
    }
}
