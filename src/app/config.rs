//! Run configuration resolved from CLI flags and the GitHub Actions environment.

use std::path::PathBuf;

use url::Url;

use crate::domain::AppError;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Options for a single matching run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Newline-separated globs selecting the workflow files; `!` lines exclude.
    pub workflows: String,
    /// Path to the webhook payload of the triggering event.
    pub event_path: PathBuf,
    /// Repository in `owner/repo` form.
    pub repository: String,
    pub api_url: Url,
    pub token: Option<String>,
    pub timeout_secs: u64,
}

/// Connection settings for the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubApiConfig {
    pub api_url: Url,
    pub token: Option<String>,
    pub owner: String,
    pub repo: String,
    pub timeout_secs: u64,
}

impl GitHubApiConfig {
    pub fn from_options(options: &RunOptions) -> Result<Self, AppError> {
        let (owner, repo) = parse_repository(&options.repository)?;
        Ok(Self {
            api_url: options.api_url.clone(),
            token: options.token.clone().filter(|t| !t.trim().is_empty()),
            owner,
            repo,
            timeout_secs: options.timeout_secs,
        })
    }
}

fn parse_repository(repository: &str) -> Result<(String, String), AppError> {
    let invalid = || {
        AppError::config_error(format!(
            "Invalid repository '{}': expected the form owner/repo",
            repository
        ))
    };
    let (owner, repo) = repository.trim().split_once('/').ok_or_else(invalid)?;
    if owner.is_empty() || repo.is_empty() || repo.contains('/') {
        return Err(invalid());
    }
    Ok((owner.to_string(), repo.to_string()))
}
