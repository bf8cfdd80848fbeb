//! GitHub REST API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Deserialize;
use url::Url;

use crate::app::config::GitHubApiConfig;
use crate::domain::AppError;
use crate::ports::GitHubPort;

const PER_PAGE: usize = 100;
// The pull request files endpoint returns at most 3000 entries.
const MAX_PAGES: u32 = 30;
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";
const DEFAULT_STATUS_MESSAGE: &str = "GitHub API request failed";

/// HTTP transport for the GitHub REST API.
#[derive(Clone)]
pub struct HttpGitHubClient {
    token: Option<String>,
    api_url: Url,
    owner: String,
    repo: String,
    client: Client,
}

impl std::fmt::Debug for HttpGitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGitHubClient")
            .field("api_url", &self.api_url)
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl HttpGitHubClient {
    pub fn new(config: &GitHubApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::GitHubApi {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self {
            token: config.token.clone(),
            api_url: config.api_url.clone(),
            owner: config.owner.clone(),
            repo: config.repo.clone(),
            client,
        })
    }

    fn files_url(&self, pr_number: u64, page: u32) -> Result<Url, AppError> {
        let number = pr_number.to_string();
        let mut url = self.api_url.clone();
        let segments =
            ["repos", self.owner.as_str(), self.repo.as_str(), "pulls", number.as_str(), "files"];
        url.path_segments_mut()
            .map_err(|_| {
                AppError::config_error(format!("Invalid GitHub API URL: {}", self.api_url))
            })?
            .pop_if_empty()
            .extend(segments);
        url.query_pairs_mut()
            .append_pair("per_page", &PER_PAGE.to_string())
            .append_pair("page", &page.to_string());
        Ok(url)
    }

    fn fetch_page(&self, url: Url) -> Result<Vec<FileEntry>, AppError> {
        let mut request = self
            .client
            .get(url)
            .header(ACCEPT, "application/vnd.github+json")
            .header(USER_AGENT, concat!("prwm/", env!("CARGO_PKG_VERSION")))
            .header(API_VERSION_HEADER, API_VERSION);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = request.send().map_err(|e| AppError::GitHubApi {
            message: format!("HTTP request failed: {}", e),
            status: None,
        })?;

        let status = response.status();
        let body_text = match response.text() {
            Ok(text) => text,
            Err(e) if status.is_success() => {
                return Err(AppError::GitHubApi {
                    message: format!("Failed to read response body: {}", e),
                    status: Some(status.as_u16()),
                });
            }
            Err(_) => String::new(),
        };

        if status.is_success() {
            return serde_json::from_str(&body_text).map_err(|e| AppError::GitHubApi {
                message: format!("Failed to parse response: {}", e),
                status: Some(status.as_u16()),
            });
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });
        Err(AppError::GitHubApi { message, status: Some(status.as_u16()) })
    }
}

impl GitHubPort for HttpGitHubClient {
    fn list_pr_files(&self, pr_number: u64) -> Result<Vec<String>, AppError> {
        let mut files = Vec::new();
        for page in 1..=MAX_PAGES {
            let entries = self.fetch_page(self.files_url(pr_number, page)?)?;
            let last_page = entries.len() < PER_PAGE;
            tracing::debug!(page, count = entries.len(), "fetched pull request files page");
            files.extend(entries.into_iter().map(|entry| entry.filename));
            if last_page {
                break;
            }
        }
        Ok(files)
    }
}

#[derive(Debug, Deserialize)]
struct FileEntry {
    filename: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body).ok()?.message.filter(|m| !m.trim().is_empty())
}
