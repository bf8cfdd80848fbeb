use crate::domain::AppError;

pub trait GitHubPort {
    /// List every file path changed by a pull request, across all result pages.
    fn list_pr_files(&self, pr_number: u64) -> Result<Vec<String>, AppError>;
}
