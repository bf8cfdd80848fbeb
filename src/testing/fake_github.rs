use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::GitHubPort;

#[derive(Default)]
pub struct FakeGitHub {
    files: Vec<String>,
    fail: bool,
    requested: RefCell<Vec<u64>>,
}

impl FakeGitHub {
    pub fn with_files(files: &[&str]) -> Self {
        Self { files: files.iter().map(|f| f.to_string()).collect(), ..Default::default() }
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Default::default() }
    }

    pub fn requested(&self) -> Vec<u64> {
        self.requested.borrow().clone()
    }
}

impl GitHubPort for FakeGitHub {
    fn list_pr_files(&self, pr_number: u64) -> Result<Vec<String>, AppError> {
        self.requested.borrow_mut().push(pr_number);
        if self.fail {
            return Err(AppError::GitHubApi {
                message: "Bad credentials".into(),
                status: Some(401),
            });
        }
        Ok(self.files.clone())
    }
}
