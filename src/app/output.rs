//! GitHub Actions step output handling.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::domain::AppError;

pub const MATCHED_WORKFLOWS_OUTPUT: &str = "matched-workflows-json";

/// Append `name=value` to the step output file named by `GITHUB_OUTPUT`.
///
/// Multi-line values use the heredoc form with a delimiter absent from the value.
pub fn write_step_output(output_file: &Path, name: &str, value: &str) -> Result<(), AppError> {
    let mut file = OpenOptions::new().create(true).append(true).open(output_file)?;
    if value.contains('\n') {
        let mut delimiter = String::from("ghadelimiter");
        while value.contains(&delimiter) {
            delimiter.push('_');
        }
        writeln!(file, "{}<<{}\n{}\n{}", name, delimiter, value, delimiter)?;
    } else {
        writeln!(file, "{}={}", name, value)?;
    }
    Ok(())
}
