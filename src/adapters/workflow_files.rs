//! Workflow file discovery and decoding.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::glob_matcher::compile_glob;
use crate::domain::{AppError, WorkflowFile, WorkflowTriggerSpec};

/// Expand the workflow patterns, then read and decode every selected file.
///
/// `patterns` holds one glob per line. Blank lines and `#` comments are
/// skipped, and a `!` line drops the files selected so far that it matches.
/// Files are returned in path order without duplicates. A file that fails to
/// decode aborts the whole load.
pub fn load_workflows(patterns: &str) -> Result<Vec<WorkflowFile>, AppError> {
    expand_patterns(patterns)?.iter().map(|path| load_workflow(path)).collect()
}

fn expand_patterns(patterns: &str) -> Result<BTreeSet<PathBuf>, AppError> {
    let mut selected = BTreeSet::new();
    for line in patterns.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match line.strip_prefix('!') {
            Some(exclude) => {
                let matcher = compile_glob(exclude.trim()).map_err(|e| AppError::InvalidGlob {
                    pattern: line.to_string(),
                    details: e.to_string(),
                })?;
                selected.retain(|path: &PathBuf| !matcher.is_match(path));
            }
            None => {
                let entries = glob::glob(line).map_err(|e| AppError::InvalidGlob {
                    pattern: line.to_string(),
                    details: e.to_string(),
                })?;
                for entry in entries {
                    let path = entry.map_err(|e| AppError::Io(e.into()))?;
                    if path.is_file() {
                        selected.insert(path);
                    }
                }
            }
        }
    }
    Ok(selected)
}

pub fn load_workflow(path: &Path) -> Result<WorkflowFile, AppError> {
    tracing::debug!(path = %path.display(), "parsing workflow");
    let content = fs::read_to_string(path)?;
    let workflow = WorkflowTriggerSpec::parse_yaml(&content).map_err(|details| {
        AppError::WorkflowDecode { file: path.display().to_string(), details }
    })?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(WorkflowFile { filename, workflow })
}
