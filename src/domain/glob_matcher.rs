//! Ordered include/exclude glob matching for branch and path filters.
//!
//! Patterns are evaluated in sequence and the last pattern that applies to a
//! target decides the outcome, as GitHub documents for `branches` and `paths`.

use globset::{GlobBuilder, GlobMatcher};

const NEGATION_PREFIX: char = '!';

/// Compile a single filter pattern.
///
/// `*` and `?` stop at `/`, a `**` segment crosses directories, and a `**`
/// that is not a whole segment behaves like `*`. Leading dots are matched by
/// wildcards.
pub fn compile_glob(pattern: &str) -> Result<GlobMatcher, globset::Error> {
    Ok(GlobBuilder::new(pattern).literal_separator(true).build()?.compile_matcher())
}

#[derive(Debug, Clone)]
enum Rule {
    Include(Option<GlobMatcher>),
    Exclude(Option<GlobMatcher>),
}

/// Matcher over an ordered list of glob patterns where `!`-prefixed entries
/// exclude and later entries override earlier ones.
///
/// An empty list matches everything. A pattern with invalid glob syntax
/// matches nothing.
#[derive(Debug, Clone)]
pub struct GlobPrecedenceMatcher {
    rules: Vec<Rule>,
}

impl GlobPrecedenceMatcher {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        let rules = patterns
            .iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                match pattern.strip_prefix(NEGATION_PREFIX) {
                    Some(rest) => Rule::Exclude(compile_glob(rest).ok()),
                    None => Rule::Include(compile_glob(pattern).ok()),
                }
            })
            .collect();
        Self { rules }
    }

    pub fn is_match(&self, target: &str) -> bool {
        if self.rules.is_empty() {
            return true;
        }
        self.rules.iter().fold(false, |matched, rule| match rule {
            Rule::Include(glob) => matched || glob_match(glob.as_ref(), target),
            Rule::Exclude(glob) => matched && !glob_match(glob.as_ref(), target),
        })
    }
}

fn glob_match(glob: Option<&GlobMatcher>, target: &str) -> bool {
    glob.is_some_and(|g| g.is_match(target))
}
