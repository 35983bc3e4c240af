use crate::error::{Error, Result};
use crate::types::config::{RecordOrder, UnknownLinterPolicy};
use crate::types::golangci::LintResult;
use crate::types::virtual_test::VirtualTest;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions {
    pub unknown_linter: UnknownLinterPolicy,
    pub order: RecordOrder,
}

/// Builds one virtual test per distinct linter in `Report.Linters` and
/// attaches every issue to the test of the linter that raised it.
pub fn normalize(result: &LintResult, options: NormalizeOptions) -> Result<Vec<VirtualTest>> {
    let mut tests: Vec<VirtualTest> = Vec::with_capacity(result.report.linters.len());
    let mut index: HashMap<String, usize> = HashMap::new();

    for linter in &result.report.linters {
        match index.get(&linter.name) {
            Some(&slot) => {
                tracing::debug!(linter = %linter.name, "duplicate linter entry, later flags win");
                tests[slot].enabled = linter.enabled;
                tests[slot].enabled_by_default = linter.enabled_by_default;
            }
            None => {
                index.insert(linter.name.clone(), tests.len());
                tests.push(VirtualTest::new(
                    linter.name.as_str(),
                    linter.enabled,
                    linter.enabled_by_default,
                ));
            }
        }
    }

    for issue in &result.issues {
        let slot = match index.get(&issue.from_linter) {
            Some(&slot) => slot,
            None => match options.unknown_linter {
                UnknownLinterPolicy::Fail => {
                    return Err(Error::UnknownLinter {
                        linter: issue.from_linter.clone(),
                        location: issue.location(),
                    });
                }
                UnknownLinterPolicy::Synthesize => {
                    tracing::warn!(
                        linter = %issue.from_linter,
                        "issue references a linter missing from the report; synthesizing a test"
                    );
                    index.insert(issue.from_linter.clone(), tests.len());
                    tests.push(VirtualTest::new(issue.from_linter.as_str(), true, false));
                    tests.len() - 1
                }
            },
        };
        tests[slot].push_issue(issue.file_path(), issue.line(), &issue.text);
    }

    if options.order == RecordOrder::Name {
        tests.sort_by(|a, b| a.linter.cmp(&b.linter));
    }

    tracing::debug!(
        linters = tests.len(),
        issues = result.issues.len(),
        "normalized report"
    );
    Ok(tests)
}
