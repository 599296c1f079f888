//! Validation report types.

use serde::Serialize;

/// Outcome of applying one rule to one snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleCheck {
    /// The rule applied.
    #[serde(rename = "rule")]
    pub rule_id: String,
    /// Raw predicate result.
    pub matched: bool,
    /// Whether the result is the expected one (negative snippets expect a miss).
    pub passed: bool,
}

impl RuleCheck {
    pub fn new(rule_id: impl Into<String>, matched: bool, negative: bool) -> Self {
        Self {
            rule_id: rule_id.into(),
            matched,
            passed: matched != negative,
        }
    }
}

/// All checks for one snippet, in tag order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnippetReport {
    #[serde(rename = "id")]
    pub snippet_id: String,
    pub negative: bool,
    pub passed: bool,
    pub checks: Vec<RuleCheck>,
}

impl SnippetReport {
    /// A snippet with no checks is trivially passed.
    pub fn new(snippet_id: impl Into<String>, negative: bool, checks: Vec<RuleCheck>) -> Self {
        let passed = checks.iter().all(|c| c.passed);
        Self {
            snippet_id: snippet_id.into(),
            negative,
            passed,
            checks,
        }
    }
}

/// Aggregate result of a validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub passed: bool,
    pub snippets: Vec<SnippetReport>,
}

impl ValidationReport {
    pub fn new(snippets: Vec<SnippetReport>) -> Self {
        let passed = snippets.iter().all(|s| s.passed);
        Self { passed, snippets }
    }

    /// Flattened `(snippet id, rule id, passed)` rows in report order.
    pub fn rows(&self) -> Vec<(&str, &str, bool)> {
        self.snippets
            .iter()
            .flat_map(|s| {
                s.checks
                    .iter()
                    .map(move |c| (s.snippet_id.as_str(), c.rule_id.as_str(), c.passed))
            })
            .collect()
    }

    pub fn check_count(&self) -> usize {
        self.snippets.iter().map(|s| s.checks.len()).sum()
    }

    pub fn failure_count(&self) -> usize {
        self.snippets
            .iter()
            .flat_map(|s| &s.checks)
            .filter(|c| !c.passed)
            .count()
    }

    /// Human-readable report, one line per check.
    ///
    /// ```text
    /// PASS  ex1  full-stop-comment
    /// PASS  empty  (no rules)
    /// FAIL  bad-indent  two-space-indent  (negative example)
    ///
    /// 3 snippet(s), 2 check(s): 1 passed, 1 failed
    /// ```
    pub fn format_text(&self) -> String {
        let mut out = String::new();

        for snippet in &self.snippets {
            let suffix = if snippet.negative {
                "  (negative example)"
            } else {
                ""
            };

            if snippet.checks.is_empty() {
                out.push_str(&format!("PASS  {}  (no rules){}\n", snippet.snippet_id, suffix));
                continue;
            }

            for check in &snippet.checks {
                out.push_str(&format!(
                    "{}  {}  {}{}\n",
                    if check.passed { "PASS" } else { "FAIL" },
                    snippet.snippet_id,
                    check.rule_id,
                    suffix
                ));
            }
        }

        let failed = self.failure_count();
        let total = self.check_count();
        out.push_str(&format!(
            "\n{} snippet(s), {} check(s): {} passed, {} failed\n",
            self.snippets.len(),
            total,
            total - failed,
            failed
        ));

        out
    }
}
