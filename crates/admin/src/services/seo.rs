//! Rule-based SEO audit for case-study content.
//!
//! Pure functions, no I/O. The checks encode the editorial guidelines the
//! marketing team actually reviews against; they are advisory, never
//! blocking.

use serde::{Deserialize, Serialize};

/// Title length above which search engines truncate.
const MAX_TITLE_CHARS: usize = 60;
/// Meta description bounds that render fully in search results.
const MIN_DESCRIPTION_CHARS: usize = 50;
const MAX_DESCRIPTION_CHARS: usize = 160;
/// Below this, a case study is unlikely to rank on its own.
const MIN_BODY_WORDS: usize = 300;

/// Content to audit.
#[derive(Debug, Clone, Deserialize)]
pub struct SeoInput {
    /// Page title.
    #[serde(default)]
    pub title: String,
    /// Meta description / summary.
    #[serde(default)]
    pub description: String,
    /// Body content (markdown).
    #[serde(default)]
    pub body: String,
}

/// How much a finding matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Should be fixed before publishing.
    Error,
    /// Worth a look, not blocking.
    Warning,
}

/// A single audit finding.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// Stable machine-readable code (e.g., `title-too-long`).
    pub code: &'static str,
    /// Severity of the finding.
    pub severity: Severity,
    /// Human-readable explanation.
    pub message: String,
}

impl Finding {
    fn error(code: &'static str, message: String) -> Self {
        Self {
            code,
            severity: Severity::Error,
            message,
        }
    }

    fn warning(code: &'static str, message: String) -> Self {
        Self {
            code,
            severity: Severity::Warning,
            message,
        }
    }
}

/// Audit the given content and return all findings.
///
/// An empty result means the content passed every check.
#[must_use]
pub fn audit(input: &SeoInput) -> Vec<Finding> {
    let mut findings = Vec::new();

    check_title(input, &mut findings);
    check_description(input, &mut findings);
    check_body(input, &mut findings);

    findings
}

fn check_title(input: &SeoInput, findings: &mut Vec<Finding>) {
    let title = input.title.trim();
    if title.is_empty() {
        findings.push(Finding::error(
            "title-missing",
            "Title is missing".to_string(),
        ));
        return;
    }

    let len = title.chars().count();
    if len > MAX_TITLE_CHARS {
        findings.push(Finding::warning(
            "title-too-long",
            format!("Title is {len} characters; search results truncate after {MAX_TITLE_CHARS}"),
        ));
    }
}

fn check_description(input: &SeoInput, findings: &mut Vec<Finding>) {
    let description = input.description.trim();
    if description.is_empty() {
        findings.push(Finding::error(
            "description-missing",
            "Meta description is missing".to_string(),
        ));
        return;
    }

    let len = description.chars().count();
    if len < MIN_DESCRIPTION_CHARS {
        findings.push(Finding::warning(
            "description-too-short",
            format!(
                "Description is {len} characters; aim for at least {MIN_DESCRIPTION_CHARS}"
            ),
        ));
    } else if len > MAX_DESCRIPTION_CHARS {
        findings.push(Finding::warning(
            "description-too-long",
            format!(
                "Description is {len} characters; search results truncate after {MAX_DESCRIPTION_CHARS}"
            ),
        ));
    }
}

fn check_body(input: &SeoInput, findings: &mut Vec<Finding>) {
    let words = input.body.split_whitespace().count();
    if words < MIN_BODY_WORDS {
        findings.push(Finding::warning(
            "body-too-short",
            format!("Body is {words} words; aim for at least {MIN_BODY_WORDS}"),
        ));
    }

    let h1_count = input
        .body
        .lines()
        .filter(|line| {
            let trimmed = line.trim_start();
            trimmed.starts_with("# ") || trimmed == "#"
        })
        .count();
    if h1_count > 1 {
        findings.push(Finding::error(
            "multiple-h1",
            format!("Body has {h1_count} top-level headings; use at most one"),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, description: &str, body: &str) -> SeoInput {
        SeoInput {
            title: title.to_string(),
            description: description.to_string(),
            body: body.to_string(),
        }
    }

    fn codes(findings: &[Finding]) -> Vec<&'static str> {
        findings.iter().map(|f| f.code).collect()
    }

    #[test]
    fn test_clean_content_has_no_findings() {
        let body = "word ".repeat(350);
        let findings = audit(&input(
            "How Acme cut checkout latency in half",
            "A look at how Acme rebuilt their checkout pipeline and halved page latency.",
            &body,
        ));
        assert!(findings.is_empty(), "unexpected findings: {findings:?}");
    }

    #[test]
    fn test_missing_title_is_an_error() {
        let findings = audit(&input("  ", "a".repeat(60).as_str(), ""));
        assert!(codes(&findings).contains(&"title-missing"));
        let finding = findings.iter().find(|f| f.code == "title-missing").unwrap();
        assert_eq!(finding.severity, Severity::Error);
    }

    #[test]
    fn test_long_title_is_a_warning() {
        let title = "x".repeat(61);
        let findings = audit(&input(&title, &"a".repeat(60), ""));
        assert!(codes(&findings).contains(&"title-too-long"));
    }

    #[test]
    fn test_description_bounds() {
        let findings = audit(&input("Title", &"a".repeat(49), ""));
        assert!(codes(&findings).contains(&"description-too-short"));

        let findings = audit(&input("Title", &"a".repeat(161), ""));
        assert!(codes(&findings).contains(&"description-too-long"));

        let findings = audit(&input("Title", &"a".repeat(160), ""));
        assert!(!codes(&findings).contains(&"description-too-long"));
    }

    #[test]
    fn test_short_body_is_a_warning() {
        let findings = audit(&input("Title", &"a".repeat(60), "just a few words"));
        assert!(codes(&findings).contains(&"body-too-short"));
    }

    #[test]
    fn test_multiple_h1_flagged() {
        let body = format!("# One\n\n{}\n\n# Two\n", "word ".repeat(350));
        let findings = audit(&input("Title", &"a".repeat(60), &body));
        assert!(codes(&findings).contains(&"multiple-h1"));
    }

    #[test]
    fn test_single_h1_allowed() {
        let body = format!("# One\n\n{}", "word ".repeat(350));
        let findings = audit(&input("Title", &"a".repeat(60), &body));
        assert!(!codes(&findings).contains(&"multiple-h1"));
    }
}
