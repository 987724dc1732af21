//! Log quality validation — deterministic rule checks over a draft log.
//!
//! The rule set is fixed and ordered; `ValidationVerdict::is_valid` is always
//! derived from the issue list, never set independently. Pure function of the
//! input: no network, no storage, no clock.

use serde::{Deserialize, Serialize};

use crate::models::DraftLog;

/// Below this, a description is too brief to be actionable.
const MIN_DESCRIPTION_CHARS: usize = 20;
/// Below this, a corrective action lacks the detail an auditor needs.
const MIN_ACTION_CHARS: usize = 30;
/// Below this many minutes, the recorded time is suspect.
const MIN_TIME_SPENT_MINUTES: u32 = 30;

/// Structured result of running the validator against a log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationVerdict {
    /// True iff `issues` is empty. Derived; see [`ValidationVerdict::from_findings`].
    pub is_valid: bool,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

impl ValidationVerdict {
    /// The resting state before both description and action exist.
    ///
    /// Reads as "nothing checked yet", not "passing" — callers must not
    /// present it as a green light.
    pub fn untested() -> Self {
        Self {
            is_valid: true,
            issues: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Build a verdict with `is_valid` derived from the issue list.
    pub fn from_findings(issues: Vec<String>, suggestions: Vec<String>) -> Self {
        Self {
            is_valid: issues.is_empty(),
            issues,
            suggestions,
        }
    }
}

/// Pluggable validation seam. The reference [`RuleValidator`] is a plain
/// threshold check; a richer model can sit behind the same contract.
pub trait LogValidator: Send + Sync {
    fn validate(&self, draft: &DraftLog) -> ValidationVerdict;
}

/// Reference validator: fixed rules, fixed order, fixed wording.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleValidator;

impl LogValidator for RuleValidator {
    fn validate(&self, draft: &DraftLog) -> ValidationVerdict {
        let mut issues = Vec::new();
        let mut suggestions = Vec::new();

        let description = draft.description.as_deref().unwrap_or("");
        let action = draft.action.as_deref().unwrap_or("");

        if description.chars().count() < MIN_DESCRIPTION_CHARS {
            issues.push("Description too brief - needs more detail".to_string());
            suggestions
                .push("Expand description to include observed symptoms and conditions".to_string());
        }

        if action.chars().count() < MIN_ACTION_CHARS {
            issues.push("Action details insufficient".to_string());
            suggestions.push(
                "Detail specific actions taken, tests performed, and results observed".to_string(),
            );
        }

        // A missing parts list is worth a nudge but not a defect.
        if draft.parts.as_deref().map_or(true, |p| p.is_empty()) {
            suggestions.push(
                "Consider adding part numbers for components replaced or inspected".to_string(),
            );
        }

        if draft.time_spent.unwrap_or(0) < MIN_TIME_SPENT_MINUTES {
            issues
                .push("Time spent seems unusually low for this type of maintenance".to_string());
            suggestions.push("Verify time spent is accurately recorded".to_string());
        }

        ValidationVerdict::from_findings(issues, suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(description: &str, action: &str, time_spent: u32, parts: Option<Vec<&str>>) -> DraftLog {
        DraftLog {
            description: Some(description.to_string()),
            action: Some(action.to_string()),
            time_spent: Some(time_spent),
            parts: parts.map(|p| p.into_iter().map(String::from).collect()),
            ..DraftLog::default()
        }
    }

    #[test]
    fn weak_log_trips_every_rule() {
        let verdict = RuleValidator.validate(&draft("short", "also short", 10, Some(vec![])));
        assert!(!verdict.is_valid);
        assert_eq!(
            verdict.issues,
            vec![
                "Description too brief - needs more detail",
                "Action details insufficient",
                "Time spent seems unusually low for this type of maintenance",
            ]
        );
        // Three paired suggestions plus the parts nudge.
        assert_eq!(verdict.suggestions.len(), 4);
        assert_eq!(
            verdict.suggestions[2],
            "Consider adding part numbers for components replaced or inspected"
        );
    }

    #[test]
    fn solid_log_passes_clean() {
        let verdict = RuleValidator.validate(&draft(
            "Cabin lighting system failure in zones B and C",
            "Traced issue to faulty PSU. Replaced unit and verified system functionality.",
            60,
            Some(vec!["PSU-A320-7"]),
        ));
        assert!(verdict.is_valid);
        assert!(verdict.issues.is_empty());
        assert!(verdict.suggestions.is_empty());
    }

    #[test]
    fn missing_parts_is_a_suggestion_not_an_issue() {
        let verdict = RuleValidator.validate(&draft(
            "Cabin lighting system failure in zones B and C",
            "Traced issue to faulty PSU. Replaced unit and verified system functionality.",
            60,
            None,
        ));
        assert!(verdict.is_valid, "parts nudge must not fail the log");
        assert_eq!(verdict.suggestions.len(), 1);
    }

    #[test]
    fn boundary_lengths_pass() {
        let description = "a".repeat(20);
        let action = "b".repeat(30);
        let verdict = RuleValidator.validate(&draft(&description, &action, 30, Some(vec!["P1"])));
        assert!(verdict.is_valid);
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // 20 multibyte characters must satisfy the description threshold.
        let description = "é".repeat(20);
        let action = "b".repeat(30);
        let verdict = RuleValidator.validate(&draft(&description, &action, 45, Some(vec!["P1"])));
        assert!(verdict.is_valid);
    }

    #[test]
    fn absent_fields_read_as_empty() {
        let verdict = RuleValidator.validate(&DraftLog::default());
        assert!(!verdict.is_valid);
        assert_eq!(verdict.issues.len(), 3);
    }

    #[test]
    fn is_valid_tracks_issue_list() {
        let verdict = ValidationVerdict::from_findings(vec!["x".into()], vec![]);
        assert!(!verdict.is_valid);
        let verdict = ValidationVerdict::from_findings(vec![], vec!["tip".into()]);
        assert!(verdict.is_valid);
    }

    #[test]
    fn untested_is_empty_but_not_a_pass_claim() {
        let verdict = ValidationVerdict::untested();
        assert!(verdict.issues.is_empty());
        assert!(verdict.suggestions.is_empty());
        assert!(verdict.is_valid);
    }

    #[test]
    fn validator_is_deterministic() {
        let input = draft("short", "also short", 10, None);
        assert_eq!(RuleValidator.validate(&input), RuleValidator.validate(&input));
    }
}
