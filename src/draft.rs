//! Draft-log session — the record a technician is composing, re-derived
//! after every mutation.
//!
//! Derivation is an explicit step (`recompute`) that runs synchronously
//! after each setter, so the dependency set is a stated precondition:
//! the {aircraft model, category, description} triple drives the suggestion,
//! the {description, action} pair drives the verdict. No hidden reactivity.

use crate::models::{parse_parts, AircraftModel, DraftLog, IssueCategory, LogStatus};
use crate::suggestion::{SuggestionEngine, TemplateEngine};
use crate::validation::{LogValidator, RuleValidator, ValidationVerdict};

type SuggestionKey = (AircraftModel, IssueCategory, String);

pub struct DraftLogSession {
    draft: DraftLog,
    suggester: Box<dyn SuggestionEngine>,
    validator: Box<dyn LogValidator>,
    current_suggestion: Option<String>,
    /// Inputs the cached suggestion was computed from. Mutations that leave
    /// the triple unchanged do not re-invoke the engine.
    suggestion_key: Option<SuggestionKey>,
    current_verdict: ValidationVerdict,
}

impl DraftLogSession {
    /// A session backed by the reference engines.
    pub fn new() -> Self {
        Self::with_engines(Box::new(TemplateEngine), Box::new(RuleValidator))
    }

    /// A session backed by caller-supplied engines (richer models, test
    /// doubles).
    pub fn with_engines(
        suggester: Box<dyn SuggestionEngine>,
        validator: Box<dyn LogValidator>,
    ) -> Self {
        Self {
            draft: DraftLog::default(),
            suggester,
            validator,
            current_suggestion: None,
            suggestion_key: None,
            current_verdict: ValidationVerdict::untested(),
        }
    }

    pub fn draft(&self) -> &DraftLog {
        &self.draft
    }

    pub fn current_suggestion(&self) -> Option<&str> {
        self.current_suggestion.as_deref()
    }

    /// The latest verdict. [`ValidationVerdict::untested`] until both
    /// description and action exist — an "unchecked" state, not a pass.
    pub fn current_verdict(&self) -> &ValidationVerdict {
        &self.current_verdict
    }

    // ── Setters: pure merge, then one explicit derivation pass ──

    pub fn set_aircraft_model(&mut self, model: Option<AircraftModel>) {
        self.draft.aircraft_model = model;
        self.recompute();
    }

    pub fn set_category(&mut self, category: Option<IssueCategory>) {
        self.draft.category = category;
        self.recompute();
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.draft.description = description;
        self.recompute();
    }

    pub fn set_action(&mut self, action: Option<String>) {
        self.draft.action = action;
        self.recompute();
    }

    pub fn set_date(&mut self, date: Option<chrono::NaiveDate>) {
        self.draft.date = date;
        self.recompute();
    }

    pub fn set_tail_number(&mut self, tail_number: Option<String>) {
        self.draft.tail_number = tail_number;
        self.recompute();
    }

    pub fn set_technician(&mut self, id: Option<String>, name: Option<String>) {
        self.draft.technician_id = id;
        self.draft.technician_name = name;
        self.recompute();
    }

    pub fn set_status(&mut self, status: Option<LogStatus>) {
        self.draft.status = status;
        self.recompute();
    }

    pub fn set_time_spent(&mut self, minutes: Option<u32>) {
        self.draft.time_spent = minutes;
        self.recompute();
    }

    /// Replace the parts list from the comma-separated form field.
    /// Replaces entirely — never additive.
    pub fn set_parts(&mut self, comma_separated: &str) {
        self.draft.parts = Some(parse_parts(comma_separated));
        self.recompute();
    }

    /// Copy the current suggestion verbatim into the action field. Leaves
    /// the suggestion in place. Returns false when there is nothing to
    /// accept.
    pub fn accept_suggestion(&mut self) -> bool {
        match self.current_suggestion.clone() {
            Some(text) => {
                self.draft.action = Some(text);
                self.recompute();
                true
            }
            None => false,
        }
    }

    // ── Derivation ──

    fn recompute(&mut self) {
        self.recompute_suggestion();
        self.recompute_verdict();
    }

    fn recompute_suggestion(&mut self) {
        let triple = match (
            &self.draft.aircraft_model,
            &self.draft.category,
            &self.draft.description,
        ) {
            (Some(model), Some(category), Some(description)) if !description.is_empty() => {
                Some((model.clone(), category.clone(), description.clone()))
            }
            _ => None,
        };

        match triple {
            Some(key) => {
                if self.suggestion_key.as_ref() != Some(&key) {
                    self.current_suggestion =
                        Some(self.suggester.suggest(&key.0, &key.1, &key.2));
                    self.suggestion_key = Some(key);
                }
            }
            None => {
                // No stale suggestion may survive an incomplete triple.
                self.current_suggestion = None;
                self.suggestion_key = None;
            }
        }
    }

    fn recompute_verdict(&mut self) {
        let described = self
            .draft
            .description
            .as_deref()
            .is_some_and(|s| !s.is_empty());
        let actioned = self.draft.action.as_deref().is_some_and(|s| !s.is_empty());
        self.current_verdict = if described && actioned {
            self.validator.validate(&self.draft)
        } else {
            ValidationVerdict::untested()
        };
    }
}

impl Default for DraftLogSession {
    fn default() -> Self {
        Self::new()
    }
}
