use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{AircraftModel, IssueCategory, LogStatus};
use super::ModelError;

/// A completed maintenance log entry.
///
/// Invariant for this type (as opposed to [`DraftLog`]): every field except
/// `parts` is present and non-empty. Construct via [`DraftLog::finalize`] to
/// keep that invariant honest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceLog {
    pub id: String,
    pub date: NaiveDate,
    pub aircraft_model: AircraftModel,
    pub tail_number: String,
    pub technician_id: String,
    pub technician_name: String,
    pub category: IssueCategory,
    pub description: String,
    pub action: String,
    pub status: LogStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<String>>,
    /// Minutes.
    pub time_spent: u32,
}

/// An in-progress log the technician is still composing.
/// Any field may be absent until submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftLog {
    pub date: Option<NaiveDate>,
    pub aircraft_model: Option<AircraftModel>,
    pub tail_number: Option<String>,
    pub technician_id: Option<String>,
    pub technician_name: Option<String>,
    pub category: Option<IssueCategory>,
    pub description: Option<String>,
    pub action: Option<String>,
    pub status: Option<LogStatus>,
    pub parts: Option<Vec<String>>,
    pub time_spent: Option<u32>,
}

impl DraftLog {
    /// Names of required fields that are still absent or blank.
    /// `parts` is optional on a final log and is never reported.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.date.is_none() {
            missing.push("date");
        }
        if self.aircraft_model.is_none() {
            missing.push("aircraftModel");
        }
        if is_blank(&self.tail_number) {
            missing.push("tailNumber");
        }
        if is_blank(&self.technician_id) {
            missing.push("technicianId");
        }
        if is_blank(&self.technician_name) {
            missing.push("technicianName");
        }
        if self.category.is_none() {
            missing.push("category");
        }
        if is_blank(&self.description) {
            missing.push("description");
        }
        if is_blank(&self.action) {
            missing.push("action");
        }
        if self.status.is_none() {
            missing.push("status");
        }
        if self.time_spent.is_none() {
            missing.push("timeSpent");
        }
        missing
    }

    pub fn is_submittable(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Promote the draft to a final log under the given id.
    pub fn finalize(self, id: impl Into<String>) -> Result<MaintenanceLog, ModelError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ModelError::IncompleteDraft {
                missing: missing.join(", "),
            });
        }
        Ok(MaintenanceLog {
            id: id.into(),
            date: self.date.expect("checked by missing_fields"),
            aircraft_model: self.aircraft_model.expect("checked by missing_fields"),
            tail_number: self.tail_number.expect("checked by missing_fields"),
            technician_id: self.technician_id.expect("checked by missing_fields"),
            technician_name: self.technician_name.expect("checked by missing_fields"),
            category: self.category.expect("checked by missing_fields"),
            description: self.description.expect("checked by missing_fields"),
            action: self.action.expect("checked by missing_fields"),
            status: self.status.expect("checked by missing_fields"),
            parts: self.parts.filter(|p| !p.is_empty()),
            time_spent: self.time_spent.expect("checked by missing_fields"),
        })
    }
}

impl From<&MaintenanceLog> for DraftLog {
    fn from(log: &MaintenanceLog) -> Self {
        DraftLog {
            date: Some(log.date),
            aircraft_model: Some(log.aircraft_model.clone()),
            tail_number: Some(log.tail_number.clone()),
            technician_id: Some(log.technician_id.clone()),
            technician_name: Some(log.technician_name.clone()),
            category: Some(log.category.clone()),
            description: Some(log.description.clone()),
            action: Some(log.action.clone()),
            status: Some(log.status.clone()),
            parts: log.parts.clone(),
            time_spent: Some(log.time_spent),
        }
    }
}

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, |s| s.trim().is_empty())
}

/// Split a comma-separated parts field into a clean list:
/// trims each element, drops empties, preserves order.
pub fn parse_parts(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> DraftLog {
        DraftLog {
            date: Some(NaiveDate::from_ymd_opt(2025, 2, 15).unwrap()),
            aircraft_model: Some(AircraftModel::Boeing737),
            tail_number: Some("N12345".into()),
            technician_id: Some("tech456".into()),
            technician_name: Some("Maria Chen".into()),
            category: Some(IssueCategory::Mechanical),
            description: Some("Engine #2 showing unusual vibration during taxiing".into()),
            action: Some("Inspected engine mount. Replaced worn bushings.".into()),
            status: Some(LogStatus::Completed),
            parts: Some(vec!["EM-2234-B".into()]),
            time_spent: Some(180),
        }
    }

    #[test]
    fn parse_parts_trims_and_drops_empties() {
        assert_eq!(parse_parts("A, B ,C"), vec!["A", "B", "C"]);
        assert_eq!(parse_parts(""), Vec::<String>::new());
        assert_eq!(parse_parts(" , ,"), Vec::<String>::new());
        assert_eq!(parse_parts("OR-H-592"), vec!["OR-H-592"]);
    }

    #[test]
    fn parse_parts_preserves_order() {
        assert_eq!(parse_parts("Z,A,M"), vec!["Z", "A", "M"]);
    }

    #[test]
    fn complete_draft_finalizes() {
        let log = full_draft().finalize("log100").unwrap();
        assert_eq!(log.id, "log100");
        assert_eq!(log.tail_number, "N12345");
        assert_eq!(log.parts.as_deref(), Some(&["EM-2234-B".to_string()][..]));
    }

    #[test]
    fn empty_parts_collapse_to_none_on_finalize() {
        let mut draft = full_draft();
        draft.parts = Some(vec![]);
        let log = draft.finalize("log101").unwrap();
        assert!(log.parts.is_none());
    }

    #[test]
    fn incomplete_draft_reports_missing_fields() {
        let mut draft = full_draft();
        draft.action = Some("   ".into());
        draft.status = None;
        let err = draft.finalize("log102").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("action"));
        assert!(msg.contains("status"));
    }

    #[test]
    fn parts_are_never_required() {
        let mut draft = full_draft();
        draft.parts = None;
        assert!(draft.is_submittable());
    }

    #[test]
    fn log_serde_is_camel_case() {
        let log = full_draft().finalize("log103").unwrap();
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json["aircraftModel"], "Boeing 737");
        assert_eq!(json["tailNumber"], "N12345");
        assert_eq!(json["timeSpent"], 180);
        assert_eq!(json["status"], "Completed");
    }
}
