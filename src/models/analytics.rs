use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{AircraftModel, IssueCategory};

/// One point in the weekly completion series. `date` is the Monday
/// opening the week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyCompletion {
    pub date: NaiveDate,
    pub count: u32,
}

/// Aggregated dashboard figures derived from the maintenance log list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    pub completed_maintenance: u32,
    pub pending_maintenance: u32,
    /// Minutes, averaged over completed logs.
    pub average_resolution_time: u32,
    pub issues_by_category: BTreeMap<IssueCategory, u32>,
    pub issues_by_aircraft: BTreeMap<AircraftModel, u32>,
    pub weekly_completions: Vec<WeeklyCompletion>,
}
