//! Dashboard aggregation — pure counting over the maintenance log list.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{
    AircraftModel, AnalyticsData, IssueCategory, LogStatus, MaintenanceLog, WeeklyCompletion,
};

/// Derive the dashboard figures from a log list.
///
/// Flagged logs count toward neither completed nor pending totals but do
/// appear in the per-category and per-aircraft issue counts. Every enum
/// variant is present in the count maps, zero-filled, so charts always have
/// a full axis.
pub fn compute_analytics(logs: &[MaintenanceLog]) -> AnalyticsData {
    let completed: Vec<&MaintenanceLog> = logs
        .iter()
        .filter(|log| log.status == LogStatus::Completed)
        .collect();
    let pending = logs
        .iter()
        .filter(|log| log.status == LogStatus::Pending)
        .count() as u32;

    let average_resolution_time = if completed.is_empty() {
        0
    } else {
        completed.iter().map(|log| log.time_spent).sum::<u32>() / completed.len() as u32
    };

    let mut issues_by_category: BTreeMap<IssueCategory, u32> =
        IssueCategory::ALL.iter().cloned().map(|c| (c, 0)).collect();
    let mut issues_by_aircraft: BTreeMap<AircraftModel, u32> =
        AircraftModel::ALL.iter().cloned().map(|m| (m, 0)).collect();
    for log in logs {
        *issues_by_category.entry(log.category.clone()).or_default() += 1;
        *issues_by_aircraft
            .entry(log.aircraft_model.clone())
            .or_default() += 1;
    }

    let mut weekly: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for log in &completed {
        *weekly.entry(week_start(log.date)).or_default() += 1;
    }
    let weekly_completions = weekly
        .into_iter()
        .map(|(date, count)| WeeklyCompletion { date, count })
        .collect();

    AnalyticsData {
        completed_maintenance: completed.len() as u32,
        pending_maintenance: pending,
        average_resolution_time,
        issues_by_category,
        issues_by_aircraft,
        weekly_completions,
    }
}

/// The Monday opening the week containing `date`.
fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn week_start_is_monday() {
        // 2025-02-15 is a Saturday; its week opens on Monday the 10th.
        let date = NaiveDate::from_ymd_opt(2025, 2, 15).unwrap();
        assert_eq!(week_start(date), NaiveDate::from_ymd_opt(2025, 2, 10).unwrap());
        // Monday maps to itself.
        let monday = NaiveDate::from_ymd_opt(2025, 2, 10).unwrap();
        assert_eq!(week_start(monday), monday);
    }

    #[test]
    fn empty_log_list_yields_zeroes() {
        let data = compute_analytics(&[]);
        assert_eq!(data.completed_maintenance, 0);
        assert_eq!(data.pending_maintenance, 0);
        assert_eq!(data.average_resolution_time, 0);
        assert!(data.weekly_completions.is_empty());
        // Full zero-filled axes regardless.
        assert_eq!(data.issues_by_category.len(), 6);
        assert_eq!(data.issues_by_aircraft.len(), 5);
        assert!(data.issues_by_category.values().all(|&v| v == 0));
    }

    #[test]
    fn seed_logs_aggregate_as_expected() {
        let logs = seed::maintenance_logs();
        let data = compute_analytics(&logs);

        assert_eq!(data.completed_maintenance, 4);
        assert_eq!(data.pending_maintenance, 1);
        // (180 + 90 + 150 + 120) / 4
        assert_eq!(data.average_resolution_time, 135);

        // One log per category in the seed set.
        assert!(data.issues_by_category.values().all(|&v| v == 1));
        // Two 737 logs, one each for A320/787/A350/E190.
        assert_eq!(data.issues_by_aircraft[&AircraftModel::Boeing737], 2);
        assert_eq!(data.issues_by_aircraft[&AircraftModel::AirbusA320], 1);

        // All four completed logs fall in the week of 2025-02-10.
        assert_eq!(
            data.weekly_completions,
            vec![WeeklyCompletion {
                date: NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
                count: 4,
            }]
        );
    }

    #[test]
    fn flagged_logs_count_as_issues_only() {
        let logs = seed::maintenance_logs();
        let data = compute_analytics(&logs);
        // The flagged structural inspection is in the category counts…
        assert_eq!(data.issues_by_category[&IssueCategory::Structural], 1);
        // …but in neither headline total.
        assert_eq!(data.completed_maintenance + data.pending_maintenance, 5);
    }

    #[test]
    fn weekly_series_is_ascending() {
        let mut logs = seed::maintenance_logs();
        // Push one completion into a later week.
        logs[0].date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        let data = compute_analytics(&logs);
        let dates: Vec<_> = data.weekly_completions.iter().map(|w| w.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
        assert_eq!(data.weekly_completions.len(), 2);
    }
}
