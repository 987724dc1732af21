//! In-memory reference dataset: a technician roster entry, recent
//! maintenance logs, and two canned troubleshooting conversations.
//!
//! Serves as the server's working set (there is no persistence layer) and
//! as fixtures for tests.

use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::conversation::ConversationSession;
use crate::models::{
    AircraftModel, IssueCategory, LogStatus, MaintenanceLog, Message, MessageRole, MessageTags,
    Technician, TechnicianRole,
};

pub fn current_technician() -> Technician {
    Technician {
        id: "tech123".into(),
        name: "Alex Rodriguez".into(),
        role: TechnicianRole::LeadTechnician,
        avatar: "https://randomuser.me/api/portraits/men/32.jpg".into(),
    }
}

pub fn maintenance_logs() -> Vec<MaintenanceLog> {
    vec![
        MaintenanceLog {
            id: "log001".into(),
            date: date(2025, 2, 15),
            aircraft_model: AircraftModel::Boeing737,
            tail_number: "N12345".into(),
            technician_id: "tech456".into(),
            technician_name: "Maria Chen".into(),
            category: IssueCategory::Mechanical,
            description: "Engine #2 showing unusual vibration during taxiing".into(),
            action: "Inspected engine mount. Replaced worn bushings and performed vibration \
                     analysis. Engine now operating within normal parameters."
                .into(),
            status: LogStatus::Completed,
            parts: Some(vec!["EM-2234-B".into(), "BU-778-A".into()]),
            time_spent: 180,
        },
        MaintenanceLog {
            id: "log002".into(),
            date: date(2025, 2, 14),
            aircraft_model: AircraftModel::AirbusA320,
            tail_number: "N54321".into(),
            technician_id: "tech789".into(),
            technician_name: "James Wilson".into(),
            category: IssueCategory::Electrical,
            description: "Cabin lighting system failure in zones B and C".into(),
            action: "Traced issue to faulty PSU. Replaced unit and verified system functionality."
                .into(),
            status: LogStatus::Completed,
            parts: Some(vec!["PSU-A320-7".into()]),
            time_spent: 90,
        },
        MaintenanceLog {
            id: "log003".into(),
            date: date(2025, 2, 16),
            aircraft_model: AircraftModel::Boeing787,
            tail_number: "N78787".into(),
            technician_id: "tech123".into(),
            technician_name: "Alex Rodriguez".into(),
            category: IssueCategory::Avionics,
            description: "TCAS showing intermittent failures during pre-flight".into(),
            action: "Diagnosed faulty connection. Pending replacement of wiring harness.".into(),
            status: LogStatus::Pending,
            parts: None,
            time_spent: 60,
        },
        MaintenanceLog {
            id: "log004".into(),
            date: date(2025, 2, 13),
            aircraft_model: AircraftModel::AirbusA350,
            tail_number: "N35035".into(),
            technician_id: "tech456".into(),
            technician_name: "Maria Chen".into(),
            category: IssueCategory::Hydraulics,
            description: "Slow retraction of landing gear, left main".into(),
            action: "Identified hydraulic fluid leak at junction J47. Replaced O-ring and \
                     replenished fluid."
                .into(),
            status: LogStatus::Completed,
            parts: Some(vec!["OR-H-592".into()]),
            time_spent: 150,
        },
        MaintenanceLog {
            id: "log005".into(),
            date: date(2025, 2, 12),
            aircraft_model: AircraftModel::EmbraerE190,
            tail_number: "N19019".into(),
            technician_id: "tech789".into(),
            technician_name: "James Wilson".into(),
            category: IssueCategory::Environmental,
            description: "Cabin temperature control erratic in flight".into(),
            action: "Recalibrated temperature sensors and updated control software to latest \
                     version."
                .into(),
            status: LogStatus::Completed,
            parts: None,
            time_spent: 120,
        },
        MaintenanceLog {
            id: "log006".into(),
            date: date(2025, 2, 16),
            aircraft_model: AircraftModel::Boeing737,
            tail_number: "N73737".into(),
            technician_id: "tech123".into(),
            technician_name: "Alex Rodriguez".into(),
            category: IssueCategory::Structural,
            description: "Minor dent observed on leading edge of right wing".into(),
            action: "Visual inspection performed. Dent measured and documented. Engineering \
                     assessment required."
                .into(),
            status: LogStatus::Flagged,
            parts: None,
            time_spent: 45,
        },
    ]
}

/// Two canned troubleshooting threads for an empty-state chat screen.
pub fn chat_sessions() -> Vec<ConversationSession> {
    vec![
        ConversationSession::from_parts(
            Uuid::new_v4(),
            "A320 APU Start Issue",
            vec![
                seeded_message(
                    MessageRole::User,
                    "I'm having trouble with APU start sequence on an A320. It begins the start \
                     but then cuts off at about 50% N.",
                    timestamp(2025, 2, 15, 14, 32, 0),
                    MessageTags {
                        aircraft_model: Some(AircraftModel::AirbusA320),
                        issue_category: Some(IssueCategory::Mechanical),
                    },
                ),
                seeded_message(
                    MessageRole::Assistant,
                    "This sounds like it could be related to the APU fuel system or ignition. \
                     When the APU cuts off at around 50% N, check the ECAM for any fault \
                     messages. Common causes include fuel supply issues, ignition problems, and \
                     bleed air leaks affecting startup.",
                    timestamp(2025, 2, 15, 14, 33, 10),
                    MessageTags::default(),
                ),
            ],
            timestamp(2025, 2, 15, 14, 32, 0),
            timestamp(2025, 2, 15, 14, 33, 10),
        ),
        ConversationSession::from_parts(
            Uuid::new_v4(),
            "B737 Landing Gear Indicator",
            vec![
                seeded_message(
                    MessageRole::User,
                    "On a 737-800, we have an intermittent nose gear down-and-locked indicator \
                     issue. It occasionally flickers during flight.",
                    timestamp(2025, 2, 14, 9, 15, 0),
                    MessageTags {
                        aircraft_model: Some(AircraftModel::Boeing737),
                        issue_category: Some(IssueCategory::Electrical),
                    },
                ),
                seeded_message(
                    MessageRole::Assistant,
                    "Intermittent landing gear indicator issues on the 737-800 are often related \
                     to the position sensing circuit. The flickering suggests a connection \
                     problem rather than a mechanical issue with the gear itself. Start with an \
                     inspection of the downlock sensor on the nose gear and its electrical \
                     connections.",
                    timestamp(2025, 2, 14, 9, 16, 30),
                    MessageTags::default(),
                ),
            ],
            timestamp(2025, 2, 14, 9, 15, 0),
            timestamp(2025, 2, 14, 9, 16, 30),
        ),
    ]
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn timestamp(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s)
        .single()
        .expect("valid seed timestamp")
}

fn seeded_message(
    role: MessageRole,
    content: &str,
    timestamp: chrono::DateTime<Utc>,
    tags: MessageTags,
) -> Message {
    Message {
        id: Uuid::new_v4(),
        role,
        content: content.into(),
        timestamp,
        tags: if tags.is_empty() { None } else { Some(tags) },
        processing_time: None,
        is_error: false,
    }
}
