use serde::{Deserialize, Serialize};

use crate::models::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// Serde uses the display string so wire payloads match the UI vocabulary
/// ("Boeing 737", not "Boeing737").
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(AircraftModel {
    Boeing737 => "Boeing 737",
    AirbusA320 => "Airbus A320",
    Boeing787 => "Boeing 787",
    AirbusA350 => "Airbus A350",
    EmbraerE190 => "Embraer E190",
});

str_enum!(IssueCategory {
    Mechanical => "Mechanical",
    Electrical => "Electrical",
    Hydraulics => "Hydraulics",
    Avionics => "Avionics",
    Environmental => "Environmental",
    Structural => "Structural",
});

str_enum!(LogStatus {
    Pending => "Pending",
    Completed => "Completed",
    Flagged => "Flagged",
});

str_enum!(MessageRole {
    User => "user",
    Assistant => "assistant",
});

str_enum!(TechnicianRole {
    Technician => "Technician",
    LeadTechnician => "Lead Technician",
    Engineer => "Engineer",
    Manager => "Manager",
});

str_enum!(RetentionPeriod {
    OneYear => "1 year",
    ThreeYears => "3 years",
    FiveYears => "5 years",
    SevenYears => "7 years",
    TenYears => "10 years",
    Indefinite => "Indefinite",
});

str_enum!(ArchivePolicy {
    Never => "Never",
    AfterSixMonths => "After 6 months",
    AfterOneYear => "After 1 year",
    AfterTwoYears => "After 2 years",
});

impl AircraftModel {
    /// Every supported airframe, in display order.
    pub const ALL: [AircraftModel; 5] = [
        AircraftModel::Boeing737,
        AircraftModel::AirbusA320,
        AircraftModel::Boeing787,
        AircraftModel::AirbusA350,
        AircraftModel::EmbraerE190,
    ];
}

impl IssueCategory {
    /// Every issue category, in display order.
    pub const ALL: [IssueCategory; 6] = [
        IssueCategory::Mechanical,
        IssueCategory::Electrical,
        IssueCategory::Hydraulics,
        IssueCategory::Avionics,
        IssueCategory::Environmental,
        IssueCategory::Structural,
    ];
}
