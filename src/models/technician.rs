use serde::{Deserialize, Serialize};

use super::enums::TechnicianRole;

/// The signed-in technician shown in the shell header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technician {
    pub id: String,
    pub name: String,
    pub role: TechnicianRole,
    pub avatar: String,
}
