pub mod analytics; // dashboard aggregation over the log set
pub mod api; // local HTTP API (chat contract + shell surfaces)
pub mod assistant; // transport boundary: network client + offline stand-in
pub mod config;
pub mod conversation; // chat sessions, turn-taking, in-flight guard
pub mod core_state; // transport-agnostic shared state
pub mod draft; // draft-log session with reactive derivation
pub mod models;
pub mod preferences; // settings-screen flags
pub mod seed; // in-memory reference dataset
pub mod suggestion; // corrective-action template engine
pub mod validation; // log quality rules
