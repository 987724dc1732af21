pub mod analytics;
pub mod chat;
pub mod health;
pub mod logs;
pub mod preferences;
