/// Application-level constants
pub const APP_NAME: &str = "AeroLog";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Port the bundled API server binds by default (override with `PORT`).
pub const DEFAULT_PORT: u16 = 5000;

/// Base URL the network assistant targets when none is configured.
pub const DEFAULT_CHAT_BASE_URL: &str = "http://localhost:5000";

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_aerolog() {
        assert_eq!(APP_NAME, "AeroLog");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn default_filter_names_the_crate() {
        assert!(default_log_filter().contains("aerolog=debug"));
    }
}
