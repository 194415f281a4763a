// Import necessary crates and modules
use keyring::Entry;

use crate::error::ReportError;

/// Canvas API base URL used when no override is configured.
const DEFAULT_BASE_URL: &str = "https://nebo.instructure.com/api/v1";

const URL_SETTING: &str = "CANVAS_URL";
const TOKEN_SETTING: &str = "CANVAS_TOKEN";
const STUDENT_NAME_SETTING: &str = "CANVAS_STUDENT_NAME";

/// Settings for one report run.
///
/// Constructed once at startup and passed by value into the client; no
/// component reads ambient configuration after this point.
///
/// Fields:
/// - `base_url`: Base URL for the Canvas API, without a trailing slash.
/// - `access_token`: API token sent as a Bearer credential on every request.
/// - `student_name`: Display name of the observed student to report on.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub base_url: String,
    pub access_token: String,
    pub student_name: String,
}

impl ReportConfig {
    /// Loads the configuration, failing fast when a required setting is
    /// absent.
    ///
    /// Each setting is looked up in the environment first and then in the
    /// system's keyring, under the same name. The base URL is optional and
    /// falls back to the stock instructure URL; the access token and the
    /// student name are required.
    ///
    /// Returns:
    /// - `Ok(ReportConfig)`: All required settings were found.
    /// - `Err(ReportError::Configuration)`: A required setting is missing;
    ///   the error names the setting and how to provide it.
    pub fn load() -> Result<ReportConfig, ReportError> {
        Ok(ReportConfig {
            base_url: lookup_setting(URL_SETTING)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            access_token: require_setting(TOKEN_SETTING)?,
            student_name: require_setting(STUDENT_NAME_SETTING)?,
        })
    }
}

/// Looks a setting up in the environment first, then in the system keyring.
///
/// Empty environment values count as absent. Keyring entries are stored
/// under this crate's name as the service, with the setting name as the key.
fn lookup_setting(name: &str) -> Option<String> {
    if let Ok(value) = std::env::var(name) {
        if !value.is_empty() {
            return Some(value);
        }
    }
    let entry = Entry::new(env!("CARGO_PKG_NAME"), name).ok()?;
    entry.get_password().ok()
}

fn require_setting(name: &'static str) -> Result<String, ReportError> {
    lookup_setting(name).ok_or_else(|| ReportError::Configuration {
        setting: name,
        hint: format!(
            "Set the {} environment variable, or store a {} entry for service \"{}\" in the system keyring.",
            name,
            name,
            env!("CARGO_PKG_NAME")
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn report_config_initialization() {
        let config = ReportConfig {
            base_url: String::from("https://example.com/api/v1"),
            access_token: String::from("secret-token"),
            student_name: String::from("First Last"),
        };

        assert_eq!(config.base_url, "https://example.com/api/v1");
        assert_eq!(config.access_token, "secret-token");
        assert_eq!(config.student_name, "First Last");
    }

    #[test]
    #[serial]
    fn lookup_prefers_environment() {
        std::env::set_var("CANVAS_TEST_SETTING", "from-env");
        let value = lookup_setting("CANVAS_TEST_SETTING");
        std::env::remove_var("CANVAS_TEST_SETTING");

        assert_eq!(value, Some("from-env".to_string()));
    }

    #[test]
    #[serial]
    fn empty_environment_value_counts_as_absent() {
        std::env::set_var("CANVAS_TEST_EMPTY", "");
        let value = lookup_setting("CANVAS_TEST_EMPTY");
        std::env::remove_var("CANVAS_TEST_EMPTY");

        assert_eq!(value, None);
    }

    #[test]
    #[serial]
    fn missing_setting_is_a_configuration_error() {
        std::env::remove_var("CANVAS_TEST_MISSING");
        let error = require_setting("CANVAS_TEST_MISSING").unwrap_err();

        let message = error.to_string();
        assert!(message.contains("missing required setting CANVAS_TEST_MISSING"));
        assert!(message.contains("environment variable"));
    }
}
