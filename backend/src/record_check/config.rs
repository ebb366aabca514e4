//! Record-check configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Runtime switches for the `record-check` binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "RECORD_CHECK")]
pub struct RecordCheckSettings {
    /// Stop at the first rejected row.
    #[ortho_config(default = false)]
    pub fail_fast: bool,
    /// Emit logs as JSON lines instead of human-readable text.
    #[ortho_config(default = false)]
    pub json_logs: bool,
}

#[cfg(test)]
mod tests {
    //! Unit tests for record-check configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> RecordCheckSettings {
        RecordCheckSettings::load_from_iter([OsString::from("record-check")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_are_used_when_missing() {
        let _guard = lock_env([
            ("RECORD_CHECK_FAIL_FAST", None::<String>),
            ("RECORD_CHECK_JSON_LOGS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert!(!settings.fail_fast);
        assert!(!settings.json_logs);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("RECORD_CHECK_FAIL_FAST", Some("true".to_owned())),
            ("RECORD_CHECK_JSON_LOGS", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert!(settings.fail_fast);
        assert!(settings.json_logs);
    }
}
