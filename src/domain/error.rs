//! Domain error types.

/// A single `hh:mm` token that could not be read as a time of day.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time '{token}': {reason}")]
pub struct TimeFormatError {
    pub token: String,
    pub reason: String,
}

impl TimeFormatError {
    pub fn new(token: &str, reason: impl Into<String>) -> Self {
        Self {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}

/// A recurring-schedule expression that matched neither grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid schedule '{input}': {reason}")]
pub struct ScheduleFormatError {
    pub input: String,
    pub reason: String,
}

impl ScheduleFormatError {
    pub fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<(&str, TimeFormatError)> for ScheduleFormatError {
    fn from((input, err): (&str, TimeFormatError)) -> Self {
        Self::new(input, err.to_string())
    }
}

/// Top-level error type for twsconf.
///
/// Every variant raised while interpreting a value names the key and the raw
/// value, so a misconfigured file can be fixed without reading the source.
#[derive(Debug, thiserror::Error)]
pub enum TwsConfError {
    #[error("cannot load settings file {file}: {reason}")]
    ConfigLoad { file: String, reason: String },

    #[error("invalid numeric value {key}={value}")]
    MalformedNumeric { key: String, value: String },

    #[error("invalid boolean value {key}={value}")]
    MalformedBoolean { key: String, value: String },

    #[error("unrecognized {axis} {key}={value}")]
    UnrecognizedPolicyValue {
        key: String,
        axis: &'static str,
        value: String,
    },

    #[error("invalid time format {key}={}: {}", .source.token, .source.reason)]
    InvalidTimeFormat {
        key: String,
        #[source]
        source: TimeFormatError,
    },
}

impl From<&TwsConfError> for std::process::ExitCode {
    fn from(err: &TwsConfError) -> Self {
        let code: u8 = match err {
            TwsConfError::ConfigLoad { .. } => 1,
            TwsConfError::MalformedNumeric { .. }
            | TwsConfError::MalformedBoolean { .. }
            | TwsConfError::UnrecognizedPolicyValue { .. }
            | TwsConfError::InvalidTimeFormat { .. } => 2,
        };
        std::process::ExitCode::from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_error_names_key_and_value() {
        let err = TwsConfError::UnrecognizedPolicyValue {
            key: "TradingMode".into(),
            axis: "trading mode",
            value: "papr".into(),
        };
        assert_eq!(err.to_string(), "unrecognized trading mode TradingMode=papr");
    }

    #[test]
    fn time_error_names_key_and_token() {
        let err = TwsConfError::InvalidTimeFormat {
            key: "ClosedownAt".into(),
            source: TimeFormatError::new("24:00", "hour must be between 0 and 23"),
        };
        assert_eq!(
            err.to_string(),
            "invalid time format ClosedownAt=24:00: hour must be between 0 and 23"
        );
    }

    #[test]
    fn exit_codes_separate_load_from_value_errors() {
        let code = |err: &TwsConfError| format!("{:?}", std::process::ExitCode::from(err));
        let load = TwsConfError::ConfigLoad {
            file: "ibc.ini".into(),
            reason: "not found".into(),
        };
        let value = TwsConfError::MalformedNumeric {
            key: "CommandServerPort".into(),
            value: "x".into(),
        };
        assert_eq!(code(&load), format!("{:?}", std::process::ExitCode::from(1)));
        assert_eq!(code(&value), format!("{:?}", std::process::ExitCode::from(2)));
    }

    #[test]
    fn schedule_error_wraps_time_error() {
        let err: ScheduleFormatError =
            ("Every 5 mins 9h", TimeFormatError::new("9h", "expected hh:mm")).into();
        assert_eq!(err.input, "Every 5 mins 9h");
        assert_eq!(err.reason, "invalid time '9h': expected hh:mm");
    }
}
