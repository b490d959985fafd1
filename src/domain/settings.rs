//! The interpreted launcher settings.
//!
//! `Settings::default()` holds the values the launcher runs with when the
//! settings file says nothing, so interpretation only ever overwrites.

use crate::domain::policy::{
    ComponentLogPolicy, ExistingSessionPolicy, IncomingConnectionPolicy, TradingMode,
};
use crate::domain::schedule::ScheduleDescriptor;
use chrono::NaiveTime;
use std::fmt;
use std::path::PathBuf;

/// A credential value that never appears in `Debug` or `Display` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(********)")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("********")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    pub login_id: Option<String>,
    pub password: Option<Secret>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandServerSettings {
    pub prompt: String,
    pub bind_address: Option<String>,
    /// Zero keeps the command server disabled.
    pub port: u16,
    pub control_from: Option<String>,
    pub suppress_info_messages: bool,
}

impl Default for CommandServerSettings {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            bind_address: None,
            port: 0,
            control_from: None,
            suppress_info_messages: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwsSettings {
    pub ib_dir: Option<PathBuf>,
    pub override_api_port: Option<u16>,
    /// `None` leaves the terminal's own choice alone.
    pub store_settings_on_server: Option<bool>,
    /// `None` leaves the terminal's own choice alone.
    pub read_only_api: Option<bool>,
    pub incoming_connection_policy: IncomingConnectionPolicy,
    pub existing_session_policy: ExistingSessionPolicy,
    pub component_log_policy: ComponentLogPolicy,
    pub shutdown_time: Option<NaiveTime>,
    pub fix_enabled: bool,
    pub show_all_trades: bool,
    pub log_to_console: bool,
    pub accept_non_brokerage_account_warning: bool,
    pub read_only_login: bool,
    pub minimize_main_window: bool,
    pub auto_closedown: bool,
    pub allow_blind_trading: bool,
    pub dismiss_password_expiry_warning: bool,
    pub dismiss_nse_compliance_notice: bool,
    pub send_tws_logs_to_console: bool,
}

impl Default for TwsSettings {
    fn default() -> Self {
        Self {
            ib_dir: None,
            override_api_port: None,
            store_settings_on_server: None,
            read_only_api: None,
            incoming_connection_policy: IncomingConnectionPolicy::default(),
            existing_session_policy: ExistingSessionPolicy::default(),
            component_log_policy: ComponentLogPolicy::default(),
            shutdown_time: None,
            fix_enabled: false,
            show_all_trades: false,
            log_to_console: false,
            accept_non_brokerage_account_warning: true,
            read_only_login: false,
            minimize_main_window: false,
            auto_closedown: false,
            allow_blind_trading: false,
            dismiss_password_expiry_warning: false,
            dismiss_nse_compliance_notice: true,
            send_tws_logs_to_console: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    pub command_server: CommandServerSettings,
    pub tws: TwsSettings,
    /// `None` disables automatic saving of the terminal's settings.
    pub save_tws_settings_at: Option<ScheduleDescriptor>,
    pub trading_mode: TradingMode,
    pub api_credentials: Credentials,
    pub fix_credentials: Credentials,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_is_redacted() {
        let secret = Secret::new("hunter2");
        assert_eq!(secret.to_string(), "********");
        assert_eq!(format!("{secret:?}"), "Secret(********)");
        assert_eq!(secret.expose(), "hunter2");
    }

    #[test]
    fn credentials_debug_hides_password() {
        let creds = Credentials {
            login_id: Some("edemo".into()),
            password: Some(Secret::new("demouser")),
        };
        let debug = format!("{creds:?}");
        assert!(debug.contains("edemo"));
        assert!(!debug.contains("demouser"));
    }

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.command_server.port, 0);
        assert!(s.command_server.suppress_info_messages);
        assert!(s.tws.accept_non_brokerage_account_warning);
        assert!(s.tws.dismiss_nse_compliance_notice);
        assert!(!s.tws.fix_enabled);
        assert_eq!(s.tws.store_settings_on_server, None);
        assert_eq!(s.tws.read_only_api, None);
        assert_eq!(s.save_tws_settings_at, None);
        assert_eq!(s.trading_mode, TradingMode::Live);
    }
}
