//! Interprets raw properties into [`Settings`].
//!
//! Fields are read in a fixed order: command server, terminal settings,
//! save-settings schedule, trading mode, API credentials, FIX credentials.
//! A key that is missing or empty leaves the corresponding field untouched.
//!
//! Errors come in two kinds. A malformed scalar, an unknown policy tag or a
//! bad `ClosedownAt` is a [`TwsConfError`] and ends the pass. A malformed
//! `SaveTwsSettingsAt` is a [`ScheduleFormatError`]: it is logged as a
//! warning, the schedule stays disabled and the pass carries on.

use crate::domain::error::{ScheduleFormatError, TwsConfError};
use crate::domain::policy::{PolicyTag, TradingMode};
use crate::domain::schedule::{ScheduleDescriptor, parse_schedule};
use crate::domain::settings::{
    CommandServerSettings, Credentials, Secret, Settings, TwsSettings,
};
use crate::domain::time_of_day::parse_time_of_day;
use crate::ports::log_port::LogPort;
use crate::ports::property_port::PropertyPort;
use std::path::PathBuf;

/// Interprets `source` on top of `Settings::default()`.
pub fn interpret(source: &dyn PropertyPort, log: &dyn LogPort) -> Result<Settings, TwsConfError> {
    let mut settings = Settings::default();
    SettingsParser::new(log).parse(source, &mut settings)?;
    Ok(settings)
}

pub struct SettingsParser<'a> {
    log: &'a dyn LogPort,
}

impl<'a> SettingsParser<'a> {
    pub fn new(log: &'a dyn LogPort) -> Self {
        Self { log }
    }

    /// Single pass over every recognized key. There is no rollback: fields
    /// written before a fatal error keep their new values.
    pub fn parse(
        &self,
        source: &dyn PropertyPort,
        settings: &mut Settings,
    ) -> Result<(), TwsConfError> {
        self.parse_command_server(source, &mut settings.command_server)?;
        self.parse_tws_settings(source, &mut settings.tws)?;

        match parse_save_tws_settings_at(source) {
            Ok(Some(schedule)) => settings.save_tws_settings_at = Some(schedule),
            Ok(None) => {}
            Err(e) => {
                self.log
                    .warn(&format!("Invalid setting SaveTwsSettingsAt={}: {}", e.input, e.reason));
                self.log.warn("TWS settings will not be saved automatically");
            }
        }

        self.parse_trading_mode(source, settings)?;
        self.parse_api_credentials(source, &mut settings.api_credentials);
        self.parse_fix_credentials(source, &mut settings.fix_credentials);
        Ok(())
    }

    fn parse_command_server(
        &self,
        source: &dyn PropertyPort,
        server: &mut CommandServerSettings,
    ) -> Result<(), TwsConfError> {
        if let Some(prompt) = source.get_string("CommandPrompt") {
            server.prompt = prompt;
        }
        if let Some(address) = source.get_string("BindAddress") {
            server.bind_address = Some(address);
        }
        if let Some(port) = source.get_port("CommandServerPort")? {
            server.port = port;
        }
        if let Some(control_from) = source.get_string("ControlFrom") {
            server.control_from = Some(control_from);
        }
        server.suppress_info_messages = source.get_bool("SuppressInfoMessages", true)?;
        Ok(())
    }

    fn parse_tws_settings(
        &self,
        source: &dyn PropertyPort,
        tws: &mut TwsSettings,
    ) -> Result<(), TwsConfError> {
        if let Some(dir) = source.get_string("IbDir") {
            tws.ib_dir = Some(PathBuf::from(dir));
        }
        if let Some(port) = source.get_port("OverrideTwsApiPort")? {
            tws.override_api_port = Some(port);
        }
        if source.get_string("StoreSettingsOnServer").is_some() {
            tws.store_settings_on_server = Some(source.get_bool("StoreSettingsOnServer", false)?);
        }
        if source.get_string("ReadOnlyApi").is_some() {
            tws.read_only_api = Some(source.get_bool("ReadOnlyApi", true)?);
        }

        if let Some(policy) = resolve_policy(source, "AcceptIncomingConnectionAction")? {
            tws.incoming_connection_policy = policy;
        }
        if let Some(policy) = resolve_policy(source, "ExistingSessionDetectedAction")? {
            tws.existing_session_policy = policy;
        }
        if let Some(policy) = resolve_policy(source, "LogComponents")? {
            tws.component_log_policy = policy;
        }

        if let Some(time) = source.get_string("ClosedownAt") {
            let shutdown =
                parse_time_of_day(&time).map_err(|err| TwsConfError::InvalidTimeFormat {
                    key: "ClosedownAt".to_string(),
                    source: err,
                })?;
            tws.shutdown_time = Some(shutdown);
        }

        tws.fix_enabled = source.get_bool("FIX", false)?;
        tws.show_all_trades = source.get_bool("ShowAllTrades", false)?;
        tws.log_to_console = source.get_bool("LogToConsole", false)?;
        tws.accept_non_brokerage_account_warning =
            source.get_bool("AcceptNonBrokerageAccountWarning", true)?;
        tws.read_only_login = source.get_bool("ReadOnlyLogin", false)?;
        tws.minimize_main_window = source.get_bool("MinimizeMainWindow", false)?;
        tws.auto_closedown = source.get_bool("IbAutoClosedown", false)?;
        tws.allow_blind_trading = source.get_bool("AllowBlindTrading", false)?;
        tws.dismiss_password_expiry_warning =
            source.get_bool("DismissPasswordExpiryWarning", false)?;
        tws.dismiss_nse_compliance_notice =
            source.get_bool("DismissNSEComplianceNotice", true)?;
        tws.send_tws_logs_to_console = source.get_bool("SendTWSLogsToConsole", false)?;
        Ok(())
    }

    fn parse_trading_mode(
        &self,
        source: &dyn PropertyPort,
        settings: &mut Settings,
    ) -> Result<(), TwsConfError> {
        if let Some(raw) = source.get_string("TradingMode") {
            let mode: TradingMode = resolve_tag(&raw, "TradingMode")?;
            self.log.info(&format!("Trading mode set from config: {raw}"));
            settings.trading_mode = mode;
        }
        Ok(())
    }

    fn parse_api_credentials(&self, source: &dyn PropertyPort, creds: &mut Credentials) {
        if let Some(login_id) = source.get_string("IbLoginId") {
            self.log.info(&format!("IB username set from config: {login_id}"));
            creds.login_id = Some(login_id);
        }
        if let Some(password) = source.get_string("IbPassword") {
            self.log.info("IB password set from config");
            creds.password = Some(Secret::new(password));
        }
    }

    fn parse_fix_credentials(&self, source: &dyn PropertyPort, creds: &mut Credentials) {
        if let Some(login_id) = source.get_string("FIXLoginId") {
            self.log.info(&format!("FIXLoginId set from config: {login_id}"));
            creds.login_id = Some(login_id);
        }
        if let Some(password) = source.get_string("FIXPassword") {
            self.log.info("FIXPassword set from config");
            creds.password = Some(Secret::new(password));
        }
    }
}

fn parse_save_tws_settings_at(
    source: &dyn PropertyPort,
) -> Result<Option<ScheduleDescriptor>, ScheduleFormatError> {
    source
        .get_string("SaveTwsSettingsAt")
        .map(|raw| parse_schedule(&raw))
        .transpose()
}

fn resolve_policy<P: PolicyTag>(
    source: &dyn PropertyPort,
    key: &str,
) -> Result<Option<P>, TwsConfError> {
    source
        .get_string(key)
        .map(|raw| resolve_tag(&raw, key))
        .transpose()
}

fn resolve_tag<P: PolicyTag>(raw: &str, key: &str) -> Result<P, TwsConfError> {
    P::from_tag(raw).ok_or_else(|| TwsConfError::UnrecognizedPolicyValue {
        key: key.to_string(),
        axis: P::AXIS,
        value: raw.to_string(),
    })
}
