//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::property_file_adapter::PropertyFileAdapter;
use crate::adapters::tracing_log_adapter::TracingLogAdapter;
use crate::domain::error::TwsConfError;
use crate::domain::policy::as_tag;
use crate::domain::settings::{Credentials, Settings};
use crate::domain::settings_parser::interpret;
use crate::domain::time_of_day::format_time_of_day;
use crate::ports::log_port::LogPort;

#[derive(Parser, Debug)]
#[command(name = "twsconf", about = "Trading-terminal launcher settings interpreter")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interpret a settings file and report whether it is usable
    Check {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Print the interpreted settings (credentials redacted)
    Show {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    let log = TracingLogAdapter;
    match cli.command {
        Command::Check { config } => match load_settings(&config, &log) {
            Ok(_) => {
                println!("ok");
                ExitCode::SUCCESS
            }
            Err(e) => report(&e),
        },
        Command::Show { config } => match load_settings(&config, &log) {
            Ok(settings) => {
                print!("{}", render_settings(&settings));
                ExitCode::SUCCESS
            }
            Err(e) => report(&e),
        },
    }
}

fn report(err: &TwsConfError) -> ExitCode {
    eprintln!("error: {err}");
    ExitCode::from(err)
}

/// Loads the file at `path` and interprets it on top of the defaults.
pub fn load_settings(path: &Path, log: &dyn LogPort) -> Result<Settings, TwsConfError> {
    log.info(&format!("Settings file is: {}", path.display()));
    let source = PropertyFileAdapter::from_file(path)?;
    interpret(&source, log)
}

/// One `key = value` line per field, grouped by section.
pub fn render_settings(settings: &Settings) -> String {
    let mut out = String::new();
    let opt = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());

    let server = &settings.command_server;
    let _ = writeln!(out, "[command server]");
    let _ = writeln!(out, "prompt = {:?}", server.prompt);
    let _ = writeln!(out, "bind_address = {}", opt(server.bind_address.clone()));
    let _ = writeln!(out, "port = {}", server.port);
    let _ = writeln!(out, "control_from = {}", opt(server.control_from.clone()));
    let _ = writeln!(out, "suppress_info_messages = {}", server.suppress_info_messages);

    let tws = &settings.tws;
    let _ = writeln!(out, "\n[tws]");
    let _ = writeln!(out, "ib_dir = {}", opt(tws.ib_dir.as_ref().map(|p| p.display().to_string())));
    let _ = writeln!(out, "override_api_port = {}", opt(tws.override_api_port.map(|p| p.to_string())));
    let _ = writeln!(
        out,
        "store_settings_on_server = {}",
        opt(tws.store_settings_on_server.map(|b| b.to_string()))
    );
    let _ = writeln!(out, "read_only_api = {}", opt(tws.read_only_api.map(|b| b.to_string())));
    let _ = writeln!(out, "incoming_connection = {}", as_tag(tws.incoming_connection_policy));
    let _ = writeln!(out, "existing_session = {}", as_tag(tws.existing_session_policy));
    let _ = writeln!(out, "log_components = {}", as_tag(tws.component_log_policy));
    let _ = writeln!(out, "shutdown_time = {}", opt(tws.shutdown_time.map(format_time_of_day)));
    for (name, value) in [
        ("fix_enabled", tws.fix_enabled),
        ("show_all_trades", tws.show_all_trades),
        ("log_to_console", tws.log_to_console),
        ("accept_non_brokerage_account_warning", tws.accept_non_brokerage_account_warning),
        ("read_only_login", tws.read_only_login),
        ("minimize_main_window", tws.minimize_main_window),
        ("auto_closedown", tws.auto_closedown),
        ("allow_blind_trading", tws.allow_blind_trading),
        ("dismiss_password_expiry_warning", tws.dismiss_password_expiry_warning),
        ("dismiss_nse_compliance_notice", tws.dismiss_nse_compliance_notice),
        ("send_tws_logs_to_console", tws.send_tws_logs_to_console),
    ] {
        let _ = writeln!(out, "{name} = {value}");
    }

    let _ = writeln!(out, "\n[session]");
    let _ = writeln!(
        out,
        "save_tws_settings_at = {}",
        opt(settings.save_tws_settings_at.as_ref().map(|s| s.to_string()))
    );
    let _ = writeln!(out, "trading_mode = {}", as_tag(settings.trading_mode));
    render_credentials(&mut out, "api", &settings.api_credentials);
    render_credentials(&mut out, "fix", &settings.fix_credentials);
    out
}

fn render_credentials(out: &mut String, prefix: &str, creds: &Credentials) {
    let _ = writeln!(
        out,
        "{prefix}_login_id = {}",
        creds.login_id.as_deref().unwrap_or("-")
    );
    let _ = writeln!(
        out,
        "{prefix}_password = {}",
        creds
            .password
            .as_ref()
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
}
