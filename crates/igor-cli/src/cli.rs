//! Argument parsing, command dispatch, and process outcome for the `igor` CLI.

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use igor_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig};
use tracing::Instrument;
use url::Url;
use uuid::Uuid;

use crate::client::{AppContext, CliResult, Credentials, parse_url};
use crate::commands::chassis::{handle_chassis_info, handle_chassis_policy, handle_chassis_power};
use crate::commands::lan::{
    handle_lan_alert_info, handle_lan_alert_set, handle_lan_info, handle_lan_set,
};
use crate::commands::sel::{
    handle_sel_clear, handle_sel_delete, handle_sel_get, handle_sel_info, handle_sel_list,
    handle_sel_time,
};
use crate::commands::sensor::{handle_sensor_get, handle_sensor_list, handle_sensor_thresh};
use crate::prompt::{Prompter, TerminalPrompter};

const DEFAULT_TIMEOUT_SECS: u64 = 120;
const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Parses CLI arguments, executes the requested command, and reports the
/// outcome on stderr. Returns the process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();

    let logging = LoggingConfig {
        level: &cli.log_level,
        format: cli.log_format,
    };
    if let Err(err) = igor_telemetry::init_logging(&logging) {
        eprintln!("warning: {err}");
    }

    let command_name = command_label(&cli.command);
    let trace_id = Uuid::new_v4().to_string();
    let span = tracing::info_span!("command", command = command_name, trace_id = %trace_id);

    match execute(cli, &trace_id).instrument(span).await {
        Ok(()) => 0,
        Err(err) => {
            let exit_code = err.exit_code();
            tracing::debug!(command = command_name, exit_code, "command failed");
            eprintln!("error: {}", err.display_message());
            exit_code
        }
    }
}

async fn execute(cli: Cli, trace_id: &str) -> CliResult<()> {
    let prompter: Arc<dyn Prompter + Send + Sync> = Arc::new(TerminalPrompter);
    let credentials = Credentials::resolve(cli.username, cli.password, prompter.as_ref())?;
    let ctx = AppContext {
        client: AppContext::build_client(cli.timeout, trace_id)?,
        base_url: cli.url,
        credentials,
        prompter,
    };
    dispatch(&ctx, cli.command).await
}

async fn dispatch(ctx: &AppContext, command: Command) -> CliResult<()> {
    let Command::Ipmi(ipmi) = command;
    match ipmi {
        IpmiCommand::Chassis(chassis) => match chassis {
            ChassisCommand::Info(args) => handle_chassis_info(ctx, args).await,
            ChassisCommand::Power(args) => handle_chassis_power(ctx, args).await,
            ChassisCommand::Policy(args) => handle_chassis_policy(ctx, args).await,
        },
        IpmiCommand::Sensor(sensor) => match sensor {
            SensorCommand::List(args) => handle_sensor_list(ctx, args).await,
            SensorCommand::Get(args) => handle_sensor_get(ctx, args).await,
            SensorCommand::Thresh(args) => handle_sensor_thresh(ctx, args).await,
        },
        IpmiCommand::Lan(lan) => match lan {
            LanCommand::Info(args) => handle_lan_info(ctx, args).await,
            LanCommand::Set(args) => handle_lan_set(ctx, args).await,
            LanCommand::Alert(LanAlertCommand::Info(args)) => handle_lan_alert_info(ctx, args).await,
            LanCommand::Alert(LanAlertCommand::Set(args)) => handle_lan_alert_set(ctx, args).await,
        },
        IpmiCommand::Sel(sel) => match sel {
            SelCommand::Info(args) => handle_sel_info(ctx, args).await,
            SelCommand::Time(args) => handle_sel_time(ctx, args).await,
            SelCommand::List(args) => handle_sel_list(ctx, args).await,
            SelCommand::Clear(args) => handle_sel_clear(ctx, args).await,
            SelCommand::Get(args) => handle_sel_get(ctx, args).await,
            SelCommand::Delete(args) => handle_sel_delete(ctx, args).await,
        },
    }
}

#[derive(Parser)]
#[command(name = "igor", version, about = "Command-line client for igor machine management")]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "IGOR_URL",
        value_parser = parse_url,
        default_value = DEFAULT_API_URL,
        help = "Base URL of the igor server"
    )]
    url: Url,
    #[arg(long, global = true, env = "IGOR_USERNAME")]
    username: Option<String>,
    #[arg(
        long,
        global = true,
        env = "IGOR_PASSWORD",
        hide_env_values = true,
        help = "Password for --username (prompted when omitted)"
    )]
    password: Option<String>,
    #[arg(
        long,
        global = true,
        env = "IGOR_HTTP_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    timeout: u64,
    #[arg(
        long,
        global = true,
        env = "IGOR_LOG",
        default_value = DEFAULT_LOG_LEVEL,
        help = "Log filter directive (RUST_LOG takes precedence)"
    )]
    log_level: String,
    #[arg(
        long,
        global = true,
        env = "IGOR_LOG_FORMAT",
        value_parser = parse_log_format,
        default_value = "pretty",
        help = "Log output format: pretty or json"
    )]
    log_format: LogFormat,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// IPMI operations
    #[command(subcommand)]
    Ipmi(IpmiCommand),
}

#[derive(Subcommand)]
pub(crate) enum IpmiCommand {
    /// Chassis commands
    #[command(subcommand)]
    Chassis(ChassisCommand),
    /// Sensors commands
    #[command(subcommand)]
    Sensor(SensorCommand),
    /// LAN channel commands
    #[command(subcommand)]
    Lan(LanCommand),
    /// System event log commands
    #[command(subcommand)]
    Sel(SelCommand),
}

#[derive(Subcommand)]
pub(crate) enum ChassisCommand {
    /// View chassis information
    Info(HostArgs),
    /// View or set the chassis power
    Power(StateArgs),
    /// View or set the power policy applied after a power failure
    Policy(StateArgs),
}

#[derive(Subcommand)]
pub(crate) enum SensorCommand {
    /// Display sensor readings
    List(HostArgs),
    /// Display details for the specified sensors
    Get(SensorGetArgs),
    /// Set thresholds for the specified sensor
    Thresh(SensorThreshArgs),
}

#[derive(Subcommand)]
pub(crate) enum LanCommand {
    /// Display LAN channel information
    Info(ChannelArgs),
    /// Set LAN channel information
    Set(LanSetArgs),
    /// LAN alert commands
    #[command(subcommand)]
    Alert(LanAlertCommand),
}

#[derive(Subcommand)]
pub(crate) enum LanAlertCommand {
    /// Display LAN alert information
    Info(ChannelArgs),
    /// Set LAN alert destination information
    Set(LanAlertSetArgs),
}

#[derive(Subcommand)]
pub(crate) enum SelCommand {
    /// Display system event log information
    Info(HostArgs),
    /// Display or set the SEL clock time
    Time(SelTimeArgs),
    /// Display the SEL record list
    List(SelListArgs),
    /// Clear the SEL record list
    Clear(HostArgs),
    /// View the SEL entries for the provided record IDs
    Get(SelGetArgs),
    /// Delete the SEL entry for the provided record ID
    Delete(SelDeleteArgs),
}

#[derive(Args, Default)]
pub(crate) struct HostArgs {
    #[arg(long, help = "The short hostname for this machine")]
    pub(crate) hostname: Option<String>,
}

#[derive(Args, Default)]
pub(crate) struct StateArgs {
    #[command(flatten)]
    pub(crate) host: HostArgs,
    #[arg(long, help = "Desired state; omit to view the current one")]
    pub(crate) state: Option<String>,
}

#[derive(Args, Default)]
pub(crate) struct SensorGetArgs {
    #[command(flatten)]
    pub(crate) host: HostArgs,
    #[arg(long = "sensor", help = "Sensors to retrieve (repeatable)")]
    pub(crate) sensors: Vec<String>,
}

#[derive(Args, Default)]
pub(crate) struct SensorThreshArgs {
    #[command(flatten)]
    pub(crate) host: HostArgs,
    #[arg(long, help = "Sensor to set the threshold of")]
    pub(crate) sensor: Option<String>,
    #[arg(long, help = "Threshold setting (e.g. ucr, lower, upper)")]
    pub(crate) threshold: Option<String>,
    #[arg(
        long = "value",
        allow_negative_numbers = true,
        help = "Threshold value(s) (repeatable)"
    )]
    pub(crate) values: Vec<f64>,
}

#[derive(Args, Default)]
pub(crate) struct ChannelArgs {
    #[command(flatten)]
    pub(crate) host: HostArgs,
    #[arg(long, help = "The LAN channel number")]
    pub(crate) channel: Option<u8>,
}

#[derive(Args, Default)]
pub(crate) struct LanSetArgs {
    #[command(flatten)]
    pub(crate) host: HostArgs,
    #[arg(long, help = "The LAN channel number")]
    pub(crate) channel: Option<u8>,
    #[arg(long, help = "The LAN command to set (see the ipmitool manpage)")]
    pub(crate) command: Option<String>,
    #[arg(long, help = "The LAN command parameter")]
    pub(crate) param: Option<String>,
}

#[derive(Args, Default)]
pub(crate) struct LanAlertSetArgs {
    #[command(flatten)]
    pub(crate) host: HostArgs,
    #[arg(long, help = "The LAN channel number")]
    pub(crate) channel: Option<u8>,
    #[arg(long, help = "The alert destination")]
    pub(crate) dest: Option<u8>,
    #[arg(long, help = "The LAN alert command to set (see the ipmitool manpage)")]
    pub(crate) command: Option<String>,
    #[arg(long, help = "The LAN alert command parameter")]
    pub(crate) param: Option<String>,
}

#[derive(Args, Default)]
pub(crate) struct SelTimeArgs {
    #[command(flatten)]
    pub(crate) host: HostArgs,
    #[arg(long, help = "Desired SEL clock time (YYYY-MM-DD hh:mm:ss)")]
    pub(crate) time: Option<String>,
}

#[derive(Args, Default)]
pub(crate) struct SelListArgs {
    #[command(flatten)]
    pub(crate) host: HostArgs,
    #[arg(long, help = "Display the extended SEL record list")]
    pub(crate) extended: bool,
}

#[derive(Args, Default)]
pub(crate) struct SelGetArgs {
    #[command(flatten)]
    pub(crate) host: HostArgs,
    #[arg(long = "id", help = "The SEL record IDs to get (repeatable)")]
    pub(crate) ids: Vec<u32>,
}

#[derive(Args, Default)]
pub(crate) struct SelDeleteArgs {
    #[command(flatten)]
    pub(crate) host: HostArgs,
    #[arg(long, help = "The SEL record ID to delete")]
    pub(crate) id: Option<u32>,
}

const fn command_label(command: &Command) -> &'static str {
    let Command::Ipmi(ipmi) = command;
    match ipmi {
        IpmiCommand::Chassis(ChassisCommand::Info(_)) => "chassis_info",
        IpmiCommand::Chassis(ChassisCommand::Power(_)) => "chassis_power",
        IpmiCommand::Chassis(ChassisCommand::Policy(_)) => "chassis_policy",
        IpmiCommand::Sensor(SensorCommand::List(_)) => "sensor_list",
        IpmiCommand::Sensor(SensorCommand::Get(_)) => "sensor_get",
        IpmiCommand::Sensor(SensorCommand::Thresh(_)) => "sensor_thresh",
        IpmiCommand::Lan(LanCommand::Info(_)) => "lan_info",
        IpmiCommand::Lan(LanCommand::Set(_)) => "lan_set",
        IpmiCommand::Lan(LanCommand::Alert(LanAlertCommand::Info(_))) => "lan_alert_info",
        IpmiCommand::Lan(LanCommand::Alert(LanAlertCommand::Set(_))) => "lan_alert_set",
        IpmiCommand::Sel(SelCommand::Info(_)) => "sel_info",
        IpmiCommand::Sel(SelCommand::Time(_)) => "sel_time",
        IpmiCommand::Sel(SelCommand::List(_)) => "sel_list",
        IpmiCommand::Sel(SelCommand::Clear(_)) => "sel_clear",
        IpmiCommand::Sel(SelCommand::Get(_)) => "sel_get",
        IpmiCommand::Sel(SelCommand::Delete(_)) => "sel_delete",
    }
}

fn parse_log_format(input: &str) -> Result<LogFormat, String> {
    input.parse::<LogFormat>().map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_tree_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_options_follow_subcommands() -> Result<(), clap::Error> {
        let cli = Cli::try_parse_from([
            "igor",
            "ipmi",
            "lan",
            "info",
            "--hostname",
            "osl01",
            "--channel",
            "1",
            "--url",
            "https://igor.example.org",
            "--log-format",
            "json",
        ])?;
        assert_eq!(cli.url.as_str(), "https://igor.example.org/");
        assert_eq!(cli.log_format, LogFormat::Json);
        assert_eq!(command_label(&cli.command), "lan_info");
        let Command::Ipmi(IpmiCommand::Lan(LanCommand::Info(args))) = cli.command else {
            panic!("expected lan info");
        };
        assert_eq!(args.host.hostname.as_deref(), Some("osl01"));
        assert_eq!(args.channel, Some(1));
        Ok(())
    }

    #[test]
    fn repeatable_options_collect_values() -> Result<(), clap::Error> {
        let cli = Cli::try_parse_from([
            "igor",
            "ipmi",
            "sensor",
            "thresh",
            "--hostname",
            "osl01",
            "--sensor",
            "Ambient Temp",
            "--threshold",
            "lower",
            "--value",
            "-3.0",
            "--value",
            "3.0",
            "--value",
            "8.0",
        ])?;
        let Command::Ipmi(IpmiCommand::Sensor(SensorCommand::Thresh(args))) = cli.command else {
            panic!("expected sensor thresh");
        };
        assert_eq!(args.values, vec![-3.0, 3.0, 8.0]);
        assert_eq!(args.sensor.as_deref(), Some("Ambient Temp"));
        Ok(())
    }

    #[test]
    fn sel_get_and_delete_are_distinct_commands() -> Result<(), clap::Error> {
        let get = Cli::try_parse_from(["igor", "ipmi", "sel", "get", "--id", "1", "--id", "2"])?;
        assert_eq!(command_label(&get.command), "sel_get");
        let delete = Cli::try_parse_from(["igor", "ipmi", "sel", "delete", "--id", "1"])?;
        assert_eq!(command_label(&delete.command), "sel_delete");
        Ok(())
    }

    #[test]
    fn channel_must_be_numeric() {
        let result = Cli::try_parse_from(["igor", "ipmi", "lan", "info", "--channel", "eth0"]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let result = Cli::try_parse_from([
            "igor",
            "ipmi",
            "sel",
            "info",
            "--log-format",
            "xml",
        ]);
        assert!(result.is_err());
    }
}
