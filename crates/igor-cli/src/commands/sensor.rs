use igor_api_models::{SensorLookupRequest, ThresholdRequest};

use crate::cli::{HostArgs, SensorGetArgs, SensorThreshArgs};
use crate::client::{AppContext, CliResult};
use crate::commands::hostname;
use crate::endpoint::{Resource, resolve};
use crate::output::{ListStyle, print_records, print_value};
use crate::prompt::{value_or_prompt, values_or_prompt};

pub(crate) async fn handle_sensor_list(ctx: &AppContext, args: HostArgs) -> CliResult<()> {
    let hostname = hostname(ctx, args)?;
    eprintln!("Fetching all sensor readings, may take a while...");
    let response = ctx.get(&resolve(&hostname, Resource::Sensors)).await?;
    print_records(&response)
}

pub(crate) async fn handle_sensor_get(ctx: &AppContext, args: SensorGetArgs) -> CliResult<()> {
    let hostname = hostname(ctx, args.host)?;
    let sensors: Vec<String> = values_or_prompt(ctx.prompter(), args.sensors, "Sensor")?;
    tracing::info!(%hostname, count = sensors.len(), "looking up sensor records");
    eprintln!("Locating sensor records, may take a while...");

    let request = SensorLookupRequest::from_names(sensors);
    let response = ctx
        .post(&resolve(&hostname, Resource::Sensors), &request)
        .await?;
    print_value(&response, ListStyle::Composite)
}

pub(crate) async fn handle_sensor_thresh(
    ctx: &AppContext,
    args: SensorThreshArgs,
) -> CliResult<()> {
    let hostname = hostname(ctx, args.host)?;
    let sensor: String = value_or_prompt(ctx.prompter(), args.sensor, "Sensor")?;
    let threshold: String = value_or_prompt(ctx.prompter(), args.threshold, "Threshold")?;
    let values: Vec<f64> = values_or_prompt(ctx.prompter(), args.values, "Value")?;

    let request = ThresholdRequest { threshold, values };
    let response = ctx
        .post(&resolve(&hostname, Resource::Sensor(&sensor)), &request)
        .await?;
    print_value(&response, ListStyle::Inline)
}
