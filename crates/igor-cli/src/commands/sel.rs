use chrono::NaiveDateTime;
use igor_api_models::{SelRecordsRequest, SelTimeRequest};

use crate::cli::{HostArgs, SelDeleteArgs, SelGetArgs, SelListArgs, SelTimeArgs};
use crate::client::{AppContext, CliError, CliResult};
use crate::commands::{hostname, non_blank, view_or_update};
use crate::endpoint::{Resource, resolve};
use crate::output::{ListStyle, print_records, print_value};
use crate::prompt::{value_or_prompt, values_or_prompt};

/// Layout the SEL clock expects on updates.
const SEL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) async fn handle_sel_info(ctx: &AppContext, args: HostArgs) -> CliResult<()> {
    let hostname = hostname(ctx, args)?;
    let response = ctx.get(&resolve(&hostname, Resource::Sel)).await?;
    print_value(&response, ListStyle::Inline)
}

pub(crate) async fn handle_sel_time(ctx: &AppContext, args: SelTimeArgs) -> CliResult<()> {
    let hostname = hostname(ctx, args.host)?;
    let update = non_blank(args.time)
        .map(|time| validate_sel_time(&time).map(|()| SelTimeRequest { time }))
        .transpose()?;
    let response = view_or_update(ctx, &resolve(&hostname, Resource::SelTime), update).await?;
    print_value(&response, ListStyle::Inline)
}

pub(crate) async fn handle_sel_list(ctx: &AppContext, args: SelListArgs) -> CliResult<()> {
    let hostname = hostname(ctx, args.host)?;
    let resource = Resource::SelRecords {
        extended: Some(args.extended),
    };
    let response = ctx.get(&resolve(&hostname, resource)).await?;
    print_records(&response)
}

pub(crate) async fn handle_sel_clear(ctx: &AppContext, args: HostArgs) -> CliResult<()> {
    let hostname = hostname(ctx, args)?;
    if !ctx
        .prompter()
        .confirm(&format!("Clear all SEL records for {hostname}?"))?
    {
        return Err(CliError::Aborted);
    }
    tracing::info!(%hostname, "clearing system event log");
    let resource = Resource::SelRecords { extended: None };
    let response = ctx.delete(&resolve(&hostname, resource)).await?;
    print_value(&response, ListStyle::Inline)
}

pub(crate) async fn handle_sel_get(ctx: &AppContext, args: SelGetArgs) -> CliResult<()> {
    let hostname = hostname(ctx, args.host)?;
    let ids: Vec<u32> = values_or_prompt(ctx.prompter(), args.ids, "Id")?;
    let request = SelRecordsRequest::from_ids(&ids);
    let resource = Resource::SelRecords { extended: None };
    let response = ctx.post(&resolve(&hostname, resource), &request).await?;
    print_records(&response)
}

pub(crate) async fn handle_sel_delete(ctx: &AppContext, args: SelDeleteArgs) -> CliResult<()> {
    let hostname = hostname(ctx, args.host)?;
    let id: u32 = value_or_prompt(ctx.prompter(), args.id, "Id")?;
    tracing::info!(%hostname, id, "deleting sel record");
    let response = ctx
        .delete(&resolve(&hostname, Resource::SelRecord(id)))
        .await?;
    print_value(&response, ListStyle::Inline)
}

fn validate_sel_time(time: &str) -> CliResult<()> {
    NaiveDateTime::parse_from_str(time, SEL_TIME_FORMAT)
        .map(|_| ())
        .map_err(|err| {
            CliError::validation(format!(
                "invalid SEL time '{time}' (expected YYYY-MM-DD hh:mm:ss): {err}"
            ))
        })
}
