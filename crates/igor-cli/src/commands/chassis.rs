use igor_api_models::StateRequest;

use crate::cli::{HostArgs, StateArgs};
use crate::client::{AppContext, CliResult};
use crate::commands::{hostname, non_blank, view_or_update};
use crate::endpoint::{Resource, resolve};
use crate::output::{ListStyle, print_value};

pub(crate) async fn handle_chassis_info(ctx: &AppContext, args: HostArgs) -> CliResult<()> {
    let hostname = hostname(ctx, args)?;
    let response = ctx.get(&resolve(&hostname, Resource::Chassis)).await?;
    print_value(&response, ListStyle::Inline)
}

pub(crate) async fn handle_chassis_power(ctx: &AppContext, args: StateArgs) -> CliResult<()> {
    show_or_set_state(ctx, args, Resource::ChassisPower).await
}

pub(crate) async fn handle_chassis_policy(ctx: &AppContext, args: StateArgs) -> CliResult<()> {
    show_or_set_state(ctx, args, Resource::ChassisPolicy).await
}

async fn show_or_set_state(
    ctx: &AppContext,
    args: StateArgs,
    resource: Resource<'static>,
) -> CliResult<()> {
    let hostname = hostname(ctx, args.host)?;
    let update = non_blank(args.state).map(|state| StateRequest { state });
    if let Some(request) = &update {
        tracing::info!(%hostname, state = %request.state, "requesting chassis state change");
    }
    let response = view_or_update(ctx, &resolve(&hostname, resource), update).await?;
    print_value(&response, ListStyle::Inline)
}
