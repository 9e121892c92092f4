use igor_api_models::{LanAlertSetRequest, LanSetRequest};

use crate::cli::{ChannelArgs, LanAlertSetArgs, LanSetArgs};
use crate::client::{AppContext, CliResult};
use crate::commands::hostname;
use crate::endpoint::{Resource, resolve};
use crate::output::{ListStyle, print_value};
use crate::prompt::value_or_prompt;

pub(crate) async fn handle_lan_info(ctx: &AppContext, args: ChannelArgs) -> CliResult<()> {
    let hostname = hostname(ctx, args.host)?;
    let resource = Resource::Lan {
        channel: args.channel,
    };
    let response = ctx.get(&resolve(&hostname, resource)).await?;
    print_value(&response, ListStyle::Inline)
}

pub(crate) async fn handle_lan_set(ctx: &AppContext, args: LanSetArgs) -> CliResult<()> {
    let hostname = hostname(ctx, args.host)?;
    let channel: u8 = value_or_prompt(ctx.prompter(), args.channel, "Channel")?;
    let command: String = value_or_prompt(ctx.prompter(), args.command, "Command")?;
    let param: String = value_or_prompt(ctx.prompter(), args.param, "Param")?;
    tracing::info!(%hostname, channel, %command, "updating lan configuration");

    let request = LanSetRequest { command, param };
    let resource = Resource::Lan {
        channel: Some(channel),
    };
    let response = ctx.post(&resolve(&hostname, resource), &request).await?;
    print_value(&response, ListStyle::Inline)
}

pub(crate) async fn handle_lan_alert_info(ctx: &AppContext, args: ChannelArgs) -> CliResult<()> {
    let hostname = hostname(ctx, args.host)?;
    let resource = Resource::LanAlert {
        channel: args.channel,
    };
    let response = ctx.get(&resolve(&hostname, resource)).await?;
    print_value(&response, ListStyle::Composite)
}

pub(crate) async fn handle_lan_alert_set(
    ctx: &AppContext,
    args: LanAlertSetArgs,
) -> CliResult<()> {
    let hostname = hostname(ctx, args.host)?;
    let channel: u8 = value_or_prompt(ctx.prompter(), args.channel, "Channel")?;
    let dest: u8 = value_or_prompt(ctx.prompter(), args.dest, "Alert destination")?;
    let command: String = value_or_prompt(ctx.prompter(), args.command, "Command")?;
    let param: String = value_or_prompt(ctx.prompter(), args.param, "Param")?;
    tracing::info!(%hostname, channel, dest, %command, "updating lan alert destination");

    let request = LanAlertSetRequest {
        dest,
        command,
        param,
    };
    let resource = Resource::LanAlert {
        channel: Some(channel),
    };
    let response = ctx.post(&resolve(&hostname, resource), &request).await?;
    print_value(&response, ListStyle::Composite)
}
