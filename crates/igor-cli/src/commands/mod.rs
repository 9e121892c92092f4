//! Command handlers grouped by resource family.
//!
//! Each handler resolves its endpoint, performs one request, and prints the
//! response either through the structured renderer or as a record list.

pub(crate) mod chassis;
pub(crate) mod lan;
pub(crate) mod sel;
pub(crate) mod sensor;

use serde::Serialize;

use crate::cli::HostArgs;
use crate::client::{AppContext, CliError, CliResult};
use crate::prompt::value_or_prompt;
use crate::value::RenderValue;

/// Resolve `--hostname`, prompting when it was omitted.
pub(crate) fn hostname(ctx: &AppContext, args: HostArgs) -> CliResult<String> {
    let hostname: String = value_or_prompt(ctx.prompter(), args.hostname, "Hostname")?;
    let trimmed = hostname.trim();
    if trimmed.is_empty() {
        return Err(CliError::validation("hostname cannot be empty"));
    }
    Ok(trimmed.to_string())
}

/// GET `path` when there is nothing to change, otherwise POST `update` to it.
pub(crate) async fn view_or_update<B>(
    ctx: &AppContext,
    path: &str,
    update: Option<B>,
) -> CliResult<RenderValue>
where
    B: Serialize,
{
    match update {
        Some(body) => ctx.post(path, &body).await,
        None => ctx.get(path).await,
    }
}

/// Treat a blank option value the same as an omitted one.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
