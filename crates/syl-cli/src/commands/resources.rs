use anyhow::Context;
use syl_core::entities::ResourceRequest;
use syl_core::responses::ResourcesResponse;

use crate::cli::root_commands::ResourcesArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Search every lesson and collect the capped resource list.
pub async fn fetch(
    args: &ResourcesArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<ResourcesResponse> {
    let limit = effective_limit(flags.limit, ctx.config.search.max_resources);
    let request = ResourceRequest::new(&args.topic, &args.lessons);

    let resources = ctx
        .aggregator(limit)
        .fetch_resources(&request)
        .await
        .context("failed to fetch resources")?;

    Ok(ResourcesResponse::new(request.topic.trim(), resources))
}

/// Handle `syl resources`.
pub async fn handle(
    args: &ResourcesArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let response = fetch(args, ctx, flags).await?;
    match flags.format {
        OutputFormat::Table => output(&response.resources, flags.format),
        OutputFormat::Json | OutputFormat::Raw => output(&response, flags.format),
    }
}
