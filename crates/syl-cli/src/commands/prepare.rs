use syl_core::responses::PrepareResponse;

use crate::cli::root_commands::PlanArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::plan;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Build the plan, then fetch resources for the same normalized lessons.
///
/// Validation happens once, in the plan step: an invalid request fails
/// before any search is dispatched.
pub async fn build(
    args: &PlanArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<PrepareResponse> {
    let plan = plan::build(args, ctx)?;
    let limit = effective_limit(flags.limit, ctx.config.search.max_resources);
    let resources = ctx.aggregator(limit).aggregate(&plan.topic, &plan.lessons).await;
    Ok(PrepareResponse { plan, resources })
}

/// Handle `syl prepare`.
pub async fn handle(args: &PlanArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = build(args, ctx, flags).await?;
    match flags.format {
        OutputFormat::Table => {
            output(&response.plan.days, flags.format)?;
            println!();
            output(&response.resources, flags.format)
        }
        OutputFormat::Json | OutputFormat::Raw => output(&response, flags.format),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::shared::test_support::{EchoProvider, OfflineProvider, context, flags};

    fn args(duration: &str) -> PlanArgs {
        PlanArgs {
            topic: "Algebra".into(),
            duration: duration.into(),
            lessons: "Linear Equations, Quadratics, Polynomials, Factoring".into(),
        }
    }

    #[tokio::test]
    async fn plan_and_resources_share_lessons() {
        let ctx = context(EchoProvider { per_query: 1 });
        let response = build(&args("3"), &ctx, &flags(None)).await.unwrap();

        assert_eq!(response.plan.days.len(), 3);
        let lessons: Vec<&str> = response.resources.iter().map(|r| r.lesson.as_str()).collect();
        assert_eq!(
            lessons,
            vec!["Linear Equations", "Quadratics", "Polynomials", "Factoring"]
        );
    }

    #[tokio::test]
    async fn invalid_plan_skips_search() {
        let ctx = context(EchoProvider { per_query: 1 });
        assert!(build(&args("0"), &ctx, &flags(None)).await.is_err());
    }

    #[tokio::test]
    async fn offline_search_still_returns_plan() {
        let ctx = context(OfflineProvider);
        let response = build(&args("2"), &ctx, &flags(None)).await.unwrap();
        assert_eq!(response.plan.days.len(), 2);
        assert!(response.resources.is_empty());
    }
}
