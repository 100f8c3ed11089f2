use anyhow::Context;
use syl_core::entities::{StudyConfig, StudyPlan};

use crate::cli::root_commands::PlanArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// Partition the requested lessons into a plan.
pub fn build(args: &PlanArgs, ctx: &AppContext) -> anyhow::Result<StudyPlan> {
    let config = StudyConfig::new(&args.topic, &args.duration, &args.lessons);
    let plan = ctx
        .partitioner
        .partition(&config)
        .context("failed to generate study plan")?;

    tracing::debug!(
        days = plan.duration_days(),
        lessons = plan.lesson_count(),
        "generated study plan"
    );
    Ok(plan)
}

/// Handle `syl plan`.
pub fn handle(args: &PlanArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let plan = build(args, ctx)?;
    match flags.format {
        OutputFormat::Table => output(&plan.days, flags.format),
        OutputFormat::Json | OutputFormat::Raw => output(&plan, flags.format),
    }
}
