use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Split lessons into a day-by-day study plan.
    Plan(PlanArgs),
    /// Find learning resources for each lesson.
    Resources(ResourcesArgs),
    /// Build a plan and fetch its resources in one step.
    Prepare(PlanArgs),
}

/// Arguments for `syl plan` and `syl prepare`.
#[derive(Clone, Debug, Args)]
pub struct PlanArgs {
    /// Study topic (e.g. "Algebra").
    #[arg(long)]
    pub topic: String,
    /// Number of days to spread the lessons over.
    #[arg(long)]
    pub duration: String,
    /// Comma-separated lessons.
    #[arg(long)]
    pub lessons: String,
}

/// Arguments for `syl resources`.
#[derive(Clone, Debug, Args)]
pub struct ResourcesArgs {
    /// Study topic (e.g. "Algebra").
    #[arg(long)]
    pub topic: String,
    /// Comma-separated lessons.
    #[arg(long)]
    pub lessons: String,
}
