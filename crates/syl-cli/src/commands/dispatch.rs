use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Plan(args) => commands::plan::handle(&args, ctx, flags),
        Commands::Resources(args) => commands::resources::handle(&args, ctx, flags).await,
        Commands::Prepare(args) => commands::prepare::handle(&args, ctx, flags).await,
    }
}
