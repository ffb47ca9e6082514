use crate::cli::LaunchArgs;
use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(ctx: &AppContext, args: LaunchArgs) -> AppResult<()> {
    let record = ctx.registry.find_launchable(&args.name)?;
    let target = ctx.launcher.resolve_launch_target(&record.name)?;

    if args.dry_run {
        return ctx.output.emit(&target.command_line(), &target);
    }

    ctx.launcher.spawn(&target)?;
    let text = format!("launching {} with profile `{}`", ctx.launcher.program(), record.name);
    ctx.output.emit(&text, &target)
}
