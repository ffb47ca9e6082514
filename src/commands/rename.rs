use crate::cli::RenameArgs;
use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(ctx: &AppContext, args: RenameArgs) -> AppResult<()> {
    let record = ctx.registry.rename(&args.old_name, &args.new_name)?;

    let text = format!("renamed profile `{}` to `{}`", args.old_name, record.name);
    ctx.output.emit(&text, &record)
}
