use crate::cli::CreateArgs;
use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(ctx: &AppContext, args: CreateArgs) -> AppResult<()> {
    let record = ctx.registry.create(&args.name)?;

    let text = format!(
        "created profile `{}` ({}) in {}",
        record.name,
        record.section,
        record.location.display()
    );
    ctx.output.emit(&text, &record)
}
