use std::io::{self, IsTerminal, Write};

use crate::cli::DeleteArgs;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};

pub fn run(ctx: &AppContext, args: DeleteArgs) -> AppResult<()> {
    let target = ctx.registry.find(&args.name)?;
    if target.is_default {
        return Err(AppError::Guarded(format!(
            "cannot delete the default profile `{}`",
            target.name
        )));
    }

    let confirmed = args.yes || confirm(&args.name)?;
    if !confirmed {
        return ctx.output.emit("aborted", &target);
    }

    let record = ctx.registry.delete(&args.name, true)?;
    let text = format!(
        "deleted profile `{}` and {}",
        record.name,
        record.location.display()
    );
    ctx.output.emit(&text, &record)
}

fn confirm(name: &str) -> AppResult<bool> {
    if !io::stdin().is_terminal() {
        return Err(AppError::Guarded(format!(
            "refusing to delete `{name}` without confirmation. pass --yes to skip the prompt"
        )));
    }

    let mut stdout = io::stdout();
    write!(
        stdout,
        "Delete profile '{name}'? This permanently removes the profile and all its data. [y/N] "
    )?;
    stdout.flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
