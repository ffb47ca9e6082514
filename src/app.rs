use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::logging;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        root,
        json,
        verbose,
        command,
    } = cli;

    logging::init(verbose);
    let ctx = AppContext::bootstrap(root, json)?;

    match command {
        Command::List => commands::list::run(&ctx),
        Command::Create(args) => commands::create::run(&ctx, args),
        Command::Rename(args) => commands::rename::run(&ctx, args),
        Command::Delete(args) => commands::delete::run(&ctx, args),
        Command::Launch(args) => commands::launch::run(&ctx, args),
    }
}
