use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "ffprofile", version, about = "Firefox profile manager")]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Firefox root directory holding profiles.ini"
    )]
    pub root: Option<PathBuf>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every profile in the registry
    #[command(visible_alias = "ls")]
    List,
    /// Create a profile directory and register it
    Create(CreateArgs),
    /// Change a profile's display name
    Rename(RenameArgs),
    /// Remove a profile and delete its directory
    #[command(visible_alias = "rm")]
    Delete(DeleteArgs),
    /// Start Firefox with a profile
    Launch(LaunchArgs),
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(help = "Profile name")]
    pub name: String,
}

#[derive(Debug, Args)]
pub struct RenameArgs {
    #[arg(help = "Current profile name")]
    pub old_name: String,
    #[arg(help = "New profile name")]
    pub new_name: String,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[arg(help = "Profile name")]
    pub name: String,
    #[arg(short = 'y', long, help = "Skip the confirmation prompt")]
    pub yes: bool,
}

#[derive(Debug, Args)]
pub struct LaunchArgs {
    #[arg(help = "Profile name")]
    pub name: String,
    #[arg(long, help = "Print the command instead of running it")]
    pub dry_run: bool,
}
