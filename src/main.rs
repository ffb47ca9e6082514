use clap::Parser;

fn main() {
    let cli = ffprofile::cli::Cli::parse();

    if let Err(err) = ffprofile::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
