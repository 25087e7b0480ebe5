use clap::Parser;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Scaffold a new skill with a standard layout", long_about = None)]
struct Cli {
    /// Name of the skill to create
    name: String,

    /// Path where the skill should be created (default: <cwd>/<name>)
    #[arg(long)]
    path: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = commands::init::execute(&cli.name, cli.path.as_deref()) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
