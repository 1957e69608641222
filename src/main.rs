use std::path::PathBuf;

use clap::Parser;
use contactbook::{cli, Storage};

#[derive(Parser)]
#[command(name = "contactbook")]
#[command(about = "Contact book with notes and tags for the command line")]
#[command(version)]
struct Cli {
    /// Data file to load and save (defaults to the user config directory)
    #[arg(short, long)]
    file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let storage = match args.file {
        Some(path) => Storage::at(path),
        None => Storage::open()?,
    };

    let mut assistant = storage.load()?;
    cli::run(&mut assistant)?;
    storage.save(&assistant)?;
    println!("Saved. Bye!");

    Ok(())
}
