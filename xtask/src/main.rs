//! xtask - Development tasks for errand

use clap::{Parser, Subcommand};
use std::fs;
use std::path::Path;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for errand")]
struct Xtask {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate CLI documentation from clap definitions
    GenDocs {
        /// Output directory
        #[arg(long, default_value = "docs/cli")]
        out: String,
    },
}

fn main() {
    let args = Xtask::parse();
    match args.command {
        Commands::GenDocs { out } => generate_cli_docs(Path::new(&out)),
    }
}

fn generate_cli_docs(docs_dir: &Path) {
    let markdown = clap_markdown::help_markdown::<errand::cli::Cli>();

    fs::create_dir_all(docs_dir).expect("Failed to create docs directory");

    let output_path = docs_dir.join("reference.md");
    fs::write(&output_path, markdown).expect("Failed to write CLI reference");

    println!("Generated CLI documentation at {}", output_path.display());
}
