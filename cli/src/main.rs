//! wp-readme CLI - generate WordPress readme.txt from README.md

use std::path::PathBuf;
use std::process;

use clap::Parser;
use colored::Colorize;

use wp_readme::{find_readme, generate, ConvertOptions};

#[derive(Parser)]
#[command(name = "wp-readme")]
#[command(version)]
#[command(about = "Generate a WordPress plugin readme.txt from a GitHub README.md", long_about = None)]
struct Cli {
    /// Directory to search for README.md
    #[arg(value_name = "DIR", env = "WP_README_DIR", default_value = ".")]
    dir: PathBuf,

    /// Environment name for conditional visibility sections
    #[arg(long, value_name = "NAME", env = "WP_README_ENV")]
    env: Option<String>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let Some(file) = find_readme(&cli.dir) else {
        eprintln!(
            "{}: No README.md in current directory.",
            "Error".red().bold()
        );
        process::exit(1);
    };
    println!("readme.md found...");

    let options = ConvertOptions { env: cli.env };

    match generate(&file, &options) {
        Ok(output) => {
            log::debug!("converted {} -> {}", file.display(), output.display());
            println!("{}", "readme.txt generated successfully!".green());
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            process::exit(1);
        }
    }
}
