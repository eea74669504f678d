mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "als-summary")]
#[command(about = "Render Ableton Live Set files as diff-friendly text summaries")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Print the summary of one .als file to stdout (git textconv entry point)")]
    Textconv {
        #[arg(help = "Path to the .als file")]
        path: String,
        #[arg(long, short, value_enum, default_value = "text", help = "Output format")]
        format: OutputFormat,
    },
    #[command(about = "Write summary sidecar files next to .als files")]
    Generate {
        #[arg(help = "Path to a single .als file")]
        file: Option<String>,
        #[arg(long, short, help = "Process every .als file in the directory")]
        all: bool,
        #[arg(long, default_value = ".", help = "Directory scanned with --all")]
        dir: String,
        #[arg(long, short, value_name = "PATH", help = "Summary output path (single-file mode)")]
        out: Option<String>,
    },
    #[command(about = "Watch a directory and regenerate summaries when .als files change")]
    Watch {
        #[arg(long, default_value = ".", help = "Directory to watch")]
        dir: String,
        #[arg(long, default_value_t = 5, value_name = "SECONDS", help = "Poll interval")]
        interval: u64,
    },
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Textconv { path, format } => commands::textconv::run(&path, format),
        Commands::Generate {
            file,
            all,
            dir,
            out,
        } => commands::generate::run(file.as_deref(), all, &dir, out.as_deref()),
        Commands::Watch { dir, interval } => commands::watch::run(&dir, interval),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
