use crate::OutputFormat;
use als_summary::Project;
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::process::ExitCode;

pub fn run(path: &str, format: OutputFormat) -> Result<ExitCode> {
    let project =
        Project::open_path(path).with_context(|| format!("Failed to read Live Set: {}", path))?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Text => {
            writeln!(handle, "{}", project.summary())?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut handle, &project)
                .with_context(|| format!("Failed to serialize project: {}", path))?;
            writeln!(handle)?;
        }
    }

    Ok(ExitCode::from(0))
}
