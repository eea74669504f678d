use als_summary::summarize_path;
use anyhow::{Context, Result, bail};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

pub fn run(file: Option<&str>, all: bool, dir: &str, out: Option<&str>) -> Result<ExitCode> {
    if all {
        return run_all(dir);
    }
    let Some(file) = file else {
        bail!("provide a .als file or use --all");
    };
    generate_one(Path::new(file), out.map(Path::new))?;
    Ok(ExitCode::from(0))
}

/// Summarize one file and write the sidecar. The default output path appends
/// `.txt` to the full input name (`Song.als` -> `Song.als.txt`), so the
/// sidecar sorts next to its source.
pub fn generate_one(als_path: &Path, out: Option<&Path>) -> Result<()> {
    let summary = summarize_path(als_path)
        .with_context(|| format!("Failed to read Live Set: {}", als_path.display()))?;

    let out_path = match out {
        Some(p) => p.to_path_buf(),
        None => sidecar_path(als_path),
    };
    fs::write(&out_path, summary)
        .with_context(|| format!("Failed to write summary: {}", out_path.display()))?;

    println!("Generated: {}", out_path.display());
    Ok(())
}

fn sidecar_path(als_path: &Path) -> PathBuf {
    let mut name = OsString::from(als_path.as_os_str());
    name.push(".txt");
    PathBuf::from(name)
}

/// The `.als` files directly inside `dir`, sorted by name so every run
/// processes them in the same order.
pub fn find_als_files(dir: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir))?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "als") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn run_all(dir: &str) -> Result<ExitCode> {
    let files = find_als_files(dir)?;
    if files.is_empty() {
        println!("No .als files found.");
        return Ok(ExitCode::from(0));
    }
    println!("Found {} .als file(s)", files.len());

    let mut success = 0usize;
    for path in &files {
        match generate_one(path, None) {
            Ok(()) => success += 1,
            Err(e) => eprintln!("Error processing {}: {:#}", path.display(), e),
        }
    }

    println!("\nGenerated {}/{} summaries", success, files.len());
    if success < files.len() {
        return Ok(ExitCode::from(2));
    }
    Ok(ExitCode::from(0))
}
