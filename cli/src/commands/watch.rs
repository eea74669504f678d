use super::generate;
use anyhow::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, SystemTime};

/// Poll `dir` for new or modified `.als` files and regenerate their sidecar
/// summaries. Runs until interrupted.
pub fn run(dir: &str, interval: u64) -> Result<ExitCode> {
    let shown = Path::new(dir)
        .canonicalize()
        .unwrap_or_else(|_| PathBuf::from(dir));
    println!("Watching for .als changes in {}", shown.display());
    println!("Press Ctrl+C to stop\n");

    let mut mtimes: HashMap<PathBuf, SystemTime> = HashMap::new();
    loop {
        for path in generate::find_als_files(dir)? {
            let Ok(mtime) = path.metadata().and_then(|m| m.modified()) else {
                continue;
            };
            let changed = match mtimes.get(&path) {
                None => true,
                Some(seen) => *seen < mtime,
            };
            if !changed {
                continue;
            }
            if mtimes.contains_key(&path) {
                println!("\nDetected change: {}", path.display());
            }
            if let Err(e) = generate::generate_one(&path, None) {
                eprintln!("Error processing {}: {:#}", path.display(), e);
            }
            mtimes.insert(path, mtime);
        }
        std::thread::sleep(Duration::from_secs(interval));
    }
}
