use std::collections::HashSet;
use std::path::PathBuf;
use switchbind::derive::*;
use switchbind::Switches;

#[derive(Debug, Default, Switches)]
#[switches(prefix = "--")]
struct Archive {
    pub output: PathBuf,
    pub include: Option<Vec<PathBuf>>,
    pub exclude: HashSet<String>,
    pub level: Option<u8>,
    pub force: bool,
    // Not a switch.
    started: bool,
}

fn main() {
    let mut archive = Archive::from_env();
    archive.started = true;

    println!("Writing {:?} (force: {}).", archive.output, archive.force);

    for path in archive.include.iter().flatten() {
        println!("  + {path:?}");
    }

    let mut excluded: Vec<&String> = archive.exclude.iter().collect();
    excluded.sort();

    for pattern in excluded {
        println!("  - {pattern}");
    }

    println!("Compression level: {}", archive.level.unwrap_or(6));
    assert!(archive.started);
}
