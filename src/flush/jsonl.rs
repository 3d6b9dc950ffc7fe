use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::model::Business;
use crate::sim::BusinessEngine;

pub const BUSINESSES_FILE: &str = "businesses.jsonl";

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Read a JSONL file, skipping blank lines.
fn read_jsonl<T: DeserializeOwned>(path: &Path) -> io::Result<Vec<T>> {
    let reader = BufReader::new(File::open(path)?);
    let mut items = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        items.push(serde_json::from_str(&line)?);
    }
    Ok(items)
}

/// Flush every business the engine owns to `businesses.jsonl` in `output_dir`,
/// one Business per line in id order.
///
/// Creates the output directory if it does not exist.
pub fn flush_to_jsonl(engine: &BusinessEngine, output_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;
    write_jsonl(&output_dir.join(BUSINESSES_FILE), engine.businesses())
}

/// Read businesses written by [`flush_to_jsonl`], ready for
/// [`BusinessEngine::restore`].
pub fn read_businesses(path: &Path) -> io::Result<Vec<Business>> {
    read_jsonl(path)
}
