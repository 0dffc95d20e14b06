//! One-shot conversion: read the bookmark table, rewrite display names,
//! write the Netscape bookmarks document.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::classify::{self, UrlClass};
use crate::record;
use crate::render;

/// Injected configuration for one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Path to the bookmark CSV (header with `name` and `url` columns).
    pub input: PathBuf,
    /// Path the bookmarks document is written to (overwritten if present).
    pub output: PathBuf,
    /// Unix-epoch seconds stamped on every entry and the toolbar folder.
    pub timestamp: u64,
}

/// Counts from a completed conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertReport {
    pub entries: usize,
    pub onion: usize,
    pub clearnet: usize,
    /// False when the input path did not exist and an empty document was
    /// written instead.
    pub input_found: bool,
}

/// Runs one conversion.
///
/// A missing input file is not an error: a diagnostic names the path and an
/// empty document is still written. A header missing `name` or `url`, or any
/// other read failure, aborts before the output file is touched. Concurrent
/// runs against the same output path are last-write-wins; no locking.
pub fn convert(cfg: &ConvertConfig) -> Result<ConvertReport> {
    let (records, input_found) = if cfg.input.exists() {
        let records = record::read_records(&cfg.input)
            .with_context(|| format!("read bookmark table {}", cfg.input.display()))?;
        (records, true)
    } else {
        println!("input file {} not found", cfg.input.display());
        tracing::warn!(
            "input file {} not found, writing empty document",
            cfg.input.display()
        );
        (Vec::new(), false)
    };

    let mut onion = 0usize;
    let mut clearnet = 0usize;
    let mut lines = Vec::with_capacity(records.len());
    for rec in &records {
        match classify::classify(&rec.url) {
            UrlClass::Onion => onion += 1,
            UrlClass::Clearnet => clearnet += 1,
        }
        let name = classify::display_name(&rec.name, &rec.url);
        lines.push(render::entry_line(&name, &rec.url, cfg.timestamp));
    }

    let document = render::document(&lines, cfg.timestamp);
    fs::write(&cfg.output, document)
        .with_context(|| format!("write bookmarks file {}", cfg.output.display()))?;
    println!("bookmarks file saved as {}", cfg.output.display());
    tracing::info!(
        "wrote {} entries ({} onion, {} clearnet) to {}",
        lines.len(),
        onion,
        clearnet,
        cfg.output.display()
    );

    Ok(ConvertReport {
        entries: lines.len(),
        onion,
        clearnet,
        input_found,
    })
}
