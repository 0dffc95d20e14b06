//! `bmk check` – parse and classify the bookmark table, write nothing.

use anyhow::{Context, Result};
use bmk_core::classify::{self, UrlClass};
use bmk_core::config::BmkConfig;
use bmk_core::record;
use std::path::PathBuf;

pub fn run_check(cfg: &BmkConfig, input: Option<PathBuf>) -> Result<()> {
    let path = input.unwrap_or_else(|| cfg.input_path.clone());
    if !path.exists() {
        println!("input file {} not found", path.display());
        return Ok(());
    }

    let records = record::read_records(&path)
        .with_context(|| format!("read bookmark table {}", path.display()))?;
    if records.is_empty() {
        println!("No bookmarks in {}", path.display());
        return Ok(());
    }

    let mut onion = 0usize;
    let mut clearnet = 0usize;
    println!("{:<10} {:<30} {}", "CLASS", "NAME", "URL");
    for rec in &records {
        let class = classify::classify(&rec.url);
        match class {
            UrlClass::Onion => onion += 1,
            UrlClass::Clearnet => clearnet += 1,
        }
        println!(
            "{:<10} {:<30} {}",
            format!("{:?}", class).to_lowercase(),
            classify::display_name(&rec.name, &rec.url),
            rec.url
        );
    }
    println!(
        "{} entries ({} onion, {} clearnet)",
        records.len(),
        onion,
        clearnet
    );
    Ok(())
}
