//! `bmk convert` – write the Netscape bookmarks document.

use anyhow::Result;
use bmk_core::config::BmkConfig;
use bmk_core::convert::{convert, ConvertConfig};
use std::path::PathBuf;

/// Run the conversion. Flags override config-file values, which default to
/// the fixed paths and timestamp of the original tool.
pub fn run_convert(
    cfg: &BmkConfig,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    timestamp: Option<u64>,
) -> Result<()> {
    let convert_cfg = ConvertConfig {
        input: input.unwrap_or_else(|| cfg.input_path.clone()),
        output: output.unwrap_or_else(|| cfg.output_path.clone()),
        timestamp: timestamp.unwrap_or(cfg.timestamp),
    };
    let report = convert(&convert_cfg)?;
    println!(
        "{} entries ({} onion, {} renamed clearnet)",
        report.entries, report.onion, report.clearnet
    );
    Ok(())
}
