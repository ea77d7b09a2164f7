//! List command implementation.

use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;

/// Run the list command.
pub fn run_list(settings: Settings) -> Result<()> {
    let output_dir = settings.output_dir();

    if !output_dir.exists() {
        Output::info("No transcripts downloaded yet. Use 'hente fetch <playlist>' to add content.");
        return Ok(());
    }

    let mut files: Vec<(String, u64)> = std::fs::read_dir(&output_dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_name()
                .to_string_lossy()
                .ends_with(".txt")
        })
        .map(|entry| {
            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            (entry.file_name().to_string_lossy().to_string(), size)
        })
        .collect();
    files.sort();

    if files.is_empty() {
        Output::info("No transcripts downloaded yet. Use 'hente fetch <playlist>' to add content.");
        return Ok(());
    }

    Output::header(&format!("Downloaded Transcripts ({})", files.len()));
    println!();

    for (name, size) in &files {
        Output::transcript_info(name, *size);
    }

    let total_bytes: u64 = files.iter().map(|(_, size)| size).sum();
    println!();
    Output::kv("Directory", &output_dir.display().to_string());
    Output::kv("Total size", &format!("{} bytes", total_bytes));

    Ok(())
}
