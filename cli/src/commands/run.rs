use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use config::VaultConfig;
use pipeline::{Pipeline, discover_captures};

use crate::output;

#[derive(Args)]
pub struct RunArgs {
    #[arg(short, long, help = "Config file (TOML)")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Directory scanned for capture files")]
    pub input_dir: Option<PathBuf>,

    #[arg(long, help = "Target directory for Deep Research notes")]
    pub research_dir: Option<PathBuf>,

    #[arg(long, help = "Target directory for chat session notes")]
    pub chat_dir: Option<PathBuf>,
}

pub fn run(args: RunArgs) -> Result<()> {
    let base = match &args.config {
        Some(path) => config::load_from_file(path)?,
        None => VaultConfig::default(),
    };
    let config = base.with_overrides(args.input_dir, args.research_dir, args.chat_dir);
    config.validate()?;

    let files = discover_captures(&config.input_dir, &config.capture_suffix);
    if files.is_empty() {
        output::warn(&format!(
            "no *{} files under {}",
            config.capture_suffix,
            config.input_dir.display()
        ));
        return Ok(());
    }
    output::info(&format!("processing {} capture file(s)", files.len()));

    let summary = Pipeline::new(&config).run(&files)?;

    if summary.frames_skipped > 0 {
        output::info(&format!("{} frame(s) skipped", summary.frames_skipped));
    }
    output::success(&format!(
        "{} research note(s) and {} session note(s) written",
        summary.research_notes, summary.session_notes
    ));
    Ok(())
}
