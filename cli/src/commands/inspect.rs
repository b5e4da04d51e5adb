use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use config::vault::DEFAULT_CAPTURE_SUFFIX;
use extract::{CaptureReader, locate_reports, parse_frames};
use notes::resolve_title;

use crate::output;

#[derive(Args)]
pub struct InspectArgs {
    #[arg(help = "Capture file to inspect")]
    pub file: PathBuf,

    #[arg(
        long,
        help = "Suffix used to derive the session name",
        default_value = DEFAULT_CAPTURE_SUFFIX
    )]
    pub capture_suffix: String,
}

pub fn run(args: InspectArgs) -> Result<()> {
    let reader = CaptureReader::new(args.capture_suffix);
    let capture = reader.describe(&args.file);

    output::header(capture.basename());
    println!("date:    {}", capture.date);
    println!("session: {}", capture.session_name);

    let body = match reader.read_body(&args.file) {
        Ok(body) => body,
        Err(e) => {
            output::warn(&e.to_string());
            return Ok(());
        }
    };

    let frames = parse_frames(&body);
    println!("frames:  {}", frames.len());

    for frame in &frames {
        match locate_reports(frame) {
            Ok(reports) => match reports.first() {
                Some(report) => {
                    println!(
                        "  frame #{}: report \"{}\" ({} chars, {} candidate(s))",
                        frame.index + 1,
                        resolve_title(report),
                        report.chars().count(),
                        reports.len()
                    );
                }
                None => println!("  frame #{}: no report candidate", frame.index + 1),
            },
            Err(e) => output::warn(&format!("frame #{}: {e}", frame.index + 1)),
        }
    }

    Ok(())
}
