use clap::{Parser, Subcommand};

pub mod inspect;
pub mod run;

#[derive(Parser)]
#[command(
    name = "drvault",
    version,
    about = "Convert captured Gemini Deep Research responses into cross-linked vault notes"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Process captured batch-execute files into vault notes
    Run(run::RunArgs),
    /// Show the frames and report candidates inside one capture file
    Inspect(inspect::InspectArgs),
}
