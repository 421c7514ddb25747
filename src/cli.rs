use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "readiness",
    version,
    about = "Role-based CV readiness scoring and results CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Workspace holding readiness.toml and the premium store
    #[arg(long, global = true, default_value = ".")]
    pub dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Select a CV file and run the simulated scan
    Upload(UploadCommand),
    /// Score role form answers and print the results link
    Score(ScoreCommand),
    /// Render the results page for a query
    Results(ResultsCommand),
    /// Simulate a successful payment
    Pay,
    /// Show whether premium is unlocked
    Status,
    /// Application tracking board
    Board(BoardCommand),
    /// Benchmark position for a score
    Benchmark(BenchmarkCommand),
}

#[derive(Args)]
pub struct UploadCommand {
    pub file: PathBuf,
    /// Declared MIME type of the file
    #[arg(long)]
    pub mime: Option<String>,
    #[arg(long)]
    pub role: Option<String>,
    /// Treat the file as dropped instead of picked
    #[arg(long)]
    pub dropped: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SubmitFormat {
    Query,
    Json,
}

#[derive(Args)]
pub struct ScoreCommand {
    #[arg(long, default_value = "Scholarship")]
    pub role: String,
    /// TOML file with form answers
    #[arg(long)]
    pub answers: Option<PathBuf>,
    /// Override one answer, KEY=VALUE
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,
    /// Evaluation date, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub today: Option<String>,
    #[arg(short, long, value_enum, default_value = "query")]
    pub format: SubmitFormat,
}

#[derive(Args)]
pub struct ResultsCommand {
    /// Query string or link, e.g. `analysis?role=Internship&score=71`
    pub query: Option<String>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    #[arg(long)]
    pub today: Option<String>,
}

#[derive(Args)]
pub struct BoardCommand {
    #[command(subcommand)]
    pub action: BoardAction,
}

#[derive(Subcommand)]
pub enum BoardAction {
    /// Add one application card
    Add,
}

#[derive(Args)]
pub struct BenchmarkCommand {
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub score: Option<u8>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
