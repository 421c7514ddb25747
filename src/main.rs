mod bridge;
mod cli;
mod config;
mod dashboard;
mod error;
mod form;
mod logging;
mod report;
mod results;
mod scoring;
mod types;
mod unlock;
mod upload;

use crate::error::ReadinessError;
use crate::unlock::storage::FileStore;
use crate::unlock::UnlockGate;
use chrono::NaiveDate;
use clap::Parser;
use std::time::Duration;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const REJECTED: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn resolve_today(raw: Option<&str>) -> Result<NaiveDate, ReadinessError> {
    match raw {
        Some(text) => scoring::extract::parse_date(text)
            .ok_or_else(|| ReadinessError::InvalidDate(text.to_string())),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn run() -> Result<i32, ReadinessError> {
    let cli = cli::Cli::parse();
    if !cli.dir.is_dir() {
        return Err(ReadinessError::PathNotFound(cli.dir.display().to_string()));
    }

    let loaded = config::load_config(&cli.dir)?;
    logging::init(cli.verbose, cli.quiet, loaded.log_level())?;

    let store = FileStore::in_root(&cli.dir, loaded.store_path());
    tracing::debug!(store = %store.path().display(), "using premium store");
    let mut gate = UnlockGate::new(store);

    match cli.command {
        cli::Commands::Upload(cmd) => {
            let candidate = upload::FileCandidate::from_path(&cmd.file, cmd.mime)?;
            let mut state = upload::UploadState::new();
            if cmd.dropped {
                state.on_drop(Some(candidate));
            } else {
                state.on_pick(Some(candidate));
            }

            if let Some(meta) = state.meta() {
                println!("{meta}");
            }
            if let Some(rejection) = state.error() {
                println!("{rejection}");
            }

            match state.scan(cmd.role.as_deref()) {
                Ok(request) => {
                    let delay = Duration::from_millis(loaded.scan_delay_ms());
                    println!("Scanning...");
                    let next = request.run(delay);
                    println!("next: {next}");
                    Ok(exit_code::SUCCESS)
                }
                Err(rejection) => {
                    println!("{rejection}");
                    Ok(exit_code::REJECTED)
                }
            }
        }
        cli::Commands::Score(cmd) => {
            let today = resolve_today(cmd.today.as_deref())?;
            let role = form::resolve_role(Some(&cmd.role));
            let mut answers = match &cmd.answers {
                Some(path) => form::FormAnswers::load(path)?,
                None => form::FormAnswers::new(),
            };
            for raw in &cmd.overrides {
                answers.apply_override(raw)?;
            }

            let ctx = form::submit(role, &answers, today, &loaded.red_flags());
            let link = bridge::results_link(&ctx);
            match cmd.format {
                cli::SubmitFormat::Query => println!("{link}"),
                cli::SubmitFormat::Json => {
                    println!("{}", report::json::submission_to_json(&ctx, &link)?)
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Results(cmd) => {
            let today = resolve_today(cmd.today.as_deref())?;
            let ctx = bridge::decode(cmd.query.as_deref().unwrap_or(""));
            let unlocked = gate.is_unlocked(ctx.unlocked_flag)?;
            let view = results::build_view(&ctx, unlocked, today);

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&view, output_format)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Pay => {
            if gate.set_unlocked()? {
                println!("Payment successful. Premium unlocked.");
            } else {
                println!("Premium is already active.");
            }
            println!("next: {}", bridge::unlocked_results_link());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Status => {
            if gate.persisted()? {
                println!("premium: unlocked");
            } else {
                println!("premium: locked");
            }
            let applications = dashboard::application_count(gate.store())?;
            println!("applications: {applications}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Board(cmd) => match cmd.action {
            cli::BoardAction::Add => {
                let unlocked = gate.persisted()?;
                match dashboard::add_application(gate.store_mut(), unlocked)? {
                    Ok(count) => {
                        println!("application added ({count} tracked)");
                        Ok(exit_code::SUCCESS)
                    }
                    Err(rejection) => {
                        println!("{rejection}");
                        Ok(exit_code::REJECTED)
                    }
                }
            }
        },
        cli::Commands::Benchmark(cmd) => {
            let unlocked = gate.persisted()?;
            let position = dashboard::benchmark(
                cmd.score.unwrap_or(bridge::DEFAULT_OVERALL),
                unlocked,
            );
            println!("{}", position.position);
            println!("{}", position.average);
            if let Some(link) = &position.unlock_link {
                println!("Unlock Premium for the full benchmark: {link}");
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
