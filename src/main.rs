use anyhow::*;
use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

use quiz_99::cli::Cli;
use quiz_99::console::TerminalConsole;
use quiz_99::quiz;
use quiz_99::quiz::definition::QuestionBank;
use quiz_99::quiz::settings::Settings;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn play(settings: &Settings) -> Result<()> {
    let bank = QuestionBank::open(&settings.question_path, &settings.answer_path)
        .context("Could not load the quiz")?;
    let mut rng = rand::thread_rng();
    quiz::run(
        &bank,
        settings.question_count,
        &mut rng,
        TerminalConsole::stdio(),
    )
    .context("Could not run the quiz")?;
    Ok(())
}

fn main() {
    let settings: Settings = Cli::parse().into();
    init_logging();

    if let Err(e) = play(&settings) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
