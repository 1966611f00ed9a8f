use clap::Parser;
use std::path::PathBuf;

use crate::quiz::settings::*;

/// Ask a random selection of questions and score the answers.
#[derive(Parser, Debug)]
#[command(name = "quiz-99", version)]
pub struct Cli {
    /// File with one question per line
    #[arg(default_value = DEFAULT_QUESTION_FILE)]
    pub question_file: PathBuf,

    /// File with the answer to each question, on the matching line
    #[arg(default_value = DEFAULT_ANSWER_FILE)]
    pub answer_file: PathBuf,

    /// How many questions to ask
    #[arg(default_value_t = DEFAULT_QUESTION_COUNT)]
    pub count: usize,
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Settings {
            question_path: cli.question_file,
            answer_path: cli.answer_file,
            question_count: cli.count,
        }
    }
}
