use std::path::PathBuf;

pub const DEFAULT_QUESTION_FILE: &str = "questions.txt";
pub const DEFAULT_ANSWER_FILE: &str = "answers.txt";
pub const DEFAULT_QUESTION_COUNT: usize = 10;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settings {
    pub question_path: PathBuf,
    pub answer_path: PathBuf,
    pub question_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            question_path: PathBuf::from(DEFAULT_QUESTION_FILE),
            answer_path: PathBuf::from(DEFAULT_ANSWER_FILE),
            question_count: DEFAULT_QUESTION_COUNT,
        }
    }
}
